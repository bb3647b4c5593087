//! Effective phrases and enablement of a command after customization

use super::command::VoiceCommand;
use super::customization::VoiceCommandCustomization;
use super::language::Language;

/// Effective phrases of a command in a language.
///
/// Starts from the command's defaults for `language`, drops every phrase the
/// user switched off (whatever language it came from) and appends the
/// user's own phrases in the order they were added. Without a customization
/// the defaults are returned as-is. The result is always a fresh copy.
pub fn get_command_patterns(
    command: &VoiceCommand,
    language: Language,
    customization: Option<&VoiceCommandCustomization>,
) -> Vec<String> {
    let defaults = command.default_patterns.get(language);

    let Some(custom) = customization else {
        return defaults.iter().map(|p| p.to_string()).collect();
    };

    defaults
        .iter()
        .filter(|p| !custom.disabled_patterns.iter().any(|d| d == *p))
        .map(|p| p.to_string())
        .chain(custom.custom_patterns.iter().cloned())
        .collect()
}

/// Whether a command takes part in matching.
///
/// Commands that cannot be disabled are always enabled, whatever the stored
/// customization says.
pub fn is_command_enabled(command: &VoiceCommand, customization: Option<&VoiceCommandCustomization>) -> bool {
    if !command.can_disable {
        return true;
    }
    customization.map_or(command.is_enabled, |c| c.is_enabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::{catalog, command_by_id};

    #[test]
    fn test_passthrough_without_customization() {
        for command in catalog().commands() {
            for lang in Language::ALL {
                let resolved = get_command_patterns(command, lang, None);
                let defaults: Vec<String> =
                    command.default_patterns.get(lang).iter().map(|p| p.to_string()).collect();
                assert_eq!(resolved, defaults);
            }
        }
    }

    #[test]
    fn test_layering_removes_then_appends() {
        let play = command_by_id("media_play").unwrap();
        let custom = VoiceCommandCustomization::new("media_play")
            .with_disabled_pattern("speel")
            .with_custom_pattern("ga")
            .with_custom_pattern("muziek aan");

        assert_eq!(
            get_command_patterns(play, Language::Nl, Some(&custom)),
            vec!["afspelen", "speel af", "ga", "muziek aan"]
        );
    }

    #[test]
    fn test_custom_patterns_apply_in_every_language() {
        let call = command_by_id("action_call").unwrap();
        // A French synonym added while the interface is Dutch
        let custom = VoiceCommandCustomization::new("action_call").with_custom_pattern("appelle");

        let en = get_command_patterns(call, Language::En, Some(&custom));
        assert_eq!(en, vec!["call", "phone", "appelle"]);
    }

    #[test]
    fn test_disabled_pattern_from_other_language() {
        let pause = command_by_id("media_pause").unwrap();
        // "pause" is the English default; disabling it also hits the German list
        let custom = VoiceCommandCustomization::new("media_pause").with_disabled_pattern("pause");

        assert_eq!(get_command_patterns(pause, Language::De, Some(&custom)), vec!["pausieren"]);
        assert!(get_command_patterns(pause, Language::En, Some(&custom)).is_empty());
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let next = command_by_id("list_next").unwrap();
        let custom = VoiceCommandCustomization::new("list_next").with_custom_pattern("door");

        let first = get_command_patterns(next, Language::Nl, Some(&custom));
        let second = get_command_patterns(next, Language::Nl, Some(&custom));
        assert_eq!(first, second);
    }

    #[test]
    fn test_essential_commands_ignore_disable() {
        for command in catalog().commands().iter().filter(|c| !c.can_disable) {
            let off = VoiceCommandCustomization::new(command.id).enabled(false);
            assert!(is_command_enabled(command, Some(&off)), "{} was disabled", command.id);
            assert!(is_command_enabled(command, None));
        }
    }

    #[test]
    fn test_disableable_command_follows_customization() {
        let play = command_by_id("media_play").unwrap();
        assert!(is_command_enabled(play, None));
        assert!(!is_command_enabled(play, Some(&VoiceCommandCustomization::new("media_play").enabled(false))));

        let off_by_default = play.clone().disabled_by_default();
        assert!(!is_command_enabled(&off_by_default, None));
        assert!(is_command_enabled(&off_by_default, Some(&VoiceCommandCustomization::new("media_play"))));
    }
}
