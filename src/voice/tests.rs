//! Unit tests for voice command matching with customizations.

use super::*;

fn empty() -> LocalizedPatterns {
    LocalizedPatterns { nl: &[], en: &[], de: &[], fr: &[], es: &[] }
}

fn nl(patterns: &'static [&'static str]) -> LocalizedPatterns {
    LocalizedPatterns { nl: patterns, ..empty() }
}

#[test]
fn test_next_in_dutch() {
    let settings = VoiceSettings::default();
    let command = find_command_by_pattern("volgende", Language::Nl, &settings).unwrap();
    assert_eq!(command.id, "list_next");
    assert_eq!(command.action, CommandAction::FocusNext);
    assert_eq!(command.action.as_str(), "focusNext");
}

#[test]
fn test_call_with_name() {
    let settings = VoiceSettings::default();
    let m = match_command("bel oma", Language::Nl, &settings).unwrap();
    assert_eq!(m.command.id, "action_call");
    assert_eq!(m.command.action.as_str(), "call");
    assert_eq!(m.pattern, "bel");
    assert_eq!(m.argument.as_deref(), Some("oma"));
}

#[test]
fn test_gibberish_has_no_match() {
    let settings = VoiceSettings::default();
    for lang in Language::ALL {
        assert!(find_command_by_pattern("xyz123", lang, &settings).is_none());
    }
}

#[test]
fn test_stop_survives_disable() {
    let mut settings = VoiceSettings::default();
    settings.customizations.insert(
        "session_stop".to_string(),
        VoiceCommandCustomization::new("session_stop").enabled(false),
    );

    let command = find_command_by_pattern("stop", Language::Nl, &settings).unwrap();
    assert_eq!(command.id, "session_stop");
}

#[test]
fn test_swapped_synonym() {
    let mut settings = VoiceSettings::default();
    settings.customizations.insert(
        "media_play".to_string(),
        VoiceCommandCustomization::new("media_play")
            .with_custom_pattern("ga")
            .with_disabled_pattern("speel"),
    );

    assert!(find_command_by_pattern("speel", Language::Nl, &settings).is_none());
    assert_eq!(find_command_by_pattern("ga", Language::Nl, &settings).unwrap().id, "media_play");
    // The other default phrases still work
    assert_eq!(find_command_by_pattern("afspelen", Language::Nl, &settings).unwrap().id, "media_play");
}

#[test]
fn test_case_and_whitespace_are_ignored() {
    let settings = VoiceSettings::default();
    assert_eq!(
        find_command_by_pattern("  VOLGENDE \n", Language::Nl, &settings).unwrap().id,
        "list_next"
    );
}

#[test]
fn test_word_boundary() {
    let settings = VoiceSettings::default();
    assert!(find_command_by_pattern("bellen", Language::Nl, &settings).is_none());
    assert_eq!(find_command_by_pattern("bel oma", Language::Nl, &settings).unwrap().id, "action_call");
    // "berichten" opens the chats, "bericht oma" messages Oma
    assert_eq!(find_command_by_pattern("berichten", Language::Nl, &settings).unwrap().id, "nav_chats");
    assert_eq!(find_command_by_pattern("bericht oma", Language::Nl, &settings).unwrap().id, "action_message");
}

#[test]
fn test_first_command_in_catalog_order_wins() {
    let catalog = Catalog::new(vec![
        VoiceCommand::new("late", CommandCategory::Media, CommandAction::Play, 50, nl(&["start"])),
        VoiceCommand::new("early", CommandCategory::List, CommandAction::Select, 10, nl(&["start"])),
    ]);
    let settings = VoiceSettings::default();

    assert_eq!(catalog.find_by_pattern("start", Language::Nl, &settings).unwrap().id, "early");
    assert_eq!(catalog.find_by_pattern("start nu", Language::Nl, &settings).unwrap().id, "early");

    // With the earlier command switched off the later one becomes reachable
    let mut settings = VoiceSettings::default();
    settings
        .customizations
        .insert("early".to_string(), VoiceCommandCustomization::new("early").enabled(false));
    assert_eq!(catalog.find_by_pattern("start", Language::Nl, &settings).unwrap().id, "late");
}

#[test]
fn test_disabled_command_never_matches() {
    let mut settings = VoiceSettings::default();
    settings.set_command_enabled("action_call", false).unwrap();

    for text in ["bel", "bel oma", "bel naar jan"] {
        assert!(find_command_by_pattern(text, Language::Nl, &settings).is_none(), "{}", text);
    }
}

#[test]
fn test_disabled_by_default_command() {
    let catalog = Catalog::new(vec![
        VoiceCommand::new("extra", CommandCategory::Action, CommandAction::Call, 10, nl(&["video"]))
            .disabled_by_default(),
    ]);
    let mut settings = VoiceSettings::default();
    assert!(catalog.find_by_pattern("video", Language::Nl, &settings).is_none());

    settings
        .customizations
        .insert("extra".to_string(), VoiceCommandCustomization::new("extra").enabled(true));
    assert!(catalog.find_by_pattern("video", Language::Nl, &settings).is_some());
}

#[test]
fn test_language_selects_phrase_table() {
    let settings = VoiceSettings::default();
    assert_eq!(find_command_by_pattern("next", Language::En, &settings).unwrap().id, "list_next");
    assert!(find_command_by_pattern("next", Language::Nl, &settings).is_none());
    assert_eq!(find_command_by_pattern("weiter", Language::De, &settings).unwrap().id, "list_next");
    assert_eq!(find_command_by_pattern("suivant", Language::Fr, &settings).unwrap().id, "list_next");
    assert_eq!(find_command_by_pattern("siguiente", Language::Es, &settings).unwrap().id, "list_next");
}

#[test]
fn test_synonym_added_through_settings_matches() {
    let mut settings = VoiceSettings::default();
    settings.add_custom_pattern("list_next", "  Ga  Door ").unwrap();

    assert_eq!(find_command_by_pattern("Ga door", Language::Nl, &settings).unwrap().id, "list_next");
    // Custom synonyms are language independent
    assert_eq!(find_command_by_pattern("ga door", Language::Fr, &settings).unwrap().id, "list_next");
}

#[test]
fn test_verbatim_mixed_case_synonym_does_not_match() {
    // Stored phrases are compared verbatim; only the settings screen
    // (and loading) normalizes them.
    let mut settings = VoiceSettings::default();
    settings.customizations.insert(
        "list_next".to_string(),
        VoiceCommandCustomization::new("list_next").with_custom_pattern("Door"),
    );
    assert!(find_command_by_pattern("door", Language::Nl, &settings).is_none());

    settings.normalize();
    assert_eq!(find_command_by_pattern("door", Language::Nl, &settings).unwrap().id, "list_next");
}

#[test]
fn test_orphaned_customization_is_ignored() {
    let mut settings = VoiceSettings::default();
    settings.customizations.insert(
        "removed_in_update".to_string(),
        VoiceCommandCustomization::new("removed_in_update").with_custom_pattern("volgende"),
    );

    assert_eq!(find_command_by_pattern("volgende", Language::Nl, &settings).unwrap().id, "list_next");
}

#[test]
fn test_no_default_phrase_is_shadowed() {
    let settings = VoiceSettings::default();
    for lang in Language::ALL {
        for command in catalog().commands() {
            for pattern in command.default_patterns.get(lang) {
                let found = find_command_by_pattern(pattern, lang, &settings).unwrap();
                assert_eq!(found.id, command.id, "'{}' ({}) is shadowed by {}", pattern, lang, found.id);
            }
        }
    }
}
