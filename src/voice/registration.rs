//! Registration of voice-controllable form fields and contact actions
//!
//! Screens register the fields and actions they offer; the voice session
//! hands every matched command to [`VoiceDispatcher::dispatch`], which routes
//! form and contact actions to the right registration and forwards
//! everything else (navigation, lists, media, session) to the caller.

use std::fmt;

use super::command::CommandAction;
use super::fuzzy::find_best_name;
use super::matcher::CommandMatch;
use super::settings::VoiceSettings;

type Callback = Box<dyn Fn() + Send + Sync>;
type TextCallback = Box<dyn Fn(&str) + Send + Sync>;

/// A form field that can be edited, cleared or dictated into by voice
pub struct VoiceFormField {
    pub id: String,
    /// Spoken name of the field ("naam", "bericht")
    pub label: String,
    on_edit: Callback,
    on_clear: Callback,
    on_dictate: TextCallback,
}

impl VoiceFormField {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        on_edit: impl Fn() + Send + Sync + 'static,
        on_clear: impl Fn() + Send + Sync + 'static,
        on_dictate: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            on_edit: Box::new(on_edit),
            on_clear: Box::new(on_clear),
            on_dictate: Box::new(on_dictate),
        }
    }
}

impl fmt::Debug for VoiceFormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceFormField")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A target for contact actions (usually one contact row)
pub struct VoiceAction {
    pub id: String,
    /// Spoken name of the target ("Oma de Vries")
    pub label: String,
    on_call: Option<Callback>,
    on_message: Option<Callback>,
    on_delete: Option<Callback>,
}

impl VoiceAction {
    /// Create an action target without any handlers
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            on_call: None,
            on_message: None,
            on_delete: None,
        }
    }

    pub fn on_call(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_call = Some(Box::new(callback));
        self
    }

    pub fn on_message(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_message = Some(Box::new(callback));
        self
    }

    pub fn on_delete(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_delete = Some(Box::new(callback));
        self
    }

    fn handler(&self, action: CommandAction) -> Option<&Callback> {
        match action {
            CommandAction::Call => self.on_call.as_ref(),
            CommandAction::Message => self.on_message.as_ref(),
            CommandAction::Delete => self.on_delete.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Debug for VoiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceAction")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("on_call", &self.on_call.is_some())
            .field("on_message", &self.on_message.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .finish()
    }
}

/// Result of dispatching a matched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A registered field or action handled the command
    Handled { action: CommandAction, target_id: String },
    /// Not a field/contact action; the caller's controllers handle it
    Forward(CommandAction),
    /// No field or action could be resolved as target
    NoTarget(CommandAction),
    /// The target exists but has no handler for this action
    Unsupported { action: CommandAction, target_id: String },
}

/// Registry of the fields and actions on the current screen
#[derive(Debug, Default)]
pub struct VoiceDispatcher {
    fields: Vec<VoiceFormField>,
    actions: Vec<VoiceAction>,
    focused_field: Option<String>,
    focused_action: Option<String>,
}

impl VoiceDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field; a field with the same id is replaced in place
    pub fn register_field(&mut self, field: VoiceFormField) {
        match self.fields.iter_mut().find(|f| f.id == field.id) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    pub fn unregister_field(&mut self, id: &str) -> bool {
        if self.focused_field.as_deref() == Some(id) {
            self.focused_field = None;
        }
        let before = self.fields.len();
        self.fields.retain(|f| f.id != id);
        self.fields.len() != before
    }

    /// Register an action target; one with the same id is replaced in place
    pub fn register_action(&mut self, action: VoiceAction) {
        match self.actions.iter_mut().find(|a| a.id == action.id) {
            Some(existing) => *existing = action,
            None => self.actions.push(action),
        }
    }

    pub fn unregister_action(&mut self, id: &str) -> bool {
        if self.focused_action.as_deref() == Some(id) {
            self.focused_action = None;
        }
        let before = self.actions.len();
        self.actions.retain(|a| a.id != id);
        self.actions.len() != before
    }

    /// Focus a registered field. Returns `false` for unknown ids.
    pub fn focus_field(&mut self, id: &str) -> bool {
        if self.fields.iter().any(|f| f.id == id) {
            self.focused_field = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Focus a registered action target. Returns `false` for unknown ids.
    pub fn focus_action(&mut self, id: &str) -> bool {
        if self.actions.iter().any(|a| a.id == id) {
            self.focused_action = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn fields(&self) -> &[VoiceFormField] {
        &self.fields
    }

    pub fn actions(&self) -> &[VoiceAction] {
        &self.actions
    }

    /// A spoken name must resolve on its own; focus only stands in when no name was said
    fn resolve_field(&self, argument: Option<&str>, settings: &VoiceSettings) -> Option<&VoiceFormField> {
        if let Some(name) = argument {
            let labels: Vec<&str> = self.fields.iter().map(|f| f.label.as_str()).collect();
            let m = find_best_name(name, &labels, settings)?;
            return self.fields.get(m.index);
        }
        let focused = self.focused_field.as_deref()?;
        self.fields.iter().find(|f| f.id == focused)
    }

    /// A spoken name must resolve on its own; focus only stands in when no name was said
    fn resolve_action(&self, argument: Option<&str>, settings: &VoiceSettings) -> Option<&VoiceAction> {
        if let Some(name) = argument {
            let labels: Vec<&str> = self.actions.iter().map(|a| a.label.as_str()).collect();
            let m = find_best_name(name, &labels, settings)?;
            return self.actions.get(m.index);
        }
        let focused = self.focused_action.as_deref()?;
        self.actions.iter().find(|a| a.id == focused)
    }

    /// Route a matched command to the field or action it targets.
    ///
    /// For `edit` and `clear` the argument names the field; for `dictate`
    /// the argument is the text and the focused field receives it. Contact
    /// actions resolve their target from the argument. The focused field or
    /// action is used only when no name was spoken; a name that matches
    /// nothing yields `NoTarget`.
    pub fn dispatch(&self, matched: &CommandMatch<'_>, settings: &VoiceSettings) -> DispatchOutcome {
        let action = matched.command.action;
        let argument = matched.argument.as_deref();

        let outcome = match action {
            CommandAction::Edit | CommandAction::Clear => match self.resolve_field(argument, settings) {
                Some(field) => {
                    if action == CommandAction::Edit {
                        (field.on_edit)();
                    } else {
                        (field.on_clear)();
                    }
                    DispatchOutcome::Handled { action, target_id: field.id.clone() }
                }
                None => DispatchOutcome::NoTarget(action),
            },
            CommandAction::Dictate => match self.resolve_field(None, settings) {
                Some(field) => {
                    (field.on_dictate)(matched.argument_or_empty());
                    DispatchOutcome::Handled { action, target_id: field.id.clone() }
                }
                None => DispatchOutcome::NoTarget(action),
            },
            CommandAction::Call | CommandAction::Message | CommandAction::Delete => {
                match self.resolve_action(argument, settings) {
                    Some(target) => match target.handler(action) {
                        Some(handler) => {
                            handler();
                            DispatchOutcome::Handled { action, target_id: target.id.clone() }
                        }
                        None => DispatchOutcome::Unsupported { action, target_id: target.id.clone() },
                    },
                    None => DispatchOutcome::NoTarget(action),
                }
            }
            other => DispatchOutcome::Forward(other),
        };

        tracing::debug!("Dispatched {} -> {:?}", action, outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::voice::{match_command, Language};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> Box<dyn Fn() + Send + Sync>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_for_make = log.clone();
        let make = move |event: &str| -> Box<dyn Fn() + Send + Sync> {
            let log = log_for_make.clone();
            let event = event.to_string();
            Box::new(move || log.lock().unwrap().push(event.clone()))
        };
        (log, make)
    }

    #[test]
    fn test_call_routes_to_named_contact() {
        let settings = VoiceSettings::default();
        let (log, make) = recorder();

        let mut dispatcher = VoiceDispatcher::new();
        dispatcher.register_action(VoiceAction::new("c1", "Oma de Vries").on_call(make("call oma")));
        dispatcher.register_action(VoiceAction::new("c2", "Jan Jansen").on_call(make("call jan")));

        let matched = match_command("bel Jan", Language::Nl, &settings).unwrap();
        let outcome = dispatcher.dispatch(&matched, &settings);

        assert_eq!(
            outcome,
            DispatchOutcome::Handled { action: CommandAction::Call, target_id: "c2".to_string() }
        );
        assert_eq!(*log.lock().unwrap(), vec!["call jan".to_string()]);
    }

    #[test]
    fn test_call_without_name_uses_focus() {
        let settings = VoiceSettings::default();
        let (log, make) = recorder();

        let mut dispatcher = VoiceDispatcher::new();
        dispatcher.register_action(VoiceAction::new("c1", "Oma").on_call(make("call oma")));

        let matched = match_command("bel", Language::Nl, &settings).unwrap();
        assert_eq!(dispatcher.dispatch(&matched, &settings), DispatchOutcome::NoTarget(CommandAction::Call));

        assert!(dispatcher.focus_action("c1"));
        assert!(matches!(dispatcher.dispatch(&matched, &settings), DispatchOutcome::Handled { .. }));
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_name_never_falls_back_to_focus() {
        let settings = VoiceSettings::default();
        let (log, make) = recorder();

        let mut dispatcher = VoiceDispatcher::new();
        dispatcher.register_action(
            VoiceAction::new("oma", "Oma de Vries")
                .on_call(make("call oma"))
                .on_delete(make("delete oma")),
        );
        assert!(dispatcher.focus_action("oma"));

        for (transcript, action) in [("bel Piet", CommandAction::Call), ("verwijder Piet", CommandAction::Delete)] {
            let matched = match_command(transcript, Language::Nl, &settings).unwrap();
            assert_eq!(dispatcher.dispatch(&matched, &settings), DispatchOutcome::NoTarget(action));
        }
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_field_label_never_falls_back_to_focus() {
        let settings = VoiceSettings::default();
        let (log, make) = recorder();
        let clear_name = make("clear name");

        let mut dispatcher = VoiceDispatcher::new();
        dispatcher.register_field(VoiceFormField::new("name", "naam", || {}, move || clear_name(), |_| {}));
        dispatcher.focus_field("name");

        let matched = match_command("wis telefoonnummer", Language::Nl, &settings).unwrap();
        assert_eq!(dispatcher.dispatch(&matched, &settings), DispatchOutcome::NoTarget(CommandAction::Clear));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_missing_handler_is_unsupported() {
        let settings = VoiceSettings::default();
        let mut dispatcher = VoiceDispatcher::new();
        dispatcher.register_action(VoiceAction::new("c1", "Oma"));

        let matched = match_command("verwijder oma", Language::Nl, &settings).unwrap();
        assert_eq!(
            dispatcher.dispatch(&matched, &settings),
            DispatchOutcome::Unsupported { action: CommandAction::Delete, target_id: "c1".to_string() }
        );
    }

    #[test]
    fn test_dictate_goes_to_focused_field() {
        let settings = VoiceSettings::default();
        let dictated = Arc::new(Mutex::new(String::new()));
        let sink = dictated.clone();

        let mut dispatcher = VoiceDispatcher::new();
        dispatcher.register_field(VoiceFormField::new(
            "message",
            "bericht",
            || {},
            || {},
            move |text| *sink.lock().unwrap() = text.to_string(),
        ));
        dispatcher.focus_field("message");

        let matched = match_command("dicteer Tot Morgen", Language::Nl, &settings).unwrap();
        assert!(matches!(dispatcher.dispatch(&matched, &settings), DispatchOutcome::Handled { .. }));
        assert_eq!(*dictated.lock().unwrap(), "Tot Morgen");
    }

    #[test]
    fn test_clear_names_field_by_label() {
        let settings = VoiceSettings::default();
        let (log, make) = recorder();
        let clear_name = make("clear name");
        let clear_city = make("clear city");

        let mut dispatcher = VoiceDispatcher::new();
        dispatcher.register_field(VoiceFormField::new("name", "naam", || {}, move || clear_name(), |_| {}));
        dispatcher.register_field(VoiceFormField::new("city", "woonplaats", || {}, move || clear_city(), |_| {}));

        let matched = match_command("wis woonplaats", Language::Nl, &settings).unwrap();
        dispatcher.dispatch(&matched, &settings);
        assert_eq!(*log.lock().unwrap(), vec!["clear city".to_string()]);
    }

    #[test]
    fn test_other_actions_are_forwarded() {
        let settings = VoiceSettings::default();
        let dispatcher = VoiceDispatcher::new();

        let matched = match_command("volgende", Language::Nl, &settings).unwrap();
        assert_eq!(dispatcher.dispatch(&matched, &settings), DispatchOutcome::Forward(CommandAction::FocusNext));
    }

    #[test]
    fn test_register_replaces_and_unregister_clears_focus() {
        let mut dispatcher = VoiceDispatcher::new();
        dispatcher.register_action(VoiceAction::new("c1", "Oma"));
        dispatcher.register_action(VoiceAction::new("c1", "Opa"));
        assert_eq!(dispatcher.actions().len(), 1);
        assert_eq!(dispatcher.actions()[0].label, "Opa");

        dispatcher.focus_action("c1");
        assert!(dispatcher.unregister_action("c1"));
        assert!(!dispatcher.focus_action("c1"));
        assert!(!dispatcher.unregister_action("c1"));
    }
}
