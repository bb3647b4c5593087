//! Built-in command catalog
//!
//! The catalog is the fixed list of commands that ships with the app. It is
//! ordered by `priority` (ties keep declaration order), and that order is the
//! order in which the matcher tries commands: when two commands share a
//! phrase, the one with the lower priority value wins.
//!
//! Phrases are authored lowercase without surrounding whitespace. Keep them
//! free of accidental shadowing: a phrase that is a whole-word prefix of a
//! later command's phrase (e.g. "next" before "next track") makes the later
//! phrase unreachable.

use once_cell::sync::Lazy;

use super::command::{CommandAction, CommandCategory, LocalizedPatterns, VoiceCommand};

/// An ordered, immutable set of voice commands
#[derive(Debug, Clone)]
pub struct Catalog {
    commands: Vec<VoiceCommand>,
}

impl Catalog {
    /// Build a catalog, ordering commands by priority.
    ///
    /// The sort is stable, so commands with equal priority keep the order
    /// they were given in.
    pub fn new(mut commands: Vec<VoiceCommand>) -> Self {
        commands.sort_by_key(|c| c.priority);
        Self { commands }
    }

    /// All commands in match order
    pub fn commands(&self) -> &[VoiceCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Look up a command by id
    pub fn get(&self, id: &str) -> Option<&VoiceCommand> {
        self.commands.iter().find(|c| c.id == id)
    }

    /// Commands of one category, in catalog order
    pub fn by_category(&self, category: CommandCategory) -> Vec<&VoiceCommand> {
        self.commands
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::new(builtin_commands()));

/// The catalog shipped with the app
pub fn catalog() -> &'static Catalog {
    &BUILTIN
}

/// Built-in commands of one category, in catalog order
pub fn commands_by_category(category: CommandCategory) -> Vec<&'static VoiceCommand> {
    catalog().by_category(category)
}

/// Look up a built-in command by id
pub fn command_by_id(id: &str) -> Option<&'static VoiceCommand> {
    catalog().get(id)
}

fn builtin_commands() -> Vec<VoiceCommand> {
    use CommandAction as A;
    use CommandCategory as C;

    vec![
        // Session and confirmation commands come first and cannot be
        // disabled: the user must always be able to stop, ask for help,
        // confirm or cancel.
        VoiceCommand::new(
            "session_stop",
            C::Session,
            A::StopSession,
            10,
            LocalizedPatterns {
                nl: &["stop", "stoppen", "klaar"],
                en: &["stop", "done", "finished"],
                de: &["stopp", "stop", "fertig"],
                fr: &["arrête", "stop", "terminé"],
                es: &["detener", "parar", "terminado"],
            },
        )
        .essential(),
        VoiceCommand::new(
            "session_help",
            C::Session,
            A::Help,
            20,
            LocalizedPatterns {
                nl: &["help", "hulp"],
                en: &["help"],
                de: &["hilfe"],
                fr: &["aide"],
                es: &["ayuda"],
            },
        )
        .essential(),
        VoiceCommand::new(
            "confirm_yes",
            C::Confirmation,
            A::Confirm,
            30,
            LocalizedPatterns {
                nl: &["ja", "bevestig", "oké"],
                en: &["yes", "confirm", "okay"],
                de: &["ja", "bestätigen", "okay"],
                fr: &["oui", "confirmer", "d'accord"],
                es: &["sí", "confirmar", "vale"],
            },
        )
        .essential(),
        VoiceCommand::new(
            "confirm_no",
            C::Confirmation,
            A::Cancel,
            40,
            LocalizedPatterns {
                nl: &["nee", "annuleer", "annuleren"],
                en: &["no", "cancel"],
                de: &["nein", "abbrechen"],
                fr: &["non", "annuler"],
                es: &["no", "cancelar"],
            },
        )
        .essential(),
        // Navigation
        VoiceCommand::new(
            "nav_back",
            C::Navigation,
            A::NavigateBack,
            100,
            LocalizedPatterns {
                nl: &["terug", "ga terug"],
                en: &["back", "go back"],
                de: &["zurück", "geh zurück"],
                fr: &["retour", "reviens"],
                es: &["atrás", "volver"],
            },
        ),
        VoiceCommand::new(
            "nav_home",
            C::Navigation,
            A::NavigateHome,
            110,
            LocalizedPatterns {
                nl: &["home", "startscherm"],
                en: &["home", "home screen"],
                de: &["startseite"],
                fr: &["accueil"],
                es: &["inicio"],
            },
        ),
        VoiceCommand::new(
            "nav_chats",
            C::Navigation,
            A::OpenChats,
            120,
            LocalizedPatterns {
                nl: &["berichten", "chats"],
                en: &["messages", "chats"],
                de: &["nachrichten", "chats"],
                fr: &["messages", "discussions"],
                es: &["mensajes", "chats"],
            },
        ),
        VoiceCommand::new(
            "nav_contacts",
            C::Navigation,
            A::OpenContacts,
            130,
            LocalizedPatterns {
                nl: &["contacten"],
                en: &["contacts"],
                de: &["kontakte"],
                fr: &["contacts"],
                es: &["contactos"],
            },
        ),
        VoiceCommand::new(
            "nav_settings",
            C::Navigation,
            A::OpenSettings,
            140,
            LocalizedPatterns {
                nl: &["instellingen"],
                en: &["settings"],
                de: &["einstellungen"],
                fr: &["paramètres", "réglages"],
                es: &["ajustes", "configuración"],
            },
        ),
        // List
        VoiceCommand::new(
            "list_next",
            C::List,
            A::FocusNext,
            200,
            LocalizedPatterns {
                nl: &["volgende", "verder"],
                en: &["next"],
                de: &["nächste", "weiter"],
                fr: &["suivant"],
                es: &["siguiente"],
            },
        ),
        VoiceCommand::new(
            "list_previous",
            C::List,
            A::FocusPrevious,
            210,
            LocalizedPatterns {
                nl: &["vorige"],
                en: &["previous"],
                de: &["vorherige"],
                fr: &["précédent"],
                es: &["anterior"],
            },
        ),
        VoiceCommand::new(
            "list_select",
            C::List,
            A::Select,
            220,
            LocalizedPatterns {
                nl: &["open", "kies", "selecteer"],
                en: &["open", "select", "choose"],
                de: &["öffnen", "auswählen"],
                fr: &["ouvrir", "choisir"],
                es: &["abrir", "elegir"],
            },
        ),
        // Form
        VoiceCommand::new(
            "form_edit",
            C::Form,
            A::Edit,
            300,
            LocalizedPatterns {
                nl: &["wijzig", "bewerk", "pas aan"],
                en: &["edit", "change"],
                de: &["ändern", "bearbeiten"],
                fr: &["modifier"],
                es: &["editar", "cambiar"],
            },
        ),
        VoiceCommand::new(
            "form_clear",
            C::Form,
            A::Clear,
            310,
            LocalizedPatterns {
                nl: &["wis", "leegmaken"],
                en: &["clear", "erase"],
                de: &["leeren"],
                fr: &["effacer"],
                es: &["borrar"],
            },
        ),
        VoiceCommand::new(
            "form_dictate",
            C::Form,
            A::Dictate,
            320,
            LocalizedPatterns {
                nl: &["dicteer", "typ"],
                en: &["dictate", "type"],
                de: &["diktieren", "schreibe"],
                fr: &["dicter", "écris"],
                es: &["dictar", "escribe"],
            },
        ),
        VoiceCommand::new(
            "form_send",
            C::Form,
            A::Send,
            330,
            LocalizedPatterns {
                nl: &["verstuur", "verzend"],
                en: &["send"],
                de: &["senden", "abschicken"],
                fr: &["envoyer", "envoie"],
                es: &["enviar", "envía"],
            },
        ),
        // Contact actions
        VoiceCommand::new(
            "action_call",
            C::Action,
            A::Call,
            400,
            LocalizedPatterns {
                nl: &["bel", "bel naar"],
                en: &["call", "phone"],
                de: &["anrufen", "rufe", "ruf"],
                fr: &["appeler", "appelle"],
                es: &["llamar", "llama", "llama a"],
            },
        ),
        VoiceCommand::new(
            "action_message",
            C::Action,
            A::Message,
            410,
            LocalizedPatterns {
                nl: &["bericht", "bericht aan", "stuur bericht"],
                en: &["message", "text"],
                de: &["nachricht", "nachricht an"],
                fr: &["message", "message à", "écrire à"],
                es: &["mensaje", "mensaje a"],
            },
        ),
        VoiceCommand::new(
            "action_delete",
            C::Action,
            A::Delete,
            420,
            LocalizedPatterns {
                nl: &["verwijder", "verwijderen"],
                en: &["delete", "remove"],
                de: &["löschen", "entfernen"],
                fr: &["supprimer", "supprime"],
                es: &["eliminar", "suprimir"],
            },
        ),
        // Media
        VoiceCommand::new(
            "media_play",
            C::Media,
            A::Play,
            500,
            LocalizedPatterns {
                nl: &["speel", "afspelen", "speel af"],
                en: &["play", "resume"],
                de: &["abspielen", "spielen"],
                fr: &["lire", "jouer"],
                es: &["reproducir"],
            },
        ),
        VoiceCommand::new(
            "media_pause",
            C::Media,
            A::Pause,
            510,
            LocalizedPatterns {
                nl: &["pauze", "pauzeer"],
                en: &["pause"],
                de: &["pause", "pausieren"],
                fr: &["pause"],
                es: &["pausa"],
            },
        ),
        VoiceCommand::new(
            "media_next",
            C::Media,
            A::NextTrack,
            520,
            LocalizedPatterns {
                nl: &["volgend nummer", "volgend liedje"],
                en: &["skip", "skip track"],
                de: &["nächstes lied", "nächster titel"],
                fr: &["chanson suivante", "piste suivante"],
                es: &["canción siguiente", "saltar"],
            },
        ),
        VoiceCommand::new(
            "media_previous",
            C::Media,
            A::PreviousTrack,
            530,
            LocalizedPatterns {
                nl: &["vorig nummer", "vorig liedje"],
                en: &["last track", "last song", "rewind"],
                de: &["vorheriges lied", "letztes lied"],
                fr: &["chanson précédente", "piste précédente"],
                es: &["canción anterior"],
            },
        ),
    ]
}
