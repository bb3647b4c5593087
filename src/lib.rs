//! CommEazy voice commands
//!
//! Senior-friendly voice control for the CommEazy messaging app. Speech is
//! transcribed by the platform recognizer; this crate decides what a
//! transcript means.
//!
//! ## Building blocks
//!
//! 1. **Catalog**: built-in commands ("volgende", "bel", "stop", ...) with
//!    phrases for every supported language.
//! 2. **Settings**: user customizations (synonyms, switched-off phrases,
//!    commands turned off), persisted as JSON in a key-value store.
//! 3. **Matcher**: finds the command a transcript triggers, honoring the
//!    customizations.
//! 4. **Dispatcher**: routes matched form and contact commands to whatever the
//!    current screen registered.

pub mod config;
pub mod storage;
pub mod voice;

pub use voice::*;
