//! Persistence contracts for lightweight host-side preferences.

pub mod prefs;
