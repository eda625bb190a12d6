use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HelpError {
    #[error("No context help registered with id `{0}`")]
    UnknownId(String),
}

/// Visibility of one help tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHelp {
    pub id: String,
    pub is_tooltip_visible: bool,
}

/// Tooltip visibility for every registered help id, plus the global switch
/// for showing help icons at all.
///
/// Hiding the icons also hides every tooltip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHelpStore {
    show_icons: bool,
    entries: BTreeMap<String, ContextHelp>,
}

impl ContextHelpStore {
    pub fn new(show_icons: bool) -> Self {
        Self {
            show_icons,
            entries: BTreeMap::new(),
        }
    }

    /// Registers `id` with its tooltip hidden. Re-registering keeps the
    /// current visibility.
    pub fn add(&mut self, id: impl Into<String>) -> &ContextHelp {
        let id = id.into();
        self.entries
            .entry(id.clone())
            .or_insert_with(|| ContextHelp {
                id,
                is_tooltip_visible: false,
            })
    }

    pub fn remove(&mut self, id: &str) -> Option<ContextHelp> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&ContextHelp> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContextHelp> {
        self.entries.values()
    }

    pub fn show_icons(&self) -> bool {
        self.show_icons
    }

    pub fn set_show_icons(&mut self, show: bool) {
        self.show_icons = show;
        if !show {
            self.hide_all_tooltips();
        }
    }

    /// Flips icon visibility and returns the new value.
    pub fn toggle_icons(&mut self) -> bool {
        self.set_show_icons(!self.show_icons);
        self.show_icons
    }

    pub fn show_tooltip(&mut self, id: &str) -> Result<(), HelpError> {
        self.entry_mut(id)?.is_tooltip_visible = true;
        Ok(())
    }

    pub fn hide_tooltip(&mut self, id: &str) -> Result<(), HelpError> {
        self.entry_mut(id)?.is_tooltip_visible = false;
        Ok(())
    }

    /// Flips the tooltip and returns its new visibility.
    pub fn toggle_tooltip(&mut self, id: &str) -> Result<bool, HelpError> {
        let entry = self.entry_mut(id)?;
        entry.is_tooltip_visible = !entry.is_tooltip_visible;
        Ok(entry.is_tooltip_visible)
    }

    pub fn hide_all_tooltips(&mut self) {
        for entry in self.entries.values_mut() {
            entry.is_tooltip_visible = false;
        }
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut ContextHelp, HelpError> {
        self.entries
            .get_mut(id)
            .ok_or_else(|| HelpError::UnknownId(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn visible(store: &ContextHelpStore, id: &str) -> bool {
        store.get(id).map(|ch| ch.is_tooltip_visible).unwrap_or(false)
    }

    #[test]
    fn added_help_starts_hidden() {
        let mut store = ContextHelpStore::new(true);
        let ch = store.add("submission").clone();
        assert_eq!(
            ch,
            ContextHelp {
                id: "submission".into(),
                is_tooltip_visible: false
            }
        );
    }

    #[test]
    fn re_adding_keeps_visibility() {
        let mut store = ContextHelpStore::new(true);
        store.add("a");
        store.show_tooltip("a").unwrap();
        assert!(store.add("a").is_tooltip_visible);
    }

    #[test]
    fn show_hide_toggle() {
        let mut store = ContextHelpStore::new(true);
        store.add("a");

        store.show_tooltip("a").unwrap();
        assert!(visible(&store, "a"));
        store.hide_tooltip("a").unwrap();
        assert!(!visible(&store, "a"));
        assert_eq!(store.toggle_tooltip("a"), Ok(true));
        assert_eq!(store.toggle_tooltip("a"), Ok(false));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut store = ContextHelpStore::default();
        assert_eq!(
            store.show_tooltip("nope"),
            Err(HelpError::UnknownId("nope".into()))
        );
        assert!(store.toggle_tooltip("nope").is_err());
        assert_eq!(
            store.hide_tooltip("nope").unwrap_err().to_string(),
            "No context help registered with id `nope`"
        );
    }

    #[test]
    fn hiding_icons_hides_all_tooltips() {
        let mut store = ContextHelpStore::new(true);
        store.add("a");
        store.add("b");
        store.show_tooltip("a").unwrap();
        store.show_tooltip("b").unwrap();

        assert!(!store.toggle_icons());
        assert!(!store.show_icons());
        assert!(store.iter().all(|ch| !ch.is_tooltip_visible));

        assert!(store.toggle_icons());
        assert!(store.show_icons());
    }

    #[test]
    fn remove_forgets_entry() {
        let mut store = ContextHelpStore::new(false);
        store.add("a");
        assert!(store.remove("a").is_some());
        assert!(store.get("a").is_none());
        assert!(store.remove("a").is_none());
    }
}
