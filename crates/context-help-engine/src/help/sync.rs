use super::store::{ContextHelpStore, HelpError};

/// Where a tooltip widget stands relative to the help store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    Closed,
    Open,
    /// A click asked the store to toggle; the widget keeps its current
    /// state until the store reports back.
    PendingExternalUpdate { widget_open: bool },
}

/// Something that happened to the widget or the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent {
    /// The help icon was clicked.
    Click,
    /// The store's visibility for this id is now `visible`.
    StoreChanged { visible: bool },
    /// The widget opened itself (for instance on hover or focus).
    WidgetShown,
    /// The widget closed itself (for instance on escape or outside click).
    WidgetHidden,
}

/// What the owner of the widget and store must do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncCommand {
    ToggleInStore,
    ShowInStore,
    HideInStore,
    OpenWidget,
    CloseWidget,
}

/// Keeps one tooltip widget and its store entry in agreement.
///
/// Clicks go through the store, never straight to the widget, so every
/// observer of the store sees the same visibility.
#[derive(Debug, Clone)]
pub struct TooltipSync {
    id: String,
    state: TooltipState,
}

impl TooltipSync {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: TooltipState::Closed,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn is_widget_open(&self) -> bool {
        match self.state {
            TooltipState::Open => true,
            TooltipState::Closed => false,
            TooltipState::PendingExternalUpdate { widget_open } => widget_open,
        }
    }

    pub fn handle(&mut self, event: SyncEvent) -> Option<SyncCommand> {
        match event {
            SyncEvent::Click => {
                self.state = TooltipState::PendingExternalUpdate {
                    widget_open: self.is_widget_open(),
                };
                Some(SyncCommand::ToggleInStore)
            }
            SyncEvent::StoreChanged { visible } => {
                let widget_open = self.is_widget_open();
                self.state = if visible {
                    TooltipState::Open
                } else {
                    TooltipState::Closed
                };
                match (visible, widget_open) {
                    (true, false) => Some(SyncCommand::OpenWidget),
                    (false, true) => Some(SyncCommand::CloseWidget),
                    _ => None,
                }
            }
            SyncEvent::WidgetShown => {
                self.state = TooltipState::Open;
                Some(SyncCommand::ShowInStore)
            }
            SyncEvent::WidgetHidden => {
                self.state = TooltipState::Closed;
                Some(SyncCommand::HideInStore)
            }
        }
    }

    /// Executes a store command for this tooltip's id.
    ///
    /// Returns the store's resulting visibility, or `None` for widget
    /// commands, which the caller performs itself.
    pub fn apply(
        &self,
        store: &mut ContextHelpStore,
        command: SyncCommand,
    ) -> Result<Option<bool>, HelpError> {
        match command {
            SyncCommand::ToggleInStore => store.toggle_tooltip(&self.id).map(Some),
            SyncCommand::ShowInStore => store.show_tooltip(&self.id).map(|()| Some(true)),
            SyncCommand::HideInStore => store.hide_tooltip(&self.id).map(|()| Some(false)),
            SyncCommand::OpenWidget | SyncCommand::CloseWidget => Ok(None),
        }
    }

    /// Runs `event` to completion against `store`.
    ///
    /// Store commands are applied and their result fed back as
    /// [`SyncEvent::StoreChanged`]. The widget command that remains, if any,
    /// is returned for the caller to perform.
    pub fn dispatch(
        &mut self,
        store: &mut ContextHelpStore,
        event: SyncEvent,
    ) -> Result<Option<SyncCommand>, HelpError> {
        let mut next = self.handle(event);
        while let Some(command) = next {
            match self.apply(store, command)? {
                Some(visible) => next = self.handle(SyncEvent::StoreChanged { visible }),
                None => return Ok(Some(command)),
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_with(id: &str) -> ContextHelpStore {
        let mut store = ContextHelpStore::new(true);
        store.add(id);
        store
    }

    #[test]
    fn click_waits_for_store() {
        let mut sync = TooltipSync::new("a");
        assert_eq!(sync.handle(SyncEvent::Click), Some(SyncCommand::ToggleInStore));
        assert_eq!(
            sync.state(),
            TooltipState::PendingExternalUpdate { widget_open: false }
        );
        assert!(!sync.is_widget_open());

        assert_eq!(
            sync.handle(SyncEvent::StoreChanged { visible: true }),
            Some(SyncCommand::OpenWidget)
        );
        assert_eq!(sync.state(), TooltipState::Open);
    }

    #[test]
    fn store_change_matching_widget_is_silent() {
        let mut sync = TooltipSync::new("a");
        assert_eq!(sync.handle(SyncEvent::StoreChanged { visible: false }), None);
        sync.handle(SyncEvent::WidgetShown);
        assert_eq!(sync.handle(SyncEvent::StoreChanged { visible: true }), None);
        assert_eq!(
            sync.handle(SyncEvent::StoreChanged { visible: false }),
            Some(SyncCommand::CloseWidget)
        );
        assert_eq!(sync.state(), TooltipState::Closed);
    }

    #[test]
    fn widget_events_update_store() {
        let mut store = store_with("a");
        let mut sync = TooltipSync::new("a");

        assert_eq!(sync.dispatch(&mut store, SyncEvent::WidgetShown), Ok(None));
        assert!(store.get("a").unwrap().is_tooltip_visible);

        assert_eq!(sync.dispatch(&mut store, SyncEvent::WidgetHidden), Ok(None));
        assert!(!store.get("a").unwrap().is_tooltip_visible);
        assert_eq!(sync.state(), TooltipState::Closed);
    }

    #[test]
    fn click_round_trip_through_store() {
        let mut store = store_with("a");
        let mut sync = TooltipSync::new("a");

        assert_eq!(
            sync.dispatch(&mut store, SyncEvent::Click),
            Ok(Some(SyncCommand::OpenWidget))
        );
        assert!(store.get("a").unwrap().is_tooltip_visible);
        assert_eq!(sync.state(), TooltipState::Open);

        assert_eq!(
            sync.dispatch(&mut store, SyncEvent::Click),
            Ok(Some(SyncCommand::CloseWidget))
        );
        assert!(!store.get("a").unwrap().is_tooltip_visible);
        assert_eq!(sync.state(), TooltipState::Closed);
    }

    #[test]
    fn hiding_icons_closes_open_widget() {
        let mut store = store_with("a");
        let mut sync = TooltipSync::new("a");
        sync.dispatch(&mut store, SyncEvent::Click).unwrap();

        store.set_show_icons(false);
        let visible = store.get("a").unwrap().is_tooltip_visible;
        assert_eq!(
            sync.handle(SyncEvent::StoreChanged { visible }),
            Some(SyncCommand::CloseWidget)
        );
    }

    #[test]
    fn click_on_unregistered_id_fails() {
        let mut store = ContextHelpStore::new(true);
        let mut sync = TooltipSync::new("ghost");
        assert_eq!(
            sync.dispatch(&mut store, SyncEvent::Click),
            Err(HelpError::UnknownId("ghost".into()))
        );
    }

    #[test]
    fn widget_commands_do_not_touch_store() {
        let mut store = store_with("a");
        let sync = TooltipSync::new("a");
        assert_eq!(sync.apply(&mut store, SyncCommand::OpenWidget), Ok(None));
        assert!(!store.get("a").unwrap().is_tooltip_visible);
    }
}
