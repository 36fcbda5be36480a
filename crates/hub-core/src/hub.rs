//! Hub Facade
//!
//! Bundles the durable store, the session store and the clock, and runs
//! confirmed actions.

use crate::confirm::ConfirmAction;
use crate::domain::{HubResult, ListType};
use crate::engine::ListEngine;
use crate::repository::{Clock, KeyValueStore};
use crate::transfer::{self, ImportSummary};
use crate::vault::VaultGate;

/// What the UI has to do after an action ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Nothing,
    /// Re-render these lists
    Rerender(Vec<ListType>),
    /// Import accepted; read the picked file and run `Import` with it
    ReadPickedFile,
    /// Stored data was replaced; reload the page
    Reload(ImportSummary),
    /// Vault wiped; show the set-password pane
    VaultReset,
}

#[derive(Clone, Copy)]
pub struct Hub<'a> {
    store: &'a dyn KeyValueStore,
    session: &'a dyn KeyValueStore,
    clock: &'a dyn Clock,
}

impl<'a> Hub<'a> {
    pub fn new(
        store: &'a dyn KeyValueStore,
        session: &'a dyn KeyValueStore,
        clock: &'a dyn Clock,
    ) -> Self {
        Self { store, session, clock }
    }

    pub fn lists(&self) -> ListEngine<'a> {
        ListEngine::new(self.store, self.clock)
    }

    pub fn vault(&self) -> VaultGate<'a> {
        VaultGate::new(self.store, self.session)
    }

    pub fn export_json(&self) -> String {
        transfer::export_json(self.store)
    }

    pub fn export_filename(&self) -> String {
        transfer::export_filename(&self.clock.today_iso())
    }

    /// Execute a confirmed action
    pub fn run(&self, action: ConfirmAction) -> HubResult<Outcome> {
        let outcome = match action {
            ConfirmAction::Dismiss => Outcome::Nothing,
            ConfirmAction::DeleteItem { list, item } => {
                let affected = self.lists().delete(list, &item);
                if affected.is_empty() {
                    Outcome::Nothing
                } else {
                    Outcome::Rerender(affected)
                }
            }
            ConfirmAction::ClearList(list) => Outcome::Rerender(self.lists().clear(list)),
            ConfirmAction::ImportPicked => Outcome::ReadPickedFile,
            ConfirmAction::Import { contents } => {
                Outcome::Reload(transfer::import_json(self.store, &contents)?)
            }
            ConfirmAction::ResetVault => {
                self.vault().reset();
                Outcome::VaultReset
            }
        };
        log::debug!("[Hub] action finished: {:?}", outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HubError, ListItem};
    use crate::repository::{FixedClock, KeyValueStore, MemoryStore};

    #[test]
    fn test_run_delete_and_missing_delete() {
        let store = MemoryStore::with_entries([("projectsList", r#"["a","b"]"#)]);
        let session = MemoryStore::new();
        let clock = FixedClock::new("Jun 5, 2025, 3:04 PM", "2025-06-05");
        let hub = Hub::new(&store, &session, &clock);

        let outcome = hub
            .run(ConfirmAction::DeleteItem { list: ListType::Projects, item: ListItem::plain("a") })
            .unwrap();
        assert_eq!(outcome, Outcome::Rerender(vec![ListType::Projects]));

        let outcome = hub
            .run(ConfirmAction::DeleteItem { list: ListType::Projects, item: ListItem::plain("a") })
            .unwrap();
        assert_eq!(outcome, Outcome::Nothing);
    }

    #[test]
    fn test_run_clear_anime_refreshes_sibling() {
        let store = MemoryStore::new();
        let session = MemoryStore::new();
        let clock = FixedClock::new("Jun 5, 2025, 3:04 PM", "2025-06-05");
        let hub = Hub::new(&store, &session, &clock);

        let outcome = hub.run(ConfirmAction::ClearList(ListType::Completed)).unwrap();
        assert_eq!(outcome, Outcome::Rerender(vec![ListType::Completed, ListType::Watching]));
    }

    #[test]
    fn test_run_bad_import_is_an_error() {
        let store = MemoryStore::new();
        let session = MemoryStore::new();
        let clock = FixedClock::new("Jun 5, 2025, 3:04 PM", "2025-06-05");
        let hub = Hub::new(&store, &session, &clock);

        let err = hub.run(ConfirmAction::Import { contents: "nope".into() }).unwrap_err();
        assert!(matches!(err, HubError::ImportParse(_)));
    }

    #[test]
    fn test_run_import_picked_defers_to_file_read() {
        let store = MemoryStore::with_entries([("projectsList", r#"["keep"]"#)]);
        let session = MemoryStore::new();
        let clock = FixedClock::new("Jun 5, 2025, 3:04 PM", "2025-06-05");
        let hub = Hub::new(&store, &session, &clock);

        let outcome = hub.run(ConfirmAction::ImportPicked).unwrap();
        assert_eq!(outcome, Outcome::ReadPickedFile);
        assert_eq!(store.get("projectsList").as_deref(), Some(r#"["keep"]"#));
    }

    #[test]
    fn test_export_filename_uses_clock_date() {
        let store = MemoryStore::new();
        let session = MemoryStore::new();
        let clock = FixedClock::new("Jun 5, 2025, 3:04 PM", "2025-06-05");
        let hub = Hub::new(&store, &session, &clock);
        assert_eq!(hub.export_filename(), "my_hub_data_2025-06-05.json");
    }
}
