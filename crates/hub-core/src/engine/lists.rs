//! Generic List Engine
//!
//! CRUD, reorder and render-model operations shared by every list type.
//! Each mutation returns the lists whose display must be refreshed; for the
//! anime pair that is always both halves.

use crate::domain::{
    DuplicateEntry, HubError, HubResult, InputField, ItemKind, ListItem, ListType, ValidationError,
};
use crate::repository::{Clock, KeyValueStore, ListRepository};

/// Rows shown before "View More" is needed
pub const VISIBLE_CAP: usize = 5;

/// Render model of one list card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub list: ListType,
    /// Heading with count suffix, e.g. `Projects (3)`
    pub title: String,
    pub count: usize,
    /// Rows to display (capped unless expanded)
    pub items: Vec<ListItem>,
    pub empty_message: Option<&'static str>,
    pub show_toggle: bool,
    pub toggle_label: &'static str,
    /// e.g. `Last updated: Never`
    pub last_updated: String,
}

/// List operations over a key-value store
#[derive(Clone, Copy)]
pub struct ListEngine<'a> {
    repo: ListRepository<'a>,
}

impl<'a> ListEngine<'a> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock) -> Self {
        Self { repo: ListRepository::new(store, clock) }
    }

    pub fn items(&self, list: ListType) -> Vec<ListItem> {
        self.repo.load(list)
    }

    pub fn view(&self, list: ListType, expanded: bool) -> ListView {
        let items = self.repo.load(list);
        let count = items.len();
        let visible = if expanded { items } else { items.into_iter().take(VISIBLE_CAP).collect() };

        ListView {
            list,
            title: format!("{} ({})", list.title(), count),
            count,
            items: visible,
            empty_message: (count == 0).then(|| list.empty_message()),
            show_toggle: count > VISIBLE_CAP,
            toggle_label: if expanded { "View Less" } else { "View More" },
            last_updated: format!("Last updated: {}", self.repo.last_updated(list)),
        }
    }

    /// Append a new item built from raw input.
    pub fn add(&self, list: ListType, input: &str) -> HubResult<Vec<ListType>> {
        self.add_entry(list, input, None)
    }

    /// Rename `original` from raw input, keeping its other fields.
    pub fn edit(&self, list: ListType, original: &ListItem, input: &str) -> HubResult<Vec<ListType>> {
        self.edit_entry(list, original, input, None)
    }

    /// Remove an item; removing something no longer stored writes nothing.
    pub fn delete(&self, list: ListType, item: &ListItem) -> Vec<ListType> {
        let mut items = self.repo.load(list);
        let before = items.len();
        items.retain(|i| !i.same_identity(item));
        if items.len() == before {
            log::debug!("[ListEngine] delete: \"{}\" already gone from {}", item.name(), list);
            return Vec::new();
        }
        self.repo.save(list, &items);
        list.uniqueness_scope()
    }

    pub fn clear(&self, list: ListType) -> Vec<ListType> {
        self.repo.save(list, &[]);
        list.uniqueness_scope()
    }

    /// Move `dragged` to the current index of `target`.
    ///
    /// Drops across list types, onto the dragged row itself, or onto rows
    /// that vanished in the meantime are ignored (`None`).
    pub fn reorder(
        &self,
        dragged_list: ListType,
        dragged: &ListItem,
        target_list: ListType,
        target: &ListItem,
    ) -> Option<Vec<ListType>> {
        if dragged_list != target_list || dragged.same_identity(target) {
            return None;
        }
        let mut items = self.repo.load(dragged_list);
        let from = items.iter().position(|i| i.same_identity(dragged))?;
        let to = items.iter().position(|i| i.same_identity(target))?;

        let moved = items.remove(from);
        items.insert(to, moved);
        self.repo.save(dragged_list, &items);
        log::debug!("[ListEngine] reorder {}: {} -> {}", dragged_list, from, to);
        Some(vec![dragged_list])
    }

    /// Move an anime entry between watching and completed.
    pub fn toggle_completion(&self, name: &str, from: ListType) -> HubResult<Vec<ListType>> {
        let to = from.sibling().ok_or(HubError::InvalidMove(from))?;

        let mut source = self.repo.load(from);
        let index = source
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| HubError::NotFound { list: from, name: name.to_string() })?;
        let moved = source.remove(index);
        self.repo.save(from, &source);

        let mut target = self.repo.load(to);
        target.push(ListItem::anime(moved.name(), to == ListType::Completed));
        self.repo.save(to, &target);

        log::debug!("[ListEngine] moved \"{}\" from {} to {}", name, from, to);
        Ok(vec![from, to])
    }

    pub(crate) fn add_entry(
        &self,
        list: ListType,
        name: &str,
        url: Option<&str>,
    ) -> HubResult<Vec<ListType>> {
        let (name, url) = validate(list, name, url)?;
        let item = ListItem::for_list(list, name, url);

        if self.collides(list, &item, None) {
            return Err(HubError::Duplicate(DuplicateEntry { list, during_edit: false }));
        }

        let mut items = self.repo.load(list);
        items.push(item);
        self.repo.save(list, &items);
        Ok(list.uniqueness_scope())
    }

    pub(crate) fn edit_entry(
        &self,
        list: ListType,
        original: &ListItem,
        name: &str,
        url: Option<&str>,
    ) -> HubResult<Vec<ListType>> {
        let (name, url) = validate(list, name, url)?;
        let replacement = original.renamed(name, url);

        if self.collides(list, &replacement, Some(original)) {
            return Err(HubError::Duplicate(DuplicateEntry { list, during_edit: true }));
        }

        let mut items = self.repo.load(list);
        let slot = items
            .iter_mut()
            .find(|i| i.same_identity(original))
            .ok_or_else(|| HubError::NotFound { list, name: original.name().to_string() })?;
        *slot = replacement;
        self.repo.save(list, &items);
        Ok(list.uniqueness_scope())
    }

    /// Whether `candidate` clashes with a stored item other than `exclude`
    fn collides(&self, list: ListType, candidate: &ListItem, exclude: Option<&ListItem>) -> bool {
        list.uniqueness_scope().into_iter().any(|scope| {
            self.repo.load(scope).iter().any(|existing| {
                existing.same_identity(candidate)
                    && !exclude.is_some_and(|original| existing.same_identity(original))
            })
        })
    }
}

/// Trim input and reject blanks. Bookmark lists also require a url.
fn validate(
    list: ListType,
    name: &str,
    url: Option<&str>,
) -> Result<(String, Option<String>), ValidationError> {
    let name = name.trim();
    let mut blank = Vec::new();
    if name.is_empty() {
        blank.push(InputField::Name);
    }

    let url = match list.kind() {
        ItemKind::Bookmark => {
            let url = url.unwrap_or_default().trim();
            if url.is_empty() {
                blank.push(InputField::Url);
            }
            Some(url.to_string())
        }
        _ => None,
    };

    if blank.is_empty() {
        Ok((name.to_string(), url))
    } else {
        Err(ValidationError::Blank(blank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{FixedClock, KeyValueStore, MemoryStore};

    fn clock() -> FixedClock {
        FixedClock::new("Jun 5, 2025, 3:04 PM", "2025-06-05")
    }

    fn names(engine: &ListEngine, list: ListType) -> Vec<String> {
        engine.items(list).iter().map(|i| i.name().to_string()).collect()
    }

    #[test]
    fn test_add_appends_trimmed_value() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);

        engine.add(ListType::Projects, "  Alpha ").unwrap();
        engine.add(ListType::Projects, "Beta").unwrap();

        assert_eq!(names(&engine, ListType::Projects), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_add_rejects_blank_input() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);

        let err = engine.add(ListType::Notes, "   ").unwrap_err();
        assert_eq!(err, HubError::Validation(ValidationError::Blank(vec![InputField::Name])));
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_add_leaves_list_untouched() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add(ListType::Upcoming, "Trip").unwrap();

        let err = engine.add(ListType::Upcoming, "Trip").unwrap_err();

        assert!(matches!(err, HubError::Duplicate(DuplicateEntry { during_edit: false, .. })));
        assert_eq!(engine.items(ListType::Upcoming).len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add(ListType::Projects, "site").unwrap();
        engine.add(ListType::Projects, "Site").unwrap();
        assert_eq!(engine.items(ListType::Projects).len(), 2);
    }

    #[test]
    fn test_anime_duplicates_checked_across_both_lists() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add(ListType::Completed, "Naruto").unwrap();

        assert!(engine.add(ListType::Watching, "Naruto").is_err());
        assert_eq!(engine.items(ListType::Completed), vec![ListItem::anime("Naruto", true)]);
        assert!(engine.items(ListType::Watching).is_empty());
    }

    #[test]
    fn test_anime_add_refreshes_both_lists() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);

        let affected = engine.add(ListType::Watching, "Frieren").unwrap();

        assert_eq!(affected, vec![ListType::Watching, ListType::Completed]);
        assert_eq!(engine.items(ListType::Watching), vec![ListItem::anime("Frieren", false)]);
    }

    #[test]
    fn test_edit_keeps_completed_flag() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add(ListType::Completed, "Bleach").unwrap();

        engine.edit(ListType::Completed, &ListItem::anime("Bleach", true), "Bleach TYBW").unwrap();

        assert_eq!(engine.items(ListType::Completed), vec![ListItem::anime("Bleach TYBW", true)]);
    }

    #[test]
    fn test_edit_to_same_name_is_allowed() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add(ListType::Projects, "Alpha").unwrap();

        assert!(engine.edit(ListType::Projects, &ListItem::plain("Alpha"), " Alpha ").is_ok());
    }

    #[test]
    fn test_edit_rejects_collision_with_sibling_list() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add(ListType::Watching, "A").unwrap();
        engine.add(ListType::Completed, "B").unwrap();

        let err = engine.edit(ListType::Watching, &ListItem::anime("A", false), "B").unwrap_err();

        assert!(matches!(err, HubError::Duplicate(DuplicateEntry { during_edit: true, .. })));
        assert_eq!(names(&engine, ListType::Watching), vec!["A"]);
    }

    #[test]
    fn test_edit_missing_item_is_not_found() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);

        let err = engine.edit(ListType::Projects, &ListItem::plain("Ghost"), "New").unwrap_err();
        assert!(matches!(err, HubError::NotFound { .. }));
    }

    #[test]
    fn test_delete_and_clear() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        for name in ["a", "b", "c"] {
            engine.add(ListType::Projects, name).unwrap();
        }

        let affected = engine.delete(ListType::Projects, &ListItem::plain("b"));
        assert_eq!(affected, vec![ListType::Projects]);
        assert_eq!(names(&engine, ListType::Projects), vec!["a", "c"]);

        assert!(engine.delete(ListType::Projects, &ListItem::plain("zzz")).is_empty());

        engine.clear(ListType::Projects);
        assert!(engine.items(ListType::Projects).is_empty());
        assert_eq!(store.get("projectsList").as_deref(), Some("[]"));
    }

    #[test]
    fn test_reorder_moves_to_target_index() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        for name in ["a", "b", "c", "d", "e"] {
            engine.add(ListType::Projects, name).unwrap();
        }

        // forward: a onto d
        engine
            .reorder(ListType::Projects, &ListItem::plain("a"), ListType::Projects, &ListItem::plain("d"))
            .unwrap();
        assert_eq!(names(&engine, ListType::Projects), vec!["b", "c", "d", "a", "e"]);

        // backward: e onto b
        engine
            .reorder(ListType::Projects, &ListItem::plain("e"), ListType::Projects, &ListItem::plain("b"))
            .unwrap();
        assert_eq!(names(&engine, ListType::Projects), vec!["e", "b", "c", "d", "a"]);
    }

    #[test]
    fn test_reorder_ignores_cross_type_and_self_drops() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add(ListType::Projects, "a").unwrap();
        engine.add(ListType::Upcoming, "b").unwrap();

        assert!(engine
            .reorder(ListType::Projects, &ListItem::plain("a"), ListType::Upcoming, &ListItem::plain("b"))
            .is_none());
        assert!(engine
            .reorder(ListType::Projects, &ListItem::plain("a"), ListType::Projects, &ListItem::plain("a"))
            .is_none());
    }

    #[test]
    fn test_toggle_completion_moves_between_lists() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add(ListType::Watching, "Naruto").unwrap();

        engine.toggle_completion("Naruto", ListType::Watching).unwrap();
        assert!(engine.items(ListType::Watching).is_empty());
        assert_eq!(engine.items(ListType::Completed), vec![ListItem::anime("Naruto", true)]);

        engine.toggle_completion("Naruto", ListType::Completed).unwrap();
        assert_eq!(engine.items(ListType::Watching), vec![ListItem::anime("Naruto", false)]);
        assert!(engine.items(ListType::Completed).is_empty());
    }

    #[test]
    fn test_toggle_completion_rejects_plain_lists() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        assert_eq!(
            engine.toggle_completion("x", ListType::Projects).unwrap_err(),
            HubError::InvalidMove(ListType::Projects)
        );
    }

    #[test]
    fn test_mutations_stamp_last_updated() {
        let store = MemoryStore::new();
        let earlier = FixedClock::new("Jan 1, 2024, 9:00 AM", "2024-01-01");
        let seed = ListEngine::new(&store, &earlier);
        seed.add(ListType::Projects, "Alpha").unwrap();
        seed.add(ListType::Projects, "Beta").unwrap();
        seed.add(ListType::Upcoming, "Trip").unwrap();
        seed.add(ListType::Watching, "Frieren").unwrap();
        seed.add(ListType::Completed, "Bleach").unwrap();

        let clock = clock();
        let engine = ListEngine::new(&store, &clock);

        engine
            .reorder(ListType::Projects, &ListItem::plain("Beta"), ListType::Projects, &ListItem::plain("Alpha"))
            .unwrap();
        assert_eq!(engine.view(ListType::Projects, false).last_updated, "Last updated: Jun 5, 2025, 3:04 PM");

        engine.clear(ListType::Upcoming);
        assert_eq!(store.get("upcomingLastUpdated").as_deref(), Some("Jun 5, 2025, 3:04 PM"));

        assert_eq!(store.get("completedLastUpdated").as_deref(), Some("Jan 1, 2024, 9:00 AM"));
        engine.toggle_completion("Frieren", ListType::Watching).unwrap();
        assert_eq!(store.get("watchingLastUpdated").as_deref(), Some("Jun 5, 2025, 3:04 PM"));
        assert_eq!(store.get("completedLastUpdated").as_deref(), Some("Jun 5, 2025, 3:04 PM"));
    }

    #[test]
    fn test_missing_delete_keeps_last_updated() {
        let store = MemoryStore::new();
        let earlier = FixedClock::new("Jan 1, 2024, 9:00 AM", "2024-01-01");
        ListEngine::new(&store, &earlier).add(ListType::Notes, "Keep").unwrap();

        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        let affected = engine.delete(ListType::Notes, &ListItem::plain("Gone"));

        assert!(affected.is_empty());
        assert_eq!(store.get("notesLastUpdated").as_deref(), Some("Jan 1, 2024, 9:00 AM"));
        assert_eq!(store.get("notesList").as_deref(), Some(r#"["Keep"]"#));
    }

    #[test]
    fn test_view_caps_rows_until_expanded() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        for i in 0..7 {
            engine.add(ListType::Notes, &format!("note {i}")).unwrap();
        }

        let collapsed = engine.view(ListType::Notes, false);
        assert_eq!(collapsed.title, "Notes (7)");
        assert_eq!(collapsed.items.len(), VISIBLE_CAP);
        assert!(collapsed.show_toggle);
        assert_eq!(collapsed.toggle_label, "View More");
        assert_eq!(collapsed.last_updated, "Last updated: Jun 5, 2025, 3:04 PM");

        let expanded = engine.view(ListType::Notes, true);
        assert_eq!(expanded.items.len(), 7);
        assert_eq!(expanded.toggle_label, "View Less");
    }

    #[test]
    fn test_view_of_empty_list() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);

        let view = engine.view(ListType::Watching, false);
        assert_eq!(view.title, "Currently Watching (0)");
        assert_eq!(view.empty_message, Some("No anime here yet! Add your first anime above."));
        assert!(!view.show_toggle);
        assert_eq!(view.last_updated, "Last updated: Never");
    }
}
