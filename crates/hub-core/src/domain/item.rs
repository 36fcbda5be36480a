//! List Items
//!
//! A list item is a tagged union selected by the list's `ItemKind`.
//! Plain items are stored as bare JSON strings, anime and bookmark items as
//! small JSON records.

use serde::{Deserialize, Serialize, Serializer};

use super::list_type::{ItemKind, ListType};

/// A single entry of a persisted list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListItem {
    Plain { name: String },
    Anime { name: String, completed: bool },
    Bookmark { name: String, url: String },
}

impl ListItem {
    pub fn plain(name: impl Into<String>) -> Self {
        ListItem::Plain { name: name.into() }
    }

    pub fn anime(name: impl Into<String>, completed: bool) -> Self {
        ListItem::Anime { name: name.into(), completed }
    }

    pub fn bookmark(name: impl Into<String>, url: impl Into<String>) -> Self {
        ListItem::Bookmark { name: name.into(), url: url.into() }
    }

    /// Build a fresh item for `list` from already-trimmed input.
    pub fn for_list(list: ListType, name: String, url: Option<String>) -> Self {
        match list.kind() {
            ItemKind::Plain => ListItem::Plain { name },
            ItemKind::Anime => ListItem::Anime { name, completed: list == ListType::Completed },
            ItemKind::Bookmark => ListItem::Bookmark { name, url: url.unwrap_or_default() },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ListItem::Plain { name } | ListItem::Anime { name, .. } | ListItem::Bookmark { name, .. } => name,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ListItem::Bookmark { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn completed(&self) -> bool {
        matches!(self, ListItem::Anime { completed: true, .. })
    }

    /// Identity used for lookup and duplicate detection.
    ///
    /// Bookmarks are keyed on the (name, url) pair, everything else on name.
    pub fn same_identity(&self, other: &ListItem) -> bool {
        match (self, other) {
            (ListItem::Bookmark { name: a, url: ua }, ListItem::Bookmark { name: b, url: ub }) => {
                a == b && ua == ub
            }
            _ => self.name() == other.name(),
        }
    }

    /// Copy of this item with a new name (and url for bookmarks), keeping
    /// every other field.
    pub fn renamed(&self, name: String, url: Option<String>) -> ListItem {
        match self {
            ListItem::Plain { .. } => ListItem::Plain { name },
            ListItem::Anime { completed, .. } => ListItem::Anime { name, completed: *completed },
            ListItem::Bookmark { url: old_url, .. } => ListItem::Bookmark {
                name,
                url: url.unwrap_or_else(|| old_url.clone()),
            },
        }
    }

    /// Decode a stored list, coercing every entry to the list's kind.
    pub fn decode_list(list: ListType, raw: &str) -> Result<Vec<ListItem>, serde_json::Error> {
        let entries: Vec<StoredItem> = serde_json::from_str(raw)?;
        Ok(entries.into_iter().map(|e| e.into_item(list)).collect())
    }

    pub fn encode_list(items: &[ListItem]) -> Result<String, serde_json::Error> {
        serde_json::to_string(items)
    }
}

impl Serialize for ListItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct AnimeRecord<'a> {
            name: &'a str,
            completed: bool,
        }

        #[derive(Serialize)]
        struct BookmarkRecord<'a> {
            name: &'a str,
            url: &'a str,
        }

        match self {
            ListItem::Plain { name } => serializer.serialize_str(name),
            ListItem::Anime { name, completed } => {
                AnimeRecord { name, completed: *completed }.serialize(serializer)
            }
            ListItem::Bookmark { name, url } => BookmarkRecord { name, url }.serialize(serializer),
        }
    }
}

/// Loosely-typed stored entry, before kind coercion
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredItem {
    Name(String),
    Record {
        name: String,
        #[serde(default)]
        completed: Option<bool>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl StoredItem {
    fn into_item(self, list: ListType) -> ListItem {
        let (name, completed, url) = match self {
            StoredItem::Name(name) => (name, None, None),
            StoredItem::Record { name, completed, url } => (name, completed, url),
        };
        match list.kind() {
            ItemKind::Plain => ListItem::Plain { name },
            ItemKind::Anime => ListItem::Anime {
                name,
                completed: completed.unwrap_or(list == ListType::Completed),
            },
            ItemKind::Bookmark => ListItem::Bookmark { name, url: url.unwrap_or_default() },
        }
    }
}
