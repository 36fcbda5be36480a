//! List Types
//!
//! Every persisted list is identified by a `ListType` tag. The tag decides
//! the storage keys, the item shape and the wording used in the UI.

use std::fmt;
use std::str::FromStr;

use super::error::HubError;

/// Shape of the items stored in a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Bare names
    Plain,
    /// `{name, completed}` records shared by watching/completed
    Anime,
    /// `{name, url}` records
    Bookmark,
}

/// Domain tag of a persisted list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListType {
    Projects,
    Upcoming,
    Watching,
    Completed,
    Accounts,
    Notes,
    VaultNotes,
    VaultLinks,
    BookmarksTools,
    BookmarksEntertainment,
}

impl ListType {
    pub const ALL: [ListType; 10] = [
        ListType::Projects,
        ListType::Upcoming,
        ListType::Watching,
        ListType::Completed,
        ListType::Accounts,
        ListType::Notes,
        ListType::VaultNotes,
        ListType::VaultLinks,
        ListType::BookmarksTools,
        ListType::BookmarksEntertainment,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ListType::Projects => "projects",
            ListType::Upcoming => "upcoming",
            ListType::Watching => "watching",
            ListType::Completed => "completed",
            ListType::Accounts => "accounts",
            ListType::Notes => "notes",
            ListType::VaultNotes => "vault-notes",
            ListType::VaultLinks => "vault-links",
            ListType::BookmarksTools => "bookmarks_tools",
            ListType::BookmarksEntertainment => "bookmarks_entertainment",
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ListType::Watching | ListType::Completed => ItemKind::Anime,
            ListType::BookmarksTools | ListType::BookmarksEntertainment => ItemKind::Bookmark,
            _ => ItemKind::Plain,
        }
    }

    /// Storage key holding the JSON-encoded items.
    ///
    /// Vault lists alias the notes/accounts entries.
    pub fn storage_key(&self) -> &'static str {
        match self {
            ListType::Projects => "projectsList",
            ListType::Upcoming => "upcomingList",
            ListType::Watching => "watchingList",
            ListType::Completed => "completedList",
            ListType::Accounts | ListType::VaultLinks => "accountsList",
            ListType::Notes | ListType::VaultNotes => "notesList",
            ListType::BookmarksTools => "bookmarks_tools",
            ListType::BookmarksEntertainment => "bookmarks_entertainment",
        }
    }

    /// Storage key holding the human readable "last updated" label
    pub fn last_updated_key(&self) -> &'static str {
        match self {
            ListType::Projects => "projectsLastUpdated",
            ListType::Upcoming => "upcomingLastUpdated",
            ListType::Watching => "watchingLastUpdated",
            ListType::Completed => "completedLastUpdated",
            ListType::Accounts | ListType::VaultLinks => "accountsLastUpdated",
            ListType::Notes | ListType::VaultNotes => "notesLastUpdated",
            ListType::BookmarksTools => "bookmarks_tools_lastUpdated",
            ListType::BookmarksEntertainment => "bookmarks_entertainment_lastUpdated",
        }
    }

    /// The other half of the anime pair, if any
    pub fn sibling(&self) -> Option<ListType> {
        match self {
            ListType::Watching => Some(ListType::Completed),
            ListType::Completed => Some(ListType::Watching),
            _ => None,
        }
    }

    /// Lists whose contents take part in duplicate detection for this list
    pub fn uniqueness_scope(&self) -> Vec<ListType> {
        match self.sibling() {
            Some(other) => vec![*self, other],
            None => vec![*self],
        }
    }

    /// Base heading text, without the count suffix
    pub fn title(&self) -> &'static str {
        match self {
            ListType::Projects => "Projects",
            ListType::Upcoming => "Upcoming",
            ListType::Watching => "Currently Watching",
            ListType::Completed => "Completed",
            ListType::Accounts => "Accounts",
            ListType::Notes => "Notes",
            ListType::VaultNotes => "Vault Notes",
            ListType::VaultLinks => "Vault Links",
            ListType::BookmarksTools => "Tools",
            ListType::BookmarksEntertainment => "Entertainment",
        }
    }

    /// Short word used in the list input placeholder and delete titles
    pub fn item_noun(&self) -> &'static str {
        match self {
            ListType::Projects => "Project",
            ListType::Upcoming => "Upcoming Project",
            ListType::Watching | ListType::Completed => "Anime",
            ListType::Accounts => "Account",
            ListType::Notes | ListType::VaultNotes => "Note",
            ListType::VaultLinks => "Link",
            ListType::BookmarksTools | ListType::BookmarksEntertainment => "Bookmark",
        }
    }

    /// Label used in the clear-all wording ("watching", "notes", "tools")
    pub fn short_label(&self) -> &'static str {
        match self {
            ListType::VaultNotes => "notes",
            ListType::VaultLinks => "links",
            ListType::BookmarksTools => "tools",
            ListType::BookmarksEntertainment => "entertainment",
            other => other.tag(),
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ListType::Projects | ListType::Upcoming => {
                "No projects here yet! Add your first project above."
            }
            ListType::Watching | ListType::Completed => {
                "No anime here yet! Add your first anime above."
            }
            ListType::Accounts => "No accounts saved yet! Add your first account above.",
            ListType::Notes | ListType::VaultNotes => {
                "No notes here yet! Add your first note above."
            }
            ListType::VaultLinks => "No links here yet! Add your first link above.",
            ListType::BookmarksTools => "No tools bookmarks here yet! Add your first bookmark above.",
            ListType::BookmarksEntertainment => {
                "No entertainment bookmarks here yet! Add your first bookmark above."
            }
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ListType {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListType::ALL
            .iter()
            .copied()
            .find(|t| t.tag() == s)
            .ok_or_else(|| HubError::UnknownListType(s.to_string()))
    }
}

/// Capitalize the first character ("watching" -> "Watching")
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
