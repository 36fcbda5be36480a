//! Page Identification
//!
//! Which page is showing, and therefore which lists it renders, is decided
//! from the location: the hash first (`#anime`, `#/vault`), then the last
//! path segment (`anime.html`).

use std::fmt;

use crate::domain::ListType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Anime,
    Projects,
    Vault,
    Bookmarks,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Home, Page::Anime, Page::Projects, Page::Vault, Page::Bookmarks];

    pub fn from_location(pathname: &str, hash: &str) -> Page {
        let hash = hash.trim_start_matches('#').trim_matches('/');
        if let Some(page) = Page::from_slug(hash) {
            return page;
        }

        let segment = pathname.rsplit('/').next().unwrap_or_default();
        let slug = segment.strip_suffix(".html").unwrap_or(segment);
        Page::from_slug(slug).unwrap_or_default()
    }

    fn from_slug(slug: &str) -> Option<Page> {
        match slug {
            "index" => Some(Page::Home),
            "anime" => Some(Page::Anime),
            "projects" => Some(Page::Projects),
            "vault" => Some(Page::Vault),
            "bookmarks" => Some(Page::Bookmarks),
            _ => None,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "index",
            Page::Anime => "anime",
            Page::Projects => "projects",
            Page::Vault => "vault",
            Page::Bookmarks => "bookmarks",
        }
    }

    /// Link target used by the navigation bar
    pub fn href(self) -> String {
        format!("#{}", self.slug())
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Anime => "Anime",
            Page::Projects => "Projects",
            Page::Vault => "Vault",
            Page::Bookmarks => "Bookmarks",
        }
    }

    /// Lists rendered as cards on this page
    pub fn lists(self) -> &'static [ListType] {
        match self {
            Page::Home => &[],
            Page::Anime => &[ListType::Watching, ListType::Completed],
            Page::Projects => &[ListType::Projects, ListType::Upcoming],
            Page::Vault => &[ListType::VaultNotes, ListType::VaultLinks],
            Page::Bookmarks => &[ListType::BookmarksTools, ListType::BookmarksEntertainment],
        }
    }

    /// Lists counted in the home page summary. Vault contents stay hidden.
    pub fn summary_lists() -> Vec<ListType> {
        [Page::Anime, Page::Projects, Page::Bookmarks]
            .iter()
            .flat_map(|page| page.lists().iter().copied())
            .collect()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
