//! List Engine
//!
//! Operations on persisted lists. Plain and anime lists use `ListEngine`
//! directly; bookmark lists add `BookmarkOperations`.

mod bookmarks;
mod lists;

pub use bookmarks::BookmarkOperations;
pub use lists::{ListEngine, ListView, VISIBLE_CAP};
