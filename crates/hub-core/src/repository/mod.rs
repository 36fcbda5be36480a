//! Repository Layer
//!
//! Storage access: the key-value store seam, timestamps and list
//! persistence.

mod clock;
mod list_repo;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use list_repo::{ListRepository, NEVER_UPDATED};
pub use store::{KeyValueStore, MemoryStore};
