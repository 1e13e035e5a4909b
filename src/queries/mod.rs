//! Query modules for the grocery list.
//!
//! [`ItemFilter`] describes which items to keep; [`ItemQuery`] borrows a
//! [`ListStore`](crate::store::ListStore) and exposes convenience methods built
//! on top of it.

pub mod filter;
pub mod items;

pub use filter::{ItemFilter, ItemStatus};
pub use items::ItemQuery;
