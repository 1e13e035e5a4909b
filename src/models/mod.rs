pub mod item;
pub mod snapshot;
pub mod summary;

pub use item::*;
pub use snapshot::*;
pub use summary::*;
