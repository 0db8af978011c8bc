#[cfg(feature = "desktop")]
pub mod commands;
pub mod drag;
pub mod mutations;
pub mod store;

pub use drag::{DragEvent, DragSession};
pub use store::BoardStore;
