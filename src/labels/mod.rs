pub mod catalog;
#[cfg(feature = "desktop")]
pub mod commands;

pub use catalog::{catalog_label, label_catalog};
