//! Compiled reference-architecture catalog: entry model, loader, and index.

mod entry;
mod loader;

pub use entry::{CatalogEntry, ClassificationMeta};
pub use loader::{load_catalog, Catalog, DroppedEntry, LoadReport};
