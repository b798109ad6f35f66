//! Product catalog indexed by id and by category.
//!
//! Records live in a [`Catalog`]. Lookups by unique id go through a
//! [`ProductIndex`], category listings through a [`CategoryIndex`], both
//! backed by the chained [`collections::HashTable`].

pub mod catalog;
pub mod command;
pub mod config;
pub mod index;
pub mod loader;
pub mod product;

use std::path::PathBuf;

use thiserror::Error;

pub use catalog::Catalog;
pub use index::{CategoryIndex, ProductIndex, RecordId};
pub use loader::LoadStats;
pub use product::Product;

#[derive(Debug, Error)]
pub enum InventoryError {
    /// Derived IO error
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV source could not be opened
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source did not even contain a header line
    #[error("CSV source is empty, expected a header line")]
    MissingHeader,

    /// One of the index tables failed to grow
    #[error(transparent)]
    Table(#[from] collections::TableError),
}
