use std::collections::TryReserveError;

use thiserror::Error;

mod hash_table;

pub use hash_table::{
    DEFAULT_BUCKET_SIZE, DefaultHashBuilder, GROWTH_FACTOR, HashTable, Iter, Keys,
    MAX_LOAD_FACTOR, Values,
};

#[derive(Error, Debug)]
pub enum TableError {
    /// The bucket array for a rehash could not be allocated.
    /// The table is left exactly as it was before the failed insert.
    #[error("Couldnt allocate {buckets} buckets while growing the table: {source}")]
    Alloc {
        buckets: usize,
        #[source]
        source: TryReserveError,
    },
}
