//! Hand rolled collections backing the catalog indexes.
//!
//! [`HashTable`] is a separate chaining hash table whose buckets are
//! owned singly linked [`List`]s. It grows by doubling once the load
//! factor passes [`MAX_LOAD_FACTOR`].

mod macros;

pub mod hashmap;
pub mod linked_list;

pub use hashmap::{DEFAULT_BUCKET_SIZE, HashTable, MAX_LOAD_FACTOR, TableError};
pub use linked_list::{List, Node};
