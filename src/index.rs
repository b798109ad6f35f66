//! The two lookup tables of the catalog.
//!
//! Neither index owns a [`Product`](crate::Product). Both store [`RecordId`]
//! handles into the catalog's record store, so dropping or replacing an index
//! entry never touches the record itself.

use collections::{HashTable, TableError};
use log::trace;

/// Handle to a record in the catalog's record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Primary index, unique id -> record.
#[derive(Debug, Default)]
pub struct ProductIndex {
    table: HashTable<String, RecordId>,
}

impl ProductIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points `uniq_id` at `record`. A previous record with the same id is
    /// silently replaced in the index and returned.
    pub fn insert(
        &mut self,
        uniq_id: &str,
        record: RecordId,
    ) -> Result<Option<RecordId>, TableError> {
        let old = self.table.try_insert(uniq_id.to_owned(), record)?;
        if let Some(old) = old {
            trace!(target: "product_index", "id {uniq_id} moved from {old:?} to {record:?}");
        }
        Ok(old)
    }

    pub fn find(&self, uniq_id: &str) -> Option<RecordId> {
        self.table.get(uniq_id).copied()
    }

    /// Undoes an [`insert`](Self::insert): points `uniq_id` back at the
    /// record it displaced, or drops the id if it was new.
    pub fn revert(&mut self, uniq_id: &str, displaced: Option<RecordId>) {
        match displaced {
            Some(old) => {
                if let Some(slot) = self.table.get_mut(uniq_id) {
                    *slot = old;
                }
            }
            None => {
                self.table.remove(uniq_id);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Secondary index, category label -> every record filed under it,
/// in the order they were added.
#[derive(Debug, Default)]
pub struct CategoryIndex {
    table: HashTable<String, Vec<RecordId>>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record` to the group for `label`.
    ///
    /// The group is read, copied with the new record appended and written
    /// back under the same label, so every append costs a copy of the group.
    pub fn append(&mut self, label: &str, record: RecordId) -> Result<(), TableError> {
        let group = match self.table.get(label) {
            Some(existing) => {
                let mut group = Vec::with_capacity(existing.len() + 1);
                group.extend_from_slice(existing);
                group.push(record);
                group
            }
            None => vec![record],
        };
        self.table.try_insert(label.to_owned(), group)?;
        Ok(())
    }

    /// Undoes the last [`append`](Self::append) of `record` under `label`.
    /// A group left empty is dropped along with its label.
    pub fn retract(&mut self, label: &str, record: RecordId) {
        let Some(group) = self.table.get_mut(label) else {
            return;
        };
        if group.last() == Some(&record) {
            group.pop();
        }
        if group.is_empty() {
            self.table.remove(label);
        }
    }

    pub fn category_exists(&self, label: &str) -> bool {
        self.table.contains_key(label)
    }

    /// `None` for an unknown label. Known labels never have an empty group.
    pub fn group(&self, label: &str) -> Option<&[RecordId]> {
        self.table.get(label).map(Vec::as_slice)
    }

    /// The group for `label`, or an empty slice if the label is unknown.
    /// Use [`category_exists`](Self::category_exists) to tell the two apart.
    pub fn list(&self, label: &str) -> &[RecordId] {
        self.group(label).unwrap_or_default()
    }

    /// Every known label, in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
