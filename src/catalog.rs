use collections::TableError;
use log::{trace, warn};

use crate::{
    InventoryError,
    index::{CategoryIndex, ProductIndex, RecordId},
    product::Product,
};

/// Owns every ingested [`Product`] and keeps both indexes over them.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: ProductIndex,
    by_category: CategoryIndex,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `product`, indexes it by id and files it under each of its
    /// categories.
    ///
    /// A product whose id is already indexed takes over the id, the earlier
    /// product stays in the store and in its category groups.
    ///
    /// If an index cannot grow, every change made for `product` is undone
    /// and the catalog is left as it was before the call.
    pub fn add_product(&mut self, product: Product) -> Result<RecordId, InventoryError> {
        let record = RecordId::new(self.products.len());
        self.products.push(product);

        let mut progress = Progress::default();
        if let Err(e) = self.index_record(record, &mut progress) {
            warn!(target: "catalog", "indexing {record:?} failed, rolling back: {e}");
            self.rollback(record, progress);
            return Err(e.into());
        }

        let uniq_id = self.products[record.index()].uniq_id();
        trace!(target: "catalog", "added {uniq_id} as {record:?}");
        Ok(record)
    }

    fn index_record(
        &mut self,
        record: RecordId,
        progress: &mut Progress,
    ) -> Result<(), TableError> {
        let product = &self.products[record.index()];

        progress.displaced = self.by_id.insert(product.uniq_id(), record)?;
        progress.id_indexed = true;
        for category in product.categories() {
            self.by_category.append(category, record)?;
            progress.filed += 1;
        }
        Ok(())
    }

    /// Removes the last stored record and whatever `progress` says was
    /// indexed for it.
    fn rollback(&mut self, record: RecordId, progress: Progress) {
        let Some(product) = self.products.pop() else {
            return;
        };
        debug_assert_eq!(self.products.len(), record.index());

        for category in &product.categories()[..progress.filed] {
            self.by_category.retract(category, record);
        }
        if progress.id_indexed {
            self.by_id.revert(product.uniq_id(), progress.displaced);
        }
    }

    pub fn find_product(&self, uniq_id: &str) -> Option<&Product> {
        self.by_id.find(uniq_id).and_then(|record| self.get(record))
    }

    pub fn get(&self, record: RecordId) -> Option<&Product> {
        self.products.get(record.index())
    }

    pub fn category_exists(&self, label: &str) -> bool {
        self.by_category.category_exists(label)
    }

    /// Products filed under `label` in the order they were added.
    /// Empty if the category is unknown, see [`category_exists`](Self::category_exists).
    pub fn list_by_category(&self, label: &str) -> Vec<&Product> {
        self.by_category
            .list(label)
            .iter()
            .filter_map(|&record| self.get(record))
            .collect()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.by_category.labels()
    }

    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    /// Number of stored products, including ones whose id was later taken
    /// over by a duplicate.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of distinct ids that can be looked up.
    pub fn indexed_len(&self) -> usize {
        self.by_id.len()
    }
}

/// How far [`Catalog::index_record`] got before it stopped.
#[derive(Debug, Default)]
struct Progress {
    id_indexed: bool,
    displaced: Option<RecordId>,
    filed: usize,
}

#[cfg(test)]
mod test {
    use super::{Catalog, Progress};
    use crate::{index::RecordId, product::Product};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let products = [
            Product::new("id1", "Crossbow Longboard", "DB", "$237.68", "Sports | Skateboarding"),
            Product::new("id2", "Snap Circuits", "", "$99.95", "Toys & Games | Science Kits"),
        ];
        for product in products {
            catalog.add_product(product).unwrap();
        }
        catalog
    }

    #[test]
    fn find_by_id() {
        let catalog = catalog();

        let p = catalog.find_product("id1").unwrap();
        assert_eq!(p.name(), "Crossbow Longboard");
        assert_eq!(p.manufacturer(), "DB");
        assert_eq!(p.price(), "$237.68");
        assert!(catalog.find_product("id3").is_none());
    }

    #[test]
    fn list_categories() {
        let catalog = catalog();

        assert!(catalog.category_exists("Sports"));
        let names: Vec<&str> = catalog
            .list_by_category("Science Kits")
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(names, ["Snap Circuits"]);

        assert!(!catalog.category_exists("Books"));
        assert!(catalog.list_by_category("Books").is_empty());
        assert_eq!(catalog.category_count(), 4);
        assert_eq!(catalog.categories().count(), 4);
    }

    #[test]
    fn duplicate_id_keeps_both_records() {
        let mut catalog = catalog();
        catalog
            .add_product(Product::new("id1", "Replacement", "", "", "Sports"))
            .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.indexed_len(), 2);
        assert_eq!(catalog.find_product("id1").unwrap().name(), "Replacement");
        assert_eq!(catalog.list_by_category("Sports").len(), 2);
    }

    #[test]
    fn uncategorized_products() {
        let mut catalog = Catalog::new();
        catalog.add_product(Product::new("a", "A", "", "", "")).unwrap();
        catalog.add_product(Product::new("b", "B", "", "", " | ")).unwrap();

        assert!(catalog.category_exists("NA"));
        assert_eq!(catalog.list_by_category("NA").len(), 2);
    }

    #[test]
    fn rollback_after_partial_indexing() {
        let mut catalog = catalog();
        let before = catalog.find_product("id1").unwrap().name().to_string();

        // id taken over and only the first of two categories filed
        let record = RecordId::new(catalog.len());
        catalog
            .products
            .push(Product::new("id1", "Half Done", "", "", "Sports | Longboards"));
        let displaced = catalog.by_id.insert("id1", record).unwrap();
        catalog.by_category.append("Sports", record).unwrap();

        let progress = Progress {
            id_indexed: true,
            displaced,
            filed: 1,
        };
        catalog.rollback(record, progress);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.indexed_len(), 2);
        assert_eq!(catalog.find_product("id1").unwrap().name(), before);
        assert_eq!(catalog.list_by_category("Sports").len(), 1);
        assert!(!catalog.category_exists("Longboards"));
        assert_eq!(catalog.category_count(), 4);
    }

    #[test]
    fn rollback_of_new_id() {
        let mut catalog = catalog();

        let record = RecordId::new(catalog.len());
        catalog.products.push(Product::new("id9", "Fresh", "", "", "Books"));
        let displaced = catalog.by_id.insert("id9", record).unwrap();

        let progress = Progress {
            id_indexed: true,
            displaced,
            filed: 0,
        };
        catalog.rollback(record, progress);

        assert!(catalog.find_product("id9").is_none());
        assert!(catalog.get(record).is_none());
        assert_eq!(catalog.indexed_len(), 2);
        assert!(!catalog.category_exists("Books"));
    }
}
