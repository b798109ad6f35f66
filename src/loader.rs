//! CSV ingestion for the product export.
//!
//! Only a handful of columns are used, and the quoting rules are those of the
//! export rather than full RFC 4180: a `"` toggles quoting and is dropped.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, info, warn};

use crate::{InventoryError, catalog::Catalog, product::Product};

/// Rows with fewer fields than this are skipped.
pub const MIN_FIELDS: usize = 8;

const COL_UNIQ_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_MANUFACTURER: usize = 2;
const COL_CATEGORY: usize = 4;
const COL_PRICE: usize = 7;

const FIELD_TRIM: &[char] = &[' ', '\t', '\r', '\n', '"'];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub loaded: usize,
    pub skipped: usize,
}

/// Splits one CSV line into trimmed fields.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(field.trim_matches(FIELD_TRIM).to_string());
                field.clear();
            }
            c => field.push(c),
        }
    }
    fields.push(field.trim_matches(FIELD_TRIM).to_string());

    fields
}

/// Builds a product from a parsed row, `None` if the row is too short.
pub fn product_from_fields(fields: &[String]) -> Option<Product> {
    if fields.len() < MIN_FIELDS {
        return None;
    }

    Some(Product::new(
        fields[COL_UNIQ_ID].as_str(),
        fields[COL_NAME].as_str(),
        fields[COL_MANUFACTURER].as_str(),
        fields[COL_PRICE].as_str(),
        fields[COL_CATEGORY].as_str(),
    ))
}

impl Catalog {
    /// Reads a CSV export whose first line is a header.
    pub fn load_csv<R: BufRead>(&mut self, reader: R) -> Result<LoadStats, InventoryError> {
        let mut lines = reader.lines();
        let header = lines.next().ok_or(InventoryError::MissingHeader)??;
        debug!(target: "load_csv", "header: {header}");

        let mut stats = LoadStats::default();
        for (i, line) in lines.enumerate() {
            let line = line?;
            // the header was line 1
            let line_num = i + 2;
            if line.is_empty() {
                continue;
            }

            let fields = parse_line(&line);
            let Some(product) = product_from_fields(&fields) else {
                warn!(
                    target: "load_csv",
                    "line {line_num} has insufficient fields ({}), skipping",
                    fields.len()
                );
                stats.skipped += 1;
                continue;
            };

            self.add_product(product)?;
            stats.loaded += 1;
        }

        info!(
            target: "load_csv",
            "loaded {} products into {} categories, skipped {} lines",
            stats.loaded,
            self.category_count(),
            stats.skipped
        );
        Ok(stats)
    }

    pub fn load_csv_file<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadStats, InventoryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InventoryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_csv(BufReader::new(file))
    }
}
