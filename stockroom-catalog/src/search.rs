//! Product lookup by free-text code or name.

use crate::inventory::Catalog;
use crate::product::Product;

/// Longest product name shown untruncated in the picker.
pub const LABEL_MAX_CHARS: usize = 50;

/// Case-insensitive name match, or a verbatim substring of the id.
pub fn matches(product: &Product, query: &str) -> bool {
    product.name.to_lowercase().contains(&query.to_lowercase()) || product.id.contains(query)
}

/// Cut long names to `LABEL_MAX_CHARS` characters followed by `...`
pub fn display_label(name: &str) -> String {
    if name.chars().count() > LABEL_MAX_CHARS {
        let head: String = name.chars().take(LABEL_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

impl Catalog {
    /// Products matching `query`, in catalog order. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.products().iter().filter(|p| matches(p, query)).collect()
    }

    pub fn first_match(&self, query: &str) -> Option<&Product> {
        self.products().iter().find(|p| matches(p, query))
    }
}
