//! Category and unit vocabulary.
//!
//! Categories carry an ordered list of suggested item names ending in
//! `"Other"`, which stands for a free-text name. Units pair a stored value
//! (`"kg"`) with a display label (`"kilogram (kg)"`).

use crate::config;

/// A unit of measure accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub value: String,
    pub label: String,
}

/// Category and unit vocabulary used for validation and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<(String, Vec<String>)>,
    units: Vec<Unit>,
}

impl Default for Catalog {
    fn default() -> Self {
        let categories = config::default_categories()
            .into_iter()
            .map(|(name, items)| {
                (
                    name.to_string(),
                    items.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();
        let units = config::default_units()
            .into_iter()
            .map(|(value, label)| Unit {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect();
        Self { categories, units }
    }
}

impl Catalog {
    /// Build a catalog from explicit tables.
    pub fn new(categories: Vec<(String, Vec<String>)>, units: Vec<Unit>) -> Self {
        Self { categories, units }
    }

    /// Category names in display order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Suggested item names for a category, or `None` for an unknown category.
    pub fn suggested_items(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, items)| items.as_slice())
    }

    pub fn is_known_category(&self, category: &str) -> bool {
        self.suggested_items(category).is_some()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn is_known_unit(&self, value: &str) -> bool {
        self.units.iter().any(|u| u.value == value)
    }

    /// Display label for a unit value, falling back to the value itself.
    pub fn unit_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.units
            .iter()
            .find(|u| u.value == value)
            .map(|u| u.label.as_str())
            .unwrap_or(value)
    }
}

