use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceType — How the entered price relates to the quantity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceType {
    /// The entered price is for a single unit.
    #[default]
    PerUnit,
    /// The entered price is the net price for the whole quantity.
    Net,
}

impl PriceType {
    /// Derive `(price_per_unit, total_price)` from an entered price.
    ///
    /// `quantity` must already be validated as strictly positive.
    pub fn derive(self, price_input: f64, quantity: f64) -> (f64, f64) {
        match self {
            PriceType::PerUnit => (price_input, price_input * quantity),
            PriceType::Net => (price_input / quantity, price_input),
        }
    }
}

// ---------------------------------------------------------------------------
// Item — One grocery list entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub category: String,
    pub item_name: String,
    pub quantity: f64,
    pub unit: String,
    pub price_type: PriceType,
    pub price_input: f64,
    pub price_per_unit: f64,
    pub total_price: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub bought: bool,
    pub date_added: NaiveDate,
}

impl Item {
    /// Whether `price_per_unit * quantity` agrees with `total_price`.
    pub fn prices_consistent(&self) -> bool {
        let expected = self.price_per_unit * self.quantity;
        let scale = expected.abs().max(self.total_price.abs()).max(1.0);
        (expected - self.total_price).abs() <= 1e-9 * scale
    }
}

// ---------------------------------------------------------------------------
// ItemDraft — Caller-supplied candidate for add/update
// ---------------------------------------------------------------------------

/// Raw field values collected from the user, not yet validated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemDraft {
    pub category: String,
    pub item_name: String,
    pub quantity: f64,
    pub unit: String,
    pub price_type: PriceType,
    pub price_input: f64,
    pub comment: String,
}

impl ItemDraft {
    pub fn new(
        category: impl Into<String>,
        item_name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        price_type: PriceType,
        price_input: f64,
    ) -> Self {
        Self {
            category: category.into(),
            item_name: item_name.into(),
            quantity,
            unit: unit.into(),
            price_type,
            price_input,
            comment: String::new(),
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}
