//! CSV export of grocery items.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::models::Item;

/// Header row, in column order.
pub const CSV_HEADER: &str =
    "Category,Item,Quantity,Unit,Price per Unit,Total Price,Comment,Date Added,Bought";

/// Format used for the "Date Added" column (day/month/year).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Double-quote a field, doubling any embedded quotes.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render one item as a CSV row (no trailing newline).
pub fn csv_row(item: &Item, catalog: &Catalog) -> String {
    let mut row = String::new();
    let _ = write!(
        row,
        "{},{},{},{},{:.2},{:.2},{},{},{}",
        quote(&item.category),
        quote(&item.item_name),
        item.quantity,
        quote(catalog.unit_label(&item.unit)),
        item.price_per_unit,
        item.total_price,
        quote(&item.comment),
        quote(&item.date_added.format(DATE_FORMAT).to_string()),
        if item.bought { "Yes" } else { "No" },
    );
    row
}

/// Render `items` as a CSV document: header plus one row per item.
///
/// Units are written with their catalog label. Rows are separated by `\n`
/// with no trailing newline.
pub fn to_csv<'a>(items: impl IntoIterator<Item = &'a Item>, catalog: &Catalog) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(items.into_iter().map(|item| csv_row(item, catalog)));
    lines.join("\n")
}

/// File name for an export made on `date`, e.g. `grocery-list-2024-03-01.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("grocery-list-{}.csv", date.format("%Y-%m-%d"))
}
