use std::path::PathBuf;

/// Key under which the list snapshot is stored.
pub const STORAGE_KEY: &str = "groceryListItems";
/// Version string written into every snapshot.
pub const APP_VERSION: &str = "1.0.0";
/// First id handed out by an empty store (and again after a clear).
pub const INITIAL_ID: u64 = 1;
/// Category filter value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";
/// Suggested-item entry that stands for a free-text item name.
pub const OTHER_ITEM: &str = "Other";

pub fn default_categories() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "Fruits",
            vec![
                "Apple", "Banana", "Orange", "Mango", "Grapes", "Pomegranate", "Watermelon",
                "Pineapple", "Papaya", "Guava", "Other",
            ],
        ),
        (
            "Vegetables",
            vec![
                "Onion", "Potato", "Tomato", "Carrot", "Spinach", "Cabbage", "Cauliflower",
                "Brinjal", "Okra", "Capsicum", "Other",
            ],
        ),
        (
            "Non Veg",
            vec!["Chicken", "Mutton", "Fish", "Prawns", "Eggs", "Other"],
        ),
        (
            "Dairy",
            vec!["Milk", "Butter", "Cheese", "Yogurt", "Paneer", "Cream", "Other"],
        ),
        (
            "Bakery",
            vec!["Bread", "Buns", "Cake", "Cookies", "Pastry", "Other"],
        ),
        (
            "Pantry",
            vec![
                "Rice", "Wheat Flour", "Mustard Oil", "Rice Bran Oil", "Sunflower Oil",
                "Coconut Oil", "Sugar", "Salt", "Spices", "Dal", "Other",
            ],
        ),
        (
            "Frozen",
            vec!["Ice Cream", "Frozen Vegetables", "Frozen Snacks", "Other"],
        ),
        (
            "Beverages",
            vec!["Tea", "Coffee", "Juice", "Soft Drinks", "Water", "Other"],
        ),
        (
            "Snacks",
            vec!["Chips", "Biscuits", "Nuts", "Chocolates", "Other"],
        ),
        (
            "Personal Care",
            vec!["Soap", "Shampoo", "Toothpaste", "Other"],
        ),
        (
            "Household",
            vec!["Detergent", "Cleaning Supplies", "Other"],
        ),
        ("Other", vec!["Other"]),
    ]
}

/// Unit vocabulary as `(value, label)` pairs.
pub fn default_units() -> Vec<(&'static str, &'static str)> {
    vec![
        ("pcs", "pieces (pcs)"),
        ("kg", "kilogram (kg)"),
        ("g", "grams (g)"),
        ("l", "liters (l)"),
        ("ml", "milliliters (ml)"),
        ("dozen", "dozen"),
        ("pack", "pack"),
        ("bottle", "bottle"),
        ("can", "can"),
        ("box", "box"),
    ]
}

pub fn default_storage_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("grocery-list")
    } else {
        PathBuf::from(".grocery-list")
    }
}
