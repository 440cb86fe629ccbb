//! Gallery category filter.
//!
//! The filter chips are derived from the projects actually fetched, not
//! from the category table: `"todas"` first, then every distinct project
//! category in first-seen order.

/// Filter value that shows every project.
pub const ALL_CATEGORIES: &str = "todas";

/// Build the filter list from project categories in display order.
pub fn category_filters<'a, I>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut filters = vec![ALL_CATEGORIES.to_string()];
    for category in categories {
        if !filters.iter().any(|f| f == category) {
            filters.push(category.to_string());
        }
    }
    filters
}

/// Whether a project in `category` is visible under `selected`.
pub fn matches_filter(selected: &str, category: &str) -> bool {
    selected == ALL_CATEGORIES || selected == category
}

/// Keep the items visible under `selected`, preserving order.
pub fn filter_by_category<'a, T, F>(items: &'a [T], selected: &str, category_of: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    items
        .iter()
        .filter(|item| matches_filter(selected, category_of(item)))
        .collect()
}

/// Chip label: first character upper-cased, rest untouched.
pub fn filter_label(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
