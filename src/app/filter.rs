//! Case-insensitive substring filtering of the item list.
//!
//! Case folding is done per character with [`char::to_lowercase`] on both the
//! item name and the query. [`filter_items`] and [`match_range`] share that
//! folding, so a visible item always has a highlight range and vice versa.

use crate::domain::Item;

/// Lowercases `text` one character at a time.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Whether `name` contains `query`, ignoring case. An empty query matches.
#[must_use]
pub fn matches(name: &str, query: &str) -> bool {
    query.is_empty() || fold_case(name).contains(&fold_case(query))
}

/// Returns the items whose name contains `query`, in their original order.
///
/// # Examples
///
/// ```
/// use basket::app::filter::filter_items;
/// use basket::domain::{Item, ItemId};
///
/// let items = vec![
///     Item::new(ItemId::new_v4(), "🍌 banana"),
///     Item::new(ItemId::new_v4(), "🍏 apple"),
///     Item::new(ItemId::new_v4(), "🍉 watermelon"),
/// ];
/// let names: Vec<_> = filter_items(&items, "AN").into_iter().map(|i| i.name).collect();
/// assert_eq!(names, ["🍌 banana"]);
/// ```
#[must_use]
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    if query.is_empty() {
        return items.to_vec();
    }

    let needle = fold_case(query);
    items
        .iter()
        .filter(|item| fold_case(&item.name).contains(&needle))
        .cloned()
        .collect()
}

/// Character range `(start, end)` of the first match of `query` in `name`.
///
/// Indices count characters of the original `name` (end exclusive). Returns
/// `None` for an empty query or when nothing matches.
#[must_use]
pub fn match_range(name: &str, query: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }

    // Folding can expand one char into several; remember where each came from.
    let mut folded = Vec::new();
    let mut origin = Vec::new();
    for (idx, c) in name.chars().enumerate() {
        for lower in c.to_lowercase() {
            folded.push(lower);
            origin.push(idx);
        }
    }

    if needle.len() > folded.len() {
        return None;
    }

    let start = folded
        .windows(needle.len())
        .position(|window| window == needle.as_slice())?;
    let last = start + needle.len() - 1;

    Some((origin[start], origin[last] + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    fn items(names: &[&str]) -> Vec<Item> {
        names
            .iter()
            .map(|n| Item::new(ItemId::new_v4(), *n))
            .collect()
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let list = items(&["🍌 banana", "🍏 apple", "🍉 watermelon"]);
        assert_eq!(filter_items(&list, ""), list);
    }

    #[test]
    fn substring_not_subsequence() {
        let list = items(&["🍌 banana", "🍏 apple", "🍉 watermelon"]);
        assert_eq!(names(&filter_items(&list, "an")), ["🍌 banana"]);
    }

    #[test]
    fn preserves_relative_order() {
        let list = items(&["pear", "apple", "kiwi", "grape", "pineapple", "papaya"]);
        assert_eq!(
            names(&filter_items(&list, "ap")),
            ["apple", "grape", "pineapple", "papaya"]
        );
    }

    #[test]
    fn upper_and_lower_queries_agree() {
        let list = items(&["Banana", "bAnAnA split", "cherry", "MANGO"]);
        for query in ["an", "ang", "split", "x", "a"] {
            assert_eq!(
                filter_items(&list, query),
                filter_items(&list, &query.to_uppercase()),
                "query {query:?}"
            );
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let list = items(&["🍏 apple", "🍏 apple"]);
        assert_eq!(filter_items(&list, "apple").len(), 2);
    }

    #[test]
    fn emoji_in_query_matches() {
        let list = items(&["🍌 banana", "🍏 apple"]);
        assert_eq!(names(&filter_items(&list, "🍏")), ["🍏 apple"]);
    }

    #[test]
    fn matches_agrees_with_filter() {
        assert!(matches("Watermelon", ""));
        assert!(matches("Watermelon", "MELON"));
        assert!(!matches("Watermelon", "an"));
    }

    #[test]
    fn match_range_counts_characters_not_bytes() {
        assert_eq!(match_range("🍌 banana", "ban"), Some((2, 5)));
        assert_eq!(match_range("🍌 banana", "BAN"), Some((2, 5)));
    }

    #[test]
    fn match_range_is_first_occurrence() {
        assert_eq!(match_range("banana", "an"), Some((1, 3)));
    }

    #[test]
    fn match_range_none_for_empty_or_missing() {
        assert_eq!(match_range("apple", ""), None);
        assert_eq!(match_range("apple", "pear"), None);
        assert_eq!(match_range("", "a"), None);
    }
}
