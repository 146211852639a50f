// crates/domain/src/dedup.rs
use std::collections::HashSet;

/// Removes later duplicates, keeping the first occurrence of each string in
/// its original position.
#[must_use]
pub fn dedup_preserving_order(mut items: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.clone()));
    items
}
