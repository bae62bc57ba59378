//! Derived View Model
//!
//! Sorted projection and footer statistics, recomputed from the item list.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use crate::models::{Item, PackingStats, SortMode};

/// Items in display order. The list itself is never reordered.
pub fn sorted_view(items: &[Item], mode: SortMode) -> Vec<Item> {
    let mut view = items.to_vec();
    match mode {
        SortMode::InputOrder => {}
        SortMode::ByDescription => {
            let collator = description_collator();
            view.sort_by(|a, b| compare_descriptions(collator.as_ref(), &a.description, &b.description));
        }
        // stable: unpacked first, input order kept inside each group
        SortMode::ByPackedStatus => view.sort_by_key(|item| u8::from(item.packed)),
    }
    view
}

/// Root-locale collation from the compiled ICU data
fn description_collator() -> Option<CollatorBorrowed<'static>> {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!("collator unavailable, sorting by code point: {}", err);
            None
        }
    }
}

fn compare_descriptions(collator: Option<&CollatorBorrowed<'static>>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

pub fn stats(items: &[Item]) -> PackingStats {
    let total = items.len();
    let packed_count = items.iter().filter(|item| item.packed).count();
    PackingStats {
        total,
        packed_count,
        packed_percentage: packed_percentage(packed_count, total),
    }
}

/// Rounded half away from zero; 0 for an empty list
fn packed_percentage(packed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (packed as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// What the stats footer should say
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMessage {
    Complete,
    Summary(PackingStats),
}

impl FooterMessage {
    pub fn from_stats(stats: PackingStats) -> Self {
        if stats.total > 0 && stats.packed_percentage == 100 {
            FooterMessage::Complete
        } else {
            FooterMessage::Summary(stats)
        }
    }

    pub fn text(&self) -> String {
        match self {
            FooterMessage::Complete => "You got everything! Ready to go".to_string(),
            FooterMessage::Summary(s) => format!(
                "You have {} items in the list. You already packed {} ({}%).",
                s.total, s.packed_count, s.packed_percentage
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, Quantity};

    fn make_item(id: u64, description: &str, packed: bool) -> Item {
        Item {
            id: ItemId(id),
            description: description.to_string(),
            quantity: Quantity::ONE,
            packed,
        }
    }

    fn descriptions(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.description.as_str()).collect()
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(
            stats(&[]),
            PackingStats { total: 0, packed_count: 0, packed_percentage: 0 }
        );
    }

    #[test]
    fn test_stats_half_packed() {
        let items = vec![make_item(1, "Shirt", true), make_item(2, "Pants", false)];
        assert_eq!(
            stats(&items),
            PackingStats { total: 2, packed_count: 1, packed_percentage: 50 }
        );
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(packed_percentage(1, 3), 33);
        assert_eq!(packed_percentage(2, 3), 67);
        // 1/8 = 12.5 rounds away from zero
        assert_eq!(packed_percentage(1, 8), 13);
        assert_eq!(packed_percentage(3, 8), 38);
        assert_eq!(packed_percentage(4, 4), 100);
    }

    #[test]
    fn test_sort_by_packed_is_stable() {
        let items = vec![make_item(1, "A", true), make_item(2, "B", false), make_item(3, "C", false)];
        let view = sorted_view(&items, SortMode::ByPackedStatus);
        assert_eq!(descriptions(&view), ["B", "C", "A"]);
        assert_eq!(view[2], items[0]);
        // source untouched
        assert_eq!(descriptions(&items), ["A", "B", "C"]);
    }

    #[test]
    fn test_sort_by_description() {
        let sorted = vec![make_item(1, "Pants", false), make_item(2, "Shirt", false)];
        assert_eq!(descriptions(&sorted_view(&sorted, SortMode::ByDescription)), ["Pants", "Shirt"]);

        let reversed = vec![make_item(1, "Shirt", false), make_item(2, "Pants", false)];
        assert_eq!(descriptions(&sorted_view(&reversed, SortMode::ByDescription)), ["Pants", "Shirt"]);
    }

    #[test]
    fn test_sort_by_description_ignores_case() {
        let items = vec![make_item(1, "toothbrush", false), make_item(2, "Passport", false), make_item(3, "charger", false)];
        assert_eq!(
            descriptions(&sorted_view(&items, SortMode::ByDescription)),
            ["charger", "Passport", "toothbrush"]
        );
    }

    #[test]
    fn test_sort_by_description_accents() {
        let items = vec![make_item(1, "Zip", false), make_item(2, "Écharpe", false), make_item(3, "Fleece", false)];
        assert_eq!(
            descriptions(&sorted_view(&items, SortMode::ByDescription)),
            ["Écharpe", "Fleece", "Zip"]
        );

        let cased = vec![make_item(1, "A", false), make_item(2, "a", false), make_item(3, "b", false)];
        assert_eq!(descriptions(&sorted_view(&cased, SortMode::ByDescription)), ["a", "A", "b"]);
    }

    #[test]
    fn test_input_order_is_identity() {
        let items = vec![make_item(2, "Z", true), make_item(1, "A", false)];
        assert_eq!(sorted_view(&items, SortMode::InputOrder), items);
    }

    #[test]
    fn test_footer_message() {
        let empty = FooterMessage::from_stats(stats(&[]));
        assert_eq!(empty.text(), "You have 0 items in the list. You already packed 0 (0%).");

        let done = vec![make_item(1, "Hat", true)];
        assert_eq!(FooterMessage::from_stats(stats(&done)), FooterMessage::Complete);

        let half = vec![make_item(1, "Shirt", true), make_item(2, "Pants", false)];
        let msg = FooterMessage::from_stats(stats(&half));
        assert_eq!(msg.text(), "You have 2 items in the list. You already packed 1 (50%).");
    }
}
