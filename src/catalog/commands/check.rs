//! Dataset integrity report.
//!
//! Dangling references and duplicate ids are legal input: enrichment degrades them
//! to `None` or first-match. This command only reports them; it never fails and
//! never alters the dataset.

use crate::commands::{CmdMessage, CmdResult};
use crate::source::Dataset;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

pub fn run(dataset: &Dataset, source: &str) -> CmdResult {
    let mut result = CmdResult::default();

    for id in duplicates(dataset.users.iter().map(|u| u.id)) {
        result.add_message(CmdMessage::warning(format!("Duplicate user id: {}", id)));
    }
    for id in duplicates(dataset.categories.iter().map(|c| c.id)) {
        result.add_message(CmdMessage::warning(format!("Duplicate category id: {}", id)));
    }
    for id in duplicates(dataset.products.iter().map(|p| p.id)) {
        result.add_message(CmdMessage::warning(format!("Duplicate product id: {}", id)));
    }

    let user_ids: HashSet<_> = dataset.users.iter().map(|u| u.id).collect();
    for category in &dataset.categories {
        if !user_ids.contains(&category.owner_id) {
            result.add_message(CmdMessage::warning(format!(
                "Category {} ({}) references missing owner {}",
                category.id, category.title, category.owner_id
            )));
        }
    }

    let category_ids: HashSet<_> = dataset.categories.iter().map(|c| c.id).collect();
    for product in &dataset.products {
        if !category_ids.contains(&product.category_id) {
            result.add_message(CmdMessage::warning(format!(
                "Product {} ({}) references missing category {}",
                product.id, product.name, product.category_id
            )));
        }
    }

    if result.messages.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "{} is consistent: {} users, {} categories, {} products",
            source,
            dataset.users.len(),
            dataset.categories.len(),
            dataset.products.len()
        )));
    } else {
        tracing::warn!(issues = result.messages.len(), source, "dataset has integrity issues");
    }

    result
}

/// Ids seen more than once, each reported once, in order of first repetition.
fn duplicates<T, I>(ids: I) -> Vec<T>
where
    T: Copy + Eq + Hash + Display,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dupes = Vec::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            dupes.push(id);
        }
    }
    dupes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Sex;
    use crate::test_utils::{category, milk_dataset, product, shop_dataset, user};

    #[test]
    fn consistent_dataset_reports_success() {
        let result = run(&milk_dataset(), "fixture");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("1 users, 1 categories, 1 products"));
    }

    #[test]
    fn reports_dangling_category() {
        let result = run(&shop_dataset(), "fixture");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("Mystery"));
        assert!(result.messages[0].content.contains("missing category 42"));
    }

    #[test]
    fn reports_missing_owner_and_duplicates() {
        let dataset = Dataset {
            users: vec![user(1, "Roma", Sex::M), user(1, "Roma again", Sex::M)],
            categories: vec![category(1, "Ghost", "👻", 7)],
            products: vec![product(1, "A", 1), product(1, "B", 1), product(1, "C", 1)],
        };
        let result = run(&dataset, "fixture");
        let contents: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();

        assert!(contents.contains(&"Duplicate user id: 1"));
        assert!(contents.contains(&"Duplicate product id: 1"));
        assert!(contents.iter().any(|c| c.contains("missing owner 7")));
        assert_eq!(
            contents.iter().filter(|c| c.starts_with("Duplicate product")).count(),
            1
        );
        assert!(result
            .messages
            .iter()
            .all(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn empty_dataset_is_consistent() {
        let result = run(&Dataset::default(), "empty");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }
}
