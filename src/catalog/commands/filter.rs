use crate::model::EnrichedProduct;
use crate::state::FilterState;
use std::sync::Arc;

/// Applies the active predicates of `state` to `products`, in order: user, text,
/// category. Inactive predicates are skipped. Surviving products keep their
/// relative order.
pub fn apply(
    products: &[Arc<EnrichedProduct>],
    state: &FilterState,
) -> Vec<Arc<EnrichedProduct>> {
    let query = state.query.to_lowercase();

    let visible: Vec<_> = products
        .iter()
        .filter(|p| matches_user(p, state))
        .filter(|p| query.is_empty() || p.name().to_lowercase().contains(&query))
        .filter(|p| {
            state.categories.is_empty() || state.categories.contains(&p.product.category_id)
        })
        .cloned()
        .collect();

    tracing::debug!(
        total = products.len(),
        visible = visible.len(),
        "filter applied"
    );
    visible
}

fn matches_user(product: &EnrichedProduct, state: &FilterState) -> bool {
    match state.user {
        None => true,
        Some(id) => product.user().is_some_and(|u| u.id == id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::enrich::Catalog;
    use crate::model::{CategoryId, UserId};
    use crate::state::Transition;
    use crate::test_utils::{milk_dataset, product_names, shop_dataset};

    fn shop() -> Catalog {
        Catalog::from_dataset(&shop_dataset())
    }

    #[test]
    fn no_active_filter_is_identity() {
        let catalog = shop();
        let visible = apply(catalog.products(), &FilterState::new());
        assert_eq!(product_names(&visible), product_names(catalog.products()));
    }

    #[test]
    fn user_filter_keeps_owned_products_only() {
        let catalog = shop();
        let state = FilterState::new().apply(Transition::SelectUser(UserId(1)));
        let visible = apply(catalog.products(), &state);
        assert_eq!(product_names(&visible), vec!["Milk", "Milkshake"]);
    }

    #[test]
    fn user_filter_excludes_unresolved_products() {
        let catalog = shop();
        for id in [1, 2] {
            let state = FilterState::new().apply(Transition::SelectUser(UserId(id)));
            let visible = apply(catalog.products(), &state);
            assert!(!product_names(&visible).contains(&"Mystery".to_string()));
        }
    }

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        let catalog = shop();
        let state = FilterState::new().apply(Transition::SetQuery("MiLk".into()));
        let visible = apply(catalog.products(), &state);
        assert_eq!(product_names(&visible), vec!["Milk", "Milkshake"]);
    }

    #[test]
    fn text_filter_does_not_trim() {
        let catalog = shop();
        let state = FilterState::new().apply(Transition::SetQuery(" milk".into()));
        assert!(apply(catalog.products(), &state).is_empty());
    }

    #[test]
    fn category_filter_uses_set_membership() {
        let catalog = shop();
        let state = FilterState::new()
            .apply(Transition::ToggleCategory(CategoryId(1)))
            .apply(Transition::ToggleCategory(CategoryId(3)));
        let visible = apply(catalog.products(), &state);
        assert_eq!(product_names(&visible), vec!["Bread", "Eggs", "Apple"]);
    }

    #[test]
    fn category_filter_matches_raw_id_even_when_dangling() {
        let catalog = shop();
        let state = FilterState::new().apply(Transition::ToggleCategory(CategoryId(42)));
        let visible = apply(catalog.products(), &state);
        assert_eq!(product_names(&visible), vec!["Mystery"]);
    }

    #[test]
    fn predicates_combine_conjunctively() {
        let catalog = shop();
        let state = FilterState::new()
            .apply(Transition::SelectUser(UserId(2)))
            .apply(Transition::SetQuery("e".into()))
            .apply(Transition::ToggleCategory(CategoryId(3)));
        let visible = apply(catalog.products(), &state);
        assert_eq!(product_names(&visible), vec!["Apple"]);
    }

    #[test]
    fn adding_a_predicate_never_grows_the_result() {
        let catalog = shop();
        let base = FilterState::new().apply(Transition::SetQuery("e".into()));
        let narrower = base.apply(Transition::SelectUser(UserId(2)));
        let narrowest = narrower.apply(Transition::ToggleCategory(CategoryId(1)));

        let a = apply(catalog.products(), &base);
        let b = apply(catalog.products(), &narrower);
        let c = apply(catalog.products(), &narrowest);
        assert!(b.len() <= a.len());
        assert!(c.len() <= b.len());
        assert!(c.iter().all(|p| b.contains(p)));
        assert!(b.iter().all(|p| a.contains(p)));
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = shop();
        let state = FilterState::new().apply(Transition::SetQuery("milk".into()));
        let first = apply(catalog.products(), &state);
        let second = apply(catalog.products(), &state);
        assert_eq!(first, second);
        assert_eq!(apply(&first, &state), first);
    }

    #[test]
    fn scenario_selected_user_then_query() {
        let catalog = Catalog::from_dataset(&milk_dataset());
        let state = FilterState::new()
            .apply(Transition::SelectUser(UserId(1)))
            .apply(Transition::SetQuery("milk".into()));
        assert_eq!(product_names(&apply(catalog.products(), &state)), vec!["Milk"]);

        let state = state.apply(Transition::SetQuery("bread".into()));
        assert!(apply(catalog.products(), &state).is_empty());
    }

    #[test]
    fn scenario_unmatched_query_is_empty() {
        let catalog = Catalog::from_dataset(&milk_dataset());
        let state = FilterState::new().apply(Transition::SetQuery("xyz".into()));
        assert!(apply(catalog.products(), &state).is_empty());
    }
}
