use crate::commands::enrich::Catalog;
use crate::commands::sort::SortSpec;
use crate::commands::{filter, sort, CmdResult};
use crate::state::FilterState;

/// The visible list for `state`: filtered, then sorted when a sort is requested.
pub fn run(catalog: &Catalog, state: &FilterState, sort_spec: Option<SortSpec>) -> CmdResult {
    let mut listed = filter::apply(catalog.products(), state);
    if let Some(spec) = sort_spec {
        sort::apply(&mut listed, spec);
    }

    CmdResult::default().with_listed_products(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sort::SortKey;
    use crate::model::{CategoryId, UserId};
    use crate::state::Transition;
    use crate::test_utils::{milk_dataset, product_names, shop_dataset};

    #[test]
    fn default_state_lists_everything_in_dataset_order() {
        let catalog = Catalog::from_dataset(&milk_dataset());
        let result = run(&catalog, &FilterState::new(), None);

        assert_eq!(result.listed_products.len(), 1);
        let milk = &result.listed_products[0];
        assert_eq!(milk.name(), "Milk");
        assert_eq!(milk.category_label(), "🍺 - Grocery");
        assert_eq!(milk.user().unwrap().name, "Max");
    }

    #[test]
    fn sorts_after_filtering() {
        let catalog = Catalog::from_dataset(&shop_dataset());
        let state = FilterState::new().apply(Transition::SelectUser(UserId(2)));
        let result = run(&catalog, &state, Some(SortSpec::desc(SortKey::Name)));
        assert_eq!(
            product_names(&result.listed_products),
            vec!["Eggs", "Bread", "Apple"]
        );
    }

    #[test]
    fn reset_restores_full_list() {
        let catalog = Catalog::from_dataset(&shop_dataset());
        let state = FilterState::new()
            .apply(Transition::SelectUser(UserId(1)))
            .apply(Transition::SetQuery("shake".into()))
            .apply(Transition::ToggleCategory(CategoryId(2)));
        assert_eq!(
            product_names(&run(&catalog, &state, None).listed_products),
            vec!["Milkshake"]
        );

        let reset = state.apply(Transition::ResetAll);
        assert_eq!(
            product_names(&run(&catalog, &reset, None).listed_products),
            product_names(catalog.products())
        );
    }
}
