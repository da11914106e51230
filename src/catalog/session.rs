//! # Session
//!
//! The UI state container. A [`Session`] owns the current [`FilterState`], the
//! optional column sort and the visible list derived from them.
//!
//! Every call runs to completion before returning and recomputes the visible list
//! from the shared [`Catalog`]. The catalog itself is only rebuilt when the dataset
//! changes ([`Session::replace_catalog`]); transitions only rerun the filter pass.

use crate::commands::enrich::Catalog;
use crate::commands::list;
use crate::commands::sort::{self, SortKey, SortSpec};
use crate::model::EnrichedProduct;
use crate::state::{FilterState, Transition};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    state: FilterState,
    sort: Option<SortSpec>,
    visible: Vec<Arc<EnrichedProduct>>,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let visible = catalog.products().to_vec();
        Self {
            catalog,
            state: FilterState::default(),
            sort: None,
            visible,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn visible(&self) -> &[Arc<EnrichedProduct>] {
        &self.visible
    }

    pub fn dispatch(&mut self, transition: Transition) {
        tracing::debug!(?transition, "dispatch");
        if transition == Transition::ResetAll {
            self.sort = None;
        }
        self.state = self.state.apply(transition);
        self.recompute();
    }

    /// Advance the sort on `key` (unsorted -> ascending -> descending -> unsorted).
    pub fn cycle_sort(&mut self, key: SortKey) {
        self.set_sort(sort::cycle(self.sort, key));
    }

    pub fn set_sort(&mut self, spec: Option<SortSpec>) {
        tracing::debug!(?spec, "sort changed");
        self.sort = spec;
        self.recompute();
    }

    /// Swap in a catalog derived from a changed dataset. Selections are kept.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = list::run(&self.catalog, &self.state, self.sort).listed_products;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryId, UserId};
    use crate::test_utils::{milk_dataset, product_names, shop_dataset};

    fn session(dataset: crate::source::Dataset) -> Session {
        Session::new(Arc::new(Catalog::from_dataset(&dataset)))
    }

    #[test]
    fn starts_with_everything_visible() {
        let s = session(milk_dataset());
        assert!(s.state().is_initial());
        assert_eq!(product_names(s.visible()), vec!["Milk"]);
    }

    #[test]
    fn unmatched_query_empties_visible_list() {
        let mut s = session(milk_dataset());
        s.dispatch(Transition::SetQuery("xyz".into()));
        assert!(s.visible().is_empty());
    }

    #[test]
    fn toggling_a_category_twice_restores_the_list() {
        let mut s = session(shop_dataset());
        let before = product_names(s.visible());

        s.dispatch(Transition::ToggleCategory(CategoryId(1)));
        assert_eq!(product_names(s.visible()), vec!["Bread", "Eggs"]);

        s.dispatch(Transition::ToggleCategory(CategoryId(1)));
        assert!(s.state().categories.is_empty());
        assert_eq!(product_names(s.visible()), before);
    }

    #[test]
    fn reset_clears_filters_and_sort() {
        let mut s = session(shop_dataset());
        let full = product_names(s.visible());

        s.dispatch(Transition::SelectUser(UserId(2)));
        s.dispatch(Transition::SetQuery("e".into()));
        s.cycle_sort(SortKey::Name);
        assert_eq!(product_names(s.visible()), vec!["Apple", "Bread", "Eggs"]);

        s.dispatch(Transition::ResetAll);
        assert!(s.sort().is_none());
        assert!(s.state().is_initial());
        assert_eq!(product_names(s.visible()), full);
    }

    #[test]
    fn sort_survives_filter_changes() {
        let mut s = session(shop_dataset());
        s.cycle_sort(SortKey::Name);
        s.cycle_sort(SortKey::Name);
        s.dispatch(Transition::SetQuery("milk".into()));
        assert_eq!(product_names(s.visible()), vec!["Milkshake", "Milk"]);
    }

    #[test]
    fn replacing_the_catalog_keeps_selections() {
        let mut s = session(shop_dataset());
        s.dispatch(Transition::SetQuery("milk".into()));

        s.replace_catalog(Arc::new(Catalog::from_dataset(&milk_dataset())));
        assert_eq!(s.state().query, "milk");
        assert_eq!(product_names(s.visible()), vec!["Milk"]);
    }
}
