//! Enrichment: resolving foreign keys into shared references.
//!
//! Both passes preserve input length and order and never fail. A reference that
//! does not resolve becomes `None`. When ids are duplicated the first record wins,
//! matching a linear first-match lookup.

use crate::model::{
    Category, CategoryId, EnrichedCategory, EnrichedProduct, Product, User, UserId,
};
use crate::source::Dataset;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// The enriched, denormalized view of a [`Dataset`].
///
/// Built once per dataset load; filter passes read from it without rebuilding.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Vec<Arc<User>>,
    categories: Vec<Arc<EnrichedCategory>>,
    products: Vec<Arc<EnrichedProduct>>,
}

impl Catalog {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let users: Vec<Arc<User>> = dataset.users.iter().cloned().map(Arc::new).collect();
        let categories = enrich_categories(&dataset.categories, &users);
        let products = enrich_products(&dataset.products, &categories);

        tracing::debug!(
            users = users.len(),
            categories = categories.len(),
            products = products.len(),
            "catalog enriched"
        );

        Self {
            users,
            categories,
            products,
        }
    }

    pub fn users(&self) -> &[Arc<User>] {
        &self.users
    }

    pub fn categories(&self) -> &[Arc<EnrichedCategory>] {
        &self.categories
    }

    pub fn products(&self) -> &[Arc<EnrichedProduct>] {
        &self.products
    }
}

pub fn enrich_categories(
    categories: &[Category],
    users: &[Arc<User>],
) -> Vec<Arc<EnrichedCategory>> {
    let by_id = first_by_key(users, |u| u.id);

    categories
        .iter()
        .map(|category| {
            Arc::new(EnrichedCategory {
                category: category.clone(),
                user: by_id.get(&category.owner_id).map(|&u| Arc::clone(u)),
            })
        })
        .collect()
}

pub fn enrich_products(
    products: &[Product],
    categories: &[Arc<EnrichedCategory>],
) -> Vec<Arc<EnrichedProduct>> {
    let by_id = first_by_key(categories, |c| c.id());

    products
        .iter()
        .map(|product| {
            Arc::new(EnrichedProduct {
                product: product.clone(),
                category: by_id.get(&product.category_id).map(|&c| Arc::clone(c)),
            })
        })
        .collect()
}

fn first_by_key<'a, T, K, F>(items: &'a [Arc<T>], key: F) -> HashMap<K, &'a Arc<T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(key(&**item)).or_insert(item);
    }
    index
}

// Linear lookups over an already built catalog.
pub fn find_user(users: &[Arc<User>], id: UserId) -> Option<&Arc<User>> {
    users.iter().find(|u| u.id == id)
}

pub fn find_category(
    categories: &[Arc<EnrichedCategory>],
    id: CategoryId,
) -> Option<&Arc<EnrichedCategory>> {
    categories.iter().find(|c| c.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;
    use crate::test_utils::{category, milk_dataset, product, shop_dataset, user};

    #[test]
    fn scenario_single_product_resolves_fully() {
        let catalog = Catalog::from_dataset(&milk_dataset());

        let milk = &catalog.products()[0];
        assert_eq!(milk.name(), "Milk");
        assert_eq!(milk.category_label(), "🍺 - Grocery");
        assert_eq!(milk.user().map(|u| u.name.as_str()), Some("Max"));
    }

    #[test]
    fn preserves_length_and_order() {
        let dataset = shop_dataset();
        let catalog = Catalog::from_dataset(&dataset);

        assert_eq!(catalog.categories().len(), dataset.categories.len());
        assert_eq!(catalog.products().len(), dataset.products.len());
        let ids: Vec<_> = catalog.products().iter().map(|p| p.id()).collect();
        let expected: Vec<_> = dataset.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn dangling_category_resolves_to_none() {
        let catalog = Catalog::from_dataset(&shop_dataset());
        let mystery = catalog
            .products()
            .iter()
            .find(|p| p.name() == "Mystery")
            .unwrap();
        assert!(mystery.category.is_none());
        assert!(mystery.user().is_none());
    }

    #[test]
    fn dangling_owner_resolves_to_none() {
        let users = vec![Arc::new(user(1, "Roma", Sex::M))];
        let categories = vec![category(1, "Grocery", "🍞", 1), category(2, "Ghost", "👻", 9)];

        let enriched = enrich_categories(&categories, &users);
        assert!(enriched[0].user.is_some());
        assert!(enriched[1].user.is_none());
    }

    #[test]
    fn category_is_null_iff_no_matching_id() {
        let catalog = Catalog::from_dataset(&shop_dataset());
        for p in catalog.products() {
            let exists = catalog
                .categories()
                .iter()
                .any(|c| c.id() == p.product.category_id);
            assert_eq!(p.category.is_some(), exists, "product {}", p.name());
            if let Some(c) = &p.category {
                assert_eq!(c.id(), p.product.category_id);
            }
        }
    }

    #[test]
    fn enrichment_shares_category_references() {
        let catalog = Catalog::from_dataset(&shop_dataset());
        let bread = &catalog.products()[1];
        let eggs = &catalog.products()[2];
        assert!(Arc::ptr_eq(
            bread.category.as_ref().unwrap(),
            eggs.category.as_ref().unwrap()
        ));
    }

    #[test]
    fn first_record_wins_on_duplicate_ids() {
        let users = vec![
            Arc::new(user(1, "First", Sex::M)),
            Arc::new(user(1, "Second", Sex::F)),
        ];
        let enriched = enrich_categories(&[category(1, "Grocery", "🍞", 1)], &users);
        assert_eq!(enriched[0].user.as_ref().unwrap().name, "First");

        let products = enrich_products(&[product(1, "Milk", 1)], &enriched);
        assert_eq!(products[0].user().unwrap().name, "First");
    }

    #[test]
    fn inputs_are_not_mutated() {
        let dataset = shop_dataset();
        let before = dataset.clone();
        let _ = Catalog::from_dataset(&dataset);
        assert_eq!(dataset, before);
    }

    #[test]
    fn find_helpers_match_linear_lookup() {
        let catalog = Catalog::from_dataset(&shop_dataset());
        assert_eq!(
            find_user(catalog.users(), UserId(2)).map(|u| u.name.as_str()),
            Some("Anna")
        );
        assert!(find_user(catalog.users(), UserId(7)).is_none());
        assert_eq!(
            find_category(catalog.categories(), CategoryId(3)).map(|c| c.category.title.as_str()),
            Some("Fruits")
        );
    }
}
