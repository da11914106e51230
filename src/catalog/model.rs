use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

macro_rules! id_type {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(UserId);
id_type!(CategoryId);
id_type!(ProductId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    M,
    F,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

/// A category with its owner resolved.
///
/// The owner is a shared, read-only association: `None` when no user carries
/// the category's `owner_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedCategory {
    #[serde(flatten)]
    pub category: Category,
    pub user: Option<Arc<User>>,
}

impl EnrichedCategory {
    pub fn id(&self) -> CategoryId {
        self.category.id
    }

    /// Display form used in the results table: `"<icon> - <title>"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.category.icon, self.category.title)
    }
}

/// A product with its category (and through it, the category owner) resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Arc<EnrichedCategory>>,
}

impl EnrichedProduct {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn user(&self) -> Option<&User> {
        self.category.as_ref()?.user.as_deref()
    }

    /// Empty when the category is unresolved.
    pub fn category_label(&self) -> String {
        self.category
            .as_ref()
            .map(|c| c.label())
            .unwrap_or_default()
    }
}
