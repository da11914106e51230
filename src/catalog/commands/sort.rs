//! Column sorting for the results table.
//!
//! Sorting is opt-in and runs after filtering. Without a [`SortSpec`] the visible
//! list stays in dataset order. All sorts are stable, so ties keep dataset order.

use crate::model::EnrichedProduct;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Name,
    Category,
    User,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[SortKey::Id, SortKey::Name, SortKey::Category, SortKey::User]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::User => "user",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" | "product" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "user" => Ok(SortKey::User),
            other => Err(format!("Unknown sort column: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

/// Next sort after clicking `key`: unsorted -> ascending -> descending -> unsorted.
/// Clicking a different column starts over at ascending.
pub fn cycle(current: Option<SortSpec>, key: SortKey) -> Option<SortSpec> {
    match current {
        Some(spec) if spec.key == key => match spec.direction {
            SortDirection::Asc => Some(SortSpec::desc(key)),
            SortDirection::Desc => None,
        },
        _ => Some(SortSpec::asc(key)),
    }
}

pub fn apply(products: &mut [Arc<EnrichedProduct>], spec: SortSpec) {
    products.sort_by(|a, b| {
        let ord = compare(a, b, spec.key);
        match spec.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

fn compare(a: &EnrichedProduct, b: &EnrichedProduct, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id().cmp(&b.id()),
        SortKey::Name => folded(a.name()).cmp(&folded(b.name())),
        SortKey::Category => {
            let title = |p: &EnrichedProduct| {
                p.category.as_ref().map(|c| folded(&c.category.title))
            };
            title(a).cmp(&title(b))
        }
        SortKey::User => {
            let name = |p: &EnrichedProduct| p.user().map(|u| folded(&u.name));
            name(a).cmp(&name(b))
        }
    }
}

fn folded(s: &str) -> String {
    s.to_lowercase()
}
