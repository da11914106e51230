//! # Filter State
//!
//! The filter state is the tuple that fully determines which products are visible:
//! the selected user, the free-text query and the set of selected categories.
//!
//! ```text
//! user:       None (All) | Some(UserId)
//! query:      any string, "" means inactive
//! categories: subset of CategoryIds, empty means inactive
//! ```
//!
//! State changes only through [`Transition`]s. [`FilterState::apply`] is pure: it
//! never mutates the previous value and every transition is accepted, so there are
//! no invalid states to guard against.

use crate::model::{CategoryId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current filter selections. `Default` is the initial state: all users, no query,
/// no categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub user: Option<UserId>,
    pub query: String,
    pub categories: BTreeSet<CategoryId>,
}

/// User-triggered state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Select one user. User id 0 is the "All" selection.
    SelectUser(UserId),
    AllUsers,
    /// Replace the query verbatim (no trimming).
    SetQuery(String),
    ClearQuery,
    /// Add the category if unselected, remove it if selected.
    ToggleCategory(CategoryId),
    AllCategories,
    ResetAll,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, transition: Transition) -> FilterState {
        match transition {
            Transition::SelectUser(UserId(0)) | Transition::AllUsers => FilterState {
                user: None,
                ..self.clone()
            },
            Transition::SelectUser(id) => FilterState {
                user: Some(id),
                ..self.clone()
            },
            Transition::SetQuery(query) => FilterState {
                query,
                ..self.clone()
            },
            Transition::ClearQuery => FilterState {
                query: String::new(),
                ..self.clone()
            },
            Transition::ToggleCategory(id) => {
                let toggled = BTreeSet::from([id]);
                let categories = if self.categories.contains(&id) {
                    &self.categories - &toggled
                } else {
                    &self.categories | &toggled
                };
                FilterState {
                    categories,
                    ..self.clone()
                }
            }
            Transition::AllCategories => FilterState {
                categories: BTreeSet::new(),
                ..self.clone()
            },
            Transition::ResetAll => FilterState::default(),
        }
    }

    pub fn is_user_selected(&self, id: UserId) -> bool {
        self.user == Some(id)
    }

    pub fn is_category_selected(&self, id: CategoryId) -> bool {
        self.categories.contains(&id)
    }

    /// Whether the clear-search control should be offered.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_initial(&self) -> bool {
        *self == FilterState::default()
    }
}
