//! # Catalog Architecture
//!
//! Catalog is a **UI-agnostic product catalog library**: it joins three static datasets
//! (users, categories, products) into an enriched view and filters that view from a small
//! piece of selection state. The terminal client in `cli/` is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the panel and table            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Session (session.rs)                  │
//! │  - Loads once, memoizes the enriched catalog                │
//! │  - Normalizes inputs (names → ids)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Enrichment, filtering, sorting, integrity checks         │
//! │  - Total functions over Rust types, no I/O                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - DataSource trait: embedded fixture, JSON file, in-memory │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! Dataset ──enrich (once per load)──▶ Catalog ──filter + sort (per change)──▶ visible list
//!                                                  ▲
//!                                   FilterState ───┘  (changed only by Transitions)
//! ```
//!
//! Loading is the only step that can fail. Everything downstream is total: a foreign key
//! that does not resolve yields `None`, and a filter that matches nothing yields an empty
//! list.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`session`]: UI state container (filter state, sort, visible list)
//! - [`state`]: Filter state and its transitions
//! - [`commands`]: Enrichment, filter engine, sorting, integrity check, config
//! - [`source`]: Dataset loading
//! - [`model`]: Core data types (`User`, `Category`, `Product` and enriched views)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod source;
pub mod state;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
