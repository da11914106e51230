//! Output templates, kept as standalone files and included as string constants.
//!
//! Layout (column widths, truncation, padding) is computed in Rust before rendering;
//! templates only choose structure and styles. Whitespace is controlled explicitly with
//! `-` markers so line breaks are visible in the template source.

pub const PANEL_TEMPLATE: &str = include_str!("templates/panel.tmp");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
