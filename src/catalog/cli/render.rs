//! # Rendering Module
//!
//! Turns catalog data into terminal output through the templates in `templates/`.
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust because they
//! require Unicode-aware processing: category icons are emoji and occupy two cells.
//! Templates handle presentation: which style applies to which piece, and structure.

use super::styles::{names, CATALOG_THEME};
use super::templates::{CONFIG_TEMPLATE, MESSAGES_TEMPLATE, PANEL_TEMPLATE, TABLE_TEMPLATE};
use super::theme::render_with_color;
use catalog::api::{CmdMessage, MessageLevel, SortDirection, SortKey};
use catalog::commands::enrich::Catalog;
use catalog::commands::sort::SortSpec;
use catalog::config::CatalogConfig;
use catalog::model::{EnrichedProduct, Sex};
use catalog::state::FilterState;
use serde::Serialize;
use std::sync::Arc;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const TITLE: &str = "Product Categories";
pub const EMPTY_MESSAGE: &str = "No products matching selected criteria";
const COLUMN_GAP: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub use_color: bool,
    pub name_width: usize,
}

/// Text shown for the clear-search and reset controls. The one-shot `list` command and
/// the interactive session name the same controls differently.
#[derive(Debug, Clone, Copy)]
pub struct Hints {
    pub clear: &'static str,
    pub reset: &'static str,
}

pub const LIST_HINTS: Hints = Hints {
    clear: "[clear: drop --query]",
    reset: "[Reset all filters: run without options]",
};

pub const BROWSE_HINTS: Hints = Hints {
    clear: "[clear]",
    reset: "[reset] Reset all filters",
};

#[derive(Serialize)]
struct Control {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct PanelData {
    title: &'static str,
    users: Vec<Control>,
    search: String,
    search_style: &'static str,
    has_query: bool,
    clear_hint: &'static str,
    categories: Vec<Control>,
    reset_hint: &'static str,
}

#[derive(Serialize)]
struct RowData {
    id: String,
    name: String,
    category: String,
    user: String,
    user_style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    empty: bool,
    empty_message: &'static str,
    header: String,
    rows: Vec<RowData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

/// Filter panel followed by the results area.
pub fn render_view(
    catalog: &Catalog,
    state: &FilterState,
    sort: Option<SortSpec>,
    visible: &[Arc<EnrichedProduct>],
    hints: Hints,
    options: ViewOptions,
) -> String {
    format!(
        "{}\n\n{}",
        render_panel(catalog, state, hints, options.use_color),
        render_table(visible, sort, options)
    )
}

pub fn render_panel(
    catalog: &Catalog,
    state: &FilterState,
    hints: Hints,
    use_color: bool,
) -> String {
    let mut users = vec![toggle_control("All", state.user.is_none(), names::ACTIVE)];
    users.extend(
        catalog
            .users()
            .iter()
            .map(|u| toggle_control(&u.name, state.is_user_selected(u.id), names::ACTIVE)),
    );

    let mut categories = vec![toggle_control(
        "All",
        state.categories.is_empty(),
        names::ACTIVE,
    )];
    categories.extend(catalog.categories().iter().map(|c| {
        toggle_control(
            &c.category.title,
            state.is_category_selected(c.id()),
            names::SELECTED,
        )
    }));

    let (search, search_style) = if state.has_query() {
        (format!("\"{}\"", state.query), names::QUERY)
    } else {
        ("(empty)".to_string(), names::HINT)
    };

    let data = PanelData {
        title: TITLE,
        users,
        search,
        search_style,
        has_query: state.has_query(),
        clear_hint: hints.clear,
        categories,
        reset_hint: hints.reset,
    };

    render_with_color(PANEL_TEMPLATE, &data, &CATALOG_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}", e))
}

fn toggle_control(text: &str, on: bool, on_style: &'static str) -> Control {
    if on {
        Control {
            text: format!("[{}]", text),
            style: on_style,
        }
    } else {
        Control {
            text: text.to_string(),
            style: names::INACTIVE,
        }
    }
}

pub fn render_table(
    products: &[Arc<EnrichedProduct>],
    sort: Option<SortSpec>,
    options: ViewOptions,
) -> String {
    let data = if products.is_empty() {
        TableData {
            empty: true,
            empty_message: EMPTY_MESSAGE,
            header: String::new(),
            rows: vec![],
        }
    } else {
        build_table(products, sort, options.name_width)
    };

    render_with_color(TABLE_TEMPLATE, &data, &CATALOG_THEME, options.use_color)
        .unwrap_or_else(|e| format!("Render error: {}", e))
}

fn build_table(
    products: &[Arc<EnrichedProduct>],
    sort: Option<SortSpec>,
    name_width: usize,
) -> TableData {
    let headers: Vec<String> = SortKey::all()
        .iter()
        .map(|key| format!("{} {}", column_title(*key), sort_marker(sort, *key)))
        .collect();

    let ids: Vec<String> = products.iter().map(|p| p.id().to_string()).collect();
    let product_names: Vec<String> = products
        .iter()
        .map(|p| truncate_to_width(p.name(), name_width))
        .collect();
    let labels: Vec<String> = products.iter().map(|p| p.category_label()).collect();

    let id_width = column_width(&headers[0], &ids);
    let name_col = column_width(&headers[1], &product_names);
    let category_col = column_width(&headers[2], &labels);

    let gap = " ".repeat(COLUMN_GAP);
    let header = format!(
        "{}{gap}{}{gap}{}{gap}{}",
        pad_right(&headers[0], id_width),
        pad_right(&headers[1], name_col),
        pad_right(&headers[2], category_col),
        headers[3],
    );

    let rows = products
        .iter()
        .zip(ids)
        .zip(product_names)
        .zip(labels)
        .map(|(((p, id), name), label)| {
            let (user, user_style) = match p.user() {
                Some(u) => (
                    u.name.clone(),
                    match u.sex {
                        Sex::M => names::USER_M,
                        Sex::F => names::USER_F,
                    },
                ),
                None => (String::new(), names::USER_NONE),
            };
            RowData {
                id: pad_left(&id, id_width),
                name: pad_right(&name, name_col),
                category: pad_right(&label, category_col),
                user,
                user_style,
            }
        })
        .collect();

    TableData {
        empty: false,
        empty_message: EMPTY_MESSAGE,
        header,
        rows,
    }
}

fn column_title(key: SortKey) -> &'static str {
    match key {
        SortKey::Id => "ID",
        SortKey::Name => "Product",
        SortKey::Category => "Category",
        SortKey::User => "User",
    }
}

fn sort_marker(sort: Option<SortSpec>, key: SortKey) -> &'static str {
    match sort {
        Some(spec) if spec.key == key => match spec.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        },
        _ => "↕",
    }
}

fn column_width(header: &str, cells: &[String]) -> usize {
    cells
        .iter()
        .map(|c| c.width())
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_with_color(MESSAGES_TEMPLATE, &data, &CATALOG_THEME, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_config(config: &CatalogConfig, use_color: bool) -> String {
    let entries = CatalogConfig::keys()
        .iter()
        .filter_map(|&key| config.get(key).map(|value| ConfigEntry { key, value }))
        .collect();

    render_with_color(
        CONFIG_TEMPLATE,
        &ConfigData { entries },
        &CATALOG_THEME,
        use_color,
    )
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}
