use super::theme::Theme;
use console::Style;
use once_cell::sync::Lazy;

pub mod names {
    pub const HEADING: &str = "heading";
    pub const LABEL: &str = "label";
    pub const ACTIVE: &str = "active";
    pub const INACTIVE: &str = "inactive";
    pub const SELECTED: &str = "selected";
    pub const QUERY: &str = "query";
    pub const HINT: &str = "hint";
    pub const COLUMN: &str = "column";
    pub const PRODUCT_ID: &str = "product_id";
    pub const EMPTY: &str = "empty";
    pub const USER_M: &str = "user_m";
    pub const USER_F: &str = "user_f";
    pub const USER_NONE: &str = "user_none";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static CATALOG_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADING, Style::new().bold())
        .add(names::LABEL, Style::new().bold())
        .add(names::ACTIVE, Style::new().bold().underlined())
        .add(names::INACTIVE, Style::new())
        .add(names::SELECTED, Style::new().cyan().bold())
        .add(names::QUERY, Style::new().yellow())
        .add(names::HINT, Style::new().dim())
        .add(names::COLUMN, Style::new().bold())
        .add(names::PRODUCT_ID, Style::new().bold())
        .add(names::EMPTY, Style::new().yellow())
        .add(names::USER_M, Style::new().blue())
        .add(names::USER_F, Style::new().red())
        .add(names::USER_NONE, Style::new().dim())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_name_is_registered() {
        let all = [
            names::HEADING,
            names::LABEL,
            names::ACTIVE,
            names::INACTIVE,
            names::SELECTED,
            names::QUERY,
            names::HINT,
            names::COLUMN,
            names::PRODUCT_ID,
            names::EMPTY,
            names::USER_M,
            names::USER_F,
            names::USER_NONE,
            names::INFO,
            names::SUCCESS,
            names::WARNING,
            names::ERROR,
        ];
        for name in all {
            assert!(CATALOG_THEME.has(name), "missing style: {}", name);
        }
    }
}
