//! Named styles applied from templates.
//!
//! Templates use minijinja with a `style` filter: `{{ value | style("name") }}`. Styles are
//! `console::Style`s registered by name on a [`Theme`]. When color is off the filter returns
//! the text unchanged, so the same template serves terminals, pipes and tests.
//!
//! An unknown style name prefixes the text with `(!?)` to make template typos visible.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any previous one with the same name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Whether stdout should receive ANSI styling.
pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

/// Renders `template` with `data`, styling through `theme` when `use_color` is set.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    let theme = theme.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });

    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}
