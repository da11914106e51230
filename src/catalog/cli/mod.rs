mod args;
mod browse;
mod commands;
mod logging;
mod render;
mod styles;
mod templates;
mod theme;

pub use commands::run;
