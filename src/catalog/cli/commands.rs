//! # CLI Layer
//!
//! This module is **one possible UI client** for the catalog. It is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Picks the data source and builds the API
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! `config` is handled before the dataset is loaded, so a broken `dataset` setting can
//! always be repaired from the command line.

use super::args::{Cli, Commands, ListArgs};
use super::browse;
use super::logging::init_tracing;
use super::render::{render_config, render_messages, render_view, ViewOptions, LIST_HINTS};
use super::theme::colors_supported;
use catalog::api::{CatalogApi, ConfigAction, Transition};
use catalog::commands::sort::SortSpec;
use catalog::commands::{self, CatalogPaths};
use catalog::config::CatalogConfig;
use catalog::error::Result;
use catalog::source::embedded::EmbeddedSource;
use catalog::source::file::FileSource;
use catalog::source::DataSource;
use catalog::state::FilterState;
use clap::Parser;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Overrides the configuration directory.
pub const HOME_ENV: &str = "CATALOG_HOME";

struct AppContext {
    api: CatalogApi<Box<dyn DataSource>>,
    options: ViewOptions,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = !cli.no_color && colors_supported();
    let paths = catalog_paths();

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&paths, key, value, use_color),
        Some(Commands::List(args)) => handle_list(&init_context(cli.data, paths, use_color)?, args),
        Some(Commands::Browse) => handle_browse(&mut init_context(cli.data, paths, use_color)?),
        Some(Commands::Check) => handle_check(&init_context(cli.data, paths, use_color)?),
        None => handle_list(
            &init_context(cli.data, paths, use_color)?,
            ListArgs::default(),
        ),
    }
}

fn catalog_paths() -> CatalogPaths {
    let config_dir = match std::env::var_os(HOME_ENV) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => ProjectDirs::from("com", "catalog", "catalog")
            .map(|dirs| dirs.config_dir().to_path_buf()),
    };
    CatalogPaths { config_dir }
}

fn load_config(paths: &CatalogPaths) -> CatalogConfig {
    let Ok(dir) = paths.config_dir() else {
        return CatalogConfig::default();
    };
    CatalogConfig::load(&dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        CatalogConfig::default()
    })
}

fn init_context(
    data: Option<PathBuf>,
    paths: CatalogPaths,
    use_color: bool,
) -> Result<AppContext> {
    let config = load_config(&paths);

    let source: Box<dyn DataSource> = match data.or(config.dataset) {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(EmbeddedSource::new()),
    };
    tracing::debug!(source = %source.describe(), "data source selected");

    Ok(AppContext {
        api: CatalogApi::new(source, paths)?,
        options: ViewOptions {
            use_color,
            name_width: config.name_width,
        },
    })
}

fn handle_list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let mut state = FilterState::new();

    if let Some(user) = &args.user {
        state = match ctx.api.resolve_user(user)? {
            Some(id) => state.apply(Transition::SelectUser(id)),
            None => state.apply(Transition::AllUsers),
        };
    }
    if let Some(query) = args.query {
        state = state.apply(Transition::SetQuery(query));
    }
    for category in &args.categories {
        let id = ctx.api.resolve_category(category)?;
        // Naming a category twice selects it once.
        if !state.is_category_selected(id) {
            state = state.apply(Transition::ToggleCategory(id));
        }
    }

    let sort = args.sort.map(|key| {
        if args.desc {
            SortSpec::desc(key)
        } else {
            SortSpec::asc(key)
        }
    });

    let result = ctx.api.list(&state, sort);
    println!(
        "{}",
        render_view(
            ctx.api.catalog(),
            &state,
            sort,
            &result.listed_products,
            LIST_HINTS,
            ctx.options,
        )
    );
    print!("{}", render_messages(&result.messages, ctx.options.use_color));
    Ok(())
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = std::io::stdout();
    browse::run(&mut ctx.api, stdin.lock(), &mut stdout, ctx.options, prompt)
}

fn handle_check(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.check();
    print!("{}", render_messages(&result.messages, ctx.options.use_color));
    Ok(())
}

fn handle_config(
    paths: &CatalogPaths,
    key: Option<String>,
    value: Option<String>,
    use_color: bool,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = commands::config::run(paths, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, use_color));
        }
    }
    print!("{}", render_messages(&result.messages, use_color));
    Ok(())
}
