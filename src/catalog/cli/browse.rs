//! Interactive session over stdin.
//!
//! Each input line is one user interaction. It is parsed into a [`BrowseCommand`], applied
//! to the [`Session`] to completion, and the view is re-rendered before the next line is
//! read. Unknown user or category names print a warning and leave the state untouched.

use super::render::{render_messages, render_view, ViewOptions, BROWSE_HINTS};
use catalog::api::{CatalogApi, CmdMessage, SortKey, Transition};
use catalog::error::Result;
use catalog::session::Session;
use catalog::source::DataSource;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  user <name|id|all>   Show products owned by one user (or all users)
  search <text>        Filter by product name (case-insensitive)
  clear                Clear the search
  cat <title|id>       Toggle a category
  cats                 Show all categories
  sort <column>        Cycle sort on id, name, category or user
  reset                Reset all filters
  reload               Re-read the dataset
  help                 Show this help
  quit                 Leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    User(String),
    Search(String),
    Clear,
    Category(String),
    AllCategories,
    Sort(SortKey),
    Reset,
    Reload,
    Help,
    Quit,
    Nothing,
}

pub fn parse_command(line: &str) -> std::result::Result<BrowseCommand, String> {
    let line = line.trim_end_matches(['\n', '\r']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    match word {
        "" => Ok(BrowseCommand::Nothing),
        "user" | "u" => {
            if rest.trim().is_empty() {
                Err("Usage: user <name|id|all>".to_string())
            } else {
                Ok(BrowseCommand::User(rest.trim().to_string()))
            }
        }
        // The query is taken verbatim: "search  milk " searches for " milk ".
        "search" | "s" => Ok(BrowseCommand::Search(rest.to_string())),
        "clear" => Ok(BrowseCommand::Clear),
        "cat" | "c" => {
            if rest.trim().is_empty() {
                Err("Usage: cat <title|id>".to_string())
            } else {
                Ok(BrowseCommand::Category(rest.trim().to_string()))
            }
        }
        "cats" => Ok(BrowseCommand::AllCategories),
        "sort" => rest.trim().parse().map(BrowseCommand::Sort),
        "reset" => Ok(BrowseCommand::Reset),
        "reload" => Ok(BrowseCommand::Reload),
        "help" | "?" => Ok(BrowseCommand::Help),
        "quit" | "q" | "exit" => Ok(BrowseCommand::Quit),
        other => Err(format!("Unknown command: {} (try `help`)", other)),
    }
}

/// Runs the interactive loop until `quit` or end of input.
pub fn run<S, R, W>(
    api: &mut CatalogApi<S>,
    input: R,
    output: &mut W,
    options: ViewOptions,
    prompt: bool,
) -> Result<()>
where
    S: DataSource,
    R: BufRead,
    W: Write,
{
    let mut session = api.session();
    write_view(output, &session, options)?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(output, "\n> ")?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                write_messages(output, &[CmdMessage::warning(message)], options)?;
                continue;
            }
        };

        match step(api, &mut session, command) {
            Step::Render => write_view(output, &session, options)?,
            Step::Say(messages) => write_messages(output, &messages, options)?,
            Step::Stay => {}
            Step::Quit => break,
        }
    }

    Ok(())
}

enum Step {
    Render,
    Say(Vec<CmdMessage>),
    Stay,
    Quit,
}

fn step<S: DataSource>(api: &mut CatalogApi<S>, session: &mut Session, command: BrowseCommand) -> Step {
    let transition = match command {
        BrowseCommand::Nothing => return Step::Stay,
        BrowseCommand::Quit => return Step::Quit,
        BrowseCommand::Help => return Step::Say(vec![CmdMessage::info(HELP)]),
        BrowseCommand::Sort(key) => {
            session.cycle_sort(key);
            return Step::Render;
        }
        BrowseCommand::Reload => {
            return match api.reload() {
                Ok(catalog) => {
                    session.replace_catalog(catalog);
                    Step::Render
                }
                Err(e) => Step::Say(vec![CmdMessage::error(format!("Reload failed: {}", e))]),
            };
        }
        BrowseCommand::User(name) => match api.resolve_user(&name) {
            Ok(Some(id)) => Transition::SelectUser(id),
            Ok(None) => Transition::AllUsers,
            Err(e) => return Step::Say(vec![CmdMessage::warning(e.to_string())]),
        },
        BrowseCommand::Category(name) => match api.resolve_category(&name) {
            Ok(id) => Transition::ToggleCategory(id),
            Err(e) => return Step::Say(vec![CmdMessage::warning(e.to_string())]),
        },
        BrowseCommand::Search(query) => Transition::SetQuery(query),
        BrowseCommand::Clear => Transition::ClearQuery,
        BrowseCommand::AllCategories => Transition::AllCategories,
        BrowseCommand::Reset => Transition::ResetAll,
    };

    session.dispatch(transition);
    Step::Render
}

fn write_view<W: Write>(output: &mut W, session: &Session, options: ViewOptions) -> Result<()> {
    let view = render_view(
        session.catalog(),
        session.state(),
        session.sort(),
        session.visible(),
        BROWSE_HINTS,
        options,
    );
    writeln!(output, "{}", view)?;
    Ok(())
}

fn write_messages<W: Write>(
    output: &mut W,
    messages: &[CmdMessage],
    options: ViewOptions,
) -> Result<()> {
    write!(output, "{}", render_messages(messages, options.use_color))?;
    Ok(())
}
