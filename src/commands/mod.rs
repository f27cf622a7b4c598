//! Console command parsing.
//!
//! Every selection command accepts `any` (or `-1`) to clear the selection.

use std::str::FromStr;

use crate::entity::{ListingSide, SortColumn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Types,
    Subtypes,
    Rarities,
    Type(Option<i32>),
    Subtype(Option<i32>),
    Rarity(Option<i32>),
    MinLevel(i32),
    MaxLevel(i32),
    Search(Option<String>),
    Results,
    Sort(SortColumn),
    Watch(i64),
    Unwatch(i64),
    Watchlist,
    Refresh,
    Gems,
    Listings(i64, ListingSide),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type `help` for the list of commands")]
    Unknown(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{command}`: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

/// Command names and descriptions shown by `help`
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("types", "list item types"),
        ("subtypes", "list subtypes of the selected type"),
        ("rarities", "list rarities"),
        ("type <id|any>", "select an item type"),
        ("subtype <id|any>", "select a subtype of the selected type"),
        ("rarity <id|any>", "select a rarity"),
        ("min <level>", "set the minimum required level"),
        ("max <level>", "set the maximum required level"),
        ("search [name]", "search by name, or browse the selected type"),
        ("results", "show the last search results again"),
        (
            "sort <column>",
            "sort results by name, level, supply, demand, minsale, maxbuy or margin",
        ),
        ("watch <id>", "add an item to the watchlist"),
        ("unwatch <id>", "remove an item from the watchlist"),
        ("watchlist", "show the watchlist"),
        ("refresh", "refresh watchlist prices"),
        ("gems", "show the gem exchange rates"),
        ("listings <id> <sell|buy>", "show trading post listings for an item"),
        ("help", "display this help message"),
        ("quit", "leave"),
    ]
}

pub fn help_text() -> String {
    let mut text = String::from("Available commands:\n");
    for (usage, description) in register_commands() {
        text.push_str(&format!("  {:<26} {}\n", usage, description));
    }
    text
}

impl Command {
    /// Parse one input line; blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        let command = match name.to_ascii_lowercase().as_str() {
            "types" => Self::Types,
            "subtypes" => Self::Subtypes,
            "rarities" => Self::Rarities,
            "type" => Self::Type(selection("type", args.next())?),
            "subtype" => Self::Subtype(selection("subtype", args.next())?),
            "rarity" => Self::Rarity(selection("rarity", args.next())?),
            "min" => Self::MinLevel(number("min", "a level", args.next())?),
            "max" => Self::MaxLevel(number("max", "a level", args.next())?),
            "search" => Self::Search((!rest.is_empty()).then(|| rest.to_string())),
            "results" => Self::Results,
            "sort" => Self::Sort(parsed("sort", "a column", args.next())?),
            "watch" => Self::Watch(number("watch", "an item id", args.next())?),
            "unwatch" => Self::Unwatch(number("unwatch", "an item id", args.next())?),
            "watchlist" => Self::Watchlist,
            "refresh" => Self::Refresh,
            "gems" => Self::Gems,
            "listings" => {
                let item_id = number("listings", "an item id", args.next())?;
                let side = parsed("listings", "sell or buy", args.next())?;
                Self::Listings(item_id, side)
            }
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parsed<T>(
    command: &'static str,
    argument: &'static str,
    value: Option<&str>,
) -> Result<T, CommandError>
where
    T: FromStr,
    T::Err: ToString,
{
    let value = value.ok_or(CommandError::MissingArgument { command, argument })?;
    value
        .to_ascii_lowercase()
        .parse()
        .map_err(|e: T::Err| CommandError::InvalidArgument {
            command,
            reason: e.to_string(),
        })
}

fn number<T>(
    command: &'static str,
    argument: &'static str,
    value: Option<&str>,
) -> Result<T, CommandError>
where
    T: FromStr,
{
    let value = value.ok_or(CommandError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        reason: format!("'{}' is not a number", value),
    })
}

fn selection(command: &'static str, value: Option<&str>) -> Result<Option<i32>, CommandError> {
    match value {
        Some(v) if v.eq_ignore_ascii_case("any") || v == "-1" => Ok(None),
        other => number(command, "an id or `any`", other).map(Some),
    }
}
