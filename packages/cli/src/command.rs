//! Parsing of the lines typed at the prompt.

use machi_explorer::domain::CityId;
use thiserror::Error;

/// How the user refers to a city in `/select`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitySelector {
    Id(CityId),
    Name(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Select(CitySelector),
    Weather,
    Chat,
    Close,
    Join(String),
    Who,
    History,
    Export,
    Zoom(ZoomDirection),
    Status,
    Help,
    Quit,
    /// Plain text, sent to the open chat
    Say(String),
    /// Blank line
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '/{0}', type /help for the list")]
    Unknown(String),

    #[error("/{command} needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("/zoom takes 'in' or 'out', got '{0}'")]
    InvalidZoom(String),
}

impl Command {
    /// Parse a prompt line.
    ///
    /// Lines starting with `/` are commands; anything else is chat text.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Ok(if trimmed.is_empty() {
                Command::Nothing
            } else {
                Command::Say(line.to_string())
            });
        };

        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (rest, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "search" | "find" => Command::Search(argument.to_string()),
            "select" | "sel" => Command::Select(parse_selector(argument)?),
            "weather" | "w" => Command::Weather,
            "chat" | "c" => Command::Chat,
            "close" => Command::Close,
            "join" => {
                if argument.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "join",
                        expected: "a username",
                    });
                }
                Command::Join(argument.to_string())
            }
            "who" => Command::Who,
            "history" => Command::History,
            "export" => Command::Export,
            "zoom" => Command::Zoom(parse_zoom(argument)?),
            "status" => Command::Status,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_selector(argument: &str) -> Result<CitySelector, CommandError> {
    if argument.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "select",
            expected: "a city id or name",
        });
    }
    Ok(match argument.parse::<u32>() {
        Ok(id) => CitySelector::Id(CityId::new(id)),
        Err(_) => CitySelector::Name(argument.to_string()),
    })
}

fn parse_zoom(argument: &str) -> Result<ZoomDirection, CommandError> {
    match argument.to_lowercase().as_str() {
        "in" | "+" => Ok(ZoomDirection::In),
        "out" | "-" => Ok(ZoomDirection::Out),
        "" => Err(CommandError::MissingArgument {
            command: "zoom",
            expected: "'in' or 'out'",
        }),
        other => Err(CommandError::InvalidZoom(other.to_string())),
    }
}
