//! Interactive session
//!
//! Reads one command per line and applies it to an in-memory collection,
//! reporting each action in the activity log. A failing line is reported and
//! the session moves on to the next one.
//!
//! | Command | Effect |
//! |---------|--------|
//! | `add <spec>` | Add a shape (see [`ShapeSpec`]) |
//! | `remove <id>` | Remove the shape with that ID |
//! | `clear` | Remove every shape |
//! | `list` | List shapes with their IDs |
//! | `area <id>` | Area of one shape |
//! | `total` | Area of every shape, then the sum |
//! | `explain` | How the area is dispatched |
//! | `help` | Command summary |
//! | `quit` / `exit` | End the session |

use std::io::BufRead;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde_json::json;
use thiserror::Error;

use super::input::{InputError, ShapeSpec};
use super::output::{format_area, Output};
use crate::config::Config;
use crate::domain::{compute_area, IdError, ShapeCollection, ShapeId};

/// Explanation printed by `explain`
pub const EXPLANATION: [&str; 2] = [
    "Visitor pattern: every shape implements accept(visitor), so operations such as area are added without changing the shape types.",
    "Example: shape.accept(&mut AreaVisitor) runs AreaVisitor::visit_circle when the shape is a circle.",
];

const HELP: &str = "Commands: add <kind[:name]:dims>, remove <id>, clear, list, area <id>, total, explain, help, quit";

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Id(#[from] IdError),
}

/// One session command
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Add(ShapeSpec),
    Remove(ShapeId),
    Clear,
    List,
    Area(ShapeId),
    Total,
    Explain,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |command: &'static str, argument: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument { command, argument })
            } else {
                Ok(rest)
            }
        };
        let bare = |command: &'static str, parsed: SessionCommand| {
            if rest.is_empty() {
                Ok(parsed)
            } else {
                Err(CommandError::UnexpectedArgument(command))
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "add" => Ok(SessionCommand::Add(required("add", "a shape")?.parse()?)),
            "remove" | "rm" => Ok(SessionCommand::Remove(required("remove", "a shape ID")?.parse()?)),
            "area" => Ok(SessionCommand::Area(required("area", "a shape ID")?.parse()?)),
            "clear" => bare("clear", SessionCommand::Clear),
            "list" | "ls" => bare("list", SessionCommand::List),
            "total" => bare("total", SessionCommand::Total),
            "explain" => bare("explain", SessionCommand::Explain),
            "help" | "?" => bare("help", SessionCommand::Help),
            "quit" | "exit" => bare("quit", SessionCommand::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Whether the session keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Session state: the collection plus the settings that shape new input
pub struct Session {
    collection: ShapeCollection,
    config: Config,
}

impl Session {
    pub fn new(collection: ShapeCollection, config: Config) -> Self {
        Self { collection, config }
    }

    pub fn collection(&self) -> &ShapeCollection {
        &self.collection
    }

    /// Runs one line; blank lines and `#` comments are ignored
    pub fn execute(&mut self, line: &str, output: &Output) -> Result<Flow, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let command: SessionCommand = line.parse()?;
        output.verbose_ctx("session", &format!("{:?}", command));
        self.apply(command, output)
    }

    fn apply(&mut self, command: SessionCommand, output: &Output) -> Result<Flow, CommandError> {
        match command {
            SessionCommand::Add(spec) => {
                let shape = spec.build(&self.config.defaults)?;
                let id = self.collection.add(shape.clone());
                output.log(&format!("➕ Added {} {}", id, shape));
                if output.is_json() {
                    output.data(&json!({"event": "added", "id": id, "shape": shape}));
                }
            }

            SessionCommand::Remove(id) => match self.collection.remove(id) {
                Some(shape) => {
                    output.log(&format!("🗑 Removed {}", shape));
                    if output.is_json() {
                        output.data(&json!({"event": "removed", "id": id, "shape": shape}));
                    }
                }
                None => {
                    output.log(&format!("No shape with ID {}", id));
                    if output.is_json() {
                        output.data(&json!({"event": "not_found", "id": id}));
                    }
                }
            },

            SessionCommand::Clear => {
                let count = self.collection.len();
                self.collection.clear();
                output.log("🧹 Cleared all shapes.");
                if output.is_json() {
                    output.data(&json!({"event": "cleared", "count": count}));
                }
            }

            SessionCommand::List => {
                if output.is_json() {
                    let entries: Vec<_> = self.collection.iter().collect();
                    output.data(&json!({"event": "list", "entries": entries}));
                } else if self.collection.is_empty() {
                    output.log("No shapes.");
                } else {
                    for entry in &self.collection {
                        let id = entry.id.to_string();
                        let description = entry.shape.to_string();
                        output.row(&[id.as_str(), description.as_str()]);
                    }
                }
            }

            SessionCommand::Area(id) => match self.collection.get(id) {
                Some(shape) => {
                    let area = compute_area(shape);
                    output.log(&format!("▶ Area for {} = {} units²", shape, format_area(area)));
                    if output.is_json() {
                        output.data(&json!({"event": "area", "id": id, "shape": shape, "area": area}));
                    }
                }
                None => {
                    output.log(&format!("No shape with ID {}", id));
                    if output.is_json() {
                        output.data(&json!({"event": "not_found", "id": id}));
                    }
                }
            },

            SessionCommand::Total => {
                let report = self.collection.total_area();
                for entry in &report.entries {
                    output.log(&format!(" • {} => {} units²", entry.description, format_area(entry.area)));
                }
                output.log(&format!("Σ Total area = {} units²", format_area(report.total)));
                if output.is_json() {
                    output.data(&json!({"event": "total", "report": report}));
                }
            }

            SessionCommand::Explain => {
                for line in EXPLANATION {
                    output.log(&format!("ℹ️ {}", line));
                }
                if output.is_json() {
                    output.data(&json!({"event": "explain", "lines": EXPLANATION}));
                }
            }

            SessionCommand::Help => {
                output.log(HELP);
                if output.is_json() {
                    output.data(&json!({"event": "help", "text": HELP}));
                }
            }

            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

/// Runs a session over `input` until `quit` or end of input
pub fn run(input: impl BufRead, output: &Output, config: Config, empty: bool) -> Result<()> {
    let collection = if empty || !config.preload_demo {
        ShapeCollection::new()
    } else {
        ShapeCollection::demo()?
    };

    output.verbose_ctx("session", &format!("Starting with {} shape(s)", collection.len()));
    let mut session = Session::new(collection, config);
    output.log("✨ Session started. Add shapes, then compute their areas. Type 'help' for commands.");

    for (number, bytes) in input.split(b'\n').enumerate() {
        let bytes = bytes.with_context(|| format!("Failed to read input line {}", number + 1))?;
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(_) => {
                output.error(&format!("line {}: input is not valid UTF-8", number + 1));
                continue;
            }
        };
        match session.execute(&line, output) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => output.error(&format!("line {}: {}", number + 1, e)),
        }
    }

    output.verbose_ctx(
        "session",
        &format!("Ending with {} shape(s)", session.collection().len()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::domain::Shape;

    fn quiet() -> Output {
        Output::new(OutputFormat::Json, false)
    }

    fn session() -> Session {
        Session::new(ShapeCollection::demo().unwrap(), Config::default())
    }

    #[test]
    fn parses_commands() {
        assert_eq!("clear".parse::<SessionCommand>().unwrap(), SessionCommand::Clear);
        assert_eq!(" LIST ".parse::<SessionCommand>().unwrap(), SessionCommand::List);
        assert_eq!(
            "remove s-2".parse::<SessionCommand>().unwrap(),
            SessionCommand::Remove(ShapeId::new(2))
        );
        assert!(matches!(
            "add triangle:Roof:8x3".parse::<SessionCommand>().unwrap(),
            SessionCommand::Add(ShapeSpec { name: Some(_), .. })
        ));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(
            "paint s-1".parse::<SessionCommand>(),
            Err(CommandError::Unknown("paint".to_string()))
        );
        assert_eq!(
            "area".parse::<SessionCommand>(),
            Err(CommandError::MissingArgument {
                command: "area",
                argument: "a shape ID",
            })
        );
        assert_eq!(
            "clear everything".parse::<SessionCommand>(),
            Err(CommandError::UnexpectedArgument("clear"))
        );
        assert!(matches!(
            "remove 2".parse::<SessionCommand>(),
            Err(CommandError::Id(_))
        ));
    }

    #[test]
    fn add_uses_configured_defaults() {
        let mut session = Session::new(ShapeCollection::new(), Config::default());
        session.execute("add square", &quiet()).unwrap();

        let shape = session.collection().get(ShapeId::new(1)).unwrap();
        assert_eq!(shape, &Shape::square("Square", 40.0).unwrap());
    }

    #[test]
    fn remove_and_clear_mutate_the_collection() {
        let mut session = session();
        let output = quiet();

        session.execute("remove s-1", &output).unwrap();
        assert_eq!(session.collection().len(), 2);

        session.execute("remove s-1", &output).unwrap();
        assert_eq!(session.collection().len(), 2);

        session.execute("clear", &output).unwrap();
        assert!(session.collection().is_empty());
    }

    #[test]
    fn invalid_shape_leaves_collection_untouched() {
        let mut session = session();
        let err = session.execute("add circle:Bad:-1", &quiet()).unwrap_err();

        assert!(matches!(err, CommandError::Input(_)));
        assert_eq!(session.collection().len(), 3);
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let mut session = session();
        assert_eq!(session.execute("", &quiet()).unwrap(), Flow::Continue);
        assert_eq!(session.execute("# add circle", &quiet()).unwrap(), Flow::Continue);
        assert_eq!(session.collection().len(), 3);
    }

    #[test]
    fn quit_stops_the_session() {
        assert_eq!(session().execute("exit", &quiet()).unwrap(), Flow::Quit);
    }

    #[test]
    fn run_skips_lines_that_are_not_utf8() {
        let input: &[u8] = b"\xff\xfe\nadd square:1\n";
        run(input, &quiet(), Config::default(), true).unwrap();
    }

    #[test]
    fn run_stops_at_quit() {
        let input = "clear\nquit\nadd circle\n".as_bytes();
        run(input, &quiet(), Config::default(), false).unwrap();
    }
}
