//! Console command language
//!
//! One command per line. Arguments are space separated; wrap an argument
//! in double quotes to include spaces. The last argument of `search`,
//! `upload`, `edit` and `post` takes the rest of the line.

use scripthub_core::ScriptCategory;
use thiserror::Error;

/// Command parse errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Script field that `edit` can change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Description,
    Category,
    Code,
    Author,
    Public,
}

impl std::str::FromStr for EditField {
    type Err = CommandError;

    fn from_str(s: &str) -> CommandResult<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(EditField::Name),
            "description" | "desc" => Ok(EditField::Description),
            "category" => Ok(EditField::Category),
            "code" => Ok(EditField::Code),
            "author" => Ok(EditField::Author),
            "public" => Ok(EditField::Public),
            _ => Err(CommandError::InvalidArgument(format!("Unknown field: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Scripts
    Scripts { category: Option<ScriptCategory> },
    Script { id: String },
    Search { query: String },
    Run { id: String },
    Fav { id: String },
    Upload {
        name: String,
        category: String,
        description: String,
        code: String,
    },
    Edit {
        id: String,
        field: EditField,
        value: String,
    },
    Remove { id: String },

    // News
    News { category: Option<String> },
    Article { id: String },
    Post {
        title: String,
        category: String,
        source: String,
        summary: String,
        content: String,
    },
    Unpost { id: String },

    // Stats
    Stats,
    History,
    Host,

    // Accounts
    Register {
        username: String,
        email: String,
        password: String,
    },
    Login { email: String, password: String },
    Logout,
    Whoami,

    // Local
    Categories,
    Info,
    Help,
    Quit,
}

impl Command {
    /// Parse a single command line
    pub fn parse(line: &str) -> CommandResult<Command> {
        let mut tokens = Tokenizer::new(line.trim());
        let cmd = tokens
            .next()
            .ok_or_else(|| CommandError::InvalidCommand("Empty command".into()))?
            .to_lowercase();

        let command = match cmd.as_str() {
            "scripts" | "ls" => Command::Scripts {
                category: tokens
                    .next()
                    .map(|c| {
                        c.parse::<ScriptCategory>()
                            .map_err(|_| CommandError::InvalidArgument(format!("Unknown category: {}", c)))
                    })
                    .transpose()?,
            },
            "script" | "show" => Command::Script {
                id: tokens.required("id")?,
            },
            "search" | "find" => Command::Search {
                query: tokens.rest().unwrap_or_default(),
            },
            "run" => Command::Run {
                id: tokens.required("id")?,
            },
            "fav" | "favorite" => Command::Fav {
                id: tokens.required("id")?,
            },
            "upload" => Command::Upload {
                name: tokens.required("name")?,
                category: tokens.required("category")?,
                description: tokens.required("description")?,
                code: tokens.rest().ok_or(CommandError::MissingArgument("code"))?,
            },
            "edit" => Command::Edit {
                id: tokens.required("id")?,
                field: tokens.required("field")?.parse()?,
                value: tokens.rest().ok_or(CommandError::MissingArgument("value"))?,
            },
            "rm" | "delete" => Command::Remove {
                id: tokens.required("id")?,
            },
            "news" => Command::News {
                category: tokens.next().map(|c| c.to_lowercase()),
            },
            "article" => Command::Article {
                id: tokens.required("id")?,
            },
            "post" => Command::Post {
                title: tokens.required("title")?,
                category: tokens.required("category")?,
                source: tokens.required("source")?,
                summary: tokens.required("summary")?,
                content: tokens.rest().ok_or(CommandError::MissingArgument("content"))?,
            },
            "unpost" => Command::Unpost {
                id: tokens.required("id")?,
            },
            "stats" => Command::Stats,
            "history" => Command::History,
            "host" => Command::Host,
            "register" => Command::Register {
                username: tokens.required("username")?,
                email: tokens.required("email")?,
                password: tokens.required("password")?,
            },
            "login" => Command::Login {
                email: tokens.required("email")?,
                password: tokens.required("password")?,
            },
            "logout" => Command::Logout,
            "whoami" => Command::Whoami,
            "categories" => Command::Categories,
            "info" => Command::Info,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::InvalidCommand(format!("Unknown command: {}", cmd))),
        };

        if let Some(extra) = tokens.next() {
            return Err(CommandError::InvalidArgument(format!(
                "Unexpected argument: {}",
                extra
            )));
        }

        Ok(command)
    }
}

/// Simple tokenizer that handles quoted strings
struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        let remaining = &self.input[self.pos..];
        self.pos += remaining.len() - remaining.trim_start().len();
    }

    fn next(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }

        let remaining = &self.input[self.pos..];

        // Handle quoted string
        if let Some(quoted) = remaining.strip_prefix('"') {
            if let Some(end) = quoted.find('"') {
                self.pos += end + 2;
                return Some(&quoted[..end]);
            }
        }

        let end = remaining
            .find(char::is_whitespace)
            .unwrap_or(remaining.len());
        self.pos += end;
        Some(&remaining[..end])
    }

    fn required(&mut self, name: &'static str) -> CommandResult<String> {
        self.next()
            .map(str::to_string)
            .ok_or(CommandError::MissingArgument(name))
    }

    /// Everything left on the line; a single quoted argument loses its quotes
    fn rest(&mut self) -> Option<String> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }

        let remaining = self.input[self.pos..].trim_end();
        self.pos = self.input.len();

        let unquoted = remaining
            .strip_prefix('"')
            .and_then(|r| r.strip_suffix('"'))
            .filter(|inner| !inner.contains('"'));
        Some(unquoted.unwrap_or(remaining).to_string())
    }
}
