//! Interactive console
//!
//! Executes [`Command`]s against the bound storage and renders the results.

use std::sync::Arc;

use colored::*;
use scripthub_core::{
    NewsArticle, NewsDraft, RegisterUser, Script, ScriptCategory, ScriptDraft, ScriptPatch,
    StatsSnapshot, User, ValidationError,
};
use scripthub_storage::{Storage, StorageError};
use thiserror::Error;
use tracing::info;

use crate::command::{Command, CommandError, EditField};
use crate::sampler::{Reading, SharedSampler};

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Login required")]
    NotLoggedIn,

    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Result of one command, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Ok(String),
    /// Nothing found
    Nil,
    /// Numbered list
    Lines(Vec<String>),
    Text(String),
    Quit,
}

impl Reply {
    pub fn print(&self) {
        match self {
            Reply::Ok(msg) => println!("{}", msg.green()),
            Reply::Nil => println!("{}", "(nil)".dimmed()),
            Reply::Lines(lines) if lines.is_empty() => println!("{}", "(empty list)".dimmed()),
            Reply::Lines(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    println!("{}) {}", i + 1, line);
                }
            }
            Reply::Text(text) => println!("{}", text),
            Reply::Quit => {}
        }
    }
}

pub fn print_error(err: &ConsoleError) {
    match err {
        ConsoleError::Validation(v) => {
            eprintln!("{} {}", "Error:".red(), "validation failed");
            for (field, messages) in v.fields() {
                for message in messages {
                    eprintln!("  {} {}", format!("{}:", field).yellow(), message);
                }
            }
        }
        other => eprintln!("{} {}", "Error:".red(), other),
    }
}

pub struct Console {
    storage: Arc<dyn Storage>,
    sampler: Option<SharedSampler>,
    session: Option<User>,
}

impl Console {
    pub fn new(storage: Arc<dyn Storage>, sampler: Option<SharedSampler>) -> Self {
        Self {
            storage,
            sampler,
            session: None,
        }
    }

    /// Logged-in account, if any
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// Parse, execute and print one line. Returns false once the user quits.
    pub async fn run_line(&mut self, line: &str) -> bool {
        let result = match Command::parse(line) {
            Ok(cmd) => self.execute(cmd).await,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(Reply::Quit) => false,
            Ok(reply) => {
                reply.print();
                true
            }
            Err(e) => {
                print_error(&e);
                true
            }
        }
    }

    pub async fn execute(&mut self, cmd: Command) -> Result<Reply, ConsoleError> {
        let storage = self.storage.clone();

        let reply = match cmd {
            Command::Scripts { category } => {
                let scripts = match category {
                    Some(category) => storage.list_scripts_by_category(category).await?,
                    None => storage.list_scripts().await?,
                };
                Reply::Lines(scripts.iter().map(script_line).collect())
            }

            Command::Script { id } => match storage.get_script(&id).await? {
                Some(script) => Reply::Text(script_detail(&script)),
                None => Reply::Nil,
            },

            Command::Search { query } => {
                let scripts = storage.search_scripts(&query).await?;
                Reply::Lines(scripts.iter().map(script_line).collect())
            }

            Command::Run { id } => {
                storage.increment_execution(&id).await?;
                match storage.get_script(&id).await? {
                    Some(script) => Reply::Ok(format!(
                        "Ran {} ({} runs)",
                        script.name, script.execution_count
                    )),
                    None => Reply::Nil,
                }
            }

            Command::Fav { id } => {
                storage.toggle_favorite(&id).await?;
                match storage.get_script(&id).await? {
                    Some(script) if script.is_favorite => {
                        Reply::Ok(format!("Added {} to favorites", script.name))
                    }
                    Some(script) => Reply::Ok(format!("Removed {} from favorites", script.name)),
                    None => Reply::Nil,
                }
            }

            Command::Upload {
                name,
                category,
                description,
                code,
            } => {
                let user = self.require_user()?;
                let draft = ScriptDraft {
                    name,
                    description,
                    category,
                    code,
                    author: Some(user.username.clone()),
                    user_id: Some(user.id.clone()),
                    is_public: None,
                };
                let script = storage.create_script(draft.validate()?).await?;
                info!(script_id = %script.id, user = %user.username, "Script uploaded");
                Reply::Ok(format!("Uploaded {} as {}", script.name, script.id))
            }

            Command::Edit { id, field, value } => {
                self.require_user()?;
                let patch = edit_patch(field, value)?.validate()?;
                match storage.update_script(&id, patch).await? {
                    Some(script) => Reply::Ok(format!("Updated {}", script.name)),
                    None => Reply::Nil,
                }
            }

            Command::Remove { id } => {
                self.require_user()?;
                if storage.delete_script(&id).await? {
                    Reply::Ok("Deleted".into())
                } else {
                    Reply::Nil
                }
            }

            Command::News { category } => {
                let news = match category {
                    Some(category) => storage.list_news_by_category(&category).await?,
                    None => storage.list_news().await?,
                };
                Reply::Lines(news.iter().map(news_line).collect())
            }

            Command::Article { id } => match storage.get_news(&id).await? {
                Some(article) => Reply::Text(article_detail(&article)),
                None => Reply::Nil,
            },

            Command::Post {
                title,
                category,
                source,
                summary,
                content,
            } => {
                let draft = NewsDraft {
                    title,
                    content,
                    summary,
                    image_url: None,
                    source,
                    category,
                    published_at: None,
                };
                let article = storage.create_news(draft.validate()?).await?;
                Reply::Ok(format!("Posted {} as {}", article.title, article.id))
            }

            Command::Unpost { id } => {
                if storage.delete_news(&id).await? {
                    Reply::Ok("Deleted".into())
                } else {
                    Reply::Nil
                }
            }

            Command::Stats => match storage.current_stats().await? {
                Some(stats) => Reply::Text(self.stats_detail(&stats)),
                None => Reply::Nil,
            },

            Command::History => {
                let history = storage.stats_history().await?;
                Reply::Lines(history.iter().map(stats_line).collect())
            }

            Command::Host => {
                let readings: Vec<String> = match &self.sampler {
                    Some(sampler) => sampler.lock().recent().map(reading_line).collect(),
                    None => Vec::new(),
                };
                if readings.is_empty() {
                    Reply::Nil
                } else {
                    Reply::Lines(readings)
                }
            }

            Command::Register {
                username,
                email,
                password,
            } => {
                let new_user = RegisterUser::new(username, email, password).validate()?;
                let user = storage.create_user(new_user).await?;
                info!(user = %user.username, "Account registered");
                let reply = Reply::Ok(format!("Registered and logged in as {}", user.username));
                self.session = Some(user);
                reply
            }

            Command::Login { email, password } => {
                let user = storage
                    .get_user_by_email(&email)
                    .await?
                    .ok_or(ConsoleError::InvalidCredentials)?;
                if !storage.verify_password(&user, &password).await {
                    return Err(ConsoleError::InvalidCredentials);
                }
                let reply = Reply::Ok(format!("Logged in as {}", user.username));
                self.session = Some(user);
                reply
            }

            Command::Logout => match self.session.take() {
                Some(user) => Reply::Ok(format!("Logged out {}", user.username)),
                None => Reply::Nil,
            },

            Command::Whoami => match &self.session {
                Some(user) => Reply::Text(format!("{} <{}>", user.username, user.email)),
                None => Reply::Nil,
            },

            Command::Categories => Reply::Lines(
                ScriptCategory::ALL
                    .iter()
                    .map(|c| format!("{:<14} {}", c.as_str(), c.display_name()))
                    .collect(),
            ),

            Command::Info => {
                let counts = storage.counts().await?;
                Reply::Text(format!(
                    "version:   {}\nbackend:   {}\nusers:     {}\nscripts:   {}\nnews:      {}\nsnapshots: {}",
                    env!("CARGO_PKG_VERSION"),
                    storage.backend_name(),
                    counts.users,
                    counts.scripts,
                    counts.news,
                    counts.snapshots,
                ))
            }

            Command::Help => Reply::Text(help_text()),

            Command::Quit => Reply::Quit,
        };

        Ok(reply)
    }

    fn require_user(&self) -> Result<&User, ConsoleError> {
        self.session.as_ref().ok_or(ConsoleError::NotLoggedIn)
    }

    fn stats_detail(&self, stats: &StatsSnapshot) -> String {
        let mut text = format!(
            "cpu: {}%\ngpu: {}%\nram: {}%\nfps: {}\nat:  {}",
            stats.cpu_usage,
            stats.gpu_usage,
            stats.ram_usage,
            stats.fps,
            stats.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        );

        if let Some(sampler) = &self.sampler {
            if let Some(latest) = sampler.lock().latest() {
                text.push_str(&format!(
                    "\ndisk: {}%\nhost uptime: {}s (sampled {})",
                    latest.disk,
                    latest.uptime_secs,
                    latest.timestamp.format("%H:%M:%S")
                ));
            }
        }
        text
    }
}

fn edit_patch(field: EditField, value: String) -> Result<ScriptPatch, ConsoleError> {
    let mut patch = ScriptPatch::default();
    match field {
        EditField::Name => patch.name = Some(value),
        EditField::Description => patch.description = Some(value),
        EditField::Code => patch.code = Some(value),
        EditField::Author => patch.author = Some(value),
        EditField::Category => {
            let category = value.parse::<ScriptCategory>().map_err(|_| {
                CommandError::InvalidArgument(format!("Unknown category: {}", value))
            })?;
            patch.category = Some(category);
        }
        EditField::Public => {
            let public = match value.to_lowercase().as_str() {
                "yes" | "true" | "1" | "on" => true,
                "no" | "false" | "0" | "off" => false,
                _ => {
                    return Err(
                        CommandError::InvalidArgument(format!("Expected yes or no: {}", value))
                            .into(),
                    )
                }
            };
            patch.is_public = Some(public);
        }
    }
    Ok(patch)
}

fn script_line(script: &Script) -> String {
    let favorite = if script.is_favorite { " *" } else { "" };
    format!(
        "{} {} [{}] {} runs{}",
        script.id.dimmed(),
        script.name.bold(),
        script.category.display_name(),
        script.execution_count,
        favorite.yellow()
    )
}

fn script_detail(script: &Script) -> String {
    let last_run = script
        .last_executed
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".into());

    format!(
        "{}\n{}\ncategory: {}\nauthor:   {}\nruns:     {}\nlast run: {}\nfavorite: {}\npublic:   {}\n\n{}",
        script.name.bold(),
        script.description,
        script.category.display_name(),
        script.author,
        script.execution_count,
        last_run,
        if script.is_favorite { "yes" } else { "no" },
        if script.is_public { "yes" } else { "no" },
        script.code
    )
}

fn news_line(article: &NewsArticle) -> String {
    format!(
        "{} {} [{}] {}",
        article.id.dimmed(),
        article.title.bold(),
        article.category,
        article.published_at.format("%Y-%m-%d")
    )
}

fn article_detail(article: &NewsArticle) -> String {
    format!(
        "{}\n{} | {} | {}\n\n{}\n\n{}",
        article.title.bold(),
        article.source,
        article.category,
        article.published_at.format("%Y-%m-%d %H:%M UTC"),
        article.summary.italic(),
        article.content
    )
}

fn stats_line(stats: &StatsSnapshot) -> String {
    format!(
        "{} cpu {}% gpu {}% ram {}% fps {}",
        stats.timestamp.format("%H:%M:%S"),
        stats.cpu_usage,
        stats.gpu_usage,
        stats.ram_usage,
        stats.fps
    )
}

fn reading_line(reading: &Reading) -> String {
    format!(
        "{} cpu {}% gpu {}% ram {}% disk {}% fps {}",
        reading.timestamp.format("%H:%M:%S"),
        reading.cpu,
        reading.gpu,
        reading.ram,
        reading.disk,
        reading.fps
    )
}

fn help_text() -> String {
    format!(
        r#"
{}

{}
  scripts [category]                          List scripts, most run first
  script <id>                                 Show a script
  search <query>                              Search name, description and code
  run <id>                                    Record a script execution
  fav <id>                                    Toggle favorite
  upload <name> <category> <desc> <code>      Upload a script (login required)
  edit <id> <field> <value>                   Change name, description, category,
                                              code, author or public (login required)
  rm <id>                                     Delete a script (login required)

{}
  news [category]                             List articles, newest first
  article <id>                                Show an article
  post <title> <category> <source> <summary> <content>
                                              Publish an article
  unpost <id>                                 Delete an article

{}
  stats                                       Latest system snapshot
  history                                     Retained snapshots, oldest first
  host                                        Recent host readings, oldest first

{}
  register <username> <email> <password>     Create an account and log in
  login <email> <password>                    Log in
  logout                                      Log out
  whoami                                      Show the logged-in account

{}
  categories                                  List script categories
  info                                        Backend and entity counts
  help                                        Show this help
  quit/exit                                   Exit

Quote arguments that contain spaces: upload "Oak Cutter" woodcutting "Chops oaks" ...
"#,
        "Script Hub Commands".cyan().bold(),
        "Scripts".yellow().bold(),
        "News".yellow().bold(),
        "System".yellow().bold(),
        "Accounts".yellow().bold(),
        "Local".yellow().bold(),
    )
}
