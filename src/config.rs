// src/config.rs
use crate::constants::SEARCH_DEFAULT_LIMIT;
use crate::error::AppError;
use crate::storage::{FileStore, KeyRing};
use crate::types::{ApiKey, PageId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Saved key to use, by name or id (falls back to NOTION_API_KEY)
    #[arg(short, long, global = true)]
    pub key: Option<String>,

    /// Directory holding saved keys and recent pages
    #[arg(long, global = true)]
    pub store: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a Notion page into a BlockNote document
    Import {
        /// Notion page URL or ID
        page: String,

        /// Write the article JSON here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Also add the article to this article-list file
        #[arg(long)]
        articles: Option<String>,
    },

    /// Create a Notion page from a BlockNote document
    Export {
        /// Article JSON (or a bare block array)
        article: String,

        /// Parent page URL or ID
        #[arg(long)]
        parent: String,

        /// Title for the new page (defaults to the article's title)
        #[arg(long)]
        title: Option<String>,
    },

    /// Search pages (or databases) the key can see
    Search {
        query: String,

        /// Search databases instead of pages
        #[arg(long, default_value_t = false)]
        databases: bool,

        /// Maximum number of results
        #[arg(long, default_value_t = SEARCH_DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Check the selected key against Notion
    Verify,

    /// Manage saved API keys
    Keys {
        #[command(subcommand)]
        action: KeysCommand,
    },

    /// Show recently used pages
    Recent {
        #[command(subcommand)]
        list: RecentList,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum KeysCommand {
    Add { name: String, key: String },
    List,
    Rename { id: String, name: String },
    Remove { id: String },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentList {
    Imports,
    Exports,
}

/// A validated command: ids parsed, paths resolved.
#[derive(Debug, Clone)]
pub enum Action {
    Import {
        page: PageId,
        output: Option<PathBuf>,
        articles: Option<PathBuf>,
    },
    Export {
        article: PathBuf,
        parent: PageId,
        title: Option<String>,
    },
    Search {
        query: String,
        databases: bool,
        limit: usize,
    },
    Verify,
    Keys(KeysCommand),
    Recent(RecentList),
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub action: Action,
    pub store_dir: PathBuf,
    pub key_selector: Option<String>,
    pub verbose: bool,
}

impl AppConfig {
    /// Validates CLI input. The API key is resolved separately, since it may
    /// live in the store.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let action = match cli.command {
            Command::Import {
                page,
                output,
                articles,
            } => Action::Import {
                page: PageId::parse(&page)?,
                output: output.map(PathBuf::from),
                articles: articles.map(PathBuf::from),
            },
            Command::Export {
                article,
                parent,
                title,
            } => Action::Export {
                article: PathBuf::from(article),
                parent: PageId::parse(&parent)?,
                title,
            },
            Command::Search {
                query,
                databases,
                limit,
            } => Action::Search {
                query,
                databases,
                limit,
            },
            Command::Verify => Action::Verify,
            Command::Keys { action } => Action::Keys(action),
            Command::Recent { list } => Action::Recent(list),
        };

        let store_dir = cli
            .store
            .map(PathBuf::from)
            .unwrap_or_else(FileStore::default_dir);

        Ok(AppConfig {
            action,
            store_dir,
            key_selector: cli.key.filter(|k| !k.trim().is_empty()),
            verbose: cli.verbose,
        })
    }

    /// The API key for this run: the selected saved key, else `env_key`.
    pub async fn api_key(
        &self,
        ring: &KeyRing<'_>,
        env_key: Option<String>,
    ) -> Result<ApiKey, AppError> {
        if let Some(selector) = &self.key_selector {
            return ring.select(selector).await;
        }
        match env_key {
            Some(raw) if !raw.trim().is_empty() => Ok(ApiKey::new(raw)?),
            _ => Err(AppError::NotConnected {
                reason: "no key selected".to_string(),
            }),
        }
    }
}
