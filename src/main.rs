// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2blocknote::api::requests::{CreatePageRequest, SearchQuery};
use notion2blocknote::api::{NotionHttpClient, NotionRepository};
use notion2blocknote::articles::{Article, ArticleList};
use notion2blocknote::config::{Action, AppConfig, CommandLineInput, KeysCommand, RecentList};
use notion2blocknote::storage::{FileStore, KeyRing, RecentPage, RecentPages};
use notion2blocknote::{blocknote_to_notion, notion_to_blocknote, AppError, ApiKey, LocalBlock, PageId};
use std::fs;
use std::path::Path;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion2blocknote.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs one command against Notion and the local store.
struct App {
    config: AppConfig,
    store: FileStore,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let store = FileStore::new(&config.store_dir);
        Self { config, store }
    }

    async fn client(&self) -> Result<NotionHttpClient, AppError> {
        let ring = KeyRing::new(&self.store);
        let key: ApiKey = self
            .config
            .api_key(&ring, std::env::var("NOTION_API_KEY").ok())
            .await?;
        NotionHttpClient::new(&key)
    }

    async fn run(&self) -> Result<(), AppError> {
        match &self.config.action {
            Action::Import {
                page,
                output,
                articles,
            } => self.import(page, output.as_deref(), articles.as_deref()).await,
            Action::Export {
                article,
                parent,
                title,
            } => self.export(article, parent, title.as_deref()).await,
            Action::Search {
                query,
                databases,
                limit,
            } => self.search(query, *databases, *limit).await,
            Action::Verify => self.verify().await,
            Action::Keys(command) => self.keys(command).await,
            Action::Recent(list) => self.recent(*list).await,
        }
    }

    async fn import(
        &self,
        page: &PageId,
        output: Option<&Path>,
        articles: Option<&Path>,
    ) -> Result<(), AppError> {
        let client = self.client().await?;
        log::info!("Importing page {}", page);

        let content = client.retrieve_page_content(page).await?;
        let blocks = notion_to_blocknote(&content.results, &client).await?;
        log::info!(
            "Converted '{}' into {} blocks",
            content.title,
            blocks.len()
        );

        let article = Article::new(page.as_str(), content.title.as_str(), &blocks)?;
        let rendered = serde_json::to_string_pretty(&article)?;
        match output {
            Some(path) => {
                tokio::fs::write(path, &rendered).await?;
                println!("✓ Article saved to {}", path.display());
            }
            None => println!("{}", rendered),
        }

        if let Some(path) = articles {
            let mut list = ArticleList::load(path).await?;
            list.upsert(article);
            list.save(path).await?;
            log::info!("Article list {} now holds {} articles", path.display(), list.len());
        }

        RecentPages::imports(&self.store)
            .push(RecentPage {
                id: page.to_string(),
                title: content.title.to_string(),
            })
            .await?;
        Ok(())
    }

    async fn export(
        &self,
        article_path: &Path,
        parent: &PageId,
        title: Option<&str>,
    ) -> Result<(), AppError> {
        let (article_title, blocks) = read_document(article_path).await?;
        let title = title.map(str::to_string).or(article_title).unwrap_or_else(|| {
            notion2blocknote::constants::UNTITLED.to_string()
        });

        let client = self.client().await?;
        let children = blocknote_to_notion(&blocks);
        log::info!("Exporting {} blocks as '{}' under {}", children.len(), title, parent);

        let created = client
            .create_page(CreatePageRequest::new(parent.clone(), &title, children))
            .await?;

        // Recent exports remember the parent, the page users pick again.
        RecentPages::exports(&self.store)
            .push(RecentPage {
                id: parent.to_string(),
                title: title.clone(),
            })
            .await?;

        match created.url {
            Some(url) => println!("✓ Created {}", url),
            None => println!("✓ Created page {}", created.id),
        }
        Ok(())
    }

    async fn search(&self, query: &str, databases: bool, limit: usize) -> Result<(), AppError> {
        let client = self.client().await?;
        let query = if databases {
            SearchQuery::databases(query)
        } else {
            SearchQuery::pages(query)
        }
        .with_limit(limit);

        let results = client.search(&query).await?;
        if results.is_empty() {
            println!("No results.");
        }
        for result in results {
            println!(
                "{}  {}{}",
                result.id,
                result.title,
                result.url.map(|u| format!("  {}", u)).unwrap_or_default()
            );
        }
        Ok(())
    }

    async fn verify(&self) -> Result<(), AppError> {
        let client = self.client().await?;
        let workspace = client.current_user().await?;
        println!("✓ Connected to {}", workspace.name);
        Ok(())
    }

    async fn keys(&self, command: &KeysCommand) -> Result<(), AppError> {
        let ring = KeyRing::new(&self.store);
        match command {
            KeysCommand::Add { name, key } => {
                let saved = ring.add(name, &ApiKey::new(key.as_str())?).await?;
                println!("✓ Saved '{}' ({})", saved.name, saved.id);
            }
            KeysCommand::List => {
                let keys = ring.list().await?;
                if keys.is_empty() {
                    println!("No saved keys.");
                }
                for saved in keys {
                    println!("{}  {}", saved.id, saved.name);
                }
            }
            KeysCommand::Rename { id, name } => {
                let renamed = ring.rename(id, name).await?;
                println!("✓ Renamed {} to '{}'", renamed.id, renamed.name);
            }
            KeysCommand::Remove { id } => {
                let removed = ring.remove(id).await?;
                println!("✓ Removed '{}'", removed.name);
            }
        }
        Ok(())
    }

    async fn recent(&self, list: RecentList) -> Result<(), AppError> {
        let recent = match list {
            RecentList::Imports => RecentPages::imports(&self.store),
            RecentList::Exports => RecentPages::exports(&self.store),
        };
        for page in recent.list().await? {
            println!("{}  {}", page.id, page.title);
        }
        Ok(())
    }
}

/// Reads an article file, or a bare block array.
async fn read_document(path: &Path) -> Result<(Option<String>, Vec<LocalBlock>), AppError> {
    let raw = tokio::fs::read_to_string(path).await?;
    if let Ok(article) = serde_json::from_str::<Article>(&raw) {
        let blocks = article.blocks()?;
        return Ok((Some(article.title), blocks));
    }
    let blocks = serde_json::from_str(&raw).map_err(|source| AppError::JsonParseError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((None, blocks))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();
    let config = AppConfig::resolve(cli).context("Invalid arguments")?;

    setup_logging(config.verbose)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    log::debug!("Using store at {}", config.store_dir.display());

    let app = App::new(config);
    if let Err(err) = app.run().await {
        if err.is_connection_error() {
            eprintln!("✗ {}", err);
            std::process::exit(2);
        }
        return Err(err.into());
    }
    Ok(())
}
