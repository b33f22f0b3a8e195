// src/articles/mod.rs
//! Articles: captured content held as BlockNote documents.
//!
//! An article keeps its document as a JSON string, exactly what the editor
//! produces, and parses it on demand.

use crate::blocknote::LocalBlock;
use crate::error::AppError;
use crate::types::ValidatedUrl;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SAMPLE_ID: &str = "1";
const SAMPLE_TITLE: &str = "Product Manager vs. Product Owner: Key Differences";
const SAMPLE_URL: &str = "https://justanotherpm.com/product-manager-vs-product-owner-key-differences/";
const SAMPLE_CONTENT: &str = include_str!("sample.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    /// JSON array of BlockNote blocks.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>, blocks: &[LocalBlock]) -> Result<Self, AppError> {
        Ok(Self {
            id: id.into(),
            title: title.into(),
            content: serde_json::to_string(blocks)?,
            url: None,
        })
    }

    /// The article shipped as the initial list entry.
    pub fn sample() -> Self {
        Self {
            id: SAMPLE_ID.to_string(),
            title: SAMPLE_TITLE.to_string(),
            content: SAMPLE_CONTENT.trim().to_string(),
            url: Some(SAMPLE_URL.to_string()),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Parsed document; empty content reads as an empty document.
    pub fn blocks(&self) -> Result<Vec<LocalBlock>, AppError> {
        if self.content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&self.content).map_err(|e| {
            AppError::MalformedResponse(format!("article '{}' has invalid content: {}", self.id, e))
        })
    }

    pub fn set_blocks(&mut self, blocks: &[LocalBlock]) -> Result<(), AppError> {
        self.content = serde_json::to_string(blocks)?;
        Ok(())
    }

    /// Host of the source URL, or the URL itself when it does not parse.
    pub fn domain(&self) -> Option<String> {
        let raw = self.url.as_deref()?;
        Some(
            ValidatedUrl::parse(raw)
                .ok()
                .and_then(|url| url.host().map(str::to_string))
                .unwrap_or_else(|| raw.to_string()),
        )
    }
}

/// The working set of articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleList {
    articles: Vec<Article>,
}

impl Default for ArticleList {
    fn default() -> Self {
        Self {
            articles: vec![Article::sample()],
        }
    }
}

impl ArticleList {
    pub fn empty() -> Self {
        Self {
            articles: Vec::new(),
        }
    }

    /// Reads a list from disk; a missing file yields the seeded default.
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => serde_json::from_str(&content).map_err(|source| AppError::JsonParseError {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No article list at {}, starting from the sample", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, serde_json::to_string_pretty(self)?).await?;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Replaces the article with the same id, or appends it.
    pub fn upsert(&mut self, article: Article) {
        match self.articles.iter_mut().find(|a| a.id == article.id) {
            Some(existing) => *existing = article,
            None => self.articles.push(article),
        }
    }

    /// Replaces an article's document.
    pub fn update_content(&mut self, id: &str, blocks: &[LocalBlock]) -> Result<(), AppError> {
        let article = self
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::ArticleNotFound(id.to_string()))?;
        article.set_blocks(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocknote::{InlineSpan, LocalBlockType, Styles};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_parses() {
        let sample = Article::sample();
        let blocks = sample.blocks().unwrap();
        assert_eq!(blocks.len(), 6);
        assert_eq!(blocks[0].block_type, LocalBlockType::Heading);
        assert_eq!(blocks[0].props.level, Some(2));
        assert_eq!(sample.domain().as_deref(), Some("justanotherpm.com"));
    }

    #[test]
    fn test_domain_fallbacks() {
        let article = Article::new("2", "t", &[]).unwrap();
        assert_eq!(article.domain(), None);
        let article = article.with_url("not a url");
        assert_eq!(article.domain().as_deref(), Some("not a url"));
    }

    #[test]
    fn test_default_list_is_seeded() {
        let list = ArticleList::default();
        assert_eq!(list.len(), 1);
        assert!(list.get(SAMPLE_ID).is_some());
        assert!(ArticleList::empty().is_empty());
    }

    #[test]
    fn test_upsert_and_update_content() {
        let mut list = ArticleList::default();
        list.upsert(Article::new("page-1", "Imported", &[]).unwrap());
        list.upsert(Article::new("page-1", "Imported again", &[]).unwrap());
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("page-1").map(|a| a.title.as_str()), Some("Imported again"));

        let blocks = vec![LocalBlock::paragraph(vec![InlineSpan::text("hi", Styles::plain())])];
        list.update_content("page-1", &blocks).unwrap();
        assert_eq!(list.get("page-1").unwrap().blocks().unwrap(), blocks);

        assert!(matches!(
            list.update_content("nope", &blocks),
            Err(AppError::ArticleNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("notion2blocknote-articles-{}", uuid::Uuid::new_v4()))
            .join("articles.json");
        let missing = ArticleList::load(&path).await.unwrap();
        assert_eq!(missing, ArticleList::default());

        let mut list = ArticleList::default();
        list.upsert(Article::new("x", "X", &[]).unwrap());
        list.save(&path).await.unwrap();
        assert_eq!(ArticleList::load(&path).await.unwrap(), list);

        if let Some(dir) = path.parent() {
            let _ = tokio::fs::remove_dir_all(dir).await;
        }
    }
}
