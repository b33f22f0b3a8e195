// tests/common/mod.rs
//! Shared helpers for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use notion2blocknote::api::client::ApiResponse;
use notion2blocknote::api::parser::parse_blocks_pagination;
use notion2blocknote::{Block, BlockId, FetchError, NotionContent};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Parses a recorded `blocks/{id}/children` response.
pub fn blocks_fixture(body: &str) -> Vec<Block> {
    let response = ApiResponse {
        data: body.to_string(),
        status: StatusCode::OK,
        url: "https://api.notion.com/v1/blocks/fixture/children".to_string(),
    };
    parse_blocks_pagination(response)
        .expect("fixture should parse")
        .results
}

/// Builds blocks from inline JSON.
pub fn blocks(value: serde_json::Value) -> Vec<Block> {
    serde_json::from_value(value).expect("blocks should deserialize")
}

pub fn text(content: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "text",
        "text": {"content": content, "link": null},
        "annotations": {},
        "plain_text": content
    })
}

/// In-memory content source with per-parent latency and failures.
#[derive(Default)]
pub struct InMemoryContent {
    children: HashMap<String, Vec<Block>>,
    delays: HashMap<String, Duration>,
    failing: Vec<String>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl InMemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(mut self, parent: &str, children: Vec<Block>) -> Self {
        self.children.insert(parent.to_string(), children);
        self
    }

    pub fn with_delay(mut self, parent: &str, delay: Duration) -> Self {
        self.delays.insert(parent.to_string(), delay);
        self
    }

    pub fn failing(mut self, parent: &str) -> Self {
        self.failing.push(parent.to_string());
        self
    }

    /// Parents fetched so far, in request order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Most fetches that were running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotionContent for InMemoryContent {
    async fn retrieve_children(&self, block_id: &BlockId) -> Result<Vec<Block>, FetchError> {
        let id = block_id.as_str().to_string();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(id.clone());
        }
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.failing.contains(&id) {
            return Err(FetchError::RestrictedResource {
                reason: format!("integration cannot read {}", id),
            });
        }
        Ok(self.children.get(&id).cloned().unwrap_or_default())
    }
}
