// src/api/simple_pagination.rs
//! Simplified pagination without BoxFuture.

use super::responses::PaginatedResponse;
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;

/// Every item of a paginated listing.
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
}

/// Fetches all pages using async closures directly.
///
/// `fetch_fn` gets the page size and the cursor returned by the previous
/// page (`None` for the first call). Pages are followed until the API
/// reports no more; there is no page cap.
pub async fn fetch_all_pages_simple<T, F, Fut>(
    mut fetch_fn: F,
) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        let response = fetch_fn(NOTION_API_PAGE_SIZE as u32, cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor;
        all_items.extend(response.results);
        pages_fetched += 1;

        if !has_more || cursor.is_none() {
            break;
        }
    }

    log::debug!("Fetched {} page(s), {} items", pages_fetched, all_items.len());
    Ok(PaginationResult {
        items: all_items,
        pages_fetched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn page(items: Vec<u32>, next: Option<&str>) -> PaginatedResponse<u32> {
        PaginatedResponse {
            results: items,
            has_more: next.is_some(),
            next_cursor: next.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_follows_cursors_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let result = fetch_all_pages_simple(
            move |page_size, cursor: Option<String>| {
                recorder.lock().unwrap().push((page_size, cursor.clone()));
                async move {
                    Ok(match cursor.as_deref() {
                        None => page(vec![1, 2], Some("c2")),
                        Some("c2") => page(vec![3], Some("c3")),
                        _ => page(vec![4], None),
                    })
                }
            },
        )
        .await
        .unwrap();

        assert_eq!(result.items, vec![1, 2, 3, 4]);
        assert_eq!(result.pages_fetched, 3);
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], (100, None));
        assert_eq!(seen[1].1.as_deref(), Some("c2"));
        assert_eq!(seen[2].1.as_deref(), Some("c3"));
    }

    #[tokio::test]
    async fn test_long_listings_are_read_to_the_end() {
        let result = fetch_all_pages_simple(|_, cursor: Option<String>| async move {
            let n: u32 = cursor.as_deref().map_or(0, |c| c.parse().unwrap());
            let next = (n < 24).then(|| (n + 1).to_string());
            Ok(page(vec![n], next.as_deref()))
        })
        .await
        .unwrap();
        assert_eq!(result.pages_fetched, 25);
        assert_eq!(result.items, (0..25).collect::<Vec<u32>>());
    }

    #[tokio::test]
    async fn test_error_stops_pagination() {
        let result: Result<PaginationResult<u32>, _> = fetch_all_pages_simple(
            |_, _| async { Err(AppError::MalformedResponse("boom".to_string())) },
        )
        .await;
        assert!(result.is_err());
    }
}
