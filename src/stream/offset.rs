//! Offset stream adapter
//!
//! Walks a paginated collection by incrementing a page number until the
//! server returns an empty page.

use super::types::{Page, PageFetcher};
use crate::client::ConnectionConfig;
use crate::error::Result;
use crate::options::SearchOptions;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use tracing::debug;

struct PagedState<T, F> {
    config: ConnectionConfig,
    fetcher: F,
    options: SearchOptions,
    soft_limit: Option<u64>,
    page: u32,
    returned: u64,
    buffer: VecDeque<T>,
    fetched_any: bool,
}

/// Adapt a [`PageFetcher`] into a lazy stream of items using page-number
/// pagination.
///
/// The adapter starts at page 1 and overrides any `page` set on `options`.
/// Termination is decided by the empty-page signal alone; the advisory
/// `total` is never consulted. If `soft_limit` is given, the stream stops at
/// the first page boundary at which the item count reaches or exceeds it, so
/// up to `per_page - 1` items past the limit may still be yielded. If the
/// config carries a page delay, the adapter suspends for that duration after
/// each yielded page before fetching the next.
///
/// A failed fetch ends the stream abnormally with the fetcher's error; there
/// are no retries.
pub fn paged_stream<T, F>(
    config: ConnectionConfig,
    fetcher: F,
    options: SearchOptions,
    soft_limit: Option<u64>,
) -> impl Stream<Item = Result<T>>
where
    F: PageFetcher<T>,
{
    let state = PagedState {
        config,
        fetcher,
        options,
        soft_limit,
        page: 1,
        returned: 0,
        buffer: VecDeque::new(),
        fetched_any: false,
    };

    stream::try_unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.buffer.pop_front() {
                return Ok(Some((item, state)));
            }

            if let Some(limit) = state.soft_limit {
                if state.returned >= limit {
                    return Ok(None);
                }
            }

            if state.fetched_any {
                if let Some(delay) = state.config.page_delay() {
                    tokio::time::sleep(delay).await;
                }
            }

            let mut options = state.options.clone();
            options.page = Some(state.page);

            let page: Page<T> = state
                .fetcher
                .fetch_page(state.config.clone(), options)
                .await?;
            state.fetched_any = true;

            if page.is_empty() {
                return Ok(None);
            }

            debug!(page = state.page, items = page.len(), "fetched page");

            state.returned += page.len() as u64;
            state.page += 1;
            state.buffer.extend(page.items);
        }
    })
}
