//! Cursor stream adapter
//!
//! Walks a paginated collection by range-filtering on a monotonic sort field
//! instead of a page offset. Page-number pagination is unstable under
//! concurrent inserts and deletes: an item inserted before the current offset
//! shifts every subsequent page, skipping or duplicating items. Anchoring on
//! a field value instead of a position avoids that class of drift entirely
//! (though not updates that rewrite the sort field of already-seen items).

use super::types::{Cursor, Page, PageFetcher};
use crate::client::ConnectionConfig;
use crate::error::{Error, Result};
use crate::options::{SearchOptions, SortDirection};
use crate::wire;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use tracing::debug;

struct CursorState<T, F, K> {
    config: ConnectionConfig,
    fetcher: F,
    options: SearchOptions,
    soft_limit: Option<u64>,
    wire_field: String,
    op: &'static str,
    cursor_of: K,
    cursor: Option<Cursor>,
    returned: u64,
    buffer: VecDeque<T>,
    fetched_any: bool,
}

/// Adapt a [`PageFetcher`] into a lazy stream of items using cursor
/// pagination on `sort_field`.
///
/// After every non-empty page the cursor becomes the sort-field value of the
/// page's last item (read via `cursor_of`), and the next request augments the
/// caller's original query with a strict range predicate -
/// `<field>.gt:<cursor>` when ascending, `<field>.lt:<cursor>` when
/// descending - joined to any pre-existing query text by comma conjunction.
/// The field name is rendered in wire (snake_case) casing and `page` is
/// omitted from every request. Soft limit and inter-page delay behave exactly
/// as in [`paged_stream`](super::paged_stream).
///
/// Because the range predicate is strict, items sharing the exact cursor
/// value across a page boundary are skipped when they do not all fit on one
/// page. This is an accepted limitation of strict-predicate resumption;
/// patching it with secondary sort keys would change the observable
/// pagination order.
pub fn cursor_stream<T, F, K>(
    config: ConnectionConfig,
    fetcher: F,
    options: SearchOptions,
    sort_field: impl Into<String>,
    direction: SortDirection,
    soft_limit: Option<u64>,
    cursor_of: K,
) -> impl Stream<Item = Result<T>>
where
    F: PageFetcher<T>,
    K: FnMut(&T) -> Cursor,
{
    let op = match direction {
        SortDirection::Asc => "gt",
        SortDirection::Desc => "lt",
    };

    let state = CursorState {
        config,
        fetcher,
        options,
        soft_limit,
        wire_field: wire::to_snake_case(&sort_field.into()),
        op,
        cursor_of,
        cursor: None,
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
            options.page = None;
            if let Some(cursor) = &state.cursor {
                let clause = format!("{}.{}:{}", state.wire_field, state.op, cursor);
                // Each request rebuilds the conjunction from the caller's
                // original query, replacing the previous cursor clause.
                options.q = Some(match &state.options.q {
                    Some(q) => format!("{q},{clause}"),
                    None => clause,
                });
            }

            let page: Page<T> = state
                .fetcher
                .fetch_page(state.config.clone(), options)
                .await?;
            state.fetched_any = true;

            if page.is_empty() {
                return Ok(None);
            }

            let next_cursor = match page.items.last() {
                Some(last) => (state.cursor_of)(last),
                None => return Err(Error::invariant("non-empty page has no last item")),
            };

            debug!(cursor = %next_cursor, items = page.len(), "fetched page");

            state.cursor = Some(next_cursor);
            state.returned += page.len() as u64;
            state.buffer.extend(page.items);
        }
    })
}
