//! Pagination-to-stream adaptation
//!
//! The server only ever returns bounded pages; the adapters in this module
//! turn a page-oriented [`PageFetcher`] into a continuous lazy
//! [`futures::Stream`] of items.
//!
//! # Overview
//!
//! Two adapters are provided:
//! - [`paged_stream`] - walks pages by incrementing a page number. Simple,
//!   but unstable while the underlying collection is mutated concurrently.
//! - [`cursor_stream`] - walks pages by range-filtering on a monotonic sort
//!   field. Immune to insert/delete drift, preferred wherever the resource
//!   supports server-side range predicates.
//!
//! Both are pull-based state machines that buffer at most one page: no fetch
//! for a stream begins until the previous page's items have all been yielded,
//! so a slow consumer naturally throttles the request rate.

mod cursor;
mod offset;
mod types;

pub use cursor::cursor_stream;
pub use offset::paged_stream;
pub use types::{Cursor, Page, PageFetcher};
