//! # Philomena Client
//!
//! A typed async client for Philomena-style imageboard APIs (Derpibooru,
//! Ponybooru, and other compatible boards).
//!
//! ## Features
//!
//! - **Typed entities**: images, comments, tags, forums, galleries, users
//!   and filters as plain serde structs
//! - **Lazy result streams**: page-oriented endpoints exposed as pull-based
//!   `futures::Stream`s that fetch on demand
//! - **Drift-resistant pagination**: image search streams by cursor on a
//!   monotonic sort field instead of page numbers
//! - **Cooperative rate limiting**: an optional inter-page delay between
//!   fetches, on top of the natural throttling of pull-based iteration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::{pin_mut, TryStreamExt};
//! use philomena_client::api::{stream_search_images, ImageSortField};
//! use philomena_client::{ConnectionConfig, Result, SearchOptions, SortDirection};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ConnectionConfig::new("https://derpibooru.org/api/v1/json");
//!
//!     let options = SearchOptions::new()
//!         .query("safe")
//!         .sort_field(ImageSortField::WilsonScore)
//!         .sort_direction(SortDirection::Desc);
//!
//!     let images = stream_search_images(&config, &options, Some(100))?;
//!     pin_mut!(images);
//!     while let Some(image) = images.try_next().await? {
//!         println!("{} ({})", image.view_url, image.wilson_score);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Endpoint Functions                          │
//! │  search_images()  get_forum_topics()  stream_search_images() …  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────┬──────────────────────┐
//! │   Client     │         Stream           │        Wire          │
//! ├──────────────┼──────────────────────────┼──────────────────────┤
//! │ Config       │ Offset adapter           │ Key normalization    │
//! │ GET + status │ Cursor adapter           │ Query encoding       │
//! │ Auth key     │ Soft limits, page delay  │ Shape validation     │
//! └──────────────┴──────────────────────────┴──────────────────────┘
//! ```
//!
//! The server speaks snake_case, offset-paginated JSON; the domain model is
//! camelCase and strongly typed. The wire module is the single place the two
//! are reconciled.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Request options and their validation
pub mod options;

/// Wire format reconciliation (case normalization, query encoding,
/// response validation)
pub mod wire;

/// Connection configuration and the shared request path
pub mod client;

/// Pagination-to-stream adapters
pub mod stream;

/// Typed entity models
pub mod models;

/// Per-resource endpoint functions
pub mod api;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{ConnectionConfig, ConnectionConfigBuilder};
pub use error::{Error, Result};
pub use options::{GetImageOptions, SearchOptions, SortDirection};
pub use stream::{cursor_stream, paged_stream, Cursor, Page, PageFetcher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
