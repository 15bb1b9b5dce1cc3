//! Core components of the `ticker-snapshot` crate.
//!
//! This module contains the foundational building blocks, including:
//! - The [`SnapClient`] with its builder and scoped [`HttpSession`]s.
//! - The primary [`SnapError`] type.
//! - The response models ([`Snapshot`], [`NewsItem`], [`PriceBar`]).
//! - The [`MarkupSource`] seam the pipeline fetches pages through.

/// The client (`SnapClient`), builder, and fetch sessions.
pub mod client;
/// The primary error type (`SnapError`) for the crate.
pub mod error;
/// Data models shared by the extractor, the assembler and the HTTP layer.
pub mod models;
/// Service traits for abstracting page fetching.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::SnapClient`
pub use client::{HttpSession, SnapClient, SnapClientBuilder};
pub use error::SnapError;
pub use models::{NewsItem, PriceBar, PriceRow, Sentiment, Snapshot};
pub use services::MarkupSource;
