//! Core components of the `marketstack-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`MsClient`] and its builder.
//! - The primary [`MsError`] type and the structured [`ApiError`].
//! - The paging envelope shared by every list endpoint.
//! - The request pipeline and query-parameter encoding.

/// The main client (`MsClient`), builder, and configuration.
pub mod client;
/// The primary error type (`MsError`) for the crate.
pub mod error;
/// Shared data models (`Pagination`, `Paginated`).
pub mod models;
/// Query-parameter types shared across endpoints.
pub mod params;
/// Date conversions between wire strings and `chrono` types.
pub mod conversions;
pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::MsClient`
pub use client::{API_KEY_ENV, MsClient, MsClientBuilder};
pub use error::{ApiError, ApiErrorContext, MsError};
pub use models::{Pagination, Paginated};
pub use params::{PageOptions, Sort};
