//! Core components shared by the provider-facing modules.
//!
//! This module contains the foundational building blocks of the crate:
//! - The main [`JvpClient`] and its builder.
//! - The primary [`JvpError`] type.
//! - The [`FundamentalsSource`](services::FundamentalsSource) provider seam.
//! - Internal networking and wire-format helpers.

/// The main client (`JvpClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`JvpError`) for the crate.
pub mod error;
/// Service traits abstracting the fundamentals provider.
pub mod services;

pub(crate) mod quotesummary;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::JvpClient`
pub use client::{Backoff, JvpClient, JvpClientBuilder, RetryConfig};
pub use error::JvpError;
