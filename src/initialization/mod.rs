//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON)
//! - The direct HTTP client and per-credential tunnel clients
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::{basic_auth_header, init_client, init_tunnel_client};
pub use logger::init_logger_with;
