//! Common test infrastructure
//!
//! This module provides the infrastructure for end-to-end tests: an isolated
//! server per test plus a thin HTTP client. Tests should only import from this
//! module, not from internal submodules.

mod client;
mod constants;
mod server;

// Public API - this is what tests import
pub use client::TestClient;
#[allow(unused_imports)]
pub use constants::*;
pub use server::TestServer;
