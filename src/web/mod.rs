//! Web module for the soundboard.
//!
//! This module provides the JSON API for listing and uploading clips and
//! serves the browser pages, client scripts, and the clips themselves.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
