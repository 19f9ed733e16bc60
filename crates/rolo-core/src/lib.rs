//! Core types and trait definitions for the Rolo contact directory.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod birthday;
pub mod contact;
pub mod error;
pub mod service;
pub mod store;

pub use error::{Error, Result};
