//! # schoolgate-core
//!
//! Core crate for SchoolGate. Contains configuration schemas and the
//! unified error system shared by the authorization engine and the
//! policy tooling.
//!
//! This crate has **no** internal dependencies on other SchoolGate crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
