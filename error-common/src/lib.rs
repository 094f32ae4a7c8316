//! Common error handling utilities for HealthGuard Engine
//!
//! This module provides the error enum, error codes and error context shared
//! by the symptom engine and the HTTP server, so that failures surface with
//! the same shape no matter which layer raised them.
//!
//! # Error Categories
//!
//! - **InvalidInput**: Request validation failures (age, gender, symptom list)
//! - **Catalog**: Condition catalog loading and integrity errors
//! - **Config**: Environment and command-line configuration errors
//! - **Network / Server**: Listener and HTTP serving failures
//! - **Internal**: Anything else
//!
//! # Example
//!
//! ```rust
//! use error_common::{HealthGuardError, ErrorContext, codes};
//!
//! fn check_age(age: u32) -> error_common::Result<u32> {
//!     if age == 0 {
//!         return Err(HealthGuardError::invalid_input("age must be greater than zero"));
//!     }
//!     Ok(age)
//! }
//!
//! let err = check_age(0).unwrap_err();
//! assert_eq!(err.code(), codes::validation::INVALID_INPUT);
//!
//! let context = ErrorContext::new().add_context("field", "age");
//! assert_eq!(context.additional.get("field").map(String::as_str), Some("age"));
//! ```

pub mod types;
pub mod context;
pub mod codes;

pub use types::*;
pub use context::*;
