//! Structured error stacking for request-serving applications
//!
//! Wraps an underlying cause with a classified [`Kind`], an HTTP status
//! code, and a human-readable message while preserving the chain of prior
//! errors that led to the current one. Chains serialize to a compact JSON
//! payload (most recent error plus optional `parent_errors`) and
//! reconstitute through a best-effort status-code classification.
//!
//! ```
//! use faultstack::{ErrorStack, Kind, is_root_of_kind};
//!
//! let stack = ErrorStack::not_found("row 42 missing");
//! let stack = ErrorStack::forbidden(stack);
//!
//! assert_eq!(stack.status_code(), http::StatusCode::FORBIDDEN);
//! assert!(is_root_of_kind(&stack, Kind::NotFound));
//! ```

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod kind;
pub mod stack;
mod wire;

pub use error::HttpError;
pub use kind::Kind;
pub use stack::{Cause, Entry, ErrorStack, is_kind, is_root_of_kind};
