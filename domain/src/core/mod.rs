//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Gemini models an agent can run on
//! - [`error::DomainError`]: domain-level errors
//! - [`string::one_line_preview`]: compact previews for progress and logs

pub mod error;
pub mod model;
pub mod string;
