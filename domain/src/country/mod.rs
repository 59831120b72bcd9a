//! Country lookup domain
//!
//! - [`CountryTable`]: the static seven-entry fact table and its per-field accessors
//! - [`LookupFunction`]: the closed set of functions the country agent may invoke
//!
//! This is the only deterministic (non-model) path to an answer. It is pure:
//! no I/O, no shared mutable state, and lookup misses return a sentinel
//! string instead of an error.

mod functions;
mod table;

pub use functions::{COUNTRY_NAME_ARG, LookupFunction};
pub use table::{CountryFact, CountryField, CountryReport, CountryTable};
