//! Function-calling adapters
//!
//! - [`LookupToolExecutor`]: runs the country lookup functions
//! - [`JsonSchemaToolConverter`]: builds the function declarations sent to the model

mod lookup;
mod schema;

pub use lookup::LookupToolExecutor;
pub use schema::JsonSchemaToolConverter;
