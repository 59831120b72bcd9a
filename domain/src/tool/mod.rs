//! Function-calling domain
//!
//! The model is offered a set of declared functions ([`ToolSpec`]). When it
//! asks for one, the request arrives as a [`ToolCall`], is checked by a
//! [`ToolValidator`], and is answered with a [`ToolResult`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (declared)   │    │ (requested)  │    │ (sent back)  │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Execution itself is an application port (`ToolExecutorPort`) so the use
//! cases can be tested without the real lookup table.

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult};
