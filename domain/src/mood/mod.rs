//! Mood domain
//!
//! The analyzer agent is asked for one lowercase word. Its answer is
//! constrained to the closed [`MoodLabel`] set; every input maps to exactly
//! one label and normalization never fails.
//!
//! ```text
//! raw text ──trim+lowercase──▶ exact match? ──yes──▶ label   (Recognized)
//!                                          └─no───▶ neutral (Coerced)
//! gateway error ─────────────────────────────────▶ neutral (Failed)
//! ```

mod assessment;
mod label;

pub use assessment::{MoodAssessment, MoodOrigin};
pub use label::MoodLabel;
