//! Scoring and progression engine for the career fit self-assessment.
//!
//! The [`assessment`] module owns the question catalog, the per-section
//! sequencers, the orchestrating state machine, and the results synthesizer.
//! Everything else here is the ambient application stack shared with the
//! terminal presenter.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
