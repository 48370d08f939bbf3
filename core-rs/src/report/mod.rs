//! Report presentation and persistence
//!
//! Sits outside the engine: the engine hands back an [`ImpactReport`]
//! and this module renders it for the console or writes it to disk.
//!
//! [`ImpactReport`]: crate::ranking::ImpactReport

pub mod persistence;
pub mod table;

pub use persistence::OutputFormat;
pub use table::{render_audit, render_report, REPORT_TITLE};
