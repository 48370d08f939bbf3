//! Impact ranking module
//!
//! Attaches criticality to reachable resources and orders them into an
//! impact report.

pub mod criticality;
pub mod impact;
pub mod ranker;

pub use criticality::{Criticality, CriticalityTable};
pub use impact::{ImpactEntry, ImpactReport};
pub use ranker::{rank, Ranking, ResourceOutcome};
