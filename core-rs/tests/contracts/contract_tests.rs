//! Contract Tests - Engine Invariant Protection
//!
//! This file aggregates all contract test modules.
//! Contract tests verify invariants that MUST NEVER BREAK.

// Contract test modules
mod contracts {
    // Access resolution contracts
    mod resolution {
        include!("resolution_contracts.rs");
    }

    // Ranking and report contracts
    mod ranking {
        include!("ranking_contracts.rs");
    }
}
