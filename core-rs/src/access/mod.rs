//! Access resolution module
//!
//! Provides the permission table (direct and group grants) and the resolver
//! that turns it into per-resource access decisions.

pub mod permissions;
pub mod resolver;

pub use permissions::{Grant, PermissionTable};
pub use resolver::{can_access, AccessDecision, AccessResolver, GrantPath};
