//! `accessadmin-core`: identifiers and domain errors shared by the
//! access-management client crates.
//!
//! This crate has no IO and no transport dependencies.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{AreaGroupId, AreaId, PackageId, PartyUuid, RoleId};
