//! Authorized-party hierarchy (organizations, their subunits, persons).
//!
//! This crate contains deterministic logic only (no IO, no HTTP): the
//! `AuthorizedParty` wire model plus the operations used to render and search
//! a party forest returned by the backend.

pub mod party;
pub mod tree;

pub use party::{AuthorizedParty, PartyType, display_label};
pub use tree::{count, find, flatten, flatten_with_depth, search};
