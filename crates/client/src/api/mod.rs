//! Endpoint groups. Each facade borrows the shared [`crate::AccessClient`].

mod authorized_parties;
pub mod client_admin;
pub mod connections;
pub mod metadata;

pub use client_admin::ClientAdminApi;
pub use connections::ConnectionsApi;
pub use metadata::MetadataApi;
