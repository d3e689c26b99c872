//! `accessadmin-client`
//!
//! **Responsibility:** typed HTTP bindings for the access-management backend.
//!
//! Every call follows the same shape: build a query string, issue one request,
//! inspect the status, decode the body. Calls are stateless and may run
//! concurrently; callers sequence dependent calls themselves.
//!
//! - [`ClientAdminApi`]: clients, agents, CSV import/export (`/api/clientadmin`)
//! - [`AccessClient::authorized_parties`]: the party forest (`/api/authorizedparties`)
//! - [`MetadataApi`]: package taxonomy, roles, resource types (`/api/metadata`)
//! - [`ConnectionsApi`]: delegation grant/revoke (`/api/connections`)

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod response;

pub use api::{ClientAdminApi, ConnectionsApi, MetadataApi};
pub use client::AccessClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use export::ExportedFile;
pub use query::{QueryParams, ToQuery};
pub use response::ResponseOutcome;

pub use accessadmin_core::{AreaGroupId, AreaId, PackageId, PartyUuid, RoleId};
pub use accessadmin_parties::{AuthorizedParty, PartyType};
