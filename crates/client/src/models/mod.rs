//! Wire DTOs. All JSON uses camelCase field names; optional and collection
//! fields default when the backend omits them.

pub mod authorized_parties;
pub mod client_admin;
pub mod common;
pub mod connections;
pub mod metadata;

pub use authorized_parties::AuthorizedPartiesQuery;
pub use client_admin::{
    Agent, AgentTarget, Client, ClientAccess, ClientsQuery, DelegationBatchInput,
    DelegationResult, ImportIssue, ImportResult, MyClientProvider,
};
pub use common::{
    Assignment, Page, PageLinks, PartyRef, PackageRef, Permission, PersonInput, ResourceRef,
    RoleRef,
};
pub use connections::{
    AssignmentPackage, Connection, ConnectionQuery, DelegationCheck, DelegationReason,
    PackagePermission, PackageSelector, ResourcePermission, ResourceRights, Right, RightCheck,
    RightsInput, RolePermission,
};
pub use metadata::{
    AccessPackage, Area, AreaGroup, AreaRef, PackageSearchQuery, ResourceOwner, RoleMeta,
    RoleProvider,
};
