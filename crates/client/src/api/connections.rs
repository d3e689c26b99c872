//! `/api/connections`: grant and revoke roles, access packages and resources
//! between parties.

use reqwest::Method;

use accessadmin_core::{PackageId, PartyUuid};

use crate::client::AccessClient;
use crate::error::ApiResult;
use crate::models::{
    Assignment, AssignmentPackage, Connection, ConnectionQuery, DelegationCheck,
    PackagePermission, PackageSelector, PersonInput, ResourcePermission, ResourceRights,
    RightCheck, RightsInput, RolePermission,
};
use crate::query::QueryParams;

const CONNECTIONS: &str = "/api/connections";
const ACCESS_PACKAGES: &str = "/api/connections/accesspackages";
const ACCESS_PACKAGE_CHECK: &str = "/api/connections/accesspackages/delegationcheck";
const ROLES: &str = "/api/connections/roles";
const RESOURCES: &str = "/api/connections/resources";
const RESOURCE_RIGHTS: &str = "/api/connections/resources/rights";
const RESOURCE_CHECK: &str = "/api/connections/resources/delegationcheck";

/// Delegation surface for the acting `party`.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionsApi<'a> {
    client: &'a AccessClient,
}

impl<'a> ConnectionsApi<'a> {
    pub(crate) fn new(client: &'a AccessClient) -> Self {
        Self { client }
    }

    pub async fn list_connections(&self, party: &PartyUuid, query: &ConnectionQuery) -> ApiResult<Vec<Connection>> {
        let params = filtered_params(party, query);
        self.client
            .send_json(self.client.request(Method::GET, CONNECTIONS, &params))
            .await
    }

    pub async fn add_connection(&self, party: &PartyUuid, to: &PartyUuid) -> ApiResult<Assignment> {
        let mut params = QueryParams::party(party);
        params.push("to", to);
        let assignment: Assignment = self
            .client
            .send_json(self.client.request(Method::POST, CONNECTIONS, &params))
            .await?;
        tracing::info!(party = %party, to = %to, "connection added");
        Ok(assignment)
    }

    /// Connect a person who is looked up by identity number and last name.
    pub async fn add_connection_by_person(&self, party: &PartyUuid, person: &PersonInput) -> ApiResult<Assignment> {
        let params = QueryParams::party(party);
        let assignment: Assignment = self
            .client
            .send_json(self.client.request(Method::POST, CONNECTIONS, &params).json(person))
            .await?;
        tracing::info!(party = %party, to = %assignment.to_id, "connection added for person");
        Ok(assignment)
    }

    /// Remove the connection `from` → `to`. `cascade` also revokes everything
    /// delegated through it.
    pub async fn remove_connection(
        &self,
        party: &PartyUuid,
        from: &PartyUuid,
        to: &PartyUuid,
        cascade: Option<bool>,
    ) -> ApiResult<()> {
        let mut params = QueryParams::direction(party, from, to);
        params.push_opt("cascade", cascade);
        self.client
            .send_unit(self.client.request(Method::DELETE, CONNECTIONS, &params))
            .await?;
        tracing::info!(party = %party, from = %from, to = %to, "connection removed");
        Ok(())
    }

    pub async fn list_access_packages(
        &self,
        party: &PartyUuid,
        query: &ConnectionQuery,
    ) -> ApiResult<Vec<PackagePermission>> {
        let params = filtered_params(party, query);
        self.client
            .send_json(self.client.request(Method::GET, ACCESS_PACKAGES, &params))
            .await
    }

    pub async fn add_access_package(
        &self,
        party: &PartyUuid,
        from: &PartyUuid,
        to: &PartyUuid,
        package: &PackageSelector,
    ) -> ApiResult<AssignmentPackage> {
        let mut params = QueryParams::direction(party, from, to);
        params.extend_from(package);
        self.client
            .send_json(self.client.request(Method::POST, ACCESS_PACKAGES, &params))
            .await
    }

    pub async fn remove_access_package(
        &self,
        party: &PartyUuid,
        from: &PartyUuid,
        to: &PartyUuid,
        package: &PackageSelector,
    ) -> ApiResult<()> {
        let mut params = QueryParams::direction(party, from, to);
        params.extend_from(package);
        self.client
            .send_unit(self.client.request(Method::DELETE, ACCESS_PACKAGES, &params))
            .await
    }

    /// Which of `packages` the acting party is allowed to delegate.
    pub async fn check_access_package_delegation(
        &self,
        party: &PartyUuid,
        packages: &[PackageId],
    ) -> ApiResult<Vec<DelegationCheck>> {
        let mut params = QueryParams::party(party);
        params.push_all("packageIds", packages);
        self.client
            .send_json(self.client.request(Method::GET, ACCESS_PACKAGE_CHECK, &params))
            .await
    }

    pub async fn list_roles(&self, party: &PartyUuid, query: &ConnectionQuery) -> ApiResult<Vec<RolePermission>> {
        let params = filtered_params(party, query);
        self.client
            .send_json(self.client.request(Method::GET, ROLES, &params))
            .await
    }

    /// Revoke role `role` (code or URN) from `to`.
    pub async fn remove_role(&self, party: &PartyUuid, from: &PartyUuid, to: &PartyUuid, role: &str) -> ApiResult<()> {
        let mut params = QueryParams::direction(party, from, to);
        params.push("role", role);
        self.client
            .send_unit(self.client.request(Method::DELETE, ROLES, &params))
            .await
    }

    pub async fn list_resources(
        &self,
        party: &PartyUuid,
        query: &ConnectionQuery,
    ) -> ApiResult<Vec<ResourcePermission>> {
        let params = filtered_params(party, query);
        self.client
            .send_json(self.client.request(Method::GET, RESOURCES, &params))
            .await
    }

    /// Rights `to` currently holds on `resource` from `from`.
    pub async fn get_resource_rights(
        &self,
        party: &PartyUuid,
        from: &PartyUuid,
        to: &PartyUuid,
        resource: &str,
    ) -> ApiResult<ResourceRights> {
        let params = resource_params(party, from, to, resource);
        self.client
            .send_json(self.client.request(Method::GET, RESOURCE_RIGHTS, &params))
            .await
    }

    /// Which rights on `resource` the acting party is allowed to delegate.
    pub async fn check_resource_delegation(&self, party: &PartyUuid, resource: &str) -> ApiResult<Vec<RightCheck>> {
        let mut params = QueryParams::party(party);
        params.push("resource", resource);
        self.client
            .send_json(self.client.request(Method::GET, RESOURCE_CHECK, &params))
            .await
    }

    pub async fn add_resource(
        &self,
        party: &PartyUuid,
        from: &PartyUuid,
        to: &PartyUuid,
        resource: &str,
        rights: &RightsInput,
    ) -> ApiResult<ResourceRights> {
        let params = resource_params(party, from, to, resource);
        self.client
            .send_json(self.client.request(Method::POST, RESOURCES, &params).json(rights))
            .await
    }

    /// Replace the rights `to` holds on `resource`.
    pub async fn update_resource(
        &self,
        party: &PartyUuid,
        from: &PartyUuid,
        to: &PartyUuid,
        resource: &str,
        rights: &RightsInput,
    ) -> ApiResult<ResourceRights> {
        let params = resource_params(party, from, to, resource);
        self.client
            .send_json(self.client.request(Method::PUT, RESOURCES, &params).json(rights))
            .await
    }

    pub async fn remove_resource(&self, party: &PartyUuid, from: &PartyUuid, to: &PartyUuid, resource: &str) -> ApiResult<()> {
        let params = resource_params(party, from, to, resource);
        self.client
            .send_unit(self.client.request(Method::DELETE, RESOURCES, &params))
            .await
    }
}

fn filtered_params(party: &PartyUuid, query: &ConnectionQuery) -> QueryParams {
    let mut params = QueryParams::party(party);
    params.extend_from(query);
    params
}

fn resource_params(party: &PartyUuid, from: &PartyUuid, to: &PartyUuid, resource: &str) -> QueryParams {
    let mut params = QueryParams::direction(party, from, to);
    params.push("resource", resource);
    params
}
