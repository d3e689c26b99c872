//! `/api/metadata`: read-only catalog of packages, roles and resource types.

use std::borrow::Cow;

use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use accessadmin_core::{AreaGroupId, AreaId, PackageId, RoleId};

use crate::client::AccessClient;
use crate::error::ApiResult;
use crate::models::{AccessPackage, Area, AreaGroup, PackageSearchQuery, ResourceOwner, RoleMeta};
use crate::query::QueryParams;

const PACKAGE_SEARCH: &str = "/api/metadata/accesspackages/search";
const AREA_GROUPS: &str = "/api/metadata/accesspackages/groups";
const PACKAGE_BY_URN: &str = "/api/metadata/accesspackages/package";
const ROLES: &str = "/api/metadata/roles";
const ROLE_PACKAGES: &str = "/api/metadata/roles/packages";
const RESOURCE_TYPES: &str = "/api/metadata/resources/types";
const RESOURCE_OWNERS: &str = "/api/metadata/resources/owners";

/// Catalog queries, localized through `Accept-Language`.
#[derive(Debug, Clone)]
pub struct MetadataApi<'a> {
    client: &'a AccessClient,
    language: Cow<'a, str>,
}

impl<'a> MetadataApi<'a> {
    pub(crate) fn new(client: &'a AccessClient) -> Self {
        Self {
            client,
            language: Cow::Borrowed(client.language()),
        }
    }

    /// Override the client's default language for calls made through this
    /// facade.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Cow::Owned(language.into());
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub async fn search_access_packages(&self, query: &PackageSearchQuery) -> ApiResult<Vec<AccessPackage>> {
        let mut params = QueryParams::new();
        params.extend_from(query);
        self.get_json(PACKAGE_SEARCH, &params).await
    }

    pub async fn list_area_groups(&self) -> ApiResult<Vec<AreaGroup>> {
        self.get_json(AREA_GROUPS, &QueryParams::new()).await
    }

    pub async fn list_group_areas(&self, group: AreaGroupId) -> ApiResult<Vec<Area>> {
        let path = format!("/api/metadata/accesspackages/groups/{group}/areas");
        self.get_json(&path, &QueryParams::new()).await
    }

    pub async fn list_area_packages(&self, area: AreaId) -> ApiResult<Vec<AccessPackage>> {
        let path = format!("/api/metadata/accesspackages/areas/{area}/packages");
        self.get_json(&path, &QueryParams::new()).await
    }

    pub async fn get_access_package(&self, id: PackageId) -> ApiResult<AccessPackage> {
        let path = format!("/api/metadata/accesspackages/packages/{id}");
        self.get_json(&path, &QueryParams::new()).await
    }

    pub async fn get_access_package_by_urn(&self, urn: &str) -> ApiResult<AccessPackage> {
        let mut params = QueryParams::new();
        params.push("urn", urn);
        self.get_json(PACKAGE_BY_URN, &params).await
    }

    pub async fn list_roles(&self) -> ApiResult<Vec<RoleMeta>> {
        self.get_json(ROLES, &QueryParams::new()).await
    }

    pub async fn get_role(&self, id: RoleId) -> ApiResult<RoleMeta> {
        let path = format!("{ROLES}/{id}");
        self.get_json(&path, &QueryParams::new()).await
    }

    /// Packages granted through role `role` (code), optionally narrowed to an
    /// entity `variant` such as `AS` or `ENK`.
    pub async fn list_role_packages(&self, role: &str, variant: Option<&str>) -> ApiResult<Vec<AccessPackage>> {
        let mut params = QueryParams::new();
        params.push("role", role).push_opt("variant", variant);
        self.get_json(ROLE_PACKAGES, &params).await
    }

    pub async fn list_resource_types(&self) -> ApiResult<Vec<String>> {
        self.get_json(RESOURCE_TYPES, &QueryParams::new()).await
    }

    pub async fn list_resource_owners(&self) -> ApiResult<Vec<ResourceOwner>> {
        self.get_json(RESOURCE_OWNERS, &QueryParams::new()).await
    }

    fn get(&self, path: &str, params: &QueryParams) -> RequestBuilder {
        self.client
            .request(Method::GET, path, params)
            .header(ACCEPT_LANGUAGE, self.language.as_ref())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &QueryParams) -> ApiResult<T> {
        self.client.send_json(self.get(path, params)).await
    }
}
