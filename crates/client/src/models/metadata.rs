//! Metadata catalog DTOs: package taxonomy, roles, resource owners.

use serde::{Deserialize, Serialize};

use accessadmin_core::{AreaGroupId, AreaId, PackageId, RoleId};

use crate::models::common::ResourceRef;
use crate::query::{QueryParams, ToQuery};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRef {
    pub id: AreaId,
    #[serde(default)]
    pub name: Option<String>,
}

/// A grantable bundle of permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackage {
    pub id: PackageId,
    #[serde(default)]
    pub urn: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_delegable: bool,
    #[serde(default)]
    pub is_assignable: bool,
    #[serde(default)]
    pub area: Option<AreaRef>,
    #[serde(default)]
    pub resources: Vec<ResourceRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub packages: Vec<AccessPackage>,
}

/// Top level of the taxonomy: group → areas → packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaGroup {
    pub id: AreaGroupId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub areas: Vec<Area>,
}

impl AreaGroup {
    pub fn packages(&self) -> impl Iterator<Item = &AccessPackage> {
        self.areas.iter().flat_map(|area| area.packages.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleProvider {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMeta {
    pub id: RoleId,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub urn: Option<String>,
    #[serde(default)]
    pub provider: Option<RoleProvider>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOwner {
    pub name: String,
    #[serde(default)]
    pub org_number: Option<String>,
    #[serde(default)]
    pub org_code: Option<String>,
}

/// Free-text package search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSearchQuery {
    pub term: Option<String>,
    pub type_name: Option<String>,
    /// Repeated as `resourceProviderCode`.
    pub resource_provider_codes: Vec<String>,
}

impl ToQuery for PackageSearchQuery {
    fn append_to(&self, params: &mut QueryParams) {
        params
            .push_opt("term", self.term.as_deref())
            .push_opt("typeName", self.type_name.as_deref())
            .push_all("resourceProviderCode", &self.resource_provider_codes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_group_exposes_nested_packages() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-0000000000a1",
            "name": "Tax and accounting",
            "areas": [{
                "id": "00000000-0000-0000-0000-0000000000b1",
                "name": "Accounting",
                "packages": [
                    { "id": "00000000-0000-0000-0000-0000000000c1", "name": "Bookkeeping", "isDelegable": true },
                    { "id": "00000000-0000-0000-0000-0000000000c2", "name": "Annual accounts" }
                ]
            }]
        }"#;
        let group: AreaGroup = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = group.packages().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bookkeeping", "Annual accounts"]);
        assert!(group.areas[0].packages[0].is_delegable);
        assert!(!group.areas[0].packages[1].is_assignable);
    }

    #[test]
    fn search_query_encodes_filters() {
        let query = PackageSearchQuery {
            term: Some("regnskap".to_string()),
            type_name: None,
            resource_provider_codes: vec!["skd".to_string(), "brg".to_string()],
        };
        let mut params = QueryParams::new();
        params.extend_from(&query);
        assert_eq!(
            params.to_query_string(),
            "term=regnskap&resourceProviderCode=skd&resourceProviderCode=brg"
        );
    }
}
