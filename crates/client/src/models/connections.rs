//! Connection and delegation DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use accessadmin_core::{PackageId, PartyUuid};

use crate::models::common::{PackageRef, PartyRef, Permission, ResourceRef, RoleRef};
use crate::query::{QueryParams, ToQuery};

/// Optional direction filter for connection listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionQuery {
    pub from: Option<PartyUuid>,
    pub to: Option<PartyUuid>,
}

impl ConnectionQuery {
    pub fn from_party(party: impl Into<PartyUuid>) -> Self {
        Self {
            from: Some(party.into()),
            to: None,
        }
    }

    pub fn to_party(party: impl Into<PartyUuid>) -> Self {
        Self {
            from: None,
            to: Some(party.into()),
        }
    }
}

impl ToQuery for ConnectionQuery {
    fn append_to(&self, params: &mut QueryParams) {
        params
            .push_opt("from", self.from.as_ref())
            .push_opt("to", self.to.as_ref());
    }
}

/// A party related to the acting party, with the roles that connect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub party: PartyRef,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
    /// Connections reached through this one (e.g. subunits).
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// Access packages are addressed either by id or by URN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSelector {
    Id(PackageId),
    Urn(String),
}

impl ToQuery for PackageSelector {
    fn append_to(&self, params: &mut QueryParams) {
        match self {
            PackageSelector::Id(id) => params.push("packageId", id),
            PackageSelector::Urn(urn) => params.push("package", urn),
        };
    }
}

impl From<PackageId> for PackageSelector {
    fn from(value: PackageId) -> Self {
        Self::Id(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPackage {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub package_id: PackageId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePermission {
    pub package: PackageRef,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    pub role: RoleRef,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePermission {
    pub resource: ResourceRef,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationReason {
    pub description: String,
}

/// Whether the acting party may delegate a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationCheck {
    pub package: PackageRef,
    pub result: bool,
    #[serde(default)]
    pub reasons: Vec<DelegationReason>,
}

/// A single action on a resource (read, write, sign, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Right {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRights {
    pub resource: ResourceRef,
    #[serde(default)]
    pub rights: Vec<Right>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RightCheck {
    pub right_key: String,
    pub result: bool,
    #[serde(default)]
    pub reasons: Vec<DelegationReason>,
}

/// Rights to grant on a resource, by right key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RightsInput {
    pub action_keys: Vec<String>,
}

impl RightsInput {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            action_keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_selector_by_id_and_urn() {
        let id = PackageId::from_uuid(Uuid::from_u128(1));
        let mut params = QueryParams::new();
        params.extend_from(&PackageSelector::from(id));
        assert_eq!(
            params.pairs(),
            &[("packageId", "00000000-0000-0000-0000-000000000001".to_string())]
        );

        let mut params = QueryParams::new();
        params.extend_from(&PackageSelector::Urn("urn:altinn:accesspackage:regnskap".into()));
        assert_eq!(params.pairs()[0].0, "package");
    }

    #[test]
    fn connection_query_omits_unset_direction() {
        let mut params = QueryParams::party(&PartyUuid::new("p-1"));
        params.extend_from(&ConnectionQuery::to_party("p-2"));
        assert_eq!(params.to_query_string(), "party=p-1&to=p-2");
    }

    #[test]
    fn nested_connections_decode() {
        let json = r#"[{
            "party": { "id": "org-1", "name": "Acme" },
            "connections": [{ "party": { "id": "sub-1" } }]
        }]"#;
        let list: Vec<Connection> = serde_json::from_str(json).unwrap();
        assert_eq!(list[0].connections.len(), 1);
        assert!(list[0].roles.is_empty());
        assert!(list[0].connections[0].connections.is_empty());
    }

    #[test]
    fn rights_input_serializes_action_keys() {
        let input = RightsInput::new(["read", "write"]);
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["actionKeys"], serde_json::json!(["read", "write"]));
    }
}
