//! References and envelopes shared across endpoint groups.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use accessadmin_core::{DomainError, DomainResult, PackageId, PartyUuid, RoleId};
use accessadmin_parties::display_label;

/// Compact party reference embedded in delegation records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyRef {
    pub id: PartyUuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub organization_number: Option<String>,
    #[serde(default, rename = "type")]
    pub party_type: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl PartyRef {
    /// Same labeling rule as [`accessadmin_parties::AuthorizedParty::display_name`].
    pub fn display_name(&self) -> Cow<'_, str> {
        display_label(
            self.id.as_str(),
            self.name.as_deref(),
            self.organization_number.as_deref(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    pub id: RoleId,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub urn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRef {
    pub id: PackageId,
    #[serde(default)]
    pub urn: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub identifier: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub resource_owner_name: Option<String>,
}

/// One way a permission reaches `to` from `from`, possibly through an
/// intermediate party or role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub from: PartyRef,
    pub to: PartyRef,
    #[serde(default)]
    pub via: Option<PartyRef>,
    #[serde(default)]
    pub role: Option<RoleRef>,
    #[serde(default)]
    pub via_role: Option<RoleRef>,
}

/// Backend record created when an agent or connection is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: Uuid,
    pub from_id: PartyUuid,
    pub to_id: PartyUuid,
    #[serde(default)]
    pub role_id: Option<RoleId>,
}

/// Identifies a person who is not yet connected, by national identity
/// number and last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInput {
    pub person_identifier: String,
    pub last_name: String,
}

impl PersonInput {
    /// Both fields are required; surrounding whitespace is trimmed.
    pub fn new(person_identifier: impl Into<String>, last_name: impl Into<String>) -> DomainResult<Self> {
        let person_identifier = person_identifier.into().trim().to_string();
        let last_name = last_name.into().trim().to_string();
        if person_identifier.is_empty() {
            return Err(DomainError::validation("person identifier is required"));
        }
        if last_name.is_empty() {
            return Err(DomainError::validation("last name is required"));
        }
        Ok(Self {
            person_identifier,
            last_name,
        })
    }
}

/// Paginated list envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new", bound(deserialize = "T: Deserialize<'de>"))]
    pub data: Vec<T>,
    #[serde(default)]
    pub links: PageLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_ref_label_matches_party_rule() {
        let party: PartyRef = serde_json::from_str(
            r#"{ "id": "p-1", "name": "Acme Corp", "organizationNumber": "987654321" }"#,
        )
        .unwrap();
        assert_eq!(party.display_name(), "Acme Corp (987654321)");
    }

    #[test]
    fn page_defaults_when_links_missing() {
        let page: Page<u32> = serde_json::from_str(r#"{ "data": [1, 2] }"#).unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert!(!page.has_next());
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct NoDefault {
        id: u32,
    }

    #[test]
    fn page_of_items_without_default() {
        let page: Page<NoDefault> = serde_json::from_str(
            r#"{ "data": [{ "id": 1 }], "links": { "next": "/next" } }"#,
        )
        .unwrap();
        assert_eq!(page.data, vec![NoDefault { id: 1 }]);
        assert!(page.has_next());

        let empty: Page<NoDefault> = serde_json::from_str("{}").unwrap();
        assert!(empty.data.is_empty());
    }

    #[test]
    fn person_input_requires_both_fields() {
        let input = PersonInput::new(" 01017012345 ", "Nordmann").unwrap();
        assert_eq!(input.person_identifier, "01017012345");

        assert!(matches!(
            PersonInput::new("01017012345", "  "),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(PersonInput::new("", "Nordmann"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn person_input_uses_camel_case() {
        let input = PersonInput::new("01017012345", "Nordmann").unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["personIdentifier"], "01017012345");
        assert_eq!(json["lastName"], "Nordmann");
    }
}
