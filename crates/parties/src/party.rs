use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use accessadmin_core::PartyUuid;

/// Party kind as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyType {
    #[serde(alias = "person")]
    Person,
    #[serde(alias = "organization")]
    Organization,
    #[serde(alias = "selfIdentified")]
    SelfIdentified,
    /// Any kind this client does not know about yet.
    #[serde(other)]
    Unknown,
}

/// A party the current user may act on behalf of.
///
/// Organizations may carry nested `subunits`. An absent and an empty
/// `subunits` list both mean the party is a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedParty {
    pub party_uuid: PartyUuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_id: Option<i64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub party_type: Option<PartyType>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub only_hierarchy_element_with_no_access: bool,
    #[serde(default)]
    pub authorized_access_packages: Vec<String>,
    #[serde(default)]
    pub authorized_resources: Vec<String>,
    #[serde(default)]
    pub authorized_roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subunits: Option<Vec<AuthorizedParty>>,
}

impl AuthorizedParty {
    /// Create a bare party carrying only its identifier.
    pub fn new(party_uuid: impl Into<PartyUuid>) -> Self {
        Self {
            party_uuid: party_uuid.into(),
            name: None,
            organization_number: None,
            party_id: None,
            party_type: None,
            is_deleted: false,
            only_hierarchy_element_with_no_access: false,
            authorized_access_packages: Vec::new(),
            authorized_resources: Vec::new(),
            authorized_roles: Vec::new(),
            subunits: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_organization_number(mut self, number: impl Into<String>) -> Self {
        self.organization_number = Some(number.into());
        self
    }

    pub fn with_subunits(mut self, subunits: Vec<AuthorizedParty>) -> Self {
        self.subunits = Some(subunits);
        self
    }

    /// Direct children, empty for a leaf.
    pub fn subunits(&self) -> &[AuthorizedParty] {
        self.subunits.as_deref().unwrap_or(&[])
    }

    pub fn is_leaf(&self) -> bool {
        self.subunits().is_empty()
    }

    /// Human-readable label.
    ///
    /// `"{name} ({organizationNumber})"` when both are set, `name` when only
    /// the name is set, otherwise the party UUID. Empty strings count as
    /// absent.
    pub fn display_name(&self) -> Cow<'_, str> {
        display_label(
            self.party_uuid.as_str(),
            self.name.as_deref(),
            self.organization_number.as_deref(),
        )
    }
}

/// Labeling rule shared by every party-shaped record.
pub fn display_label<'a>(
    party_uuid: &'a str,
    name: Option<&'a str>,
    organization_number: Option<&'a str>,
) -> Cow<'a, str> {
    match (non_empty(name), non_empty(organization_number)) {
        (Some(name), Some(org)) => Cow::Owned(format!("{name} ({org})")),
        (Some(name), None) => Cow::Borrowed(name),
        (None, _) => Cow::Borrowed(party_uuid),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_with_organization_number() {
        let party = AuthorizedParty::new("p-1")
            .with_name("Acme Corp")
            .with_organization_number("987654321");
        assert_eq!(party.display_name(), "Acme Corp (987654321)");
    }

    #[test]
    fn display_name_without_organization_number() {
        let party = AuthorizedParty::new("p-1").with_name("Acme Corp");
        assert_eq!(party.display_name(), "Acme Corp");
    }

    #[test]
    fn display_name_falls_back_to_party_uuid() {
        let party = AuthorizedParty::new("abc-123");
        assert_eq!(party.display_name(), "abc-123");
    }

    #[test]
    fn organization_number_alone_does_not_replace_uuid() {
        let party = AuthorizedParty::new("abc-123").with_organization_number("987654321");
        assert_eq!(party.display_name(), "abc-123");
    }

    #[test]
    fn empty_name_counts_as_absent() {
        let party = AuthorizedParty::new("abc-123")
            .with_name("")
            .with_organization_number("987654321");
        assert_eq!(party.display_name(), "abc-123");
    }

    #[test]
    fn deserializes_backend_shape_with_defaults() {
        let json = r#"{
            "partyUuid": "org-1",
            "name": "Acme Corp",
            "organizationNumber": "987654321",
            "type": "Organization",
            "authorizedRoles": ["DAGL"],
            "subunits": [
                { "partyUuid": "sub-1", "name": "Acme Oslo", "type": "Organization" }
            ]
        }"#;

        let party: AuthorizedParty = serde_json::from_str(json).unwrap();
        assert_eq!(party.party_uuid.as_str(), "org-1");
        assert_eq!(party.party_type, Some(PartyType::Organization));
        assert_eq!(party.authorized_roles, vec!["DAGL".to_string()]);
        assert!(!party.is_deleted);
        assert_eq!(party.subunits().len(), 1);
        assert!(party.subunits()[0].is_leaf());
        assert!(party.subunits()[0].subunits.is_none());
    }

    #[test]
    fn unknown_party_type_is_tolerated() {
        let json = r#"{ "partyUuid": "x", "type": "Robot" }"#;
        let party: AuthorizedParty = serde_json::from_str(json).unwrap();
        assert_eq!(party.party_type, Some(PartyType::Unknown));
    }

    #[test]
    fn empty_subunits_is_a_leaf() {
        let party = AuthorizedParty::new("x").with_subunits(Vec::new());
        assert!(party.is_leaf());
    }
}
