//! Client administration DTOs: clients, agents and delegation batches.

use serde::{Deserialize, Serialize};

use accessadmin_core::PartyUuid;

use crate::models::common::{PackageRef, PartyRef, PersonInput, RoleRef};
use crate::query::{QueryParams, ToQuery};

/// Filters and paging for the client list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientsQuery {
    /// Role codes the client relationship must carry; repeated as `roles`.
    pub roles: Vec<String>,
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

impl ToQuery for ClientsQuery {
    fn append_to(&self, params: &mut QueryParams) {
        params
            .push_all("roles", &self.roles)
            .push_opt("pageSize", self.page_size)
            .push_opt("pageNumber", self.page_number);
    }
}

/// Packages available through one role on a client relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAccess {
    pub role: RoleRef,
    #[serde(default)]
    pub packages: Vec<PackageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client: PartyRef,
    #[serde(default)]
    pub access: Vec<ClientAccess>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub agent: PartyRef,
    #[serde(default)]
    pub access: Vec<ClientAccess>,
}

/// Who to add as an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentTarget {
    /// A party the backend already knows, sent as `to`.
    Party(PartyUuid),
    /// A person looked up by identity number and last name, sent as JSON.
    Person(PersonInput),
}

/// Packages to grant or revoke through one client role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationBatchInput {
    pub role: String,
    pub packages: Vec<String>,
}

/// Backend acknowledgement for one role in a delegation batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationResult {
    pub role: String,
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub changed: bool,
}

/// A provider (service company) and the clients the user handles for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyClientProvider {
    pub provider: PartyRef,
    #[serde(default)]
    pub clients: Vec<Client>,
}

/// Row counts from a CSV delegation import.
///
/// Row-level failures are reported here, not as a request error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    #[serde(default)]
    pub success: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub unchanged: u32,
    #[serde(default)]
    pub agents_added: u32,
    #[serde(default)]
    pub delegations_added: u32,
    #[serde(default)]
    pub delegations_removed: u32,
    #[serde(default)]
    pub errors: Vec<ImportIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportIssue {
    #[serde(default)]
    pub row: Option<u32>,
    pub message: String,
}

impl ImportResult {
    /// Rows the backend looked at.
    pub fn rows(&self) -> u64 {
        [self.success, self.failed, self.skipped, self.unchanged]
            .into_iter()
            .map(u64::from)
            .sum()
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0 || !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clients_query_repeats_roles() {
        let query = ClientsQuery {
            roles: vec!["REGN".to_string(), "REVI".to_string()],
            page_size: Some(25),
            page_number: Some(2),
        };
        let mut params = QueryParams::party(&PartyUuid::new("p-1"));
        params.extend_from(&query);
        assert_eq!(
            params.to_query_string(),
            "party=p-1&roles=REGN&roles=REVI&pageSize=25&pageNumber=2"
        );
    }

    #[test]
    fn import_result_decodes_counts_and_errors() {
        let json = r#"{
            "success": 3, "failed": 1, "skipped": 2, "unchanged": 4,
            "agentsAdded": 1, "delegationsAdded": 5, "delegationsRemoved": 0,
            "errors": [{ "row": 7, "message": "unknown role" }]
        }"#;
        let result: ImportResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.rows(), 10);
        assert_eq!(result.delegations_added, 5);
        assert!(result.has_failures());
        assert_eq!(result.errors[0].row, Some(7));
    }

    #[test]
    fn import_rows_do_not_overflow_on_large_counts() {
        let result: ImportResult =
            serde_json::from_str(r#"{ "success": 4294967295, "failed": 1, "skipped": 4294967295 }"#)
                .unwrap();
        assert_eq!(result.rows(), 2 * u64::from(u32::MAX) + 1);
    }

    #[test]
    fn import_result_tolerates_missing_fields() {
        let result: ImportResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, ImportResult::default());
        assert!(!result.has_failures());
    }
}
