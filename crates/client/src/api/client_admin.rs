//! `/api/clientadmin`: clients, agents and CSV import/export.

use reqwest::Method;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};

use accessadmin_core::PartyUuid;

use crate::client::AccessClient;
use crate::error::ApiResult;
use crate::export::ExportedFile;
use crate::models::{
    Agent, AgentTarget, Assignment, Client, ClientsQuery, DelegationBatchInput, DelegationResult,
    ImportResult, MyClientProvider, Page, PartyRef,
};
use crate::query::QueryParams;

const CLIENTS: &str = "/api/clientadmin/clients";
const CLIENT_ACCESS_PACKAGES: &str = "/api/clientadmin/clients/accesspackages";
const AGENTS: &str = "/api/clientadmin/agents";
const AGENT_ACCESS_PACKAGES: &str = "/api/clientadmin/agents/accesspackages";
const MY_CLIENTS: &str = "/api/clientadmin/myclients";
const MY_CLIENT_PROVIDERS: &str = "/api/clientadmin/myclients/providers";
const EXPORT_DELEGATIONS: &str = "/api/clientadmin/export/delegations";
const IMPORT_DELEGATIONS: &str = "/api/clientadmin/import/delegations";

/// Client administration for a service provider acting as `party`.
#[derive(Debug, Clone, Copy)]
pub struct ClientAdminApi<'a> {
    client: &'a AccessClient,
}

impl<'a> ClientAdminApi<'a> {
    pub(crate) fn new(client: &'a AccessClient) -> Self {
        Self { client }
    }

    pub async fn list_clients(&self, party: &PartyUuid, query: &ClientsQuery) -> ApiResult<Page<Client>> {
        let mut params = QueryParams::party(party);
        params.extend_from(query);
        self.client
            .send_json(self.client.request(Method::GET, CLIENTS, &params))
            .await
    }

    pub async fn list_agents(&self, party: &PartyUuid) -> ApiResult<Vec<Agent>> {
        let params = QueryParams::party(party);
        self.client
            .send_json(self.client.request(Method::GET, AGENTS, &params))
            .await
    }

    /// Add an existing party (`to`) or a person (JSON body) as agent.
    pub async fn add_agent(&self, party: &PartyUuid, target: &AgentTarget) -> ApiResult<Assignment> {
        let mut params = QueryParams::party(party);
        let req = match target {
            AgentTarget::Party(to) => {
                params.push("to", to);
                self.client.request(Method::POST, AGENTS, &params)
            }
            AgentTarget::Person(person) => {
                self.client.request(Method::POST, AGENTS, &params).json(person)
            }
        };

        let assignment: Assignment = self.client.send_json(req).await?;
        tracing::info!(party = %party, agent = %assignment.to_id, "agent added");
        Ok(assignment)
    }

    /// Remove an agent. `cascade` also removes its delegations.
    pub async fn delete_agent(&self, party: &PartyUuid, to: &PartyUuid, cascade: Option<bool>) -> ApiResult<()> {
        let mut params = QueryParams::party(party);
        params.push("to", to).push_opt("cascade", cascade);
        self.client
            .send_unit(self.client.request(Method::DELETE, AGENTS, &params))
            .await?;
        tracing::info!(party = %party, agent = %to, "agent removed");
        Ok(())
    }

    /// Clients (with packages) delegated to agent `to`.
    pub async fn list_agent_access_packages(&self, party: &PartyUuid, to: &PartyUuid) -> ApiResult<Vec<Client>> {
        let mut params = QueryParams::party(party);
        params.push("to", to);
        self.client
            .send_json(self.client.request(Method::GET, AGENT_ACCESS_PACKAGES, &params))
            .await
    }

    /// Agents (with packages) acting for client `from`.
    pub async fn list_client_access_packages(&self, party: &PartyUuid, from: &PartyUuid) -> ApiResult<Vec<Agent>> {
        let mut params = QueryParams::party(party);
        params.push("from", from);
        self.client
            .send_json(self.client.request(Method::GET, CLIENT_ACCESS_PACKAGES, &params))
            .await
    }

    /// Delegate packages held on client `from` to agent `to`.
    pub async fn add_agent_access_packages(
        &self,
        party: &PartyUuid,
        from: &PartyUuid,
        to: &PartyUuid,
        batch: &[DelegationBatchInput],
    ) -> ApiResult<Vec<DelegationResult>> {
        let params = QueryParams::direction(party, from, to);
        self.client
            .send_json(self.client.request(Method::POST, AGENT_ACCESS_PACKAGES, &params).json(batch))
            .await
    }

    pub async fn remove_agent_access_packages(
        &self,
        party: &PartyUuid,
        from: &PartyUuid,
        to: &PartyUuid,
        batch: &[DelegationBatchInput],
    ) -> ApiResult<()> {
        let params = QueryParams::direction(party, from, to);
        self.client
            .send_unit(self.client.request(Method::DELETE, AGENT_ACCESS_PACKAGES, &params).json(batch))
            .await
    }

    /// Clients the current user handles as agent, grouped by provider.
    pub async fn list_my_clients(&self, providers: &[PartyUuid]) -> ApiResult<Vec<MyClientProvider>> {
        let mut params = QueryParams::new();
        params.push_all("provider", providers);
        self.client
            .send_json(self.client.request(Method::GET, MY_CLIENTS, &params))
            .await
    }

    pub async fn list_my_client_providers(&self) -> ApiResult<Vec<PartyRef>> {
        self.client
            .send_json(self.client.request(Method::GET, MY_CLIENT_PROVIDERS, &QueryParams::new()))
            .await
    }

    /// Stop acting as agent for `provider`.
    pub async fn remove_my_client_provider(&self, provider: &PartyUuid) -> ApiResult<()> {
        let mut params = QueryParams::new();
        params.push("provider", provider);
        self.client
            .send_unit(self.client.request(Method::DELETE, MY_CLIENT_PROVIDERS, &params))
            .await
    }

    /// Download every client delegation of `party` as CSV.
    ///
    /// The save name comes from `Content-Disposition`, falling back to
    /// `client-delegations-{party}.csv`.
    pub async fn export_delegations(&self, party: &PartyUuid) -> ApiResult<ExportedFile> {
        let params = QueryParams::party(party);
        let req = self
            .client
            .request(Method::GET, EXPORT_DELEGATIONS, &params)
            .header(ACCEPT, "text/csv");

        let response = self.client.execute(req).await?;
        ExportedFile::from_response(response, party).await
    }

    /// Upload a CSV delegation set as multipart field `file`.
    pub async fn import_delegations(
        &self,
        party: &PartyUuid,
        file_name: impl Into<String>,
        contents: Vec<u8>,
    ) -> ApiResult<ImportResult> {
        let part = Part::bytes(contents)
            .file_name(file_name.into())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        let params = QueryParams::party(party);
        let result: ImportResult = self
            .client
            .send_json(self.client.request(Method::POST, IMPORT_DELEGATIONS, &params).multipart(form))
            .await?;

        tracing::info!(
            party = %party,
            success = result.success,
            failed = result.failed,
            skipped = result.skipped,
            unchanged = result.unchanged,
            "delegation import finished"
        );
        Ok(result)
    }
}
