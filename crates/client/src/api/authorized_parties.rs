//! `/api/authorizedparties`: the forest of parties the user may act for.

use reqwest::Method;

use accessadmin_parties::AuthorizedParty;

use crate::client::AccessClient;
use crate::error::ApiResult;
use crate::models::AuthorizedPartiesQuery;
use crate::query::QueryParams;

const AUTHORIZED_PARTIES: &str = "/api/authorizedparties";

impl AccessClient {
    /// Parties the current user may act for, as a forest of roots with
    /// nested subunits. Use [`accessadmin_parties::flatten`] to render it.
    pub async fn authorized_parties(
        &self,
        query: &AuthorizedPartiesQuery,
    ) -> ApiResult<Vec<AuthorizedParty>> {
        let mut params = QueryParams::new();
        params.extend_from(query);

        let parties: Vec<AuthorizedParty> = self
            .send_json(self.request(Method::GET, AUTHORIZED_PARTIES, &params))
            .await?;

        tracing::debug!(
            roots = parties.len(),
            total = accessadmin_parties::count(&parties),
            "fetched authorized parties"
        );
        Ok(parties)
    }
}
