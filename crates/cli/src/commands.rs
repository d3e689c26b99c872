//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use accessadmin_client::models::{AuthorizedPartiesQuery, ClientsQuery, PackageSearchQuery};
use accessadmin_client::{AccessClient, ApiError, ClientConfig, PartyUuid};

pub fn build_client(
    api_url: Option<String>,
    token: Option<String>,
    language: Option<String>,
) -> Result<AccessClient> {
    // No flag and no env value: `from_env` logs and uses its default.
    let mut config = match api_url {
        Some(api_url) => ClientConfig::new(api_url),
        None => ClientConfig::from_env(),
    };
    if let Some(token) = token {
        config.token = Some(token);
    }
    if let Some(language) = language {
        config.language = language;
    }

    AccessClient::new(config).context("failed to build access client")
}

pub async fn parties(client: &AccessClient, search: Option<&str>) -> Result<()> {
    let forest = client
        .authorized_parties(&AuthorizedPartiesQuery::default())
        .await
        .map_err(login_hint)?;

    match search {
        Some(term) => {
            for party in accessadmin_parties::search(&forest, term) {
                println!("{}\t{}", party.party_uuid, party.display_name());
            }
        }
        None => {
            for (depth, party) in accessadmin_parties::flatten_with_depth(&forest) {
                println!("{}{}", "  ".repeat(depth), party.display_name());
            }
        }
    }

    Ok(())
}

pub async fn clients(
    client: &AccessClient,
    party: &str,
    roles: Vec<String>,
    page_size: Option<u32>,
    page_number: Option<u32>,
) -> Result<()> {
    let query = ClientsQuery {
        roles,
        page_size,
        page_number,
    };
    let page = client
        .client_admin()
        .list_clients(&parse_party(party)?, &query)
        .await
        .map_err(login_hint)?;
    print_json(&page)
}

pub async fn agents(client: &AccessClient, party: &str) -> Result<()> {
    let agents = client
        .client_admin()
        .list_agents(&parse_party(party)?)
        .await
        .map_err(login_hint)?;
    print_json(&agents)
}

pub async fn export(client: &AccessClient, party: &str, out: &Path) -> Result<()> {
    let file = client
        .client_admin()
        .export_delegations(&parse_party(party)?)
        .await
        .map_err(login_hint)?;
    let path = file
        .save_to(out)
        .await
        .with_context(|| format!("failed to save export into {}", out.display()))?;
    println!("{}", path.display());
    Ok(())
}

pub async fn import(client: &AccessClient, party: &str, file: &Path) -> Result<()> {
    let contents = tokio::fs::read(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "delegations.csv".to_string());

    let result = client
        .client_admin()
        .import_delegations(&parse_party(party)?, file_name, contents)
        .await
        .map_err(login_hint)?;

    if result.has_failures() {
        tracing::warn!(failed = result.failed, errors = result.errors.len(), "import had failing rows");
    }
    print_json(&result)
}

pub async fn packages(client: &AccessClient, term: Option<String>) -> Result<()> {
    let query = PackageSearchQuery {
        term,
        ..Default::default()
    };
    let packages = client
        .metadata()
        .search_access_packages(&query)
        .await
        .map_err(login_hint)?;
    print_json(&packages)
}

pub async fn roles(client: &AccessClient) -> Result<()> {
    let roles = client.metadata().list_roles().await.map_err(login_hint)?;
    print_json(&roles)
}

fn parse_party(value: &str) -> Result<PartyUuid> {
    value
        .parse::<PartyUuid>()
        .map_err(|e| anyhow::anyhow!("invalid --party: {e}"))
}

fn login_hint(err: ApiError) -> anyhow::Error {
    if err.is_unauthenticated() {
        anyhow::anyhow!("not logged in: set ACCESSADMIN_TOKEN or pass --token")
    } else {
        anyhow::Error::new(err)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
