use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "accessadmin")]
#[command(version, about = "Access management client", long_about = None)]
struct Cli {
    /// Backend origin
    #[arg(long, global = true, env = "ACCESSADMIN_API_URL")]
    api_url: Option<String>,

    /// Bearer token
    #[arg(long, global = true, env = "ACCESSADMIN_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Accept-Language for metadata calls
    #[arg(long, global = true, env = "ACCESSADMIN_LANGUAGE")]
    language: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parties the current user may act for, flattened and indented
    Parties {
        /// Only show parties whose name or organization number matches
        #[arg(long)]
        search: Option<String>,
    },
    /// Clients of a service provider
    Clients {
        #[arg(long)]
        party: String,
        /// Role code filter (repeatable)
        #[arg(long = "role")]
        roles: Vec<String>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        page_number: Option<u32>,
    },
    /// Agents of a service provider
    Agents {
        #[arg(long)]
        party: String,
    },
    /// Download client delegations as CSV
    Export {
        #[arg(long)]
        party: String,
        /// Directory to save into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Upload a CSV of client delegations
    Import {
        #[arg(long)]
        party: String,
        file: PathBuf,
    },
    /// Search the access package catalog
    Packages {
        #[arg(long)]
        term: Option<String>,
    },
    /// List roles from the metadata catalog
    Roles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    accessadmin_observability::init();

    let cli = Cli::parse();
    let client = commands::build_client(cli.api_url, cli.token, cli.language)?;

    match cli.command {
        Commands::Parties { search } => commands::parties(&client, search.as_deref()).await?,
        Commands::Clients {
            party,
            roles,
            page_size,
            page_number,
        } => commands::clients(&client, &party, roles, page_size, page_number).await?,
        Commands::Agents { party } => commands::agents(&client, &party).await?,
        Commands::Export { party, out } => commands::export(&client, &party, &out).await?,
        Commands::Import { party, file } => commands::import(&client, &party, &file).await?,
        Commands::Packages { term } => commands::packages(&client, term).await?,
        Commands::Roles => commands::roles(&client).await?,
    }

    Ok(())
}
