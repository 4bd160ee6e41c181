//! synapse-register - one-shot user registration for a Synapse homeserver.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use synapse_admin_client::{NewUser, SynapseAdminClient};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Missing required flags are reported by clap with usage text and
    // a non-zero exit before any network activity.
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(&cli).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let client = SynapseAdminClient::new(&cli.homeserver, &cli.secret, cli.timeout())
        .context("Failed to create HTTP client")?;

    let user = NewUser {
        username: cli.username.clone(),
        password: cli.password.clone(),
        displayname: cli.display_name.clone(),
        admin: cli.admin,
    };

    info!(
        homeserver = %cli.homeserver,
        username = %user.username,
        admin = user.admin,
        "Registering user"
    );

    let response = client.register(&user).await?;

    info!(
        user_id = %response.user_id,
        home_server = %response.home_server,
        device_id = %response.device_id,
        "Registration succeeded"
    );

    // The credentials are the tool's output; print them for capture.
    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("Failed to render credentials")?
    );

    Ok(())
}
