use std::sync::Arc;
use triage::application_impl::*;
use triage::application_port::*;
use triage::domain_model::*;
use triage::domain_port::*;
use triage::infra_memory::*;
use triage::infra_reqwest::*;
use triage::logger::*;
use triage::settings::*;

/// Portal probe: issue one authenticated request against the configured
/// portal and print the JSON body. Credentials come from the environment
/// (`TRIAGE_ACCESS` / `TRIAGE_REFRESH`).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    let logger_config = LogConfig {
        filter: project_settings.log.filter.clone(),
    };
    logger.reload_from_config(&logger_config)?;

    let store = Arc::new(MemoryCredentialStore::new());
    if let Ok(access) = std::env::var("TRIAGE_ACCESS") {
        store.set(CredentialKey::Access, &access).await?;
    }
    if let Ok(refresh) = std::env::var("TRIAGE_REFRESH") {
        store.set(CredentialKey::Refresh, &refresh).await?;
    }

    let client = PortalClient::new(
        project_settings.portal.base_url.clone(),
        DemoPolicy::new(project_settings.portal.demo_prefix.clone()),
        Arc::new(ReqwestTransport::new(project_settings.http.timeout_secs)?),
        store,
        Arc::new(MemoryResponseCache::new(chrono::Duration::seconds(30))),
        Arc::new(LogSessionObserver::new()),
    );

    let method: Method = cli.method.parse().map_err(anyhow::Error::msg)?;
    let response = client
        .request(method, &cli.path, None, RequestOptions::default())
        .await?;

    info!(status = response.status, "portal answered");
    println!("{}", serde_json::to_string_pretty(&response.body)?);

    Ok(())
}
