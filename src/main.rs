use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use survey::cli::Cli;
use survey::config::{watcher::ConfigWatcher, Settings};
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let settings = Settings::new_with_cli(&cli)?;
    let definition = settings.load_definition()?;

    if cli.check {
        info!(
            "Configuration OK: form '{}' with {} fields",
            definition.schema.form_title,
            definition.schema.fields.len()
        );
        return Ok(());
    }

    let host = settings.server.host.clone();
    let port = settings.server.port;
    info!("Starting survey server on {}:{}", host, port);

    let definition = Arc::new(RwLock::new(definition));

    // Reload schema and presentation settings on change; the address stays fixed
    let definition_for_watcher = definition.clone();
    let cli_for_watcher = cli.clone();
    let _watcher = ConfigWatcher::new(settings.watch_paths(&cli.config), move || {
        let reloaded = Settings::new_with_cli(&cli_for_watcher)
            .and_then(|s| Ok((s.load_definition()?, s.watch_paths(&cli_for_watcher.config))));
        match reloaded {
            Ok((new_definition, paths)) => {
                let mut w = definition_for_watcher.blocking_write();
                *w = new_definition;
                info!("Form definition reloaded successfully");
                Some(paths)
            }
            Err(e) => {
                error!("Failed to reload form definition, keeping the current one: {}", e);
                None
            }
        }
    })?;

    let app = survey::create_app(definition);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
