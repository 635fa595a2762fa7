#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), portfolio_site::server::ServerError> {
    use portfolio_site::{
        content::{build_time, portfolio},
        server,
    };
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();

    // surface broken content at start-up rather than on the first request
    match portfolio() {
        Ok(p) => tracing::info!(
            name = %p.profile.name,
            projects = p.projects.len(),
            built = ?build_time(),
            "loaded portfolio content"
        ),
        Err(err) => tracing::error!(%err, "portfolio content is unusable"),
    }

    // a non-zero exit tells the supervisor start-up failed
    server::run().await.inspect_err(|err| {
        tracing::error!(%err, "server exited");
    })
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
