#[cfg(all(feature = "csr", not(feature = "serve")))]
fn main() {
    portfolio_site::mount();
}

/// Serves the bundle Trunk wrote to `site-root`. Unknown paths fall back to
/// `index.html` so in-page anchors survive a reload.
#[cfg(feature = "serve")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::config::get_configuration;
    use tower_http::services::{ServeDir, ServeFile};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(Some("Cargo.toml"))?;
    let addr = conf.leptos_options.site_addr;
    let site_root = conf.leptos_options.site_root.to_string();

    let index = ServeFile::new(format!("{site_root}/index.html"));
    let app = Router::new().fallback_service(ServeDir::new(&site_root).not_found_service(index));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %site_root, "serving portfolio");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(any(feature = "csr", feature = "serve")))]
pub fn main() {
    // nothing to run without a target feature
    // see lib.rs for the browser entry point
}
