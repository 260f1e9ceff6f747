use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gistrelay::handlers::configure_gist_routes;
use gistrelay::{AppState, Config, UpstreamClient};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "gistrelay"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gistrelay=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    info!("Starting gistrelay on {}:{}", config.host, config.port);
    info!("Proxying gists via {}", config.upstream_base_url);

    let upstream = UpstreamClient::new(&config.upstream_base_url, &config.github_token)
        .expect("Failed to build upstream client");

    let host = config.host.clone();
    let port = config.port;
    let app_state = web::Data::new(AppState { config, upstream });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            // The literal path has to be registered ahead of GET /{id}.
            .route("/health", web::get().to(health_check))
            .configure(configure_gist_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
