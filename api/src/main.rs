use std::io;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use sp_api::state::AppState;
use sp_api::{app, middleware};
use sp_core::services::registration::RegistrationService;
use sp_infra::email::EmailProvider;
use sp_infra::{
    create_email_service, create_pool, BcryptPasswordHasher, MySqlUserRepository, RedisClient,
};
use sp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Shoply auth service");

    let config = AppConfig::from_env();

    // Long-lived clients: connect at startup, fail fast when unreachable
    let redis = RedisClient::new(&config.cache)
        .await
        .map_err(into_io_error)?;
    let pool = create_pool(&config.database).await.map_err(into_io_error)?;
    let email = create_email_service(&config.email).map_err(into_io_error)?;

    let users = Arc::new(MySqlUserRepository::new(pool));
    let hasher = Arc::new(BcryptPasswordHasher::new(&config.hashing));

    let registration = Arc::new(RegistrationService::new(
        users,
        Arc::new(redis),
        Arc::new(email),
        hasher,
        config.otp.clone(),
    ));

    let state = web::Data::new(AppState { registration });

    let bind_address = config.server.bind_address();
    info!("Server will bind to {}", bind_address);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .wrap(middleware::create_cors())
            .configure(
                app::configure::<MySqlUserRepository, RedisClient, EmailProvider, BcryptPasswordHasher>,
            )
            .default_service(web::route().to(app::not_found))
    });

    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}

fn into_io_error(err: sp_infra::InfrastructureError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}
