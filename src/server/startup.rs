use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer for the configured origin.
///
/// Allows `GET`, `POST`, `PUT` and `DELETE` with a `Content-Type` header from
/// `CORS_ORIGIN`. Returns `None` when no origin is configured, leaving the API
/// reachable from its own origin only.
///
/// # Returns
/// - `Ok(Some(CorsLayer))` - Layer allowing the configured origin
/// - `Ok(None)` - No origin configured
/// - `Err(AppError::ConfigErr)` - The origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = config.cors_origin.as_deref() else {
        return Ok(None);
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    let layer = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Ok(Some(layer))
}
