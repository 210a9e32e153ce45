use crate::types::DatabaseConfig;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
}

/// Builds the pool without touching the network. Connections are opened on
/// first use, so an unreachable backend surfaces as a query error instead of
/// a boot failure.
pub fn connect(config: &DatabaseConfig) -> DatabaseConnection {
    tracing::debug!(
        "Connecting to {}:{}/{} with a pool of {}",
        config.host,
        config.port,
        config.database,
        config.pool_size
    );

    DatabaseConnection {
        pool: PgPoolOptions::new()
            .max_connections(config.pool_size.get())
            .connect_lazy_with(connect_options(config)),
    }
}

pub async fn close(db_conn: &DatabaseConnection) {
    db_conn.pool.close().await;
    tracing::info!("Database pool closed");
}
