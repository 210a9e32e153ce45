use crate::modules::recipe::repository::{postgres::PgRecipeStore, RecipeStore};
pub use crate::utils::database;
use async_trait::async_trait;
use std::env;
use std::num::NonZeroU32;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub store: Arc<dyn RecipeStore>,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub pool_size: NonZeroU32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be at least 1")]
    Zero { name: &'static str },
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        Err(_) => Ok(default),
    }
}

fn parse_non_zero(name: &'static str, default: u32) -> Result<NonZeroU32, ConfigError> {
    NonZeroU32::new(parse_var::<u32>(name, default)?).ok_or(ConfigError::Zero { name })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_host = var_or("DB_HOST", "localhost");
        let db_port = parse_var::<u16>("DB_PORT", 5432)?;
        let db_user = var_or("DB_USER", "postgres");
        let db_password = var_or("DB_PASSWORD", "");
        let db_database = var_or("DB_DATABASE", "recipes");
        let pool_size = parse_non_zero("DB_CONNECTION_LIMIT", 10)?;
        let host = var_or("HOST", "0.0.0.0");
        let port = parse_var::<u16>("PORT", 3000)?;

        Ok(Config {
            database: DatabaseConfig {
                host: db_host,
                port: db_port,
                user: db_user,
                password: db_password,
                database: db_database,
                pool_size,
            },
            app: AppConfig { host, port },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(&self.database);
        let store = PgRecipeStore::new(db_conn);

        // Best effort: the server still comes up when the backend is down.
        if store.ensure_schema().await.is_err() {
            tracing::warn!("Continuing without a verified recipe table");
        }

        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            store: Arc::new(store),
        }
    }
}
