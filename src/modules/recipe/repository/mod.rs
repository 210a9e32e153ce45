pub mod postgres;
#[cfg(test)]
pub mod sqlite;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Recipe {
    pub id: i64,
    #[serde(rename = "recipe_title")]
    #[sqlx(rename = "recipe_title")]
    pub title: String,
    #[serde(rename = "ingredient")]
    #[sqlx(rename = "ingredient")]
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
}

/// `title` stays optional here: a missing title is left to the NOT NULL
/// constraint of the table.
pub struct CreateRecipePayload {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
}

pub struct UpdateRecipePayload {
    pub title: String,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// Every method runs exactly one statement on a pooled connection, which goes
/// back to the pool whether the statement succeeds or not.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn ensure_schema(&self) -> Result<(), Error>;

    async fn create(&self, payload: CreateRecipePayload) -> Result<i64, Error>;

    /// No ORDER BY; callers must not rely on the order.
    async fn find_many(&self) -> Result<Vec<Recipe>, Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, Error>;

    /// Returns the number of affected rows.
    async fn update_by_id(&self, id: i64, payload: UpdateRecipePayload) -> Result<u64, Error>;

    /// Returns the number of affected rows.
    async fn delete_by_id(&self, id: i64) -> Result<u64, Error>;

    async fn close(&self);
}
