use super::{CreateRecipePayload, Error, Recipe, RecipeStore, UpdateRecipePayload};
use crate::utils::database::{self, DatabaseConnection};
use async_trait::async_trait;

pub struct PgRecipeStore {
    db_conn: DatabaseConnection,
}

impl PgRecipeStore {
    pub fn new(db_conn: DatabaseConnection) -> Self {
        Self { db_conn }
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn ensure_schema(&self) -> Result<(), Error> {
        match sqlx::query(
            "
            CREATE TABLE IF NOT EXISTS recipelist (
                id BIGSERIAL PRIMARY KEY,
                recipe_title VARCHAR(255) NOT NULL,
                ingredient TEXT,
                instructions TEXT
            )
            ",
        )
        .execute(&self.db_conn.pool)
        .await
        {
            Ok(_) => {
                tracing::info!("Table 'recipelist' is ready");
                Ok(())
            }
            Err(err) => {
                tracing::error!("Error creating table: {}", err);
                Err(Error::UnexpectedError)
            }
        }
    }

    async fn create(&self, payload: CreateRecipePayload) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>(
            "
            INSERT INTO recipelist (recipe_title, ingredient, instructions)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(payload.title)
        .bind(payload.ingredients)
        .bind(payload.instructions)
        .fetch_one(&self.db_conn.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error adding new recipe: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_many(&self) -> Result<Vec<Recipe>, Error> {
        sqlx::query_as::<_, Recipe>("SELECT * FROM recipelist")
            .fetch_all(&self.db_conn.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error retrieving recipes: {}", err);
                Error::UnexpectedError
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, Error> {
        match sqlx::query_as::<_, Recipe>("SELECT * FROM recipelist WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_conn.pool)
            .await
        {
            Ok(recipe) => Ok(recipe),
            Err(err) => {
                tracing::error!("Error retrieving recipe with id {}: {}", id, err);
                Err(Error::UnexpectedError)
            }
        }
    }

    async fn update_by_id(&self, id: i64, payload: UpdateRecipePayload) -> Result<u64, Error> {
        sqlx::query(
            "
            UPDATE recipelist SET
                recipe_title = $1,
                ingredient = $2,
                instructions = $3
            WHERE
                id = $4
            ",
        )
        .bind(payload.title)
        .bind(payload.ingredients)
        .bind(payload.instructions)
        .bind(id)
        .execute(&self.db_conn.pool)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Error updating recipe with id {}: {}", id, err);
            Error::UnexpectedError
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, Error> {
        sqlx::query("DELETE FROM recipelist WHERE id = $1")
            .bind(id)
            .execute(&self.db_conn.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(|err| {
                tracing::error!("Error deleting recipe with id {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn close(&self) {
        database::close(&self.db_conn).await;
    }
}
