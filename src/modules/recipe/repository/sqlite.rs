//! SQLite rendition of the recipe store, used by the test suite to run the
//! same statements against a real engine without a PostgreSQL server.

use super::{CreateRecipePayload, Error, Recipe, RecipeStore, UpdateRecipePayload};
use async_trait::async_trait;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub struct SqliteRecipeStore {
    pub pool: SqlitePool,
}

impl SqliteRecipeStore {
    /// Single-connection in-memory database with the table already created.
    /// One connection keeps every statement on the same in-memory database.
    pub async fn in_memory() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory sqlite database");

        let store = Self { pool };
        store
            .ensure_schema()
            .await
            .expect("Failed to create recipe table");
        store
    }
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn ensure_schema(&self) -> Result<(), Error> {
        sqlx::query(
            "
            CREATE TABLE IF NOT EXISTS recipelist (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                recipe_title VARCHAR(255) NOT NULL,
                ingredient TEXT,
                instructions TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error creating table: {}", err);
            Error::UnexpectedError
        })
    }

    async fn create(&self, payload: CreateRecipePayload) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO recipelist (recipe_title, ingredient, instructions) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(payload.title)
        .bind(payload.ingredients)
        .bind(payload.instructions)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error adding new recipe: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_many(&self) -> Result<Vec<Recipe>, Error> {
        sqlx::query_as::<_, Recipe>("SELECT * FROM recipelist")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error retrieving recipes: {}", err);
                Error::UnexpectedError
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, Error> {
        sqlx::query_as::<_, Recipe>("SELECT * FROM recipelist WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error retrieving recipe with id {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn update_by_id(&self, id: i64, payload: UpdateRecipePayload) -> Result<u64, Error> {
        sqlx::query(
            "UPDATE recipelist SET recipe_title = ?, ingredient = ?, instructions = ? WHERE id = ?",
        )
        .bind(payload.title)
        .bind(payload.ingredients)
        .bind(payload.instructions)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Error updating recipe with id {}: {}", id, err);
            Error::UnexpectedError
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, Error> {
        sqlx::query("DELETE FROM recipelist WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(|err| {
                tracing::error!("Error deleting recipe with id {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup() -> CreateRecipePayload {
        CreateRecipePayload {
            title: Some("Soup".to_string()),
            ingredients: Some("water,salt".to_string()),
            instructions: Some("boil".to_string()),
        }
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let store = SqliteRecipeStore::in_memory().await;
        let id = store.create(soup()).await.unwrap();

        store.ensure_schema().await.unwrap();

        assert!(store.find_by_id(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn created_recipe_is_found_by_returned_id() {
        let store = SqliteRecipeStore::in_memory().await;

        let id = store.create(soup()).await.unwrap();
        let recipe = store.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(
            recipe,
            Recipe {
                id,
                title: "Soup".to_string(),
                ingredients: Some("water,salt".to_string()),
                instructions: Some("boil".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn ids_increase_monotonically() {
        let store = SqliteRecipeStore::in_memory().await;

        let first = store.create(soup()).await.unwrap();
        let second = store.create(soup()).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn optional_fields_may_be_absent() {
        let store = SqliteRecipeStore::in_memory().await;

        let id = store
            .create(CreateRecipePayload {
                title: Some("Toast".to_string()),
                ingredients: None,
                instructions: None,
            })
            .await
            .unwrap();
        let recipe = store.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(recipe.ingredients, None);
        assert_eq!(recipe.instructions, None);
    }

    #[tokio::test]
    async fn missing_title_violates_not_null() {
        let store = SqliteRecipeStore::in_memory().await;

        let result = store
            .create(CreateRecipePayload {
                title: None,
                ingredients: Some("flour".to_string()),
                instructions: None,
            })
            .await;

        assert!(result.is_err());
        assert!(store.find_many().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_title_is_stored_on_create() {
        let store = SqliteRecipeStore::in_memory().await;

        let id = store
            .create(CreateRecipePayload {
                title: Some(String::new()),
                ingredients: None,
                instructions: None,
            })
            .await
            .unwrap();

        assert_eq!(store.find_by_id(id).await.unwrap().unwrap().title, "");
    }

    #[tokio::test]
    async fn find_many_returns_every_row() {
        let store = SqliteRecipeStore::in_memory().await;
        for title in ["a", "b", "c"] {
            store
                .create(CreateRecipePayload {
                    title: Some(title.to_string()),
                    ingredients: None,
                    instructions: None,
                })
                .await
                .unwrap();
        }

        let mut titles: Vec<String> = store
            .find_many()
            .await
            .unwrap()
            .into_iter()
            .map(|recipe| recipe.title)
            .collect();
        titles.sort();

        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let store = SqliteRecipeStore::in_memory().await;
        let id = store.create(soup()).await.unwrap();

        let affected = store
            .update_by_id(
                id,
                UpdateRecipePayload {
                    title: "Stew".to_string(),
                    ingredients: None,
                    instructions: Some("simmer".to_string()),
                },
            )
            .await
            .unwrap();
        let recipe = store.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(affected, 1);
        assert_eq!(recipe.id, id);
        assert_eq!(recipe.title, "Stew");
        assert_eq!(recipe.ingredients, None);
        assert_eq!(recipe.instructions, Some("simmer".to_string()));
    }

    #[tokio::test]
    async fn update_of_missing_id_affects_nothing() {
        let store = SqliteRecipeStore::in_memory().await;

        let affected = store
            .update_by_id(
                42,
                UpdateRecipePayload {
                    title: "Ghost".to_string(),
                    ingredients: None,
                    instructions: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(affected, 0);
        assert!(store.find_many().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let store = SqliteRecipeStore::in_memory().await;
        let id = store.create(soup()).await.unwrap();

        assert_eq!(store.delete_by_id(id).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(id).await.unwrap(), 0);
        assert!(store.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn adversarial_strings_are_stored_as_literals() {
        let store = SqliteRecipeStore::in_memory().await;
        let title = "x'); DROP TABLE recipelist;--";
        let ingredients = "\"; DELETE FROM recipelist WHERE 1=1; --";
        let instructions = "' OR '1'='1";

        let id = store
            .create(CreateRecipePayload {
                title: Some(title.to_string()),
                ingredients: Some(ingredients.to_string()),
                instructions: Some(instructions.to_string()),
            })
            .await
            .unwrap();
        store.create(soup()).await.unwrap();

        let recipe = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(recipe.title, title);
        assert_eq!(recipe.ingredients.as_deref(), Some(ingredients));
        assert_eq!(recipe.instructions.as_deref(), Some(instructions));
        assert_eq!(store.find_many().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn adversarial_update_leaves_other_rows_alone() {
        let store = SqliteRecipeStore::in_memory().await;
        let target = store.create(soup()).await.unwrap();
        let other = store.create(soup()).await.unwrap();

        store
            .update_by_id(
                target,
                UpdateRecipePayload {
                    title: "t', recipe_title = 'pwned".to_string(),
                    ingredients: None,
                    instructions: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(
            store.find_by_id(target).await.unwrap().unwrap().title,
            "t', recipe_title = 'pwned"
        );
        assert_eq!(store.find_by_id(other).await.unwrap().unwrap().title, "Soup");
    }

    #[tokio::test]
    async fn failed_statement_releases_its_connection() {
        let store = SqliteRecipeStore::in_memory().await;

        for _ in 0..3 {
            let failed = store
                .create(CreateRecipePayload {
                    title: None,
                    ingredients: None,
                    instructions: None,
                })
                .await;
            assert!(failed.is_err());
        }

        // Single-connection pool: this only succeeds if the failures gave it back.
        assert!(store.create(soup()).await.is_ok());
    }

    #[tokio::test]
    async fn queries_fail_after_close() {
        let store = SqliteRecipeStore::in_memory().await;

        store.close().await;

        assert!(store.find_many().await.is_err());
    }
}
