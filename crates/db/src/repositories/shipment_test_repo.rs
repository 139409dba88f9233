//! Repository for the transient `shipments_test` table.
//!
//! Every statement is idempotent: the table is created with `IF NOT EXISTS`,
//! rows are upserted, and the drop uses `IF EXISTS`.

use sqlx::PgPool;

use crate::models::shipment_test::{CreateShipmentTest, ShipmentTest};

/// Name of the scratch table.
pub const TABLE_NAME: &str = "shipments_test";

/// Column list for `shipments_test` queries.
const COLUMNS: &str = "id, tracking_number, sender_name, created_at";

/// Provides the probe's DDL and row operations on `shipments_test`.
pub struct ShipmentTestRepo;

impl ShipmentTestRepo {
    /// Create the scratch table if it does not exist yet.
    pub async fn create_table(pool: &PgPool) -> Result<(), sqlx::Error> {
        let query = format!(
            "CREATE TABLE IF NOT EXISTS {TABLE_NAME} ( \
                 id VARCHAR(50) PRIMARY KEY, \
                 tracking_number VARCHAR(50) UNIQUE NOT NULL, \
                 sender_name VARCHAR(255) NOT NULL, \
                 created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP \
             )"
        );
        sqlx::query(&query).execute(pool).await?;
        Ok(())
    }

    /// Insert a row, or overwrite `sender_name` when the id already exists.
    pub async fn upsert(
        pool: &PgPool,
        input: &CreateShipmentTest,
    ) -> Result<ShipmentTest, sqlx::Error> {
        let query = format!(
            "INSERT INTO {TABLE_NAME} (id, tracking_number, sender_name) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET sender_name = EXCLUDED.sender_name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShipmentTest>(&query)
            .bind(&input.id)
            .bind(&input.tracking_number)
            .bind(&input.sender_name)
            .fetch_one(pool)
            .await
    }

    /// Find a row by its id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<ShipmentTest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {TABLE_NAME} WHERE id = $1");
        sqlx::query_as::<_, ShipmentTest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Drop the scratch table if it exists.
    pub async fn drop_table(pool: &PgPool) -> Result<(), sqlx::Error> {
        let query = format!("DROP TABLE IF EXISTS {TABLE_NAME}");
        sqlx::query(&query).execute(pool).await?;
        Ok(())
    }

    /// Whether the scratch table currently exists in the search path.
    pub async fn table_exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT to_regclass($1::text) IS NOT NULL")
            .bind(TABLE_NAME)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }
}
