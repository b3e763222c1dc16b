use crate::models::{ProgramType, University};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the catalog table
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Corrupt catalog row: {0}")]
    CorruptRow(String),
}

/// PostgreSQL-backed store for the university catalog.
///
/// The table holds static reference rows: it is seeded once at startup
/// and only read afterwards. Handlers never touch the store directly;
/// they work against the in-memory [`crate::core::Catalog`] built from
/// `load()`.
pub struct CatalogStore {
    pool: PgPool,
}

impl CatalogStore {
    /// Connect and run migrations.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, CatalogError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new catalog store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, CatalogError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Number of catalog rows currently stored.
    pub async fn count(&self) -> Result<i64, CatalogError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM universities")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }

    /// Seed the catalog table.
    ///
    /// With `force_reseed` the table is truncated and rewritten on every
    /// boot; otherwise existing rows are kept and seeding is a no-op.
    /// Returns the number of rows inserted.
    pub async fn seed(
        &self,
        universities: &[University],
        force_reseed: bool,
    ) -> Result<u64, CatalogError> {
        if force_reseed {
            sqlx::query("TRUNCATE universities RESTART IDENTITY")
                .execute(&self.pool)
                .await?;
        } else if self.count().await? > 0 {
            tracing::info!("Universities already seeded");
            return Ok(0);
        }

        let mut inserted = 0;
        for university in universities {
            sqlx::query(
                r#"
                INSERT INTO universities
                    (name, country, avg_gpa, avg_gmat, avg_gre,
                     min_work_exp, acceptance_rate, program_type)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(&university.name)
            .bind(&university.country)
            .bind(university.avg_gpa)
            .bind(university.avg_gmat)
            .bind(university.avg_gre)
            .bind(university.min_work_exp)
            .bind(university.acceptance_rate)
            .bind(university.program_type.as_str())
            .execute(&self.pool)
            .await?;
            inserted += 1;
        }

        tracing::info!("Seeded {} universities", inserted);

        Ok(inserted)
    }

    /// Load the full catalog, in insertion order.
    ///
    /// Insertion order is load-bearing: ranking ties resolve to the
    /// first-seeded program.
    pub async fn load(&self) -> Result<Vec<University>, CatalogError> {
        let rows = sqlx::query(
            r#"
            SELECT name, country, avg_gpa, avg_gmat, avg_gre,
                   min_work_exp, acceptance_rate, program_type
            FROM universities
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let raw_program: String = row.get("program_type");
                let program_type = ProgramType::from_str(&raw_program)
                    .map_err(|e| CatalogError::CorruptRow(e.to_string()))?;

                Ok(University {
                    name: row.get("name"),
                    country: row.get("country"),
                    avg_gpa: row.get("avg_gpa"),
                    avg_gmat: row.get("avg_gmat"),
                    avg_gre: row.get("avg_gre"),
                    min_work_exp: row.get("min_work_exp"),
                    acceptance_rate: row.get("acceptance_rate"),
                    program_type,
                })
            })
            .collect()
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, CatalogError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
