//! The probe's step sequence.
//!
//! Connects, reads the server version, then creates, fills, reads and drops
//! the scratch table. Steps run in order and the first failure aborts the
//! run; the caller decides how to report it.

use std::io::Write;

use bluecart_core::fixture::PROBE_ROW_ID;
use bluecart_core::types::Timestamp;
use bluecart_db::models::shipment_test::{CreateShipmentTest, ShipmentTest};
use bluecart_db::repositories::ShipmentTestRepo;
use bluecart_db::target::ConnectionTarget;
use bluecart_db::DbPool;
use chrono::Utc;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::report::Reporter;

/// Outcome of a successful probe run.
#[derive(Debug, Clone)]
pub struct ProbeSummary {
    /// Full `version()` banner of the server.
    pub server_version: String,
    /// The probe row as read back, if the read found it.
    pub retrieved: Option<ShipmentTest>,
    pub finished_at: Timestamp,
}

/// Load configuration through `lookup`, run the probe, and report the
/// outcome.
///
/// Every failure, configuration included, is printed through `reporter`
/// and logged; nothing is propagated. Returns the summary on success.
pub async fn run_and_report<F, W>(lookup: F, reporter: &mut Reporter<W>) -> Option<ProbeSummary>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let result = match ProbeConfig::from_lookup(lookup) {
        Ok(config) => run(&config, reporter).await,
        Err(e) => Err(ProbeError::from(e)),
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                finished_at = %summary.finished_at,
                row_retrieved = summary.retrieved.is_some(),
                "Probe completed",
            );
            Some(summary)
        }
        Err(e) => {
            tracing::error!(error = %e, "Probe failed");
            reporter.failed(&e);
            None
        }
    }
}

/// Run the whole probe against `config.database_url`.
///
/// The connection is closed before returning, whether the steps succeeded
/// or not.
pub async fn run<W: Write>(
    config: &ProbeConfig,
    reporter: &mut Reporter<W>,
) -> ProbeResult<ProbeSummary> {
    reporter.banner();

    let target = ConnectionTarget::parse(&config.database_url)?;
    reporter.target(&target);

    tracing::info!(
        db_target = %target,
        timeout_secs = config.connect_timeout.as_secs(),
        "Connecting to database",
    );
    let pool = bluecart_db::connect(&config.database_url, config.connect_timeout).await?;
    reporter.connected();
    tracing::info!("Database connection established");

    let result = run_steps(&pool, reporter).await;

    pool.close().await;
    tracing::debug!("Database connection closed");

    let summary = result?;
    reporter.passed();
    Ok(summary)
}

/// Run the query steps on an already open pool.
pub async fn run_steps<W: Write>(
    pool: &DbPool,
    reporter: &mut Reporter<W>,
) -> ProbeResult<ProbeSummary> {
    bluecart_db::health_check(pool).await?;
    let server_version = bluecart_db::server_version(pool).await?;
    reporter.version(&server_version);

    reporter.creating_table();
    ShipmentTestRepo::create_table(pool).await?;
    reporter.table_created();
    tracing::debug!("Scratch table created");

    reporter.inserting();
    let inserted = ShipmentTestRepo::upsert(pool, &CreateShipmentTest::probe_row()).await?;
    reporter.inserted();
    tracing::debug!(id = %inserted.id, "Probe row upserted");

    reporter.retrieving();
    let retrieved = ShipmentTestRepo::find_by_id(pool, PROBE_ROW_ID).await?;
    match &retrieved {
        Some(row) => reporter.retrieved(row),
        None => tracing::warn!(id = PROBE_ROW_ID, "Probe row not found after upsert"),
    }

    ShipmentTestRepo::drop_table(pool).await?;
    reporter.cleaned_up();
    tracing::debug!("Scratch table dropped");

    Ok(ProbeSummary {
        server_version,
        retrieved,
        finished_at: Utc::now(),
    })
}
