//! `bluecart-probe` -- one-shot PostgreSQL connectivity check.
//!
//! Connects to the configured database, prints its version, then creates,
//! writes, reads and drops a scratch `shipments_test` table. Any failure is
//! printed and the process still exits with status 0.
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default | Description                         |
//! |---------------------------|----------|---------|-------------------------------------|
//! | `DATABASE_URL`            | yes      | --      | e.g. `postgresql://user:pw@host/db` |
//! | `DB_CONNECT_TIMEOUT_SECS` | no       | `30`    | Bound on establishing the connection |
//! | `RUST_LOG`                | no       | `bluecart_probe=info` | Log filter            |

use bluecart_probe::report::Reporter;
use bluecart_probe::runner;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bluecart_probe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut reporter = Reporter::stdout();
    runner::run_and_report(|key| std::env::var(key).ok(), &mut reporter).await;
}
