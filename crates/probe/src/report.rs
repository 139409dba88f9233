//! Human-readable status lines printed while the probe runs.
//!
//! Output goes to any [`Write`] sink so tests can capture it; the binary
//! uses stdout. Structured logs are emitted separately through `tracing`.

use std::fmt::Display;
use std::io::Write;

use bluecart_core::fixture::{truncate_chars, VERSION_PREVIEW_CHARS};
use bluecart_db::models::shipment_test::ShipmentTest;
use bluecart_db::target::ConnectionTarget;

/// Writes probe status lines to `out`.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) {
        self.line(format_args!("🔗 Testing connection to PostgreSQL..."));
    }

    pub fn target(&mut self, target: &ConnectionTarget) {
        self.line(format_args!("📍 Host: {}", target.host));
        self.line(format_args!("🗄️  Database: {}", target.database_label()));
        self.line(format_args!("👤 User: {}", target.user));
    }

    pub fn connected(&mut self) {
        self.line(format_args!("✅ Successfully connected to PostgreSQL!"));
    }

    /// Print the first characters of the `version()` banner.
    pub fn version(&mut self, version: &str) {
        let preview = truncate_chars(version, VERSION_PREVIEW_CHARS);
        self.line(format_args!("📊 PostgreSQL Version: {preview}..."));
    }

    pub fn creating_table(&mut self) {
        self.line(format_args!("🔨 Creating shipments table..."));
    }

    pub fn table_created(&mut self) {
        self.line(format_args!("✅ Table created successfully!"));
    }

    pub fn inserting(&mut self) {
        self.line(format_args!("📝 Testing data insertion..."));
    }

    pub fn inserted(&mut self) {
        self.line(format_args!("✅ Data inserted successfully!"));
    }

    pub fn retrieving(&mut self) {
        self.line(format_args!("📋 Testing data retrieval..."));
    }

    /// Print the read-back row as a JSON object.
    pub fn retrieved(&mut self, row: &ShipmentTest) {
        match serde_json::to_string(row) {
            Ok(json) => self.line(format_args!("✅ Data retrieved: {json}")),
            Err(_) => self.line(format_args!("✅ Data retrieved: {row:?}")),
        }
    }

    pub fn cleaned_up(&mut self) {
        self.line(format_args!("🧹 Test table cleaned up"));
    }

    pub fn passed(&mut self) {
        self.line(format_args!(
            "🎉 All database tests passed! Your PostgreSQL is ready!"
        ));
    }

    pub fn failed(&mut self, error: &dyn Display) {
        self.line(format_args!("❌ Database test failed: {error}"));
        self.line(format_args!("🔧 Check your connection details and try again"));
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{args}").and_then(|()| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write status line");
        }
    }
}
