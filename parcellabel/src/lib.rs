#![warn(missing_docs)]
//! Requests a carrier shipping label for one sales order.
//!
//! The order is read from the ERP database, the label is requested from the
//! marketplace API and stored locally, and the tracking number printed on it
//! is written back to the order. The whole trail ends up in the order's memo.

mod cli;
pub use cli::Cli;

mod config;
pub use config::{AppConfig, LabelConfig};

pub mod telemetry;

use parcel_core::{LabelJob, RunReport, RunRequest};
use parcel_reqwest::ReqwestCarrier;
use parcel_sqlx::SqlStore;
use time::OffsetDateTime;
use tracing::{Level, event};

/// Wire up the adapters and run the label pipeline once.
///
/// Errors are setup failures (incomplete configuration). Failures of the run
/// itself are part of the returned report.
pub async fn run(
    order_number: &str,
    username: &str,
    config: AppConfig,
) -> anyhow::Result<RunReport> {
    let AppConfig {
        api,
        labels,
        database,
        ..
    } = config;

    let store = SqlStore::new(database)?;
    let carrier = ReqwestCarrier::new(api)?;
    let job = LabelJob {
        orders: &store,
        sink: &store,
        carrier: &carrier,
        label_dir: &labels.path,
    };

    // Local time is only available while the process is single-threaded.
    let started_at = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let request = RunRequest::new(order_number, username, started_at);
    event!(
        Level::DEBUG,
        order_number = request.order_number.as_str(),
        username = request.username.as_str(),
        "starting label run"
    );

    let report = job.run(&request).await;
    match &report.outcome {
        Ok(Some(tracking)) => event!(
            Level::INFO,
            tracking_number = tracking.tracking_number.as_str(),
            memo_written = report.memo_written,
            "label run finished"
        ),
        Ok(None) => event!(
            Level::INFO,
            memo_written = report.memo_written,
            "label run finished without tracking number"
        ),
        Err(_) => event!(
            Level::ERROR,
            memo_written = report.memo_written,
            "label run failed"
        ),
    }

    Ok(report)
}
