use crate::{
    CARRIER, Error, ParseError, ValidationError,
    aggregate::aggregate,
    extract::extract_tracking_number,
    models::{
        ExecutionLog, FetchedLabel, LabelPayload, OrderLineItem, TrackingResult,
        resolve_order_number, resolve_row_id,
    },
    naming::label_file_stem,
    navigate::find_download_url,
    ports::{CarrierApi, OrderRepository, ResultSink},
};
use std::path::Path;
use time::OffsetDateTime;
use tracing::{Instrument as _, Level, event, span};

/// One label run: which order, on whose behalf, and when it started.
#[derive(Clone, Debug, PartialEq)]
pub struct RunRequest {
    /// The order number as given by the caller, trimmed
    pub order_number: String,
    /// The user the label is created for, trimmed
    pub username: String,
    /// Used to name the stored label document
    pub started_at: OffsetDateTime,
}

impl RunRequest {
    /// Build a request, trimming the caller's input.
    pub fn new(order_number: &str, username: &str, started_at: OffsetDateTime) -> Self {
        Self {
            order_number: order_number.trim().to_owned(),
            username: username.trim().to_owned(),
            started_at,
        }
    }
}

/// The result of a run.
#[derive(Debug)]
pub struct RunReport {
    /// The tracking number (if the document allowed extracting one), or the
    /// error that ended the run
    pub outcome: Result<Option<TrackingResult>, Error>,
    /// Everything the run recorded, in order
    pub log: ExecutionLog,
    /// Whether the log made it into the order's memo
    pub memo_written: bool,
}

impl RunReport {
    /// True if the run completed without error.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// The label pipeline for a single order, wired to its collaborators.
///
/// A run reads the order rows, aggregates them, requests a label, downloads
/// and stores it, extracts the tracking number and writes it back. The first
/// failure ends the run. Whatever happened, the execution log is written to
/// the order's memo at the end, provided the order's business number was
/// resolved before the run ended.
pub struct LabelJob<'a, O, S, C> {
    /// Where the order rows come from
    pub orders: &'a O,
    /// Where results and the memo go
    pub sink: &'a S,
    /// The marketplace API
    pub carrier: &'a C,
    /// Where label documents are stored
    pub label_dir: &'a Path,
}

impl<O: OrderRepository, S: ResultSink, C: CarrierApi> LabelJob<'_, O, S, C> {
    /// Run the pipeline for one order.
    pub async fn run(&self, request: &RunRequest) -> RunReport {
        let span = span!(
            Level::INFO,
            "label_run",
            order_number = request.order_number.as_str()
        );
        self.run_and_flush(request).instrument(span).await
    }

    async fn run_and_flush(&self, request: &RunRequest) -> RunReport {
        let mut log = ExecutionLog::new();
        let mut memo_key = None;

        let outcome = self.execute(request, &mut log, &mut memo_key).await;
        if let Err(error) = &outcome {
            log.error(error.to_string());
            for line in error.diagnostics() {
                log.error(line);
            }
        }

        // The memo is written exactly once, whatever the outcome. Its own
        // failure does not change the outcome.
        let memo_written = match memo_key {
            Some(order_number) => match self.sink.store_memo(&order_number, &log.memo()).await {
                Ok(()) => true,
                Err(err) => {
                    event!(
                        Level::ERROR,
                        order_number = order_number.as_str(),
                        err = err.to_string(),
                        "failed to update the order memo"
                    );
                    false
                }
            },
            None => false,
        };

        RunReport {
            outcome,
            log,
            memo_written,
        }
    }

    async fn execute(
        &self,
        request: &RunRequest,
        log: &mut ExecutionLog,
        memo_key: &mut Option<String>,
    ) -> Result<Option<TrackingResult>, Error> {
        let rows = self
            .orders
            .fetch_order_rows(&request.order_number)
            .await
            .map_err(|err| Error::OrderLookup(err.to_string()))?;
        if rows.is_empty() {
            return Err(ValidationError::NoOrderRows {
                order_number: request.order_number.clone(),
            }
            .into());
        }

        let items = rows
            .iter()
            .map(OrderLineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let shipment = aggregate(&items)?;

        *memo_key = Some(resolve_order_number(&items, &request.order_number));
        let row_id = resolve_row_id(&items);
        if row_id.is_none() {
            log.warn("Warning: no row identifier (FSROWID) found in the order data.");
        }

        let payload = LabelPayload::from(&shipment);
        let response = self.carrier.create_label(&payload).await?;

        let download_url = find_download_url(&response.json)
            .ok_or_else(|| Error::Navigation {
                response: response.body.clone(),
            })?
            .to_owned();
        log.info(format!("Download URL: {download_url}"));

        let document = self
            .carrier
            .download(&download_url)
            .await
            .map_err(|source| Error::Download {
                source,
                payload: payload.to_pretty(),
            })?;

        let stem = label_file_stem(
            request.started_at,
            &request.username,
            shipment.primary_unit_id(),
        );
        let label = FetchedLabel::store(download_url, document, self.label_dir, &stem)?;
        log.info(format!("Document stored as {}", label.path.display()));

        if !label.is_pdf() {
            log.info("Document is not a PDF, tracking number extraction skipped.");
            return Ok(None);
        }

        let tracking = extract_tracking_number(&label.bytes, true)?
            .map(TrackingResult::new)
            .ok_or(ParseError::NoTrackingNumber)?;
        log.info(format!(
            "Found 12-digit number: {}",
            tracking.tracking_number
        ));

        let Some(row_id) = row_id else {
            return Err(Error::Persistence(
                "no row identifier available, database writes skipped".to_owned(),
            ));
        };

        self.sink
            .store_tracking_number(&row_id, &tracking.tracking_number)
            .await
            .map_err(persistence)?;
        log.info(format!(
            "Tracking number {} written to the database.",
            tracking.tracking_number
        ));

        self.sink
            .store_carrier_marker(&row_id)
            .await
            .map_err(persistence)?;
        log.info(format!("Carrier value ({CARRIER}) written to the database."));

        Ok(Some(tracking))
    }
}

fn persistence<E: std::error::Error>(err: E) -> Error {
    Error::Persistence(err.to_string())
}
