use thiserror::Error;

/// Everything that can abort a label run.
///
/// The pipeline is fail-fast: the first error ends the run, is written to the
/// execution log and is reported in the [`RunReport`](crate::RunReport).
#[derive(Debug, Error)]
pub enum Error {
    /// The order data cannot be turned into a shipment
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading the order rows from the database failed
    #[error("failed to read the order data: {0}")]
    OrderLookup(String),

    /// The label-creation call failed or answered with something unusable
    #[error("label request failed: {0}")]
    Api(#[from] ApiError),

    /// The label-creation response carries no download URL
    #[error("no download URL found in the response")]
    Navigation {
        /// The raw response text, kept for diagnostics
        response: String,
    },

    /// The label document could not be fetched
    #[error("download failed: {source}")]
    Download {
        /// What went wrong on the wire
        source: DownloadError,
        /// The pretty-printed request payload, kept for diagnostics
        payload: String,
    },

    /// The label document could not be written to the label directory
    #[error("failed to store the label document: {0}")]
    Storage(#[from] std::io::Error),

    /// The label document yielded no tracking number
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Writing the tracking number or the carrier marker back failed
    #[error("failed to write to the database: {0}")]
    Persistence(String),
}

impl Error {
    /// Additional lines worth recording next to the error message itself.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            Self::Api(ApiError { body, .. }) if !body.is_empty() => vec![body.clone()],
            Self::Navigation { response } => vec![response.clone()],
            Self::Download { payload, .. } => {
                vec!["Request payload used:".to_owned(), payload.clone()]
            }
            _ => Vec::new(),
        }
    }
}

/// The order data is not fit for a label request.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The order source returned nothing for the requested order
    #[error("no data found for order number {order_number}")]
    NoOrderRows {
        /// The order number as it was requested
        order_number: String,
    },

    /// Aggregation was asked to work on an empty set of line items
    #[error("no line items to aggregate")]
    NoLineItems,

    /// None of the line items carries a unit identifier
    #[error("no unit identifiers (CODE1) found in the order data")]
    NoUnitIds,

    /// A measurement column holds something that is not a decimal number
    #[error("invalid decimal value for {field}: {value}")]
    InvalidDecimal {
        /// The logical field being read
        field: &'static str,
        /// The offending value as text
        value: String,
    },

    /// An aggregated measurement does not fit the request's integer range
    #[error("{field} is out of range")]
    OutOfRange {
        /// The logical field being computed
        field: &'static str,
    },
}

/// The label-creation call did not produce a usable JSON answer.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status, if a response was received at all
    pub status: Option<u16>,
    /// A short description of the failure
    pub message: String,
    /// The raw response text (empty if nothing was received)
    pub body: String,
}

/// Fetching the label document failed.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DownloadError {
    /// HTTP status, if a response was received at all
    pub status: Option<u16>,
    /// A short description of the failure
    pub message: String,
}

/// The label document could not be read or holds no tracking number.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The bytes are not a readable PDF document
    #[error("failed to read the PDF: {0}")]
    Document(#[from] lopdf::Error),

    /// The text of the document contains no 12-digit number
    #[error("no 12-digit number found in the PDF")]
    NoTrackingNumber,
}
