use super::{AggregatedShipment, PackageMeasurements};
use crate::{CARRIER, sign::sign};
use hmac::digest::InvalidLength;
use serde::{Deserialize, Serialize};

/// The JSON body of a label-creation request.
///
/// Field order is part of the wire format: the serialized body is signed,
/// so it has to be produced exactly once and sent verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelPayload {
    /// The order units to put into one parcel
    pub ids_order_units: Vec<String>,
    /// The carriers to request a label from
    pub carriers: Vec<String>,
    /// The parcel's measurements
    pub package_measurements: PackageMeasurements,
}

impl From<&AggregatedShipment> for LabelPayload {
    fn from(shipment: &AggregatedShipment) -> Self {
        Self {
            ids_order_units: shipment.unit_ids().to_vec(),
            carriers: vec![CARRIER.to_owned()],
            package_measurements: *shipment.measurements(),
        }
    }
}

impl LabelPayload {
    /// The compact JSON text to sign and send.
    pub fn to_body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// An indented rendition for the execution log.
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|err| err.to_string())
    }
}

/// A successful label-creation response: the raw text and its parsed form.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    /// The response body as received
    pub body: String,
    /// The response body parsed as JSON
    pub json: serde_json::Value,
}

/// An outbound request together with its marketplace signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
    /// HTTP method, e.g. `POST`
    pub method: String,
    /// The full target URI
    pub uri: String,
    /// The exact body that is transmitted
    pub body: String,
    /// Unix time in seconds, as decimal text
    pub timestamp: String,
    /// Lower-case hex HMAC-SHA256 over the four fields above
    pub signature: String,
}

impl SignedRequest {
    /// Sign a request for the given timestamp.
    pub fn new(
        method: impl Into<String>,
        uri: impl Into<String>,
        body: impl Into<String>,
        timestamp: impl Into<String>,
        secret_key: &str,
    ) -> Result<Self, InvalidLength> {
        let method = method.into();
        let uri = uri.into();
        let body = body.into();
        let timestamp = timestamp.into();
        let signature = sign(&method, &uri, &body, &timestamp, secret_key)?;
        Ok(Self {
            method,
            uri,
            body,
            timestamp,
            signature,
        })
    }

    /// Sign a request stamped with the current time.
    pub fn now(
        method: impl Into<String>,
        uri: impl Into<String>,
        body: impl Into<String>,
        secret_key: &str,
    ) -> Result<Self, InvalidLength> {
        let timestamp = time::OffsetDateTime::now_utc().unix_timestamp().to_string();
        Self::new(method, uri, body, timestamp, secret_key)
    }
}
