#![allow(dead_code)]

use lopdf::{
    Document, Object, Stream,
    content::{Content, Operation},
    dictionary,
};
use parcel_core::{
    ApiError, DownloadError,
    models::{ApiResponse, FieldValue, LabelPayload, OrderRow},
    ports::{CarrierApi, OrderRepository, ResultSink},
};
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FakeError(pub String);

/// A write the pipeline made, in the order it made it.
#[derive(Clone, Debug, PartialEq)]
pub enum Write {
    Tracking { row_id: String, tracking_number: String },
    Carrier { row_id: String },
    Memo { order_number: String, memo: String },
}

/// An in-memory order database that records every successful write.
#[derive(Default)]
pub struct FakeStore {
    pub rows: Vec<OrderRow>,
    pub fail_lookup: bool,
    pub fail_tracking: bool,
    pub fail_memo: bool,
    pub writes: Mutex<Vec<Write>>,
}

impl FakeStore {
    pub fn with_rows(rows: Vec<OrderRow>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.lock().unwrap().clone()
    }

    fn record(&self, write: Write) {
        self.writes.lock().unwrap().push(write);
    }
}

impl OrderRepository for FakeStore {
    type Error = FakeError;

    async fn fetch_order_rows(&self, _order_number: &str) -> Result<Vec<OrderRow>, Self::Error> {
        if self.fail_lookup {
            return Err(FakeError("connection refused".to_owned()));
        }
        Ok(self.rows.clone())
    }
}

impl ResultSink for FakeStore {
    type Error = FakeError;

    async fn store_tracking_number(
        &self,
        row_id: &str,
        tracking_number: &str,
    ) -> Result<(), Self::Error> {
        if self.fail_tracking {
            return Err(FakeError("deadlock victim".to_owned()));
        }
        self.record(Write::Tracking {
            row_id: row_id.to_owned(),
            tracking_number: tracking_number.to_owned(),
        });
        Ok(())
    }

    async fn store_carrier_marker(&self, row_id: &str) -> Result<(), Self::Error> {
        self.record(Write::Carrier {
            row_id: row_id.to_owned(),
        });
        Ok(())
    }

    async fn store_memo(&self, order_number: &str, memo: &str) -> Result<(), Self::Error> {
        if self.fail_memo {
            return Err(FakeError("memo column is read-only".to_owned()));
        }
        self.record(Write::Memo {
            order_number: order_number.to_owned(),
            memo: memo.to_owned(),
        });
        Ok(())
    }
}

/// A carrier API answering from canned responses.
pub struct FakeCarrier {
    /// The label-creation answer: a JSON text, or an HTTP status with a body
    pub response: Result<String, (u16, String)>,
    /// The download answer: the document, or an HTTP status
    pub document: Result<Vec<u8>, u16>,
    pub payloads: Mutex<Vec<LabelPayload>>,
    pub downloads: Mutex<Vec<String>>,
}

impl FakeCarrier {
    pub fn new(response: serde_json::Value, document: Vec<u8>) -> Self {
        Self {
            response: Ok(response.to_string()),
            document: Ok(document),
            payloads: Mutex::default(),
            downloads: Mutex::default(),
        }
    }

    pub fn payloads(&self) -> Vec<LabelPayload> {
        self.payloads.lock().unwrap().clone()
    }

    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }
}

impl CarrierApi for FakeCarrier {
    async fn create_label(&self, payload: &LabelPayload) -> Result<ApiResponse, ApiError> {
        self.payloads.lock().unwrap().push(payload.clone());
        match &self.response {
            Ok(body) => Ok(ApiResponse {
                body: body.clone(),
                json: serde_json::from_str(body).unwrap(),
            }),
            Err((status, body)) => Err(ApiError {
                status: Some(*status),
                message: format!("HTTP status {status}"),
                body: body.clone(),
            }),
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        self.downloads.lock().unwrap().push(url.to_owned());
        match &self.document {
            Ok(bytes) => Ok(bytes.clone()),
            Err(status) => Err(DownloadError {
                status: Some(*status),
                message: format!("HTTP status {status}"),
            }),
        }
    }
}

/// A one-page PDF showing a single line of text.
pub fn pdf_with_text(line: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(line)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// The two-row order used throughout: 2.5 kg plus an unweighed item.
pub fn two_row_order() -> Vec<OrderRow> {
    vec![
        OrderRow::from_iter([
            ("CODE1", FieldValue::from("A1")),
            ("WEIGHT_GRAM", FieldValue::Float(2.5)),
            ("BELEGNR", FieldValue::from("AU-1001")),
            ("FSROWID", FieldValue::from(" 42 ")),
        ]),
        OrderRow::from_iter([
            ("CODE1", FieldValue::from("A2")),
            ("WEIGHT_GRAM", FieldValue::Null),
            ("BELEGNR", FieldValue::from("AU-1001")),
            ("FSROWID", FieldValue::from("43")),
        ]),
    ]
}

/// A label-creation answer nesting the download URL a few levels down.
pub fn label_response(download_url: &str) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "id_shipment": 555,
            "labels": [
                { "format": "A6", "file": { "download_url": download_url } }
            ]
        }
    })
}
