use crate::{
    ApiError, DownloadError,
    models::{ApiResponse, LabelPayload},
};
use std::future::Future;

/// The carrier marketplace API.
pub trait CarrierApi {
    /// Request a shipping label for the given payload.
    ///
    /// Implementations serialize the payload once, sign exactly that text and
    /// send it. A non-success status or a body that is not JSON is an
    /// [`ApiError`] carrying the raw response text.
    fn create_label(
        &self,
        payload: &LabelPayload,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>> + Send;

    /// Fetch a label document. This call is unauthenticated.
    fn download(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, DownloadError>> + Send;
}
