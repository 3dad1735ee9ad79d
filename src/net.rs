// The single network operation: one multipart POST via `fetch`, awaited
// to completion. No timeout, no retry, no abort.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, RequestInit, Response};

use crate::controller::Submission;
use crate::error::UploadError;
use crate::protocol::{parse_process_response, ProcessResponse};

/// POST the file and language fields to the processing endpoint and
/// interpret the JSON response. The await on `fetch` is the only
/// suspension point in the crate.
pub async fn submit(
    endpoint: &str,
    submission: Submission<File>,
) -> Result<ProcessResponse, UploadError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("video", &submission.file.handle, &submission.file.name)
        .map_err(js_error)?;
    for (name, value) in &submission.fields {
        form.append_with_str(name, value).map_err(js_error)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);

    let window =
        web_sys::window().ok_or_else(|| UploadError::Network("No window object".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_str_and_init(endpoint, &init))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| UploadError::Network("Unexpected fetch result".to_string()))?;

    let ok = response.ok();
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    parse_process_response(ok, &body)
}

/// Message of a thrown JS value, the way the page would have seen it.
fn js_error(value: JsValue) -> UploadError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Request failed".to_string());
    UploadError::Network(message)
}
