// upload_core: Rust/WASM upload controller for the subtitle-burning web app.
// All submission logic lives here; the page supplies elements and a config.

#[cfg(target_arch = "wasm32")]
mod app;
mod controller;
#[cfg(target_arch = "wasm32")]
mod dom;
mod error;
#[cfg(target_arch = "wasm32")]
mod net;
mod protocol;
mod types;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use app::App;
pub use controller::{Phase, Submission, UploadController, UploadView};
#[cfg(target_arch = "wasm32")]
pub use dom::DomView;
pub use error::UploadError;
pub use protocol::{download_name, parse_process_response, ProcessResponse};
pub use types::*;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
