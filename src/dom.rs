// DOM-backed view: fixed element ids, visibility via the page's `hidden`
// class. All the upload logic lives in the controller; this file is the
// only place that touches page elements.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlVideoElement, Window,
};

use crate::controller::UploadView;

const NOTICE_HIDE_DELAY_MS: i32 = 3000;

/// `UploadView` over the upload page's fixed element ids.
pub struct DomView {
    window: Window,
    file_label: HtmlElement,
    submit: HtmlButtonElement,
    results: HtmlElement,
    status: HtmlElement,
    loader: HtmlElement,
    video_container: HtmlElement,
    video: HtmlVideoElement,
    download: HtmlAnchorElement,
    error: HtmlElement,
}

impl DomView {
    /// Bind the view to the page. Fails if any expected element is
    /// missing or has an unexpected tag.
    pub fn bind(window: Window, document: &Document) -> Result<DomView, JsValue> {
        Ok(DomView {
            window,
            file_label: lookup(document, "file-name")?,
            submit: lookup(document, "generate-btn")?,
            results: lookup(document, "results-section")?,
            status: lookup(document, "status-message")?,
            loader: lookup(document, "loader")?,
            video_container: lookup(document, "video-container")?,
            video: lookup(document, "result-video")?,
            download: lookup(document, "download-link")?,
            error: lookup(document, "error-message")?,
        })
    }

    pub fn submit_button(&self) -> &HtmlButtonElement {
        &self.submit
    }
}

impl UploadView for DomView {
    fn set_file_label(&self, text: &str) {
        self.file_label.set_text_content(Some(text));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit.set_disabled(!enabled);
    }

    fn set_submit_label(&self, text: &str) {
        self.submit.set_text_content(Some(text));
    }

    fn set_status(&self, text: &str) {
        self.status.set_text_content(Some(text));
    }

    fn set_results_visible(&self, visible: bool) {
        set_hidden(&self.results, !visible);
    }

    fn set_loader_visible(&self, visible: bool) {
        set_hidden(&self.loader, !visible);
    }

    fn set_video_visible(&self, visible: bool) {
        set_hidden(&self.video_container, !visible);
    }

    fn set_error_visible(&self, visible: bool) {
        set_hidden(&self.error, !visible);
    }

    fn set_error_text(&self, text: &str) {
        self.error.set_text_content(Some(text));
    }

    fn present_video(&self, url: &str, download_name: &str) {
        self.video.set_src(url);
        self.download.set_href(url);
        self.download.set_download(download_name);
    }

    fn flash_notice(&self, text: &str) {
        self.set_status(text);
        set_hidden(&self.results, false);

        let results = self.results.clone();
        let hide = Closure::once_into_js(move || set_hidden(&results, true));
        let _ = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            hide.unchecked_ref::<js_sys::Function>(),
            NOTICE_HIDE_DELAY_MS,
        );
    }
}

/// Look up an element by id and cast it to its concrete type.
pub fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{id} has an unexpected type")))
}

fn set_hidden(el: &HtmlElement, hidden: bool) {
    let classes = el.class_list();
    let _ = if hidden {
        classes.add_1("hidden")
    } else {
        classes.remove_1("hidden")
    };
}
