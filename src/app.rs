// Page wiring: bind the upload page's controls, attach listeners, and
// drive one submission per click through the controller and `net`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, File, HtmlInputElement, HtmlSelectElement};

use crate::controller::{Phase, UploadController};
use crate::dom::{lookup, DomView};
use crate::net;
use crate::types::{LanguageCode, LanguageMode, SelectedFile, SubmissionOptions, UploadConfig};

type Controller = UploadController<DomView, File>;

/// The language selector(s) present on this variant of the page.
#[derive(Clone)]
enum LanguageSelects {
    Single(HtmlSelectElement),
    SourceTarget {
        source: HtmlSelectElement,
        target: HtmlSelectElement,
    },
}

impl LanguageSelects {
    fn bind(document: &Document, mode: LanguageMode) -> Result<LanguageSelects, JsValue> {
        match mode {
            LanguageMode::Single => Ok(LanguageSelects::Single(lookup(
                document,
                "language-select",
            )?)),
            LanguageMode::SourceTarget => Ok(LanguageSelects::SourceTarget {
                source: lookup(document, "source-language-select")?,
                target: lookup(document, "target-language-select")?,
            }),
        }
    }

    /// Read the current selection. Called at submit time, never cached.
    fn read(&self) -> SubmissionOptions {
        match self {
            LanguageSelects::Single(select) => SubmissionOptions::Single {
                language: LanguageCode::new(select.value()),
            },
            LanguageSelects::SourceTarget { source, target } => SubmissionOptions::SourceTarget {
                source: LanguageCode::new(source.value()),
                target: LanguageCode::new(target.value()),
            },
        }
    }
}

/// Upload page entry point exposed to JavaScript. Construct once after
/// the DOM is ready; listeners stay attached for the page's lifetime.
#[wasm_bindgen]
pub struct App {
    controller: Rc<RefCell<Controller>>,
}

#[wasm_bindgen]
impl App {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<App, JsValue> {
        let config: UploadConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let file_input: HtmlInputElement = lookup(&document, "video-upload")?;
        let selects = LanguageSelects::bind(&document, config.language_mode)?;
        let view = DomView::bind(window, &document)?;
        let submit = view.submit_button().clone();
        let endpoint = config.endpoint.clone();

        let controller = Rc::new(RefCell::new(UploadController::new(view, config)));

        // Picker change: take the first entry of the file list, or clear
        // on a cancelled dialog.
        let change_controller = Rc::clone(&controller);
        let change_input = file_input.clone();
        let on_change = Closure::wrap(Box::new(move |_event: Event| {
            let selected = change_input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| SelectedFile::new(file.name(), file));
            change_controller.borrow_mut().file_changed(selected);
        }) as Box<dyn FnMut(_)>);
        file_input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();

        // Submit click: one POST per click. The borrow is released before
        // the await so the completion callback can take it again.
        let click_controller = Rc::clone(&controller);
        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            let options = selects.read();
            let submission = match click_controller.borrow_mut().begin_submission(options) {
                Ok(submission) => submission,
                // Notice already flashed; nothing to send.
                Err(_) => return,
            };

            let controller = Rc::clone(&click_controller);
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let outcome = net::submit(&endpoint, submission).await;
                controller.borrow_mut().complete_submission(outcome);
            });
        }) as Box<dyn FnMut(_)>);
        submit.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        Ok(App { controller })
    }

    /// Whether a file is currently selected.
    pub fn has_file(&self) -> bool {
        self.controller.borrow().has_file()
    }

    /// Whether a submission is in flight.
    pub fn is_uploading(&self) -> bool {
        self.controller.borrow().phase() == Phase::Uploading
    }
}
