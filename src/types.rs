// Strong typing over strings. Newtypes for language tags, typed config.

use serde::{Deserialize, Serialize};

/// Language tag as presented by a selector control (e.g. "en", "hi").
/// The page defines the enumerated option set; the controller treats the
/// tag as opaque and forwards it verbatim in the form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(tag: impl Into<String>) -> Self {
        LanguageCode(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which language controls the page carries.
///
/// The single-select and source/target variants are the same flow; this
/// flag selects how `SubmissionOptions` is read at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LanguageMode {
    /// One target-language selector, posted as `language`.
    #[default]
    Single,
    /// Source and target selectors, posted as `source_language` / `target_language`.
    SourceTarget,
}

/// Language selection read from the page at submit time. Never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOptions {
    Single {
        language: LanguageCode,
    },
    SourceTarget {
        source: LanguageCode,
        target: LanguageCode,
    },
}

impl SubmissionOptions {
    /// Multipart field name/value pairs for this selection.
    /// Field names match what the processing endpoint reads from the form.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            SubmissionOptions::Single { language } => {
                vec![("language", language.as_str().to_string())]
            }
            SubmissionOptions::SourceTarget { source, target } => vec![
                ("source_language", source.as_str().to_string()),
                ("target_language", target.as_str().to_string()),
            ],
        }
    }
}

/// The one file the user has picked, plus its display name.
///
/// `F` is the platform file handle (`web_sys::File` in the browser); tests
/// substitute a plain placeholder. Last selection wins, no queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub handle: F,
}

impl<F> SelectedFile<F> {
    pub fn new(name: impl Into<String>, handle: F) -> Self {
        SelectedFile {
            name: name.into(),
            handle,
        }
    }
}

/// Controller configuration passed from the page as JSON.
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Endpoint receiving the multipart POST.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub language_mode: LanguageMode,
    /// File label text shown while no file is picked.
    #[serde(default = "default_file_placeholder")]
    pub file_placeholder: String,
    /// Submit control label when idle.
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            endpoint: default_endpoint(),
            language_mode: LanguageMode::default(),
            file_placeholder: default_file_placeholder(),
            submit_label: default_submit_label(),
        }
    }
}

fn default_endpoint() -> String {
    "/process-video".to_string()
}

fn default_file_placeholder() -> String {
    "Click to select a file...".to_string()
}

fn default_submit_label() -> String {
    "Generate Subtitled Video".to_string()
}
