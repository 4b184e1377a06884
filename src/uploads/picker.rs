// File-picker collaborator. One PDF per request; the result is either a
// cancellation or a descriptor that may lack a name.

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const PDF_EXTENSIONS: &[&str] = &["pdf"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedDocument {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Cancelled,
    Picked(PickedDocument),
}

#[cfg(test)]
impl PickOutcome {
    pub fn picked(name: impl Into<String>) -> Self {
        Self::Picked(PickedDocument {
            name: Some(name.into()),
        })
    }
}

#[allow(async_fn_in_trait)]
pub trait DocumentPicker {
    async fn pick_pdf(&self) -> PickOutcome;
}

/// Platform file dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SystemPicker;

#[cfg(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "linux",
    target_arch = "wasm32"
))]
impl DocumentPicker for SystemPicker {
    async fn pick_pdf(&self) -> PickOutcome {
        log::debug!("opening file dialog for {PDF_MIME_TYPE}");
        let handle = rfd::AsyncFileDialog::new()
            .set_title("Choose PDF")
            .add_filter(PDF_MIME_TYPE, PDF_EXTENSIONS)
            .pick_file()
            .await;

        match handle {
            Some(handle) => {
                let name = handle.file_name();
                let name = (!name.trim().is_empty()).then_some(name);
                PickOutcome::Picked(PickedDocument { name })
            }
            None => PickOutcome::Cancelled,
        }
    }
}

#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "linux",
    target_arch = "wasm32"
)))]
impl DocumentPicker for SystemPicker {
    async fn pick_pdf(&self) -> PickOutcome {
        log::warn!("no file dialog backend on this platform; treating pick as cancelled");
        PickOutcome::Cancelled
    }
}

/// Returns a fixed outcome.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedPicker {
    outcome: PickOutcome,
}

#[cfg(test)]
impl ScriptedPicker {
    pub fn new(outcome: PickOutcome) -> Self {
        Self { outcome }
    }
}

#[cfg(test)]
impl DocumentPicker for ScriptedPicker {
    async fn pick_pdf(&self) -> PickOutcome {
        self.outcome.clone()
    }
}
