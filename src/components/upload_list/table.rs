use crate::components::{use_theme_color, ColorKey, TextKind, ThemedText, ThemedView};
use crate::uploads::UploadRecord;
use dioxus::prelude::*;

struct Column {
    label: &'static str,
    flex: u8,
}

const COLUMNS: [Column; 3] = [
    Column {
        label: "File",
        flex: 2,
    },
    Column {
        label: "Uploaded",
        flex: 2,
    },
    Column {
        label: "Status",
        flex: 1,
    },
];

#[component]
pub fn UploadTable(uploads: Vec<UploadRecord>, on_select: EventHandler<UploadRecord>) -> Element {
    let icon = use_theme_color(ColorKey::Icon);

    rsx! {
        ThemedView {
            class: "upload-table".to_string(),
            style: format!("border-color: {icon};"),
            div {
                class: "upload-row upload-header-row",
                style: "border-bottom-color: {icon};",
                for column in COLUMNS.iter() {
                    div {
                        key: "{column.label}",
                        class: "upload-cell",
                        style: "flex: {column.flex};",
                        ThemedText { kind: TextKind::DefaultSemiBold, "{column.label}" }
                    }
                }
            }
            div { class: "upload-table-body",
                if uploads.is_empty() {
                    div { class: "upload-empty",
                        ThemedText { "No uploads yet. Tap + to add a PDF." }
                    }
                }
                for record in uploads.iter().cloned() {
                    button {
                        key: "{record.id}",
                        class: "upload-row",
                        r#type: "button",
                        style: "border-bottom-color: {icon};",
                        onclick: {
                            let record = record.clone();
                            move |_| on_select.call(record.clone())
                        },
                        div { class: "upload-cell", style: "flex: 2;",
                            ThemedText { class: "truncate".to_string(), "{record.file_name}" }
                        }
                        div { class: "upload-cell", style: "flex: 2;",
                            ThemedText { class: "truncate".to_string(), "{record.uploaded_at}" }
                        }
                        div { class: "upload-cell", style: "flex: 1;",
                            ThemedText { class: "truncate".to_string(), "{record.status}" }
                        }
                    }
                }
            }
        }
    }
}
