//! Photo upload prompt with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

/// Props for the [`UploadPrompt`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadPromptProps {
    /// Called with the picked or dropped files.
    on_files: EventHandler<Vec<FileData>>,
}

/// Empty-state drop zone shown until a photo is loaded.
///
/// Accepts anything the browser reports as `image/*`; decoding is left
/// to the `<img>` element that eventually displays it.
#[component]
pub fn UploadPrompt(props: UploadPromptProps) -> Element {
    let mut dragging = use_signal(|| false);

    let zone_class = if dragging() {
        "upload-zone upload-zone-active"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(false);
                props.on_files.call(evt.files());
            },

            div { class: "upload-icon",
                Icon { width: 40, height: 40, icon: LdUpload }
            }
            h3 { class: "upload-title", "Upload Your Photo" }
            p { class: "upload-hint",
                "Drop a photo here, or choose one to see how the jewelry looks on you."
            }
            label { class: "btn btn-primary",
                input {
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden-input",
                    onchange: move |evt: FormEvent| props.on_files.call(evt.files()),
                }
                "Choose Photo"
            }
        }
    }
}
