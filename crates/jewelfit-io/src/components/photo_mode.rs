//! Photo try-on: upload a photo and drag the jewelry sprite over it.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdMove, LdRotateCcw, LdUpload, LdZoomIn, LdZoomOut};
use jewelfit_core::{
    Bounds, JewelryType, Material, OverlayState, UploadGate, hue_filter, sniff_mime_type,
};

use super::scene_view::SpriteView;
use super::upload::UploadPrompt;
use crate::image_url::{self, ImageUrlError, UploadedImage};

/// Props for the [`PhotoMode`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PhotoModeProps {
    jewelry_type: JewelryType,
    material: Material,
}

/// Read the first of `files` and install it as the overlay photo.
///
/// The read is tagged with a ticket from `gate`; if another upload starts
/// or the view goes away before the bytes arrive, the result is dropped.
fn start_upload(
    files: Vec<FileData>,
    gate: &Rc<RefCell<UploadGate>>,
    mut overlay: Signal<OverlayState<UploadedImage>>,
) {
    let Some(file) = files.into_iter().next() else {
        return;
    };
    let ticket = gate.borrow_mut().begin_upload();
    let gate = Rc::clone(gate);

    spawn(async move {
        let name = file.name();
        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                log::warn!("failed to read {name}: {e}");
                return;
            }
        };

        let mime_type = sniff_mime_type(&bytes, &name);
        let url = match image_url::bytes_to_blob_url(&bytes, mime_type) {
            Ok(url) => url,
            Err(ImageUrlError::Empty) => {
                log::debug!("ignoring empty file {name}");
                return;
            }
            Err(e) => {
                log::warn!("could not display {name}: {e}");
                return;
            }
        };

        let finished = gate
            .borrow()
            .finish_upload(ticket, &mut overlay.write(), UploadedImage { url });
        match finished {
            Ok(replaced) => {
                log::debug!(
                    "loaded {name} ({} bytes, {})",
                    bytes.len(),
                    mime_type.unwrap_or("unknown type")
                );
                if let Some(old) = replaced {
                    image_url::revoke_blob_url(&old.url);
                }
            }
            Err(stale) => {
                log::debug!("dropping stale upload of {name}");
                image_url::revoke_blob_url(&stale.url);
            }
        }
    });
}

/// Measure the photo container and move the sprite under the pointer.
///
/// The box is read fresh for every move so scrolling or relayout during a
/// drag is picked up.
fn drag_to(
    container: Option<Rc<MountedData>>,
    client_x: f64,
    client_y: f64,
    mut overlay: Signal<OverlayState<UploadedImage>>,
) {
    let Some(el) = container else {
        return;
    };
    spawn(async move {
        match el.get_client_rect().await {
            Ok(rect) => {
                let bounds = Bounds::new(
                    rect.origin.x,
                    rect.origin.y,
                    rect.size.width,
                    rect.size.height,
                );
                overlay.write().update_pointer(client_x, client_y, bounds);
            }
            Err(e) => log::warn!("could not measure photo: {e:?}"),
        }
    });
}

/// Photo overlay view.
///
/// Shows the upload prompt until a photo is loaded, then the photo with
/// a draggable, resizable sprite tinted for the selected material.
#[allow(clippy::too_many_lines)]
#[component]
pub fn PhotoMode(props: PhotoModeProps) -> Element {
    let mut overlay = use_signal(OverlayState::<UploadedImage>::new);
    let gate = use_hook(|| Rc::new(RefCell::new(UploadGate::new())));
    let mut container = use_signal(|| Option::<Rc<MountedData>>::None);

    // Leaving photo mode abandons in-flight reads and frees the photo.
    {
        let gate = Rc::clone(&gate);
        use_drop(move || {
            gate.borrow_mut().cancel_uploads();
            if let Some(image) = overlay.peek().image() {
                image_url::revoke_blob_url(&image.url);
            }
        });
    }

    let on_prompt_files = {
        let gate = Rc::clone(&gate);
        move |files: Vec<FileData>| start_upload(files, &gate, overlay)
    };
    let on_change_photo = {
        let gate = Rc::clone(&gate);
        move |evt: FormEvent| start_upload(evt.files(), &gate, overlay)
    };

    let stop_drag = move |_: MouseEvent| {
        if overlay.peek().is_dragging() {
            overlay.write().end_drag();
        }
    };

    let (position, scale, dragging, image) = {
        let state = overlay.read();
        (
            state.position(),
            state.scale(),
            state.is_dragging(),
            state.image().cloned(),
        )
    };

    let has_photo = image.is_some();

    // A render failure only counts against the photo that failed.
    let photo = image.map(|image| {
        let src = image.url.clone();
        let on_error = move |_: ImageEvent| {
            if let Some(failed) = overlay.write().discard_image(&image) {
                log::warn!("browser could not display the uploaded photo");
                image_url::revoke_blob_url(&failed.url);
            }
        };
        (src, on_error)
    });

    let filter = hue_filter(props.material);
    let percent = (scale * 100.0).round();
    let sprite_class = if dragging {
        "overlay-sprite dragging"
    } else {
        "overlay-sprite"
    };

    rsx! {
        div { class: "photo-mode",
            div { class: "card preview-card",
                if let Some((src, on_error)) = photo {
                    div {
                        class: "photo-stage",
                        onmounted: move |evt: MountedEvent| container.set(Some(evt.data())),
                        onmousemove: move |evt: MouseEvent| {
                            if overlay.peek().is_dragging() {
                                let p = evt.client_coordinates();
                                drag_to(container(), p.x, p.y, overlay);
                            }
                        },
                        onmouseup: stop_drag,
                        onmouseleave: stop_drag,

                        img {
                            class: "photo-image",
                            src: "{src}",
                            alt: "Your uploaded photo",
                            draggable: "false",
                            onerror: on_error,
                        }
                        div {
                            class: "{sprite_class}",
                            style: "left: {position.x}%; top: {position.y}%; transform: translate(-50%, -50%) scale({scale}); filter: {filter};",
                            onmousedown: move |evt: MouseEvent| {
                                evt.prevent_default();
                                overlay.write().begin_drag();
                            },
                            SpriteView { jewelry_type: props.jewelry_type }
                        }
                    }

                    div { class: "photo-controls",
                        label { class: "btn btn-secondary",
                            input {
                                r#type: "file",
                                accept: "image/*",
                                class: "hidden-input",
                                onchange: on_change_photo,
                            }
                            Icon { width: 16, height: 16, icon: LdUpload }
                            "Change Photo"
                        }
                        div { class: "control-group",
                            button {
                                class: "btn btn-icon",
                                title: "Smaller",
                                onclick: move |_| overlay.write().shrink(),
                                Icon { width: 16, height: 16, icon: LdZoomOut }
                            }
                            span { class: "control-value", "{percent}%" }
                            button {
                                class: "btn btn-icon",
                                title: "Larger",
                                onclick: move |_| overlay.write().grow(),
                                Icon { width: 16, height: 16, icon: LdZoomIn }
                            }
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| overlay.write().reset_position(),
                            Icon { width: 16, height: 16, icon: LdRotateCcw }
                            "Reset"
                        }
                    }
                } else {
                    UploadPrompt { on_files: on_prompt_files }
                }
            }

            div { class: "card instructions",
                h3 { class: "card-title", "Instructions" }
                ol { class: "steps",
                    li { "Upload a clear photo of yourself." }
                    li { "Drag the jewelry to position it correctly." }
                    li { "Use the customization panel to change materials." }
                    li { "Resize the jewelry to fit perfectly." }
                }
                if has_photo {
                    div { class: "drag-hint",
                        Icon { width: 14, height: 14, icon: LdMove }
                        span { "Drag to Move" }
                        p { "Press on the jewelry and drag it over your photo." }
                    }
                }
            }
        }
    }
}
