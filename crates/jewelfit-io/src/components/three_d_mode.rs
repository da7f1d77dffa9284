//! 3D try-on: the selected piece spinning on a bust.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdRotateCcw, LdZoomIn, LdZoomOut};
use gloo_timers::future::TimeoutFuture;
use jewelfit_core::{CameraState, Scene, Selection, SpinState, Viewport};

use super::scene_view::SceneView;
use crate::download;

/// Props for the [`ThreeDMode`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ThreeDModeProps {
    selection: Selection,
}

/// Rotating 3D preview with zoom controls and snapshot download.
///
/// The spin task lives in this component's scope and stops when the view
/// is unmounted.
#[component]
pub fn ThreeDMode(props: ThreeDModeProps) -> Element {
    let mut camera = use_signal(CameraState::new);
    let mut spin = use_signal(SpinState::new);
    let selection = props.selection;

    use_future(move || async move {
        loop {
            TimeoutFuture::new(SpinState::FRAME_INTERVAL_MS).await;
            spin.write().tick();
        }
    });

    let scene = Scene::compose(
        &selection,
        &camera.read(),
        spin.read().angle(),
        Viewport::PREVIEW,
    );
    let distance = camera.read().distance().round();

    let save_snapshot = {
        let scene = scene.clone();
        move |_| {
            if let Err(e) = download::download_snapshot(&scene, &selection) {
                log::warn!("snapshot download failed: {e}");
            }
        }
    };

    rsx! {
        div { class: "three-d-mode",
            div { class: "card preview-card",
                div {
                    class: "scene-stage",
                    onwheel: move |evt: WheelEvent| {
                        evt.prevent_default();
                        let dy = evt.delta().strip_units().y;
                        if dy > 0.0 {
                            camera.write().zoom_out();
                        } else if dy < 0.0 {
                            camera.write().zoom_in();
                        }
                    },
                    SceneView { scene }
                }

                div { class: "scene-controls",
                    div { class: "control-group",
                        button {
                            class: "btn btn-icon",
                            title: "Zoom out",
                            onclick: move |_| camera.write().zoom_out(),
                            Icon { width: 16, height: 16, icon: LdZoomOut }
                        }
                        span { class: "control-value", "Distance {distance}" }
                        button {
                            class: "btn btn-icon",
                            title: "Zoom in",
                            onclick: move |_| camera.write().zoom_in(),
                            Icon { width: 16, height: 16, icon: LdZoomIn }
                        }
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| camera.write().reset_view(),
                        Icon { width: 16, height: 16, icon: LdRotateCcw }
                        "Reset View"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: save_snapshot,
                        Icon { width: 16, height: 16, icon: LdDownload }
                        "Save Snapshot"
                    }
                }
            }

            div { class: "card instructions",
                h3 { class: "card-title", "3D Controls" }
                ul { class: "steps",
                    li { "The piece turns slowly so you can see it from every side." }
                    li { "Scroll over the preview or use the buttons to zoom." }
                    li { "Changes in the customization panel apply instantly." }
                    li { "Save a snapshot to keep the current view." }
                }
            }
        }
    }
}
