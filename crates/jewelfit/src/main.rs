use dioxus::prelude::*;
use jewelfit_core::{Gemstone, JewelryType, Material, Selection, ViewMode};
use jewelfit_io::{CustomizationPanel, Header, PhotoMode, TabNavigation, ThreeDMode};

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("jewelfit starting");
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the selection and the active view. Only the active view is
/// mounted, so switching tabs discards the other view's photo, drag,
/// zoom and spin state.
fn app() -> Element {
    let mut selection = use_signal(Selection::default);
    let mut view_mode = use_signal(ViewMode::default);

    let current = selection();

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "app",
            Header {}

            main { class: "layout",
                div { class: "preview-column",
                    TabNavigation {
                        active: view_mode(),
                        on_change: move |mode: ViewMode| {
                            log::debug!("switching to {}", mode.label());
                            view_mode.set(mode);
                        },
                    }

                    if view_mode() == ViewMode::Photo {
                        PhotoMode {
                            jewelry_type: current.jewelry_type,
                            material: current.material,
                        }
                    } else {
                        ThreeDMode { selection: current }
                    }
                }

                CustomizationPanel {
                    selection: current,
                    on_jewelry_type: move |jewelry_type: JewelryType| selection.write().jewelry_type = jewelry_type,
                    on_material: move |material: Material| selection.write().material = material,
                    on_gemstone: move |gemstone: Gemstone| selection.write().gemstone = gemstone,
                    on_reset: move |()| selection.write().reset(),
                }
            }
        }
    }
}
