//! Photo / 3D view switcher.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdBox, LdCamera};
use jewelfit_core::ViewMode;

/// Props for the [`TabNavigation`] component.
#[derive(Props, Clone, PartialEq)]
pub struct TabNavigationProps {
    active: ViewMode,
    on_change: EventHandler<ViewMode>,
}

#[component]
pub fn TabNavigation(props: TabNavigationProps) -> Element {
    rsx! {
        nav { class: "tabs",
            for mode in ViewMode::ALL {
                button {
                    key: "{mode.label()}",
                    class: if mode == props.active { "tab tab-active" } else { "tab" },
                    onclick: move |_| props.on_change.call(mode),
                    if mode == ViewMode::Photo {
                        Icon { width: 16, height: 16, icon: LdCamera }
                    } else {
                        Icon { width: 16, height: 16, icon: LdBox }
                    }
                    "{mode.label()}"
                }
            }
        }
    }
}
