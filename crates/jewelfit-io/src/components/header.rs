//! Page banner.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdGem;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "brand",
                span { class: "brand-icon",
                    Icon { width: 24, height: 24, icon: LdGem }
                }
                h1 { class: "brand-title", "Virtual JewelFit 3D" }
            }
            span { class: "badge", "Demo" }
        }
    }
}
