//! Jewelry customization panel.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdPalette, LdRotateCcw};
use jewelfit_core::{Gemstone, JewelryType, Material, Selection};

/// Props for the [`CustomizationPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CustomizationPanelProps {
    /// Current selection, highlighted in each option group.
    selection: Selection,
    on_jewelry_type: EventHandler<JewelryType>,
    on_material: EventHandler<Material>,
    on_gemstone: EventHandler<Gemstone>,
    /// Restore the default selection.
    on_reset: EventHandler<()>,
}

const fn option_class(selected: bool) -> &'static str {
    if selected {
        "option option-selected"
    } else {
        "option"
    }
}

/// Collapsible panel with jewelry type, material and gemstone options.
///
/// Purely reflects `selection`; every change goes through the callbacks.
#[component]
pub fn CustomizationPanel(props: CustomizationPanelProps) -> Element {
    let mut expanded = use_signal(|| true);
    let selection = props.selection;
    let chevron_class = if expanded() {
        "chevron"
    } else {
        "chevron chevron-collapsed"
    };

    rsx! {
        aside { class: "card customization-panel",
            button {
                class: "panel-header",
                onclick: move |_| expanded.toggle(),
                Icon { width: 18, height: 18, icon: LdPalette }
                h2 { class: "card-title", "Customize" }
                span { class: "{chevron_class}",
                    Icon { width: 18, height: 18, icon: LdChevronDown }
                }
            }

            if expanded() {
                section { class: "option-group",
                    h3 { class: "option-heading", "Jewelry Type" }
                    div { class: "option-grid",
                        for jewelry in JewelryType::ALL {
                            button {
                                key: "{jewelry.id()}",
                                class: option_class(jewelry == selection.jewelry_type),
                                onclick: move |_| props.on_jewelry_type.call(jewelry),
                                "{jewelry.label()}"
                            }
                        }
                    }
                }

                section { class: "option-group",
                    h3 { class: "option-heading", "Material" }
                    div { class: "option-grid",
                        for material in Material::ALL {
                            button {
                                key: "{material.id()}",
                                class: option_class(material == selection.material),
                                onclick: move |_| props.on_material.call(material),
                                span {
                                    class: "swatch",
                                    style: "background: {material.color()};",
                                }
                                "{material.label()}"
                            }
                        }
                    }
                }

                section { class: "option-group",
                    h3 { class: "option-heading", "Gemstone" }
                    div { class: "option-grid",
                        for gemstone in Gemstone::ALL {
                            button {
                                key: "{gemstone.id()}",
                                class: option_class(gemstone == selection.gemstone),
                                onclick: move |_| props.on_gemstone.call(gemstone),
                                span {
                                    class: "swatch",
                                    style: "background: {gemstone.color()};",
                                }
                                "{gemstone.label()}"
                            }
                        }
                    }
                }

                button {
                    class: "btn btn-secondary btn-block",
                    onclick: move |_| props.on_reset.call(()),
                    Icon { width: 16, height: 16, icon: LdRotateCcw }
                    "Reset to Default"
                }

                section { class: "selection-summary",
                    h3 { class: "option-heading", "Current Selection" }
                    dl {
                        dt { "Type" }
                        dd { "{selection.jewelry_type.label()}" }
                        dt { "Material" }
                        dd { "{selection.material.label()}" }
                        dt { "Gemstone" }
                        dd { "{selection.gemstone.label()}" }
                    }
                }
            }
        }
    }
}
