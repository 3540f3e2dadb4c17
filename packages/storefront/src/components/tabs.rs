use dioxus::prelude::*;

use crate::product::Specification;
use crate::view_state::DetailTab;

/// Specifications, reviews and shipping information, one tab visible at a time.
#[component]
pub fn ProductTabs(specifications: Vec<Specification>) -> Element {
    let mut active = use_signal(DetailTab::default);

    rsx! {
        div { class: "tabs",
            div { class: "tab-list", role: "tablist",
                for tab in DetailTab::ALL {
                    button {
                        key: "{tab.label()}",
                        role: "tab",
                        class: if active() == tab { "tab tab-active" } else { "tab" },
                        aria_selected: active() == tab,
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            div { class: "tab-panel card", role: "tabpanel",
                match active() {
                    DetailTab::Specifications => rsx! { SpecificationTable { specifications } },
                    DetailTab::Reviews => rsx! {
                        div { class: "reviews-placeholder",
                            h3 { "Customer Reviews" }
                            p { class: "muted", "Reviews will be displayed here." }
                        }
                    },
                    DetailTab::Shipping => rsx! {
                        div { class: "shipping-info",
                            div {
                                h3 { "Shipping Information" }
                                p { class: "muted",
                                    "Free shipping on all orders over $50. Standard delivery takes 3-5 business days."
                                }
                            }
                            div {
                                h3 { "Return Policy" }
                                p { class: "muted",
                                    "We accept returns within 30 days of delivery. Items must be unused and in original packaging."
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
pub fn SpecificationTable(specifications: Vec<Specification>) -> Element {
    rsx! {
        div { class: "spec-grid",
            for spec in specifications {
                div { key: "{spec.name}", class: "spec-row",
                    span { class: "spec-name", "{spec.name}" }
                    span { class: "spec-value muted", "{spec.value}" }
                }
            }
        }
    }
}
