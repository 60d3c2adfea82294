use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "app",
            header {
                class: "app-header",
                div { class: "header-inner",
                    div {
                        h1 { class: "app-title", "{APP_NAME}" }
                        p { class: "app-tagline", "quanto cobrar para lucrar de verdade" }
                    }
                    nav { class: "app-nav",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "🧮 Calculadora",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Fees {}),
                            onclick: move |_| { nav.push(Route::Fees {}); },
                            label: "⚙️ Taxas",
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer", "{APP_NAME} {version}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
