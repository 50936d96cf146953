// LAS-WG landing page, browser entry point (Leptos 0.8, CSR)

use laswg_landing::scroll::{WindowScroll, use_scroll_flag};
use laswg_landing::{LandingPage, current_year};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_2(
        &JsValue::from_str("%cLAS-WG | Lightweight Agent Standards Working Group"),
        &JsValue::from_str("color: #4f55c1; font-weight: bold;"),
    );
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    // Released with the app's owner on unmount
    let scrolled = use_scroll_flag(&WindowScroll);
    view! { <LandingPage scrolled=scrolled year=current_year() /> }
}
