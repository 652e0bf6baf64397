// Personal portfolio — Leptos 0.8 CSR edition

mod effects;
mod motion;
mod sections;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use effects::{BackgroundFx, ScrollProgress, SparkleTrail};
use sections::{About, Contact, Footer, Hero, Nav, NAME};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    Effect::new(move || print_console_banner());

    view! {
        <BackgroundFx />
        <SparkleTrail />
        <ScrollProgress />
        <Nav />
        <main>
            <Hero />
        </main>
        <About />
        <Contact />
        <Footer />
    }
}

/// Small greeting for anyone who opens the console.
fn print_console_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{NAME} — portfolio")),
        &JsValue::from_str("color: #22d3ee; font-weight: bold; font-size: 14px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cBuilt with Rust + Leptos, compiled to WebAssembly."),
        &JsValue::from_str("color: #888;"),
    );
}
