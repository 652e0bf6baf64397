use leptos::prelude::*;

use super::NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <p class="footer-copyright">
                {format!("© {year} {NAME}. Built with Rust & Leptos.")}
            </p>
        </footer>
    }
}
