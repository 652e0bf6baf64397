use leptos::prelude::*;

use super::NAME;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="nav">
            <div class="nav-inner">
                <div class="nav-brand">
                    <span class="nav-mark"></span>
                    <span class="nav-title">{NAME}</span>
                    <span class="nav-subtitle">"My Intro"</span>
                </div>
                <nav class="nav-links">
                    <a href="#about" class="nav-link">"About"</a>
                    <a href="#contact" class="nav-link">"Contact"</a>
                </nav>
            </div>
        </header>
    }
}
