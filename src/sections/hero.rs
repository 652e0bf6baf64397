use leptos::prelude::*;

use crate::effects::MagneticButton;
use crate::motion::{map_range, read_scroll_y, use_scroll_spring, Spring};
use super::{LEPTOS_URL, NAME, TAGLINE};

// Softer spring than the progress bar; the hero drifts rather than tracks.
const STIFFNESS: f64 = 60.0;
const DAMPING: f64 = 20.0;
const MASS: f64 = 0.6;

// First 500px of scroll push the hero content down by up to 60px.
const PARALLAX_SCROLL_RANGE: f64 = 500.0;
const PARALLAX_SHIFT: f64 = 60.0;

#[component]
pub fn Hero() -> impl IntoView {
    let scroll = use_scroll_spring(Spring::new(STIFFNESS, DAMPING, MASS), read_scroll_y);

    view! {
        <section class="hero">
            <div
                class="hero-inner"
                style:transform=move || {
                    let shift = map_range(
                        scroll.get(),
                        0.0,
                        PARALLAX_SCROLL_RANGE,
                        0.0,
                        PARALLAX_SHIFT,
                    );
                    format!("translate3d(0, {shift:.2}px, 0)")
                }
            >
                <h1 class="hero-title">
                    "Hi, I'm " <span class="hero-accent">{NAME}</span>
                    <br/>
                    <span class="hero-subtitle">{TAGLINE}</span>
                </h1>
                <div class="hero-actions">
                    <MagneticButton href=LEPTOS_URL>"Explore Leptos"</MagneticButton>
                    <MagneticButton href="#contact">"Contact Me"</MagneticButton>
                </div>
            </div>
        </section>
    }
}
