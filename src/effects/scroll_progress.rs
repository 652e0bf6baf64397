//! Fixed top progress bar driven by a smoothed page scroll fraction.
//!
//! The raw fraction feeds a spring so the bar trails the scroll position
//! slightly instead of jittering with it; the displayed scale is clamped
//! to `[0, 1]` regardless of what the spring reports mid-flight.

use leptos::prelude::*;

use crate::motion::{clamp01, read_scroll_fraction, use_scroll_spring, Spring};

const STIFFNESS: f64 = 120.0;
const DAMPING: f64 = 24.0;
const MASS: f64 = 0.4;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let progress = use_scroll_spring(Spring::new(STIFFNESS, DAMPING, MASS), read_scroll_fraction);

    view! {
        <div
            class="scroll-progress"
            style:transform=move || format!("scaleX({:.4})", clamp01(progress.get()))
        ></div>
    }
}
