//! Cursor-following sparkle dots.
//!
//! A single window `mousemove` subscription overwrites the stored pointer
//! position (most-recent-wins, no history). Each dot chases the pointer
//! plus a fixed trigonometric offset; the looping opacity/scale cycle and
//! the ease toward the pointer are CSS, so the only per-event work here is
//! one signal write.

use gloo::events::EventListener;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

pub const SPARKLE_COUNT: usize = 10;
const SPREAD_RADIUS: f64 = 20.0;
const BASE_CYCLE_SECS: f64 = 1.6;
const CYCLE_STAGGER_SECS: f64 = 0.04;

/// Dots start here until the first pointer event arrives; without pointer
/// events the trail degrades to nothing visible.
pub const OFFSCREEN: (f64, f64) = (-9999.0, -9999.0);

/// Fixed offset of dot `index` from the pointer position.
pub fn sparkle_offset(index: usize) -> (f64, f64) {
    let i = index as f64;
    (i.sin() * SPREAD_RADIUS, i.cos() * SPREAD_RADIUS)
}

#[component]
pub fn SparkleTrail() -> impl IntoView {
    let (pos, set_pos) = signal(OFFSCREEN);

    if let Some(window) = web_sys::window() {
        let listener = EventListener::new(&window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                set_pos.set((event.client_x() as f64, event.client_y() as f64));
            }
        });
        // on_cleanup wants Send + Sync; the listener is browser-local state
        let listener = SendWrapper::new(listener);
        on_cleanup(move || drop(listener));
    }

    let dots = (0..SPARKLE_COUNT)
        .map(|index| {
            let (dx, dy) = sparkle_offset(index);
            let cycle = BASE_CYCLE_SECS + CYCLE_STAGGER_SECS * index as f64;
            view! {
                <div
                    class="sparkle-dot"
                    style:animation-duration=format!("{cycle:.2}s")
                    style:transform=move || {
                        let (x, y) = pos.get();
                        format!("translate3d({:.1}px, {:.1}px, 0)", x + dx, y + dy)
                    }
                ></div>
            }
        })
        .collect_view();

    view! { <div aria-hidden="true" class="sparkle-layer">{dots}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn offsets_stay_within_spread_radius() {
        for index in 0..SPARKLE_COUNT {
            let (dx, dy) = sparkle_offset(index);
            let distance = (dx * dx + dy * dy).sqrt();
            assert!((distance - SPREAD_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn offsets_are_distinct_per_dot() {
        for a in 0..SPARKLE_COUNT {
            for b in (a + 1)..SPARKLE_COUNT {
                assert!(sparkle_offset(a) != sparkle_offset(b));
            }
        }
    }

    #[test]
    fn first_dot_sits_straight_below_the_pointer() {
        // screen coordinates: +y is down
        let (dx, dy) = sparkle_offset(0);
        assert_eq!(dx, 0.0);
        assert_eq!(dy, SPREAD_RADIUS);
    }
}
