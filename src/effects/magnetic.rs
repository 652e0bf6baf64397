//! Link button that leans toward the cursor.
//!
//! Pointer offset from the element center, scaled way down, becomes a
//! translation while the pointer is inside the bounds; leaving resets the
//! offset to exactly zero (snap back, no animation required).

use leptos::html;
use leptos::prelude::*;
use web_sys::MouseEvent;

/// Fraction of the pointer-to-center distance applied as translation.
pub const MAGNETIC_PULL: f64 = 0.04;

/// Translation for a pointer at `(client_x, client_y)` over an element
/// with the given viewport rect.
pub fn pull_offset(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> (f64, f64) {
    let dx = client_x - rect_left - rect_width / 2.0;
    let dy = client_y - rect_top - rect_height / 2.0;
    (dx * MAGNETIC_PULL, dy * MAGNETIC_PULL)
}

fn is_external(href: &str) -> bool {
    !href.starts_with('#') && !href.starts_with("mailto:")
}

#[component]
pub fn MagneticButton(href: &'static str, children: Children) -> impl IntoView {
    let (offset, set_offset) = signal((0.0_f64, 0.0_f64));
    let anchor_ref = NodeRef::<html::A>::new();
    let external = is_external(href);

    let on_move = move |event: MouseEvent| {
        if let Some(anchor) = anchor_ref.get_untracked() {
            let rect = anchor.get_bounding_client_rect();
            set_offset.set(pull_offset(
                event.client_x() as f64,
                event.client_y() as f64,
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            ));
        }
    };

    view! {
        <a
            href=href
            node_ref=anchor_ref
            class="magnetic-btn"
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            on:mousemove=on_move
            on:mouseleave=move |_| set_offset.set((0.0, 0.0))
            style:transform=move || {
                let (x, y) = offset.get();
                format!("translate({x:.2}px, {y:.2}px)")
            }
        >
            <span class="magnetic-glow"></span>
            <span class="magnetic-label">{children()}</span>
            <svg
                class="magnetic-arrow"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
            >
                <path d="M5 12h14M12 5l7 7-7 7"></path>
            </svg>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pointer_at_center_pulls_nothing() {
        assert_eq!(pull_offset(150.0, 60.0, 100.0, 40.0, 100.0, 40.0), (0.0, 0.0));
    }

    #[test]
    fn pull_is_a_small_fraction_of_the_offset() {
        let (x, y) = pull_offset(200.0, 80.0, 100.0, 40.0, 100.0, 40.0);
        // pointer is 50px right, 20px below center
        assert_eq!(x, 50.0 * MAGNETIC_PULL);
        assert_eq!(y, 20.0 * MAGNETIC_PULL);
    }

    #[test]
    fn pull_is_signed_toward_the_pointer() {
        let (x, y) = pull_offset(100.0, 40.0, 100.0, 40.0, 100.0, 40.0);
        assert!(x < 0.0);
        assert!(y < 0.0);
    }

    #[test]
    fn anchor_and_mailto_links_stay_in_page_context() {
        assert!(!is_external("#contact"));
        assert!(!is_external("mailto:someone@example.com"));
        assert!(is_external("https://github.com/Aikon1433"));
    }
}
