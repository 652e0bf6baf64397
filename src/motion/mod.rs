//! Animation plumbing shared by the page's dynamic widgets: a damped
//! spring, a parkable rAF loop, and the scroll-reading glue between them.

mod raf;
mod spring;

pub use raf::RafLoop;
pub use spring::Spring;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Linear input-to-output range mapping with the input clamped to its
/// range, so the output never leaves `[out_min, out_max]`.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    let t = ((value - in_min) / span).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

/// Fraction of the page scrolled, in `[0, 1]`. A document no taller than
/// the viewport reports 0.
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    clamp01(scroll_y / scrollable)
}

/// Current vertical scroll offset in pixels; 0 outside a browser.
pub fn read_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Current page scroll fraction; 0 outside a browser.
pub fn read_scroll_fraction() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let Some(root) = window.document().and_then(|doc| doc.document_element()) else {
        return 0.0;
    };
    scroll_fraction(
        window.scroll_y().unwrap_or(0.0),
        root.scroll_height() as f64,
        root.client_height() as f64,
    )
}

/// Spring-smoothed signal tracking `target` while the page scrolls.
///
/// The rAF loop steps the spring only until it settles, then parks; each
/// scroll event wakes it back up. Listener and pending frame are both
/// released on component cleanup.
pub fn use_scroll_spring(
    spring: Spring,
    target: impl Fn() -> f64 + 'static,
) -> ReadSignal<f64> {
    let (value, set_value) = signal(spring.value());
    let spring = Rc::new(RefCell::new(spring));
    let target = Rc::new(target);

    let raf = Rc::new(RafLoop::new({
        let spring = Rc::clone(&spring);
        let target = Rc::clone(&target);
        move |dt| {
            let mut spring = spring.borrow_mut();
            spring.set_target(target());
            set_value.set(spring.step(dt));
            !spring.settled()
        }
    }));
    raf.ensure_running();

    if let Some(window) = web_sys::window() {
        let listener = EventListener::new(&window, "scroll", {
            let raf = Rc::clone(&raf);
            move |_| raf.ensure_running()
        });
        // on_cleanup wants Send + Sync; listener and loop are browser-local
        let cleanup = SendWrapper::new((listener, Rc::clone(&raf)));
        on_cleanup(move || {
            let (listener, raf) = cleanup.take();
            drop(listener);
            raf.stop();
        });
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn map_range_matches_endpoints() {
        assert_eq!(map_range(0.0, 0.0, 500.0, 0.0, 60.0), 0.0);
        assert_eq!(map_range(500.0, 0.0, 500.0, 0.0, 60.0), 60.0);
        assert_eq!(map_range(250.0, 0.0, 500.0, 0.0, 60.0), 30.0);
    }

    #[test]
    fn map_range_clamps_outside_input_range() {
        assert_eq!(map_range(-100.0, 0.0, 500.0, 0.0, 60.0), 0.0);
        assert_eq!(map_range(10_000.0, 0.0, 500.0, 0.0, 60.0), 60.0);
    }

    #[test]
    fn map_range_degenerate_input_range() {
        assert_eq!(map_range(5.0, 3.0, 3.0, 0.0, 60.0), 0.0);
    }

    #[test]
    fn scroll_fraction_midpoint() {
        assert_eq!(scroll_fraction(500.0, 2000.0, 1000.0), 0.5);
    }

    #[test]
    fn scroll_fraction_is_clamped() {
        assert_eq!(scroll_fraction(-50.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(5000.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_document_reports_zero() {
        assert_eq!(scroll_fraction(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn wrapped_cleanup_state_satisfies_cleanup_bounds() {
        // on_cleanup requires Send + Sync; the wrapper carries the
        // thread-local loop handle across that bound
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let raf = Rc::new(RafLoop::new(|_| false));
        let wrapped = SendWrapper::new(Rc::clone(&raf));
        assert_send_sync(&wrapped);
        wrapped.take().stop();
        // stopping a parked loop is a no-op and safe to repeat
        raf.stop();
    }
}
