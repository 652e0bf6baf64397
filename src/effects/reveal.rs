//! One-shot entrance reveal driven by viewport intersection.
//!
//! A section latches to "revealed" the first time it crosses the
//! observer's visibility threshold and never un-reveals for the rest of
//! the mount. The observer disconnects as soon as the latch fires.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Partial visibility is enough to trigger the entrance.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Latch for entrance animations: fires exactly once.
#[derive(Debug, Default, Clone, Copy)]
pub struct RevealState {
    played: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an intersection notification; returns `true` only for the
    /// first intersecting one.
    pub fn update(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.played {
            self.played = true;
            return true;
        }
        false
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observe `target` and return a signal that flips to `true` the first
/// time the element is at least `threshold` visible. Observer and
/// callback are torn down on component cleanup (or earlier, once fired).
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let observer: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));
    let callback: Rc<RefCell<Option<ObserverCallback>>> = Rc::new(RefCell::new(None));

    Effect::new({
        let observer = Rc::clone(&observer);
        let callback = Rc::clone(&callback);
        move || {
            let Some(element) = target.get() else {
                return;
            };
            if observer.borrow().is_some() {
                return;
            }

            let mut state = RevealState::new();
            let cb = Closure::wrap(Box::new(
                move |entries: js_sys::Array, obs: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if state.update(entry.is_intersecting()) {
                            set_revealed.set(true);
                            obs.disconnect();
                        }
                    }
                },
            ) as Box<dyn FnMut(_, _)>);

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
                Ok(obs) => {
                    obs.observe(&element);
                    *observer.borrow_mut() = Some(obs);
                    *callback.borrow_mut() = Some(cb);
                }
                // No observer support: skip the entrance, show content.
                Err(_) => set_revealed.set(true),
            }
        }
    });

    // on_cleanup wants Send + Sync; observer and callback are browser-local
    let cleanup = SendWrapper::new((observer, callback));
    on_cleanup(move || {
        let (observer, callback) = cleanup.take();
        if let Some(obs) = observer.borrow_mut().take() {
            obs.disconnect();
        }
        callback.borrow_mut().take();
    });

    revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_first_intersection_only() {
        let mut state = RevealState::new();
        assert!(!state.update(false));
        assert!(state.update(true));
        assert!(!state.update(true));
        assert!(!state.update(false));
        assert!(!state.update(true));
    }

    #[test]
    fn never_fires_without_intersection() {
        let mut state = RevealState::new();
        for _ in 0..100 {
            assert!(!state.update(false));
        }
        // still armed: the next intersection fires it
        assert!(state.update(true));
    }

    #[test]
    fn threshold_crossing_sequence_fires_once() {
        // ratios a scrolling section would report around a 0.3 threshold
        let ratios = [0.0, 0.1, 0.25, 0.31, 0.6, 1.0, 0.4, 0.2, 0.35];
        let mut state = RevealState::new();
        let fired: usize = ratios
            .iter()
            .map(|&r| usize::from(state.update(r >= REVEAL_THRESHOLD)))
            .sum();
        assert_eq!(fired, 1);
    }
}
