//! Self-rescheduling `requestAnimationFrame` loop.
//!
//! The loop holds at most one pending frame. Each frame runs the step
//! callback with the elapsed time in seconds; the loop reschedules while
//! the callback returns `true` and parks otherwise. Dropping the loop (or
//! calling [`RafLoop::stop`]) cancels the pending frame, so no animation
//! work outlives the component that owns it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};

use super::spring::MAX_STEP;

/// Elapsed time assumed for the first frame after the loop (re)starts,
/// when no previous timestamp exists.
const FIRST_FRAME_STEP: f64 = 1.0 / 60.0;

pub struct RafLoop {
    inner: Rc<Inner>,
}

struct Inner {
    frame: RefCell<Option<AnimationFrame>>,
    last_timestamp: Cell<Option<f64>>,
    step: Box<dyn Fn(f64) -> bool>,
}

impl RafLoop {
    pub fn new(step: impl Fn(f64) -> bool + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                frame: RefCell::new(None),
                last_timestamp: Cell::new(None),
                step: Box::new(step),
            }),
        }
    }

    /// Start the loop if it is parked; no-op while a frame is pending.
    pub fn ensure_running(&self) {
        if self.inner.frame.borrow().is_some() {
            return;
        }
        Self::schedule(Rc::clone(&self.inner));
    }

    fn schedule(inner: Rc<Inner>) {
        let handle = request_animation_frame({
            let inner = Rc::clone(&inner);
            move |timestamp| {
                inner.frame.borrow_mut().take();
                let dt = match inner.last_timestamp.replace(Some(timestamp)) {
                    Some(prev) => ((timestamp - prev).max(0.0) / 1000.0).min(MAX_STEP),
                    None => FIRST_FRAME_STEP,
                };
                if (inner.step)(dt) {
                    Self::schedule(Rc::clone(&inner));
                } else {
                    inner.last_timestamp.set(None);
                }
            }
        });
        *inner.frame.borrow_mut() = Some(handle);
    }

    /// Cancel the pending frame, if any.
    pub fn stop(&self) {
        self.inner.frame.borrow_mut().take();
        self.inner.last_timestamp.set(None);
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
