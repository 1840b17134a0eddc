use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use portfolio_core::{ScrollFrame, ScrollMetrics, ScrollTracker};
use yew::prelude::*;

const FIRST_FRAME_MS: f64 = 16.0;

fn read_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrollMetrics {
        scroll_top: window.scroll_y().ok()?,
        scroll_height: root.scroll_height() as f64,
        viewport_height,
    })
}

/// Feeds window scroll positions into a `ScrollTracker` and steps its
/// springs on animation frames until they settle. Dropping the driver
/// removes the listeners and cancels the pending frame.
pub(crate) struct ScrollDriver {
    tracker: RefCell<ScrollTracker>,
    frame: RefCell<Option<AnimationFrame>>,
    last_tick_ms: Cell<Option<f64>>,
    on_frame: Rc<dyn Fn(ScrollFrame)>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ScrollDriver {
    pub(crate) fn install(on_frame: Rc<dyn Fn(ScrollFrame)>) -> Rc<Self> {
        let driver = Rc::new(Self {
            tracker: RefCell::new(ScrollTracker::new()),
            frame: RefCell::new(None),
            last_tick_ms: Cell::new(None),
            on_frame,
            listeners: RefCell::new(Vec::new()),
        });
        let Some(window) = web_sys::window() else {
            return driver;
        };
        let mut listeners = Vec::new();
        for event_type in ["scroll", "resize"] {
            let weak: Weak<Self> = Rc::downgrade(&driver);
            let listener = EventListener::new_with_options(
                &window,
                event_type,
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: true,
                },
                move |_event| {
                    if let Some(driver) = weak.upgrade() {
                        driver.observe_window();
                    }
                },
            );
            listeners.push(listener);
        }
        *driver.listeners.borrow_mut() = listeners;
        driver.observe_window();
        driver
    }

    fn observe_window(self: &Rc<Self>) {
        let Some(metrics) = read_metrics() else {
            return;
        };
        self.tracker.borrow_mut().observe(metrics.progress());
        self.ensure_frame();
    }

    fn ensure_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(driver) = weak.upgrade() {
                driver.animation_frame(timestamp);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn animation_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let dt_ms = match self.last_tick_ms.replace(Some(timestamp)) {
            Some(prev) => (timestamp - prev).max(0.0),
            None => FIRST_FRAME_MS,
        };
        let frame = self.tracker.borrow_mut().advance(dt_ms);
        (self.on_frame)(frame);
        if frame.settled {
            self.last_tick_ms.set(None);
        } else {
            self.ensure_frame();
        }
    }
}

#[hook]
pub(crate) fn use_scroll_progress() -> ScrollFrame {
    let frame = use_state_eq(|| ScrollTracker::new().frame());
    {
        let frame = frame.clone();
        use_effect_with((), move |_| {
            let driver = ScrollDriver::install(Rc::new(move |next: ScrollFrame| frame.set(next)));
            move || drop(driver)
        });
    }
    *frame
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test(async)]
    async fn driver_reports_frames_and_stops_after_drop() {
        console_error_panic_hook::set_once();
        let frames = Rc::new(Cell::new(0u32));
        let counter = frames.clone();
        let driver = ScrollDriver::install(Rc::new(move |_frame: ScrollFrame| {
            counter.set(counter.get() + 1);
        }));
        TimeoutFuture::new(100).await;
        let seen = frames.get();
        assert!(seen >= 1, "expected at least one frame");

        drop(driver);
        TimeoutFuture::new(100).await;
        assert_eq!(frames.get(), seen);
    }
}
