//! Scroll flag: whether the viewport has scrolled past the header threshold.
//!
//! The flag lives in the component that calls [`use_scroll_flag`]. The
//! listener it registers is released when that component's owner is cleaned
//! up, so a torn-down page never receives scroll callbacks.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Vertical offset (px) above which the header switches to its blurred style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

const SCROLL_EVENT: &str = "scroll";

/// `true` once the offset is strictly past [`SCROLL_THRESHOLD`].
pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

/// Something that reports a vertical scroll offset and notifies on change.
pub trait ScrollSource {
    /// Current vertical offset in pixels.
    fn offset(&self) -> f64;

    /// Register `on_scroll`; it receives the new offset on every scroll
    /// event until the returned subscription is dropped.
    fn subscribe(&self, on_scroll: Box<dyn Fn(f64)>) -> ScrollSubscription;
}

/// Listener registration guard. Dropping it deregisters the listener.
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release (listener never attached).
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Component-local scroll flag bound to `source` for the lifetime of the
/// current reactive owner.
pub fn use_scroll_flag(source: &impl ScrollSource) -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(is_scrolled(source.offset()));

    let subscription = source.subscribe(Box::new(move |offset| {
        let next = is_scrolled(offset);
        if scrolled.get_untracked() != next {
            set_scrolled.set(next);
        }
    }));
    tracing::trace!(active = subscription.is_active(), "scroll listener attached");

    let subscription = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        let _ = subscription.try_update_value(Option::take);
        tracing::trace!("scroll listener released");
    });

    scrolled
}

/// The browser window's scroll position.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or_default()
    }

    fn subscribe(&self, on_scroll: Box<dyn Fn(f64)>) -> ScrollSubscription {
        let Some(window) = web_sys::window() else {
            return ScrollSubscription::inert();
        };

        let reader = window.clone();
        let callback = Closure::<dyn Fn()>::new(move || {
            on_scroll(reader.scroll_y().unwrap_or_default());
        });

        if let Err(err) = window
            .add_event_listener_with_callback(SCROLL_EVENT, callback.as_ref().unchecked_ref())
        {
            web_sys::console::warn_2(
                &JsValue::from_str("[laswg] scroll listener not registered:"),
                &err,
            );
            return ScrollSubscription::inert();
        }

        ScrollSubscription::new(move || {
            let _ = window.remove_event_listener_with_callback(
                SCROLL_EVENT,
                callback.as_ref().unchecked_ref(),
            );
        })
    }
}

type Listener = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct ManualState {
    offset: f64,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Scroll source driven by hand. Server rendering uses it at offset 0.
#[derive(Clone, Default)]
pub struct ManualScroll {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScroll {
    pub fn at(offset: f64) -> Self {
        let scroll = Self::default();
        scroll.state.borrow_mut().offset = offset;
        scroll
    }

    /// Move to `offset` and notify every live listener.
    /// Returns how many listeners were notified.
    pub fn scroll_to(&self, offset: f64) -> usize {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            state.offset = offset;
            state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in &listeners {
            listener(offset);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl ScrollSource for ManualScroll {
    fn offset(&self) -> f64 {
        self.state.borrow().offset
    }

    fn subscribe(&self, on_scroll: Box<dyn Fn(f64)>) -> ScrollSubscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, Rc::from(on_scroll)));
            id
        };

        let state: Weak<RefCell<ManualState>> = Rc::downgrade(&self.state);
        ScrollSubscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        })
    }
}

impl fmt::Debug for ManualScroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualScroll")
            .field("offset", &state.offset)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary_stays_transparent() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(19.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(21.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn flag_follows_scroll_events() {
        let owner = Owner::new();
        owner.with(|| {
            let scroll = ManualScroll::default();
            let scrolled = use_scroll_flag(&scroll);
            assert!(!scrolled.get_untracked());

            scroll.scroll_to(19.0);
            assert!(!scrolled.get_untracked());
            scroll.scroll_to(20.0);
            assert!(!scrolled.get_untracked());
            scroll.scroll_to(21.0);
            assert!(scrolled.get_untracked());
            scroll.scroll_to(5.0);
            assert!(!scrolled.get_untracked());
        });
    }

    #[test]
    fn initial_offset_seeds_the_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let scrolled = use_scroll_flag(&ManualScroll::at(300.0));
            assert!(scrolled.get_untracked());
        });
    }

    #[test]
    fn cleanup_releases_listener() {
        let scroll = ManualScroll::default();
        let owner = Owner::new();
        owner.with(|| {
            let _scrolled = use_scroll_flag(&scroll);
        });
        assert_eq!(scroll.listener_count(), 1);

        owner.cleanup();

        assert_eq!(scroll.listener_count(), 0);
        assert_eq!(scroll.scroll_to(100.0), 0);
    }

    #[test]
    fn dropping_subscription_deregisters() {
        let scroll = ManualScroll::default();
        let hits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&hits);
        let subscription = scroll.subscribe(Box::new(move |y| sink.borrow_mut().push(y)));
        assert!(subscription.is_active());

        assert_eq!(scroll.scroll_to(42.0), 1);
        drop(subscription);
        assert_eq!(scroll.scroll_to(43.0), 0);

        assert_eq!(*hits.borrow(), vec![42.0]);
    }

    #[test]
    fn listeners_are_independent() {
        let scroll = ManualScroll::default();
        let first = scroll.subscribe(Box::new(|_| {}));
        let second = scroll.subscribe(Box::new(|_| {}));
        assert_eq!(scroll.listener_count(), 2);
        drop(first);
        assert_eq!(scroll.listener_count(), 1);
        drop(second);
        assert_eq!(scroll.listener_count(), 0);
    }

    #[test]
    fn inert_subscription_is_harmless() {
        let subscription = ScrollSubscription::inert();
        assert!(!subscription.is_active());
        drop(subscription);
    }
}
