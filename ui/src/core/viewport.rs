//! Seam between the tracker and whatever hosts the rendered page.
//!
//! The browser build reads offsets from the DOM (`platform::DomViewport`);
//! native builds render once and never scroll (`StaticViewport`).

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Callback invoked once per scroll event.
pub type ScrollHandler = Rc<dyn Fn()>;

pub trait Viewport {
    /// Current vertical scroll offset from the document top.
    fn scroll_offset(&self) -> f64;

    /// Top offset of the element with the given id, or `None` when the node
    /// is not (yet) in the document.
    fn section_top(&self, id: &str) -> Option<f64>;

    /// Register `handler` for scroll events until the returned subscription
    /// is dropped.
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription;
}

/// Live scroll listener registration. Dropping it detaches the listener.
pub struct ScrollSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A subscription with nothing to detach (hosts without scroll events).
    pub fn inert() -> Self {
        Self { detach: None }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// Cloneable handle so a viewport can travel through Dioxus context.
#[derive(Clone)]
pub struct ViewportHandle(Rc<dyn Viewport>);

impl ViewportHandle {
    pub fn new(viewport: impl Viewport + 'static) -> Self {
        Self(Rc::new(viewport))
    }

    /// The viewport of the current build target.
    pub fn platform() -> Self {
        super::platform::viewport()
    }
}

impl Deref for ViewportHandle {
    type Target = dyn Viewport;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for ViewportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ViewportHandle(..)")
    }
}

/// A page rendered once at the top: no offsets, no scroll events.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticViewport;

impl Viewport for StaticViewport {
    fn scroll_offset(&self) -> f64 {
        0.0
    }

    fn section_top(&self, _id: &str) -> Option<f64> {
        None
    }

    fn subscribe(&self, _handler: ScrollHandler) -> ScrollSubscription {
        ScrollSubscription::inert()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use super::{ScrollHandler, ScrollSubscription, Viewport};

    type Listeners = Rc<RefCell<Vec<(u64, ScrollHandler)>>>;

    /// In-memory host whose layout and scroll position tests drive directly.
    #[derive(Default)]
    pub(crate) struct ScriptedViewport {
        offset: Cell<f64>,
        tops: RefCell<HashMap<&'static str, f64>>,
        listeners: Listeners,
        next_id: Cell<u64>,
    }

    impl ScriptedViewport {
        pub(crate) fn with_tops(tops: &[(&'static str, f64)]) -> Self {
            let viewport = Self::default();
            viewport.tops.borrow_mut().extend(tops.iter().copied());
            viewport
        }

        pub(crate) fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
            self.dispatch();
        }

        /// Fire a scroll event at every attached listener.
        pub(crate) fn dispatch(&self) {
            let handlers: Vec<ScrollHandler> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, handler)| handler.clone())
                .collect();
            for handler in handlers {
                handler();
            }
        }

        pub(crate) fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl Viewport for ScriptedViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }

        fn section_top(&self, id: &str) -> Option<f64> {
            self.tops.borrow().get(id).copied()
        }

        fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, handler));

            let listeners = self.listeners.clone();
            ScrollSubscription::new(move || {
                listeners.borrow_mut().retain(|(listener, _)| *listener != id);
            })
        }
    }

    /// Lets a test keep driving the viewport after handing it to a component.
    impl Viewport for Rc<ScriptedViewport> {
        fn scroll_offset(&self) -> f64 {
            (**self).scroll_offset()
        }

        fn section_top(&self, id: &str) -> Option<f64> {
            (**self).section_top(id)
        }

        fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
            (**self).subscribe(handler)
        }
    }

    /// Run queued tasks and effects and re-render dirty scopes until the
    /// dom is idle.
    pub(crate) fn settle(dom: &mut VirtualDom) {
        for _ in 0..16 {
            dom.process_events();
            dom.render_immediate(&mut NoOpMutations);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::testing::ScriptedViewport;
    use super::*;

    #[test]
    fn static_viewport_never_reports_sections() {
        let viewport = StaticViewport;
        assert_eq!(viewport.scroll_offset(), 0.0);
        assert!(viewport.section_top("about").is_none());
    }

    #[test]
    fn dropping_the_subscription_detaches_the_listener() {
        let viewport = ScriptedViewport::default();
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        let subscription = viewport.subscribe(Rc::new(move || counter.set(counter.get() + 1)));
        viewport.dispatch();
        assert_eq!(calls.get(), 1);

        drop(subscription);
        assert_eq!(viewport.listener_count(), 0);
        viewport.dispatch();
        viewport.scroll_to(1_000.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn inert_subscription_drops_quietly() {
        let subscription = ScrollSubscription::inert();
        assert_eq!(format!("{subscription:?}"), "ScrollSubscription { attached: false }");
        drop(subscription);
    }
}
