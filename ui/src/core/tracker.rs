//! Scroll-position to active-section tracking.

use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::debug;

use super::sections::{default_section, SectionDescriptor, SECTIONS};
use super::viewport::{ScrollHandler, Viewport, ViewportHandle};

/// Added to the scroll offset before comparing against section tops; the
/// sticky navigation bar hides roughly this much of the viewport.
pub const LOOKAHEAD_BIAS: f64 = 100.0;

/// Id of the section the viewport is currently over.
///
/// Sections are scanned in page order and the last one whose top lies at or
/// above `scroll_offset + LOOKAHEAD_BIAS` wins. Sections without a node in
/// the document are skipped. Falls back to the first section.
pub fn locate(viewport: &dyn Viewport, sections: &[SectionDescriptor]) -> &'static str {
    let threshold = viewport.scroll_offset() + LOOKAHEAD_BIAS;
    let mut current = sections
        .first()
        .map(|section| section.id)
        .unwrap_or(default_section().id);

    for section in sections {
        let Some(top) = viewport.section_top(section.id) else {
            continue;
        };
        if top <= threshold {
            current = section.id;
        }
    }

    current
}

#[derive(Debug, Clone, Copy)]
enum TrackerEvent {
    Recompute,
}

/// Active-section state for the page.
///
/// Recomputes once after the first render and once per scroll event. The
/// scroll listener lives as long as the calling component; unmounting drops
/// the subscription and with it the listener.
///
/// The viewport defaults to the platform's, but an ancestor may provide a
/// `ViewportHandle` through context.
pub fn use_active_section() -> ReadOnlySignal<&'static str> {
    let viewport = use_hook(|| {
        try_consume_context::<ViewportHandle>().unwrap_or_else(ViewportHandle::platform)
    });
    let active = use_signal(|| default_section().id);

    let tracker = use_coroutine({
        let viewport = viewport.clone();
        move |mut rx: UnboundedReceiver<TrackerEvent>| {
            let viewport = viewport.clone();
            let mut active = active;
            async move {
                while let Some(TrackerEvent::Recompute) = rx.next().await {
                    let next = locate(&*viewport, &SECTIONS);
                    if *active.peek() != next {
                        debug!(section = next, "active section changed");
                        active.set(next);
                    }
                }
            }
        }
    });

    use_hook(|| {
        let tx = tracker.tx();
        let handler: ScrollHandler = Rc::new(move || {
            let _ = tx.unbounded_send(TrackerEvent::Recompute);
        });
        Rc::new(viewport.subscribe(handler))
    });

    use_effect(move || tracker.send(TrackerEvent::Recompute));

    ReadOnlySignal::new(active)
}
