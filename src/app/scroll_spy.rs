use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_window,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use super::dom::{scroll_offset, DocumentViewport};
use crate::tracker::{
    NavError, ScrollSpySubscription, SectionId, SectionTracker, VisibilitySample,
    VISIBILITY_THRESHOLDS,
};

/// Reactive handle over the page's [`SectionTracker`].
#[derive(Debug, Clone, Copy)]
pub struct ScrollSpy {
    tracker: RwSignal<SectionTracker>,
    pub active: Memo<SectionId>,
    pub scrolled: Memo<bool>,
}

impl ScrollSpy {
    pub fn new() -> Self {
        let tracker = RwSignal::new(SectionTracker::new());
        Self {
            tracker,
            active: Memo::new(move |_| tracker.with(|t| t.active())),
            scrolled: Memo::new(move |_| tracker.with(|t| t.is_scrolled())),
        }
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active.get() == section
    }

    pub fn navigate(&self, section: SectionId) {
        self.navigate_with(|t| t.navigate_to(section, &DocumentViewport));
    }

    /// Runs a navigation against the tracker; failures leave it untouched.
    pub fn navigate_with<F>(&self, nav: F)
    where
        F: FnOnce(&mut SectionTracker) -> Result<(), NavError>,
    {
        self.tracker.maybe_update(|t| match nav(t) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("navigation skipped: {err}");
                false
            }
        });
    }

    /// Subscribes to window scrolling and to the visibility of every section.
    ///
    /// Everything is released when the calling component is torn down.
    pub fn observe(&self, sections: SectionRefs) {
        let tracker = self.tracker;
        let mut subscription = ScrollSpySubscription::new();

        let stop = use_event_listener(use_window(), ev::scroll, move |_| {
            let offset = scroll_offset();
            tracker.maybe_update(|t| {
                let was = t.is_scrolled();
                t.on_scroll_sample(offset) != was
            });
        });
        subscription.push(stop);

        for (section, target) in sections.0 {
            let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
                target,
                move |entries, _| {
                    let samples = entries.iter().map(|entry| VisibilitySample {
                        section,
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                    tracker.update(|t| {
                        t.on_viewport_sample(samples);
                    });
                },
                UseIntersectionObserverOptions::default().thresholds(VISIBILITY_THRESHOLDS.to_vec()),
            );
            subscription.push(stop);
        }

        on_cleanup(move || subscription.dispose());
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

/// One node ref per section, in document order.
#[derive(Clone, Copy)]
pub struct SectionRefs([(SectionId, NodeRef<html::Section>); SectionId::ALL.len()]);

impl SectionRefs {
    pub fn new() -> Self {
        Self(SectionId::ALL.map(|section| (section, NodeRef::new())))
    }

    pub fn get(&self, section: SectionId) -> NodeRef<html::Section> {
        self.0
            .iter()
            .find_map(|(s, r)| (*s == section).then_some(*r))
            .unwrap_or_else(NodeRef::new)
    }
}

impl Default for SectionRefs {
    fn default() -> Self {
        Self::new()
    }
}
