use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vertical offset in pixels past which the navigation bar is considered scrolled.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Visible fractions of a section at which the browser reports a visibility change.
pub const VISIBILITY_THRESHOLDS: [f64; 3] = [0.2, 0.5, 0.8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl SectionId {
    /// Every section in document order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Certifications => "certifications",
            SectionId::Contact => "contact",
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| NavError::UnknownSection(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("section is not rendered: {0}")]
    MissingTarget(SectionId),
}

/// One visibility report for a tracked section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySample {
    pub section: SectionId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl VisibilitySample {
    pub fn visible(section: SectionId, ratio: f64) -> Self {
        Self {
            section,
            is_intersecting: true,
            ratio,
        }
    }

    pub fn hidden(section: SectionId) -> Self {
        Self {
            section,
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Whatever can bring a rendered section into view.
pub trait Viewport {
    /// Smoothly scrolls so the section's top edge meets the top of the viewport.
    fn scroll_to_section(&self, section: SectionId) -> Result<(), NavError>;
}

/// Keeps track of which section the reader is looking at.
///
/// Scrolling feeds [`SectionTracker::on_viewport_sample`] and
/// [`SectionTracker::on_scroll_sample`]; clicks go through
/// [`SectionTracker::navigate_to`], which activates its target without waiting
/// for the scroll to settle.
///
/// When several sections are visible at once the one with the largest visible
/// ratio is active, and equal ratios resolve to the section further down the
/// page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    active: SectionId,
    scrolled: bool,
    // latest ratio per section, `None` while it is out of view
    visibility: [Option<f64>; SectionId::ALL.len()],
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            active: SectionId::ALL[0],
            scrolled: false,
            visibility: [None; SectionId::ALL.len()],
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn on_viewport_sample<I>(&mut self, samples: I) -> SectionId
    where
        I: IntoIterator<Item = VisibilitySample>,
    {
        for sample in samples {
            self.visibility[sample.section.position()] =
                sample.is_intersecting.then_some(sample.ratio);
        }

        let mut best: Option<(SectionId, f64)> = None;
        for section in SectionId::ALL {
            let Some(ratio) = self.visibility[section.position()] else {
                continue;
            };
            match best {
                Some((_, best_ratio)) if best_ratio > ratio => {}
                _ => best = Some((section, ratio)),
            }
        }
        if let Some((section, _)) = best {
            self.active = section;
        }
        self.active
    }

    pub fn on_scroll_sample(&mut self, offset: f64) -> bool {
        self.scrolled = offset > SCROLL_THRESHOLD;
        self.scrolled
    }

    /// Scrolls to `section` and makes it active. Leaves the state untouched if
    /// the viewport can't find the section.
    pub fn navigate_to<V>(&mut self, section: SectionId, viewport: &V) -> Result<(), NavError>
    where
        V: Viewport + ?Sized,
    {
        viewport.scroll_to_section(section)?;
        self.active = section;
        Ok(())
    }

    pub fn navigate_to_id<V>(&mut self, id: &str, viewport: &V) -> Result<(), NavError>
    where
        V: Viewport + ?Sized,
    {
        let section = id.parse::<SectionId>()?;
        self.navigate_to(section, viewport)
    }
}

/// Release hooks for everything the scroll spy subscribed to on mount.
///
/// Disposing runs each hook once; dropping an undisposed subscription disposes it.
#[derive(Default)]
pub struct ScrollSpySubscription {
    releases: Vec<Box<dyn FnOnce() + Send + Sync>>,
}

impl ScrollSpySubscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, release: F)
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        self.releases.push(Box::new(release));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn dispose(&mut self) {
        for release in self.releases.drain(..) {
            release();
        }
    }
}

impl Drop for ScrollSpySubscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for ScrollSpySubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSpySubscription")
            .field("releases", &self.releases.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        collections::HashSet,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
    };

    struct FakeDocument {
        rendered: HashSet<SectionId>,
    }

    impl FakeDocument {
        fn with_all() -> Self {
            Self {
                rendered: SectionId::ALL.into_iter().collect(),
            }
        }

        fn without(missing: SectionId) -> Self {
            let mut doc = Self::with_all();
            doc.rendered.remove(&missing);
            doc
        }
    }

    impl Viewport for FakeDocument {
        fn scroll_to_section(&self, section: SectionId) -> Result<(), NavError> {
            if self.rendered.contains(&section) {
                Ok(())
            } else {
                Err(NavError::MissingTarget(section))
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let tracker = SectionTracker::new();
        assert_eq!(tracker.active(), SectionId::Home);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn test_navigate_to_every_section() {
        let doc = FakeDocument::with_all();
        let mut tracker = SectionTracker::new();
        for section in SectionId::ALL {
            tracker
                .navigate_to(section, &doc)
                .expect("rendered section should be reachable");
            assert_eq!(tracker.active(), section);
        }
    }

    #[test]
    fn test_navigate_to_missing_section_is_noop() {
        let doc = FakeDocument::without(SectionId::Certifications);
        let mut tracker = SectionTracker::new();
        tracker
            .navigate_to(SectionId::Skills, &doc)
            .expect("skills should be rendered");

        let res = tracker.navigate_to(SectionId::Certifications, &doc);
        assert_eq!(
            res,
            Err(NavError::MissingTarget(SectionId::Certifications))
        );
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn test_navigate_to_unknown_id() {
        let doc = FakeDocument::with_all();
        let mut tracker = SectionTracker::new();
        let res = tracker.navigate_to_id("blog", &doc);
        assert_eq!(res, Err(NavError::UnknownSection("blog".to_string())));
        assert_eq!(tracker.active(), SectionId::Home);

        tracker
            .navigate_to_id("contact", &doc)
            .expect("contact is a known section");
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn test_scroll_threshold_boundary() {
        let mut tracker = SectionTracker::new();
        assert!(!tracker.on_scroll_sample(0.0));
        assert!(!tracker.on_scroll_sample(50.0));
        assert!(tracker.on_scroll_sample(51.0));
        assert!(tracker.is_scrolled());
        assert!(!tracker.on_scroll_sample(12.5));
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn test_later_section_wins_equal_ratio() {
        let mut tracker = SectionTracker::new();
        let active = tracker.on_viewport_sample([
            VisibilitySample::visible(SectionId::About, 0.5),
            VisibilitySample::visible(SectionId::Skills, 0.5),
        ]);
        assert_eq!(active, SectionId::Skills);
    }

    #[test]
    fn test_higher_ratio_wins_regardless_of_order() {
        let mut tracker = SectionTracker::new();
        tracker.on_viewport_sample([
            VisibilitySample::visible(SectionId::About, 0.8),
            VisibilitySample::visible(SectionId::Skills, 0.2),
        ]);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_single_visible_section() {
        let mut tracker = SectionTracker::new();
        tracker.on_viewport_sample([
            VisibilitySample::hidden(SectionId::Home),
            VisibilitySample::hidden(SectionId::Skills),
            VisibilitySample::visible(SectionId::Projects, 0.2),
        ]);
        assert_eq!(tracker.active(), SectionId::Projects);
    }

    #[test]
    fn test_nothing_visible_keeps_active() {
        let doc = FakeDocument::with_all();
        let mut tracker = SectionTracker::new();
        tracker
            .navigate_to(SectionId::About, &doc)
            .expect("about should be rendered");
        tracker.on_viewport_sample([VisibilitySample::hidden(SectionId::Home)]);
        assert_eq!(tracker.active(), SectionId::About);

        tracker.on_viewport_sample(std::iter::empty());
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_hidden_section_stops_competing() {
        let mut tracker = SectionTracker::new();
        tracker.on_viewport_sample([
            VisibilitySample::visible(SectionId::About, 0.8),
            VisibilitySample::visible(SectionId::Skills, 0.2),
        ]);
        assert_eq!(tracker.active(), SectionId::About);

        // about scrolls out, skills hasn't crossed a new threshold yet
        tracker.on_viewport_sample([VisibilitySample::hidden(SectionId::About)]);
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn test_observer_overrides_optimistic_navigation() {
        let doc = FakeDocument::with_all();
        let mut tracker = SectionTracker::new();
        tracker
            .navigate_to(SectionId::Contact, &doc)
            .expect("contact should be rendered");
        assert_eq!(tracker.active(), SectionId::Contact);

        tracker.on_viewport_sample([VisibilitySample::visible(SectionId::Certifications, 0.5)]);
        assert_eq!(tracker.active(), SectionId::Certifications);
    }

    #[test]
    fn test_section_id_parsing() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
            assert_eq!(section.to_string(), section.as_str());
        }
        assert!("Home".parse::<SectionId>().is_err());
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_subscription_dispose_runs_each_release_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut sub = ScrollSpySubscription::new();
        for _ in 0..3 {
            let calls = calls.clone();
            sub.push(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(sub.len(), 3);

        sub.dispose();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(sub.is_empty());

        sub.dispose();
        drop(sub);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_subscription_released_on_drop() {
        let calls = Arc::new(AtomicUsize::new(0));
        {
            let mut sub = ScrollSpySubscription::new();
            let calls = calls.clone();
            sub.push(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
