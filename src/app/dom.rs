use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::{
    tracker::{NavError, SectionId, Viewport},
    ui_state::{Theme, DARK_CLASS},
};

/// The live document; sections are looked up by their `id` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentViewport;

impl Viewport for DocumentViewport {
    fn scroll_to_section(&self, section: SectionId) -> Result<(), NavError> {
        let el = document()
            .get_element_by_id(section.as_str())
            .ok_or(NavError::MissingTarget(section))?;
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        Ok(())
    }
}

pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Fragment of the current URL without the leading `#`, if any.
pub fn location_hash() -> Option<String> {
    let hash = window().location().hash().ok()?;
    let id = hash.strip_prefix('#')?;
    (!id.is_empty()).then(|| id.to_string())
}

pub fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(err) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
    {
        log::warn!("couldn't apply {theme} theme: {err:?}");
    }
}

pub fn set_body_overflow(value: &str) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(err) = body.style().set_property("overflow", value) {
        log::warn!("couldn't set body overflow to {value}: {err:?}");
    }
}
