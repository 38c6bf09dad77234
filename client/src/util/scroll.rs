//! In-page anchor scrolling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id named by a location hash (`"#home"` or `"home"`), if any.
#[must_use]
pub fn hash_target(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}

/// Smooth-scroll the element with `id` to the top of the viewport.
#[cfg(feature = "hydrate")]
pub fn scroll_to_id(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll to whatever the current location hash names.
#[cfg(feature = "hydrate")]
pub fn scroll_to_location_hash() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(hash) = window.location().hash() else {
        return;
    };
    if let Some(id) = hash_target(&hash) {
        scroll_to_id(id);
    }
}

/// Scroll to `id` and record it in the location hash.
#[cfg(feature = "hydrate")]
pub fn go_to_hash(id: &str) {
    scroll_to_id(id);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(id) {
            log::warn!("set hash failed: {e:?}");
        }
    }
}
