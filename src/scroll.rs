//! Smooth scrolling for same-page anchor links.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::element::ElementLike;
use crate::nav::Menu;

/// How a target is brought into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Animated, aligned to the block start.
    Smooth,
    /// Jump, for users who asked for reduced motion.
    Instant,
}

impl ScrollMode {
    #[must_use]
    pub fn from_reduced_motion(prefers_reduced: bool) -> Self {
        if prefers_reduced { Self::Instant } else { Self::Smooth }
    }
}

/// The selector to resolve for an anchor's `href`, if the click should be
/// handled at all. A bare `#` keeps its default behavior.
#[must_use]
pub fn anchor_selector(href: Option<&str>) -> Option<&str> {
    match href {
        Some(href) if href.starts_with('#') && href != "#" => Some(href),
        _ => None,
    }
}

/// Handle a click on a same-page anchor.
///
/// Resolves the href to a target, scrolls to it and closes the mobile menu.
/// Returns `true` when the click was handled and the default jump must be
/// prevented; a bare `#` or an unknown target leaves everything untouched.
pub fn on_anchor_click<T, E: ElementLike>(
    href: Option<&str>,
    resolve: impl FnOnce(&str) -> Option<T>,
    scroll: impl FnOnce(&T),
    menu: &Menu<E>,
) -> bool {
    let Some(target) = anchor_selector(href).and_then(resolve) else {
        return false;
    };
    scroll(&target);
    menu.close();
    true
}

#[cfg(feature = "hydrate")]
pub use bind::install;

#[cfg(feature = "hydrate")]
mod bind {
    use std::rc::Rc;

    use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

    use super::{ScrollMode, on_anchor_click};
    use crate::consts::{ANCHOR_SELECTOR, REDUCED_MOTION_QUERY};
    use crate::dom::{media_matches, on, qs, qsa};
    use crate::error::SiteError;
    use crate::nav::Nav;

    fn scroll_to(target: &Element, mode: ScrollMode) {
        match mode {
            ScrollMode::Instant => target.scroll_into_view(),
            ScrollMode::Smooth => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }

    /// Intercept internal anchor clicks, scroll, then close the mobile menu.
    pub fn install(window: &Window, document: &Document, nav: &Rc<Nav<Element>>) -> Result<(), SiteError> {
        let mode = ScrollMode::from_reduced_motion(media_matches(window, REDUCED_MOTION_QUERY));

        for link in qsa(document, ANCHOR_SELECTOR) {
            let nav = Rc::clone(nav);
            let doc = document.clone();
            let href = link.get_attribute("href");
            on(&link, "click", move |event: MouseEvent| {
                let handled = on_anchor_click(
                    href.as_deref(),
                    |selector| qs(&doc, selector),
                    |target| scroll_to(target, mode),
                    &nav.menu,
                );
                if handled {
                    event.prevent_default();
                }
            })?;
        }
        Ok(())
    }
}
