//! PDF preview dialog for the news page.
//!
//! Any `.js-preview` trigger with a `data-src` opens `#newsPreviewDialog`
//! with its `iframe` pointed at the document. The dialog closes on a
//! backdrop click or on Escape.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::borrow::Cow;

use crate::consts::{ESCAPE_KEY, PREVIEW_DEFAULT_FRAGMENT};
use crate::element::ElementLike;

/// URL shown in the frame. Sources that already carry a fragment are left
/// alone; others get the minimal viewer parameters.
#[must_use]
pub fn preview_url(src: &str) -> Cow<'_, str> {
    if src.contains('#') {
        Cow::Borrowed(src)
    } else {
        Cow::Owned(format!("{src}{PREVIEW_DEFAULT_FRAGMENT}"))
    }
}

/// URL to open for a trigger's `data-src`, or `None` when the trigger has
/// nothing to show.
#[must_use]
pub fn trigger_url(data_src: Option<&str>) -> Option<Cow<'_, str>> {
    data_src.filter(|src| !src.is_empty()).map(preview_url)
}

/// A click closes the dialog only when it lands on the dialog element itself,
/// i.e. on the backdrop around its content. Clicks on content, or on targets
/// that are not elements, keep it open.
#[must_use]
pub fn closes_on_click<E: ElementLike>(target: Option<&E>, dialog: &E) -> bool {
    target.is_some_and(|target| target.is_same(dialog))
}

#[must_use]
pub fn closes_on_key(key: &str, dialog_open: bool) -> bool {
    dialog_open && key == ESCAPE_KEY
}

#[cfg(feature = "hydrate")]
pub use bind::install;

#[cfg(feature = "hydrate")]
mod bind {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlDialogElement, HtmlIFrameElement, KeyboardEvent, MouseEvent, Window};

    use super::{closes_on_click, closes_on_key, trigger_url};
    use crate::consts::{PREVIEW_DIALOG_SELECTOR, PREVIEW_FRAME_SELECTOR, PREVIEW_SOURCE_ATTR, PREVIEW_TRIGGER_SELECTOR};
    use crate::dom::{on, qs};
    use crate::error::SiteError;

    fn trigger_of(event: &MouseEvent) -> Option<Element> {
        let target = event.target()?;
        match target.dyn_ref::<Element>()?.closest(PREVIEW_TRIGGER_SELECTOR) {
            Ok(found) => found,
            Err(err) => {
                log::debug!("preview: closest() rejected: {err:?}");
                None
            }
        }
    }

    pub fn install(window: &Window, document: &Document) -> Result<(), SiteError> {
        let Some(dialog) = qs(document, PREVIEW_DIALOG_SELECTOR).and_then(|el| el.dyn_ref::<HtmlDialogElement>().cloned()) else {
            log::debug!("preview: no {PREVIEW_DIALOG_SELECTOR}");
            return Ok(());
        };
        let scope: &Element = &dialog;
        let Some(frame) = qs(scope, PREVIEW_FRAME_SELECTOR).and_then(|el| el.dyn_ref::<HtmlIFrameElement>().cloned()) else {
            log::debug!("preview: dialog has no frame");
            return Ok(());
        };

        {
            let dialog = dialog.clone();
            on(document, "click", move |event: MouseEvent| {
                let Some(trigger) = trigger_of(&event) else {
                    return;
                };
                let src = trigger.get_attribute(PREVIEW_SOURCE_ATTR);
                let Some(url) = trigger_url(src.as_deref()) else {
                    return;
                };
                frame.set_src(&url);
                if let Err(err) = dialog.show_modal() {
                    log::warn!("preview: showModal failed: {err:?}");
                }
            })?;
        }

        {
            let backdrop = dialog.clone();
            on(&dialog, "click", move |event: MouseEvent| {
                let target = event.target().and_then(|t| t.dyn_ref::<Element>().cloned());
                let dialog_el: &Element = &backdrop;
                if closes_on_click(target.as_ref(), dialog_el) {
                    backdrop.close();
                }
            })?;
        }

        on(window, "keydown", move |event: KeyboardEvent| {
            if closes_on_key(&event.key(), dialog.open()) {
                dialog.close();
            }
        })?;

        Ok(())
    }
}
