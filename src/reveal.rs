//! One-shot reveal animations for `.reveal` elements.
//!
//! With `IntersectionObserver` available, each element gains `in-view` the
//! first time it is at least 15% visible and is then unobserved. Without it,
//! everything is revealed up front so no content stays hidden.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::REVEALED_CLASS;
use crate::element::ElementLike;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPlan {
    /// No reveal targets on the page.
    Nothing,
    /// Watch targets and reveal them as they scroll into view.
    Observe,
    /// No observer support: reveal every target now.
    RevealAll,
}

impl RevealPlan {
    #[must_use]
    pub fn choose(target_count: usize, observer_supported: bool) -> Self {
        match (target_count, observer_supported) {
            (0, _) => Self::Nothing,
            (_, true) => Self::Observe,
            (_, false) => Self::RevealAll,
        }
    }
}

/// Handle one intersection entry. Returns `true` when the target was revealed
/// and should stop being observed.
pub fn on_intersection<E: ElementLike>(target: &E, is_intersecting: bool) -> bool {
    if !is_intersecting {
        return false;
    }
    target.add_class(REVEALED_CLASS);
    true
}

pub fn reveal_all<E: ElementLike>(targets: &[E]) {
    for target in targets {
        target.add_class(REVEALED_CLASS);
    }
}

#[cfg(feature = "hydrate")]
pub use bind::install;

#[cfg(feature = "hydrate")]
mod bind {
    use js_sys::{Array, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

    use super::{RevealPlan, on_intersection, reveal_all};
    use crate::consts::{REVEAL_SELECTOR, REVEAL_THRESHOLD};
    use crate::dom::qsa;
    use crate::error::SiteError;

    fn observer_supported(window: &Window) -> bool {
        match Reflect::has(window, &JsValue::from_str("IntersectionObserver")) {
            Ok(has) => has,
            Err(err) => {
                log::debug!("reveal: cannot probe IntersectionObserver: {err:?}");
                false
            }
        }
    }

    pub fn install(window: &Window, document: &Document) -> Result<(), SiteError> {
        let targets = qsa(document, REVEAL_SELECTOR);
        match RevealPlan::choose(targets.len(), observer_supported(window)) {
            RevealPlan::Nothing => Ok(()),
            RevealPlan::RevealAll => {
                log::debug!("reveal: no IntersectionObserver, revealing {} targets", targets.len());
                reveal_all(&targets);
                Ok(())
            }
            RevealPlan::Observe => {
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            let target = entry.target();
                            if on_intersection(&target, entry.is_intersecting()) {
                                observer.unobserve(&target);
                            }
                        }
                    },
                );
                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
                callback.forget();
                for target in &targets {
                    observer.observe(target);
                }
                Ok(())
            }
        }
    }
}
