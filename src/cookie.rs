//! Cookie banner reveal, called from the footer's "review my choices" link.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use crate::consts::BANNER_SHOWN_CLASS;
use crate::element::ElementLike;

/// Show the banner. Idempotent; a page without a banner is a no-op.
pub fn show_banner<E: ElementLike>(banner: Option<&E>) {
    if let Some(banner) = banner {
        banner.add_class(BANNER_SHOWN_CLASS);
    }
}

#[cfg(feature = "hydrate")]
pub use bind::{install, show_cookie_banner};

#[cfg(feature = "hydrate")]
mod bind {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::wasm_bindgen;
    use web_sys::Window;

    use super::show_banner;
    use crate::consts::COOKIE_BANNER_SELECTOR;
    use crate::dom::{document, qs};
    use crate::error::SiteError;

    /// `showCookieBanner()` as a module export.
    #[wasm_bindgen(js_name = showCookieBanner)]
    pub fn show_cookie_banner() {
        match document() {
            Ok(doc) => show_banner(qs(&doc, COOKIE_BANNER_SELECTOR).as_ref()),
            Err(err) => log::warn!("cookie banner: {err}"),
        }
    }

    /// Publish `window.showCookieBanner` for inline footer handlers.
    pub fn install(window: &Window) -> Result<(), SiteError> {
        let callback = Closure::<dyn FnMut()>::new(show_cookie_banner);
        Reflect::set(window, &JsValue::from_str("showCookieBanner"), callback.as_ref())?;
        callback.forget();
        Ok(())
    }
}
