//! Interactivity for the HydrauPro marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by every page. It wires
//! page markup to behavior through DOM event listeners: the responsive menu,
//! dropdown submenus, smooth anchor scrolling, reveal animations, the news PDF
//! preview dialog, the footer year and the cookie banner hook.
//!
//! Browser bindings sit behind the `hydrate` feature. Everything else is
//! plain Rust over [`element::ElementLike`] and runs under `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Burger menu, link auto-close, breakpoint watch, mobile submenus |
//! | [`year`] | Footer year placeholders |
//! | [`scroll`] | Smooth scrolling for same-page anchors |
//! | [`reveal`] | One-shot `in-view` reveal on first intersection |
//! | [`preview`] | PDF preview dialog |
//! | [`cookie`] | `showCookieBanner()` |
//! | [`config`] | Page profiles and JSON overrides |
//! | [`element`] | DOM element seam |
//! | [`consts`] | Selectors, classes and thresholds |

pub mod config;
pub mod consts;
pub mod cookie;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod element;
pub mod error;
pub mod nav;
pub mod preview;
pub mod reveal;
pub mod scroll;
pub mod year;

#[cfg(test)]
mod testing;

#[cfg(feature = "hydrate")]
pub use boot::start;

#[cfg(feature = "hydrate")]
mod boot {
    use wasm_bindgen::prelude::wasm_bindgen;
    use web_sys::Document;

    use crate::config::SiteConfig;
    use crate::consts::CONFIG_SELECTOR;
    use crate::dom::{document, qs, window};
    use crate::error::SiteError;
    use crate::{cookie, nav, preview, reveal, scroll, year};

    fn read_config(document: &Document) -> Result<SiteConfig, SiteError> {
        let Some(block) = qs(document, CONFIG_SELECTOR) else {
            return Ok(SiteConfig::default());
        };
        SiteConfig::from_json(&block.text_content().unwrap_or_default())
    }

    fn report(unit: &str, result: Result<(), SiteError>) {
        if let Err(err) = result {
            log::warn!("{unit}: {err}");
        }
    }

    /// Module entry point: install every unit enabled for this page.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();

        let (window, document) = match (window(), document()) {
            (Ok(window), Ok(document)) => (window, document),
            (Err(err), _) | (_, Err(err)) => {
                web_sys::console::error_1(&err.to_string().into());
                return;
            }
        };

        let parsed = read_config(&document);
        let config = parsed.as_ref().map_or_else(|_| SiteConfig::default(), Clone::clone);
        if let Err(err) = console_log::init_with_level(config.log_level) {
            web_sys::console::warn_1(&err.to_string().into());
        }
        if let Err(err) = parsed {
            log::warn!("{err}; using default profile");
        }
        log::info!("site: {:?} profile, breakpoint {}px", config.profile, config.breakpoint);

        let nav = match nav::install(&window, &document, &config) {
            Ok(nav) => Some(nav),
            Err(err) => {
                log::warn!("nav: {err}");
                None
            }
        };

        if config.year {
            year::install(&document);
        }
        if config.smooth_scroll {
            if let Some(nav) = &nav {
                report("scroll", scroll::install(&window, &document, nav));
            }
        }
        if config.reveal {
            report("reveal", reveal::install(&window, &document));
        }
        if config.preview {
            report("preview", preview::install(&window, &document));
        }
        if config.cookie_banner {
            report("cookie", cookie::install(&window));
        }
    }
}
