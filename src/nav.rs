//! Responsive navigation: burger menu, link auto-close, breakpoint watch and
//! mobile submenus.
//!
//! DESIGN
//! ======
//! The open/closed state lives in the DOM as class membership, so `Menu`
//! reads it back from the nav container instead of caching a flag. The only
//! Rust-side state is the last viewport width, kept by `BreakpointWatch` to
//! detect a narrow-to-wide crossing.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::cell::Cell;

use crate::consts::{ARIA_EXPANDED, BODY_LOCK_CLASS, BURGER_ACTIVE_CLASS, NAV_OPEN_CLASS, SUBMENU_OPEN_CLASS};
use crate::element::ElementLike;

/// The burger, the nav container and the body. Any of them may be absent.
#[derive(Debug)]
pub struct Menu<E> {
    pub burger: Option<E>,
    pub nav: Option<E>,
    pub body: Option<E>,
}

impl<E: ElementLike> Menu<E> {
    #[must_use]
    pub fn new(burger: Option<E>, nav: Option<E>, body: Option<E>) -> Self {
        Self { burger, nav, body }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.nav.as_ref().is_some_and(|nav| nav.has_class(NAV_OPEN_CLASS))
    }

    pub fn open(&self) {
        if let Some(burger) = &self.burger {
            burger.add_class(BURGER_ACTIVE_CLASS);
        }
        if let Some(nav) = &self.nav {
            nav.add_class(NAV_OPEN_CLASS);
        }
        if let Some(body) = &self.body {
            body.add_class(BODY_LOCK_CLASS);
        }
        if let Some(burger) = &self.burger {
            burger.set_attr(ARIA_EXPANDED, "true");
        }
    }

    pub fn close(&self) {
        if let Some(burger) = &self.burger {
            burger.remove_class(BURGER_ACTIVE_CLASS);
        }
        if let Some(nav) = &self.nav {
            nav.remove_class(NAV_OPEN_CLASS);
        }
        if let Some(body) = &self.body {
            body.remove_class(BODY_LOCK_CLASS);
        }
        if let Some(burger) = &self.burger {
            burger.set_attr(ARIA_EXPANDED, "false");
        }
    }

    /// Burger click. Does nothing when there is no nav container to open.
    pub fn toggle(&self) {
        if self.nav.is_none() {
            return;
        }
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }
}

/// Tracks viewport width across resize events.
#[derive(Debug, Clone, Copy)]
pub struct BreakpointWatch {
    breakpoint: f64,
    last_width: f64,
}

impl BreakpointWatch {
    #[must_use]
    pub fn new(breakpoint: f64, initial_width: f64) -> Self {
        Self { breakpoint, last_width: initial_width }
    }

    /// Whether `width` uses the mobile layout.
    #[must_use]
    pub fn is_narrow(&self, width: f64) -> bool {
        width <= self.breakpoint
    }

    /// Record a resize. Returns `true` only when the viewport went from
    /// narrow (at or below the breakpoint) to wide.
    pub fn observe(&mut self, width: f64) -> bool {
        let widened = !self.is_narrow(width) && self.is_narrow(self.last_width);
        self.last_width = width;
        widened
    }
}

/// Flip the mobile submenu of one dropdown container.
pub fn toggle_submenu<E: ElementLike>(dropdown: &E) -> bool {
    dropdown.toggle_class(SUBMENU_OPEN_CLASS)
}

/// Collapse every open mobile submenu.
pub fn close_submenus<E: ElementLike>(dropdowns: &[E]) {
    for dropdown in dropdowns {
        dropdown.remove_class(SUBMENU_OPEN_CLASS);
    }
}

/// Navigation controller shared by every listener on the page.
///
/// Each DOM listener forwards to one `on_*` method; the browser side only
/// supplies widths, elements and `preventDefault`.
#[derive(Debug)]
pub struct Nav<E> {
    pub menu: Menu<E>,
    watch: Cell<BreakpointWatch>,
    close_submenus_on_widen: bool,
}

impl<E: ElementLike> Nav<E> {
    #[must_use]
    pub fn new(menu: Menu<E>, watch: BreakpointWatch, close_submenus_on_widen: bool) -> Self {
        Self { menu, watch: Cell::new(watch), close_submenus_on_widen }
    }

    pub fn on_burger_click(&self) {
        self.menu.toggle();
    }

    /// Any link inside the navigation closes the menu, open or not.
    pub fn on_link_click(&self) {
        self.menu.close();
    }

    /// Viewport resized to `width`. `open_dropdowns` is only queried when
    /// the viewport crossed to the desktop layout.
    pub fn on_resize<D: ElementLike>(&self, width: f64, open_dropdowns: impl FnOnce() -> Vec<D>) {
        let mut watch = self.watch.get();
        let widened = watch.observe(width);
        self.watch.set(watch);
        if !widened {
            return;
        }
        self.menu.close();
        if self.close_submenus_on_widen {
            close_submenus(&open_dropdowns());
        }
    }

    /// Click on a dropdown's parent link. Returns `true` when the click was
    /// taken over and default navigation must be prevented.
    pub fn on_dropdown_click(&self, width: f64, dropdown: Option<&E>) -> bool {
        if !self.watch.get().is_narrow(width) {
            return false;
        }
        if let Some(dropdown) = dropdown {
            toggle_submenu(dropdown);
        }
        true
    }
}

#[cfg(feature = "hydrate")]
pub use bind::install;

#[cfg(feature = "hydrate")]
mod bind {
    use std::rc::Rc;

    use web_sys::{Document, Element, Event, MouseEvent, Window};

    use super::{BreakpointWatch, Menu, Nav};
    use crate::config::SiteConfig;
    use crate::consts::{BURGER_SELECTOR, DROPDOWN_LINK_SELECTOR, OPEN_DROPDOWN_SELECTOR};
    use crate::dom::{inner_width, on, qs, qsa};
    use crate::error::SiteError;

    /// Wire the burger, nav links, resize watch and dropdown toggles.
    ///
    /// Returns the shared controller so other units can close the menu.
    pub fn install(window: &Window, document: &Document, config: &SiteConfig) -> Result<Rc<Nav<Element>>, SiteError> {
        let menu = Menu::new(
            qs(document, BURGER_SELECTOR),
            qs(document, &config.nav_selector),
            document.body().map(Element::from),
        );
        if menu.nav.is_none() {
            log::debug!("nav: no element matches {}", config.nav_selector);
        }
        let watch = BreakpointWatch::new(config.breakpoint, inner_width(window));
        let nav = Rc::new(Nav::new(menu, watch, config.close_submenus_on_widen));

        if let Some(burger) = &nav.menu.burger {
            let nav = Rc::clone(&nav);
            on(burger, "click", move |_: MouseEvent| nav.on_burger_click())?;
        }

        for link in qsa(document, &config.nav_link_selector) {
            let nav = Rc::clone(&nav);
            on(&link, "click", move |_: MouseEvent| nav.on_link_click())?;
        }

        {
            let nav = Rc::clone(&nav);
            let resized = window.clone();
            let doc = document.clone();
            on(window, "resize", move |_: Event| {
                nav.on_resize(inner_width(&resized), || qsa(&doc, OPEN_DROPDOWN_SELECTOR));
            })?;
        }

        for link in qsa(document, DROPDOWN_LINK_SELECTOR) {
            let nav = Rc::clone(&nav);
            let clicked = window.clone();
            let parent = link.parent_element();
            on(&link, "click", move |event: MouseEvent| {
                if nav.on_dropdown_click(inner_width(&clicked), parent.as_ref()) {
                    event.prevent_default();
                }
            })?;
        }

        Ok(nav)
    }
}
