//! Markup conventions and numeric constants shared by the site units.

// ── Selectors ───────────────────────────────────────────────────

/// Burger button that opens/closes the mobile navigation.
pub const BURGER_SELECTOR: &str = ".burger";

/// Parent links of dropdown menus.
pub const DROPDOWN_LINK_SELECTOR: &str = ".has-dropdown > a";

/// Dropdown containers that currently have their mobile submenu open.
pub const OPEN_DROPDOWN_SELECTOR: &str = ".has-dropdown.open-sub";

/// Footer year placeholders.
pub const YEAR_SELECTOR: &str = ".js-year";

/// Legacy single year placeholder; its existing text is kept as a prefix.
pub const LEGACY_YEAR_SELECTOR: &str = "#year";

/// Same-page anchor links.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Elements animated on first view.
pub const REVEAL_SELECTOR: &str = ".reveal";

pub const PREVIEW_DIALOG_SELECTOR: &str = "#newsPreviewDialog";
pub const PREVIEW_FRAME_SELECTOR: &str = "iframe";
pub const PREVIEW_TRIGGER_SELECTOR: &str = ".js-preview";
pub const PREVIEW_SOURCE_ATTR: &str = "data-src";

pub const COOKIE_BANNER_SELECTOR: &str = "#cookieBanner";

/// Optional JSON configuration block.
pub const CONFIG_SELECTOR: &str = "script#site-config";

// ── Classes ─────────────────────────────────────────────────────

pub const BURGER_ACTIVE_CLASS: &str = "active";
pub const NAV_OPEN_CLASS: &str = "open";
pub const BODY_LOCK_CLASS: &str = "no-scroll";
pub const SUBMENU_OPEN_CLASS: &str = "open-sub";
pub const REVEALED_CLASS: &str = "in-view";
pub const BANNER_SHOWN_CLASS: &str = "show";

pub const ARIA_EXPANDED: &str = "aria-expanded";

// ── Layout ──────────────────────────────────────────────────────

/// Breakpoint (CSS px) of the full page profile. Widths at or below it are mobile.
pub const FULL_BREAKPOINT_PX: f64 = 992.0;

/// Breakpoint (CSS px) of the compact page profile.
pub const COMPACT_BREAKPOINT_PX: f64 = 860.0;

/// Fraction of a reveal target that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

// ── Preview ─────────────────────────────────────────────────────

/// Viewer parameters appended to preview sources that carry no fragment.
pub const PREVIEW_DEFAULT_FRAGMENT: &str = "#view=FitH&toolbar=0";

pub const ESCAPE_KEY: &str = "Escape";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
