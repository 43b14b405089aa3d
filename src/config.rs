//! Page configuration.
//!
//! The site ships to pages built from two templates. The full template has
//! every unit enabled and a 992px breakpoint; the compact template only wires
//! the navigation and the preview dialog around a `#mainMenu` list with an
//! 860px breakpoint. A page picks its profile, and optionally overrides
//! individual fields, with a JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">{"profile": "compact"}</script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{COMPACT_BREAKPOINT_PX, FULL_BREAKPOINT_PX};
use crate::error::SiteError;

/// Which page template's defaults apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Full,
    Compact,
}

/// Resolved configuration for one page.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub profile: Profile,
    /// Widths at or below this value (CSS px) use the mobile layout.
    pub breakpoint: f64,
    /// Container that receives the `open` class.
    pub nav_selector: String,
    /// Links that close the menu when clicked.
    pub nav_link_selector: String,
    pub close_submenus_on_widen: bool,
    pub year: bool,
    pub smooth_scroll: bool,
    pub reveal: bool,
    pub preview: bool,
    pub cookie_banner: bool,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_profile(Profile::Full)
    }
}

impl SiteConfig {
    /// Defaults of the given page template.
    #[must_use]
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Full => Self {
                profile,
                breakpoint: FULL_BREAKPOINT_PX,
                nav_selector: "nav ul".to_owned(),
                nav_link_selector: "nav a".to_owned(),
                close_submenus_on_widen: true,
                year: true,
                smooth_scroll: true,
                reveal: true,
                preview: true,
                cookie_banner: true,
                log_level: log::Level::Info,
            },
            Profile::Compact => Self {
                profile,
                breakpoint: COMPACT_BREAKPOINT_PX,
                nav_selector: "#mainMenu".to_owned(),
                nav_link_selector: "#mainMenu a".to_owned(),
                close_submenus_on_widen: false,
                year: false,
                smooth_scroll: false,
                reveal: false,
                preview: true,
                cookie_banner: false,
                log_level: log::Level::Info,
            },
        }
    }

    /// Parse a page's JSON config block on top of its profile defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if the text is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let overrides: ConfigOverrides = serde_json::from_str(raw)?;
        Ok(overrides.resolve())
    }
}

/// Raw JSON shape: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverrides {
    profile: Option<Profile>,
    breakpoint: Option<f64>,
    nav_selector: Option<String>,
    nav_link_selector: Option<String>,
    close_submenus_on_widen: Option<bool>,
    year: Option<bool>,
    smooth_scroll: Option<bool>,
    reveal: Option<bool>,
    preview: Option<bool>,
    cookie_banner: Option<bool>,
    log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

impl ConfigOverrides {
    fn resolve(self) -> SiteConfig {
        let base = SiteConfig::for_profile(self.profile.unwrap_or_default());
        SiteConfig {
            profile: base.profile,
            breakpoint: self.breakpoint.unwrap_or(base.breakpoint),
            nav_selector: self.nav_selector.unwrap_or(base.nav_selector),
            nav_link_selector: self.nav_link_selector.unwrap_or(base.nav_link_selector),
            close_submenus_on_widen: self.close_submenus_on_widen.unwrap_or(base.close_submenus_on_widen),
            year: self.year.unwrap_or(base.year),
            smooth_scroll: self.smooth_scroll.unwrap_or(base.smooth_scroll),
            reveal: self.reveal.unwrap_or(base.reveal),
            preview: self.preview.unwrap_or(base.preview),
            cookie_banner: self.cookie_banner.unwrap_or(base.cookie_banner),
            log_level: self.log_level.map_or(base.log_level, log::Level::from),
        }
    }
}
