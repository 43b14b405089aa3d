//! Footer year stamping.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

use chrono::Datelike;

use crate::element::ElementLike;

/// The current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Replace the text of each `.js-year` placeholder with `year`.
pub fn stamp<E: ElementLike>(placeholders: &[E], year: i32) {
    let text = year.to_string();
    for placeholder in placeholders {
        placeholder.set_text(&text);
    }
}

/// Append `year` to the legacy `#year` placeholder, keeping its prefix text.
pub fn stamp_legacy<E: ElementLike>(placeholder: &E, year: i32) {
    let text = format!("{}{year}", placeholder.text());
    placeholder.set_text(&text);
}

#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document) {
    use crate::consts::{LEGACY_YEAR_SELECTOR, YEAR_SELECTOR};
    use crate::dom::{qs, qsa};

    let year = current_year();
    stamp(&qsa(document, YEAR_SELECTOR), year);
    if let Some(legacy) = qs(document, LEGACY_YEAR_SELECTOR) {
        stamp_legacy(&legacy, year);
    }
}
