//! The slice of the DOM element API the site units need.
//!
//! Units are written against [`ElementLike`] so their class and attribute
//! bookkeeping runs under plain `cargo test`; the `hydrate` build implements
//! it for `web_sys::Element`.

/// Class, attribute and text access on a page element.
pub trait ElementLike {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;
    fn set_attr(&self, name: &str, value: &str);
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    /// Whether `self` and `other` are the same node.
    fn is_same(&self, other: &Self) -> bool;
}

impl<T: ElementLike + ?Sized> ElementLike for &T {
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }

    fn add_class(&self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        (**self).toggle_class(class)
    }

    fn set_attr(&self, name: &str, value: &str) {
        (**self).set_attr(name, value);
    }

    fn text(&self) -> String {
        (**self).text()
    }

    fn set_text(&self, text: &str) {
        (**self).set_text(text);
    }

    fn is_same(&self, other: &Self) -> bool {
        (**self).is_same(other)
    }
}

#[cfg(feature = "hydrate")]
impl ElementLike for web_sys::Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.class_list().add_1(class) {
            log::warn!("add class {class}: {err:?}");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.class_list().remove_1(class) {
            log::warn!("remove class {class}: {err:?}");
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("toggle class {class}: {err:?}");
                self.has_class(class)
            }
        }
    }

    fn set_attr(&self, name: &str, value: &str) {
        if let Err(err) = self.set_attribute(name, value) {
            log::warn!("set attribute {name}: {err:?}");
        }
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn is_same(&self, other: &Self) -> bool {
        js_sys::Object::is(self, other)
    }
}
