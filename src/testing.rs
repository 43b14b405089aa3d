//! In-memory [`ElementLike`] used by unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::element::ElementLike;

#[derive(Debug, Default)]
pub struct FakeElement {
    classes: RefCell<BTreeSet<String>>,
    attrs: RefCell<BTreeMap<String, String>>,
    text: RefCell<String>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(class: &str) -> Self {
        let el = Self::new();
        el.add_class(class);
        el
    }

    pub fn with_text(text: &str) -> Self {
        let el = Self::new();
        el.set_text(text);
        el
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs.borrow().get(name).cloned()
    }

    pub fn class_count(&self) -> usize {
        self.classes.borrow().len()
    }
}

impl ElementLike for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        let mut classes = self.classes.borrow_mut();
        if classes.remove(class) {
            false
        } else {
            classes.insert(class.to_owned());
            true
        }
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.attrs.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.text.borrow_mut());
    }

    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}
