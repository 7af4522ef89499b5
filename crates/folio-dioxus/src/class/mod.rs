//! CSS classes for components.

use dioxus_core::{AttributeValue, prelude::*};
use smallvec::SmallVec;
use std::{borrow::Cow, fmt};

/// A list of CSS classes for dioxus components.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Class {
    /// A list of classes.
    classes: SmallVec<[&'static str; 4]>,
}

impl Class {
    /// Creates a new instance from whitespace-separated classes.
    #[inline]
    pub fn new(class: &'static str) -> Self {
        Self {
            classes: class.split_whitespace().collect(),
        }
    }

    /// Adds a class to the list, omitting any that are already present.
    #[inline]
    pub fn add(&mut self, class: &'static str) {
        if !(class.is_empty() || self.contains(class)) {
            self.classes.push(class);
        }
    }

    /// Returns a copy of `self` with the class added if the condition holds.
    #[inline]
    pub fn with_if(mut self, condition: bool, class: &'static str) -> Self {
        if condition {
            self.add(class);
        }
        self
    }

    /// Removes a class from the list.
    #[inline]
    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|s| s != &class)
    }

    /// Toggles a class in the list.
    #[inline]
    pub fn toggle(&mut self, class: &'static str) {
        if let Some(index) = self.classes.iter().position(|&s| s == class) {
            self.classes.remove(index);
        } else {
            self.add(class);
        }
    }

    /// Returns `true` if a given class has been added.
    #[inline]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|&s| s == class)
    }

    /// Returns `true` if the class list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Formats `self` as a `Cow<str>`.
    pub fn format(&self) -> Cow<'_, str> {
        match self.classes.as_slice() {
            [] => Cow::Borrowed(""),
            [class] => Cow::Borrowed(class),
            classes => Cow::Owned(classes.join(" ")),
        }
    }
}

impl From<&'static str> for Class {
    #[inline]
    fn from(class: &'static str) -> Self {
        Self::new(class)
    }
}

impl<const N: usize> From<[&'static str; N]> for Class {
    #[inline]
    fn from(classes: [&'static str; N]) -> Self {
        let mut class = Self::default();
        for s in classes {
            class.add(s);
        }
        class
    }
}

impl fmt::Display for Class {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl IntoAttributeValue for Class {
    #[inline]
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.format().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::Class;

    #[test]
    fn it_formats_class_lists() {
        let mut class = Class::new("button  is-small");
        assert_eq!(class.format(), "button is-small");

        class.add("is-link");
        class.add("button");
        class.toggle("is-small");
        assert_eq!(class.to_string(), "button is-link");

        let class = Class::from(["tag", "", "tag"]).with_if(true, "is-info");
        assert_eq!(class.format(), "tag is-info");
        assert!(Class::default().with_if(false, "x").is_empty());
    }
}
