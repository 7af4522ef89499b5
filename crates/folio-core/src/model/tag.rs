use smallvec::SmallVec;
use std::mem;

/// An ordered set of tags, unique by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: SmallVec<[String; 4]>,
}

impl TagSet {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list of tags.
    pub fn parse(text: &str) -> Self {
        let mut tags = Self::new();
        for tag in text.split(',') {
            tags.insert(tag);
        }
        tags
    }

    /// Appends the trimmed tag unless it is blank or already present.
    /// Returns `true` if the tag has been added.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            false
        } else {
            self.tags.push(tag.to_owned());
            true
        }
    }

    /// Removes a tag by value. Returns `true` if it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let len = self.tags.len();
        self.tags.retain(|s| s != tag);
        self.tags.len() != len
    }

    /// Returns `true` if the tag is present.
    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|s| s == tag)
    }

    /// Returns the tags in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        self.tags.as_slice()
    }

    /// Returns an iterator over the tags.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|s| s.as_str())
    }

    /// Returns the number of tags.
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if there are no tags.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Joins the tags with `", "`.
    #[inline]
    pub fn join(&self) -> String {
        self.tags.join(", ")
    }
}

/// The free-text buffer of a tag input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInput {
    buffer: String,
}

impl TagInput {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the key pushes the buffer into the tag set.
    #[inline]
    pub fn is_commit_key(key: &str) -> bool {
        matches!(key, "Enter" | ",")
    }

    /// Replaces the buffer with the current text of the input.
    #[inline]
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Returns the buffered text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Handles a key press. For a commit key, the buffer is pushed into `tags`
    /// and cleared, and `true` is returned so the caller can suppress the
    /// default key action. Duplicates are silently dropped.
    ///
    /// A pasted buffer is split on `,`, so a tag never contains a comma.
    pub fn handle_key(&mut self, key: &str, tags: &mut TagSet) -> bool {
        if !Self::is_commit_key(key) {
            return false;
        }
        let text = mem::take(&mut self.buffer);
        for tag in text.split(',') {
            tags.insert(tag);
        }
        true
    }

    /// Clears the buffer.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{TagInput, TagSet};

    #[test]
    fn it_accumulates_unique_tags() {
        let mut tags = TagSet::new();
        let mut input = TagInput::new();

        input.set_text("react");
        assert!(input.handle_key("Enter", &mut tags));
        input.set_text("react");
        assert!(input.handle_key("Enter", &mut tags));
        assert_eq!(tags.as_slice(), ["react"]);

        input.set_text("go");
        assert!(input.handle_key(",", &mut tags));
        assert_eq!(tags.as_slice(), ["react", "go"]);
        assert_eq!(input.text(), "");

        input.set_text("rust");
        assert!(!input.handle_key("r", &mut tags));
        assert_eq!(input.text(), "rust");
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn it_splits_pasted_tags() {
        let mut tags = TagSet::new();
        let mut input = TagInput::new();
        input.set_text("c, c++,,rust");
        assert!(input.handle_key("Enter", &mut tags));
        assert_eq!(tags.as_slice(), ["c", "c++", "rust"]);
        assert_eq!(TagSet::parse(&tags.join()), tags);
    }

    #[test]
    fn it_removes_tags_by_value() {
        let mut tags = TagSet::parse("react, go, , react, rust");
        assert_eq!(tags.as_slice(), ["react", "go", "rust"]);
        assert!(tags.remove("go"));
        assert!(!tags.remove("go"));
        assert_eq!(tags.join(), "react, rust");
    }
}
