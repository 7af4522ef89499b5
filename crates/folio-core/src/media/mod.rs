//! Display handles for user-picked files.
//!
//! A [`MediaHandle`] is acquired from the [`MediaRegistry`] when a file is picked
//! in a form. Records and drafts hold clones of the handle; the registry entry
//! is released as soon as the last clone is dropped, which happens when the
//! owning record is removed, replaced by an edit, or discarded by a cancel.

use base64::{Engine, engine::general_purpose::STANDARD};
use parking_lot::RwLock;
use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Weak},
};
use uuid::Uuid;

mod file;

pub use file::MediaFile;

/// Shared storage of live media entries.
type Entries = RwLock<HashMap<Uuid, MediaEntry>>;

/// A stored media entry.
#[derive(Debug)]
struct MediaEntry {
    /// The original file name.
    file_name: String,
    /// The displayable `data:` URL.
    url: String,
}

/// A registry of media files referenced by records.
#[derive(Debug, Default, Clone)]
pub struct MediaRegistry {
    /// Live entries keyed by handle id.
    entries: Arc<Entries>,
}

impl MediaRegistry {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the file and returns a handle to it.
    pub fn acquire(&self, file: MediaFile) -> MediaHandle {
        let id = Uuid::now_v7();
        let url = format!(
            "data:{};base64,{}",
            file.content_type(),
            STANDARD.encode(file.bytes())
        );
        let file_name = file.into_file_name();
        tracing::debug!(media_id = %id, file_name = file_name.as_str(), "acquire a media handle");
        self.entries
            .write()
            .insert(id, MediaEntry { file_name, url });
        MediaHandle {
            inner: Arc::new(HandleInner {
                id,
                registry: Arc::downgrade(&self.entries),
            }),
        }
    }

    /// Returns the displayable URL for the handle.
    pub fn display_url(&self, handle: &MediaHandle) -> Option<String> {
        self.entries
            .read()
            .get(&handle.id())
            .map(|entry| entry.url.clone())
    }

    /// Returns the original file name for the handle.
    pub fn file_name(&self, handle: &MediaHandle) -> Option<String> {
        self.entries
            .read()
            .get(&handle.id())
            .map(|entry| entry.file_name.clone())
    }

    /// Returns the number of live handles.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.entries.read().len()
    }
}

impl PartialEq for MediaRegistry {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

/// A reference-counted handle to a media entry.
#[derive(Clone)]
pub struct MediaHandle {
    inner: Arc<HandleInner>,
}

impl MediaHandle {
    /// Returns the handle id.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.inner.id
    }
}

impl fmt::Debug for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MediaHandle").field(&self.inner.id).finish()
    }
}

impl PartialEq for MediaHandle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for MediaHandle {}

/// The shared part of a handle; releasing happens when it is dropped.
struct HandleInner {
    id: Uuid,
    registry: Weak<Entries>,
}

impl Drop for HandleInner {
    fn drop(&mut self) {
        if let Some(entries) = self.registry.upgrade() {
            if entries.write().remove(&self.id).is_some() {
                tracing::debug!(media_id = %self.id, "release a media handle");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MediaFile, MediaRegistry};

    #[test]
    fn it_builds_data_urls() {
        let registry = MediaRegistry::new();
        let handle = registry.acquire(MediaFile::new("logo.png", vec![1, 2, 3]));
        assert_eq!(
            registry.display_url(&handle).as_deref(),
            Some("data:image/png;base64,AQID")
        );
        assert_eq!(registry.file_name(&handle).as_deref(), Some("logo.png"));
    }

    #[test]
    fn it_releases_on_last_drop() {
        let registry = MediaRegistry::new();
        let handle = registry.acquire(MediaFile::new("a.jpg", vec![0]));
        let copy = handle.clone();
        assert_eq!(copy, handle);
        assert_eq!(registry.live_count(), 1);

        drop(handle);
        assert_eq!(registry.live_count(), 1);
        assert!(registry.display_url(&copy).is_some());

        drop(copy);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn it_outlives_the_registry() {
        let registry = MediaRegistry::new();
        let handle = registry.acquire(MediaFile::new("a.gif", Vec::new()));
        drop(registry);
        drop(handle);
    }
}
