/// Values of an identity push which have changed since the last one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IdentityUpdate {
    /// The new display name, if changed.
    pub name: Option<String>,
    /// The new image reference, if changed.
    pub image: Option<String>,
}

impl IdentityUpdate {
    /// Returns `true` if nothing has changed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none()
    }
}

/// Remembers the last identity pushed to the parent so that renders only
/// notify on mount and on real changes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IdentityPush {
    name: Option<String>,
    image: Option<String>,
}

impl IdentityPush {
    /// Creates a new instance which has not pushed anything yet.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes the current display name and image, returning the values
    /// which differ from the previous observation.
    pub fn observe(&mut self, name: &str, image: &str) -> IdentityUpdate {
        let mut update = IdentityUpdate::default();
        if self.name.as_deref() != Some(name) {
            self.name = Some(name.to_owned());
            update.name = Some(name.to_owned());
        }
        if self.image.as_deref() != Some(image) {
            self.image = Some(image.to_owned());
            update.image = Some(image.to_owned());
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityPush;
    use crate::profile::ProfileHeader;

    #[test]
    fn it_pushes_on_mount() {
        let header = ProfileHeader::default();
        let mut push = IdentityPush::new();
        let update = push.observe(&header.display_name(), header.image());
        assert_eq!(update.name.as_deref(), Some("First Name Last Name"));
        assert_eq!(update.image.as_deref(), Some(""));
    }

    #[test]
    fn it_suppresses_redundant_pushes() {
        let mut push = IdentityPush::new();
        push.observe("Ada Lovelace", "/ada.png");
        assert!(push.observe("Ada Lovelace", "/ada.png").is_empty());

        let update = push.observe("Ada King", "/ada.png");
        assert_eq!(update.name.as_deref(), Some("Ada King"));
        assert_eq!(update.image, None);
    }
}
