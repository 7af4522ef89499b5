use super::Identity;
use crate::{
    Error, SharedString,
    model::{FieldValue, Record},
};

/// Whether the viewer follows the profile. Purely cosmetic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Follow {
    /// The default state.
    #[default]
    NotFollowing,
    /// The viewer follows the profile.
    Following,
}

impl Follow {
    /// Returns `true` if the viewer follows the profile.
    #[inline]
    pub fn is_following(&self) -> bool {
        matches!(self, Self::Following)
    }

    /// Returns the button label.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotFollowing => "Follow",
            Self::Following => "Following",
        }
    }
}

/// The state of the profile header: a single identity record edited with
/// copy-then-commit, plus the contact popup and follow toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileHeader {
    /// The committed identity.
    identity: Identity,
    /// The identity copy being edited.
    draft: Option<Identity>,
    /// The profile image reference.
    image: SharedString,
    /// A flag to indicate whether the contact popup is visible.
    contact_info_visible: bool,
    /// The follow relationship.
    follow: Follow,
}

impl ProfileHeader {
    /// Creates a new instance.
    #[inline]
    pub fn new(identity: Identity, image: impl Into<SharedString>) -> Self {
        Self {
            identity,
            draft: None,
            image: image.into(),
            contact_info_visible: false,
            follow: Follow::NotFollowing,
        }
    }

    /// Returns the committed identity.
    #[inline]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns the draft while editing.
    #[inline]
    pub fn draft(&self) -> Option<&Identity> {
        self.draft.as_ref()
    }

    /// Returns `true` if the edit popup is open.
    #[inline]
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Returns the display name of the committed identity.
    #[inline]
    pub fn display_name(&self) -> String {
        self.identity.display_name()
    }

    /// Returns the profile image reference.
    #[inline]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Opens the edit popup with a copy of the identity.
    pub fn begin_edit(&mut self) -> Result<(), Error> {
        if self.draft.is_some() {
            return Err(Error::DraftActive {
                collection: Identity::NAME,
            });
        }
        self.draft = Some(self.identity.clone());
        Ok(())
    }

    /// Writes a draft field by name.
    pub fn update_draft_field(&mut self, name: &str, value: FieldValue) -> Result<(), Error> {
        self.draft
            .as_mut()
            .ok_or(Error::NoDraft {
                collection: Identity::NAME,
            })?
            .set_field(name, value)
    }

    /// Commits the draft as the identity and closes the popup.
    pub fn commit(&mut self) -> Result<(), Error> {
        let draft = self.draft.take().ok_or(Error::NoDraft {
            collection: Identity::NAME,
        })?;
        tracing::debug!(name = %draft.display_name(), "commit the profile identity");
        self.identity = draft;
        Ok(())
    }

    /// Discards the draft and closes the popup.
    #[inline]
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Returns `true` if the contact popup is visible.
    #[inline]
    pub fn is_contact_info_visible(&self) -> bool {
        self.contact_info_visible
    }

    /// Shows the contact popup.
    #[inline]
    pub fn show_contact_info(&mut self) {
        self.contact_info_visible = true;
    }

    /// Hides the contact popup.
    #[inline]
    pub fn hide_contact_info(&mut self) {
        self.contact_info_visible = false;
    }

    /// Returns the follow relationship.
    #[inline]
    pub fn follow(&self) -> Follow {
        self.follow
    }

    /// Toggles the follow relationship.
    #[inline]
    pub fn toggle_follow(&mut self) -> Follow {
        self.follow = match self.follow {
            Follow::NotFollowing => Follow::Following,
            Follow::Following => Follow::NotFollowing,
        };
        self.follow
    }
}

impl Default for ProfileHeader {
    #[inline]
    fn default() -> Self {
        Self::new(Identity::default(), "")
    }
}

#[cfg(test)]
mod tests {
    use super::{Follow, ProfileHeader};
    use crate::Error;

    #[test]
    fn it_commits_identity_drafts() {
        let mut header = ProfileHeader::default();
        assert_eq!(header.display_name(), "First Name Last Name");
        assert!(matches!(
            header.update_draft_field("first_name", "Ada".into()),
            Err(Error::NoDraft { .. })
        ));

        header.begin_edit().unwrap();
        assert!(header.begin_edit().is_err());
        header.update_draft_field("first_name", "Ada".into()).unwrap();
        assert_eq!(header.display_name(), "First Name Last Name");
        header.commit().unwrap();
        assert_eq!(header.display_name(), "Ada Last Name");
        assert!(!header.is_editing());
        assert!(header.commit().is_err());
    }

    #[test]
    fn it_discards_cancelled_drafts() {
        let mut header = ProfileHeader::default();
        let identity = header.identity().clone();
        header.begin_edit().unwrap();
        header.update_draft_field("headline", "Engineer".into()).unwrap();
        header.update_draft_field("phone", "123456789012".into()).unwrap();
        assert_eq!(header.draft().unwrap().phone, "1234567890");
        header.cancel();
        assert_eq!(header.identity(), &identity);
        assert!(header.draft().is_none());
    }

    #[test]
    fn it_toggles_cosmetic_state() {
        let mut header = ProfileHeader::default();
        assert_eq!(header.follow(), Follow::NotFollowing);
        assert_eq!(header.toggle_follow().label(), "Following");
        assert!(header.follow().is_following());
        assert_eq!(header.toggle_follow(), Follow::NotFollowing);

        header.show_contact_info();
        assert!(header.is_contact_info_visible());
        header.hide_contact_info();
        assert!(!header.is_contact_info_visible());
    }
}
