use super::{Field, FieldKind, FieldValue, Record, TagSet};
use crate::{DateTime, Error, media::MediaHandle};
use chrono::Local;

const DESCRIPTION: Field = Field::new("description", "Description", FieldKind::LongText).required();
const TAGS: Field = Field::new("tags", "Tags", FieldKind::Tags);
const IMAGE: Field = Field::new("image", "Image", FieldKind::Media);

static SCHEMA: [Field; 3] = [DESCRIPTION, TAGS, IMAGE];

/// A post in the social feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    /// The post text.
    pub description: String,
    /// Tags in the order they were typed.
    pub tags: TagSet,
    /// An optional image.
    pub image: Option<MediaHandle>,
    /// The creation time, assigned once when the post is committed.
    date: DateTime,
    /// A flag to indicate whether the viewer liked the post.
    is_liked: bool,
}

impl Post {
    /// Returns the creation time.
    #[inline]
    pub fn date(&self) -> DateTime {
        self.date
    }

    /// Formats the creation time as `1/31/2025, 4:05:09 PM`.
    #[inline]
    pub fn formatted_date(&self) -> String {
        self.date.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    }

    /// Returns `true` if the viewer liked the post.
    #[inline]
    pub fn is_liked(&self) -> bool {
        self.is_liked
    }

    /// Toggles the like flag.
    #[inline]
    pub fn toggle_like(&mut self) {
        self.is_liked = !self.is_liked;
    }
}

impl Record for Post {
    const NAME: &'static str = "post";

    #[inline]
    fn schema() -> &'static [Field] {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value: FieldValue = match name {
            "description" => self.description.as_str().into(),
            "tags" => self.tags.join().into(),
            "image" => FieldValue::Media(self.image.clone()),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), Error> {
        match name {
            "description" => self.description = DESCRIPTION.text(value)?,
            "tags" => self.tags = TagSet::parse(&TAGS.text(value)?),
            "image" => self.image = IMAGE.media(value)?,
            _ => return Err(Self::unknown_field(name)),
        }
        Ok(())
    }

    fn on_create(&mut self) {
        self.date = Local::now();
        self.is_liked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{Post, Record};
    use crate::model::{TagInput, TagSet};
    use chrono::{Local, TimeZone};

    #[test]
    fn it_stamps_new_posts() {
        let mut post = Post::default();
        post.set_field("tags", "rust, wasm".into()).unwrap();
        post.toggle_like();
        let before = Local::now();
        post.on_create();
        assert!(post.date() >= before);
        assert!(!post.is_liked());
        assert_eq!(post.field("tags").unwrap().as_text(), Some("rust, wasm"));
    }

    #[test]
    fn it_keeps_typed_tags_in_drafts() {
        let mut tags = TagSet::new();
        let mut input = TagInput::new();
        input.set_text("c, c++");
        input.handle_key("Enter", &mut tags);
        input.set_text("rust");
        input.handle_key(",", &mut tags);

        let mut post = Post::default();
        post.set_field("tags", tags.join().into()).unwrap();
        assert_eq!(post.tags, tags);
        assert_eq!(post.tags.as_slice(), ["c", "c++", "rust"]);
    }

    #[test]
    fn it_formats_dates() {
        let post = Post {
            date: Local.with_ymd_and_hms(2025, 1, 31, 16, 5, 9).unwrap(),
            ..Post::default()
        };
        assert_eq!(post.formatted_date(), "1/31/2025, 4:05:09 PM");
    }
}
