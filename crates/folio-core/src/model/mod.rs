//! Record schemas of the profile collections.
//!
//! Every list on the profile page stores one record type. A record type
//! describes its fields with a static schema, so forms can be rendered and
//! drafts can be written generically by field name.

use crate::Error;
use std::{cmp::Ordering, fmt::Debug};

mod achievement;
mod education;
mod experience;
mod post;
mod schema;
mod skill;
mod tag;

pub use achievement::Achievement;
pub use education::Education;
pub use experience::Experience;
pub use post::Post;
pub use schema::{Field, FieldKind, FieldValue};
pub use skill::Skill;
pub use tag::{TagInput, TagSet};

/// A typed record stored in an [`EditableCollection`].
///
/// `Default` is the empty-value schema a draft is reset to.
///
/// [`EditableCollection`]: crate::collection::EditableCollection
pub trait Record: Debug + Clone + Default + PartialEq + 'static {
    /// The collection name.
    const NAME: &'static str;

    /// A flag to indicate whether committed records can be edited.
    const EDITABLE: bool = true;

    /// Returns the field schema.
    fn schema() -> &'static [Field];

    /// Reads a field by name.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Writes a field by name, applying the field-specific coercion.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), Error>;

    /// Compares two records for the display projection.
    /// The default keeps the insertion order.
    #[inline]
    fn display_order(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }

    /// A hook called on the draft right before it is appended as a new record.
    #[inline]
    fn on_create(&mut self) {}

    /// Returns the names of the required fields which are still blank.
    fn missing_fields(&self) -> Vec<&'static str> {
        Self::schema()
            .iter()
            .filter(|field| field.is_required())
            .filter(|field| {
                self.field(field.name())
                    .is_none_or(|value| value.is_blank())
            })
            .map(|field| field.name())
            .collect()
    }

    /// Returns an error for a field name outside of the schema.
    #[inline]
    fn unknown_field(name: &str) -> Error {
        Error::UnknownField {
            collection: Self::NAME,
            field: name.to_owned(),
        }
    }
}
