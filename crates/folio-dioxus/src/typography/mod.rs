//! Typography helpers.

mod card;
mod read_more;
mod tag;

pub use card::{Card, CardProps};
pub use read_more::{ReadMore, ReadMoreProps};
pub use tag::{Tag, TagProps, Tags, TagsProps};
