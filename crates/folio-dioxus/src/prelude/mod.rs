//! Re-exports of components and common types.

pub use crate::{
    class::Class,
    feedback::ModalCard,
    form::{Button, FieldContainer, FileUpload, FormGroup, Input, TagField, Textarea},
    icon::{IconText, SvgIcon},
    layout::{Column, Columns},
    typography::{Card, ReadMore, Tag, Tags},
};

#[cfg(feature = "desktop")]
pub use crate::application::Desktop;
