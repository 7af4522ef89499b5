//! Form controls.

mod button;
mod field;
mod file;
mod input;
mod tag_input;
mod textarea;

pub use button::{Button, ButtonProps};
pub use field::{FieldContainer, FieldContainerProps, FormGroup, FormGroupProps};
pub use file::{FileUpload, FileUploadProps};
pub use input::{Input, InputProps};
pub use tag_input::{TagField, TagFieldProps};
pub use textarea::{Textarea, TextareaProps};
