use crate::{Date, Error, SharedString, helper, media::MediaHandle};

/// Kinds of record fields, used to pick form controls and coercion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    LongText,
    /// An integer year.
    Year,
    /// A calendar date in the `YYYY-MM-DD` format.
    Date,
    /// An email address.
    Email,
    /// A phone number.
    Phone,
    /// A comma-separated list of tags.
    Tags,
    /// An uploaded image or document.
    Media,
}

impl FieldKind {
    /// Returns the HTML input type for the kind.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::LongText | Self::Tags => "text",
            Self::Year | Self::Phone => "number",
            Self::Date => "date",
            Self::Email => "email",
            Self::Media => "file",
        }
    }

    /// Returns `true` if the kind holds a media handle.
    #[inline]
    pub fn is_media(&self) -> bool {
        matches!(self, Self::Media)
    }
}

/// A field descriptor in a record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// The field name.
    name: &'static str,
    /// The form label.
    label: &'static str,
    /// The field kind.
    kind: FieldKind,
    /// A flag to indicate whether the field must be filled before committing.
    required: bool,
    /// An optional maximum length in characters.
    max_length: Option<usize>,
}

impl Field {
    /// Creates a new optional field.
    #[inline]
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            max_length: None,
        }
    }

    /// Marks the field as required.
    #[inline]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the maximum length in characters.
    #[inline]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the form label.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the field kind.
    #[inline]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns `true` if the field is required.
    #[inline]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the maximum length in characters, if any.
    #[inline]
    pub fn length_limit(&self) -> Option<usize> {
        self.max_length
    }

    /// Returns the form placeholder.
    pub fn placeholder(&self) -> SharedString {
        if self.required || self.kind.is_media() {
            self.label.into()
        } else {
            format!("{} (optional)", self.label).into()
        }
    }

    /// Coerces a value into text for the field.
    pub fn text(&self, value: FieldValue) -> Result<String, Error> {
        match value {
            FieldValue::Text(mut text) => {
                if let Some(max_length) = self.max_length {
                    helper::truncate_chars(&mut text, max_length);
                }
                Ok(text)
            }
            FieldValue::Media(_) => Err(self.type_error("text")),
        }
    }

    /// Coerces a value into a year. Blank or unparsable text gives `None`.
    pub fn year(&self, value: FieldValue) -> Result<Option<i32>, Error> {
        let text = self.text(value)?;
        let year = text.trim().parse().ok();
        if year.is_none() && !helper::is_blank(&text) {
            tracing::debug!(field = self.name, "ignore an invalid year `{text}`");
        }
        Ok(year)
    }

    /// Coerces a value into a date. Blank or unparsable text gives `None`.
    pub fn date(&self, value: FieldValue) -> Result<Option<Date>, Error> {
        let text = self.text(value)?;
        let date = text.trim().parse().ok();
        if date.is_none() && !helper::is_blank(&text) {
            tracing::debug!(field = self.name, "ignore an invalid date `{text}`");
        }
        Ok(date)
    }

    /// Coerces a value into a media handle.
    pub fn media(&self, value: FieldValue) -> Result<Option<MediaHandle>, Error> {
        match value {
            FieldValue::Media(handle) => Ok(handle),
            FieldValue::Text(_) => Err(self.type_error("media")),
        }
    }

    /// Returns a type mismatch error for the field.
    #[inline]
    fn type_error(&self, expected: &'static str) -> Error {
        Error::FieldType {
            field: self.name,
            expected,
        }
    }
}

/// A value written to or read from a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A text value as typed into a form control.
    Text(String),
    /// An optional media handle.
    Media(Option<MediaHandle>),
}

impl FieldValue {
    /// Returns the text value, if any.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Media(_) => None,
        }
    }

    /// Returns the media handle, if any.
    #[inline]
    pub fn as_media(&self) -> Option<&MediaHandle> {
        match self {
            Self::Media(handle) => handle.as_ref(),
            Self::Text(_) => None,
        }
    }

    /// Returns `true` if the value counts as absent for a required field.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => helper::is_blank(text),
            Self::Media(handle) => handle.is_none(),
        }
    }

    /// Formats an optional year as text.
    #[inline]
    pub fn year(year: Option<i32>) -> Self {
        Self::Text(year.map(|year| year.to_string()).unwrap_or_default())
    }

    /// Formats an optional date as text.
    #[inline]
    pub fn date(date: Option<Date>) -> Self {
        Self::Text(date.map(|date| date.to_string()).unwrap_or_default())
    }
}

impl From<&str> for FieldValue {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<MediaHandle> for FieldValue {
    #[inline]
    fn from(handle: MediaHandle) -> Self {
        Self::Media(Some(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldKind, FieldValue};
    use crate::Date;

    #[test]
    fn it_coerces_values() {
        let phone = Field::new("phone", "Phone", FieldKind::Phone).max_length(10);
        assert_eq!(phone.text("0123456789999".into()).unwrap(), "0123456789");

        let year = Field::new("start_year", "Start Year", FieldKind::Year).required();
        assert_eq!(year.year(" 2020 ".into()).unwrap(), Some(2020));
        assert_eq!(year.year("".into()).unwrap(), None);
        assert_eq!(year.year("twenty".into()).unwrap(), None);
        assert!(year.year(FieldValue::Media(None)).is_err());

        let date = Field::new("date", "Date", FieldKind::Date);
        assert_eq!(
            date.date("2024-02-29".into()).unwrap(),
            Date::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(date.date("2023-02-29".into()).unwrap(), None);
    }

    #[test]
    fn it_builds_placeholders() {
        let degree = Field::new("degree", "Degree", FieldKind::Text).required();
        let field_of_study = Field::new("field_of_study", "Field of Study", FieldKind::Text);
        assert_eq!(degree.placeholder(), "Degree");
        assert_eq!(field_of_study.placeholder(), "Field of Study (optional)");
        assert_eq!(FieldKind::Year.input_type(), "number");
    }

    #[test]
    fn it_detects_blank_values() {
        assert!(FieldValue::from("  ").is_blank());
        assert!(FieldValue::Media(None).is_blank());
        assert!(!FieldValue::from("x").is_blank());
        assert_eq!(FieldValue::year(Some(2018)), FieldValue::from("2018"));
        assert_eq!(FieldValue::date(None), FieldValue::from(""));
    }
}
