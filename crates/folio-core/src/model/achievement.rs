use super::{Field, FieldKind, FieldValue, Record};
use crate::{Date, Error, media::MediaHandle};

const CERTIFICATE: Field = Field::new("certificate", "Certificate", FieldKind::Media);
const TITLE: Field = Field::new("title", "Title", FieldKind::Text).required();
const DESCRIPTION: Field = Field::new("description", "Description", FieldKind::LongText).required();
const DATE: Field = Field::new("date", "Date", FieldKind::Date).required();

static SCHEMA: [Field; 4] = [CERTIFICATE, TITLE, DESCRIPTION, DATE];

/// An achievement or certification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Achievement {
    /// An optional certificate image.
    pub certificate: Option<MediaHandle>,
    /// The title.
    pub title: String,
    /// The description.
    pub description: String,
    /// The date of the achievement.
    pub date: Option<Date>,
}

impl Record for Achievement {
    const NAME: &'static str = "achievement";

    #[inline]
    fn schema() -> &'static [Field] {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value: FieldValue = match name {
            "certificate" => FieldValue::Media(self.certificate.clone()),
            "title" => self.title.as_str().into(),
            "description" => self.description.as_str().into(),
            "date" => FieldValue::date(self.date),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), Error> {
        match name {
            "certificate" => self.certificate = CERTIFICATE.media(value)?,
            "title" => self.title = TITLE.text(value)?,
            "description" => self.description = DESCRIPTION.text(value)?,
            "date" => self.date = DATE.date(value)?,
            _ => return Err(Self::unknown_field(name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Achievement, Record};
    use crate::{
        Date, Error,
        media::{MediaFile, MediaRegistry},
        model::FieldValue,
    };

    #[test]
    fn it_maps_fields_by_name() {
        let mut achievement = Achievement::default();
        achievement.set_field("title", "Hackathon".into()).unwrap();
        achievement.set_field("date", "2024-02-29".into()).unwrap();
        assert_eq!(achievement.date, Date::from_ymd_opt(2024, 2, 29));
        assert_eq!(
            achievement.field("date").unwrap().as_text(),
            Some("2024-02-29")
        );
        assert_eq!(achievement.missing_fields(), ["description"]);

        achievement.set_field("date", "yesterday".into()).unwrap();
        assert_eq!(achievement.date, None);
        assert!(matches!(
            achievement.set_field("certificate", "cert.png".into()),
            Err(Error::FieldType { .. })
        ));
        assert!(achievement.field("issuer").is_none());

        let registry = MediaRegistry::new();
        let handle = registry.acquire(MediaFile::new("cert.png", vec![1, 2, 3]));
        achievement.set_field("certificate", handle.into()).unwrap();
        assert!(achievement.field("certificate").unwrap().as_media().is_some());
        achievement
            .set_field("certificate", FieldValue::Media(None))
            .unwrap();
        assert_eq!(registry.live_count(), 0);
    }
}
