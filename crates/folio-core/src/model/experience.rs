use super::{Field, FieldKind, FieldValue, Record};
use crate::{Date, Error, media::MediaHandle};

const LOGO: Field = Field::new("logo", "Company Logo", FieldKind::Media);
const COMPANY_NAME: Field = Field::new("company_name", "Company Name", FieldKind::Text).required();
const ROLE: Field = Field::new("role", "Role", FieldKind::Text).required();
const START_DATE: Field = Field::new("start_date", "Start Date", FieldKind::Date).required();
const END_DATE: Field = Field::new("end_date", "End Date", FieldKind::Date);
const DESCRIPTION: Field = Field::new("description", "Description", FieldKind::LongText);

static SCHEMA: [Field; 6] = [LOGO, COMPANY_NAME, ROLE, START_DATE, END_DATE, DESCRIPTION];

/// A work experience entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Experience {
    /// An optional company logo.
    pub logo: Option<MediaHandle>,
    /// The employer.
    pub company_name: String,
    /// The job title.
    pub role: String,
    /// The first day.
    pub start_date: Option<Date>,
    /// The last day; absent for the current position.
    pub end_date: Option<Date>,
    /// An optional description.
    pub description: String,
}

impl Experience {
    /// Formats the period, e.g. `2021-03-01 - Present`.
    pub fn period(&self) -> String {
        let start = self
            .start_date
            .map(|date| date.to_string())
            .unwrap_or_default();
        match self.end_date {
            Some(end) => format!("{start} - {end}"),
            None => format!("{start} - Present"),
        }
    }
}

impl Record for Experience {
    const NAME: &'static str = "experience";

    #[inline]
    fn schema() -> &'static [Field] {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value: FieldValue = match name {
            "logo" => FieldValue::Media(self.logo.clone()),
            "company_name" => self.company_name.as_str().into(),
            "role" => self.role.as_str().into(),
            "start_date" => FieldValue::date(self.start_date),
            "end_date" => FieldValue::date(self.end_date),
            "description" => self.description.as_str().into(),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), Error> {
        match name {
            "logo" => self.logo = LOGO.media(value)?,
            "company_name" => self.company_name = COMPANY_NAME.text(value)?,
            "role" => self.role = ROLE.text(value)?,
            "start_date" => self.start_date = START_DATE.date(value)?,
            "end_date" => self.end_date = END_DATE.date(value)?,
            "description" => self.description = DESCRIPTION.text(value)?,
            _ => return Err(Self::unknown_field(name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Experience, Record};

    #[test]
    fn it_formats_periods() {
        let mut experience = Experience::default();
        experience.set_field("start_date", "2021-03-01".into()).unwrap();
        assert_eq!(experience.period(), "2021-03-01 - Present");

        experience.set_field("end_date", "2023-06-30".into()).unwrap();
        assert_eq!(experience.period(), "2021-03-01 - 2023-06-30");
        assert_eq!(
            experience.field("end_date").unwrap().as_text(),
            Some("2023-06-30")
        );
    }
}
