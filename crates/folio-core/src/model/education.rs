use super::{Field, FieldKind, FieldValue, Record};
use crate::{Error, media::MediaHandle};
use std::cmp::Ordering;

const INSTITUTION: Field = Field::new("institution", "Institution", FieldKind::Text).required();
const DEGREE: Field = Field::new("degree", "Degree", FieldKind::Text).required();
const FIELD_OF_STUDY: Field = Field::new("field_of_study", "Field of Study", FieldKind::Text);
const START_YEAR: Field = Field::new("start_year", "Start Year", FieldKind::Year).required();
const END_YEAR: Field = Field::new("end_year", "End Year", FieldKind::Year);
const MARKS: Field = Field::new("marks", "Marks/Percentage", FieldKind::Text).required();
const LOGO: Field = Field::new("logo", "Logo", FieldKind::Media);

static SCHEMA: [Field; 7] = [
    INSTITUTION,
    DEGREE,
    FIELD_OF_STUDY,
    START_YEAR,
    END_YEAR,
    MARKS,
    LOGO,
];

/// An education entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Education {
    /// The school or university.
    pub institution: String,
    /// The degree.
    pub degree: String,
    /// An optional field of study.
    pub field_of_study: String,
    /// The year of enrollment.
    pub start_year: Option<i32>,
    /// The year of graduation; absent while studying.
    pub end_year: Option<i32>,
    /// Marks or percentage.
    pub marks: String,
    /// An optional institution logo.
    pub logo: Option<MediaHandle>,
}

impl Education {
    /// Formats the period, e.g. `2015 - Present`.
    pub fn period(&self) -> String {
        let start = self
            .start_year
            .map(|year| year.to_string())
            .unwrap_or_default();
        match self.end_year {
            Some(end) => format!("{start} - {end}"),
            None => format!("{start} - Present"),
        }
    }
}

impl Record for Education {
    const NAME: &'static str = "education";

    #[inline]
    fn schema() -> &'static [Field] {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value: FieldValue = match name {
            "institution" => self.institution.as_str().into(),
            "degree" => self.degree.as_str().into(),
            "field_of_study" => self.field_of_study.as_str().into(),
            "start_year" => FieldValue::year(self.start_year),
            "end_year" => FieldValue::year(self.end_year),
            "marks" => self.marks.as_str().into(),
            "logo" => FieldValue::Media(self.logo.clone()),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), Error> {
        match name {
            "institution" => self.institution = INSTITUTION.text(value)?,
            "degree" => self.degree = DEGREE.text(value)?,
            "field_of_study" => self.field_of_study = FIELD_OF_STUDY.text(value)?,
            "start_year" => self.start_year = START_YEAR.year(value)?,
            "end_year" => self.end_year = END_YEAR.year(value)?,
            "marks" => self.marks = MARKS.text(value)?,
            "logo" => self.logo = LOGO.media(value)?,
            _ => return Err(Self::unknown_field(name)),
        }
        Ok(())
    }

    /// Latest enrollment first; entries without a start year go last.
    #[inline]
    fn display_order(&self, other: &Self) -> Ordering {
        other.start_year.cmp(&self.start_year)
    }
}

#[cfg(test)]
mod tests {
    use super::{Education, Record};

    #[test]
    fn it_formats_periods() {
        let mut education = Education::default();
        education.set_field("start_year", "2015".into()).unwrap();
        assert_eq!(education.period(), "2015 - Present");

        education.set_field("end_year", "2019".into()).unwrap();
        assert_eq!(education.period(), "2015 - 2019");
    }

    #[test]
    fn it_lists_missing_fields() {
        let mut education = Education::default();
        assert_eq!(
            education.missing_fields(),
            ["institution", "degree", "start_year", "marks"]
        );

        education.set_field("institution", "MIT".into()).unwrap();
        education.set_field("degree", "BSc".into()).unwrap();
        education.set_field("start_year", "2015".into()).unwrap();
        education.set_field("marks", "3.9 GPA".into()).unwrap();
        assert!(education.missing_fields().is_empty());
        assert!(education.set_field("gpa", "4".into()).is_err());
    }
}
