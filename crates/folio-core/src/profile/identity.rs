use crate::{
    Date, Error,
    model::{Field, FieldKind, FieldValue, Record},
};
use toml::Table;

const FIRST_NAME: Field = Field::new("first_name", "First Name", FieldKind::Text);
const LAST_NAME: Field = Field::new("last_name", "Last Name", FieldKind::Text);
const HEADLINE: Field = Field::new("headline", "Headline", FieldKind::Text);
const COUNTRY: Field = Field::new("country", "Country", FieldKind::Text);
const CITY: Field = Field::new("city", "City", FieldKind::Text);
const STATE: Field = Field::new("state", "State", FieldKind::Text);
const EMAIL: Field = Field::new("email", "Email", FieldKind::Email);
const DOB: Field = Field::new("dob", "Date of Birth", FieldKind::Date);
const PHONE: Field = Field::new("phone", "Phone", FieldKind::Phone).max_length(10);

static SCHEMA: [Field; 9] = [
    FIRST_NAME, LAST_NAME, HEADLINE, COUNTRY, CITY, STATE, EMAIL, DOB, PHONE,
];

/// The display identity shown in the profile header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The first name.
    pub first_name: String,
    /// The last name.
    pub last_name: String,
    /// A one-line headline.
    pub headline: String,
    /// The country.
    pub country: String,
    /// The city.
    pub city: String,
    /// The state or province.
    pub state: String,
    /// The contact email.
    pub email: String,
    /// The date of birth.
    pub dob: Option<Date>,
    /// The phone number, at most 10 characters.
    pub phone: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            first_name: "First Name".to_owned(),
            last_name: "Last Name".to_owned(),
            headline: "Headline".to_owned(),
            country: "Country".to_owned(),
            city: "City".to_owned(),
            state: "State".to_owned(),
            email: "example@domain.com".to_owned(),
            dob: Date::from_ymd_opt(2001, 1, 1),
            phone: "1234567890".to_owned(),
        }
    }
}

impl Identity {
    /// Creates the default identity with overrides from a config table.
    /// Unknown keys and non-string values are skipped with a warning.
    pub fn with_config(config: &Table) -> Self {
        let mut identity = Self::default();
        for (key, value) in config {
            let Some(text) = value.as_str() else {
                tracing::warn!("identity field `{key}` should be a string");
                continue;
            };
            if let Err(err) = identity.set_field(key, text.into()) {
                tracing::warn!("fail to set the identity field `{key}`: {err}");
            }
        }
        identity
    }

    /// Returns the display name as `"{first_name} {last_name}"`.
    #[inline]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the location line as `"{country} {city}, {state}"`.
    #[inline]
    pub fn location(&self) -> String {
        format!("{} {}, {}", self.country, self.city, self.state)
    }
}

impl Record for Identity {
    const NAME: &'static str = "identity";

    #[inline]
    fn schema() -> &'static [Field] {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value: FieldValue = match name {
            "first_name" => self.first_name.as_str().into(),
            "last_name" => self.last_name.as_str().into(),
            "headline" => self.headline.as_str().into(),
            "country" => self.country.as_str().into(),
            "city" => self.city.as_str().into(),
            "state" => self.state.as_str().into(),
            "email" => self.email.as_str().into(),
            "dob" => FieldValue::date(self.dob),
            "phone" => self.phone.as_str().into(),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), Error> {
        match name {
            "first_name" => self.first_name = FIRST_NAME.text(value)?,
            "last_name" => self.last_name = LAST_NAME.text(value)?,
            "headline" => self.headline = HEADLINE.text(value)?,
            "country" => self.country = COUNTRY.text(value)?,
            "city" => self.city = CITY.text(value)?,
            "state" => self.state = STATE.text(value)?,
            "email" => self.email = EMAIL.text(value)?,
            "dob" => self.dob = DOB.date(value)?,
            "phone" => self.phone = PHONE.text(value)?,
            _ => return Err(Self::unknown_field(name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Identity;
    use crate::model::Record;
    use toml::Table;

    #[test]
    fn it_reads_config_overrides() {
        let config = r#"
            first_name = "Ada"
            last_name = "Lovelace"
            phone = "02071234567"
            nickname = "countess"
            dob = 1815
        "#
        .parse::<Table>()
        .unwrap();
        let identity = Identity::with_config(&config);
        assert_eq!(identity.display_name(), "Ada Lovelace");
        assert_eq!(identity.phone, "0207123456");
        assert_eq!(identity.headline, "Headline");
        assert_eq!(identity.dob, Identity::default().dob);
    }

    #[test]
    fn it_truncates_phone_numbers() {
        let mut identity = Identity::default();
        identity.set_field("phone", "98765432101234".into()).unwrap();
        assert_eq!(identity.phone, "9876543210");
        assert_eq!(identity.location(), "Country City, State");
    }
}
