use super::{Field, FieldKind, FieldValue, Record};
use crate::Error;

const LABEL: Field = Field::new("label", "Skill", FieldKind::Text).required();

static SCHEMA: [Field; 1] = [LABEL];

/// A skill label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skill {
    /// The label.
    pub label: String,
}

impl Skill {
    /// Creates a new instance.
    #[inline]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Record for Skill {
    const NAME: &'static str = "skill";

    const EDITABLE: bool = false;

    #[inline]
    fn schema() -> &'static [Field] {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        (name == "label").then(|| self.label.as_str().into())
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), Error> {
        if name == "label" {
            let label = LABEL.text(value)?;
            self.label = label.trim().to_owned();
            Ok(())
        } else {
            Err(Self::unknown_field(name))
        }
    }

    fn on_create(&mut self) {
        let label = self.label.trim();
        if label.len() != self.label.len() {
            self.label = label.to_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, Skill};

    #[test]
    fn it_trims_draft_labels() {
        let mut skill = Skill::default();
        skill.set_field("label", " Rust ".into()).unwrap();
        assert_eq!(skill.label, "Rust");
        skill.set_field("label", "   ".into()).unwrap();
        assert_eq!(skill.missing_fields(), ["label"]);
        assert!(skill.set_field("level", "expert".into()).is_err());
    }
}
