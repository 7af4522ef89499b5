use crate::TomlValue;
use toml::Table;

/// Extension trait for [`Table`](toml::Table).
pub trait TomlTableExt {
    /// Extracts the boolean value corresponding to the key.
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Extracts the integer value corresponding to the key.
    fn get_i64(&self, key: &str) -> Option<i64>;

    /// Extracts the integer value corresponding to the key and
    /// represents it as `u32` if possible.
    fn get_u32(&self, key: &str) -> Option<u32>;

    /// Extracts the integer value corresponding to the key and
    /// represents it as `usize` if possible.
    fn get_usize(&self, key: &str) -> Option<usize>;

    /// Extracts the float value corresponding to the key.
    /// Integers are converted losslessly where possible.
    fn get_f64(&self, key: &str) -> Option<f64>;

    /// Extracts the string corresponding to the key.
    fn get_str(&self, key: &str) -> Option<&str>;

    /// Extracts the array of strings corresponding to the key.
    /// Non-string elements are skipped.
    fn get_str_array(&self, key: &str) -> Option<Vec<&str>>;

    /// Extracts the table corresponding to the key.
    fn get_table(&self, key: &str) -> Option<&Table>;
}

impl TomlTableExt for Table {
    #[inline]
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    #[inline]
    fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_integer())
    }

    #[inline]
    fn get_u32(&self, key: &str) -> Option<u32> {
        self.get_i64(key).and_then(|i| u32::try_from(i).ok())
    }

    #[inline]
    fn get_usize(&self, key: &str) -> Option<usize> {
        self.get_i64(key).and_then(|i| usize::try_from(i).ok())
    }

    fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| match v {
            TomlValue::Float(f) => Some(*f),
            TomlValue::Integer(i) => Some(*i as f64),
            _ => None,
        })
    }

    #[inline]
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    fn get_str_array(&self, key: &str) -> Option<Vec<&str>> {
        self.get(key).and_then(|v| v.as_array()).map(|values| {
            values
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
        })
    }

    #[inline]
    fn get_table(&self, key: &str) -> Option<&Table> {
        self.get(key).and_then(|v| v.as_table())
    }
}

#[cfg(test)]
mod tests {
    use super::TomlTableExt;
    use toml::Table;

    #[test]
    fn it_extracts_typed_values() {
        let config = r#"
            role = "user"
            followers = 150
            width = 1200.5
            height = 800
            maximized = true
            stylesheets = ["a.css", 1, "b.css"]

            [identity]
            first_name = "Ada"
        "#
        .parse::<Table>()
        .unwrap();
        assert_eq!(config.get_str("role"), Some("user"));
        assert_eq!(config.get_u32("followers"), Some(150));
        assert_eq!(config.get_usize("role"), None);
        assert_eq!(config.get_f64("width"), Some(1200.5));
        assert_eq!(config.get_f64("height"), Some(800.0));
        assert_eq!(config.get_bool("maximized"), Some(true));
        assert_eq!(config.get_str_array("stylesheets"), Some(vec!["a.css", "b.css"]));
        assert_eq!(
            config.get_table("identity").and_then(|t| t.get_str("first_name")),
            Some("Ada")
        );
    }
}
