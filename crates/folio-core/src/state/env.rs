use self::Env::*;
use std::fmt;

/// Application running environment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Env {
    #[default]
    /// The `dev` environment.
    Dev,
    /// The `prod` environment.
    Prod,
    /// A custom environment.
    Custom(&'static str),
}

impl Env {
    /// Returns `true` if `self` is the `dev` environment.
    #[inline]
    pub fn is_dev(&self) -> bool {
        matches!(self, Dev)
    }

    /// Returns `true` if `self` is the `prod` environment.
    #[inline]
    pub fn is_prod(&self) -> bool {
        matches!(self, Prod)
    }

    /// Returns `self` as `&'static str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Dev => "dev",
            Prod => "prod",
            Custom(name) => name,
        }
    }

    /// Reads the environment from a process variable. Unset or blank means `dev`.
    ///
    /// A custom name is leaked to get a `'static` str.
    pub fn from_var(name: &str) -> Self {
        let Ok(value) = std::env::var(name) else {
            return Dev;
        };
        match value.trim() {
            "" | "dev" => Dev,
            "prod" => Prod,
            env => Custom(env.to_owned().leak()),
        }
    }

    /// Returns the config file name for the environment.
    #[inline]
    pub fn config_file_name(&self) -> String {
        format!("config.{}.toml", self.as_str())
    }
}

impl fmt::Display for Env {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let env = self.as_str();
        write!(f, "{env}")
    }
}

impl From<&'static str> for Env {
    #[inline]
    fn from(env: &'static str) -> Self {
        match env {
            "dev" => Dev,
            "prod" => Prod,
            _ => Custom(env),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Env;

    #[test]
    fn it_parses_envs() {
        assert!(Env::from("dev").is_dev());
        assert!(Env::from("prod").is_prod());
        assert_eq!(Env::from("staging"), Env::Custom("staging"));
        assert_eq!(Env::default().config_file_name(), "config.dev.toml");
        assert_eq!(Env::Custom("staging").to_string(), "staging");
        assert_eq!(Env::from_var("FOLIO_TEST_UNSET_APP_ENV"), Env::Dev);
    }
}
