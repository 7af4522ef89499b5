//! Application environment and configuration.

use crate::{Error, LazyLock, extension::TomlTableExt};
use std::{
    fs,
    path::{Path, PathBuf},
};
use toml::Table;

mod env;

pub use self::env::Env;

/// The environment variable that selects the running environment.
pub const APP_ENV_VAR: &str = "FOLIO_APP_ENV";

/// The environment variable that overrides the config directory.
pub const CONFIG_DIR_VAR: &str = "FOLIO_APP_CONFIG_DIR";

/// The application state: the running environment and its config table.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Environment.
    env: Env,
    /// Configuration.
    config: Table,
    /// The error of the last config load, kept until tracing is ready.
    config_error: Option<String>,
}

impl State {
    /// Creates a new instance with an empty config.
    #[inline]
    pub fn new(env: Env) -> Self {
        Self {
            env,
            config: Table::new(),
            config_error: None,
        }
    }

    /// Creates a new instance with the config.
    #[inline]
    pub fn with_config(env: Env, config: Table) -> Self {
        Self {
            env,
            config,
            config_error: None,
        }
    }

    /// Creates a new instance and loads its config from the directory.
    /// A load failure leaves the config empty and is kept as [`config_error`].
    ///
    /// [`config_error`]: State::config_error
    pub fn load(env: Env, config_dir: &Path) -> Self {
        let mut state = Self::new(env);
        if let Err(err) = state.load_config(config_dir) {
            state.config_error = Some(err.to_string());
        }
        state
    }

    /// Loads the config file `config.{env}.toml` from the directory.
    pub fn load_config(&mut self, config_dir: &Path) -> Result<(), Error> {
        let path = config_dir.join(self.env.config_file_name());
        let text = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        self.config = text.parse::<Table>()?;
        self.config_error = None;
        Ok(())
    }

    /// Returns the env.
    #[inline]
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Returns a reference to the config.
    #[inline]
    pub fn config(&self) -> &Table {
        &self.config
    }

    /// Returns the error message of a failed config load.
    #[inline]
    pub fn config_error(&self) -> Option<&str> {
        self.config_error.as_deref()
    }

    /// Returns a reference to the config section corresponding to the key.
    #[inline]
    pub fn get_config(&self, key: &str) -> Option<&Table> {
        self.config.get_table(key)
    }

    /// Returns a reference to the shared state.
    #[inline]
    pub fn shared() -> &'static Self {
        &SHARED_STATE
    }

    /// Returns the config directory.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(CONFIG_DIR_VAR) {
            return PathBuf::from(dir);
        }
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("config")
    }
}

/// Shared application state.
static SHARED_STATE: LazyLock<State> =
    LazyLock::new(|| State::load(Env::from_var(APP_ENV_VAR), &State::config_dir()));

#[cfg(test)]
mod tests {
    use super::{Env, State};
    use crate::{Error, extension::TomlTableExt};
    use std::fs;

    #[test]
    fn it_loads_config_files() {
        let dir = std::env::temp_dir().join(format!("folio-state-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.test.toml"),
            "[profile]\nrole = \"user\"\nfollowers = 42\n",
        )
        .unwrap();

        let mut state = State::new(Env::Custom("test"));
        state.load_config(&dir).unwrap();
        let profile = state.get_config("profile").unwrap();
        assert_eq!(profile.get_str("role"), Some("user"));
        assert_eq!(profile.get_u32("followers"), Some(42));
        assert!(state.get_config("feed").is_none());

        let mut state = State::new(Env::Prod);
        assert!(matches!(state.load_config(&dir), Err(Error::Io { .. })));

        fs::write(dir.join("config.broken.toml"), "[profile\n").unwrap();
        let mut state = State::new(Env::Custom("broken"));
        assert!(matches!(state.load_config(&dir), Err(Error::Toml(_))));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn it_keeps_config_load_errors() {
        let dir = std::env::temp_dir().join(format!("folio-state-load-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let state = State::load(Env::Prod, &dir);
        assert!(state.config().is_empty());
        assert!(state.config_error().is_some_and(|err| err.contains("config.prod.toml")));

        fs::write(dir.join("config.dev.toml"), "[feed]\nexcerpt-length = 60\n").unwrap();
        let state = State::load(Env::Dev, &dir);
        assert_eq!(state.config_error(), None);
        assert_eq!(
            state.get_config("feed").and_then(|feed| feed.get_usize("excerpt-length")),
            Some(60)
        );
        fs::remove_dir_all(&dir).ok();
    }
}
