use crate::error::ConfigError;

/// Editor behaviour switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Whether `load`, `save` and `save_as` are permitted.
    pub allow_load_save: bool,
    /// Mark every buffer bound to the editor read-only.
    pub read_only: bool,
    /// Separator for word movement, `word()` and word deletion.
    pub word_delimiter: char,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            allow_load_save: true,
            read_only: false,
            word_delimiter: ' ',
        }
    }
}

impl EditorConfig {
    pub const ALLOW_LOAD_SAVE_VAR: &'static str = "FILEEDITOR_ALLOW_LOAD_SAVE";
    pub const READ_ONLY_VAR: &'static str = "FILEEDITOR_READ_ONLY";
    pub const WORD_DELIMITER_VAR: &'static str = "FILEEDITOR_WORD_DELIMITER";

    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `FILEEDITOR_ALLOW_LOAD_SAVE`: permit file I/O (default: true)
    /// - `FILEEDITOR_READ_ONLY`: bind buffers read-only (default: false)
    /// - `FILEEDITOR_WORD_DELIMITER`: single word separator char (default: space)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let allow_load_save = match lookup(Self::ALLOW_LOAD_SAVE_VAR) {
            Some(value) => parse_bool(Self::ALLOW_LOAD_SAVE_VAR, value)?,
            None => defaults.allow_load_save,
        };

        let read_only = match lookup(Self::READ_ONLY_VAR) {
            Some(value) => parse_bool(Self::READ_ONLY_VAR, value)?,
            None => defaults.read_only,
        };

        let word_delimiter = match lookup(Self::WORD_DELIMITER_VAR) {
            Some(value) => parse_char(Self::WORD_DELIMITER_VAR, value)?,
            None => defaults.word_delimiter,
        };

        Ok(Self {
            allow_load_save,
            read_only,
            word_delimiter,
        })
    }
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

// Not trimmed: a lone space is the usual delimiter.
fn parse_char(var: &'static str, value: String) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidChar { var, value }),
    }
}
