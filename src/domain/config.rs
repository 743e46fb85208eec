use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for catalog parsing.
///
/// Controls the heuristic that decides where a course title ends and its
/// prerequisite list begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Subject prefixes that mark a token as a course code.
    ///
    /// For example, 'CSCI' or 'MATH'. Matching is case-sensitive.
    subject_prefixes: Vec<String>,

    /// The minimum length, in characters, of a course-code-like token.
    min_code_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subject_prefixes: default_subject_prefixes(),
            min_code_length: default_min_code_length(),
        }
    }
}

impl Config {
    /// Creates a configuration with the given subject prefixes and the
    /// default minimum code length.
    #[must_use]
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subject_prefixes: prefixes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Returns the configured subject prefixes.
    #[must_use]
    pub fn subject_prefixes(&self) -> &[String] {
        &self.subject_prefixes
    }

    /// Returns the minimum length of a course-code-like token.
    #[must_use]
    pub const fn min_code_length(&self) -> usize {
        self.min_code_length
    }

    /// Checks whether a token looks like a course code.
    ///
    /// A token is course-code-like if it is at least
    /// [`min_code_length`](Self::min_code_length) characters long and starts
    /// with one of the subject prefixes.
    #[must_use]
    pub fn is_course_code(&self, token: &str) -> bool {
        token.chars().count() >= self.min_code_length
            && self
                .subject_prefixes
                .iter()
                .any(|prefix| token.starts_with(prefix.as_str()))
    }
}

fn default_subject_prefixes() -> Vec<String> {
    vec!["CSCI".to_string(), "MATH".to_string()]
}

const fn default_min_code_length() -> usize {
    7
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_subject_prefixes")]
        subject_prefixes: Vec<String>,

        #[serde(default = "default_min_code_length")]
        min_code_length: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                subject_prefixes,
                min_code_length,
            } => Self {
                subject_prefixes,
                min_code_length,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            subject_prefixes: config.subject_prefixes,
            min_code_length: config.min_code_length,
        }
    }
}
