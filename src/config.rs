use std::fs;
use std::path::Path;

use log::{ debug, info };
use serde::{ Deserialize, Serialize };

use crate::errors::TallyResult;
use crate::models::person::Person;

/// How negative person identifiers are treated before counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeIdPolicy {
    /// Count them as never palindromic
    #[default]
    Preserve,
    /// Fail with an error naming the person
    Reject,
}

/// Configuration for the tally driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// People checked by the sample run and by `count palindrome-id` without values
    pub people: Vec<Person>,

    pub negative_ids: NegativeIdPolicy,
}

impl TallyConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> TallyResult<Self> {
        info!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> TallyResult<Self> {
        let config: TallyConfig = serde_yaml::from_str(contents)?;
        debug!(
            "Configuration has {} people, negative ids: {:?}",
            config.people.len(),
            config.negative_ids
        );
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> TallyResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Default configuration
impl Default for TallyConfig {
    fn default() -> Self {
        TallyConfig {
            people: sample_people(),
            negative_ids: NegativeIdPolicy::Preserve,
        }
    }
}

/// The people used by the sample run
pub fn sample_people() -> Vec<Person> {
    vec![Person::new("Alice", 12321), Person::new("Bob", 12345), Person::new("Charlie", 12343)]
}
