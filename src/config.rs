use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::{data::Distribution, record::StatPrintFormat, sort::Algorithm};

/// Name of the profile used when none is given.
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

fn default_sizes() -> Vec<usize> {
    vec![10000, 30000, 50000, 100000, 300000, 500000]
}

fn default_distributions() -> Vec<Distribution> {
    Distribution::ALL.to_vec()
}

fn default_algorithms() -> Vec<String> {
    Algorithm::ALL.iter().map(|a| a.name().to_owned()).collect()
}

/// A sweep: every size crossed with every distribution and algorithm.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Profile {
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,
    #[serde(default = "default_distributions")]
    pub distributions: Vec<Distribution>,
    /// Algorithm names, resolved against the sorter registry at run time
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<String>,
    /// Generator seed. Unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Console statistics format
    #[serde(default)]
    pub format: StatPrintFormat,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            distributions: default_distributions(),
            algorithms: default_algorithms(),
            seed: None,
            format: StatPrintFormat::default(),
        }
    }
}

impl Config {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str::<Config>(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("Failed to load {}", path.display());
        }
        let s = std::fs::read_to_string(path)?;
        Self::parse(&s)
    }

    /// Look up a profile. `default` is always available, even when the file does not define it.
    pub fn profile(&self, name: &str) -> anyhow::Result<Profile> {
        if let Some(profile) = self.profiles.get(name) {
            return Ok(profile.clone());
        }
        if name == DEFAULT_PROFILE {
            return Ok(Profile::default());
        }
        anyhow::bail!("Could not find sortbench profile `{}`", name)
    }
}

/// Load a profile from `path`, falling back to the built-in default profile when the file is absent.
pub fn load_profile(path: impl AsRef<Path>, name: &str) -> anyhow::Result<Profile> {
    let path = path.as_ref();
    if !path.exists() {
        if name == DEFAULT_PROFILE {
            log::info!("{} not found, using the built-in profile", path.display());
            return Ok(Profile::default());
        }
        anyhow::bail!(
            "Could not find sortbench profile `{}`: {} does not exist",
            name,
            path.display()
        );
    }
    Config::load(path)?.profile(name)
}
