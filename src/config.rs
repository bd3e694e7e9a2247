use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cronify::Options;
use crate::vocab::Term;

#[derive(Clone, Default, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub store: StoreConfig,
}

/// IRIs used by the cronifier. Unset keys keep the built-in defaults.
#[derive(Clone, Default, Debug, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub timestamp_predicate: Option<String>,
    pub timestamp_datatype: Option<String>,
    pub container_predicate: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("cronify-data"),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Config> {
        toml::from_str(text).context("invalid cronify config")
    }

    pub async fn load(path: &Path) -> Result<Config> {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        Config::from_toml(&text)
    }
}

impl From<VocabularyConfig> for Options {
    fn from(value: VocabularyConfig) -> Self {
        Options {
            timestamp_predicate: value.timestamp_predicate.map(Term::iri),
            timestamp_datatype: value.timestamp_datatype.map(Term::iri),
            container_predicate: value.container_predicate.map(Term::iri),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use anyhow::Result;

    use super::Config;
    use crate::cronify::{Cronifier, Options};
    use crate::vocab::{DC_DATE, HYDRA_MEMBER, Term, XSD_DATE_TIME};

    #[test]
    fn empty_config_uses_defaults() -> Result<()> {
        let config = Config::from_toml("")?;
        assert_eq!(config.store.path, PathBuf::from("cronify-data"));
        let cronifier = Cronifier::new(config.vocabulary.into());
        assert_eq!(cronifier, Cronifier::default());
        Ok(())
    }

    #[test]
    fn partial_vocabulary_override() -> Result<()> {
        let config = Config::from_toml(
            r#"
            [vocabulary]
            container_predicate = "http://www.w3.org/ns/ldp#contains"

            [store]
            path = "/var/lib/cronify"
            "#,
        )?;
        assert_eq!(config.store.path, PathBuf::from("/var/lib/cronify"));
        let cronifier = Cronifier::new(Options::from(config.vocabulary));
        assert_eq!(cronifier.timestamp_predicate(), &DC_DATE);
        assert_eq!(cronifier.timestamp_datatype(), &XSD_DATE_TIME);
        assert_eq!(
            cronifier.container_predicate(),
            &Term::iri("http://www.w3.org/ns/ldp#contains")
        );
        assert_ne!(cronifier.container_predicate(), &HYDRA_MEMBER);
        Ok(())
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(Config::from_toml("[vocabulary]\ntimestamp_predicate = 42").is_err());
    }
}
