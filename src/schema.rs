use std::{collections::BTreeMap, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    sampler::{validate_density, SamplingStrategy},
    setscript::SetScriptParams,
    GenError,
};

pub type FixtureId = String;

// Schema for the TOML fixture file
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct FixtureConfig {
    pub seed: Option<u64>,
    #[serde(default)]
    pub relation: BTreeMap<FixtureId, RelationInfo>,
    #[serde(default)]
    pub sets: BTreeMap<FixtureId, SetsInfo>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct RelationInfo {
    pub output: PathBuf,
    pub num: usize,
    pub density: f64,
    #[serde(default)]
    pub fast: bool,
}

impl RelationInfo {
    pub fn validate(&self) -> Result<(), GenError> {
        if self.num == 0 {
            return Err(GenError::invalid("num must be greater than 0"));
        }
        validate_density(self.density)
    }

    pub fn strategy(&self) -> SamplingStrategy {
        SamplingStrategy::auto(self.num, self.fast)
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct SetsInfo {
    pub output: PathBuf,
    pub sets: usize,
    pub elements: usize,
    pub universe: usize,
}

impl SetsInfo {
    pub fn params(&self) -> SetScriptParams {
        SetScriptParams {
            n_sets: self.sets,
            elements_per_set: self.elements,
            universe_size: self.universe,
        }
    }

    pub fn validate(&self) -> Result<(), GenError> {
        self.params().validate()
    }
}

/// What was generated, stored next to each fixture as `<output>.json`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct FixtureInfo {
    pub seed: u64,
    pub fixture: Fixture,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Fixture {
    Relation(RelationInfo),
    Sets(SetsInfo),
}

impl Fixture {
    pub fn output(&self) -> &PathBuf {
        match self {
            Fixture::Relation(info) => &info.output,
            Fixture::Sets(info) => &info.output,
        }
    }
}

pub fn info_path(output: &PathBuf) -> PathBuf {
    let mut path = output.clone().into_os_string();
    path.push(".json");
    PathBuf::from(path)
}
