use crate::config::choices::Choice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_reward_probabilities() -> Vec<f64> {
    vec![0.2, 0.5, 0.8]
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OffPolicyParameters {
    #[serde(default = "default_reward_probabilities")]
    #[schemars(
        title = "Reward Probabilities",
        description = "Bernoulli reward probability of each action (0.0–1.0)",
        default = "default_reward_probabilities"
    )]
    pub reward_probabilities: Vec<f64>,

    #[serde(default)]
    #[schemars(
        title = "Target Action",
        description = "Zero-based action always played by the evaluated policy",
        range(min = 0)
    )]
    pub target_action: usize,

    #[serde(default)]
    #[schemars(
        title = "Max Observations",
        description = "Upper bound on observations; empty = infinite"
    )]
    pub max_observations: Option<u64>,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for OffPolicyParameters {
    fn default() -> Self {
        Self {
            reward_probabilities: default_reward_probabilities(),
            target_action: 0,
            max_observations: None,
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(StreamKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum StreamChoice {
    #[strum_discriminants(strum(
        message = "Off-Policy Generator",
        detailed_message = "Uniformly logged bandit feedback re-weighted toward a fixed target action."
    ))]
    OffPolicyGenerator(OffPolicyParameters),
}

impl Choice for StreamChoice {
    type Kind = StreamKind;

    fn schema() -> Schema {
        schema_for!(StreamChoice)
    }

    fn default_params(kind: Self::Kind) -> anyhow::Result<Value> {
        Ok(match kind {
            StreamKind::OffPolicyGenerator => {
                serde_json::to_value(OffPolicyParameters::default())?
            }
        })
    }
}
