use crate::config::choices::{Choice, SequenceChoice, StreamChoice};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_alpha() -> f64 {
    0.05
}

fn default_sample_frequency() -> u64 {
    1_000
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MonitorParams {
    #[schemars(skip)]
    pub sequence: SequenceChoice,
    #[schemars(skip)]
    pub stream: StreamChoice,

    #[serde(default = "default_alpha")]
    #[schemars(
        title = "Alpha",
        description = "Miscoverage level of the confidence sequence, in (0, 1)",
        range(min = 0.0, max = 1.0),
        default = "default_alpha"
    )]
    pub alpha: f64,

    #[serde(default)]
    #[schemars(
        title = "Max Observations",
        description = "Stop after this many observations (None = unlimited)"
    )]
    pub max_observations: Option<u64>,

    #[serde(default = "default_sample_frequency")]
    #[schemars(
        title = "Sample Frequency",
        description = "Record the interval every N observations",
        range(min = 1),
        default = "default_sample_frequency"
    )]
    pub sample_frequency: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Monitor Sequentially",
        detailed_message = "Feed a stream into a confidence sequence and record its bounds."
    ))]
    MonitorSequential(MonitorParams),
}

impl Choice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn default_params(kind: Self::Kind) -> anyhow::Result<Value> {
        Ok(match kind {
            TaskKind::MonitorSequential => json!({
                "alpha": default_alpha(),
                "max_observations": null,
                "sample_frequency": default_sample_frequency(),
            }),
        })
    }
}
