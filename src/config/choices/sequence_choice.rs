use crate::config::choices::Choice;
use crate::wealth::stitching::{DEFAULT_ETA, DEFAULT_S};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_lower() -> f64 {
    0.0
}

fn default_upper() -> f64 {
    1.0
}

fn default_eta() -> f64 {
    DEFAULT_ETA
}

fn default_s() -> f64 {
    DEFAULT_S
}

fn default_xtol() -> f64 {
    2e-12
}

fn default_max_iterations() -> usize {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SequenceKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SequenceChoice {
    #[strum_discriminants(strum(
        message = "Standard",
        detailed_message = "Stitched empirical-Bernstein sequence for bounded values."
    ))]
    Standard(StandardParameters),

    #[strum_discriminants(strum(
        message = "Robust",
        detailed_message = "Mixture betting sequence tolerant of heavy-tailed importance weights."
    ))]
    Robust(RobustParameters),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StandardParameters {
    #[serde(default = "default_lower")]
    #[schemars(
        title = "Lower",
        description = "Declared lower end of the value range; smaller values are clipped",
        default = "default_lower"
    )]
    pub lower: f64,

    #[serde(default = "default_upper")]
    #[schemars(
        title = "Upper",
        description = "Declared upper end of the value range; larger values are clipped",
        default = "default_upper"
    )]
    pub upper: f64,

    #[serde(default = "default_eta")]
    #[schemars(
        title = "Eta",
        description = "Geometric epoch spacing of the stitched boundary (> 1)",
        range(min = 1.0),
        default = "default_eta"
    )]
    pub eta: f64,

    #[serde(default = "default_s")]
    #[schemars(
        title = "S",
        description = "Exponent of the epoch weights (> 1)",
        range(min = 1.0),
        default = "default_s"
    )]
    pub s: f64,
}

impl Default for StandardParameters {
    fn default() -> Self {
        Self {
            lower: default_lower(),
            upper: default_upper(),
            eta: default_eta(),
            s: default_s(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RobustParameters {
    #[serde(default = "default_lower")]
    #[schemars(
        title = "Lower",
        description = "Anchor of the lower one-sided process",
        default = "default_lower"
    )]
    pub lower: f64,

    #[serde(default = "default_upper")]
    #[schemars(
        title = "Upper",
        description = "Anchor of the upper one-sided process",
        default = "default_upper"
    )]
    pub upper: f64,

    #[serde(default = "default_xtol")]
    #[schemars(
        title = "Root Tolerance",
        description = "Absolute tolerance of the bound root-finder",
        range(min = 0.0),
        default = "default_xtol"
    )]
    pub xtol: f64,

    #[serde(default = "default_max_iterations")]
    #[schemars(
        title = "Max Iterations",
        description = "Iteration budget of the bound root-finder",
        range(min = 1),
        default = "default_max_iterations"
    )]
    pub max_iterations: usize,
}

impl Default for RobustParameters {
    fn default() -> Self {
        Self {
            lower: default_lower(),
            upper: default_upper(),
            xtol: default_xtol(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl Choice for SequenceChoice {
    type Kind = SequenceKind;

    fn schema() -> Schema {
        schema_for!(SequenceChoice)
    }

    fn default_params(kind: Self::Kind) -> anyhow::Result<Value> {
        Ok(match kind {
            SequenceKind::Standard => serde_json::to_value(StandardParameters::default())?,
            SequenceKind::Robust => serde_json::to_value(RobustParameters::default())?,
        })
    }
}
