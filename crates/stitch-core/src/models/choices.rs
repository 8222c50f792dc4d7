//! Choice enumerations for sample confirmation, production speed, and stage
//! kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of sample confirmation methods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationMethod {
    /// Confirm remotely with photos/video of the sample
    #[default]
    Photo,

    /// Ship a physical sample for hands-on confirmation
    Physical,
}

impl FromStr for ConfirmationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "photo" => Ok(ConfirmationMethod::Photo),
            "physical" => Ok(ConfirmationMethod::Physical),
            _ => Err(format!("Invalid confirmation method: {s}")),
        }
    }
}

impl ConfirmationMethod {
    /// Convert to the token used in scenario ids and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmationMethod::Photo => "photo",
            ConfirmationMethod::Physical => "physical",
        }
    }

    /// Human-readable label for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            ConfirmationMethod::Photo => "photo confirmation",
            ConfirmationMethod::Physical => "physical sample",
        }
    }
}

/// Type-safe enumeration of production speeds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductionSpeed {
    /// Standard production run
    #[default]
    Normal,

    /// Expedited production run
    Express,
}

impl FromStr for ProductionSpeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(ProductionSpeed::Normal),
            "express" => Ok(ProductionSpeed::Express),
            _ => Err(format!("Invalid production speed: {s}")),
        }
    }
}

impl ProductionSpeed {
    /// Convert to the token used in scenario ids and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionSpeed::Normal => "normal",
            ProductionSpeed::Express => "express",
        }
    }

    /// Human-readable label for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            ProductionSpeed::Normal => "normal production",
            ProductionSpeed::Express => "express production",
        }
    }
}

/// Kind of a pipeline stage in a projected timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    /// First prototype, confirmed before any rework
    InitialSample,

    /// One round of sample rework and reconfirmation
    Revision,

    /// Bulk manufacturing run
    Production,
}

impl StageKind {
    /// Human-readable label for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            StageKind::InitialSample => "Initial sample",
            StageKind::Revision => "Revision",
            StageKind::Production => "Production",
        }
    }
}
