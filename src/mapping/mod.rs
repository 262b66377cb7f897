//! Mapping rules: where each output field comes from.
//!
//! A rule either copies the value found at an XML path (`direct`) or writes a fixed
//! string (`constant`). Tables serialize to the same JSON layout the mapping editor
//! exports, so a table can be kept in a file and passed to the CLI.
mod output;

pub use output::{MAX_ARRAY_INDEX, OutputKey, OutputPath, set_nested_value};

use crate::error::TransformError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Common prefix of every field in a shipper load plan.
pub const SHIPPER_LOAD_PLAN_BASE: &str =
    "ProcessTMSShipperLoadPlan.DataArea.TMSShipperLoadPlan.LeanXML.ShipperLoadPlan";

/// Constant written to `route` by the built-in table.
pub const DEFAULT_ROUTE: &str = "123";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "ruleType",
    rename_all = "lowercase",
    rename_all_fields = "camelCase"
)]
pub enum MappingRule {
    /// Copies the value resolved at `source_path`, or `null` when it is absent.
    Direct {
        output_path: String,
        source_path: String,
    },
    /// Writes `constant_value` regardless of the input document.
    Constant {
        output_path: String,
        constant_value: String,
    },
}

impl MappingRule {
    pub fn direct(output_path: &str, source_path: &str) -> Self {
        MappingRule::Direct {
            output_path: output_path.to_string(),
            source_path: source_path.to_string(),
        }
    }

    pub fn constant(output_path: &str, constant_value: &str) -> Self {
        MappingRule::Constant {
            output_path: output_path.to_string(),
            constant_value: constant_value.to_string(),
        }
    }

    pub fn output_path(&self) -> &str {
        match self {
            MappingRule::Direct { output_path, .. } | MappingRule::Constant { output_path, .. } => {
                output_path
            }
        }
    }
}

/// An ordered list of rules. Output keys appear in the order their rules first write them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MappingTable {
    #[serde(rename = "mappings")]
    pub rules: Vec<MappingRule>,
}

impl MappingTable {
    pub fn new(rules: Vec<MappingRule>) -> Self {
        Self { rules }
    }

    /// The built-in shipper load plan → load mapping.
    ///
    /// `stops` always holds a single element built from the first `Stop`.
    pub fn shipper_load_plan() -> Self {
        let field = |suffix: &str| format!("{}.{}", SHIPPER_LOAD_PLAN_BASE, suffix);
        Self::new(vec![
            MappingRule::direct("externalid", &field("LoadNumber")),
            MappingRule::direct("loadid", &field("LoadNumber")),
            MappingRule::constant("route", DEFAULT_ROUTE),
            MappingRule::direct("trailertype", &field("Equipment")),
            MappingRule::direct("stops.0.stop", &field("Stops.Stop.StopNumber")),
            MappingRule::direct(
                "stops.0.loadorderdetails.shipmentorderid",
                &field("Stops.Stop.OrderNums.OrderNum"),
            ),
        ])
    }

    pub fn from_json(source: &str) -> Result<Self, TransformError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TransformError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read mapping table from '{}': {}", path_ref.display(), e),
            )
        })?;
        Self::from_json(&source)
    }

    pub fn to_json(&self) -> Result<String, TransformError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
