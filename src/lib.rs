//! Converts TMS shipper load plan XML documents into the flat load JSON shape.
//!
//! Field values are pulled out with `loadplan-xmlpath` path expressions and placed by a
//! [`MappingTable`]. The built-in table produces:
//!
//! ```text
//! { "externalid", "loadid", "route": "123", "trailertype",
//!   "stops": [ { "stop", "loadorderdetails": { "shipmentorderid" } } ] }
//! ```

pub mod error;
pub mod json;
pub mod mapping;
pub mod transformer;

pub use error::TransformError;
pub use json::{AsciiEscaped, JsonStyle, to_json_string};
pub use loadplan_xmlpath as xmlpath;
pub use mapping::{
    MAX_ARRAY_INDEX, MappingRule, MappingTable, OutputKey, OutputPath, set_nested_value,
};
pub use transformer::{Transformer, TransformerBuilder, transform};
