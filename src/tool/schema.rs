// ABOUTME: Schema descriptors exported from the registry for the oracle.
// ABOUTME: Property and required ordering follow parameter declaration order.

use serde::{Serialize, Serializer};

use super::{Tool, ToolParameter};

/// Exported descriptor for one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub parameters: ParametersSchema,
}

/// JSON-Schema-like object describing a tool's parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParametersSchema {
    /// Always "object".
    #[serde(rename = "type")]
    pub schema_type: String,

    #[serde(serialize_with = "serialize_ordered")]
    pub properties: Vec<(String, PropertySchema)>,

    pub required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub property_type: String,

    pub description: String,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl ToolSchema {
    /// Build the descriptor for a tool.
    pub fn from_tool(tool: &dyn Tool) -> Self {
        Self {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: ParametersSchema::from_parameters(&tool.parameters()),
        }
    }

    /// Look up a property by parameter name.
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.parameters
            .properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }
}

impl ParametersSchema {
    pub fn from_parameters(parameters: &[ToolParameter]) -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: parameters
                .iter()
                .map(|p| {
                    (
                        p.name.clone(),
                        PropertySchema {
                            property_type: p.param_type.clone(),
                            description: p.description.clone(),
                            enum_values: p.enum_values.clone(),
                        },
                    )
                })
                .collect(),
            required: parameters
                .iter()
                .filter(|p| p.required)
                .map(|p| p.name.clone())
                .collect(),
        }
    }
}

fn serialize_ordered<S: Serializer>(
    properties: &[(String, PropertySchema)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(properties.iter().map(|(name, schema)| (name, schema)))
}
