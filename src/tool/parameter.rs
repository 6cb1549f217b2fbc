// ABOUTME: ToolParameter - one declared input of a tool.
// ABOUTME: The declared list is what the executor validates arguments against.

/// Declaration of a single tool parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolParameter {
    pub name: String,

    /// Type tag, e.g. "string", "number", "boolean".
    pub param_type: String,

    pub description: String,

    pub required: bool,

    /// Allowed values for string arguments, in declaration order.
    pub enum_values: Option<Vec<String>>,
}

impl ToolParameter {
    /// Create a required string parameter.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: "string".to_string(),
            description: description.into(),
            required: true,
            enum_values: None,
        }
    }

    /// Create a required string parameter.
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description)
    }

    /// Create a required number parameter.
    pub fn number(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description).with_type("number")
    }

    /// Create a required boolean parameter.
    pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description).with_type("boolean")
    }

    /// Set the type tag.
    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    /// Set whether the parameter is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mark the parameter optional.
    pub fn optional(self) -> Self {
        self.required(false)
    }

    /// Restrict string values to the given set.
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Whether `value` is acceptable for this parameter's enum, if any.
    pub fn allows(&self, value: &str) -> bool {
        match &self.enum_values {
            Some(allowed) => allowed.iter().any(|a| a == value),
            None => true,
        }
    }
}
