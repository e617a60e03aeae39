use type_mapping::LiteralFormatter;

pub const DEFAULT_PARAMETER_PREFIX: &str = "@";

/// Per-builder settings, usually handed out by the facade from loaded configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderSettings {
    /// Tag in front of parameter names, stripped by `parameters_map`
    pub parameter_prefix: String,
    /// Log every rendered statement at debug level
    pub log_statements: bool,
    pub literals: LiteralFormatter,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            parameter_prefix: DEFAULT_PARAMETER_PREFIX.to_string(),
            log_statements: false,
            literals: LiteralFormatter::default(),
        }
    }
}

impl BuilderSettings {
    pub fn with_parameter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parameter_prefix = prefix.into();
        self
    }

    pub fn with_log_statements(mut self, enabled: bool) -> Self {
        self.log_statements = enabled;
        self
    }

    pub fn with_literals(mut self, literals: LiteralFormatter) -> Self {
        self.literals = literals;
        self
    }
}
