/// Runtime switches for a single aggregation pass.
///
/// The config is passed explicitly to
/// [`CaseMatrixBuilder`](crate::CaseMatrixBuilder) rather than read from the
/// process environment, so a pass is fully determined by its fixture roots
/// and this value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TckConfig {
    disable_specification_tests: bool,
}

impl TckConfig {
    /// Name of the environment variable front-ends conventionally read the
    /// specification gate from.
    pub const DISABLE_SPECIFICATION_TESTS_ENV_VAR: &'static str =
        "DISABLE_SPECIFICATION_TESTS";

    pub fn new() -> Self {
        Self::default()
    }

    /// When `true`, the specification fixture root is never enumerated and
    /// only implementation-specific fixtures are loaded.
    pub fn with_specification_tests_disabled(mut self, disabled: bool) -> Self {
        self.disable_specification_tests = disabled;
        self
    }

    pub fn specification_tests_disabled(&self) -> bool {
        self.disable_specification_tests
    }

    /// Parses a textual boolean flag value (as found in an environment
    /// variable).
    ///
    /// Accepts `true`/`false`, `yes`/`no`, `on`/`off` and `1`/`0`
    /// (case-insensitive, surrounding whitespace ignored). An empty value is
    /// `false`.
    pub fn parse_flag(value: &str) -> Result<bool, TckConfigError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "" | "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(TckConfigError::InvalidFlagValue(value.to_string())),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TckConfigError {
    #[error("invalid boolean flag value: `{0}`")]
    InvalidFlagValue(String),
}
