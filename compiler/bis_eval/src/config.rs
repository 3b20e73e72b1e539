//! Runtime configuration.

/// Name invoked after linkage when no other entry is configured.
pub const DEFAULT_ENTRY: &str = "main";

/// Knobs for a single program run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Maximum nesting of invocations; `None` means unlimited.
    pub max_call_depth: Option<usize>,
    /// Binding invoked once linkage completes.
    pub entry: String,
}

impl RuntimeConfig {
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            max_call_depth: None,
            entry: DEFAULT_ENTRY.to_string(),
        }
    }
}
