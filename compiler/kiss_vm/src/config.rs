//! Simulator settings.

/// Settings for one run.
#[derive(Clone, Debug)]
pub struct VmConfig {
    /// Values handed out, in order, by the `READ` routine.
    pub input: Vec<i64>,
    /// Instructions to execute before giving up on a program that does not halt.
    pub max_steps: u64,
}

impl VmConfig {
    pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

    #[must_use]
    pub fn with_input(mut self, input: impl IntoIterator<Item = i64>) -> Self {
        self.input = input.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }
}
