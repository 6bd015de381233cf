//! Error types and test outcomes for generative property testing.

use std::fmt;
use thiserror::Error;

/// Main error type for generative property testing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerativeError {
    /// A generator or run was configured with impossible constraints.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A property body reported a failed assertion.
    #[error("Assertion failed: {message}")]
    Assertion { message: String },

    /// Property test failed with a (shrunk) counterexample.
    #[error("Property test failed: {message} (counterexample: {counterexample})")]
    PropertyFailed {
        counterexample: String,
        message: String,
        tests_run: usize,
        shrinks_performed: usize,
    },
}

impl GenerativeError {
    /// Shorthand for [`GenerativeError::InvalidConfiguration`].
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        GenerativeError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Shorthand for [`GenerativeError::Assertion`].
    pub fn assertion(message: impl Into<String>) -> Self {
        GenerativeError::Assertion {
            message: message.into(),
        }
    }
}

/// Result type for generative operations.
pub type Result<T> = std::result::Result<T, GenerativeError>;

/// One generated input of a failing trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterexample {
    /// Label attached with `named_var` or `Generator::named`, if any.
    pub variable_name: Option<String>,
    /// `Debug` rendering of the value.
    pub value: String,
}

impl fmt::Display for Counterexample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variable_name {
            Some(name) => write!(f, "{} = {}", name, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// A shrinking step in the failure progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkStep {
    /// The counterexample value at this step.
    pub counterexample: String,
    /// The step number (0 = original, 1+ = adopted shrinks).
    pub step: usize,
    /// Optional variable name for this input (e.g., "xs", "n", "input").
    pub variable_name: Option<String>,
}

/// Outcome of a property test.
#[derive(Debug, Clone, PartialEq)]
pub enum TestResult {
    /// Every trial passed.
    Pass {
        tests_run: usize,
        property_name: Option<String>,
    },

    /// A trial failed; `counterexample` holds the minimized inputs.
    Fail {
        counterexample: Vec<Counterexample>,
        message: String,
        tests_run: usize,
        shrinks_performed: usize,
        property_name: Option<String>,
        seed: u64,
        /// The shrinking progression showing how we reached the minimal counterexample.
        shrink_steps: Vec<ShrinkStep>,
    },
}

impl TestResult {
    /// Check if the run passed.
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass { .. })
    }

    /// Check if the run failed.
    pub fn is_fail(&self) -> bool {
        matches!(self, TestResult::Fail { .. })
    }

    /// Convert a failing outcome into [`GenerativeError::PropertyFailed`].
    pub fn into_result(self) -> Result<()> {
        match self {
            TestResult::Pass { .. } => Ok(()),
            TestResult::Fail {
                counterexample,
                message,
                tests_run,
                shrinks_performed,
                ..
            } => Err(GenerativeError::PropertyFailed {
                counterexample: counterexample
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                message,
                tests_run,
                shrinks_performed,
            }),
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestResult::Pass {
                tests_run,
                property_name,
            } => {
                let prop_name = property_name.as_deref().unwrap_or("property");
                write!(f, "  ✓ {} passed {} tests.", prop_name, tests_run)
            }
            TestResult::Fail {
                counterexample,
                message,
                tests_run,
                shrinks_performed,
                property_name,
                seed,
                shrink_steps,
            } => {
                let prop_name = property_name.as_deref().unwrap_or("property");
                writeln!(
                    f,
                    "  ✗ {} failed after {} tests and {} shrinks.",
                    prop_name, tests_run, shrinks_performed
                )?;

                if !shrink_steps.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "    Shrinking progression:")?;
                    for step in shrink_steps {
                        match (&step.variable_name, step.step) {
                            (Some(var_name), n) => writeln!(
                                f,
                                "      │ forAll {} = {} -- {}",
                                n, step.counterexample, var_name
                            )?,
                            (None, 0) => {
                                writeln!(f, "      │ Original: {}", step.counterexample)?
                            }
                            (None, n) => {
                                writeln!(f, "      │ Step {}: {}", n, step.counterexample)?
                            }
                        }
                    }
                    writeln!(f)?;
                }

                writeln!(f, "    === {} ===", message)?;
                writeln!(f, "    Minimal counterexample:")?;
                for input in counterexample {
                    writeln!(f, "      {}", input)?;
                }
                write!(f, "    Seed: {}", seed)
            }
        }
    }
}
