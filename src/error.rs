use alloc::string::String;

/// An error occurred when parsing an [`EncodingStrategy`] from its name.
///
/// [`EncodingStrategy`]: crate::EncodingStrategy
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseStrategyError {
    pub(crate) input: String,
}

impl ParseStrategyError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Recovers the input that failed to parse.
    #[must_use]
    pub fn into_input(self) -> String {
        self.input
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for ParseStrategyError {}
