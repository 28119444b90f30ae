//! Error types for fluency core
//!
//! The learning path engine itself is total and never fails; errors here
//! cover parsing of the textual labels records are stored with.

/// Failed to parse a textual label into its enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// Label is not one of the known values
    #[error("unknown {kind} label: '{value}'")]
    Unknown {
        /// Which label family was being parsed
        kind: &'static str,
        /// The rejected input
        value: String,
    },
}

impl LabelError {
    /// Create unknown-label error
    #[inline]
    #[must_use]
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unknown {
            kind,
            value: value.into(),
        }
    }
}
