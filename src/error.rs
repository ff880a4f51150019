//! Error types for conversions.
//!
//! Every in-memory operation of this crate is total except the conversions
//! that render elements through [`std::fmt::Display`]. A `Display`
//! implementation is allowed to fail, and when it does the failure is reported
//! through [`ConversionError`] instead of a partially built string or map.

use thiserror::Error;

/// Represents a failure while converting elements to their string form.
///
/// # Examples
///
/// ```rust
/// use conveyor::ConversionError;
///
/// let error = ConversionError::Render {
///     index: 2,
///     source: std::fmt::Error,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "failed to render element at index 2: an error occurred when formatting an argument"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The element at `index` returned an error from its `Display` implementation.
    #[error("failed to render element at index {index}: {source}")]
    Render {
        /// Position of the offending element in the sequence.
        index: usize,
        /// The formatter error reported by the element.
        #[source]
        source: std::fmt::Error,
    },
}

impl ConversionError {
    /// Returns the position of the element that could not be converted.
    pub const fn index(&self) -> usize {
        match self {
            Self::Render { index, .. } => *index,
        }
    }
}
