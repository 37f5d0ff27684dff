use thiserror::Error;

/// Errors returned by clustering and dataset conversion in this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// An attribute selector does not name a column of the dataset.
    #[error("unknown attribute {index}: dataset has {n_attributes} attributes")]
    UnknownAttribute {
        /// Requested attribute index.
        index: usize,
        /// Number of attributes in the dataset.
        n_attributes: usize,
    },

    /// A selected attribute is not numeric.
    #[error("attribute {name:?} is not numeric")]
    NonNumericAttribute {
        /// Attribute name.
        name: String,
    },

    /// A selected cell has no numeric value.
    #[error("row {row} has no numeric value for attribute {attribute:?}")]
    MissingValue {
        /// Row index.
        row: usize,
        /// Attribute name.
        attribute: String,
    },

    /// Rows in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch at row {row}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Offending row.
        row: usize,
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },
}

impl Error {
    /// Whether this error came from converting rows into numeric vectors.
    pub fn is_conversion(&self) -> bool {
        !matches!(self, Error::InvalidParameter { .. })
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
