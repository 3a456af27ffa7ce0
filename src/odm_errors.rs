use thiserror::Error;

#[derive(Error, Debug)]
pub enum OdmError {
    #[error("Missing mandatory keyword: {0}")]
    MissingKeyword(String),

    #[error("{0} failed validation")]
    InvalidValue(String),

    #[error("Missing mandatory data block: {0}")]
    MissingBlock(String),

    #[error("Duplicate keyword: {0}")]
    DuplicateKeyword(String),

    #[error("Block prerequisite not met: {0}")]
    PrerequisiteFailed(String),

    #[error("Data block type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Invalid {kind} value: {value}")]
    InvalidEnumValue { kind: &'static str, value: String },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for OdmError {
    fn eq(&self, other: &Self) -> bool {
        use OdmError::*;
        match (self, other) {
            (MissingKeyword(a), MissingKeyword(b)) => a == b,
            (InvalidValue(a), InvalidValue(b)) => a == b,
            (MissingBlock(a), MissingBlock(b)) => a == b,
            (DuplicateKeyword(a), DuplicateKeyword(b)) => a == b,
            (PrerequisiteFailed(a), PrerequisiteFailed(b)) => a == b,
            (TypeMismatch(a), TypeMismatch(b)) => a == b,
            (
                InvalidEnumValue {
                    kind: k1,
                    value: v1,
                },
                InvalidEnumValue {
                    kind: k2,
                    value: v2,
                },
            ) => k1 == k2 && v1 == v2,

            // io::Error is not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
