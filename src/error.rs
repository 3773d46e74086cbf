use thiserror::Error;
use tracing::warn;

pub type Result<T> = std::result::Result<T, SketchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    #[error("invalid sketch configuration: {0}")]
    InvalidConfiguration(&'static str),

    #[error("cannot merge sketches: {0}")]
    IncompatibleMerge(&'static str),
}

impl SketchError {
    pub(crate) fn invalid_configuration(reason: &'static str) -> Self {
        warn!(reason, "rejected sketch configuration");
        Self::InvalidConfiguration(reason)
    }

    pub(crate) fn incompatible_merge(reason: &'static str) -> Self {
        warn!(reason, "rejected sketch merge");
        Self::IncompatibleMerge(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SketchError::InvalidConfiguration("size must be > 0").to_string(),
            "invalid sketch configuration: size must be > 0"
        );
        assert_eq!(
            SketchError::IncompatibleMerge("precision differs").to_string(),
            "cannot merge sketches: precision differs"
        );
    }
}
