//! Error types for the conversion pipeline.

/// Error taxonomy for the whole pipeline: input parsing, curve construction,
/// scene export. There is no recovery path for any variant; a failed curve or
/// write aborts the run before an output file is finalized.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    /// The input document is not valid JSON.
    #[error("input is not valid JSON: {reason}")]
    MalformedInput { reason: String },

    /// A pose lacked a required field (or held a non-numeric value) when a
    /// curve build visited it.
    #[error("pose {index} is missing numeric field '{field}'")]
    MissingField { field: String, index: usize },

    /// The scene SDK or the file writer downstream of the core failed.
    #[error("export failed: {reason}")]
    ExportFailure { reason: String },
}

impl ConvertError {
    pub fn missing(field: impl Into<String>, index: usize) -> Self {
        Self::MissingField {
            field: field.into(),
            index,
        }
    }

    pub fn export(reason: impl Into<String>) -> Self {
        Self::ExportFailure {
            reason: reason.into(),
        }
    }

    /// Coarse label for log lines.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => "parse",
            Self::MissingField { .. } => "data",
            Self::ExportFailure { .. } => "export",
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::ExportFailure {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(ConvertError::missing("timestamp", 3).category(), "data");
        assert_eq!(ConvertError::export("disk full").category(), "export");

        let parse_err = serde_json::from_str::<serde_json::Value>("{")
            .map_err(ConvertError::from)
            .unwrap_err();
        assert_eq!(parse_err.category(), "parse");
    }

    #[test]
    fn test_missing_field_message_names_field_and_index() {
        let err = ConvertError::missing("position.x", 7);
        assert_eq!(err.to_string(), "pose 7 is missing numeric field 'position.x'");
    }
}
