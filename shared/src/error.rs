use thiserror::Error;

/// Failures raised while building section or page configuration.
///
/// These surface when content is constructed or loaded, never while a
/// section renders.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variant tag outside the closed set a section accepts.
    #[error("unknown {section} variant `{value}`")]
    InvalidVariant {
        /// Section the tag was given for.
        section: &'static str,
        /// The rejected tag.
        value: String,
    },

    /// A contact field descriptor naming an unsupported input kind.
    #[error("contact field `{field}` has unsupported input kind `{kind}`")]
    InvalidFieldKind {
        /// Field name, or empty when the kind was parsed on its own.
        field: String,
        /// The rejected kind.
        kind: String,
    },

    /// Page configuration JSON that does not match the content model.
    #[error("invalid page configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
