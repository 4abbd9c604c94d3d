use thiserror::Error;

/// Input that does not have the shape of a scroll at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("Parsed scroll content is not a mapping.")]
    NotAMapping,

    #[error("Scroll metadata is not a mapping.")]
    MetadataNotAMapping,

    #[error("Metadata field '{0}' is not a scalar value.")]
    MetadataValueNotScalar(String),

    #[error("Ceremony steps are not a sequence.")]
    StepsNotASequence,

    #[error("Ceremony step {0} is not a mapping.")]
    StepNotAMapping(usize),

    #[error("Field '{field}' of ceremony step {index} is not text.")]
    StepFieldNotText { index: usize, field: String },
}
