use thiserror::Error;

/// Errors returned by IMU report reading.
///
/// # Examples
/// ```
/// use airscope_core::ImuReportError;
///
/// let err = ImuReportError::TooShort { needed: 64, actual: 9 };
/// assert!(err.to_string().contains("report too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImuReportError {
    #[error("report too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
