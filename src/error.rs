//! Validation errors for calculation inputs.

/// Errors returned when a [`CalculationInput`](crate::CalculationInput) or a
/// fee table entry is rejected at the library boundary.
///
/// [`compute`](crate::compute) itself never fails; these errors only come
/// from the checked entry points.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    /// A monetary amount was below zero.
    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },
    /// A monetary amount or rate was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    /// A percentage fell outside `[0, 100]`.
    #[error("{field} must be between 0 and 100, got {value}")]
    RateOutOfRange { field: &'static str, value: f64 },
    /// `units_per_day` or `days` was zero.
    #[error("{field} must be at least 1")]
    ZeroProjection { field: &'static str },
    /// No fee table entry for the requested platform id.
    #[error("unknown platform")]
    UnknownPlatform,
    /// A fee table entry was given a blank platform id.
    #[error("platform id must not be empty")]
    EmptyPlatformId,
}
