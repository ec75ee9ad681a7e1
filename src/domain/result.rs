//! Result type alias for depscreen
//!
//! This module provides a convenient Result type alias that uses MeasureError
//! as the error type.

use super::errors::MeasureError;

/// Result type alias for depscreen operations
///
/// # Examples
///
/// ```
/// use depscreen::domain::result::Result;
/// use depscreen::domain::errors::MeasureError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MeasureError::MissingData("no encounters".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MeasureError>;
