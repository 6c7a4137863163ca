//! Paging rules for offspring lookups.
//!
//! Out-of-range values are rejected, never clamped.

use crate::error::CoreError;
use crate::messages::{LIMIT_OUT_OF_RANGE, NEGATIVE_OFFSET};

/// Page size used when the request does not specify `limit`.
pub const DEFAULT_OFFSPRING_LIMIT: i64 = 50;

/// Smallest accepted page size.
pub const MIN_OFFSPRING_LIMIT: i64 = 10;

/// Largest accepted page size.
pub const MAX_OFFSPRING_LIMIT: i64 = 50;

/// Offset used when the request does not specify `offset`.
pub const DEFAULT_OFFSPRING_OFFSET: i64 = 0;

/// A validated `(limit, offset)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffspringPage {
    pub limit: i64,
    pub offset: i64,
}

impl OffspringPage {
    /// Apply defaults and validate raw query values.
    ///
    /// `limit` is checked before `offset`, so a request with both values
    /// out of range reports the `limit` problem.
    pub fn from_query(limit: Option<i64>, offset: Option<i64>) -> Result<Self, CoreError> {
        let limit = limit.unwrap_or(DEFAULT_OFFSPRING_LIMIT);
        let offset = offset.unwrap_or(DEFAULT_OFFSPRING_OFFSET);

        if !(MIN_OFFSPRING_LIMIT..=MAX_OFFSPRING_LIMIT).contains(&limit) {
            return Err(CoreError::Validation(LIMIT_OUT_OF_RANGE.to_string()));
        }
        if offset < 0 {
            return Err(CoreError::Validation(NEGATIVE_OFFSET.to_string()));
        }

        Ok(Self { limit, offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(result: Result<OffspringPage, CoreError>) -> String {
        match result {
            Err(CoreError::Validation(msg)) => msg,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_apply_when_absent() {
        let page = OffspringPage::from_query(None, None).unwrap();
        assert_eq!(page, OffspringPage { limit: 50, offset: 0 });
    }

    #[test]
    fn boundaries_are_accepted() {
        assert!(OffspringPage::from_query(Some(10), Some(0)).is_ok());
        assert!(OffspringPage::from_query(Some(50), Some(0)).is_ok());
        assert!(OffspringPage::from_query(Some(25), Some(10_000)).is_ok());
    }

    #[test]
    fn limit_below_minimum_is_rejected() {
        let msg = validation_message(OffspringPage::from_query(Some(9), Some(0)));
        assert_eq!(msg, LIMIT_OUT_OF_RANGE);
    }

    #[test]
    fn limit_above_maximum_is_rejected() {
        let msg = validation_message(OffspringPage::from_query(Some(51), None));
        assert_eq!(msg, LIMIT_OUT_OF_RANGE);
    }

    #[test]
    fn negative_offset_is_rejected() {
        let msg = validation_message(OffspringPage::from_query(Some(10), Some(-1)));
        assert_eq!(msg, NEGATIVE_OFFSET);
    }

    #[test]
    fn limit_is_reported_before_offset() {
        let msg = validation_message(OffspringPage::from_query(Some(9), Some(-1)));
        assert_eq!(msg, LIMIT_OUT_OF_RANGE);
    }
}
