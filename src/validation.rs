//! Input diagnostics for timeline coloring.
//!
//! The coloring pipeline never rejects input: bad positions fall back to
//! the unassigned path. These checks let callers surface problems instead.
//! Detects:
//! - Duplicate order IDs
//! - Shifts outside `1..=shift_count`
//! - Contrast matrices that are asymmetric, have a non-zero diagonal, or
//!   score outside 0..=10

use std::collections::HashSet;

use crate::coloring::ColoringConfig;
use crate::models::{ContrastMatrix, Order, OrderId};

/// Highest allowed contrast score.
pub const MAX_CONTRAST: u32 = 10;

/// `Ok(())` or every problem found, in detection order.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// One problem in caller input.
///
/// `Display` prints the message alone, ready for a UI banner or a log line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    /// The offending order; `None` for contrast matrix problems.
    pub order: Option<OrderId>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    DuplicateId,
    /// Shift outside `1..=shift_count`; the order will use the fallback color.
    ShiftOutOfRange,
    AsymmetricContrast,
    NonZeroDiagonal,
    /// Score above [`MAX_CONTRAST`].
    ContrastOutOfRange,
}

impl ValidationError {
    fn for_order(kind: ValidationErrorKind, id: OrderId, message: String) -> Self {
        Self {
            kind,
            order: Some(id),
            message,
        }
    }

    fn for_matrix(kind: ValidationErrorKind, message: String) -> Self {
        Self {
            kind,
            order: None,
            message,
        }
    }
}

/// Reports duplicate IDs and shifts outside `1..=config.shift_count`.
///
/// Orders without a line are valid; they simply skip the grid.
pub fn validate_orders(orders: &[Order], config: &ColoringConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for order in orders {
        if !ids.insert(order.id) {
            errors.push(ValidationError::for_order(
                ValidationErrorKind::DuplicateId,
                order.id,
                format!("order {} appears more than once", order.id),
            ));
        }
        if !config.is_valid_shift(order.shift) {
            errors.push(ValidationError::for_order(
                ValidationErrorKind::ShiftOutOfRange,
                order.id,
                format!(
                    "order {} has shift {} outside 1..={}",
                    order.id, order.shift, config.shift_count
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports contrast scores that break symmetry, the zero diagonal, or the
/// 0..=10 range. Each unordered pair is reported once.
pub fn validate_contrast_matrix(matrix: &ContrastMatrix) -> ValidationResult {
    let mut errors = Vec::new();
    let n = matrix.size();

    for a in 0..n {
        if matrix.contrast(a, a) != 0 {
            errors.push(ValidationError::for_matrix(
                ValidationErrorKind::NonZeroDiagonal,
                format!("contrast({a}, {a}) = {}", matrix.contrast(a, a)),
            ));
        }
        for b in a..n {
            let (ab, ba) = (matrix.contrast(a, b), matrix.contrast(b, a));
            if ab != ba {
                errors.push(ValidationError::for_matrix(
                    ValidationErrorKind::AsymmetricContrast,
                    format!("contrast({a}, {b}) = {ab} but contrast({b}, {a}) = {ba}"),
                ));
            }
            if ab > MAX_CONTRAST {
                errors.push(out_of_range(a, b, ab));
            }
            if ba != ab && ba > MAX_CONTRAST {
                errors.push(out_of_range(b, a, ba));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn out_of_range(a: usize, b: usize, score: u32) -> ValidationError {
    ValidationError::for_matrix(
        ValidationErrorKind::ContrastOutOfRange,
        format!("contrast({a}, {b}) = {score} exceeds {MAX_CONTRAST}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PALETTE_SIZE;

    fn order(id: i64, shift: i32) -> Order {
        Order::parse(id, "2025-01-15", shift, Some(1)).unwrap()
    }

    fn uniform_scores() -> [[u8; PALETTE_SIZE]; PALETTE_SIZE] {
        let mut scores = [[5u8; PALETTE_SIZE]; PALETTE_SIZE];
        for (i, row) in scores.iter_mut().enumerate() {
            row[i] = 0;
        }
        scores
    }

    #[test]
    fn test_valid_orders() {
        let orders = vec![order(1, 1), order(2, 3), Order::parse(3, "2025-01-16", 2, None).unwrap()];
        assert!(validate_orders(&orders, &ColoringConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let orders = vec![order(1, 1), order(1, 2)];
        let errors = validate_orders(&orders, &ColoringConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert_eq!(errors[0].order, Some(1));
        assert_eq!(errors[0].to_string(), "order 1 appears more than once");
    }

    #[test]
    fn test_shift_out_of_range() {
        let orders = vec![order(1, 0), order(2, 4)];
        let errors = validate_orders(&orders, &ColoringConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::ShiftOutOfRange));
        assert_eq!(
            errors.iter().map(|e| e.order).collect::<Vec<_>>(),
            vec![Some(1), Some(2)]
        );

        let wide = ColoringConfig::new().with_shift_count(4);
        assert!(validate_orders(&orders[1..], &wide).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let orders = vec![order(1, 1), order(1, 9)];
        let errors = validate_orders(&orders, &ColoringConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_default_matrix_valid() {
        assert!(validate_contrast_matrix(&ContrastMatrix::DEFAULT).is_ok());
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut scores = uniform_scores();
        scores[2][7] = 9;
        let errors = validate_contrast_matrix(&ContrastMatrix::from_scores(scores)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::AsymmetricContrast);
        assert_eq!(errors[0].order, None);
    }

    #[test]
    fn test_nonzero_diagonal() {
        let mut scores = uniform_scores();
        scores[4][4] = 1;
        let errors = validate_contrast_matrix(&ContrastMatrix::from_scores(scores)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonZeroDiagonal);
    }

    #[test]
    fn test_out_of_range_reported_once_per_pair() {
        let mut scores = uniform_scores();
        scores[0][1] = 11;
        scores[1][0] = 11;
        let errors = validate_contrast_matrix(&ContrastMatrix::from_scores(scores)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ContrastOutOfRange);
    }
}
