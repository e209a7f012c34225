// ============================================================================
// Landlord Core - Amount Validation
// File: crates/landlord-core/src/domain/amount.rs
// Description: Money field validation shared by the input types
// ============================================================================

use validator::ValidationError;

/// Rejects NaN and infinities, which `range` lets through.
pub(crate) fn finite_amount(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        return Ok(());
    }
    let mut err = ValidationError::new("finite");
    err.message = Some("Amount must be a finite number".into());
    Err(err)
}
