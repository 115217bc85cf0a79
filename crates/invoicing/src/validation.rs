//! Form validation run before a draft is trusted.
//!
//! `compute_totals` accepts anything; rejecting bad input is done here, in
//! front of submission.

use rust_decimal::Decimal;

use billdesk_core::{DomainError, DomainResult};

use crate::draft::InvoiceDraft;
use crate::line_item::LineItem;

/// Largest quantity accepted on one line.
pub fn max_quantity() -> Decimal {
    Decimal::from(1_000_000)
}

/// Largest per-unit rate accepted on one line (one thousand crore).
pub fn max_rate() -> Decimal {
    Decimal::from(10_000_000_000i64)
}

/// Validate a draft, collecting every problem into one
/// [`DomainError::Validation`].
pub fn validate_draft(draft: &InvoiceDraft) -> DomainResult<()> {
    let mut errors = Vec::new();

    if draft.billed_to().company_name.trim().is_empty() {
        errors.push("Company Name is required.".to_string());
    }

    if draft.items().is_empty() {
        errors.push("Please add at least one line item.".to_string());
    }

    for (index, item) in draft.items().iter().enumerate() {
        errors.extend(item_errors(index, item));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation_all(errors))
    }
}

/// Field problems of a single line item (`index` is 0-based, messages are
/// 1-based like the form rows).
pub fn item_errors(index: usize, item: &LineItem) -> Vec<String> {
    let row = index + 1;
    let mut errors = Vec::new();

    if item.description.trim().is_empty() {
        errors.push(format!("Item {row}: description is required."));
    }
    if item.quantity <= Decimal::ZERO {
        errors.push(format!("Item {row}: quantity must be greater than 0."));
    } else if item.quantity > max_quantity() {
        errors.push(format!("Item {row}: quantity cannot exceed {}.", max_quantity()));
    }
    if item.rate < Decimal::ZERO {
        errors.push(format!("Item {row}: rate cannot be negative."));
    } else if item.rate > max_rate() {
        errors.push(format!("Item {row}: rate cannot exceed {}.", max_rate()));
    }
    if item.gst_percentage < Decimal::ZERO || item.gst_percentage > Decimal::ONE_HUNDRED {
        errors.push(format!("Item {row}: GST % must be between 0 and 100."));
    }

    errors
}
