//! Draft submission to the billing backend.

use thiserror::Error;
use tracing::{info, warn};

use billdesk_core::{DomainError, Entity};

use crate::backend::{BackendError, BillingBackend, SubmittedInvoice};
use crate::draft::InvoiceDraft;
use crate::payload::InvoicePayload;
use crate::validation::validate_draft;

/// Why a draft was not persisted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The draft failed validation; the backend was not called.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The backend rejected or failed the request.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Validate `draft`, recompute its totals from the items and address, and
/// post the snapshot to `backend`.
///
/// The backend is called at most once. Failures are returned to the caller
/// for reporting; nothing is retried.
pub fn submit_invoice<B>(
    draft: &InvoiceDraft,
    backend: &B,
) -> Result<SubmittedInvoice, SubmissionError>
where
    B: BillingBackend + ?Sized,
{
    validate_draft(draft)?;

    let payload = InvoicePayload::from_draft(draft);

    match backend.create_invoice(&payload) {
        Ok(created) => {
            info!(
                draft_id = %draft.id(),
                invoice_id = %created.invoice_id,
                total_amount = %payload.total_amount,
                items = payload.items.len(),
                "invoice submitted"
            );
            Ok(created)
        }
        Err(err) => {
            warn!(
                draft_id = %draft.id(),
                status = ?err.status,
                error = %err.message,
                "billing backend rejected invoice"
            );
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::InMemoryBillingBackend;
    use crate::line_item::LineItem;
    use crate::party::{BilledBy, BilledTo};
    use crate::totals::{InvoiceTotals, compute_totals};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn draft(company: &str) -> InvoiceDraft {
        let issuer = BilledBy {
            company_name: "Issuer".to_string(),
            address: "Delhi".to_string(),
            gstin: String::new(),
            email: String::new(),
            phone: String::new(),
        };
        InvoiceDraft::new(
            issuer,
            BilledTo::new(company, "Connaught Place, Delhi"),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        )
    }

    #[test]
    fn invalid_draft_never_reaches_backend() {
        let backend = InMemoryBillingBackend::new();
        let err = submit_invoice(&draft(""), &backend).unwrap_err();
        assert!(matches!(err, SubmissionError::Invalid(DomainError::Validation(_))));
        assert_eq!(backend.create_calls(), 0);
    }

    #[test]
    fn valid_draft_is_persisted_with_totals() {
        let backend = InMemoryBillingBackend::new();
        let mut d = draft("Acme");
        d.add_item(LineItem::new("Workshop", Decimal::ONE, Decimal::from(1000), Decimal::from(18)));

        let created = submit_invoice(&d, &backend).unwrap();
        assert_eq!(created.payload.cgst, Decimal::from(90));
        assert_eq!(created.payload.sgst, Decimal::from(90));
        assert_eq!(created.payload.total_amount, Decimal::from(1180));
        assert_eq!(backend.create_calls(), 1);
    }

    #[test]
    fn submission_recomputes_stale_cached_totals() {
        let backend = InMemoryBillingBackend::new();
        let mut d = draft("Acme");
        d.add_item(LineItem::new("Workshop", Decimal::from(2), Decimal::from(500), Decimal::from(18)));
        d.set_cached_totals(InvoiceTotals::default());

        let created = submit_invoice(&d, &backend).unwrap();
        let expected = compute_totals(d.items(), &d.billed_to().address);
        assert_eq!(created.payload.totals(), expected);
        assert_eq!(created.payload.cgst, Decimal::from(90));
        assert_eq!(created.payload.total_amount, Decimal::from(1180));
    }

    #[test]
    fn backend_failure_is_reported_once_without_retry() {
        let backend =
            InMemoryBillingBackend::rejecting(BackendError::new(Some(500), "database unavailable"));
        let mut d = draft("Acme");
        d.add_item(LineItem::new("Workshop", Decimal::ONE, Decimal::from(1000), Decimal::from(18)));

        let err = submit_invoice(&d, &backend).unwrap_err();
        assert_eq!(
            err,
            SubmissionError::Backend(BackendError::new(Some(500), "database unavailable"))
        );
        assert_eq!(backend.create_calls(), 1);
    }
}
