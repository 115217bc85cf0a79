//! Billing backend boundary.
//!
//! The backend persists invoices; this crate only talks to it through
//! [`BillingBackend`]. HTTP transport lives outside this crate.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use billdesk_core::InvoiceId;

use crate::payload::InvoicePayload;
use crate::payment::PaymentStatus;

/// Failure reported by the billing backend (or the transport in front of it).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("billing backend error{}: {message}", status_suffix(.status))]
pub struct BackendError {
    /// HTTP-like status code when the backend answered at all.
    pub status: Option<u16>,
    pub message: String,
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

impl BackendError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(invoice_id: InvoiceId) -> Self {
        Self::new(Some(404), format!("invoice {invoice_id} not found"))
    }
}

/// A persisted invoice as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedInvoice {
    pub invoice_id: InvoiceId,
    pub payment_status: PaymentStatus,
    #[serde(flatten)]
    pub payload: InvoicePayload,
}

/// Persistence collaborator for invoices.
pub trait BillingBackend {
    /// Persist a new invoice. Called once per submission; never retried here.
    fn create_invoice(&self, payload: &InvoicePayload) -> Result<SubmittedInvoice, BackendError>;

    fn get_invoice(&self, invoice_id: InvoiceId) -> Result<SubmittedInvoice, BackendError>;

    /// All invoices, ordered by id.
    fn list_invoices(&self) -> Result<Vec<SubmittedInvoice>, BackendError>;

    fn set_payment_status(
        &self,
        invoice_id: InvoiceId,
        status: PaymentStatus,
    ) -> Result<SubmittedInvoice, BackendError>;

    fn delete_invoice(&self, invoice_id: InvoiceId) -> Result<(), BackendError>;
}

#[derive(Debug, Default)]
struct Ledger {
    next_id: u64,
    invoices: BTreeMap<InvoiceId, SubmittedInvoice>,
    create_calls: usize,
}

/// In-memory billing backend.
///
/// Intended for tests/dev and the CLI dry run. Ids are assigned sequentially
/// from 1.
#[derive(Debug, Default)]
pub struct InMemoryBillingBackend {
    ledger: RwLock<Ledger>,
    reject_with: Option<BackendError>,
}

impl InMemoryBillingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that answers every `create_invoice` with `error`.
    pub fn rejecting(error: BackendError) -> Self {
        Self {
            ledger: RwLock::default(),
            reject_with: Some(error),
        }
    }

    /// Number of `create_invoice` calls received, including rejected ones.
    pub fn create_calls(&self) -> usize {
        self.ledger.read().map(|l| l.create_calls).unwrap_or(0)
    }

    fn poisoned() -> BackendError {
        BackendError::new(None, "lock poisoned")
    }
}

impl BillingBackend for InMemoryBillingBackend {
    fn create_invoice(&self, payload: &InvoicePayload) -> Result<SubmittedInvoice, BackendError> {
        let mut ledger = self.ledger.write().map_err(|_| Self::poisoned())?;
        ledger.create_calls += 1;

        if let Some(err) = &self.reject_with {
            return Err(err.clone());
        }

        ledger.next_id += 1;
        let invoice = SubmittedInvoice {
            invoice_id: InvoiceId::new(ledger.next_id),
            payment_status: PaymentStatus::Unpaid,
            payload: payload.clone(),
        };
        ledger.invoices.insert(invoice.invoice_id, invoice.clone());
        Ok(invoice)
    }

    fn get_invoice(&self, invoice_id: InvoiceId) -> Result<SubmittedInvoice, BackendError> {
        let ledger = self.ledger.read().map_err(|_| Self::poisoned())?;
        ledger
            .invoices
            .get(&invoice_id)
            .cloned()
            .ok_or_else(|| BackendError::not_found(invoice_id))
    }

    fn list_invoices(&self) -> Result<Vec<SubmittedInvoice>, BackendError> {
        let ledger = self.ledger.read().map_err(|_| Self::poisoned())?;
        Ok(ledger.invoices.values().cloned().collect())
    }

    fn set_payment_status(
        &self,
        invoice_id: InvoiceId,
        status: PaymentStatus,
    ) -> Result<SubmittedInvoice, BackendError> {
        let mut ledger = self.ledger.write().map_err(|_| Self::poisoned())?;
        let invoice = ledger
            .invoices
            .get_mut(&invoice_id)
            .ok_or_else(|| BackendError::not_found(invoice_id))?;
        invoice.payment_status = status;
        Ok(invoice.clone())
    }

    fn delete_invoice(&self, invoice_id: InvoiceId) -> Result<(), BackendError> {
        let mut ledger = self.ledger.write().map_err(|_| Self::poisoned())?;
        ledger
            .invoices
            .remove(&invoice_id)
            .map(|_| ())
            .ok_or_else(|| BackendError::not_found(invoice_id))
    }
}
