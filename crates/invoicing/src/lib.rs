//! Invoicing domain module.
//!
//! The heart of this crate is [`compute_totals`]: a pure function from line
//! items and a destination address to sub-total, GST split and grand total.
//! Around it sit the editable [`InvoiceDraft`], caller-side validation, and
//! the [`BillingBackend`] seam used to persist submitted invoices.

pub mod address;
pub mod backend;
pub mod config;
pub mod draft;
pub mod line_item;
pub mod party;
pub mod payload;
pub mod payment;
pub mod submission;
pub mod totals;
pub mod validation;
pub mod words;

pub use address::{BillingAddress, HOME_STATE_KEYWORD, Jurisdiction};
pub use backend::{BackendError, BillingBackend, InMemoryBillingBackend, SubmittedInvoice};
pub use config::IssuerConfig;
pub use draft::InvoiceDraft;
pub use line_item::{ItemTaxLine, LineItem};
pub use party::{BilledBy, BilledTo};
pub use payload::InvoicePayload;
pub use payment::PaymentStatus;
pub use submission::{SubmissionError, submit_invoice};
pub use totals::{InvoiceTotals, compute_totals};
pub use validation::validate_draft;
pub use words::amount_in_words;
