use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::draft::InvoiceDraft;
use crate::line_item::LineItem;
use crate::party::{BilledBy, BilledTo};
use crate::totals::{InvoiceTotals, compute_totals};

/// Snapshot of an invoice as posted to the billing backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    pub invoice_date: NaiveDate,
    pub billed_by: BilledBy,
    pub billed_to: BilledTo,
    pub items: Vec<LineItem>,
    pub sub_total: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
}

impl InvoicePayload {
    /// Build the payload, recomputing totals from the draft's items and
    /// address rather than trusting its cached figures.
    pub fn from_draft(draft: &InvoiceDraft) -> Self {
        let totals = compute_totals(draft.items(), &draft.billed_to().address);
        Self::with_totals(draft, totals)
    }

    fn with_totals(draft: &InvoiceDraft, totals: InvoiceTotals) -> Self {
        Self {
            invoice_date: draft.invoice_date(),
            billed_by: draft.billed_by().clone(),
            billed_to: draft.billed_to().clone(),
            items: draft.items().to_vec(),
            sub_total: totals.sub_total,
            cgst: totals.cgst,
            sgst: totals.sgst,
            igst: totals.igst,
            tax: totals.tax,
            total_amount: totals.total_amount,
        }
    }

    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals {
            sub_total: self.sub_total,
            cgst: self.cgst,
            sgst: self.sgst,
            igst: self.igst,
            tax: self.tax,
            total_amount: self.total_amount,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
