//! End-to-end invoice flow: edit a draft, submit it, update payment status.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use billdesk_core::InvoiceId;
use billdesk_invoicing::{
    BillingBackend, BilledTo, InMemoryBillingBackend, InvoiceDraft, InvoiceTotals, IssuerConfig,
    Jurisdiction, LineItem, PaymentStatus, SubmissionError, compute_totals, submit_invoice,
};

fn item(description: &str, quantity: i64, rate: i64) -> LineItem {
    LineItem::new(description, Decimal::from(quantity), Decimal::from(rate), Decimal::from(18))
}

fn new_draft(company: &str, address: &str) -> InvoiceDraft {
    InvoiceDraft::new(
        IssuerConfig::default().billed_by(),
        BilledTo::new(company, address),
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
    )
}

#[test]
fn scenario_a_intra_state() {
    let totals = compute_totals(&[item("Workshop", 1, 1000)], "Connaught Place, Delhi");
    assert_eq!(
        totals,
        InvoiceTotals {
            sub_total: Decimal::from(1000),
            cgst: Decimal::from(90),
            sgst: Decimal::from(90),
            igst: Decimal::ZERO,
            tax: Decimal::from(180),
            total_amount: Decimal::from(1180),
        }
    );
}

#[test]
fn scenario_b_inter_state() {
    let totals = compute_totals(&[item("Workshop", 1, 1000)], "MG Road, Bangalore");
    assert_eq!(totals.igst, Decimal::from(180));
    assert_eq!(totals.cgst, Decimal::ZERO);
    assert_eq!(totals.sgst, Decimal::ZERO);
    assert_eq!(totals.total_amount, Decimal::from(1180));
}

#[test]
fn scenario_c_empty_items() {
    assert_eq!(compute_totals(&[], "anywhere"), InvoiceTotals::default());
}

#[test]
fn scenario_d_two_items_inter_state() {
    let totals = compute_totals(&[item("Sessions", 2, 500), item("Material", 1, 300)], "Hyderabad");
    assert_eq!(totals.sub_total, Decimal::from(1300));
    assert_eq!(totals.igst, Decimal::from(234));
    assert_eq!(totals.total_amount, Decimal::from(1534));
}

#[test]
fn same_split_regardless_of_address_case() {
    let items = [item("Workshop", 3, 750)];
    assert_eq!(
        compute_totals(&items, "123 Delhi Road"),
        compute_totals(&items, "123 DELHI ROAD")
    );
}

#[test]
fn draft_edit_submit_and_mark_paid() {
    let backend = Arc::new(InMemoryBillingBackend::new());

    let mut draft = new_draft("Acme Learning", "MG Road, Bangalore");
    draft.add_item(item("Trainer Fees", 2, 500));
    draft.add_item(item("Hotel", 1, 300));
    assert_eq!(draft.jurisdiction(), Jurisdiction::InterState);

    // Customer turns out to be in Delhi.
    draft.set_billing_address("Nehru Place, New Delhi");
    assert_eq!(draft.totals().cgst, Decimal::from(117));
    assert_eq!(draft.totals().igst, Decimal::ZERO);

    let created = submit_invoice(&draft, backend.as_ref()).unwrap();
    assert_eq!(created.invoice_id, InvoiceId::new(1));
    assert_eq!(created.payload.totals(), draft.totals());
    assert_eq!(
        created.payload.totals().total_in_words().as_deref(),
        Some("ONE THOUSAND FIVE HUNDRED THIRTY FOUR RUPEES ONLY")
    );

    backend
        .set_payment_status(created.invoice_id, PaymentStatus::Paid)
        .unwrap();
    let listed = backend.list_invoices().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].payment_status, PaymentStatus::Paid);
}

#[test]
fn dyn_backend_reports_validation_errors() {
    let backend: Box<dyn BillingBackend> = Box::new(InMemoryBillingBackend::new());
    let draft = new_draft("Acme Learning", "Delhi");

    match submit_invoice(&draft, backend.as_ref()) {
        Err(SubmissionError::Invalid(err)) => {
            assert_eq!(err.messages(), ["Please add at least one line item.".to_string()]);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(backend.list_invoices().unwrap().is_empty());
}
