//! `billdesk-quote`: compute invoice totals for a draft stored as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use billdesk_invoicing::{
    BilledTo, InMemoryBillingBackend, InvoiceDraft, InvoiceTotals, IssuerConfig, ItemTaxLine,
    Jurisdiction, LineItem, submit_invoice,
};

#[derive(Parser, Debug)]
#[command(name = "billdesk-quote", about = "Compute GST totals for an invoice draft")]
struct CliArgs {
    /// Draft JSON: `{ "invoiceDate"?, "billedTo": {...}, "items": [...] }`.
    draft: PathBuf,

    /// Validate and submit to an in-memory backend (dry run).
    #[arg(long)]
    submit: bool,
}

/// Draft as stored on disk; the issuer comes from `BILLDESK_ISSUER_*`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftFile {
    #[serde(default)]
    invoice_date: Option<NaiveDate>,
    billed_to: BilledTo,
    #[serde(default)]
    items: Vec<LineItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Quote {
    jurisdiction: Jurisdiction,
    totals: InvoiceTotals,
    round_off: Decimal,
    payable: Decimal,
    total_in_words: Option<String>,
    items: Vec<ItemTaxLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submitted_invoice_id: Option<u64>,
}

fn load_draft(path: &Path, issuer: &IssuerConfig) -> Result<InvoiceDraft> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read draft {}", path.display()))?;
    let file: DraftFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse draft {}", path.display()))?;

    let date = file
        .invoice_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let mut draft = InvoiceDraft::new(issuer.billed_by(), file.billed_to, date);
    for item in file.items {
        draft.add_item(item);
    }
    Ok(draft)
}

fn quote(draft: &InvoiceDraft) -> Quote {
    let totals = draft.totals();
    Quote {
        jurisdiction: draft.jurisdiction(),
        totals: totals.rounded(),
        round_off: totals.round_off(),
        payable: totals.payable(),
        total_in_words: totals.total_in_words(),
        items: draft.item_tax_lines(),
        submitted_invoice_id: None,
    }
}

fn main() -> Result<()> {
    billdesk_observability::init();

    let args = CliArgs::parse();
    let issuer = IssuerConfig::from_env();
    let draft = load_draft(&args.draft, &issuer)?;

    tracing::debug!(items = draft.items().len(), "draft loaded");

    let mut summary = quote(&draft);
    if args.submit {
        let backend = InMemoryBillingBackend::new();
        let created = submit_invoice(&draft, &backend).context("invoice submission failed")?;
        summary.submitted_invoice_id = Some(created.invoice_id.get());
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
