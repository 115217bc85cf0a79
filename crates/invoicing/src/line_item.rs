use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use billdesk_core::ValueObject;

/// One billable entry on an invoice (trainer fees, hotel booking, ...).
///
/// The line amount is always derived from `quantity * rate`; it is never
/// stored, so it cannot drift from its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Backend key for items loaded from an existing invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<u64>,
    #[serde(rename = "itemDescription")]
    pub description: String,
    pub quantity: Decimal,
    /// Price per unit.
    pub rate: Decimal,
    /// Item-level GST rate in percent (0-100). Display only; see [`ItemTaxLine`].
    pub gst_percentage: Decimal,
}

impl ValueObject for LineItem {}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
        gst_percentage: Decimal,
    ) -> Self {
        Self {
            item_id: None,
            description: description.into(),
            quantity,
            rate,
            gst_percentage,
        }
    }

    /// `quantity * rate`, saturating at `Decimal::MAX`/`MIN` instead of
    /// overflowing.
    pub fn amount(&self) -> Decimal {
        self.quantity.saturating_mul(self.rate)
    }

    pub fn tax_line(&self) -> ItemTaxLine {
        ItemTaxLine::for_item(self)
    }
}

/// Per-item tax row as printed on the invoice detail page.
///
/// Uses the item's own `gst_percentage`. These rows are informational: the
/// invoice-level tax comes from the flat jurisdiction rule in
/// [`compute_totals`](crate::compute_totals), so the sum of `tax_amount` here
/// can differ from the invoice tax when item rates are not 18%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTaxLine {
    pub description: String,
    pub gst_percentage: Decimal,
    pub amount: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

impl ItemTaxLine {
    pub fn for_item(item: &LineItem) -> Self {
        let amount = item.amount();
        let tax_amount = amount.saturating_mul(item.gst_percentage) / Decimal::ONE_HUNDRED;
        Self {
            description: item.description.clone(),
            gst_percentage: item.gst_percentage,
            amount,
            tax_amount,
            total: amount.saturating_add(tax_amount),
        }
    }
}
