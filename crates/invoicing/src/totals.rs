//! Invoice totals and the tax jurisdiction rule.
//!
//! The combined rate is a flat 18%: split 9% CGST + 9% SGST for intra-state
//! sales, or charged as 18% IGST otherwise. Item-level GST percentages do not
//! participate at this level.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use billdesk_core::ValueObject;

use crate::address::Jurisdiction;
use crate::line_item::LineItem;
use crate::words::amount_in_words;

/// Central GST rate for intra-state sales (9%).
pub fn cgst_rate() -> Decimal {
    Decimal::new(9, 2)
}

/// State GST rate for intra-state sales (9%).
pub fn sgst_rate() -> Decimal {
    Decimal::new(9, 2)
}

/// Integrated GST rate for inter-state sales (18%).
pub fn igst_rate() -> Decimal {
    Decimal::new(18, 2)
}

/// Derived money figures of an invoice.
///
/// Exactly one of the CGST/SGST pair or IGST is non-zero (all are zero when
/// the sub-total is zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub sub_total: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
}

impl ValueObject for InvoiceTotals {}

/// Compute sub-total, tax split and grand total for `items` shipped to
/// `destination_address`.
///
/// Pure and infallible. Inputs are not validated; negative quantities or
/// rates simply propagate into the sums. Arithmetic saturates at
/// `Decimal::MAX`/`MIN` rather than overflowing.
pub fn compute_totals(items: &[LineItem], destination_address: &str) -> InvoiceTotals {
    let sub_total = items
        .iter()
        .map(LineItem::amount)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let (cgst, sgst, igst) = match Jurisdiction::classify(destination_address) {
        Jurisdiction::IntraState => (
            sub_total.saturating_mul(cgst_rate()),
            sub_total.saturating_mul(sgst_rate()),
            Decimal::ZERO,
        ),
        Jurisdiction::InterState => (
            Decimal::ZERO,
            Decimal::ZERO,
            sub_total.saturating_mul(igst_rate()),
        ),
    };

    let tax = cgst.saturating_add(sgst).saturating_add(igst);

    InvoiceTotals {
        sub_total,
        cgst,
        sgst,
        igst,
        tax,
        total_amount: sub_total.saturating_add(tax),
    }
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl InvoiceTotals {
    /// Which split these totals carry. Zero totals report inter-state.
    pub fn jurisdiction(&self) -> Jurisdiction {
        if self.cgst.is_zero() && self.sgst.is_zero() {
            Jurisdiction::InterState
        } else {
            Jurisdiction::IntraState
        }
    }

    /// Copy with every figure rounded to 2 decimal places for display.
    pub fn rounded(&self) -> Self {
        Self {
            sub_total: round_money(self.sub_total),
            cgst: round_money(self.cgst),
            sgst: round_money(self.sgst),
            igst: round_money(self.igst),
            tax: round_money(self.tax),
            total_amount: round_money(self.total_amount),
        }
    }

    /// Grand total rounded to whole rupees (midpoint away from zero).
    pub fn payable(&self) -> Decimal {
        self.total_amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Adjustment printed as "Round off": `payable - total_amount`.
    pub fn round_off(&self) -> Decimal {
        self.payable() - self.total_amount
    }

    /// "<WORDS> RUPEES ONLY" for the payable amount.
    ///
    /// `None` when the payable amount is negative or does not fit in a `u64`.
    pub fn total_in_words(&self) -> Option<String> {
        let rupees = self.payable().to_u64()?;
        Some(format!("{} RUPEES ONLY", amount_in_words(rupees)))
    }
}
