use chrono::NaiveDate;

use billdesk_core::{DomainError, DomainResult, DraftId, Entity};

use crate::address::{BillingAddress, Jurisdiction};
use crate::line_item::{ItemTaxLine, LineItem};
use crate::party::{BilledBy, BilledTo};
use crate::totals::{InvoiceTotals, compute_totals};

/// An invoice being edited before submission.
///
/// Owns the mutable form state; every mutation recomputes the totals from
/// scratch, so `totals()` always matches the current items and address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    id: DraftId,
    invoice_date: NaiveDate,
    billed_by: BilledBy,
    billed_to: BilledTo,
    items: Vec<LineItem>,
    totals: InvoiceTotals,
}

impl InvoiceDraft {
    pub fn new(billed_by: BilledBy, billed_to: BilledTo, invoice_date: NaiveDate) -> Self {
        Self::with_id(DraftId::new(), billed_by, billed_to, invoice_date)
    }

    pub fn with_id(
        id: DraftId,
        billed_by: BilledBy,
        billed_to: BilledTo,
        invoice_date: NaiveDate,
    ) -> Self {
        let mut draft = Self {
            id,
            invoice_date,
            billed_by,
            billed_to,
            items: Vec::new(),
            totals: InvoiceTotals::default(),
        };
        draft.recompute();
        draft
    }

    pub fn invoice_date(&self) -> NaiveDate {
        self.invoice_date
    }

    pub fn billed_by(&self) -> &BilledBy {
        &self.billed_by
    }

    pub fn billed_to(&self) -> &BilledTo {
        &self.billed_to
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn totals(&self) -> InvoiceTotals {
        self.totals
    }

    pub fn billing_address(&self) -> BillingAddress {
        self.billed_to.billing_address()
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        self.billing_address().jurisdiction()
    }

    /// Per-item display rows (item-level GST, informational only).
    pub fn item_tax_lines(&self) -> Vec<ItemTaxLine> {
        self.items.iter().map(ItemTaxLine::for_item).collect()
    }

    pub fn set_invoice_date(&mut self, date: NaiveDate) {
        self.invoice_date = date;
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
        self.recompute();
    }

    pub fn update_item(&mut self, index: usize, item: LineItem) -> DomainResult<()> {
        let slot = self.items.get_mut(index).ok_or_else(DomainError::not_found)?;
        *slot = item;
        self.recompute();
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> DomainResult<LineItem> {
        if index >= self.items.len() {
            return Err(DomainError::not_found());
        }
        let removed = self.items.remove(index);
        self.recompute();
        Ok(removed)
    }

    /// Replace the customer block (company picked from the registry).
    pub fn set_billed_to(&mut self, billed_to: BilledTo) {
        self.billed_to = billed_to;
        self.recompute();
    }

    /// Edit only the destination address.
    pub fn set_billing_address(&mut self, address: impl Into<String>) {
        self.billed_to.address = address.into();
        self.recompute();
    }

    /// Overwrite the cached totals without touching items or address.
    #[cfg(test)]
    pub(crate) fn set_cached_totals(&mut self, totals: InvoiceTotals) {
        self.totals = totals;
    }

    fn recompute(&mut self) {
        self.totals = compute_totals(&self.items, &self.billed_to.address);
    }
}

impl Entity for InvoiceDraft {
    type Id = DraftId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn issuer() -> BilledBy {
        BilledBy {
            company_name: "Issuer".to_string(),
            address: "Rohini, Delhi".to_string(),
            gstin: "07AAAAA0000A1Z5".to_string(),
            email: "billing@example.com".to_string(),
            phone: "0000000000".to_string(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    fn item(quantity: i64, rate: i64) -> LineItem {
        LineItem::new("Trainer Fees", Decimal::from(quantity), Decimal::from(rate), Decimal::from(18))
    }

    fn draft(address: &str) -> InvoiceDraft {
        InvoiceDraft::new(issuer(), BilledTo::new("Acme Learning", address), date())
    }

    fn assert_consistent(draft: &InvoiceDraft) {
        assert_eq!(
            draft.totals(),
            compute_totals(draft.items(), draft.billing_address().as_str())
        );
    }

    #[test]
    fn new_draft_has_zero_totals() {
        let d = draft("Delhi");
        assert_eq!(d.totals(), InvoiceTotals::default());
        assert!(d.items().is_empty());
    }

    #[test]
    fn adding_items_recomputes_totals() {
        let mut d = draft("MG Road, Bangalore");
        d.add_item(item(2, 500));
        d.add_item(item(1, 300));
        assert_eq!(d.totals().sub_total, Decimal::from(1300));
        assert_eq!(d.totals().igst, Decimal::from(234));
        assert_consistent(&d);
    }

    #[test]
    fn editing_and_removing_items_recomputes_totals() {
        let mut d = draft("Delhi");
        d.add_item(item(1, 1000));
        d.add_item(item(1, 2000));

        d.update_item(1, item(2, 2000)).unwrap();
        assert_eq!(d.totals().sub_total, Decimal::from(5000));
        assert_consistent(&d);

        let removed = d.remove_item(0).unwrap();
        assert_eq!(removed.rate, Decimal::from(1000));
        assert_eq!(d.totals().sub_total, Decimal::from(4000));
        assert_eq!(d.totals().cgst, Decimal::from(360));
        assert_consistent(&d);
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        let mut d = draft("Delhi");
        assert_eq!(d.update_item(0, item(1, 1)), Err(DomainError::NotFound));
        assert_eq!(d.remove_item(3), Err(DomainError::NotFound));
    }

    #[test]
    fn changing_address_switches_tax_split() {
        let mut d = draft("Connaught Place, Delhi");
        d.add_item(item(1, 1000));
        assert_eq!(d.jurisdiction(), Jurisdiction::IntraState);
        assert_eq!(d.totals().cgst, Decimal::from(90));

        d.set_billing_address("Salt Lake, Kolkata");
        assert_eq!(d.jurisdiction(), Jurisdiction::InterState);
        assert_eq!(d.totals().cgst, Decimal::ZERO);
        assert_eq!(d.totals().igst, Decimal::from(180));
        assert_consistent(&d);

        d.set_billed_to(BilledTo::new("Other Co", "Karol Bagh, New Delhi"));
        assert_eq!(d.totals().sgst, Decimal::from(90));
        assert_consistent(&d);
    }

    #[test]
    fn item_tax_lines_follow_items() {
        let mut d = draft("Delhi");
        let mut hotel = item(1, 2000);
        hotel.gst_percentage = Decimal::from(12);
        d.add_item(hotel);
        let lines = d.item_tax_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].tax_amount, Decimal::from(240));
        // Invoice level still charges the flat 18%.
        assert_eq!(d.totals().tax, Decimal::from(360));
    }
}
