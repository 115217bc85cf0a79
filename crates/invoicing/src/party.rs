use serde::{Deserialize, Serialize};

use billdesk_core::{CompanyId, EnquiryId};

use crate::address::BillingAddress;

/// The issuing business, printed in the "Billed By" block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BilledBy {
    pub company_name: String,
    pub address: String,
    pub gstin: String,
    pub email: String,
    pub phone: String,
}

/// The customer being invoiced.
///
/// `company_id` and the enquiry link are optional: invoices can be raised for
/// walk-in customers that are not registered companies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BilledTo {
    #[serde(default)]
    pub company_id: Option<CompanyId>,
    pub company_name: String,
    pub address: String,
    #[serde(default)]
    pub gstn: String,
    #[serde(default)]
    pub pan: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub enquiry_id: Option<EnquiryId>,
    #[serde(default)]
    pub enquiry_name: Option<String>,
}

impl BilledTo {
    pub fn new(company_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn billing_address(&self) -> BillingAddress {
        BillingAddress::new(self.address.clone())
    }
}
