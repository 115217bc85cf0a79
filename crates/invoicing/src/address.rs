use serde::{Deserialize, Serialize};

use billdesk_core::ValueObject;

/// State of the issuing business, matched against the destination address.
pub const HOME_STATE_KEYWORD: &str = "delhi";

/// Destination address of an invoice; the only input to jurisdiction
/// classification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillingAddress {
    address_text: String,
}

impl ValueObject for BillingAddress {}

impl BillingAddress {
    pub fn new(address_text: impl Into<String>) -> Self {
        Self {
            address_text: address_text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.address_text
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::classify(&self.address_text)
    }
}

impl From<&str> for BillingAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BillingAddress {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Tax jurisdiction of a sale relative to the issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// Same state as the issuer: CGST + SGST.
    IntraState,
    /// Different state: IGST.
    InterState,
}

impl Jurisdiction {
    /// Case-insensitive substring check for the issuer's home state.
    ///
    /// Free-form text only; "New Delhi", "DELHI-110085" and "delhivery road"
    /// all count as intra-state.
    pub fn classify(address: &str) -> Self {
        if address.to_lowercase().contains(HOME_STATE_KEYWORD) {
            Jurisdiction::IntraState
        } else {
            Jurisdiction::InterState
        }
    }

    pub fn is_intra_state(self) -> bool {
        self == Jurisdiction::IntraState
    }
}
