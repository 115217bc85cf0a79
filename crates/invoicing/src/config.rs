//! Issuer configuration ("Billed By" block), read from the environment.

use crate::party::BilledBy;

pub const ISSUER_NAME_ENV: &str = "BILLDESK_ISSUER_NAME";
pub const ISSUER_ADDRESS_ENV: &str = "BILLDESK_ISSUER_ADDRESS";
pub const ISSUER_GSTIN_ENV: &str = "BILLDESK_ISSUER_GSTIN";
pub const ISSUER_EMAIL_ENV: &str = "BILLDESK_ISSUER_EMAIL";
pub const ISSUER_PHONE_ENV: &str = "BILLDESK_ISSUER_PHONE";

/// Details of the business issuing invoices.
///
/// The address must stay in the home state for the CGST/SGST split to make
/// sense; it is printed, not used for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerConfig {
    pub company_name: String,
    pub address: String,
    pub gstin: String,
    pub email: String,
    pub phone: String,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            company_name: "Training Events Desk".to_string(),
            address: "Delhi, Delhi, India - 110085".to_string(),
            gstin: "07AUAPM8136F1ZP".to_string(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

impl IssuerConfig {
    /// Read the issuer from `BILLDESK_ISSUER_*`, falling back to defaults per
    /// field.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            company_name: read(ISSUER_NAME_ENV, defaults.company_name),
            address: read(ISSUER_ADDRESS_ENV, defaults.address),
            gstin: read(ISSUER_GSTIN_ENV, defaults.gstin),
            email: read(ISSUER_EMAIL_ENV, defaults.email),
            phone: read(ISSUER_PHONE_ENV, defaults.phone),
        }
    }

    pub fn billed_by(&self) -> BilledBy {
        BilledBy {
            company_name: self.company_name.clone(),
            address: self.address.clone(),
            gstin: self.gstin.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}
