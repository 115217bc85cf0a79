use serde::{Deserialize, Serialize};

use billdesk_core::DomainError;

/// Payment state of a persisted invoice.
///
/// Stored by the backend as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Partial,
    Paid,
}

impl PaymentStatus {
    pub fn code(self) -> u8 {
        match self {
            PaymentStatus::Unpaid => 0,
            PaymentStatus::Partial => 1,
            PaymentStatus::Paid => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Partial => "Partially Paid",
            PaymentStatus::Paid => "Paid",
        }
    }
}

impl TryFrom<u8> for PaymentStatus {
    type Error = DomainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PaymentStatus::Unpaid),
            1 => Ok(PaymentStatus::Partial),
            2 => Ok(PaymentStatus::Paid),
            other => Err(DomainError::validation(format!(
                "unknown payment status code {other}"
            ))),
        }
    }
}

impl From<PaymentStatus> for u8 {
    fn from(value: PaymentStatus) -> Self {
        value.code()
    }
}

impl core::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
