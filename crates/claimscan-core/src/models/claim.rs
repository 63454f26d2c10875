//! Claim extraction data models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured fields extracted from one claim document.
///
/// Every key is always present when serialized; fields that were not found
/// serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Detected document type.
    pub document_type: Option<DocumentType>,

    /// Detected payment method.
    pub payment_method: Option<PaymentMethod>,

    /// Bank account details.
    pub bank_account: BankAccount,

    /// FPS phone number (digits only).
    pub fps_phone: Option<String>,

    /// Cheque delivery method. Not populated yet.
    pub cheque_method: Option<String>,
}

impl ExtractionResult {
    /// Check whether nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.document_type.is_none()
            && self.payment_method.is_none()
            && self.bank_account.is_empty()
            && self.fps_phone.is_none()
            && self.cheque_method.is_none()
    }
}

/// Bank account sub-record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Account holder name. Not populated yet.
    pub holder: Option<String>,

    /// Bank name.
    pub bank: Option<String>,

    /// Account number (digits and uppercase letters, no whitespace).
    pub number: Option<String>,

    /// Account currency. Not populated yet.
    pub currency: Option<String>,
}

impl BankAccount {
    /// Check if the account has any data.
    pub fn is_empty(&self) -> bool {
        self.holder.is_none() && self.bank.is_none() && self.number.is_none() && self.currency.is_none()
    }
}

/// Type of claim document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Insurance Claim Form")]
    InsuranceClaimForm,
}

impl DocumentType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InsuranceClaimForm => "Insurance Claim Form",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the claimant asked to be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Direct credit / bank transfer.
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    /// Faster Payment System.
    #[serde(rename = "FPS")]
    Fps,
    /// Paper cheque.
    #[serde(rename = "Cheque")]
    Cheque,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank Transfer",
            Self::Fps => "FPS",
            Self::Cheque => "Cheque",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_result_keeps_every_key() {
        let value = serde_json::to_value(ExtractionResult::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "document_type": null,
                "payment_method": null,
                "bank_account": {
                    "holder": null,
                    "bank": null,
                    "number": null,
                    "currency": null
                },
                "fps_phone": null,
                "cheque_method": null
            })
        );
    }

    #[test]
    fn test_labels_serialize_as_display_strings() {
        let result = ExtractionResult {
            document_type: Some(DocumentType::InsuranceClaimForm),
            payment_method: Some(PaymentMethod::Fps),
            ..Default::default()
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["document_type"], json!("Insurance Claim Form"));
        assert_eq!(value["payment_method"], json!("FPS"));

        assert_eq!(PaymentMethod::BankTransfer.to_string(), "Bank Transfer");
        assert_eq!(PaymentMethod::Cheque.to_string(), "Cheque");
    }

    #[test]
    fn test_deserialize_from_json() {
        let result: ExtractionResult = serde_json::from_value(json!({
            "document_type": "Insurance Claim Form",
            "payment_method": "Bank Transfer",
            "bank_account": {"holder": null, "bank": "HSBC", "number": "1234", "currency": null},
            "fps_phone": null,
            "cheque_method": null
        }))
        .unwrap();
        assert_eq!(result.payment_method, Some(PaymentMethod::BankTransfer));
        assert_eq!(result.bank_account.bank.as_deref(), Some("HSBC"));
        assert!(!result.is_empty());
    }
}
