//! Payment method detection.

use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::{PAYMENT_BANK_TRANSFER, PAYMENT_CHEQUE, PAYMENT_FPS};
use crate::models::claim::PaymentMethod;

/// One entry of the payment rule table.
#[derive(Debug, Clone, Copy)]
pub struct PaymentRule {
    /// Method reported when the pattern matches.
    pub method: PaymentMethod,
    /// Case-insensitive pattern searched in the full text.
    pub pattern: &'static Regex,
}

impl PaymentRule {
    /// Check whether this rule fires on `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

lazy_static! {
    /// Payment rules in precedence order. The first rule that matches wins.
    pub static ref PAYMENT_RULES: [PaymentRule; 3] = [
        PaymentRule { method: PaymentMethod::BankTransfer, pattern: &PAYMENT_BANK_TRANSFER },
        PaymentRule { method: PaymentMethod::Fps, pattern: &PAYMENT_FPS },
        PaymentRule { method: PaymentMethod::Cheque, pattern: &PAYMENT_CHEQUE },
    ];
}

/// Detect the payment method using the first matching rule.
pub fn detect_payment_method(text: &str) -> Option<PaymentMethod> {
    PAYMENT_RULES
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.method)
}
