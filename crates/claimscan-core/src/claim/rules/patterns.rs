//! Common regex patterns for claim form extraction.
//!
//! Labeled fields must be terminated by a newline; a label on the last line of
//! text without a trailing newline is not captured.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Labeled bank fields (ASCII or full-width colon)
    pub static ref BANK_NAME: Regex = Regex::new(
        r"Bank Name\s*[:：]\s*(.+?)\n"
    ).unwrap();

    pub static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"Account No\.\s*[:：]\s*([0-9A-Z\s]+)\n"
    ).unwrap();

    // FPS phone
    pub static ref PHONE: Regex = Regex::new(
        r"Phone\s*[:：]\s*([0-9\s]+)\n"
    ).unwrap();

    // Payment methods
    pub static ref PAYMENT_BANK_TRANSFER: Regex = Regex::new(
        r"(?i)Direct Credit|Bank Transfer"
    ).unwrap();

    pub static ref PAYMENT_FPS: Regex = Regex::new(
        r"(?i)FPS|Fast Payment"
    ).unwrap();

    pub static ref PAYMENT_CHEQUE: Regex = Regex::new(
        r"(?i)Cheque|Check"
    ).unwrap();
}
