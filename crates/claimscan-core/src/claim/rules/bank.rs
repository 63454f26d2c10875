//! Bank name and account number extraction.

use super::patterns::{ACCOUNT_NUMBER, BANK_NAME};
use super::{labeled_match, strip_whitespace, ExtractionMatch, FieldExtractor};

/// Extractor for the `Bank Name:` line.
#[derive(Debug, Default)]
pub struct BankNameExtractor;

impl BankNameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for BankNameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = BANK_NAME.captures(text)?;
        labeled_match(&caps, trim_value)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        BANK_NAME
            .captures_iter(text)
            .filter_map(|caps| labeled_match(&caps, trim_value))
            .collect()
    }
}

/// Extractor for the `Account No.:` line.
///
/// Only digits, uppercase letters and whitespace are captured; the stored
/// number has all whitespace removed.
#[derive(Debug, Default)]
pub struct AccountNumberExtractor;

impl AccountNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for AccountNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = ACCOUNT_NUMBER.captures(text)?;
        labeled_match(&caps, strip_whitespace)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ACCOUNT_NUMBER
            .captures_iter(text)
            .filter_map(|caps| labeled_match(&caps, strip_whitespace))
            .collect()
    }
}

fn trim_value(value: &str) -> String {
    value.trim().to_string()
}

/// Extract the bank name from text.
pub fn extract_bank_name(text: &str) -> Option<String> {
    BankNameExtractor::new().extract(text).map(|m| m.value)
}

/// Extract the bank account number from text.
pub fn extract_account_number(text: &str) -> Option<String> {
    AccountNumberExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_name_ascii_colon() {
        assert_eq!(
            extract_bank_name("Bank Name: Hang Seng Bank  \n"),
            Some("Hang Seng Bank".to_string())
        );
    }

    #[test]
    fn test_bank_name_fullwidth_colon() {
        assert_eq!(extract_bank_name("Bank Name：HSBC\n"), Some("HSBC".to_string()));
        assert_eq!(extract_bank_name("Bank Name ： 中國銀行\n"), Some("中國銀行".to_string()));
    }

    #[test]
    fn test_bank_name_keeps_case() {
        assert_eq!(extract_bank_name("Bank Name: hsbc ltd\n"), Some("hsbc ltd".to_string()));
    }

    #[test]
    fn test_bank_name_needs_newline() {
        assert_eq!(extract_bank_name("Bank Name: HSBC"), None);
    }

    #[test]
    fn test_bank_name_first_occurrence() {
        let text = "Bank Name: HSBC\nBank Name: Citibank\n";
        assert_eq!(extract_bank_name(text), Some("HSBC".to_string()));

        let all = BankNameExtractor::new().extract_all(text);
        let values: Vec<_> = all.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["HSBC", "Citibank"]);
    }

    #[test]
    fn test_bank_name_label_is_case_sensitive() {
        assert_eq!(extract_bank_name("bank name: HSBC\n"), None);
    }

    #[test]
    fn test_blank_bank_name_is_empty_string() {
        assert_eq!(extract_bank_name("Bank Name: \n\n"), Some(String::new()));
    }

    #[test]
    fn test_blank_account_number_is_empty_string() {
        assert_eq!(extract_account_number("Account No.: \n\n"), Some(String::new()));
    }

    #[test]
    fn test_account_number_strips_inner_whitespace() {
        assert_eq!(
            extract_account_number("Account No. : 12 34 AB\n"),
            Some("1234AB".to_string())
        );
        assert_eq!(
            extract_account_number("Account No.：004-123\n"),
            None
        );
    }

    #[test]
    fn test_account_number_requires_dot() {
        assert_eq!(extract_account_number("Account No: 1234\n"), None);
    }

    #[test]
    fn test_account_number_lowercase_not_captured() {
        // Lowercase letters fall outside the allowed character class.
        assert_eq!(extract_account_number("Account No.: 12ab\n"), None);
    }

    #[test]
    fn test_account_number_needs_newline() {
        assert_eq!(extract_account_number("Account No.: 123456"), None);
    }
}
