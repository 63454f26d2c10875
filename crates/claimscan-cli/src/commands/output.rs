//! Rendering of extraction results.

use claimscan_core::{ExtractionResult, FieldOccurrence};

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

/// CSV columns for one extraction result.
pub const CSV_HEADER: [&str; 8] = [
    "document_type",
    "payment_method",
    "account_holder",
    "bank_name",
    "account_number",
    "currency",
    "fps_phone",
    "cheque_method",
];

/// CSV cells for one extraction result; absent values are empty cells.
pub fn csv_row(result: &ExtractionResult) -> [String; 8] {
    let account = &result.bank_account;
    [
        result.document_type.map(|t| t.to_string()).unwrap_or_default(),
        result.payment_method.map(|m| m.to_string()).unwrap_or_default(),
        account.holder.clone().unwrap_or_default(),
        account.bank.clone().unwrap_or_default(),
        account.number.clone().unwrap_or_default(),
        account.currency.clone().unwrap_or_default(),
        result.fps_phone.clone().unwrap_or_default(),
        result.cheque_method.clone().unwrap_or_default(),
    ]
}

pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_row(result))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Human-readable summary.
pub fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    output.push_str("General Information:\n");
    output.push_str(&format!(
        "  Document Type:  {}\n",
        result
            .document_type
            .map(|t| t.to_string())
            .unwrap_or_else(|| "Not detected".to_string())
    ));
    output.push_str(&format!(
        "  Payment Method: {}\n",
        result
            .payment_method
            .map(|m| m.to_string())
            .unwrap_or_else(|| "Not detected".to_string())
    ));
    output.push('\n');

    output.push_str("Bank Information:\n");
    let account = &result.bank_account;
    if let Some(bank) = &account.bank {
        output.push_str(&format!("  Bank Name:      {}\n", bank));
    }
    if let Some(number) = &account.number {
        output.push_str(&format!("  Account Number: {}\n", number));
    }
    if let Some(phone) = &result.fps_phone {
        output.push_str(&format!("  FPS Phone:      +852 {}\n", phone));
    }
    if account.bank.is_none() && account.number.is_none() && result.fps_phone.is_none() {
        output.push_str("  Not detected\n");
    }

    output
}

/// One line per labeled field occurrence: span, field, value and the matched text.
pub fn format_occurrences(occurrences: &[FieldOccurrence]) -> String {
    if occurrences.is_empty() {
        return "No labeled fields found\n".to_string();
    }

    let mut output = String::new();
    for occurrence in occurrences {
        let span = occurrence
            .found
            .position
            .map(|(start, end)| format!("{}..{}", start, end))
            .unwrap_or_default();
        output.push_str(&format!(
            "{:>10}  {:<15} {:<8} {:?} <- {:?}\n",
            span,
            occurrence.field,
            if occurrence.used { "used" } else { "ignored" },
            occurrence.found.value,
            occurrence.found.source.trim_end(),
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimscan_core::{extract_claim_info, BankAccount, PaymentMethod, RuleBasedExtractor};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_for_empty_result() {
        let text = format_text(&ExtractionResult::default());
        assert_eq!(
            text,
            "General Information:\n  Document Type:  Not detected\n  Payment Method: Not detected\n\nBank Information:\n  Not detected\n"
        );
    }

    #[test]
    fn test_text_shows_fps_prefix() {
        let result = ExtractionResult {
            payment_method: Some(PaymentMethod::Fps),
            fps_phone: Some("91234567".to_string()),
            ..Default::default()
        };
        let text = format_text(&result);
        assert!(text.contains("Payment Method: FPS\n"));
        assert!(text.contains("FPS Phone:      +852 91234567\n"));
        assert!(!text.contains("Bank Name"));
    }

    #[test]
    fn test_csv_output() {
        let result = ExtractionResult {
            bank_account: BankAccount {
                bank: Some("Bank of China, HK".to_string()),
                number: Some("0121234".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let csv = format_result(&result, OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("document_type,payment_method,account_holder,bank_name,account_number,currency,fps_phone,cheque_method")
        );
        assert_eq!(lines.next(), Some(",,,\"Bank of China, HK\",0121234,,,"));
    }

    #[test]
    fn test_occurrence_listing() {
        let text = "Phone: 1234 5678\nPhone: 8765 4321\n";
        let listing = format_occurrences(&RuleBasedExtractor::new().occurrences(text));
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "     0..17  fps_phone       used     \"12345678\" <- \"Phone: 1234 5678\""
        );
        assert!(lines[1].contains("ignored"));

        assert_eq!(format_occurrences(&[]), "No labeled fields found\n");
    }

    #[test]
    fn test_json_keeps_all_keys() {
        let json = format_result(&extract_claim_info("Claim Form"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["document_type"], "Insurance Claim Form");
        assert!(value["bank_account"]["holder"].is_null());
        assert!(value.get("cheque_method").is_some());
    }
}
