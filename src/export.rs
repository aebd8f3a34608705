use crate::model::{Transaction, TransactionStatus, TransactionType};
use chrono::NaiveDate;
use std::borrow::Cow;
use thiserror::Error;

const CSV_MIME: &str = "text/csv; charset=utf-8";

/// First characters that Excel, Sheets, and LibreOffice interpret as the
/// start of a formula.
const FORMULA_PREFIXES: [char; 6] = ['=', '+', '-', '@', '\t', '\r'];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV Error")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error")]
    Io(#[from] std::io::Error),

    #[error("CSV output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A rendered export, ready to be offered to the user as a file download.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CsvDownload {
    pub filename: String,
    pub mime: &'static str,
    pub content: String,
}

/// Neutralize spreadsheet-formula injection for a single cell.
///
/// If the first character of `cell` is one of `= + - @ TAB CR`, a single
/// quote is prepended so the value is rendered as text when the export is
/// opened in a spreadsheet. Safe input is returned unchanged, borrowed.
pub fn sanitize_cell(cell: &str) -> Cow<'_, str> {
    match cell.chars().next() {
        Some(first) if FORMULA_PREFIXES.contains(&first) => Cow::Owned(format!("'{cell}")),
        _ => Cow::Borrowed(cell),
    }
}

/// Render the transaction history as a CSV download named
/// `transactions_<date>.csv`.
///
/// Every cell is quoted (embedded quotes doubled), and the free-text cells
/// pass through [`sanitize_cell`] first. Rows are written in the order given,
/// which for the wallet view is the unfiltered newest-first sequence.
pub fn transactions_csv(
    transactions: &[Transaction],
    exported_on: NaiveDate,
) -> Result<CsvDownload, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(["Date", "Type", "Amount", "Description", "Other Party", "Status"])?;

    for tx in transactions {
        let other_party = tx
            .other_party
            .as_ref()
            .map(|party| party.name.as_str())
            .unwrap_or_default();

        writer.write_record([
            tx.created_at.format("%x").to_string().as_str(),
            direction_label(tx.tx_type),
            tx.amount.to_string().as_str(),
            sanitize_cell(&tx.description).as_ref(),
            sanitize_cell(other_party).as_ref(),
            status_label(tx.status),
        ])?;
    }

    let content = String::from_utf8(writer.into_inner().map_err(|err| err.into_error())?)?;

    Ok(CsvDownload {
        filename: format!("transactions_{}.csv", exported_on.format("%F")),
        mime: CSV_MIME,
        content,
    })
}

fn direction_label(tx_type: TransactionType) -> &'static str {
    match tx_type {
        TransactionType::Credit => "Received",
        TransactionType::Debit => "Sent",
    }
}

fn status_label(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "Completed",
        TransactionStatus::Pending => "Pending",
        TransactionStatus::Failed => "Failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Counterparty;

    fn tx(description: &str, other_party: Option<&str>) -> Transaction {
        Transaction {
            id: 1,
            tx_type: TransactionType::Debit,
            status: TransactionStatus::Completed,
            amount: "2.5".parse().unwrap(),
            description: description.to_string(),
            other_party: other_party.map(|name| Counterparty {
                id: 9,
                name: name.to_string(),
                avatar: None,
            }),
            created_at: "2026-02-01T09:00:00Z".parse().unwrap(),
            completed_at: None,
        }
    }

    #[test]
    fn safe_input_is_unchanged() {
        for safe in ["", "Garden help", "1.5 hours", "übung", " =not first"] {
            assert!(matches!(sanitize_cell(safe), Cow::Borrowed(s) if s == safe));
        }
    }

    #[test]
    fn dangerous_prefixes_are_neutralized() {
        for dangerous in ["=SUM(A1)", "+1", "-1", "@cmd", "\tx", "\rx"] {
            let sanitized = sanitize_cell(dangerous);
            assert_eq!(sanitized, format!("'{dangerous}"));
        }
    }

    #[test]
    fn multi_byte_first_character() {
        // Only the first Unicode scalar value is inspected.
        assert!(matches!(sanitize_cell("économie=1"), Cow::Borrowed(_)));
    }

    #[test]
    fn formula_payload_is_quoted_and_escaped() {
        let txs = vec![tx("=cmd|' /C calc'!A0", Some("Priya N"))];
        let download = transactions_csv(&txs, "2026-03-15".parse().unwrap()).unwrap();

        assert_eq!(download.filename, "transactions_2026-03-15.csv");
        assert_eq!(download.mime, "text/csv; charset=utf-8");
        assert!(download.content.contains(r#""'=cmd|' /C calc'!A0""#));
        // The raw formula must not survive as a cell start.
        assert!(!download.content.contains(r#""=cmd"#));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let txs = vec![tx(r#"Said "thanks""#, None)];
        let download = transactions_csv(&txs, "2026-03-15".parse().unwrap()).unwrap();

        assert!(download.content.contains(r#""Said ""thanks""""#));
    }

    #[test]
    fn header_and_row_shape() {
        let txs = vec![tx("Garden help", Some("Priya N"))];
        let download = transactions_csv(&txs, "2026-03-15".parse().unwrap()).unwrap();

        let mut lines = download.content.lines();
        assert_eq!(
            lines.next().unwrap(),
            r#""Date","Type","Amount","Description","Other Party","Status""#
        );

        let row = lines.next().unwrap();
        assert!(row.contains(r#""Sent""#));
        assert!(row.contains(r#""2.5""#));
        assert!(row.contains(r#""Priya N""#));
        assert!(row.contains(r#""Completed""#));
        assert!(lines.next().is_none());
    }
}
