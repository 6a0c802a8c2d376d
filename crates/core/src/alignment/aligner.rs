//! As-of backward join of a quote series with a disclosure series.

use log::debug;

use kabuscope_market_data::{DataError, FinancialDisclosure, QuoteRecord};

use crate::alignment::model::MergedRecord;
use crate::errors::Result;

/// Merges a quote series with a disclosure series for the same security into
/// one per-trading-day series.
///
/// Each quote row receives the filing with the greatest disclosure date not
/// exceeding the quote date; leading rows before the first filing are then
/// backward-filled with that first filing. Price fields are never filled.
/// Inputs are cloned and sorted internally, never mutated.
pub fn align(
    quotes: &[QuoteRecord],
    disclosures: &[FinancialDisclosure],
) -> Result<Vec<MergedRecord>> {
    let mut rows = join_asof(quotes, disclosures)?;
    backfill_leading(&mut rows);
    Ok(rows)
}

/// The join step alone: attaches to each quote row the most recent filing
/// whose disclosure date does not exceed the quote date. Rows earlier than
/// the first filing keep `disclosure: None` - no filing is ever attached to
/// a quote date before its own disclosure date.
pub fn join_asof(
    quotes: &[QuoteRecord],
    disclosures: &[FinancialDisclosure],
) -> Result<Vec<MergedRecord>> {
    if quotes.is_empty() {
        return Err(DataError::EmptyInput("daily quotes".to_string()).into());
    }
    if disclosures.is_empty() {
        return Err(DataError::EmptyInput("financial statements".to_string()).into());
    }

    let code = &quotes[0].code;
    for quote in quotes {
        if quote.code != *code {
            return Err(DataError::CodeMismatch {
                expected: code.clone(),
                found: quote.code.clone(),
            }
            .into());
        }
    }
    for filing in disclosures {
        if filing.local_code != *code {
            return Err(DataError::CodeMismatch {
                expected: code.clone(),
                found: filing.local_code.clone(),
            }
            .into());
        }
    }

    let mut quotes = quotes.to_vec();
    quotes.sort_by_key(|q| q.date);
    let mut filings = disclosures.to_vec();
    filings.sort_by_key(|d| d.disclosed_date);

    debug!(
        "Joining {} quote rows with {} filings for {}",
        quotes.len(),
        filings.len(),
        code
    );

    let rows = quotes
        .into_iter()
        .map(|quote| {
            let next = filings.partition_point(|d| d.disclosed_date <= quote.date);
            let disclosure = next.checked_sub(1).map(|i| filings[i].clone());
            MergedRecord { quote, disclosure }
        })
        .collect();

    Ok(rows)
}

/// Covers leading rows before the first filing with that filing's fields.
fn backfill_leading(rows: &mut [MergedRecord]) {
    let Some(first) = rows.iter().find_map(|r| r.disclosure.clone()) else {
        return;
    };
    for row in rows.iter_mut() {
        if row.disclosure.is_some() {
            break;
        }
        row.disclosure = Some(first.clone());
    }
}
