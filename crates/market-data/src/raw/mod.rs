//! Ingestion of raw provider rows into typed records.
//!
//! Providers (and the CSV persistence layer replaying provider output) hand
//! over rows as JSON objects keyed by column name. This module validates the
//! required columns, parses dates strictly, and coerces numeric cells
//! leniently: numbers and numeric strings become values, everything else
//! (null, empty string, garbage text) becomes `None`.
//!
//! A missing *column* is a structural defect and fails the whole batch with
//! [`DataError::MissingColumn`]; a missing or malformed *cell value* in a
//! numeric column degrades only that cell.

mod columns;

pub use columns::{
    DISCLOSURE_REQUIRED_COLUMNS, ISSUED_SHARES_COLUMN, LISTED_REQUIRED_COLUMNS,
    QUOTE_REQUIRED_COLUMNS,
};

use chrono::NaiveDate;
use log::debug;
use serde_json::Value;

use crate::errors::DataError;
use crate::models::{FinancialDisclosure, ListedInfo, QuoteRecord};

/// Converts raw daily-quote rows into [`QuoteRecord`]s.
pub fn quotes_from_rows(rows: &[Value]) -> Result<Vec<QuoteRecord>, DataError> {
    let records = rows
        .iter()
        .map(|row| {
            validate_columns(row, QUOTE_REQUIRED_COLUMNS)?;
            Ok(QuoteRecord {
                date: date_cell(row, "Date")?,
                code: text_cell(row, "Code"),
                open: numeric_cell(row, "Open"),
                high: numeric_cell(row, "High"),
                low: numeric_cell(row, "Low"),
                close: numeric_cell(row, "Close"),
                volume: numeric_cell(row, "Volume"),
                turnover_value: numeric_cell(row, "TurnoverValue"),
                adjustment_factor: numeric_cell(row, "AdjustmentFactor"),
                adjustment_open: numeric_cell(row, "AdjustmentOpen"),
                adjustment_high: numeric_cell(row, "AdjustmentHigh"),
                adjustment_low: numeric_cell(row, "AdjustmentLow"),
                adjustment_close: numeric_cell(row, "AdjustmentClose"),
                adjustment_volume: numeric_cell(row, "AdjustmentVolume"),
            })
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    debug!("Ingested {} quote rows", records.len());
    Ok(records)
}

/// Converts raw financial-statement rows into [`FinancialDisclosure`]s.
pub fn disclosures_from_rows(rows: &[Value]) -> Result<Vec<FinancialDisclosure>, DataError> {
    let records = rows
        .iter()
        .map(|row| {
            validate_columns(row, DISCLOSURE_REQUIRED_COLUMNS)?;
            Ok(FinancialDisclosure {
                disclosed_date: date_cell(row, "DisclosedDate")?,
                local_code: text_cell(row, "LocalCode"),
                type_of_document: text_cell(row, "TypeOfDocument"),
                net_sales: numeric_cell(row, "NetSales"),
                operating_profit: numeric_cell(row, "OperatingProfit"),
                ordinary_profit: numeric_cell(row, "OrdinaryProfit"),
                profit: numeric_cell(row, "Profit"),
                earnings_per_share: numeric_cell(row, "EarningsPerShare"),
                forecast_net_sales: numeric_cell(row, "ForecastNetSales"),
                forecast_operating_profit: numeric_cell(row, "ForecastOperatingProfit"),
                forecast_ordinary_profit: numeric_cell(row, "ForecastOrdinaryProfit"),
                forecast_profit: numeric_cell(row, "ForecastProfit"),
                forecast_earnings_per_share: numeric_cell(row, "ForecastEarningsPerShare"),
                next_year_forecast_net_sales: numeric_cell(row, "NextYearForecastNetSales"),
                next_year_forecast_operating_profit: numeric_cell(
                    row,
                    "NextYearForecastOperatingProfit",
                ),
                next_year_forecast_ordinary_profit: numeric_cell(
                    row,
                    "NextYearForecastOrdinaryProfit",
                ),
                next_year_forecast_profit: numeric_cell(row, "NextYearForecastProfit"),
                next_year_forecast_earnings_per_share: numeric_cell(
                    row,
                    "NextYearForecastEarningsPerShare",
                ),
                total_assets: numeric_cell(row, "TotalAssets"),
                equity: numeric_cell(row, "Equity"),
                equity_to_asset_ratio: numeric_cell(row, "EquityToAssetRatio"),
                book_value_per_share: numeric_cell(row, "BookValuePerShare"),
                issued_shares: numeric_cell(row, ISSUED_SHARES_COLUMN),
                average_shares: numeric_cell(row, "AverageNumberOfShares"),
            })
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    debug!("Ingested {} disclosure rows", records.len());
    Ok(records)
}

/// Converts raw listed-info rows into [`ListedInfo`] entries.
pub fn listed_info_from_rows(rows: &[Value]) -> Result<Vec<ListedInfo>, DataError> {
    rows.iter()
        .map(|row| {
            validate_columns(row, LISTED_REQUIRED_COLUMNS)?;
            Ok(ListedInfo {
                code: text_cell(row, "Code"),
                company_name: text_cell(row, "CompanyName"),
            })
        })
        .collect()
}

fn validate_columns(row: &Value, required: &[&str]) -> Result<(), DataError> {
    for column in required {
        if row.get(column).is_none() {
            return Err(DataError::MissingColumn((*column).to_string()));
        }
    }
    Ok(())
}

fn date_cell(row: &Value, column: &str) -> Result<NaiveDate, DataError> {
    let cell = row.get(column).unwrap_or(&Value::Null);
    let text = cell
        .as_str()
        .ok_or_else(|| DataError::UnparseableDate(cell.to_string()))?;
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| DataError::UnparseableDate(text.to_string()))
}

fn text_cell(row: &Value, column: &str) -> String {
    row.get(column)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Lenient numeric coercion: numbers and numeric strings parse, anything
/// else is carried as missing.
fn numeric_cell(row: &Value, column: &str) -> Option<f64> {
    match row.get(column) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}
