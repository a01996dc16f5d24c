use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use log::info;

use crate::analyzer::RatioSet;
use crate::error::{AnalysisError, Result};
use crate::schema::BalanceSheet;

/// Loads a balance sheet from a JSON file with flat top-level keys.
pub fn read_json(path: &str) -> Result<BalanceSheet> {
    let contents = std::fs::read_to_string(path)?;
    let sheet: BalanceSheet = serde_json::from_str(&contents)?;
    Ok(sheet)
}

/// Saves a balance sheet as pretty-printed JSON.
pub fn write_json(sheet: &BalanceSheet, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(sheet)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Loads a balance sheet from a two-column `field,value` CSV.
///
/// The first row is treated as a header and skipped. Remaining rows name one
/// field each, in any order; every field of [`BalanceSheet`] must appear
/// exactly once and nothing else may.
pub fn read_csv(path: &str) -> Result<BalanceSheet> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut fields: BTreeMap<String, String> = BTreeMap::new();
    for result in reader.records() {
        let record = result?;
        let field = record.get(0).unwrap_or("").trim();
        if field.is_empty() {
            continue;
        }
        let value = record.get(1).unwrap_or("").trim();
        fields.insert(field.to_string(), value.to_string());
    }

    let sheet = BalanceSheet {
        cash: take_amount(&mut fields, "cash")?,
        accounts_receivable: take_amount(&mut fields, "accounts_receivable")?,
        inventory: take_amount(&mut fields, "inventory")?,
        other_current_assets: take_amount(&mut fields, "other_current_assets")?,
        property_plant_equipment: take_amount(&mut fields, "property_plant_equipment")?,
        intangible_assets: take_amount(&mut fields, "intangible_assets")?,
        other_long_term_assets: take_amount(&mut fields, "other_long_term_assets")?,
        accounts_payable: take_amount(&mut fields, "accounts_payable")?,
        short_term_debt: take_amount(&mut fields, "short_term_debt")?,
        other_current_liabilities: take_amount(&mut fields, "other_current_liabilities")?,
        long_term_debt: take_amount(&mut fields, "long_term_debt")?,
        other_long_term_liabilities: take_amount(&mut fields, "other_long_term_liabilities")?,
        common_stock: take_amount(&mut fields, "common_stock")?,
        retained_earnings: take_amount(&mut fields, "retained_earnings")?,
        other_equity: take_amount(&mut fields, "other_equity")?,
        company_name: take_string(&mut fields, "company_name")?,
        date: take_string(&mut fields, "date")?,
    };

    if let Some(field) = fields.keys().next() {
        return Err(AnalysisError::UnknownField {
            field: field.clone(),
        });
    }

    Ok(sheet)
}

fn take_amount(fields: &mut BTreeMap<String, String>, field: &str) -> Result<f64> {
    let raw = fields.remove(field).ok_or_else(|| AnalysisError::MissingField {
        field: field.to_string(),
    })?;
    match raw.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => Err(AnalysisError::InvalidAmount {
            field: field.to_string(),
            value: raw,
        }),
    }
}

fn take_string(fields: &mut BTreeMap<String, String>, field: &str) -> Result<String> {
    fields.remove(field).ok_or_else(|| AnalysisError::MissingField {
        field: field.to_string(),
    })
}

/// Loads a balance sheet from `path`, dispatching on the file extension
/// (`.json` or `.csv`, case-insensitive).
pub fn load_balance_sheet(path: &str) -> Result<BalanceSheet> {
    let sheet = match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => read_json(path)?,
        Some(ext) if ext.eq_ignore_ascii_case("csv") => read_csv(path)?,
        _ => return Err(AnalysisError::UnsupportedFormat(path.to_string())),
    };
    info!(
        "Loaded balance sheet for company: {} ({})",
        sheet.company_name, sheet.date
    );
    Ok(sheet)
}

/// Exports the balance sheet as a sectioned three-column CSV
/// (`Category,Item,Amount`) with subtotal rows and blank separator rows,
/// the layout a spreadsheet user expects to paste into a workbook.
pub fn export_balance_sheet_csv(sheet: &BalanceSheet, path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Category", "Item", "Amount"])?;
    writer.write_record(["ASSETS", "", ""])?;
    writer.write_record(["Current Assets", "Cash", amount(sheet.cash).as_str()])?;
    writer.write_record([
        "Current Assets",
        "Accounts Receivable",
        amount(sheet.accounts_receivable).as_str(),
    ])?;
    writer.write_record(["Current Assets", "Inventory", amount(sheet.inventory).as_str()])?;
    writer.write_record([
        "Current Assets",
        "Other Current Assets",
        amount(sheet.other_current_assets).as_str(),
    ])?;
    writer.write_record([
        "Current Assets",
        "Total Current Assets",
        amount(sheet.total_current_assets()).as_str(),
    ])?;
    writer.write_record(["", "", ""])?;
    writer.write_record([
        "Long-term Assets",
        "Property, Plant & Equipment",
        amount(sheet.property_plant_equipment).as_str(),
    ])?;
    writer.write_record([
        "Long-term Assets",
        "Intangible Assets",
        amount(sheet.intangible_assets).as_str(),
    ])?;
    writer.write_record([
        "Long-term Assets",
        "Other Long-term Assets",
        amount(sheet.other_long_term_assets).as_str(),
    ])?;
    writer.write_record([
        "Long-term Assets",
        "Total Long-term Assets",
        amount(sheet.total_long_term_assets()).as_str(),
    ])?;
    writer.write_record(["", "", ""])?;
    writer.write_record(["TOTAL ASSETS", "", amount(sheet.total_assets()).as_str()])?;
    writer.write_record(["", "", ""])?;
    writer.write_record(["LIABILITIES", "", ""])?;
    writer.write_record([
        "Current Liabilities",
        "Accounts Payable",
        amount(sheet.accounts_payable).as_str(),
    ])?;
    writer.write_record([
        "Current Liabilities",
        "Short-term Debt",
        amount(sheet.short_term_debt).as_str(),
    ])?;
    writer.write_record([
        "Current Liabilities",
        "Other Current Liabilities",
        amount(sheet.other_current_liabilities).as_str(),
    ])?;
    writer.write_record([
        "Current Liabilities",
        "Total Current Liabilities",
        amount(sheet.total_current_liabilities()).as_str(),
    ])?;
    writer.write_record(["", "", ""])?;
    writer.write_record([
        "Long-term Liabilities",
        "Long-term Debt",
        amount(sheet.long_term_debt).as_str(),
    ])?;
    writer.write_record([
        "Long-term Liabilities",
        "Other Long-term Liabilities",
        amount(sheet.other_long_term_liabilities).as_str(),
    ])?;
    writer.write_record([
        "Long-term Liabilities",
        "Total Long-term Liabilities",
        amount(sheet.total_long_term_liabilities()).as_str(),
    ])?;
    writer.write_record(["", "", ""])?;
    writer.write_record(["TOTAL LIABILITIES", "", amount(sheet.total_liabilities()).as_str()])?;
    writer.write_record(["", "", ""])?;
    writer.write_record(["EQUITY", "", ""])?;
    writer.write_record(["Equity", "Common Stock", amount(sheet.common_stock).as_str()])?;
    writer.write_record([
        "Equity",
        "Retained Earnings",
        amount(sheet.retained_earnings).as_str(),
    ])?;
    writer.write_record(["Equity", "Other Equity", amount(sheet.other_equity).as_str()])?;
    writer.write_record(["Equity", "Total Equity", amount(sheet.total_equity()).as_str()])?;
    writer.write_record(["", "", ""])?;
    writer.write_record([
        "TOTAL LIABILITIES & EQUITY",
        "",
        amount(sheet.total_liabilities() + sheet.total_equity()).as_str(),
    ])?;

    writer.flush()?;
    Ok(())
}

/// Exports computed ratios as a two-column `Ratio,Value` CSV, values fixed
/// to two decimals in the order given.
pub fn export_ratios_csv(ratios: &RatioSet, path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Ratio", "Value"])?;
    for (kind, value) in ratios {
        writer.write_record([kind.label(), format!("{:.2}", value).as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

fn amount(value: f64) -> String {
    format!("{:.2}", value)
}
