//! # Balance Sheet Analyzer
//!
//! A library for single-snapshot balance sheet analysis: derived totals and
//! the accounting-equation check, eight standard financial ratios with
//! plain-language interpretations, headline insights, and formatted report
//! and CSV output.
//!
//! ## Core Concepts
//!
//! - **Balance Sheet**: 15 raw line items (assets, liabilities, equity) plus company metadata
//! - **Derived Totals**: subtotals per section and the Assets = Liabilities + Equity check
//! - **Ratios**: eight liquidity and leverage measures, always computed in the same order
//! - **Interpretations**: each ratio value mapped to a qualitative band
//! - **Insights**: threshold-triggered headline observations, at most five
//!
//! ## Example
//!
//! ```rust
//! use balance_sheet_analyzer::{BalanceSheet, FinancialAnalyzer, RatioKind};
//!
//! let sheet = BalanceSheet {
//!     cash: 500_000.0,
//!     accounts_receivable: 300_000.0,
//!     inventory: 400_000.0,
//!     other_current_assets: 100_000.0,
//!     property_plant_equipment: 2_000_000.0,
//!     intangible_assets: 500_000.0,
//!     other_long_term_assets: 200_000.0,
//!     accounts_payable: 250_000.0,
//!     short_term_debt: 200_000.0,
//!     other_current_liabilities: 150_000.0,
//!     long_term_debt: 1_500_000.0,
//!     other_long_term_liabilities: 300_000.0,
//!     common_stock: 1_000_000.0,
//!     retained_earnings: 500_000.0,
//!     other_equity: 100_000.0,
//!     company_name: "Sample Corp".to_string(),
//!     date: "2024-12-31".to_string(),
//! };
//! assert!(sheet.verify_balance());
//!
//! let analyzer = FinancialAnalyzer::new(&sheet);
//! let current = analyzer.current_ratio();
//! println!("{}: {:.2}", RatioKind::CurrentRatio, current);
//! println!("{}", RatioKind::CurrentRatio.interpret(current));
//! ```

pub mod analyzer;
pub mod data_io;
pub mod error;
pub mod report;
pub mod schema;

pub use analyzer::{FinancialAnalyzer, RatioKind, RatioSet};
pub use data_io::{
    export_balance_sheet_csv, export_ratios_csv, load_balance_sheet, read_csv, read_json,
    write_json,
};
pub use error::{AnalysisError, Result};
pub use report::{format_currency, key_insights, ReportGenerator};
pub use schema::{BalanceSheet, BALANCE_TOLERANCE};

/// Computes all eight ratios for a sheet in one call, for callers that do
/// not need to hold a [`FinancialAnalyzer`].
pub fn analyze_balance_sheet(sheet: &BalanceSheet) -> RatioSet {
    FinancialAnalyzer::new(sheet).all_ratios()
}
