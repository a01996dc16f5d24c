use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::BalanceSheet;

/// The eight ratios derived from a balance sheet, in report order.
///
/// Every ratio is a pure function of the sheet. Most are dimensionless
/// quotients; [`RatioKind::WorkingCapital`] is the one currency-denominated
/// entry and is rendered as an amount rather than a multiple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioKind {
    CurrentRatio,
    QuickRatio,
    CashRatio,
    DebtToEquity,
    DebtToAssets,
    EquityRatio,
    WorkingCapital,
    LongTermDebt,
}

impl RatioKind {
    /// All ratios in the order they appear in reports and CSV exports.
    pub const ALL: [RatioKind; 8] = [
        RatioKind::CurrentRatio,
        RatioKind::QuickRatio,
        RatioKind::CashRatio,
        RatioKind::DebtToEquity,
        RatioKind::DebtToAssets,
        RatioKind::EquityRatio,
        RatioKind::WorkingCapital,
        RatioKind::LongTermDebt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RatioKind::CurrentRatio => "Current Ratio",
            RatioKind::QuickRatio => "Quick Ratio",
            RatioKind::CashRatio => "Cash Ratio",
            RatioKind::DebtToEquity => "Debt to Equity Ratio",
            RatioKind::DebtToAssets => "Debt to Assets Ratio",
            RatioKind::EquityRatio => "Equity Ratio",
            RatioKind::WorkingCapital => "Working Capital",
            RatioKind::LongTermDebt => "Long-term Debt Ratio",
        }
    }

    pub fn from_label(label: &str) -> Option<RatioKind> {
        RatioKind::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Plain-language reading of a ratio value against conventional
    /// benchmark bands. Thresholds are lower-inclusive on the next band:
    /// a current ratio of exactly 1.0 already counts as "Below Average".
    pub fn interpret(&self, value: f64) -> &'static str {
        match self {
            RatioKind::CurrentRatio => interpret_current_ratio(value),
            RatioKind::QuickRatio => interpret_quick_ratio(value),
            RatioKind::CashRatio => interpret_cash_ratio(value),
            RatioKind::DebtToEquity => interpret_debt_to_equity(value),
            RatioKind::DebtToAssets => interpret_debt_to_assets(value),
            RatioKind::EquityRatio => interpret_equity_ratio(value),
            RatioKind::WorkingCapital => interpret_working_capital(value),
            RatioKind::LongTermDebt => interpret_long_term_debt(value),
        }
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ratio values paired with their kind, in [`RatioKind::ALL`] order.
pub type RatioSet = Vec<(RatioKind, f64)>;

fn interpret_current_ratio(value: f64) -> &'static str {
    if value < 1.0 {
        "Poor - May struggle to meet short-term obligations"
    } else if value < 1.5 {
        "Below Average - Limited liquidity cushion"
    } else if value < 2.0 {
        "Good - Adequate liquidity"
    } else if value < 3.0 {
        "Excellent - Strong liquidity position"
    } else {
        "Very High - May indicate inefficient use of assets"
    }
}

fn interpret_quick_ratio(value: f64) -> &'static str {
    if value < 0.5 {
        "Poor - Liquidity concerns without inventory"
    } else if value < 1.0 {
        "Below Average - Some liquidity risk"
    } else if value < 1.5 {
        "Good - Solid liquidity"
    } else {
        "Excellent - Very strong liquidity"
    }
}

fn interpret_cash_ratio(value: f64) -> &'static str {
    if value < 0.2 {
        "Low - Limited immediate cash availability"
    } else if value < 0.5 {
        "Moderate - Reasonable cash position"
    } else {
        "High - Strong cash reserves"
    }
}

fn interpret_debt_to_equity(value: f64) -> &'static str {
    if value < 0.5 {
        "Conservative - Low leverage, equity-financed"
    } else if value < 1.0 {
        "Moderate - Balanced leverage"
    } else if value < 2.0 {
        "High - Significant debt leverage"
    } else {
        "Very High - Heavy reliance on debt financing"
    }
}

fn interpret_debt_to_assets(value: f64) -> &'static str {
    if value < 0.3 {
        "Low - Conservative debt levels"
    } else if value < 0.5 {
        "Moderate - Balanced capital structure"
    } else if value < 0.7 {
        "High - Significant debt burden"
    } else {
        "Very High - Heavy debt load"
    }
}

fn interpret_equity_ratio(value: f64) -> &'static str {
    if value < 0.3 {
        "Low - Heavy reliance on debt"
    } else if value < 0.5 {
        "Moderate - Balanced financing"
    } else if value < 0.7 {
        "Good - Strong equity base"
    } else {
        "Excellent - Conservative financing"
    }
}

fn interpret_working_capital(value: f64) -> &'static str {
    if value < 0.0 {
        "Negative - Short-term financial stress"
    } else if value < 100_000.0 {
        "Low - Limited working capital buffer"
    } else if value < 1_000_000.0 {
        "Moderate - Adequate working capital"
    } else {
        "Strong - Healthy working capital position"
    }
}

fn interpret_long_term_debt(value: f64) -> &'static str {
    if value < 0.2 {
        "Low - Minimal long-term debt"
    } else if value < 0.4 {
        "Moderate - Reasonable long-term debt"
    } else {
        "High - Significant long-term obligations"
    }
}

/// Computes financial ratios for a borrowed [`BalanceSheet`].
///
/// Degenerate sheets are handled per ratio rather than as errors: dividing
/// by zero current liabilities or zero equity yields `f64::INFINITY` (no
/// obligations to cover is the best possible position), while ratios over
/// zero total assets collapse to `0.0` (an empty sheet carries no leverage).
pub struct FinancialAnalyzer<'a> {
    sheet: &'a BalanceSheet,
}

impl<'a> FinancialAnalyzer<'a> {
    pub fn new(sheet: &'a BalanceSheet) -> Self {
        FinancialAnalyzer { sheet }
    }

    /// Current Assets / Current Liabilities. `f64::INFINITY` when current
    /// liabilities are zero.
    pub fn current_ratio(&self) -> f64 {
        let current_liabilities = self.sheet.total_current_liabilities();
        if current_liabilities == 0.0 {
            return f64::INFINITY;
        }
        self.sheet.total_current_assets() / current_liabilities
    }

    /// (Current Assets - Inventory) / Current Liabilities. Stricter than the
    /// current ratio; inventory may not liquidate at carrying value.
    pub fn quick_ratio(&self) -> f64 {
        let current_liabilities = self.sheet.total_current_liabilities();
        if current_liabilities == 0.0 {
            return f64::INFINITY;
        }
        let quick_assets = self.sheet.total_current_assets() - self.sheet.inventory;
        quick_assets / current_liabilities
    }

    /// Cash / Current Liabilities. The most conservative liquidity measure.
    pub fn cash_ratio(&self) -> f64 {
        let current_liabilities = self.sheet.total_current_liabilities();
        if current_liabilities == 0.0 {
            return f64::INFINITY;
        }
        self.sheet.cash / current_liabilities
    }

    /// Total Liabilities / Total Equity. `f64::INFINITY` when equity is zero.
    pub fn debt_to_equity_ratio(&self) -> f64 {
        let equity = self.sheet.total_equity();
        if equity == 0.0 {
            return f64::INFINITY;
        }
        self.sheet.total_liabilities() / equity
    }

    /// Total Liabilities / Total Assets. `0.0` when total assets are zero.
    pub fn debt_to_assets_ratio(&self) -> f64 {
        let assets = self.sheet.total_assets();
        if assets == 0.0 {
            return 0.0;
        }
        self.sheet.total_liabilities() / assets
    }

    /// Total Equity / Total Assets. `0.0` when total assets are zero.
    pub fn equity_ratio(&self) -> f64 {
        let assets = self.sheet.total_assets();
        if assets == 0.0 {
            return 0.0;
        }
        self.sheet.total_equity() / assets
    }

    /// Current Assets - Current Liabilities, in currency units.
    pub fn working_capital(&self) -> f64 {
        self.sheet.total_current_assets() - self.sheet.total_current_liabilities()
    }

    /// Long-term Liabilities / Total Assets. `0.0` when total assets are zero.
    pub fn long_term_debt_ratio(&self) -> f64 {
        let assets = self.sheet.total_assets();
        if assets == 0.0 {
            return 0.0;
        }
        self.sheet.total_long_term_liabilities() / assets
    }

    pub fn ratio(&self, kind: RatioKind) -> f64 {
        match kind {
            RatioKind::CurrentRatio => self.current_ratio(),
            RatioKind::QuickRatio => self.quick_ratio(),
            RatioKind::CashRatio => self.cash_ratio(),
            RatioKind::DebtToEquity => self.debt_to_equity_ratio(),
            RatioKind::DebtToAssets => self.debt_to_assets_ratio(),
            RatioKind::EquityRatio => self.equity_ratio(),
            RatioKind::WorkingCapital => self.working_capital(),
            RatioKind::LongTermDebt => self.long_term_debt_ratio(),
        }
    }

    /// All eight ratios in [`RatioKind::ALL`] order.
    pub fn all_ratios(&self) -> RatioSet {
        RatioKind::ALL
            .iter()
            .map(|&kind| (kind, self.ratio(kind)))
            .collect()
    }

    /// Interpretation lookup by display label, for callers holding ratio
    /// names as strings (e.g. parsed from an exported CSV).
    pub fn interpret_ratio(&self, name: &str, value: f64) -> &'static str {
        match RatioKind::from_label(name) {
            Some(kind) => kind.interpret(value),
            None => "No interpretation available",
        }
    }
}
