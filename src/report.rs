use chrono::Local;
use log::{debug, info};

use crate::analyzer::{FinancialAnalyzer, RatioKind, RatioSet};
use crate::error::Result;
use crate::schema::BalanceSheet;

const RULE_WIDTH: usize = 80;
const SECTION_RULE_WIDTH: usize = 40;

/// Renders a full plain-text analysis report for one balance sheet.
///
/// The report is deterministic apart from the "Report Generated" timestamp:
/// same sheet, same lines. Sections appear in a fixed order (summary, ratio
/// analysis, key insights) and every ratio line carries its interpretation.
pub struct ReportGenerator<'a> {
    sheet: &'a BalanceSheet,
    analyzer: FinancialAnalyzer<'a>,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(sheet: &'a BalanceSheet) -> Self {
        ReportGenerator {
            sheet,
            analyzer: FinancialAnalyzer::new(sheet),
        }
    }

    /// Builds the complete report as a single string, ending with a newline.
    pub fn text_report(&self) -> String {
        let mut output = String::new();
        let rule = "=".repeat(RULE_WIDTH);
        let divider = "-".repeat(RULE_WIDTH);

        output.push_str(&format!("{}\n", rule));
        output.push_str("BALANCE SHEET FINANCIAL ANALYSIS REPORT\n");
        output.push_str(&format!("{}\n", rule));
        output.push_str(&format!("\nCompany: {}\n", self.sheet.company_name));
        output.push_str(&format!("Date: {}\n", self.sheet.date));
        output.push_str(&format!(
            "Report Generated: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        output.push_str(&format!("\n{}\n", divider));

        output.push_str("\nBALANCE SHEET SUMMARY\n");
        output.push_str(&format!("{}\n", divider));
        output.push_str("\nASSETS:\n");
        output.push_str(&format!(
            "  Current Assets:           ${}\n",
            format_currency(self.sheet.total_current_assets())
        ));
        output.push_str(&format!(
            "  Long-term Assets:         ${}\n",
            format_currency(self.sheet.total_long_term_assets())
        ));
        output.push_str(&format!(
            "  TOTAL ASSETS:             ${}\n",
            format_currency(self.sheet.total_assets())
        ));

        output.push_str("\nLIABILITIES:\n");
        output.push_str(&format!(
            "  Current Liabilities:      ${}\n",
            format_currency(self.sheet.total_current_liabilities())
        ));
        output.push_str(&format!(
            "  Long-term Liabilities:    ${}\n",
            format_currency(self.sheet.total_long_term_liabilities())
        ));
        output.push_str(&format!(
            "  TOTAL LIABILITIES:        ${}\n",
            format_currency(self.sheet.total_liabilities())
        ));

        output.push_str("\nEQUITY:\n");
        output.push_str(&format!(
            "  Total Equity:             ${}\n",
            format_currency(self.sheet.total_equity())
        ));

        let balanced = self.sheet.verify_balance();
        if !balanced {
            debug!(
                "balance check failed: assets {:.2} vs liabilities + equity {:.2}",
                self.sheet.total_assets(),
                self.sheet.total_liabilities() + self.sheet.total_equity()
            );
        }
        let status = if balanced {
            "✓ BALANCED"
        } else {
            "✗ NOT BALANCED"
        };
        output.push_str(&format!("\nBalance Sheet Status: {}\n", status));

        output.push_str(&format!("\n{}\n", divider));
        output.push_str("\nFINANCIAL RATIOS & ANALYSIS\n");
        output.push_str(&format!("{}\n", divider));

        let section_rule = "-".repeat(SECTION_RULE_WIDTH);

        output.push_str("\nLIQUIDITY RATIOS:\n");
        output.push_str(&format!("{}\n", section_rule));
        for kind in [
            RatioKind::CurrentRatio,
            RatioKind::QuickRatio,
            RatioKind::CashRatio,
            RatioKind::WorkingCapital,
        ] {
            self.push_ratio_line(&mut output, kind);
        }

        output.push_str("\nLEVERAGE RATIOS:\n");
        output.push_str(&format!("{}\n", section_rule));
        for kind in [
            RatioKind::DebtToEquity,
            RatioKind::DebtToAssets,
            RatioKind::EquityRatio,
            RatioKind::LongTermDebt,
        ] {
            self.push_ratio_line(&mut output, kind);
        }

        output.push_str(&format!("\n{}\n", divider));
        output.push_str("\nKEY INSIGHTS\n");
        output.push_str(&format!("{}\n", divider));
        for insight in key_insights(&self.analyzer.all_ratios()) {
            output.push_str(&format!("  • {}\n", insight));
        }

        output.push_str(&format!("\n{}\n", rule));

        output
    }

    fn push_ratio_line(&self, output: &mut String, kind: RatioKind) {
        let value = self.analyzer.ratio(kind);
        // Working capital is an amount, everything else a multiple
        if kind == RatioKind::WorkingCapital {
            output.push_str(&format!(
                "  {:<25} ${}\n",
                kind.label(),
                format_currency(value)
            ));
        } else {
            output.push_str(&format!("  {:<25} {:.2}\n", kind.label(), value));
        }
        output.push_str(&format!("    → {}\n", kind.interpret(value)));
    }

    /// Writes the report to `path`, overwriting any existing file.
    pub fn save_report(&self, path: &str) -> Result<()> {
        let report = self.text_report();
        std::fs::write(path, report)?;
        info!("Saved analysis report to {}", path);
        Ok(())
    }

    pub fn print_report(&self) {
        print!("{}", self.text_report());
    }
}

/// Headline observations drawn from a computed ratio set, at most five.
///
/// Each rule fires independently; a ratio missing from the set simply skips
/// its rules. Severe conditions carry a WARNING or CRITICAL prefix.
pub fn key_insights(ratios: &RatioSet) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(current) = lookup(ratios, RatioKind::CurrentRatio) {
        if current < 1.0 {
            insights.push(
                "WARNING: Current ratio below 1 indicates potential liquidity issues".to_string(),
            );
        } else if current > 3.0 {
            insights.push("High current ratio may indicate underutilized assets".to_string());
        }
    }

    if let Some(debt_to_equity) = lookup(ratios, RatioKind::DebtToEquity) {
        if debt_to_equity > 2.0 {
            insights.push(
                "High debt-to-equity ratio suggests significant financial leverage and risk"
                    .to_string(),
            );
        } else if debt_to_equity < 0.5 {
            insights.push("Conservative capital structure with low debt levels".to_string());
        }
    }

    if let Some(working_capital) = lookup(ratios, RatioKind::WorkingCapital) {
        if working_capital < 0.0 {
            insights.push(
                "CRITICAL: Negative working capital - immediate attention needed".to_string(),
            );
        } else if working_capital > 0.0 {
            insights.push(format!(
                "Positive working capital of ${} provides financial cushion",
                format_currency(working_capital)
            ));
        }
    }

    if let Some(quick) = lookup(ratios, RatioKind::QuickRatio) {
        if quick < 1.0 {
            insights.push(
                "Quick ratio below 1 indicates potential challenges meeting short-term obligations"
                    .to_string(),
            );
        }
    }

    if let Some(equity) = lookup(ratios, RatioKind::EquityRatio) {
        if equity > 0.7 {
            insights.push("Strong equity position provides financial stability".to_string());
        } else if equity < 0.3 {
            insights.push("Heavy reliance on debt financing increases financial risk".to_string());
        }
    }

    insights
}

fn lookup(ratios: &RatioSet, kind: RatioKind) -> Option<f64> {
    ratios
        .iter()
        .find(|(entry, _)| *entry == kind)
        .map(|(_, value)| *value)
}

/// Formats an amount with comma-grouped thousands and two decimals, e.g.
/// `1300000.0` -> `"1,300,000.00"`. Negative amounts keep a leading minus;
/// non-finite values fall back to the plain float rendering.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.2}", value);
    }
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sheet() -> BalanceSheet {
        BalanceSheet {
            cash: 500_000.0,
            accounts_receivable: 300_000.0,
            inventory: 400_000.0,
            other_current_assets: 100_000.0,
            property_plant_equipment: 2_000_000.0,
            intangible_assets: 500_000.0,
            other_long_term_assets: 200_000.0,
            accounts_payable: 250_000.0,
            short_term_debt: 200_000.0,
            other_current_liabilities: 150_000.0,
            long_term_debt: 1_500_000.0,
            other_long_term_liabilities: 300_000.0,
            common_stock: 1_000_000.0,
            retained_earnings: 500_000.0,
            other_equity: 100_000.0,
            company_name: "Sample Corp".to_string(),
            date: "2024-12-31".to_string(),
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(999.0), "999.00");
        assert_eq!(format_currency(1_000.0), "1,000.00");
        assert_eq!(format_currency(700_000.0), "700,000.00");
        assert_eq!(format_currency(1_300_000.5), "1,300,000.50");
        assert_eq!(format_currency(-50_000.0), "-50,000.00");
        assert_eq!(format_currency(f64::INFINITY), "inf");
    }

    #[test]
    fn test_report_header_and_sections() {
        let sheet = sample_sheet();
        let report = ReportGenerator::new(&sheet).text_report();

        assert!(report.starts_with(&format!("{}\n", "=".repeat(80))));
        assert!(report.contains("BALANCE SHEET FINANCIAL ANALYSIS REPORT"));
        assert!(report.contains("\nCompany: Sample Corp\n"));
        assert!(report.contains("\nDate: 2024-12-31\n"));
        assert!(report.contains("Report Generated: "));
        assert!(report.contains("\nBALANCE SHEET SUMMARY\n"));
        assert!(report.contains("\nFINANCIAL RATIOS & ANALYSIS\n"));
        assert!(report.contains("\nLIQUIDITY RATIOS:\n"));
        assert!(report.contains("\nLEVERAGE RATIOS:\n"));
        assert!(report.contains("\nKEY INSIGHTS\n"));
        assert!(report.ends_with(&format!("\n{}\n", "=".repeat(80))));
    }

    #[test]
    fn test_report_summary_amounts() {
        let sheet = sample_sheet();
        let report = ReportGenerator::new(&sheet).text_report();

        assert!(report.contains("  Current Assets:           $1,300,000.00\n"));
        assert!(report.contains("  Long-term Assets:         $2,700,000.00\n"));
        assert!(report.contains("  TOTAL ASSETS:             $4,000,000.00\n"));
        assert!(report.contains("  Current Liabilities:      $600,000.00\n"));
        assert!(report.contains("  Long-term Liabilities:    $1,800,000.00\n"));
        assert!(report.contains("  TOTAL LIABILITIES:        $2,400,000.00\n"));
        assert!(report.contains("  Total Equity:             $1,600,000.00\n"));
        assert!(report.contains("Balance Sheet Status: ✓ BALANCED"));
    }

    #[test]
    fn test_report_ratio_lines() {
        let sheet = sample_sheet();
        let report = ReportGenerator::new(&sheet).text_report();

        assert!(report.contains("  Current Ratio             2.17\n"));
        assert!(report.contains("    → Excellent - Strong liquidity position\n"));
        assert!(report.contains("  Quick Ratio               1.50\n"));
        assert!(report.contains("  Working Capital           $700,000.00\n"));
        assert!(report.contains("  Debt to Equity Ratio      1.50\n"));
        assert!(report.contains("  Long-term Debt Ratio      0.45\n"));
    }

    #[test]
    fn test_report_flags_unbalanced_sheet() {
        let sheet = BalanceSheet {
            retained_earnings: 400_000.0,
            ..sample_sheet()
        };
        let report = ReportGenerator::new(&sheet).text_report();

        assert!(report.contains("Balance Sheet Status: ✗ NOT BALANCED"));
    }

    #[test]
    fn test_key_insights_sample_sheet() {
        let sheet = sample_sheet();
        let analyzer = FinancialAnalyzer::new(&sheet);
        let insights = key_insights(&analyzer.all_ratios());

        // Sample Corp only trips the positive working capital rule
        assert_eq!(
            insights,
            vec!["Positive working capital of $700,000.00 provides financial cushion".to_string()]
        );
    }

    #[test]
    fn test_key_insights_distressed_sheet() {
        let sheet = BalanceSheet {
            cash: 10_000.0,
            accounts_receivable: 20_000.0,
            inventory: 50_000.0,
            other_current_assets: 0.0,
            accounts_payable: 200_000.0,
            short_term_debt: 100_000.0,
            other_current_liabilities: 0.0,
            long_term_debt: 2_500_000.0,
            other_long_term_liabilities: 0.0,
            common_stock: 100_000.0,
            retained_earnings: 0.0,
            other_equity: 0.0,
            ..sample_sheet()
        };
        let analyzer = FinancialAnalyzer::new(&sheet);
        let insights = key_insights(&analyzer.all_ratios());

        assert!(insights.contains(
            &"WARNING: Current ratio below 1 indicates potential liquidity issues".to_string()
        ));
        assert!(insights.contains(
            &"High debt-to-equity ratio suggests significant financial leverage and risk"
                .to_string()
        ));
        assert!(insights
            .contains(&"CRITICAL: Negative working capital - immediate attention needed".to_string()));
        assert!(insights.contains(
            &"Quick ratio below 1 indicates potential challenges meeting short-term obligations"
                .to_string()
        ));
        assert!(insights
            .contains(&"Heavy reliance on debt financing increases financial risk".to_string()));
        assert_eq!(insights.len(), 5);
    }

    #[test]
    fn test_key_insights_zero_working_capital_is_silent() {
        let ratios: RatioSet = vec![(RatioKind::WorkingCapital, 0.0)];
        assert!(key_insights(&ratios).is_empty());
    }

    #[test]
    fn test_key_insights_skip_missing_ratios() {
        let ratios: RatioSet = vec![(RatioKind::CurrentRatio, 0.5)];
        let insights = key_insights(&ratios);
        assert_eq!(
            insights,
            vec!["WARNING: Current ratio below 1 indicates potential liquidity issues".to_string()]
        );
    }
}
