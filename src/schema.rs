use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Absolute tolerance, in currency units, for the accounting equation check.
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// A company balance sheet at a single reporting date.
///
/// All monetary fields are non-negative amounts in one (unspecified) currency
/// unit. The struct is a plain value object: construct it once with every
/// field populated, then read derived totals from the methods below. Nested or
/// aliased input shapes are rejected at deserialization; flattening keys is
/// the loader's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BalanceSheet {
    // Assets
    #[schemars(description = "Cash and cash equivalents held at the reporting date")]
    pub cash: f64,

    #[schemars(description = "Amounts owed by customers for goods or services already delivered")]
    pub accounts_receivable: f64,

    #[schemars(description = "Goods held for sale and raw materials, at carrying value")]
    pub inventory: f64,

    #[schemars(
        description = "Other assets expected to convert to cash within one year (prepaid expenses, short-term deposits)"
    )]
    pub other_current_assets: f64,

    #[schemars(description = "Land, buildings, machinery and equipment, net of depreciation")]
    pub property_plant_equipment: f64,

    #[schemars(description = "Goodwill, patents, trademarks and other non-physical assets")]
    pub intangible_assets: f64,

    #[schemars(description = "Other assets held beyond one year (long-term investments, deferred charges)")]
    pub other_long_term_assets: f64,

    // Liabilities
    #[schemars(description = "Amounts owed to suppliers for goods or services received")]
    pub accounts_payable: f64,

    #[schemars(description = "Borrowings due within one year, including the current portion of long-term debt")]
    pub short_term_debt: f64,

    #[schemars(
        description = "Other obligations due within one year (accrued expenses, taxes payable)"
    )]
    pub other_current_liabilities: f64,

    #[schemars(description = "Borrowings due beyond one year (bonds, term loans, mortgages)")]
    pub long_term_debt: f64,

    #[schemars(
        description = "Other obligations due beyond one year (deferred tax, pension liabilities)"
    )]
    pub other_long_term_liabilities: f64,

    // Equity
    #[schemars(description = "Par value and paid-in capital from issued shares")]
    pub common_stock: f64,

    #[schemars(description = "Cumulative profits retained in the business")]
    pub retained_earnings: f64,

    #[schemars(description = "Other equity items (reserves, accumulated other comprehensive income)")]
    pub other_equity: f64,

    // Metadata
    #[schemars(description = "Legal or display name of the company")]
    pub company_name: String,

    #[schemars(
        description = "Reporting date as a free-form string (e.g. '2024-12-31'); no calendar validation is performed"
    )]
    pub date: String,
}

impl BalanceSheet {
    pub fn total_current_assets(&self) -> f64 {
        self.cash + self.accounts_receivable + self.inventory + self.other_current_assets
    }

    pub fn total_long_term_assets(&self) -> f64 {
        self.property_plant_equipment + self.intangible_assets + self.other_long_term_assets
    }

    pub fn total_assets(&self) -> f64 {
        self.total_current_assets() + self.total_long_term_assets()
    }

    pub fn total_current_liabilities(&self) -> f64 {
        self.accounts_payable + self.short_term_debt + self.other_current_liabilities
    }

    pub fn total_long_term_liabilities(&self) -> f64 {
        self.long_term_debt + self.other_long_term_liabilities
    }

    pub fn total_liabilities(&self) -> f64 {
        self.total_current_liabilities() + self.total_long_term_liabilities()
    }

    pub fn total_equity(&self) -> f64 {
        self.common_stock + self.retained_earnings + self.other_equity
    }

    /// Checks the accounting equation: Assets = Liabilities + Equity, within
    /// [`BALANCE_TOLERANCE`]. An imbalanced sheet is reported, never rejected;
    /// callers decide whether to warn or proceed.
    pub fn verify_balance(&self) -> bool {
        let liabilities_and_equity = self.total_liabilities() + self.total_equity();
        (self.total_assets() - liabilities_and_equity).abs() < BALANCE_TOLERANCE
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(BalanceSheet)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
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
    fn test_derived_totals() {
        let sheet = sample_sheet();

        assert_eq!(sheet.total_current_assets(), 1_300_000.0);
        assert_eq!(sheet.total_long_term_assets(), 2_700_000.0);
        assert_eq!(
            sheet.total_assets(),
            sheet.total_current_assets() + sheet.total_long_term_assets()
        );
        assert_eq!(sheet.total_current_liabilities(), 600_000.0);
        assert_eq!(sheet.total_long_term_liabilities(), 1_800_000.0);
        assert_eq!(
            sheet.total_liabilities(),
            sheet.total_current_liabilities() + sheet.total_long_term_liabilities()
        );
        assert_eq!(sheet.total_equity(), 1_600_000.0);
    }

    #[test]
    fn test_verify_balance_balanced() {
        let sheet = sample_sheet();
        assert_eq!(sheet.total_assets(), 4_000_000.0);
        assert!(sheet.verify_balance());
    }

    #[test]
    fn test_verify_balance_detects_imbalance() {
        // Deliberate 1.0 imbalance on the equity side
        let sheet = BalanceSheet {
            retained_earnings: 500_001.0,
            ..sample_sheet()
        };
        assert!(!sheet.verify_balance());
    }

    #[test]
    fn test_verify_balance_within_tolerance() {
        let sheet = BalanceSheet {
            retained_earnings: 500_000.005,
            ..sample_sheet()
        };
        assert!(sheet.verify_balance());
    }

    #[test]
    fn test_serialization_round_trip() {
        let sheet = sample_sheet();

        let json = serde_json::to_string_pretty(&sheet).unwrap();
        assert!(json.contains("Sample Corp"));

        let deserialized: BalanceSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, sheet);
    }

    #[test]
    fn test_deserialization_rejects_missing_field() {
        let result = serde_json::from_str::<BalanceSheet>(r#"{"cash": 100.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialization_rejects_wrong_type() {
        let mut value = serde_json::to_value(sample_sheet()).unwrap();
        value["cash"] = serde_json::Value::String("lots".to_string());
        let result = serde_json::from_value::<BalanceSheet>(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialization_rejects_unknown_field() {
        let mut value = serde_json::to_value(sample_sheet()).unwrap();
        value["goodwill"] = serde_json::Value::from(1000.0);
        let result = serde_json::from_value::<BalanceSheet>(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_generation() {
        let schema_json = BalanceSheet::schema_as_json().unwrap();
        assert!(schema_json.contains("cash"));
        assert!(schema_json.contains("retained_earnings"));
        assert!(schema_json.contains("company_name"));
    }
}
