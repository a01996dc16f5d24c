use std::env;

use anyhow::Result;

use balance_sheet_analyzer::{
    export_balance_sheet_csv, export_ratios_csv, format_currency, load_balance_sheet, write_json,
    BalanceSheet, FinancialAnalyzer, ReportGenerator,
};

fn print_usage() {
    println!("balance-sheet-analyzer [options]");
    println!("options:");
    println!("  --input <path>    balance sheet to analyze (.json or .csv)");
    println!("  --output <path>   report output file (default: analysis_report.txt)");
    println!("  --help            show this message");
    println!();
    println!("With no arguments, analyzes a built-in sample balance sheet and writes");
    println!("sample_balance_sheet.json, balance_sheet.csv, financial_ratios.csv and");
    println!("analysis_report.txt to the current directory.");
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut input: Option<String> = None;
    let mut output = String::from("analysis_report.txt");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                match args.get(i) {
                    Some(value) => input = Some(value.clone()),
                    None => {
                        eprintln!("error: missing value for --input");
                        print_usage();
                        std::process::exit(2);
                    }
                }
            }
            "--output" => {
                i += 1;
                match args.get(i) {
                    Some(value) => output = value.clone(),
                    None => {
                        eprintln!("error: missing value for --output");
                        print_usage();
                        std::process::exit(2);
                    }
                }
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("error: unknown argument: {}", other);
                print_usage();
                std::process::exit(2);
            }
        }
        i += 1;
    }

    match input {
        Some(path) => run_analysis(&path, &output),
        None => run_sample(),
    }
}

/// Warns on an imbalanced sheet, then prints the full report to stdout.
fn print_analysis(sheet: &BalanceSheet) {
    if !sheet.verify_balance() {
        println!("WARNING: Balance sheet does not balance!");
        println!("Assets: ${}", format_currency(sheet.total_assets()));
        println!(
            "Liabilities + Equity: ${}",
            format_currency(sheet.total_liabilities() + sheet.total_equity())
        );
        println!();
    }

    ReportGenerator::new(sheet).print_report();
}

fn run_analysis(input: &str, output: &str) -> Result<()> {
    let sheet = load_balance_sheet(input)?;

    print_analysis(&sheet);

    ReportGenerator::new(&sheet).save_report(output)?;
    println!("\nAnalysis report saved to: {}", output);

    Ok(())
}

fn run_sample() -> Result<()> {
    println!("Example 1: Analyzing Sample Company Balance Sheet");
    println!();

    let sheet = sample_balance_sheet();
    print_analysis(&sheet);

    write_json(&sheet, "sample_balance_sheet.json")?;
    println!("\nSample balance sheet saved to: sample_balance_sheet.json");

    export_balance_sheet_csv(&sheet, "balance_sheet.csv")?;
    println!("Balance sheet exported to: balance_sheet.csv");

    let ratios = FinancialAnalyzer::new(&sheet).all_ratios();
    export_ratios_csv(&ratios, "financial_ratios.csv")?;
    println!("Financial ratios exported to: financial_ratios.csv");

    ReportGenerator::new(&sheet).save_report("analysis_report.txt")?;
    println!("Analysis report saved to: analysis_report.txt");

    Ok(())
}

fn sample_balance_sheet() -> BalanceSheet {
    BalanceSheet {
        // Assets
        cash: 500_000.0,
        accounts_receivable: 300_000.0,
        inventory: 400_000.0,
        other_current_assets: 100_000.0,
        property_plant_equipment: 2_000_000.0,
        intangible_assets: 500_000.0,
        other_long_term_assets: 200_000.0,

        // Liabilities
        accounts_payable: 250_000.0,
        short_term_debt: 200_000.0,
        other_current_liabilities: 150_000.0,
        long_term_debt: 1_500_000.0,
        other_long_term_liabilities: 300_000.0,

        // Equity, sized so the sheet balances at 4,000,000 total assets
        common_stock: 1_000_000.0,
        retained_earnings: 500_000.0,
        other_equity: 100_000.0,

        company_name: "Sample Corp".to_string(),
        date: "2024-12-31".to_string(),
    }
}
