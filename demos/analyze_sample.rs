use balance_sheet_analyzer::*;

fn main() {
    println!("📊 Balance Sheet Ratio Analysis Demo\n");
    println!("Builds a sample balance sheet, checks the accounting equation,");
    println!("then walks through every ratio with its interpretation.\n");

    let sheet = BalanceSheet {
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
    };

    println!("📋 {} as of {}", sheet.company_name, sheet.date);
    println!(
        "  Total Assets:       ${}",
        format_currency(sheet.total_assets())
    );
    println!(
        "  Total Liabilities:  ${}",
        format_currency(sheet.total_liabilities())
    );
    println!(
        "  Total Equity:       ${}",
        format_currency(sheet.total_equity())
    );
    if sheet.verify_balance() {
        println!("  ✅ Assets = Liabilities + Equity");
    } else {
        println!("  ❌ Sheet does not balance!");
    }

    let analyzer = FinancialAnalyzer::new(&sheet);
    let ratios = analyzer.all_ratios();

    println!("\n🔢 Financial Ratios:");
    for (kind, value) in &ratios {
        if *kind == RatioKind::WorkingCapital {
            println!("  {:<25} ${}", kind.label(), format_currency(*value));
        } else {
            println!("  {:<25} {:.2}", kind.label(), value);
        }
        println!("      → {}", kind.interpret(*value));
    }

    println!("\n💡 Key Insights:");
    let insights = key_insights(&ratios);
    if insights.is_empty() {
        println!("  (none triggered)");
    } else {
        for insight in &insights {
            println!("  • {}", insight);
        }
    }

    match ReportGenerator::new(&sheet).save_report("demo_analysis_report.txt") {
        Ok(()) => println!("\n✅ Full report saved to demo_analysis_report.txt"),
        Err(e) => eprintln!("❌ Error saving report: {}", e),
    }
}
