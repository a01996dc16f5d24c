use balance_sheet_analyzer::BalanceSheet;

// Prints the JSON Schema for balance sheet input files. Pipe to a file to
// hand the expected shape to another tool or a form generator.
fn main() {
    match BalanceSheet::schema_as_json() {
        Ok(schema) => println!("{}", schema),
        Err(e) => eprintln!("❌ Error generating schema: {}", e),
    }
}
