/// simple interest - principal, rate and dates from the command line
///
/// cargo run --example 01_simple_interest -- 1000 2 2023-01-01 2023-01-31
use interest_calc_rs::{InterestRequest, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== simple interest ===\n");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize, default: &str| args.get(i).cloned().unwrap_or_else(|| default.to_string());

    let request = InterestRequest::builder()
        .principal(Money::parse(&arg(0, "1000"))?)
        .rate(Rate::parse(&arg(1, "2"))?)
        .start_date(arg(2, "2023-01-01"))
        .end_date(arg(3, "2023-01-31"))
        .build()?;

    let result = request.simple()?;
    let (interest, final_amount) = result.interest_then_final();

    println!("principal amount: {}", request.principal.trunc());
    println!("days:             {}", result.days);
    println!("interest:         {}", interest);
    println!("final amount:     {}", final_amount);

    Ok(())
}
