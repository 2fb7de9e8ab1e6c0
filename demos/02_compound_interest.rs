/// compound interest - annual compounding with the per-year breakdown logged
///
/// cargo run --example 02_compound_interest -- 50000 1.5 2019-06-10 2024-11-02
use interest_calc_rs::{InterestRequest, LogObserver, Money, Rate};
use log::info;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new().with_level(log::LevelFilter::Debug).init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize, default: &str| args.get(i).cloned().unwrap_or_else(|| default.to_string());

    let request = InterestRequest::builder()
        .principal(Money::parse(&arg(0, "50000"))?)
        .rate(Rate::parse(&arg(1, "1.5"))?)
        .start_date(arg(2, "2019-06-10"))
        .end_date(arg(3, "2024-11-02"))
        .build()?;

    let result = request.compound_observed(&mut LogObserver)?;
    let (final_amount, total_interest) = result.final_then_interest();

    info!("principal amount: {}", request.principal.trunc());
    info!("interest:         {}", total_interest);
    info!("final amount:     {}", final_amount);

    Ok(())
}
