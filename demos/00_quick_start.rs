/// quick start - minimal example to get started
use interest_calc_rs::{CalculationMethod, InterestRequest, Money, NullObserver, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10,000 lent at 2 per hundred per month
    let request = InterestRequest::builder()
        .principal(Money::from_major(10_000))
        .rate(Rate::from_major(2))
        .start_date("2022-04-01")
        .end_date("2024-09-15")
        .build()?;

    for method in [CalculationMethod::Simple, CalculationMethod::AnnualCompound] {
        let result = request.calculate(method, &mut NullObserver)?;
        println!(
            "{:?}: interest {}, final {}",
            method, result.interest_amount, result.final_amount
        );
    }

    Ok(())
}
