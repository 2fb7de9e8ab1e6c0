/// json results - request in, calculation and breakdown out
use interest_calc_rs::{EventStore, InterestRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = InterestRequest::from_json(
        r#"{
            "principal": "25000",
            "rate": "1.25",
            "start_date": "2020-02-29",
            "end_date": "2023-05-01",
            "config": { "leap_day_policy": "clamp_to_feb28" }
        }"#,
    )?;

    let mut breakdown = EventStore::new();
    let compound = request.compound_observed(&mut breakdown)?;
    let simple = request.simple()?;

    println!("{}", simple.to_json_pretty()?);
    println!("{}", compound.to_json_pretty()?);
    println!("{}", serde_json::to_string_pretty(breakdown.events())?);

    Ok(())
}
