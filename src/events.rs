use log::info;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// receives the per-year breakdown of a compound calculation
pub trait YearObserver {
    /// called once per complete year, in order, starting at year 1
    fn on_year_computed(&mut self, year: u32, principal: Money, interest: Money);

    /// called for the trailing partial-year segment, if any
    fn on_remainder_computed(&mut self, _days: i64, _principal: Money, _interest: Money) {}
}

/// observer that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl YearObserver for NullObserver {
    fn on_year_computed(&mut self, _year: u32, _principal: Money, _interest: Money) {}
}

/// observer that writes the breakdown to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl YearObserver for LogObserver {
    fn on_year_computed(&mut self, year: u32, principal: Money, interest: Money) {
        info!("year {}: principal {}, interest {}", year, principal, interest);
    }

    fn on_remainder_computed(&mut self, days: i64, principal: Money, interest: Money) {
        info!(
            "remaining period ({} days): principal {}, interest {}",
            days, principal, interest
        );
    }
}

/// events emitted while compounding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    YearCompounded {
        year: u32,
        principal: Money,
        interest: Money,
    },
    RemainderAccrued {
        days: i64,
        principal: Money,
        interest: Money,
    },
}

/// event store for collecting the breakdown of one or more calculations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// sum of the interest carried by all collected events
    pub fn total_interest(&self) -> Money {
        self.events.iter().fold(Money::ZERO, |acc, event| match event {
            Event::YearCompounded { interest, .. } | Event::RemainderAccrued { interest, .. } => {
                acc + *interest
            }
        })
    }
}

impl YearObserver for EventStore {
    fn on_year_computed(&mut self, year: u32, principal: Money, interest: Money) {
        self.emit(Event::YearCompounded {
            year,
            principal,
            interest,
        });
    }

    fn on_remainder_computed(&mut self, days: i64, principal: Money, interest: Money) {
        self.emit(Event::RemainderAccrued {
            days,
            principal,
            interest,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_collects_in_order() {
        let mut store = EventStore::new();
        store.on_year_computed(1, Money::from_major(1000), Money::from_major(240));
        store.on_year_computed(2, Money::from_major(1240), Money::from_major(299));
        store.on_remainder_computed(30, Money::from_major(1539), Money::from_major(31));

        assert_eq!(store.events().len(), 3);
        assert_eq!(
            store.events()[0],
            Event::YearCompounded {
                year: 1,
                principal: Money::from_major(1000),
                interest: Money::from_major(240),
            }
        );
        assert_eq!(store.total_interest(), Money::from_major(570));

        let taken = store.take_events();
        assert_eq!(taken.len(), 3);
        assert!(store.events().is_empty());
    }

    #[test]
    fn test_event_json() {
        let event = Event::RemainderAccrued {
            days: 5,
            principal: Money::from_major(100),
            interest: Money::ONE,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
