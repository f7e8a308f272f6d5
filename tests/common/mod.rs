#![allow(dead_code)]

use chrono::NaiveDate;
use festival_map::{DaySchedule, Event, ScheduleData, Venues};

pub fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Three days across resolvable, unresolvable, placeholder and multi-venue events.
pub fn sample_schedule() -> ScheduleData {
    ScheduleData::new("Sinulog 2025", "Pit Senyor!")
        .with_day(DaySchedule::new(
            d(2025, 1, 15),
            vec![
                Event::new("Opening Mass", "6:00 AM", "Basilica del Sto. Nino"),
                Event::new("Secret Gig", "9:00 PM", "Undisclosed venue TBA"),
                Event::new("Pop-up Market", "10:00 AM", "Colon Street"),
            ],
        ))
        .with_day(DaySchedule::new(
            d(2025, 1, 16),
            vec![
                Event::new(
                    "Traslacion",
                    "4:00 AM",
                    Venues::Multiple(vec!["Basilica del Sto. Nino".into(), "Mandaue City".into()]),
                ),
                Event::new("Food Fair", "TBA", "SM Seaside Cebu"),
            ],
        ))
        .with_day(DaySchedule::new(
            d(2025, 1, 19),
            vec![
                Event::new("Grand Parade", "9:00 AM", "SRP Grandstand")
                    .with_description("Contingents perform at the grandstand."),
                Event::new("Afterparty", "8:00 PM", "GMall"),
            ],
        ))
}
