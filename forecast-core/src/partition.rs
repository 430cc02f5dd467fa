use tracing::warn;

use crate::{model::Day, normalize::normalize_condition, raw::RawSample, zone::Zone};

/// Group time-ordered samples into at most `numdays` calendar days.
///
/// Samples that fail to normalize are logged and skipped. Iteration stops at
/// the first sample that would open day `numdays + 1`. Days carry no
/// min/max temperature or astronomy data.
pub fn partition_days(samples: &[RawSample], numdays: usize, zone: Zone) -> Vec<Day> {
    let mut forecast = Vec::new();
    if numdays == 0 {
        return forecast;
    }

    let mut day: Option<Day> = None;
    for sample in samples {
        let slot = match normalize_condition(sample, zone) {
            Ok(slot) => slot,
            Err(err) => {
                warn!(error = %err, "Error parsing hourly weather condition");
                continue;
            }
        };

        let date = slot.time.date_naive();
        if day.as_ref().is_some_and(|open| open.date != date) {
            if forecast.len() + 1 >= numdays {
                break;
            }
            forecast.extend(day.take());
        }

        day.get_or_insert_with(|| Day::new(date)).slots.push(slot);
    }

    forecast.extend(day);
    forecast
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const UTC: Zone = Zone::Named(chrono_tz::UTC);
    // 2024-01-15T00:00:00Z
    const DAY0: f64 = 1_705_276_800.0;
    const HOUR: f64 = 3600.0;

    fn hourly(count: usize) -> Vec<RawSample> {
        (0..count)
            .map(|i| RawSample {
                time: Some(DAY0 + i as f64 * HOUR),
                ..Default::default()
            })
            .collect()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn splits_on_calendar_day() {
        let days = partition_days(&hourly(72), 3, UTC);

        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, date(15));
        assert_eq!(days[1].date, date(16));
        assert_eq!(days[2].date, date(17));
        assert!(days.iter().all(|d| d.slots.len() == 24));
    }

    #[test]
    fn never_exceeds_requested_days() {
        let days = partition_days(&hourly(24 * 5), 2, UTC);

        assert_eq!(days.len(), 2);
        assert_eq!(days[1].date, date(16));
        assert_eq!(days[1].slots.len(), 24);
    }

    #[test]
    fn single_day_keeps_only_first_date() {
        let days = partition_days(&hourly(48), 1, UTC);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].slots.len(), 24);
        assert!(days[0].slots.iter().all(|s| s.time.date_naive() == date(15)));
    }

    #[test]
    fn partial_range_is_accepted() {
        let days = partition_days(&hourly(30), 7, UTC);

        assert_eq!(days.len(), 2);
        assert_eq!(days[1].slots.len(), 6);
    }

    #[test]
    fn zero_days_yields_nothing() {
        assert!(partition_days(&hourly(48), 0, UTC).is_empty());
    }

    #[test]
    fn empty_input_yields_no_bucket() {
        assert!(partition_days(&[], 3, UTC).is_empty());
    }

    #[test]
    fn samples_without_time_are_skipped() {
        let mut samples = hourly(3);
        samples.insert(1, RawSample::default());
        samples.push(RawSample::default());

        let days = partition_days(&samples, 1, UTC);

        assert_eq!(days.len(), 1);
        let stamps: Vec<i64> = days[0].slots.iter().map(|s| s.time.timestamp()).collect();
        assert_eq!(stamps, vec![1_705_276_800, 1_705_280_400, 1_705_284_000]);
    }

    #[test]
    fn only_invalid_samples_yield_no_bucket() {
        let samples = vec![RawSample::default(), RawSample::default()];
        assert!(partition_days(&samples, 2, UTC).is_empty());
    }

    #[test]
    fn day_boundary_follows_zone() {
        // 22:00Z..02:00Z is still 2024-01-15 in New York
        let samples: Vec<RawSample> = (22..27)
            .map(|h| RawSample {
                time: Some(DAY0 + f64::from(h) * HOUR),
                ..Default::default()
            })
            .collect();

        let utc_days = partition_days(&samples, 3, UTC);
        assert_eq!(utc_days.len(), 2);

        let ny = Zone::Named(chrono_tz::America::New_York);
        let ny_days = partition_days(&samples, 3, ny);
        assert_eq!(ny_days.len(), 1);
        assert_eq!(ny_days[0].date, date(15));
        assert_eq!(ny_days[0].slots.len(), 5);
    }

    #[test]
    fn day_date_is_first_slot_date() {
        let days = partition_days(&hourly(24 * 3), 3, UTC);
        for day in &days {
            assert_eq!(day.date, day.slots[0].time.date_naive());
        }
    }
}
