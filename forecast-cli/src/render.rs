use forecast_core::{Condition, WeatherData};

/// Plain-text rendering: location, current condition, then one block per day.
pub fn render(data: &WeatherData) -> String {
    let mut out = format!(
        "Weather for {}\nNow   {}\n",
        data.location,
        line(&data.current)
    );

    for day in &data.forecast {
        out.push_str(&format!("\n{}\n", day.date.format("%a %d %b %Y")));
        for slot in &day.slots {
            out.push_str(&format!("{} {}\n", slot.time.format("%H:%M"), line(slot)));
        }
    }

    out
}

fn line(cond: &Condition) -> String {
    let mut parts = vec![format!("{:<16}", cond.code.description())];

    if let Some(temp) = cond.temp_c {
        match cond.feels_like_c {
            Some(feels) => parts.push(format!("{temp:.1}°C ({feels:.1}°C)")),
            None => parts.push(format!("{temp:.1}°C")),
        }
    }
    if let Some(chance) = cond.chance_of_rain_percent {
        parts.push(format!("rain {chance}%"));
    }
    if let Some(precip) = cond.precip_m {
        parts.push(format!("{:.1} mm", precip * 1000.0));
    }
    if let Some(speed) = cond.windspeed_kmph {
        match cond.winddir_degree {
            Some(dir) => parts.push(format!("wind {speed:.0} km/h {dir}°")),
            None => parts.push(format!("wind {speed:.0} km/h")),
        }
    }
    if !cond.desc.is_empty() {
        parts.push(cond.desc.clone());
    }

    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::{RawSample, Zone, normalize_condition, partition_days};

    fn data(samples: &[RawSample]) -> WeatherData {
        let zone = Zone::parse("UTC").unwrap();
        WeatherData {
            current: normalize_condition(&samples[0], zone).unwrap(),
            location: "40.748000:-73.985000".into(),
            geo_location: None,
            forecast: partition_days(samples, 2, zone),
        }
    }

    #[test]
    fn renders_days_and_slots() {
        // 2024-01-15T23:00:00Z and the following hour
        let samples = vec![
            RawSample {
                time: Some(1_705_359_600.0),
                icon: Some("rain".into()),
                summary: Some("Drizzle".into()),
                temperature: Some(3.0),
                apparent_temperature: Some(0.5),
                precip_probability: Some(0.8),
                wind_speed: Some(12.0),
                wind_bearing: Some(90.0),
                ..Default::default()
            },
            RawSample {
                time: Some(1_705_363_200.0),
                ..Default::default()
            },
        ];

        let text = render(&data(&samples));

        assert!(text.starts_with("Weather for 40.748000:-73.985000\n"));
        assert!(text.contains("Mon 15 Jan 2024"));
        assert!(text.contains("Tue 16 Jan 2024"));
        assert!(text.contains("23:00 Light rain"));
        assert!(text.contains("3.0°C (0.5°C)"));
        assert!(text.contains("rain 80%"));
        assert!(text.contains("wind 12 km/h 90°"));
        assert!(text.contains("00:00 Unknown"));
    }

    #[test]
    fn omits_absent_values() {
        let samples = vec![RawSample {
            time: Some(1_705_359_600.0),
            ..Default::default()
        }];

        let text = render(&data(&samples));

        assert!(!text.contains("°C"));
        assert!(!text.contains("wind"));
        assert!(!text.contains("rain"));
    }

    #[test]
    fn lays_out_one_block_per_day() {
        let samples = vec![
            RawSample {
                time: Some(1_705_359_600.0),
                ..Default::default()
            },
            RawSample {
                time: Some(1_705_363_200.0),
                ..Default::default()
            },
        ];

        let text = render(&data(&samples));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Weather for 40.748000:-73.985000");
        assert!(lines[1].starts_with("Now   Unknown"));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Mon 15 Jan 2024");
        assert!(lines[4].starts_with("23:00 Unknown"));
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Tue 16 Jan 2024");
        assert!(lines[7].starts_with("00:00 Unknown"));
        assert!(text.ends_with('\n'));
    }
}
