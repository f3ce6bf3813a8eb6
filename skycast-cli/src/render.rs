//! Human-friendly rendering of the widget state.
//!
//! One state, one block of text. The Ready card mirrors the widget layout:
//! animated icon, rounded temperature, wind, place and time, then the
//! forecast grid.

use skycast_core::{
    Animation, TemperatureUnit, ViewState, WeatherReport, glyph_for,
};

pub fn view(state: &ViewState, unit: TemperatureUnit) -> String {
    match state {
        ViewState::Idle => "🔎 Search for a city to see the weather".to_string(),
        ViewState::Loading => "Loading...".to_string(),
        ViewState::Error(message) => format!("⚠ {message}"),
        ViewState::Ready(report) => card(report, unit),
    }
}

fn card(report: &WeatherReport, unit: TemperatureUnit) -> String {
    let glyph = glyph_for(report.current.weather_code);
    let mut lines = Vec::new();

    lines.push(format!("  {}", glyph.emoji));
    if let Some(effect) = effect_row(glyph.animation) {
        lines.push(format!("  {effect}"));
    }
    lines.push(format!("  {}{}", report.current.temperature.round(), unit.suffix()));
    lines.push(format!("  Wind {} km/h", report.current.wind_speed_kmh));
    lines.push(format!(
        "  {} • {}",
        report.place.display_label(),
        report.current.observation_time.format("%H:%M")
    ));

    if !report.forecast.is_empty() {
        lines.push(String::new());
        for day in &report.forecast {
            let glyph = glyph_for(day.weather_code);
            lines.push(format!(
                "  {}  {}  {}° / {}°",
                day.date.format("%a"),
                glyph.emoji,
                day.max_temp,
                day.min_temp
            ));
        }
    }

    lines.join("\n")
}

/// Terminal stand-in for the widget's rain/snow/lightning overlays.
fn effect_row(animation: Option<Animation>) -> Option<&'static str> {
    match animation? {
        Animation::Rain => Some("╱ ╱ ╱ ╱ ╱"),
        Animation::Snow => Some("❄ ❄ ❄ ❄"),
        Animation::Storm => Some("⚡ ╱ ⚡ ╱ ⚡"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skycast_core::{Coordinate, CurrentConditions, ForecastDay, ResolvedPlace};

    fn report(code: i32) -> WeatherReport {
        let first = NaiveDate::from_ymd_opt(2024, 5, 14).expect("date");
        WeatherReport {
            place: ResolvedPlace {
                coordinate: Coordinate { latitude: 19.076, longitude: 72.8777 },
                name: "Mumbai".to_string(),
                country: Some("India".to_string()),
            },
            current: CurrentConditions {
                temperature: 30.4,
                wind_speed_kmh: 12.5,
                weather_code: code,
                observation_time: first.and_hms_opt(12, 30, 0).expect("time"),
            },
            forecast: vec![
                ForecastDay {
                    date: first,
                    weather_code: code,
                    max_temp: 31.2,
                    min_temp: 26.0,
                },
                ForecastDay {
                    date: first.succ_opt().expect("date"),
                    weather_code: 61,
                    max_temp: 29.8,
                    min_temp: 25.1,
                },
            ],
        }
    }

    #[test]
    fn ready_card_shows_label_rounded_temperature_and_grid() {
        let text = view(&ViewState::Ready(report(3)), TemperatureUnit::Celsius);

        assert!(text.contains("Mumbai, India"));
        assert!(text.contains("30°C"));
        assert!(text.contains("Wind 12.5 km/h"));
        assert!(text.contains("⛅"));
        assert!(text.contains("12:30"));
        // 2024-05-14 is a Tuesday
        assert!(text.contains("Tue"));
        assert!(text.contains("31.2° / 26°"));
    }

    #[test]
    fn fahrenheit_suffix_follows_the_unit() {
        let text = view(&ViewState::Ready(report(0)), TemperatureUnit::Fahrenheit);
        assert!(text.contains("30°F"));
    }

    #[test]
    fn stormy_card_gets_an_effect_row() {
        let text = view(&ViewState::Ready(report(95)), TemperatureUnit::Celsius);
        assert!(text.contains("⛈"));
        assert!(text.contains("⚡"));
    }

    #[test]
    fn clear_card_has_no_effect_row() {
        let text = view(&ViewState::Ready(report(0)), TemperatureUnit::Celsius);
        assert!(!text.contains('⚡'));
        assert!(!text.contains('╱'));
    }

    #[test]
    fn idle_prompts_for_a_search() {
        assert_eq!(
            view(&ViewState::Idle, TemperatureUnit::Celsius),
            "🔎 Search for a city to see the weather"
        );
    }

    #[test]
    fn loading_and_error_are_single_lines() {
        assert_eq!(view(&ViewState::Loading, TemperatureUnit::Celsius), "Loading...");
        assert_eq!(
            view(&ViewState::Error("City not found".to_string()), TemperatureUnit::Celsius),
            "⚠ City not found"
        );
    }
}
