//! Human-friendly terminal rendering.

use skycast_core::{ForecastResponse, SearchCompletion, WeatherResponse};

use crate::store::SavedLocations;

pub fn print_current(response: &WeatherResponse) {
    let location = &response.location;
    let current = &response.current;

    println!(
        "{}, {}, {}",
        location.name, location.region, location.country
    );
    println!(
        "  {}, {:.1}°C ({:.1}°F), feels like {:.1}°C",
        current.condition.code.description(current.is_daytime()),
        current.temp_c,
        current.temp_f,
        current.feelslike_c,
    );
    println!(
        "  wind {} kph {}, humidity {}%, UV {}",
        current.wind_kph, current.wind_dir, current.humidity, current.uv
    );
    println!("  updated {}", current.last_updated);
}

pub fn print_forecast(response: &ForecastResponse, show_hours: bool) {
    let location = &response.location;
    println!(
        "{}, {}, {}",
        location.name, location.region, location.country
    );

    for day in &response.forecast.forecastday {
        let weekday = day
            .date_utc()
            .map(|d| d.format("%a").to_string())
            .unwrap_or_default();
        println!(
            "{weekday} {}: {}, {:.0}..{:.0}°C, rain {}%",
            day.date,
            day.day.condition.code.description(true),
            day.day.mintemp_c,
            day.day.maxtemp_c,
            day.day.daily_chance_of_rain,
        );
        println!("  sunrise {}  sunset {}", day.astro.sunrise, day.astro.sunset);

        if show_hours {
            for hour in &day.hour {
                println!(
                    "  {}  {:>5.1}°C  {}",
                    time_label(&hour.time),
                    hour.temp_c,
                    hour.condition.code.description(hour.is_daytime()),
                );
            }
        }
    }
}

pub fn print_search_results(results: &[SearchCompletion]) {
    for (index, completion) in results.iter().enumerate() {
        println!("{:>2}. {}", index + 1, completion_label(completion));
    }
}

pub fn print_saved(store: &SavedLocations) {
    if store.saved.is_empty() {
        println!("Nothing saved yet. Use `skycast search <text> --save`.");
        return;
    }

    for completion in &store.saved {
        let marker = if store
            .default
            .as_ref()
            .is_some_and(|d| d.id == completion.id)
        {
            "*"
        } else {
            " "
        };
        println!("{marker} {}", completion_label(completion));
    }
}

pub fn completion_label(completion: &SearchCompletion) -> String {
    format!(
        "{}, {}, {}",
        completion.name, completion.region, completion.country
    )
}

/// The time-of-day part of a vendor timestamp like "2023-11-15 13:00".
fn time_label(time: &str) -> &str {
    time.split(' ').nth(1).unwrap_or(time)
}
