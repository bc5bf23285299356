use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::core::{FilterSpec, Mode};
use crate::error::AppError;
use crate::report::{DurationStats, Reports, StationStats, TimeStats, UserStats};
use crate::utils::{month_name, weekday_name};

fn mode_json<T: Serialize>(mode: &Mode<T>) -> Value {
    json!({ "value": mode.value, "count": mode.count })
}

fn report_json<T>(result: &Result<T, AppError>, render: impl FnOnce(&T) -> Value) -> Value {
    match result {
        Ok(stats) => render(stats),
        Err(e) => json!({ "error": e.to_string() }),
    }
}

fn time_json(stats: &TimeStats) -> Value {
    json!({
        "month": {
            "value": stats.month.value,
            "name": month_name(stats.month.value),
            "count": stats.month.count,
        },
        "day": {
            "value": weekday_name(stats.day.value),
            "count": stats.day.count,
        },
        "hour": mode_json(&stats.hour),
    })
}

fn station_json(stats: &StationStats) -> Value {
    let (from, to) = &stats.pair.value;
    json!({
        "start": mode_json(&stats.start),
        "end": mode_json(&stats.end),
        "pair": {
            "start": from,
            "end": to,
            "count": stats.pair.count,
        },
    })
}

fn duration_json(stats: &DurationStats) -> Value {
    json!({
        "trips": stats.trips,
        "total_seconds": stats.total_seconds,
        "mean_seconds": stats.mean_seconds,
    })
}

fn counts_json(counts: &[(String, usize)]) -> Value {
    counts
        .iter()
        .map(|(value, count)| json!({ "value": value, "count": count }))
        .collect()
}

/// Optional sections are left out entirely rather than written as null
fn user_json(stats: &UserStats) -> Value {
    let mut obj = Map::new();
    obj.insert("user_types".to_string(), counts_json(&stats.user_types));
    if let Some(genders) = &stats.genders {
        obj.insert("genders".to_string(), counts_json(genders));
    }
    if let Some(years) = &stats.birth_years {
        obj.insert(
            "birth_years".to_string(),
            json!({
                "earliest": years.earliest,
                "most_recent": years.most_recent,
                "most_common": years.most_common,
            }),
        );
    }
    Value::Object(obj)
}

pub(crate) fn reports_json(filter: &FilterSpec, records: usize, reports: &Reports) -> Value {
    json!({
        "filter": {
            "city": filter.city.name(),
            "month": filter.month.to_string(),
            "day": filter.day.to_string(),
        },
        "records": records,
        "time": report_json(&reports.time.value, time_json),
        "station": report_json(&reports.station.value, station_json),
        "duration": report_json(&reports.duration.value, duration_json),
        "user": user_json(&reports.user.value),
    })
}

pub(crate) fn output_reports_json(filter: &FilterSpec, records: usize, reports: &Reports) -> String {
    let output = reports_json(filter, records, reports);
    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}
