use comfy_table::{Cell, Color, Table};

use crate::consts::SEPARATOR_WIDTH;
use crate::core::FilterSpec;
use crate::error::AppError;
use crate::output::format::{
    ANSI_CYAN, ANSI_RED, create_styled_table, format_duration, format_number, format_seconds,
    header_cell, paint, right_cell, styled_cell,
};
use crate::report::{
    BirthYearSummary, DurationStats, Reports, StationStats, TimeStats, UserStats,
};
use crate::utils::{month_name, weekday_name};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TextOptions {
    pub(crate) use_color: bool,
}

fn count_cell(count: usize) -> Cell {
    right_cell(&format_number(count as i64), None, false)
}

fn mode_table(
    value_label: &str,
    rows: Vec<(&str, String, usize)>,
    opts: TextOptions,
) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Most common", opts.use_color),
        header_cell(value_label, opts.use_color),
        header_cell("Trips", opts.use_color),
    ]);
    for (label, value, count) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value), count_cell(count)]);
    }
    table
}

fn time_table(stats: &TimeStats, opts: TextOptions) -> Table {
    mode_table(
        "Value",
        vec![
            ("Month", month_name(stats.month.value).to_string(), stats.month.count),
            ("Day", weekday_name(stats.day.value).to_string(), stats.day.count),
            ("Hour (24h)", format!("{:02}:00", stats.hour.value), stats.hour.count),
        ],
        opts,
    )
}

fn station_table(stats: &StationStats, opts: TextOptions) -> Table {
    let (from, to) = &stats.pair.value;
    mode_table(
        "Station",
        vec![
            ("Start station", stats.start.value.clone(), stats.start.count),
            ("End station", stats.end.value.clone(), stats.end.count),
            ("Trip", format!("{from} → {to}"), stats.pair.count),
        ],
        opts,
    )
}

fn duration_table(stats: &DurationStats, opts: TextOptions) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Travel time", opts.use_color),
        header_cell("Seconds", opts.use_color),
        header_cell("Duration", opts.use_color),
    ]);
    table.add_row(vec![
        Cell::new("Total"),
        right_cell(&format_seconds(stats.total_seconds), None, false),
        right_cell(&format_duration(stats.total_seconds), None, false),
    ]);
    table.add_row(vec![
        Cell::new("Mean"),
        right_cell(&format_seconds(stats.mean_seconds), None, false),
        right_cell(&format_duration(stats.mean_seconds), None, false),
    ]);
    table.add_row(vec![
        Cell::new("Trips"),
        count_cell(stats.trips),
        Cell::new(""),
    ]);
    table
}

fn counts_table(label: &str, counts: &[(String, usize)], opts: TextOptions) -> Table {
    let cyan = if opts.use_color { Some(Color::Cyan) } else { None };
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell(label, opts.use_color),
        header_cell("Count", opts.use_color),
    ]);
    for (value, count) in counts {
        table.add_row(vec![Cell::new(value), count_cell(*count)]);
    }
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    table.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        right_cell(&format_number(total as i64), cyan, true),
    ]);
    table
}

fn birth_year_table(years: &BirthYearSummary, opts: TextOptions) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Birth year", opts.use_color),
        header_cell("Year", opts.use_color),
    ]);
    for (label, year) in [
        ("Earliest", years.earliest),
        ("Most recent", years.most_recent),
        ("Most common", years.most_common),
    ] {
        table.add_row(vec![Cell::new(label), right_cell(&year.to_string(), None, false)]);
    }
    table
}

fn user_tables(stats: &UserStats, opts: TextOptions) -> Vec<Table> {
    let mut tables = vec![counts_table("User type", &stats.user_types, opts)];
    if let Some(genders) = &stats.genders {
        tables.push(counts_table("Gender", genders, opts));
    }
    if let Some(years) = &stats.birth_years {
        tables.push(birth_year_table(years, opts));
    }
    tables
}

/// Print one report block: heading, tables or error, timing, separator
fn print_section(
    title: &str,
    result: Result<Vec<Table>, &AppError>,
    elapsed_ms: f64,
    opts: TextOptions,
) {
    println!("\n  {title}\n");
    match result {
        Ok(tables) => {
            for table in tables {
                println!("{table}");
            }
        }
        Err(e) => println!("  {} {e}", paint("Error:", ANSI_RED, opts.use_color)),
    }
    println!(
        "\n  This took {}",
        paint(&format!("{elapsed_ms:.2}ms"), ANSI_CYAN, opts.use_color)
    );
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

pub(crate) fn print_selection(filter: &FilterSpec, records: usize) {
    println!(
        "You have selected city: {}, month: {}, and day: {}",
        filter.city.name().to_uppercase(),
        filter.month.to_string().to_uppercase(),
        filter.day.to_string().to_uppercase()
    );
    println!("{} matching trips", format_number(records as i64));
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

pub(crate) fn print_reports(reports: &Reports, opts: TextOptions) {
    print_section(
        "Most Frequent Times of Travel",
        reports.time.value.as_ref().map(|s| vec![time_table(s, opts)]),
        reports.time.elapsed_ms,
        opts,
    );
    print_section(
        "Most Popular Stations and Trip",
        reports.station.value.as_ref().map(|s| vec![station_table(s, opts)]),
        reports.station.elapsed_ms,
        opts,
    );
    print_section(
        "Trip Duration",
        reports.duration.value.as_ref().map(|s| vec![duration_table(s, opts)]),
        reports.duration.elapsed_ms,
        opts,
    );
    print_section(
        "User Stats",
        Ok(user_tables(&reports.user.value, opts)),
        reports.user.elapsed_ms,
        opts,
    );
}
