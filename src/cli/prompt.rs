//! Interactive filter prompts
//!
//! Re-asks each question until the answer is in the vocabulary. EOF ends the session.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::consts::{ALL, DAYS, MONTHS, SEPARATOR_WIDTH};
use crate::core::{City, DayFilter, FilterSpec, MonthFilter};

pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next trimmed line, or `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask<T: FromStr>(&mut self, question: &str, choices: &[&str]) -> io::Result<Option<T>> {
        writeln!(self.output, "{question}")?;
        loop {
            self.output.flush()?;
            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if let Ok(value) = answer.parse::<T>() {
                return Ok(Some(value));
            }
            writeln!(self.output, "Sorry! This is not a valid input.")?;
            writeln!(
                self.output,
                "Please enter any of the following: {}",
                choices.join(", ")
            )?;
        }
    }

    /// Ask for city, month and day. `None` if input ends first.
    pub(crate) fn get_filters(&mut self) -> io::Result<Option<FilterSpec>> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let cities: Vec<&str> = City::ALL.iter().map(|c| c.name()).collect();
        let Some(city) = self.ask::<City>("Which city are you interested in?", &cities)? else {
            return Ok(None);
        };

        let months: Vec<&str> = MONTHS.iter().copied().chain([ALL]).collect();
        let Some(month) = self.ask::<MonthFilter>(
            "Which month are you interested in (january to june)? Type \"all\" for every month.",
            &months,
        )?
        else {
            return Ok(None);
        };

        let days: Vec<&str> = DAYS.iter().copied().chain([ALL]).collect();
        let Some(day) = self.ask::<DayFilter>(
            "Which day are you interested in (monday, tuesday, ...)? Type \"all\" for every day.",
            &days,
        )?
        else {
            return Ok(None);
        };

        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        self.output.flush()?;
        Ok(Some(FilterSpec::new(city, month, day)))
    }

    /// Only an explicit "yes" restarts
    pub(crate) fn ask_restart(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\nWould you like to restart? Enter yes or no.")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
    }
}
