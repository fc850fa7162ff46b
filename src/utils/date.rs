use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A calendar month selected with `--period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidPeriod(format!("{year}-{month}")));
        }
        Ok(Self { year, month })
    }

    pub fn current() -> Self {
        let t = today();
        Self {
            year: t.year(),
            month: t.month(),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(p: &str) -> AppResult<Self> {
        let p = p.trim();
        let (y, m) = p
            .split_once('-')
            .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;

        if y.len() != 4 || m.is_empty() || m.len() > 2 {
            return Err(AppError::InvalidPeriod(p.to_string()));
        }

        let year: i32 = y
            .parse()
            .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
        let month: u32 = m
            .parse()
            .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;

        Self::new(year, month).map_err(|_| AppError::InvalidPeriod(p.to_string()))
    }

    /// `None` → current month.
    pub fn resolve(period: &Option<String>) -> AppResult<Self> {
        match period {
            Some(p) => Self::parse(p),
            None => Ok(Self::current()),
        }
    }

    /// Label used in titles and default file names, e.g. `2024_3`.
    pub fn file_suffix(&self) -> String {
        format!("{}_{}", self.year, self.month)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
