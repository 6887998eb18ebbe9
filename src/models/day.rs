//! Weekday and shift period types.
//!
//! Days are keyed by their French names everywhere the pharmacy exchanges
//! data (`"lundi"`, `"mardi"`, ...). The enum order is Monday first, which is
//! also the order in which the schedule is walked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Fixed duration of one shift, in hours.
pub const SHIFT_DURATION_HOURS: u32 = 4;

/// A day of the week.
///
/// # Example
///
/// ```
/// use pharmacy_compliance::models::Day;
///
/// let day: Day = "mercredi".parse().unwrap();
/// assert_eq!(day, Day::Wednesday);
/// assert_eq!(day.to_string(), "mercredi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    /// Monday.
    #[serde(rename = "lundi")]
    Monday,
    /// Tuesday.
    #[serde(rename = "mardi")]
    Tuesday,
    /// Wednesday.
    #[serde(rename = "mercredi")]
    Wednesday,
    /// Thursday.
    #[serde(rename = "jeudi")]
    Thursday,
    /// Friday.
    #[serde(rename = "vendredi")]
    Friday,
    /// Saturday.
    #[serde(rename = "samedi")]
    Saturday,
    /// Sunday (mandatory weekly rest day).
    #[serde(rename = "dimanche")]
    Sunday,
}

impl Day {
    /// Days on which the pharmacy opens.
    pub const OPENING_DAYS: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Returns the French name of the day.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "lundi",
            Day::Tuesday => "mardi",
            Day::Wednesday => "mercredi",
            Day::Thursday => "jeudi",
            Day::Friday => "vendredi",
            Day::Saturday => "samedi",
            Day::Sunday => "dimanche",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lundi" => Ok(Day::Monday),
            "mardi" => Ok(Day::Tuesday),
            "mercredi" => Ok(Day::Wednesday),
            "jeudi" => Ok(Day::Thursday),
            "vendredi" => Ok(Day::Friday),
            "samedi" => Ok(Day::Saturday),
            "dimanche" => Ok(Day::Sunday),
            _ => Err(EngineError::InvalidDay {
                value: s.to_string(),
            }),
        }
    }
}

impl From<chrono::Weekday> for Day {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Day::Monday,
            chrono::Weekday::Tue => Day::Tuesday,
            chrono::Weekday::Wed => Day::Wednesday,
            chrono::Weekday::Thu => Day::Thursday,
            chrono::Weekday::Fri => Day::Friday,
            chrono::Weekday::Sat => Day::Saturday,
            chrono::Weekday::Sun => Day::Sunday,
        }
    }
}

/// One of the two fixed daily shifts.
///
/// Serialized as `"morning"` / `"afternoon"`; the French keys `"matin"` and
/// `"apres_midi"` are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftPeriod {
    /// Morning shift.
    #[serde(alias = "matin")]
    Morning,
    /// Afternoon shift.
    #[serde(alias = "apres_midi")]
    Afternoon,
}

impl ShiftPeriod {
    /// Both shifts in daily order.
    pub const ALL: [ShiftPeriod; 2] = [ShiftPeriod::Morning, ShiftPeriod::Afternoon];

    /// Returns the serialized key of the shift.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftPeriod::Morning => "morning",
            ShiftPeriod::Afternoon => "afternoon",
        }
    }

    /// Returns the label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            ShiftPeriod::Morning => "matin",
            ShiftPeriod::Afternoon => "apres midi",
        }
    }
}

impl fmt::Display for ShiftPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
