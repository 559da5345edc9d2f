//! 月ラベル
//!
//! 12か月の固定ラベル。任意の文字列は月として扱わない。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// 暦順の全12か月
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// 暦上の位置（0始まり）
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// 生成シード: (index + 1) * 1000
    pub fn seed(&self) -> u64 {
        (self.index() as u64 + 1) * 1000
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownMonth(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_follows_calendar_position() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.seed(), (i as u64 + 1) * 1000);
        }
        assert_eq!(Month::January.seed(), 1000);
        assert_eq!(Month::December.seed(), 12000);
    }

    #[test]
    fn test_seed_strictly_increasing() {
        let seeds: Vec<u64> = Month::ALL.iter().map(Month::seed).collect();
        assert!(seeds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!("March".parse::<Month>().unwrap(), Month::March);
        assert_eq!(" october ".parse::<Month>().unwrap(), Month::October);
    }

    #[test]
    fn test_parse_unknown_month() {
        let err = "Smarch".parse::<Month>().unwrap_err();
        assert!(matches!(err, Error::UnknownMonth(ref s) if s == "Smarch"));
    }

    #[test]
    fn test_display_roundtrips_name() {
        for month in Month::ALL {
            assert_eq!(month.to_string(), month.name());
        }
    }
}
