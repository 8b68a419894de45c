//! Return-period metric keys and the typed per-sample value map.

use serde::{Deserialize, Serialize};

use crate::error::{HazardError, HazardResult};

/// The closed set of return-period identifiers carried by every sample.
///
/// A return period is the average recurrence interval of an event of a
/// given intensity; a 100-year wind speed has a 1% chance of being
/// exceeded in any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnPeriod {
    Rp10,
    Rp25,
    Rp50,
    Rp100,
    Rp250,
    Rp1000,
}

impl ReturnPeriod {
    /// All return periods, shortest recurrence first.
    pub const ALL: [ReturnPeriod; 6] = [
        ReturnPeriod::Rp10,
        ReturnPeriod::Rp25,
        ReturnPeriod::Rp50,
        ReturnPeriod::Rp100,
        ReturnPeriod::Rp250,
        ReturnPeriod::Rp1000,
    ];

    /// Recurrence interval in years.
    pub fn years(&self) -> u32 {
        match self {
            ReturnPeriod::Rp10 => 10,
            ReturnPeriod::Rp25 => 25,
            ReturnPeriod::Rp50 => 50,
            ReturnPeriod::Rp100 => 100,
            ReturnPeriod::Rp250 => 250,
            ReturnPeriod::Rp1000 => 1000,
        }
    }

    /// Archive key form, e.g. `rp250`.
    pub fn key(&self) -> &'static str {
        match self {
            ReturnPeriod::Rp10 => "rp10",
            ReturnPeriod::Rp25 => "rp25",
            ReturnPeriod::Rp50 => "rp50",
            ReturnPeriod::Rp100 => "rp100",
            ReturnPeriod::Rp250 => "rp250",
            ReturnPeriod::Rp1000 => "rp1000",
        }
    }

    /// Human label for legends, e.g. `250-year`.
    pub fn label(&self) -> String {
        format!("{}-year", self.years())
    }

    /// Parse either the archive key form (`rp250`) or the bare year
    /// count (`250`).
    pub fn parse(s: &str) -> HazardResult<Self> {
        let digits = s.strip_prefix("rp").unwrap_or(s);
        match digits {
            "10" => Ok(ReturnPeriod::Rp10),
            "25" => Ok(ReturnPeriod::Rp25),
            "50" => Ok(ReturnPeriod::Rp50),
            "100" => Ok(ReturnPeriod::Rp100),
            "250" => Ok(ReturnPeriod::Rp250),
            "1000" => Ok(ReturnPeriod::Rp1000),
            _ => Err(HazardError::UnknownReturnPeriod(s.to_string())),
        }
    }
}

impl std::str::FromStr for ReturnPeriod {
    type Err = HazardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReturnPeriod::parse(s)
    }
}

impl std::fmt::Display for ReturnPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Wind speeds in m/s for every return period at one location.
///
/// Field names match the archive's point records, so this struct
/// flattens into `{"rp10": ..., ..., "rp1000": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSpeeds {
    pub rp10: f64,
    pub rp25: f64,
    pub rp50: f64,
    pub rp100: f64,
    pub rp250: f64,
    pub rp1000: f64,
}

impl WindSpeeds {
    /// Wind speed for the given return period.
    pub fn get(&self, period: ReturnPeriod) -> f64 {
        match period {
            ReturnPeriod::Rp10 => self.rp10,
            ReturnPeriod::Rp25 => self.rp25,
            ReturnPeriod::Rp50 => self.rp50,
            ReturnPeriod::Rp100 => self.rp100,
            ReturnPeriod::Rp250 => self.rp250,
            ReturnPeriod::Rp1000 => self.rp1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_and_years() {
        assert_eq!(ReturnPeriod::parse("rp250").unwrap(), ReturnPeriod::Rp250);
        assert_eq!(ReturnPeriod::parse("50").unwrap(), ReturnPeriod::Rp50);
        assert!(ReturnPeriod::parse("rp9000").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for rp in ReturnPeriod::ALL {
            let parsed: ReturnPeriod = rp.to_string().parse().unwrap();
            assert_eq!(parsed, rp);
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(ReturnPeriod::Rp100.label(), "100-year");
    }

    #[test]
    fn test_wind_speeds_get() {
        let speeds = WindSpeeds {
            rp10: 20.0,
            rp25: 28.0,
            rp50: 35.0,
            rp100: 42.0,
            rp250: 51.0,
            rp1000: 63.0,
        };
        assert_eq!(speeds.get(ReturnPeriod::Rp10), 20.0);
        assert_eq!(speeds.get(ReturnPeriod::Rp1000), 63.0);
    }

    #[test]
    fn test_wind_speeds_serde_field_names() {
        let speeds = WindSpeeds {
            rp10: 20.0,
            rp25: 28.0,
            rp50: 35.0,
            rp100: 42.0,
            rp250: 51.0,
            rp1000: 63.0,
        };
        let json = serde_json::to_value(speeds).unwrap();
        assert_eq!(json["rp250"], 51.0);
        assert_eq!(json["rp1000"], 63.0);
    }
}
