//! Typed keys identifying one dataset in the archive.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Shared Socioeconomic Pathway emissions scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    Ssp245,
    Ssp370,
    Ssp585,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Ssp245, Scenario::Ssp370, Scenario::Ssp585];

    /// Archive key form, e.g. `ssp585`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Ssp245 => "ssp245",
            Scenario::Ssp370 => "ssp370",
            Scenario::Ssp585 => "ssp585",
        }
    }

    /// Human label for UI controls.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Ssp245 => "SSP245 (Moderate)",
            Scenario::Ssp370 => "SSP370 (Medium-High)",
            Scenario::Ssp585 => "SSP585 (High Emissions)",
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ssp245" => Ok(Scenario::Ssp245),
            "ssp370" => Ok(Scenario::Ssp370),
            "ssp585" => Ok(Scenario::Ssp585),
            _ => Err(StoreError::UnknownScenario(s.to_string())),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CMIP6 climate model driving the hurricane simulations, plus the
/// precomputed multi-model-mean entry the archive may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateModel {
    Cesm2,
    CnrmCm61,
    EcEarth3,
    IpslCm6aLr,
    Miroc6,
    Ukesm10Ll,
    /// Average across the six models, computed upstream at archive
    /// build time; never derived here.
    MultiModelMean,
}

impl ClimateModel {
    pub const ALL: [ClimateModel; 7] = [
        ClimateModel::Cesm2,
        ClimateModel::CnrmCm61,
        ClimateModel::EcEarth3,
        ClimateModel::IpslCm6aLr,
        ClimateModel::Miroc6,
        ClimateModel::Ukesm10Ll,
        ClimateModel::MultiModelMean,
    ];

    /// Archive key form, e.g. `CNRM-CM6-1`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateModel::Cesm2 => "CESM2",
            ClimateModel::CnrmCm61 => "CNRM-CM6-1",
            ClimateModel::EcEarth3 => "EC-Earth3",
            ClimateModel::IpslCm6aLr => "IPSL-CM6A-LR",
            ClimateModel::Miroc6 => "MIROC6",
            ClimateModel::Ukesm10Ll => "UKESM1-0-LL",
            ClimateModel::MultiModelMean => "MultiModelMean",
        }
    }
}

impl std::str::FromStr for ClimateModel {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CESM2" => Ok(ClimateModel::Cesm2),
            "CNRM-CM6-1" => Ok(ClimateModel::CnrmCm61),
            "EC-Earth3" => Ok(ClimateModel::EcEarth3),
            "IPSL-CM6A-LR" => Ok(ClimateModel::IpslCm6aLr),
            "MIROC6" => Ok(ClimateModel::Miroc6),
            "UKESM1-0-LL" => Ok(ClimateModel::Ukesm10Ll),
            "MultiModelMean" => Ok(ClimateModel::MultiModelMean),
            _ => Err(StoreError::UnknownModel(s.to_string())),
        }
    }
}

impl std::fmt::Display for ClimateModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forecast period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Historical baseline, 1995-2014.
    Base,
    /// Mid-century projection, 2041-2060.
    MidCentury,
    /// Late-century projection, 2081-2100.
    LateCentury,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Base, Period::MidCentury, Period::LateCentury];

    /// Archive key form: `base`, `fut1`, `fut2`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Base => "base",
            Period::MidCentury => "fut1",
            Period::LateCentury => "fut2",
        }
    }

    /// Human label for UI controls.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Base => "Historical (1995-2014)",
            Period::MidCentury => "Mid-Century (2041-2060)",
            Period::LateCentury => "Late-Century (2081-2100)",
        }
    }
}

impl std::str::FromStr for Period {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Period::Base),
            "fut1" => Ok(Period::MidCentury),
            "fut2" => Ok(Period::LateCentury),
            _ => Err(StoreError::UnknownPeriod(s.to_string())),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (scenario, model, period) triple identifying one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetKey {
    pub scenario: Scenario,
    pub model: ClimateModel,
    pub period: Period,
}

impl DatasetKey {
    pub fn new(scenario: Scenario, model: ClimateModel, period: Period) -> Self {
        Self {
            scenario,
            model,
            period,
        }
    }
}

impl std::fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.scenario, self.model, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_round_trip() {
        for scenario in Scenario::ALL {
            let parsed: Scenario = scenario.as_str().parse().unwrap();
            assert_eq!(parsed, scenario);
        }
        assert!("ssp126".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_model_round_trip() {
        for model in ClimateModel::ALL {
            let parsed: ClimateModel = model.as_str().parse().unwrap();
            assert_eq!(parsed, model);
        }
        assert!("GFDL-ESM4".parse::<ClimateModel>().is_err());
    }

    #[test]
    fn test_period_round_trip() {
        for period in Period::ALL {
            let parsed: Period = period.as_str().parse().unwrap();
            assert_eq!(parsed, period);
        }
        assert!("fut3".parse::<Period>().is_err());
    }

    #[test]
    fn test_dataset_key_display() {
        let key = DatasetKey::new(Scenario::Ssp585, ClimateModel::Cesm2, Period::Base);
        assert_eq!(key.to_string(), "ssp585/CESM2/base");
    }
}
