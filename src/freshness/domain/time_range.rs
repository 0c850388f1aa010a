use serde::{Deserialize, Serialize};

/// Time range accepted by the sales series endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Quarter,
        TimeRange::Year,
    ];

    /// Wire token used in the `range` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::Year => "1y",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::Year => 365,
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7d" => Ok(TimeRange::Week),
            "30d" => Ok(TimeRange::Month),
            "90d" => Ok(TimeRange::Quarter),
            "1y" => Ok(TimeRange::Year),
            _ => Err(format!(
                "Invalid time range: {}. Please specify one of 7d, 30d, 90d, 1y",
                s
            )),
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The time-range epoch a fetch cycle belongs to
///
/// Generation increases on every time-range change; results tagged with an
/// older generation are rejected by the snapshot store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FetchScope {
    pub generation: u64,
    pub range: TimeRange,
}

impl FetchScope {
    pub fn initial(range: TimeRange) -> Self {
        Self {
            generation: 0,
            range,
        }
    }

    pub fn next(&self, range: TimeRange) -> Self {
        Self {
            generation: self.generation + 1,
            range,
        }
    }
}
