use serde::{Deserialize, Serialize};

/// Kind of deployment recorded for a sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleType {
    Sample,
    Blank,
}

impl SampleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleType::Sample => "Sample",
            SampleType::Blank => "Blank",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Sample" => Some(SampleType::Sample),
            "Blank" => Some(SampleType::Blank),
            _ => None,
        }
    }

    /// Lenient parse for grid input ("sample", " BLANK ", ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sample" => Some(SampleType::Sample),
            "blank" => Some(SampleType::Blank),
            _ => None,
        }
    }
}
