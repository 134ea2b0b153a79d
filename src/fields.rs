use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};

/// Sentinel option shown for every categorical field; picking it means the
/// user never made a selection. It is mapped to `Choice::NotSelected` at the
/// deserialization boundary so the rest of the code never compares strings.
pub const NOT_SELECTED: &str = "Unknown";

/// A categorical form selection: either one of the field's real options or
/// the designated "not selected" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    NotSelected,
    Selected(T),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == NOT_SELECTED {
            return Ok(Choice::NotSelected);
        }
        serde_json::from_value(serde_json::Value::String(s))
            .map(Choice::Selected)
            .map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SoilType {
    Clay,
    Sandy,
    Silt,
    Loamy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Region {
    South,
    East,
    North,
    West,
    Central,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Season {
    Rabi,
    Kharif,
    Zaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CropType {
    Rice,
    Wheat,
    Potato,
    Cotton,
    Maize,
    Sugarcane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum IrrigationType {
    Drip,
    Canal,
    Rainfed,
    Sprinkler,
}

impl SoilType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clay => "Clay",
            Self::Sandy => "Sandy",
            Self::Silt => "Silt",
            Self::Loamy => "Loamy",
        }
    }
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::South => "South",
            Self::East => "East",
            Self::North => "North",
            Self::West => "West",
            Self::Central => "Central",
        }
    }
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rabi => "Rabi",
            Self::Kharif => "Kharif",
            Self::Zaid => "Zaid",
        }
    }
}

impl CropType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rice => "Rice",
            Self::Wheat => "Wheat",
            Self::Potato => "Potato",
            Self::Cotton => "Cotton",
            Self::Maize => "Maize",
            Self::Sugarcane => "Sugarcane",
        }
    }
}

impl IrrigationType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drip => "Drip",
            Self::Canal => "Canal",
            Self::Rainfed => "Rainfed",
            Self::Sprinkler => "Sprinkler",
        }
    }
}

/// Per-request bookkeeping of which fields failed validation and how.
///
/// Created empty for each request, filled by the parse calls below, read at
/// reporting/gating time, then dropped with the request. A field's display
/// name appears in at most one of the three sets: a field is missing,
/// invalid, or neither, never two at once.
#[derive(Debug, Default)]
pub struct ValidationLedger {
    pub invalid_numeric: Vec<&'static str>,
    pub missing_numeric: Vec<&'static str>,
    pub missing_categorical: Vec<&'static str>,
}

impl ValidationLedger {
    /// Any invalid numeric input blocks the predict action outright.
    pub fn blocks_prediction(&self) -> bool {
        !self.invalid_numeric.is_empty()
    }

    pub fn has_missing(&self) -> bool {
        !self.missing_numeric.is_empty() || !self.missing_categorical.is_empty()
    }

    /// Missing field names for reporting: numeric fields first, then
    /// categorical, each in the order they were parsed.
    pub fn missing_names(&self) -> Vec<&'static str> {
        let mut names = self.missing_numeric.clone();
        names.extend(&self.missing_categorical);
        names
    }
}

/// Parse one numeric field from its raw text box value.
///
/// Empty (after trimming) counts as missing, anything that does not read as
/// a float counts as invalid; both return `None` so absence stays
/// distinguishable from a real zero reading. No plausibility bounds are
/// applied: negative rainfall or humidity over 100 pass through as valid.
pub fn parse_numeric(raw: &str, field: &'static str, ledger: &mut ValidationLedger) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        ledger.missing_numeric.push(field);
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            ledger.invalid_numeric.push(field);
            None
        }
    }
}

/// Parse one categorical field from its dropdown selection.
///
/// The option set is closed, so there is no invalid outcome here: the
/// sentinel counts as missing and every other option is valid as-is.
pub fn parse_category<T>(
    choice: Choice<T>,
    field: &'static str,
    ledger: &mut ValidationLedger,
) -> Option<T> {
    match choice {
        Choice::NotSelected => {
            ledger.missing_categorical.push(field);
            None
        }
        Choice::Selected(v) => Some(v),
    }
}
