use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::sentences::{
    generate_sentence_1, generate_sentence_10, generate_sentence_2, generate_sentence_3,
    generate_sentence_4, generate_sentence_5, generate_sentence_6, generate_sentence_7,
    generate_sentence_8, generate_sentence_9, GenerationMode,
};

/// One of the ten assessment points, always in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct PointNumber(u8);

impl PointNumber {
    pub const COUNT: usize = 10;

    pub fn new(number: u8) -> Result<Self, PointError> {
        if (1..=Self::COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(PointError::UnknownPoint(number.to_string()))
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::COUNT as u8).map(Self)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Section heading used by the assessment form and rendered reports.
    pub const fn title(self) -> &'static str {
        match self.0 {
            1 => "Financial Services, Legal Status, etc.",
            2 => "Business Overview",
            3 => "Who Controls",
            4 => "Who will run the business?",
            5 => "Background checks/other regulators",
            6 => "Systems and Controls",
            7 => "Compliance/Financial Crime Arrangements",
            8 => "Capital requirements and sources of wealth/funds",
            9 => "Any other disclosures/considerations",
            _ => "Recommendation/IP conditions",
        }
    }
}

impl From<PointNumber> for u8 {
    fn from(point: PointNumber) -> Self {
        point.0
    }
}

impl fmt::Display for PointNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PointNumber {
    type Err = PointError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u8>()
            .map_err(|_| PointError::UnknownPoint(raw.to_string()))
            .and_then(Self::new)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PointError {
    #[error("unknown assessment point '{0}', expected 1 to 10")]
    UnknownPoint(String),
    #[error("invalid payload for point {point}: {source}")]
    InvalidPayload {
        point: PointNumber,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point1Input {
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub prudential_cat: Option<String>,
    #[serde(default)]
    pub legal_status: Option<String>,
    #[serde(default)]
    pub clients: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point2Input {
    #[serde(default)]
    pub model_desc: Option<String>,
    #[serde(default)]
    pub markets: Option<String>,
    #[serde(default)]
    pub geo_scope: Option<String>,
    #[serde(default)]
    pub channels: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point3Input {
    #[serde(default)]
    pub structure: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_jurisdiction: Option<String>,
    #[serde(default)]
    pub controller_name: Option<String>,
    #[serde(default)]
    pub controller_perc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point4Input {
    #[serde(default)]
    pub key_individuals: Option<String>,
    #[serde(default)]
    pub experience_summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point5Input {
    #[serde(default)]
    pub adverse_history: Option<String>,
    #[serde(default)]
    pub previous_regulators: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point6Input {
    #[serde(default)]
    pub systems_overview: Option<String>,
    #[serde(default)]
    pub outsourcing_arrangements: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point7Input {
    #[serde(default)]
    pub compliance_officer: Option<String>,
    #[serde(default)]
    pub mlro: Option<String>,
    #[serde(default)]
    pub screening_tools: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point8Input {
    #[serde(default)]
    pub capital_requirement: Option<String>,
    #[serde(default)]
    pub source_of_funds: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point9Input {
    #[serde(default)]
    pub disclosures: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point10Input {
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub conditions: Option<String>,
}

/// The fields of a single point, as posted to the per-point endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointInput {
    One(Point1Input),
    Two(Point2Input),
    Three(Point3Input),
    Four(Point4Input),
    Five(Point5Input),
    Six(Point6Input),
    Seven(Point7Input),
    Eight(Point8Input),
    Nine(Point9Input),
    Ten(Point10Input),
}

impl PointInput {
    /// Decode a request body using the field names of the given point.
    pub fn from_json(point: PointNumber, payload: Value) -> Result<Self, PointError> {
        let invalid = |source| PointError::InvalidPayload { point, source };
        let input = match point.get() {
            1 => Self::One(serde_json::from_value(payload).map_err(invalid)?),
            2 => Self::Two(serde_json::from_value(payload).map_err(invalid)?),
            3 => Self::Three(serde_json::from_value(payload).map_err(invalid)?),
            4 => Self::Four(serde_json::from_value(payload).map_err(invalid)?),
            5 => Self::Five(serde_json::from_value(payload).map_err(invalid)?),
            6 => Self::Six(serde_json::from_value(payload).map_err(invalid)?),
            7 => Self::Seven(serde_json::from_value(payload).map_err(invalid)?),
            8 => Self::Eight(serde_json::from_value(payload).map_err(invalid)?),
            9 => Self::Nine(serde_json::from_value(payload).map_err(invalid)?),
            _ => Self::Ten(serde_json::from_value(payload).map_err(invalid)?),
        };
        Ok(input)
    }

    pub fn point(&self) -> PointNumber {
        let number = match self {
            Self::One(_) => 1,
            Self::Two(_) => 2,
            Self::Three(_) => 3,
            Self::Four(_) => 4,
            Self::Five(_) => 5,
            Self::Six(_) => 6,
            Self::Seven(_) => 7,
            Self::Eight(_) => 8,
            Self::Nine(_) => 9,
            Self::Ten(_) => 10,
        };
        PointNumber(number)
    }

    pub fn generate(&self, mode: GenerationMode) -> Option<String> {
        match self {
            Self::One(input) => generate_sentence_1(
                mode,
                input.service_type.as_deref(),
                input.prudential_cat.as_deref(),
                input.legal_status.as_deref(),
                input.clients.as_deref(),
            ),
            Self::Two(input) => generate_sentence_2(
                mode,
                input.model_desc.as_deref(),
                input.markets.as_deref(),
                input.geo_scope.as_deref(),
                input.channels.as_deref(),
            ),
            Self::Three(input) => generate_sentence_3(
                mode,
                input.structure.as_deref(),
                input.parent_name.as_deref(),
                input.parent_jurisdiction.as_deref(),
                input.controller_name.as_deref(),
                input.controller_perc.as_deref(),
            ),
            Self::Four(input) => generate_sentence_4(
                mode,
                input.key_individuals.as_deref(),
                input.experience_summary.as_deref(),
            ),
            Self::Five(input) => generate_sentence_5(
                mode,
                input.adverse_history.as_deref(),
                input.previous_regulators.as_deref(),
            ),
            Self::Six(input) => generate_sentence_6(
                mode,
                input.systems_overview.as_deref(),
                input.outsourcing_arrangements.as_deref(),
            ),
            Self::Seven(input) => generate_sentence_7(
                mode,
                input.compliance_officer.as_deref(),
                input.mlro.as_deref(),
                input.screening_tools.as_deref(),
            ),
            Self::Eight(input) => generate_sentence_8(
                mode,
                input.capital_requirement.as_deref(),
                input.source_of_funds.as_deref(),
            ),
            Self::Nine(input) => generate_sentence_9(mode, input.disclosures.as_deref()),
            Self::Ten(input) => generate_sentence_10(
                mode,
                input.recommendation.as_deref(),
                input.conditions.as_deref(),
            ),
        }
    }
}

/// Decode `payload` for `point` and render that point's sentence.
pub fn generate_point(
    point: PointNumber,
    payload: Value,
    mode: GenerationMode,
) -> Result<Option<String>, PointError> {
    Ok(PointInput::from_json(point, payload)?.generate(mode))
}
