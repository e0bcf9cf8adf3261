//! The ten Key Point sentence templates.
//!
//! Each `generate_sentence_*` function is pure: the same inputs always yield byte-identical
//! text. Interpolated values are wrapped in the Markdown strong marker (`**value**`) because
//! downstream renderers rely on it. Inputs are accepted verbatim; a field only counts as
//! provided when [`present`] says so.

use serde::{Deserialize, Serialize};

/// Policy applied when a point's required input is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// No text at all; used when the output feeds automated storage.
    #[default]
    Strict,
    /// An italic prompt naming the missing field; used for live previews.
    Interactive,
}

impl GenerationMode {
    fn missing(self, prompt: &str) -> Option<String> {
        match self {
            Self::Strict => None,
            Self::Interactive => Some(prompt.to_string()),
        }
    }
}

pub const NO_ADVERSE_HISTORY_NOT_REGULATED: &str =
    "The firm and its key individuals have no adverse regulatory history and are not currently regulated.";
pub const NO_DISCLOSURES: &str = "No other material matters or disclosures were noted.";

/// A value is provided when it is non-null and non-blank. The returned slice is untrimmed.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn strong(value: &str) -> String {
    format!("**{value}**")
}

pub fn generate_sentence_1(
    mode: GenerationMode,
    service_type: Option<&str>,
    prudential_cat: Option<&str>,
    legal_status: Option<&str>,
    clients: Option<&str>,
) -> Option<String> {
    let service_type = present(service_type);
    let prudential_cat = present(prudential_cat);
    let legal_status = present(legal_status);
    let clients = present(clients);

    if service_type.is_none()
        && prudential_cat.is_none()
        && legal_status.is_none()
        && clients.is_none()
    {
        return mode.missing("_Please provide input for at least one field._");
    }

    let mut parts = vec![match service_type {
        Some(service) => format!("provide {} services", strong(service)),
        None => "provide financial services".to_string(),
    }];
    if let Some(category) = prudential_cat {
        parts.push(format!("under a {} Prudential classification", strong(category)));
    }
    if let Some(status) = legal_status {
        parts.push(format!("as a {}", strong(status)));
    }
    if let Some(clients) = clients {
        parts.push(format!("targeting {} clients", strong(clients)));
    }

    Some(format!(
        "The firm is seeking authorization to {}.",
        parts.join(", ")
    ))
}

pub fn generate_sentence_2(
    mode: GenerationMode,
    model_desc: Option<&str>,
    markets: Option<&str>,
    geo_scope: Option<&str>,
    channels: Option<&str>,
) -> Option<String> {
    let Some(model_desc) = present(model_desc) else {
        return mode.missing("_The 'Business Model Description' is required._");
    };

    let mut parts = vec![format!("a {}", strong(model_desc))];
    if let Some(markets) = present(markets) {
        parts.push(format!("focused on {}", strong(markets)));
    }
    if let Some(scope) = present(geo_scope) {
        parts.push(format!("across {}", strong(scope)));
    }
    if let Some(channels) = present(channels) {
        parts.push(format!("delivered via {}", strong(channels)));
    }

    Some(format!(
        "The applicant describes its business model as {}.",
        parts.join(", ")
    ))
}

pub fn generate_sentence_3(
    mode: GenerationMode,
    structure: Option<&str>,
    parent_name: Option<&str>,
    parent_jurisdiction: Option<&str>,
    controller_name: Option<&str>,
    controller_perc: Option<&str>,
) -> Option<String> {
    let Some(structure) = present(structure) else {
        return mode.missing("_The 'Ownership Structure' is required._");
    };

    let mut parts = vec![format!("The firm is {}", strong(structure))];
    match (present(parent_name), present(parent_jurisdiction)) {
        (Some(parent), Some(jurisdiction)) => parts.push(format!(
            ", {}, incorporated in {}",
            strong(parent),
            strong(jurisdiction)
        )),
        (Some(parent), None) => parts.push(format!(", {}", strong(parent))),
        (None, _) => {}
    }
    match (present(controller_name), present(controller_perc)) {
        (Some(controller), Some(percentage)) => parts.push(format!(
            "with ultimate control resting with {} holding {} equity",
            strong(controller),
            strong(percentage)
        )),
        (Some(controller), None) => parts.push(format!(
            "with ultimate control resting with {}",
            strong(controller)
        )),
        (None, _) => {}
    }

    Some(format!("{}.", parts.join(" ")))
}

pub fn generate_sentence_4(
    mode: GenerationMode,
    key_individuals: Option<&str>,
    experience_summary: Option<&str>,
) -> Option<String> {
    let Some(individuals) = present(key_individuals) else {
        return mode.missing("_'Key Individuals' field is required._");
    };

    let mut sentence = format!("The business will be run by {}", strong(individuals));
    match present(experience_summary) {
        Some(experience) => sentence.push_str(&format!(", who has {}.", strong(experience))),
        None => sentence.push('.'),
    }
    Some(sentence)
}

/// Nothing is required here, so both modes return the same text.
pub fn generate_sentence_5(
    _mode: GenerationMode,
    adverse_history: Option<&str>,
    previous_regulators: Option<&str>,
) -> Option<String> {
    let adverse_history = present(adverse_history);
    let previous_regulators = present(previous_regulators);

    if adverse_history.is_none() && previous_regulators.is_none() {
        return Some(NO_ADVERSE_HISTORY_NOT_REGULATED.to_string());
    }

    let mut parts = vec![match adverse_history {
        Some(history) => format!("The firm has an adverse history involving: {}.", strong(history)),
        None => format!(
            "The firm and its key individuals have {}.",
            strong("no adverse regulatory history")
        ),
    }];
    if let Some(regulators) = previous_regulators {
        parts.push(format!(
            "Key personnel are known to other regulators, including the {}.",
            strong(regulators)
        ));
    }

    Some(parts.join(" "))
}

pub fn generate_sentence_6(
    mode: GenerationMode,
    systems_overview: Option<&str>,
    outsourcing_arrangements: Option<&str>,
) -> Option<String> {
    let Some(systems) = present(systems_overview) else {
        return mode.missing("_'Systems Overview' field is required._");
    };

    let mut sentence = format!("The applicant has documented systems for {}", strong(systems));
    match present(outsourcing_arrangements) {
        Some(outsourcing) => sentence.push_str(&format!(
            ", with key outsourced support from {}.",
            strong(outsourcing)
        )),
        None => sentence.push('.'),
    }
    Some(sentence)
}

pub fn generate_sentence_7(
    mode: GenerationMode,
    compliance_officer: Option<&str>,
    mlro: Option<&str>,
    screening_tools: Option<&str>,
) -> Option<String> {
    let compliance_officer = present(compliance_officer);
    let mlro = present(mlro);

    let mut parts = Vec::with_capacity(2);
    match (compliance_officer, mlro) {
        (None, None) => return mode.missing("_At least a CO or MLRO must be specified._"),
        (Some(officer), Some(reporter)) if officer == reporter => parts.push(format!(
            "has appointed {} as the combined Compliance Officer and MLRO",
            strong(officer)
        )),
        (officer, reporter) => {
            if let Some(officer) = officer {
                parts.push(format!(
                    "has appointed {} as the Compliance Officer",
                    strong(officer)
                ));
            }
            if let Some(reporter) = reporter {
                parts.push(format!("and {} as the MLRO", strong(reporter)));
            }
        }
    }

    let mut sentence = format!("The firm {}", parts.join(" "));
    match present(screening_tools) {
        Some(tools) => sentence.push_str(&format!(
            ", and will use {} for screening purposes.",
            strong(tools)
        )),
        None => sentence.push('.'),
    }
    Some(sentence)
}

pub fn generate_sentence_8(
    mode: GenerationMode,
    capital_requirement: Option<&str>,
    source_of_funds: Option<&str>,
) -> Option<String> {
    match (present(capital_requirement), present(source_of_funds)) {
        (Some(capital), Some(funds)) => Some(format!(
            "The firm will meet the {} capital requirement through {}.",
            strong(capital),
            strong(funds)
        )),
        _ => mode.missing("_Capital Requirement and Source of Funds are required._"),
    }
}

/// Nothing is required here, so both modes return the same text.
pub fn generate_sentence_9(_mode: GenerationMode, disclosures: Option<&str>) -> Option<String> {
    match present(disclosures) {
        Some(disclosures) => Some(format!(
            "The firm disclosed the following: {}.",
            strong(disclosures)
        )),
        None => Some(NO_DISCLOSURES.to_string()),
    }
}

pub fn generate_sentence_10(
    mode: GenerationMode,
    recommendation: Option<&str>,
    conditions: Option<&str>,
) -> Option<String> {
    let Some(recommendation) = present(recommendation) else {
        return mode.missing("_A 'Recommendation' is required._");
    };

    let mut sentence = format!("Recommendation: {}.", strong(recommendation));
    if let Some(conditions) = present(conditions) {
        sentence.push_str(&format!(
            " This is subject to the following conditions: {}.",
            strong(conditions)
        ));
    }
    Some(sentence)
}
