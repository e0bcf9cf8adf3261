use serde::{Deserialize, Serialize};

use super::points::PointNumber;
use super::sentences::{
    generate_sentence_1, generate_sentence_10, generate_sentence_2, generate_sentence_3,
    generate_sentence_4, generate_sentence_5, generate_sentence_6, generate_sentence_7,
    generate_sentence_8, generate_sentence_9, GenerationMode,
};

/// Every field captured by the assessment form, one applicant name plus the point inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentRecord {
    pub applicant_name: Option<String>,
    pub p1_service_type: Option<String>,
    pub p1_prudential_cat: Option<String>,
    pub p1_legal_status: Option<String>,
    pub p1_clients: Option<String>,
    pub p2_model_desc: Option<String>,
    pub p2_markets: Option<String>,
    pub p2_geo_scope: Option<String>,
    pub p2_channels: Option<String>,
    pub p3_structure: Option<String>,
    pub p3_parent_name: Option<String>,
    pub p3_parent_jurisdiction: Option<String>,
    pub p3_controller_name: Option<String>,
    pub p3_controller_perc: Option<String>,
    pub p4_key_individuals: Option<String>,
    pub p4_experience: Option<String>,
    pub p5_adverse_history: Option<String>,
    pub p5_previous_reg: Option<String>,
    pub p6_systems: Option<String>,
    pub p6_outsourcing: Option<String>,
    pub p7_co: Option<String>,
    pub p7_mlro: Option<String>,
    pub p7_tools: Option<String>,
    pub p8_capital: Option<String>,
    pub p8_sof: Option<String>,
    pub p9_disclosures: Option<String>,
    pub p10_rec: Option<String>,
    pub p10_cond: Option<String>,
}

impl AssessmentRecord {
    /// Sentences for points 1 to 10, in order, under a single mode.
    pub fn generate(&self, mode: GenerationMode) -> [Option<String>; PointNumber::COUNT] {
        [
            generate_sentence_1(
                mode,
                self.p1_service_type.as_deref(),
                self.p1_prudential_cat.as_deref(),
                self.p1_legal_status.as_deref(),
                self.p1_clients.as_deref(),
            ),
            generate_sentence_2(
                mode,
                self.p2_model_desc.as_deref(),
                self.p2_markets.as_deref(),
                self.p2_geo_scope.as_deref(),
                self.p2_channels.as_deref(),
            ),
            generate_sentence_3(
                mode,
                self.p3_structure.as_deref(),
                self.p3_parent_name.as_deref(),
                self.p3_parent_jurisdiction.as_deref(),
                self.p3_controller_name.as_deref(),
                self.p3_controller_perc.as_deref(),
            ),
            generate_sentence_4(
                mode,
                self.p4_key_individuals.as_deref(),
                self.p4_experience.as_deref(),
            ),
            generate_sentence_5(
                mode,
                self.p5_adverse_history.as_deref(),
                self.p5_previous_reg.as_deref(),
            ),
            generate_sentence_6(
                mode,
                self.p6_systems.as_deref(),
                self.p6_outsourcing.as_deref(),
            ),
            generate_sentence_7(
                mode,
                self.p7_co.as_deref(),
                self.p7_mlro.as_deref(),
                self.p7_tools.as_deref(),
            ),
            generate_sentence_8(mode, self.p8_capital.as_deref(), self.p8_sof.as_deref()),
            generate_sentence_9(mode, self.p9_disclosures.as_deref()),
            generate_sentence_10(mode, self.p10_rec.as_deref(), self.p10_cond.as_deref()),
        ]
    }

    /// Attach strict-mode outputs; this is the shape handed to storage.
    pub fn enrich(self) -> AssessmentOutput {
        let [
            p1_output,
            p2_output,
            p3_output,
            p4_output,
            p5_output,
            p6_output,
            p7_output,
            p8_output,
            p9_output,
            p10_output,
        ] = self.generate(GenerationMode::Strict);

        AssessmentOutput {
            record: self,
            p1_output,
            p2_output,
            p3_output,
            p4_output,
            p5_output,
            p6_output,
            p7_output,
            p8_output,
            p9_output,
            p10_output,
        }
    }

    /// Live preview of every point, with prompts for missing required fields.
    pub fn preview(&self) -> Vec<PointPreview> {
        PointNumber::all()
            .zip(self.generate(GenerationMode::Interactive))
            .map(|(point, text)| PointPreview {
                point,
                title: point.title(),
                text,
            })
            .collect()
    }

    /// The example applicant the assessment form is prefilled with.
    pub fn sample() -> Self {
        let text = |value: &str| Some(value.to_string());
        Self {
            applicant_name: text("Example Capital Ltd."),
            p1_service_type: text("Advisory and Arranging"),
            p1_prudential_cat: text("Category 3C"),
            p1_legal_status: text("Private Company Limited by Shares"),
            p1_clients: text("Retail and Professional"),
            p2_model_desc: text("A regional wealth management firm"),
            p2_markets: text("HNW clients"),
            p2_geo_scope: text("the GCC"),
            p2_channels: text("face-to-face meetings"),
            p3_structure: text("wholly owned by a holding company"),
            p3_parent_name: text("XYZ Holdings Ltd."),
            p3_parent_jurisdiction: text("the Cayman Islands"),
            p3_controller_name: text("a single individual shareholder"),
            p3_controller_perc: text("100%"),
            p4_key_individuals: text("Mr. John Doe (CEO)"),
            p4_experience: text("20+ years of experience in regulated financial services"),
            p5_adverse_history: None,
            p5_previous_reg: text("FCA (UK)"),
            p6_systems: text("client onboarding, transaction monitoring, and internal audit"),
            p6_outsourcing: text("regulated vendor in the UAE"),
            p7_co: text("Mr. Smith"),
            p7_mlro: text("Mr. Smith"),
            p7_tools: text("WorldCheck"),
            p8_capital: text("$500,000"),
            p8_sof: text("shareholder injection backed by audited statements"),
            p9_disclosures: text("Ongoing civil litigation involving a minority shareholder."),
            p10_rec: text("Approval with standard conditions"),
            p10_cond: text("Satisfactory review of the IT infrastructure audit."),
        }
    }
}

/// A submitted record extended with the ten generated sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOutput {
    #[serde(flatten)]
    pub record: AssessmentRecord,
    pub p1_output: Option<String>,
    pub p2_output: Option<String>,
    pub p3_output: Option<String>,
    pub p4_output: Option<String>,
    pub p5_output: Option<String>,
    pub p6_output: Option<String>,
    pub p7_output: Option<String>,
    pub p8_output: Option<String>,
    pub p9_output: Option<String>,
    pub p10_output: Option<String>,
}

impl AssessmentOutput {
    pub fn outputs(&self) -> [Option<&str>; PointNumber::COUNT] {
        [
            self.p1_output.as_deref(),
            self.p2_output.as_deref(),
            self.p3_output.as_deref(),
            self.p4_output.as_deref(),
            self.p5_output.as_deref(),
            self.p6_output.as_deref(),
            self.p7_output.as_deref(),
            self.p8_output.as_deref(),
            self.p9_output.as_deref(),
            self.p10_output.as_deref(),
        ]
    }

    pub fn to_markdown(&self) -> String {
        let sections = PointNumber::all()
            .zip(self.outputs())
            .map(|(point, text)| PointPreview {
                point,
                title: point.title(),
                text: text.map(str::to_string),
            })
            .collect::<Vec<_>>();
        render_markdown(self.record.applicant_name.as_deref(), &sections)
    }
}

/// Rendered text for one point alongside its section heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointPreview {
    pub point: PointNumber,
    pub title: &'static str,
    pub text: Option<String>,
}

const UNNAMED_APPLICANT: &str = "Unnamed applicant";
const NOT_GENERATED: &str = "_Not generated._";

/// Markdown report with one quoted section per point.
pub fn render_markdown(applicant_name: Option<&str>, sections: &[PointPreview]) -> String {
    let applicant = applicant_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNNAMED_APPLICANT);

    let mut out = format!("# 10 Key Points Assessment: {applicant}\n");
    for section in sections {
        let text = section.text.as_deref().unwrap_or(NOT_GENERATED);
        out.push_str(&format!(
            "\n## {}. {}\n\n> {}\n",
            section.point, section.title, text
        ));
    }
    out
}
