use clap::{Args, ValueEnum};
use key_points::assessment::{read_records, render_markdown, AssessmentRecord, GenerationMode};
use key_points::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full Markdown report instead of the sectioned summary
    #[arg(long)]
    pub(crate) markdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// CSV (one assessment per row) or JSON (object or array) export
    pub(crate) path: PathBuf,
    /// How to handle points whose required fields are missing
    #[arg(long, value_enum, default_value_t = ModeArg::Strict)]
    pub(crate) mode: ModeArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    /// Leave the point out
    Strict,
    /// Show a prompt naming the missing field
    Interactive,
}

impl From<ModeArg> for GenerationMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Strict => GenerationMode::Strict,
            ModeArg::Interactive => GenerationMode::Interactive,
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let record = AssessmentRecord::sample();

    if args.markdown {
        print!("{}", render_record(&record, GenerationMode::Interactive));
        return Ok(());
    }

    println!("Automated 10 Key Points assessment demo");
    println!(
        "Applicant: {}",
        record.applicant_name.as_deref().unwrap_or("(unnamed)")
    );
    for section in record.preview() {
        println!("\n{}. {}", section.point, section.title);
        println!("> {}", section.text.as_deref().unwrap_or("-"));
    }

    Ok(())
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let RenderArgs { path, mode } = args;
    let records = read_records(&path)?;

    if records.is_empty() {
        println!("No assessments found in {}", path.display());
        return Ok(());
    }

    let reports: Vec<String> = records
        .iter()
        .map(|record| render_record(record, mode.into()))
        .collect();
    print!("{}", reports.join("\n---\n\n"));

    Ok(())
}

/// Strict rendering matches what gets stored; interactive adds prompts for missing fields.
pub(crate) fn render_record(record: &AssessmentRecord, mode: GenerationMode) -> String {
    match mode {
        GenerationMode::Strict => record.clone().enrich().to_markdown(),
        GenerationMode::Interactive => {
            render_markdown(record.applicant_name.as_deref(), &record.preview())
        }
    }
}
