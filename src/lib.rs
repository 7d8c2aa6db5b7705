use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;

pub mod bank_account;
pub mod command;
pub mod error;
pub mod script;
pub mod serializable_form;

use script::ScriptStep;
use serializable_form::StepReport;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{}`", other)),
        }
    }
}

pub fn read_script_file(script_file: PathBuf) -> anyhow::Result<Vec<ScriptStep>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&script_file)
        .with_context(|| format!("failed to open script {}", script_file.display()))?;

    let mut steps = Vec::new();
    for step in reader.deserialize::<ScriptStep>() {
        steps.push(step.with_context(|| format!("malformed script {}", script_file.display()))?);
    }

    Ok(steps)
}

fn write_text(reports: &[StepReport], writer: &mut dyn Write) -> anyhow::Result<()> {
    for report in reports {
        writeln!(
            writer,
            "#{} {} {}: succeeded={}",
            report.step, report.operation, report.command, report.succeeded
        )?;
        for balance in &report.balances {
            writeln!(writer, "    {}: {}", balance.account, balance.balance)?;
        }
    }

    Ok(())
}

fn write_csv(reports: &[StepReport], writer: &mut dyn Write) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for report in reports {
        for record in report.csv_records() {
            csv_writer.serialize(record)?;
        }
    }
    csv_writer.flush()?;

    Ok(())
}

fn write_json(reports: &[StepReport], writer: &mut dyn Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, reports)?;
    writeln!(writer)?;

    Ok(())
}

pub fn write_output(
    reports: &[StepReport],
    format: OutputFormat,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_text(reports, writer),
        OutputFormat::Csv => write_csv(reports, writer),
        OutputFormat::Json => write_json(reports, writer),
    }
}

/// Runs the script at `script_file`, or the built-in demo when there is none, and writes the
/// step reports to `output`.
pub fn cli(
    script_file: Option<PathBuf>,
    overdraft_limit: f64,
    format: OutputFormat,
    output: &mut dyn Write,
    debug_logger: &mut dyn Write,
) -> anyhow::Result<()> {
    let steps = match script_file {
        Some(script_file) => read_script_file(script_file)?,
        None => script::demo_script(),
    };

    let reports = script::run_script(&steps, overdraft_limit, debug_logger)?;
    write_output(&reports, format, output)?;

    Ok(())
}
