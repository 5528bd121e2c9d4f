//! CLI entry point for esuguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `esuguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use esuguard_app::{
    format_explanation, format_not_found, parse_report_json, run_evaluation, run_explain,
    serialize_report, status_exit_code, to_renderable, EvaluateRequest, ExplainOutput,
};
use esuguard_render::{render_console_lines, render_markdown};
use esuguard_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "esuguard",
    version,
    about = "Safety evaluation for electrosurgical unit operating parameters"
)]
struct Cli {
    /// Path to a TOML case file describing the evaluation inputs.
    #[arg(long)]
    case: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the case and print the alert panel.
    Check {
        /// Patient age, years.
        #[arg(long)]
        age: Option<u32>,

        /// Patient weight, kilograms.
        #[arg(long)]
        weight: Option<f64>,

        /// Energy mode (cut|coag).
        #[arg(long)]
        mode: Option<String>,

        /// Output power, watts.
        #[arg(long)]
        power: Option<f64>,

        /// Continuous activation time, seconds.
        #[arg(long)]
        activation: Option<f64>,

        /// Electrode circuit impedance, ohms.
        #[arg(long)]
        impedance: Option<f64>,

        /// Return pad contact quality (good|marginal|poor).
        #[arg(long)]
        pad_contact: Option<String>,

        /// Return electrode monitoring active (true|false).
        #[arg(long)]
        rem: Option<bool>,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Write a Markdown report alongside the console output.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/esuguard/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/esuguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "generator.power") or code (e.g., "rem_poor_contact") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            age,
            weight,
            ref mode,
            power,
            activation,
            impedance,
            ref pad_contact,
            rem,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => {
            let overrides = Overrides {
                age_years: age,
                weight_kg: weight,
                mode: mode.clone(),
                power_watts: power,
                activation_secs: activation,
                impedance_ohms: impedance,
                pad_contact: pad_contact.clone(),
                rem_enabled: rem,
            };
            cmd_check(
                &cli,
                overrides,
                report_out.clone(),
                write_markdown,
                markdown_out.clone(),
            )
        }
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_check(
    cli: &Cli,
    overrides: Overrides,
    report_out: Option<Utf8PathBuf>,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let case_text = match &cli.case {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read case file: {}", path))?
        }
        None => String::new(),
    };

    let outcome = match run_evaluation(EvaluateRequest {
        case_text: &case_text,
        overrides,
    }) {
        Ok(outcome) => outcome,
        Err(err) => {
            // Distinct invalid-input state; never reported as a safety verdict.
            eprintln!("esuguard: invalid input: {err}");
            std::process::exit(1);
        }
    };

    let renderable = to_renderable(&outcome.report);
    for line in render_console_lines(&renderable) {
        println!("{line}");
    }

    if let Some(path) = report_out {
        let json = serialize_report(&outcome.report)?;
        write_text_file(&path, &json).context("write report json")?;
    }

    if write_markdown {
        let md = render_markdown(&renderable);
        write_text_file(&markdown_out, &md).context("write markdown")?;
    }

    let code = status_exit_code(outcome.report.status);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let md = render_markdown(&renderable);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
