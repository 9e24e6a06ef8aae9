mod logic;
mod util;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use logic::{
    LogicTester, ScenarioResult, generate_console_report, generate_json_report,
    generate_markdown_report, get_scenario, list_scenarios, scenario_keys,
};
use util::{parse_seeds, split_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "secret-notes-tester", version)]
#[command(about = "Scripted playthroughs of the Secret Notes game logic")]
struct Args {
    /// Scenarios to run (comma-separated, `all` for the whole catalog)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated, decimal or 0x hex)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = parse_seeds(&args.seeds)?;
    let results = run_logic_scenarios(&args, &scenarios, &seeds)?;

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "💌 Secret Notes Automated Tester".bright_magenta().bold());
    println!("{}", "================================".magenta());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s.eq_ignore_ascii_case("all")) {
        scenarios.retain(|s| !s.eq_ignore_ascii_case("all"));
        for key in scenario_keys() {
            if !scenarios.iter().any(|s| s.eq_ignore_ascii_case(key)) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
) -> Result<Vec<ScenarioResult>> {
    let unknown: Vec<&str> = scenarios
        .iter()
        .filter(|key| get_scenario(key).is_none())
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        bail!(
            "Unknown scenario(s): {}. Use --list-scenarios to see the catalog.",
            unknown.join(", ")
        );
    }

    let tester = LogicTester::new(args.verbose);
    let mut results = Vec::new();
    for key in scenarios {
        let Some(scenario) = get_scenario(key) else {
            continue;
        };
        log::info!(
            "running {} for {} seed(s) x {} iteration(s)",
            scenario.key,
            seeds.len(),
            args.iterations
        );
        results.extend(tester.run_scenario(&scenario, seeds, args.iterations));
    }
    Ok(results)
}

enum OutputTarget {
    Stdout(std::io::Stdout),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("creating report output at {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(stdout()))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(handle) => handle,
            Self::File(writer) => writer,
        }
    }

    fn flush_inner(&mut self) -> Result<()> {
        match self {
            Self::Stdout(handle) => handle.flush()?,
            Self::File(writer) => writer.flush()?,
        }
        Ok(())
    }
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    let writer = output_target.writer();
    match args.report {
        ReportFormat::Console => generate_console_report(writer, results, start_time.elapsed())?,
        ReportFormat::Json => generate_json_report(writer, results)?,
        ReportFormat::Markdown => generate_markdown_report(writer, results)?,
    }
    output_target.flush_inner()?;
    Ok(())
}
