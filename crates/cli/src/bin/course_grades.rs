use anyhow::{Context, Result};
use clap::Parser;
use domain::AverageKind;
use strategy_cli::{report, run_course_demo, CommonArgs};

/// Average a course's scores with each strategy, swapping it at runtime
#[derive(Parser, Debug)]
#[command(name = "course-grades", version)]
struct Cli {
    /// Course name (default "Design Patterns")
    #[arg(long)]
    name: Option<String>,

    /// The two scores (default 10 and 5)
    #[arg(
        long,
        num_args = 2,
        value_names = ["SCORE1", "SCORE2"],
        allow_negative_numbers = true
    )]
    scores: Option<Vec<f64>>,

    /// Strategy to run, in order; repeat for several (default: both)
    #[arg(long = "strategy", value_name = "KIND")]
    strategies: Vec<AverageKind>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.common.init_logging()?;

    let mut config = cli.common.load_config()?.course;
    if let Some(name) = cli.name {
        config.name = name;
    }
    if let Some(scores) = cli.scores {
        config.scores = [scores[0], scores[1]];
    }
    if !cli.strategies.is_empty() {
        config.strategies = cli.strategies;
    }

    let (course, scenarios) = run_course_demo(&config).context("course demo failed")?;

    if cli.common.json {
        report::write_json_lines(std::io::stdout().lock(), &scenarios)?;
    } else {
        print!("{}", report::render_course_report(&course, &scenarios));
    }
    Ok(())
}
