use anyhow::{Context, Result};
use clap::Parser;
use domain::DiscountKind;
use strategy_cli::{report, run_cart_demo, CommonArgs};

/// Price a cart under each discount policy, swapping the policy at runtime
#[derive(Parser, Debug)]
#[command(name = "cart-discounts", version)]
struct Cli {
    /// Original cart amount (default 1000.00)
    #[arg(long, allow_negative_numbers = true)]
    amount: Option<f64>,

    /// Policy to run, in order; repeat for several (default: all four)
    #[arg(long = "policy", value_name = "KIND")]
    policies: Vec<DiscountKind>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.common.init_logging()?;

    let mut config = cli.common.load_config()?.cart;
    if let Some(amount) = cli.amount {
        config.amount = amount;
    }
    if !cli.policies.is_empty() {
        config.policies = cli.policies;
    }

    let scenarios = run_cart_demo(&config).context("cart demo failed")?;

    if cli.common.json {
        report::write_json_lines(std::io::stdout().lock(), &scenarios)?;
    } else {
        print!("{}", report::render_cart_report(&scenarios));
    }
    Ok(())
}
