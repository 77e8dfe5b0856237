use anyhow::Context;
use clap::Parser;
use quicksite::core::wizard::StepOutcome;
use quicksite::scenario::{self, Scenario};
use quicksite::utils::{logger, validation::Validate};
use quicksite::{CliConfig, PaymentOutcome, SiteConfig, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting quicksite scenario replay");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match &cli.config {
        Some(path) => SiteConfig::from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => SiteConfig::default(),
    };
    config.validate().context("invalid site configuration")?;
    config.warn_non_canonical();

    let scenario = Scenario::from_file(&cli.scenario)
        .with_context(|| format!("failed to load scenario '{}'", cli.scenario.display()))?;

    let report = scenario::run(&config, &scenario, SystemClock).await?;

    for (field, message) in &report.errors {
        println!("❌ {}: {}", field, message);
    }

    match &report.order {
        StepOutcome::Submitted(draft) => println!(
            "📝 Order saved: {} / {} / ${}.00",
            draft.business_name(),
            draft.plan(),
            draft.price()
        ),
        other => {
            println!("⛔ Order page stopped: {:?}", other);
            std::process::exit(2);
        }
    }

    match report.payment {
        Some(PaymentOutcome::Confirmed) => println!("✅ Payment confirmed, session cleared"),
        Some(PaymentOutcome::Rejected { .. }) => {
            println!("⛔ Payment rejected");
            std::process::exit(2);
        }
        Some(PaymentOutcome::Cancelled) => println!("⏹ Payment cancelled"),
        Some(PaymentOutcome::Unchanged) => println!("ℹ️ Checkout already handled"),
        None => println!("ℹ️ No payment in scenario; order left in session storage"),
    }

    Ok(())
}
