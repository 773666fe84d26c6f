//! windpark entry point: load a park, apply market inputs, print the plan.

use anyhow::{Context, Result, bail};
use clap::Parser;

use windpark::cli::Cli;
use windpark::config::ParkConfig;
use windpark::io::export::export_csv;
use windpark::logging::init_tracing;
use windpark::park::Park;
use windpark::registry::TurbineRegistry;
use windpark::reporting::print_plan_report;

fn load_config(cli: &Cli) -> Result<ParkConfig> {
    // --config takes priority, then --preset, then the reference fleet
    let cfg = if let Some(path) = &cli.config {
        ParkConfig::from_toml_file(path)?
    } else if let Some(name) = &cli.preset {
        ParkConfig::from_preset(name)?
    } else {
        ParkConfig::reference()
    };

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            tracing::error!("{e}");
        }
        bail!("invalid configuration ({} errors)", errors.len());
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let cfg = load_config(&cli)?;
    let registry = cfg.build_registry()?;
    tracing::info!(
        turbines = registry.len(),
        max_capacity = registry.total_capacity(),
        "turbine registry loaded"
    );

    let mut park = Park::new(registry);
    park.set_market_price(cli.market_price.unwrap_or(cfg.market.market_price))?;
    park.set_production_target(cli.target.unwrap_or(cfg.market.production_target))?;

    let plan = park.compute_production_plan();
    print_plan_report(&plan, &park.summarize(&plan));

    if let Some(path) = &cli.plan_out {
        export_csv(&park.registry().list_all(), &plan, path)
            .with_context(|| format!("failed to write plan to {}", path.display()))?;
        tracing::info!(path = %path.display(), "plan written");
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;

        let port = cli.port.unwrap_or(cfg.server.port);
        let addr: SocketAddr = format!("{}:{port}", cfg.server.host)
            .parse()
            .with_context(|| format!("invalid listen address {}:{port}", cfg.server.host))?;
        let state = windpark::api::AppState::new(park);
        let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
        rt.block_on(windpark::api::serve(state, addr))?;
    }

    Ok(())
}
