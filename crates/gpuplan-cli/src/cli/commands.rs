use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use gpuplan_core::models::bundle::Bundle;
use gpuplan_core::models::plan::PlanRequest;
use gpuplan_core::pricing::Pricing;
use gpuplan_report::format::format_amount;
use gpuplan_report::summary::{render_assumptions, render_summary, render_sweep};
use gpuplan_solver::bundle::{optimal_bundle, parse_requirement};

fn default_pricing_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("gpuplan").join("pricing.json"))
}

/// Explicit path, else the user config file when present, else built-in.
pub fn load_pricing(explicit: Option<PathBuf>) -> Result<Pricing> {
    resolve_pricing(explicit, default_pricing_path())
}

/// Load from `explicit` if given; a missing explicit file is an error and
/// never falls through. Otherwise `fallback` is read only when it exists.
pub fn resolve_pricing(explicit: Option<PathBuf>, fallback: Option<PathBuf>) -> Result<Pricing> {
    if let Some(path) = explicit {
        return Ok(Pricing::load(&path)?);
    }
    if let Some(path) = fallback
        && path.exists()
    {
        return Ok(Pricing::load(&path)?);
    }
    tracing::debug!("no pricing file found, using built-in tables");
    Ok(Pricing::builtin())
}

pub fn models(pricing: &Pricing) -> Result<()> {
    for model in &pricing.models {
        let sizes: Vec<String> = model.servers.sizes().map(|s| s.to_string()).collect();
        println!(
            "{:<10} {:<16} {:<12} {:>8} tok/s  servers: {} GPUs",
            model.id,
            model.display_name,
            model.gpu_type,
            format_amount(model.output_tokens_per_second, 0),
            sizes.join("/"),
        );
    }
    Ok(())
}

pub fn plan(
    pricing: &Pricing,
    model_id: String,
    users: i64,
    json: bool,
    assumptions: bool,
) -> Result<()> {
    let request = PlanRequest {
        model_id,
        concurrent_users: users,
    };
    let plan = gpuplan_solver::plan::plan(pricing, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_summary(&plan)?);
    }

    if assumptions {
        let model = pricing.model(&plan.model_id)?;
        println!();
        print!("{}", render_assumptions(pricing, model)?);
    }
    Ok(())
}

pub fn bundle(pricing: &Pricing, model_id: &str, gpus: i64, json: bool) -> Result<()> {
    let required = parse_requirement(gpus)?;
    let model = pricing.model(model_id)?;
    let bundle = optimal_bundle(required, &model.servers);

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    } else if let Bundle::Feasible { cost, .. } = &bundle {
        println!("{required} GPUs: {}", bundle.describe());
        println!("Cost: {} {}/month", format_amount(*cost, 0), pricing.currency);
    }

    match bundle {
        Bundle::Feasible { .. } => Ok(()),
        Bundle::Infeasible { required_gpus } => Err(eyre!(
            "model '{model_id}': no server combination covers exactly {required_gpus} GPUs"
        )),
    }
}

pub fn sweep(
    pricing: &Pricing,
    model_id: &str,
    from: u64,
    to: u64,
    step: u64,
    json: bool,
) -> Result<()> {
    let plans = gpuplan_solver::plan::sweep(pricing, model_id, from, to, step)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
    } else {
        print!("{}", render_sweep(&plans)?);
    }
    Ok(())
}

pub fn export_pricing(pricing: &Pricing, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    pricing.save(output)?;
    println!("wrote pricing tables to {}", output.display());
    Ok(())
}
