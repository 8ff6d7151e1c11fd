use std::process::ExitCode;

use cstates::{ProbeConfig, ProbeError, probe};
use cstates_core::CommonStates;
use cstates_gpu::GpuContext;

/// Probe entry point: creates every preset on the default adapter.
fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match ProbeConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => ProbeConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    match run(&config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            log::warn!("{} preset(s) were rejected by the device", failures);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the probe and print the report. Returns the number of failed presets.
fn run(config: &ProbeConfig) -> Result<usize, ProbeError> {
    let ctx = pollster::block_on(GpuContext::with_config(config.gpu_config()))?;
    let state_device = ctx.state_device_with_config(config.state_config());

    let report = probe::run(&CommonStates::new(&state_device))
        .with_adapter(ctx.adapter.get_info().name);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(report.failure_count())
}
