//! Command-line entry point: builds every slider curve of a beatmap and prints them as JSON.

use serde::Serialize;
use slider_curve::chart::load_sliders;
use slider_curve::{CurveResult, CurveSettings, build_all};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_SETTINGS_PATH: &str = "curve.toml";

#[derive(Serialize)]
struct SliderReport<'a> {
    object_index: usize,
    start_time: f64,
    repeat_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    curve: Option<&'a CurveResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("MAIN: Booting slider-curve...");

    let mut args = std::env::args().skip(1);
    let Some(map_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: slider-curve <beatmap.osu> [settings.toml]");
        return ExitCode::from(2);
    };
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

    let settings = match CurveSettings::load(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("MAIN: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let sliders = match load_sliders(&map_path) {
        Ok(sliders) => sliders,
        Err(e) => {
            log::error!("MAIN: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let specs: Vec<_> = sliders.iter().map(|slider| slider.spec.clone()).collect();
    let results = build_all(&specs, &settings);

    let reports: Vec<SliderReport> = sliders
        .iter()
        .zip(&results)
        .map(|(slider, result)| SliderReport {
            object_index: slider.object_index,
            start_time: slider.start_time,
            repeat_count: slider.spec.repeat_count,
            curve: result.as_ref().ok(),
            error: result.as_ref().err().map(|e| e.to_string()),
        })
        .collect();

    match serde_json::to_string_pretty(&reports) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("MAIN: failed to serialize curves: {}", e);
            ExitCode::FAILURE
        }
    }
}
