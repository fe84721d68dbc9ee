use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use boxpack::entities::{Bin, ContainerPackingResult};
use boxpack::io::ext_repr::ExtPackingRequest;
use log::{LevelFilter, info, warn};
use serde::Serialize;
use thousands::Separable;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_request(path: &Path) -> Result<ExtPackingRequest> {
    let file = File::open(path).with_context(|| format!("could not open request file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("could not parse request file: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or_default()
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<25}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}

/// Logs the fitted and unfitted items of every result, per container.
pub fn log_results(containers: &[Bin], results: &[ContainerPackingResult]) {
    for container_result in results {
        match containers.iter().find(|c| c.name == container_result.container_id()) {
            Some(container) => info!("[RESULT] container {container}"),
            None => warn!("[RESULT] unknown container {}", container_result.container_id()),
        }
        for result in container_result.algorithm_packing_results() {
            info!(
                "[RESULT] {}: {} fitted, {} unfitted, {}% of the container, {}% of the items in {}µs",
                result.algorithm(),
                result.packed_items().len(),
                result.unpacked_items().len(),
                result.percent_container_volume_packed(),
                result.percent_item_volume_packed(),
                result.pack_time().as_micros().separate_with_commas()
            );
            for item in result.packed_items() {
                info!("[RESULT]   fitted   {item}");
            }
            for item in result.unpacked_items() {
                info!("[RESULT]   unfitted {item}");
            }
        }
        if let Some(best) = container_result.best() {
            info!(
                "[RESULT] best for {}: {}",
                container_result.container_id(),
                best.algorithm()
            );
        }
    }
}
