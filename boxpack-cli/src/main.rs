use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use boxpack::algorithms::AlgorithmRegistry;
use boxpack::io::{export, import};
use boxpack::service;
use boxpack::util::PackingConfig;
use boxpack_cli::demo::{DEMO_STEM, demo_request};
use boxpack_cli::io;
use boxpack_cli::io::cli::Cli;
use boxpack_cli::io::output::PackingOutput;
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PackingConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed PackingConfig: {config:?}");

    let (ext_request, input_stem) = match &args.input_file {
        None => {
            warn!("[MAIN] No input file provided, packing the demonstration catalogue");
            (demo_request(), DEMO_STEM.to_string())
        }
        Some(input_file) => {
            let stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .with_context(|| format!("invalid input file name: {}", input_file.display()))?;
            (io::read_request(input_file)?, stem.to_string())
        }
    };

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let (containers, items, algorithm_ids) = import::import(&ext_request)?;
    let registry = AlgorithmRegistry::new(config);
    let results = service::pack_with(&registry, &containers, &items, &algorithm_ids)?;

    io::log_results(&containers, &results);

    let output = PackingOutput {
        request: ext_request,
        results: export::export(&results),
        config,
    };
    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
