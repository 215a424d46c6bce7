use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rect_pack::io::ext_repr::ExtInstance;
use rp_cli::config::RPConfig;
use rp_cli::io;
use rp_cli::io::cli::{Cli, Mode};
use rp_cli::solve::{solve_direction, solve_pack};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: RPConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RPConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed RPConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let ext_instance: ExtInstance = io::read_json(&args.input_file)?;
    let json_path = args.output_folder.join(format!("sol_{input_stem}.json"));
    let svg_path = args.output_folder.join(format!("sol_{input_stem}.svg"));

    match args.mode {
        Mode::Pack => {
            let (output, svg) = solve_pack(&ext_instance, &config)?;
            io::write_json(&output, Path::new(&json_path))?;
            io::write_svg(&svg, Path::new(&svg_path))?;
        }
        Mode::Direction => {
            let (output, svg) = solve_direction(&ext_instance, &config)?;
            io::write_json(&output, Path::new(&json_path))?;
            io::write_svg(&svg, Path::new(&svg_path))?;
        }
    }

    Ok(())
}
