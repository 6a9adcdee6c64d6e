// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `eboard config` - Emit the default board configuration

use anyhow::Result;
use clap::Args;
use eb_bus::BusConfig;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn config(args: ConfigArgs) -> Result<()> {
    let config = BusConfig::default();

    match args.output {
        Some(path) => {
            config.save(&path)?;
            println!("Wrote config to {}", path.display());
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}
