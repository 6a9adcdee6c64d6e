// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `eboard run` - Run a board until a deadline or Ctrl-C

use crate::components::{ClockSender, Output, PrintListener};
use anyhow::Result;
use clap::Args;
use eb_bus::{BusConfig, EventBus};
use eb_core::{parse_span, StateFilter};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args)]
pub struct RunArgs {
    /// Board configuration file (TOML); created with defaults if missing
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop after this long (e.g. "2s"); runs until Ctrl-C otherwise
    #[arg(short, long, value_parser = humantime::parse_duration)]
    pub duration: Option<Duration>,

    /// Period of the clock sender
    #[arg(long, default_value = "100ms", value_parser = humantime::parse_duration)]
    pub tick: Duration,

    /// Address to listen on; repeat for several listeners
    #[arg(short, long = "listen", default_value = "*")]
    pub listen: Vec<String>,

    /// Only deliver events this recent ("1500" is milliseconds, "2s" also works)
    #[arg(long, default_value = "0", value_parser = parse_span)]
    pub span: u32,

    /// Event state filter: all, completed, continued, zerodur, nonzerodur
    #[arg(long, default_value = "all")]
    pub state: StateFilter,

    /// Print delivered events as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => BusConfig::load_or_init(path)?,
        None => BusConfig::default(),
    };
    let output = if args.json { Output::Json } else { Output::Text };

    let bus = EventBus::with_defaults(config);
    bus.register_sender(Box::new(ClockSender::new(
        bus.registry(),
        bus.clock().clone(),
        args.tick,
    )))?;
    for (i, address) in args.listen.iter().enumerate() {
        let listener = PrintListener::new(
            format!("print-{}", i),
            bus.registry().clone(),
            output,
            Box::new(std::io::stdout()),
        );
        bus.register_listener(
            Box::new(listener),
            Some(address.as_str()),
            args.span,
            args.state,
        )?;
    }

    bus.start()?;

    match args.duration {
        Some(duration) => tokio::select! {
            _ = tokio::time::sleep(duration) => {}
            result = tokio::signal::ctrl_c() => result?,
        },
        None => tokio::signal::ctrl_c().await?,
    }

    // Stopping empties the list, so show it first
    bus.tick();
    bus.print(&mut std::io::stdout().lock())?;
    bus.stop();
    Ok(())
}
