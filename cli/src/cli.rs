//! CLI argument parsing with clap derive

use clap::Parser;

/// Interactive lifecycle manager for cloud virtual desktops.
///
/// No flags, no subcommands: running `vdi` opens a single interactive
/// session. Configuration comes from `VDI_`-prefixed environment variables.
#[derive(Parser)]
#[command(name = "vdi", version)]
pub struct Cli {}
