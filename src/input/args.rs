//! Command line arguments.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "subnet-plan")]
#[command(version)]
#[command(about = "Split a classful IPv4 network into equal subnets for a host count.")]
pub struct CommandLine {
    /// IPv4 address anywhere in the network to split, e.g. 216.21.5.0.
    /// Prompted for when omitted.
    pub address: Option<String>,

    /// Hosts each subnet must hold, e.g. 30. Prompted for when omitted.
    pub hosts: Option<u32>,

    /// Emit the plan as a JSON document instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Print at most N subnet rows (0 = all); overrides SUBNET_PLAN_MAX_ROWS
    #[arg(long, value_name = "N")]
    pub max_rows: Option<usize>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
