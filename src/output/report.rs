//! Plain-text solution report.

use crate::models::{Subnet, MAX_LENGTH};
use crate::output::terminal::column;
use crate::processing::SubnetPlan;
use colored::Colorize;

/// Width of the network and broadcast address columns.
const COLUMN_WIDTH: usize = 20;

fn summary_lines(plan: &SubnetPlan) -> Vec<String> {
    let network_bits = MAX_LENGTH - plan.class.default_prefix();
    vec![
        "Solution".to_string(),
        format!(
            "{:<17} = 2^{network_bits} = {}",
            "Host per network", plan.host_per_network
        ),
        format!(
            "{:<17} = 2^{} = {}",
            "Host per subnet", plan.host_bits, plan.host_per_subnet
        ),
        format!("{:<17} = {}", "Usable per subnet", plan.usable_per_subnet),
        String::new(),
        format!(
            "1. Class {} - Default Subnet Mask: {}",
            plan.class, plan.default_mask
        ),
        format!("2. {:<15}: {}", "Default Binary", plan.default_mask.to_binary()),
        format!(
            "3. {:<15}: {} ({:b}) -> needs {} host bits",
            "Required Hosts", plan.required_hosts, plan.required_hosts, plan.host_bits
        ),
        format!(
            "4. {:<15}: {} or /{}",
            "New Subnet Mask",
            plan.new_mask,
            plan.new_mask.prefix_len()
        ),
        format!("5. {:<15}: {}", "New Binary", plan.new_mask.to_binary()),
        format!(
            "6. Network Ranges ({} subnets of {} addresses)",
            plan.subnet_count, plan.host_per_subnet
        ),
    ]
}

fn table_header() -> String {
    format!(
        "{} {}",
        column("Network Address", COLUMN_WIDTH),
        "Broadcast Address"
    )
}

fn subnet_row(subnet: &Subnet) -> String {
    format!(
        "{} {}",
        column(subnet.network, COLUMN_WIDTH),
        subnet.broadcast
    )
}

fn omitted_note(omitted: u64, cap: usize) -> String {
    format!("{omitted} more subnets not shown (row cap {cap})")
}

/// Print the solution report to stdout.
///
/// Subnet rows stream straight from the walk, so a class A plan never
/// builds its whole table in memory. `max_rows` caps the printed rows
/// only; the plan itself always covers the full network.
pub fn print_report(plan: &SubnetPlan, max_rows: Option<usize>) {
    log::info!(
        "#Start print_report() subnet_count={} max_rows={max_rows:?}",
        plan.subnet_count
    );
    for line in summary_lines(plan) {
        println!("{line}");
    }
    println!("{}", table_header());
    let mut walk = plan.subnets();
    if let Some(cap) = max_rows {
        for subnet in walk.by_ref().take(cap) {
            println!("{}", subnet_row(&subnet));
        }
        let omitted = walk.remaining();
        if omitted > 0 {
            println!("#{}# {}", "NOTE".on_red(), omitted_note(omitted, cap));
        }
    } else {
        for subnet in walk {
            println!("{}", subnet_row(&subnet));
        }
    }
}

/// Render the solution report as one string, same layout as
/// [`print_report`] without the terminal coloring.
pub fn render_report(plan: &SubnetPlan, max_rows: Option<usize>) -> String {
    let mut out = String::new();
    for line in summary_lines(plan) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&table_header());
    out.push('\n');
    let mut walk = plan.subnets();
    if let Some(cap) = max_rows {
        for subnet in walk.by_ref().take(cap) {
            out.push_str(&subnet_row(&subnet));
            out.push('\n');
        }
        let omitted = walk.remaining();
        if omitted > 0 {
            out.push_str(&format!("#NOTE# {}\n", omitted_note(omitted, cap)));
        }
    } else {
        for subnet in walk {
            out.push_str(&subnet_row(&subnet));
            out.push('\n');
        }
    }
    out
}
