//! JSON rendering of a plan and its subnet table.

use crate::models::Subnet;
use crate::processing::SubnetPlan;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    plan: &'a SubnetPlan,
    subnets: Vec<Subnet>,
    /// Subnets beyond the row cap, left out of `subnets`.
    omitted: u64,
}

/// Render the plan as a pretty-printed JSON document.
///
/// `max_rows` caps the embedded subnet table the same way it caps the
/// text report; the `omitted` field says how many were left out.
pub fn render_json(plan: &SubnetPlan, max_rows: Option<usize>) -> Result<String, serde_json::Error> {
    let mut walk = plan.subnets();
    let subnets: Vec<Subnet> = match max_rows {
        Some(cap) => walk.by_ref().take(cap).collect(),
        None => walk.by_ref().collect(),
    };
    let omitted = walk.remaining();
    serde_json::to_string_pretty(&JsonReport {
        plan,
        subnets,
        omitted,
    })
}
