//! Interactive prompts for parameters missing from the command line.
//!
//! Reader and writer are passed in so tests can drive the prompts with
//! in-memory buffers. The binary wires these to stdin and stderr.

use crate::models::parse_address;
use std::error::Error;
use std::io::{BufRead, Write};
use std::net::Ipv4Addr;

/// Prompt for and parse the IPv4 address to split.
pub fn read_address(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Ipv4Addr, Box<dyn Error>> {
    let line = read_trimmed_line(input, output, "Enter IP address (e.g. 216.21.5.0): ")?;
    Ok(parse_address(&line)?)
}

/// Prompt for and parse the required hosts per subnet.
pub fn read_hosts(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<u32, Box<dyn Error>> {
    let line = read_trimmed_line(input, output, "Enter hosts per subnet (e.g. 30): ")?;
    match line.parse::<u32>() {
        Ok(hosts) => Ok(hosts),
        Err(_) => Err(format!("hosts per subnet must be a whole number, got {line:?}").into()),
    }
}

fn read_trimmed_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<String, Box<dyn Error>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("no input given".into());
    }
    Ok(line.trim().to_string())
}
