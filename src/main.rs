use clap::Parser;
use log::LevelFilter;

use crc16_modbus::{appended, checksum_traced, to_hex, verify_traced, LogTrace, Trace, Width};

/// Compute the CRC-16/MODBUS checksum of a payload and frame it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Payload bytes in hex, e.g. `ff fe`
    #[arg(value_parser = parse_byte, default_values = ["ff", "fe"])]
    payload: Vec<u8>,

    /// Always append two checksum bytes
    #[arg(long)]
    fixed: bool,

    /// Log every computation step
    #[arg(short, long)]
    verbose: bool,
}

fn parse_byte(s: &str) -> Result<u8, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u8::from_str_radix(digits, 16).map_err(|e| format!("{s:?} is not a hex byte: {e}"))
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let width = if args.fixed { Width::Fixed } else { Width::Compact };
    let mut tracer = LogTrace;
    let crc = checksum_traced(&args.payload, &mut tracer);
    let trailer = appended(crc, width);
    tracer.framed(&trailer);
    let mut packet = args.payload.clone();
    packet.extend_from_slice(&trailer);

    println!("crc:     {} ({})", crc, to_hex(crc));
    println!("trailer: {:02x?}", trailer.as_slice());
    println!("packet:  {:02x?}", packet);
    println!("valid:   {}", verify_traced(&packet, &mut tracer));
}
