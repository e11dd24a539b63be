#![cfg(feature = "usb")]

//! Command-line tool for the 125 kHz reader.
//!
//! Usage:
//!   cargo run -p rfidrw --example rfid_tool --features usb -- [-v] [-r] [-b]
//!
//! `-r` reads the EM4100 tag in the field and prints its id, or `NOTAG`.
//! `-b` sounds the buzzer. With neither flag the tool reads.

use anyhow::Context;
use clap::Parser;
use rfidrw::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "rfid_tool", about = "Read EM4100 tags and drive the buzzer")]
struct Args {
    /// Log frames and transaction steps
    #[arg(short, long)]
    verbose: bool,

    /// Read the EM4100 tag id
    #[arg(short, long)]
    read: bool,

    /// Sound the buzzer
    #[arg(short, long)]
    buzzer: bool,
}

fn main() -> anyhow::Result<()> {
    let mut args = Args::parse();
    if !args.read && !args.buzzer {
        args.read = true;
    }

    let level = if args.verbose { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut device = DeviceBuilder::new()
        .open_usb()
        .context("opening reader")?
        .build()
        .context("initializing reader")?;

    if args.read {
        let read = device.read_tag().context("reading tag")?;
        println!("{}", read);
    }

    if args.buzzer {
        device.beep().context("sounding buzzer")?;
    }

    let _transport = device.finish();
    Ok(())
}
