#![cfg(feature = "usb")]

#[path = "common.rs"]
mod common;

use rfidrw::Result;
use serial_test::serial;

// These tests require a real reader connected. They are marked `#[ignore]`
// so CI does not attempt to run them. Run manually with:
//
// cargo test -p rfidrw --test hardware --features usb -- --ignored

#[test]
#[ignore]
#[serial]
fn open_and_initialize_reader() -> Result<()> {
    let _ = common::open_and_initialize_device()?;
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn buzz_then_read_tag() -> Result<()> {
    if let Some(mut dev) = common::open_and_initialize_device()? {
        dev.beep()?;
        let read = dev.read_tag()?;
        println!("{}", read);
        dev.finish();
    }
    Ok(())
}
