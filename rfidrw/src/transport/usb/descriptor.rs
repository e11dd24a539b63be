// rfidrw-rs/rfidrw/src/transport/usb/descriptor.rs

use rusb::{Device, Direction, TransferType};

/// Inspect the active configuration and return the first interrupt IN and
/// OUT endpoint addresses found on the device (if any).
/// Returns (in_endpoint, out_endpoint, interface_number)
pub fn find_interrupt_endpoints<D: rusb::UsbContext>(
    device: &Device<D>,
) -> (Option<u8>, Option<u8>, Option<u8>) {
    let config = match device.config_descriptor(0) {
        Ok(config) => config,
        Err(e) => {
            log::debug!("no config descriptor, using default endpoints: {}", e);
            return (None, None, None);
        }
    };

    let mut in_ep = None;
    let mut out_ep = None;
    let mut iface = None;

    for interface in config.interfaces() {
        for interface_desc in interface.descriptors() {
            for endpoint_desc in interface_desc.endpoint_descriptors() {
                if endpoint_desc.transfer_type() != TransferType::Interrupt {
                    continue;
                }
                let addr = endpoint_desc.address();
                if endpoint_desc.direction() == Direction::In && in_ep.is_none() {
                    in_ep = Some(addr);
                    iface = Some(interface_desc.interface_number());
                } else if endpoint_desc.direction() == Direction::Out && out_ep.is_none() {
                    out_ep = Some(addr);
                    iface = Some(interface_desc.interface_number());
                }
            }
        }
    }

    (in_ep, out_ep, iface)
}
