use tally_common::config::Config;
use tally_common::network::interface::HardwareAddr;
use tally_common::network::mac;
use tally_core::interfaces::InterfaceQueryService;
use tally_core::network::PnetInterfaceLister;

use crate::terminal::print;

pub fn interfaces(cfg: &Config, addresses: bool, vendor: bool) -> anyhow::Result<()> {
    let lister = PnetInterfaceLister::new().wireless_only(cfg.wireless_only);
    let service = InterfaceQueryService::new(&lister);

    if addresses {
        let addrs: Vec<HardwareAddr> = service.get_addresses()?;
        print::header("hardware addresses");
        if addrs.is_empty() {
            print::print_status("No interfaces found");
        }
        for (idx, addr) in addrs.iter().enumerate() {
            print_address(idx, addr, vendor);
        }
    } else {
        let names: Vec<String> = service.get_names()?;
        print::header("interfaces");
        if names.is_empty() {
            print::print_status("No interfaces found");
        }
        for (idx, name) in names.iter().enumerate() {
            print::entry(idx, name, None);
        }
    }

    print::end_of_program();
    Ok(())
}

fn print_address(idx: usize, addr: &HardwareAddr, vendor: bool) {
    if addr.is_empty() {
        print::entry(idx, "(none)", None);
        return;
    }
    let vendor_name: Option<String> = if vendor { mac::vendor_of(addr) } else { None };
    print::entry(idx, &addr.to_string(), vendor_name.as_deref());
}
