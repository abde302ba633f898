use pnet::datalink::{self, NetworkInterface};
use tally_common::network::interface::{HardwareAddr, InterfaceLister, InterfaceRecord};
use tracing::debug;

#[cfg(target_os = "linux")]
use linux_impl::is_wireless;
#[cfg(target_os = "macos")]
use macos_impl::is_wireless;

/// Lists interfaces with `pnet::datalink::interfaces`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PnetInterfaceLister {
    wireless_only: bool,
}

impl PnetInterfaceLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only interfaces the OS reports as wireless.
    pub fn wireless_only(mut self, wireless_only: bool) -> Self {
        self.wireless_only = wireless_only;
        self
    }

    fn select(
        &self,
        interfaces: Vec<NetworkInterface>,
        is_wireless: impl Fn(&NetworkInterface) -> bool,
    ) -> Vec<InterfaceRecord> {
        interfaces
            .into_iter()
            .filter(|interface| !self.wireless_only || is_wireless(interface))
            .map(to_record)
            .collect()
    }
}

impl InterfaceLister for PnetInterfaceLister {
    fn list(&self) -> anyhow::Result<Option<Vec<InterfaceRecord>>> {
        let interfaces: Vec<NetworkInterface> = datalink::interfaces();
        debug!(
            found = interfaces.len(),
            wireless_only = self.wireless_only,
            "enumerated network interfaces"
        );
        Ok(Some(self.select(interfaces, is_wireless)))
    }
}

fn to_record(interface: NetworkInterface) -> InterfaceRecord {
    let hardware_addr: HardwareAddr = interface.mac.map(HardwareAddr::from).unwrap_or_default();
    InterfaceRecord {
        name: interface.name,
        hardware_addr,
    }
}

#[cfg(target_os = "linux")]
mod linux_impl {
    use super::*;
    use std::path::Path;

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/wireless", interface.name)).exists()
    }
}

#[cfg(target_os = "macos")]
mod macos_impl {
    use super::*;
    use std::collections::HashSet;
    use std::process::Command;
    use std::sync::OnceLock;

    /// Wireless device names, resolved once per process.
    fn wireless_devices() -> &'static HashSet<String> {
        static WIRELESS: OnceLock<HashSet<String>> = OnceLock::new();

        WIRELESS.get_or_init(|| {
            let mut wireless = HashSet::new();

            let Ok(output) = Command::new("networksetup").arg("-listallhardwareports").output() else {
                return wireless;
            };
            let stdout = String::from_utf8_lossy(&output.stdout);
            for device in stdout.lines().filter_map(|line| line.strip_prefix("Device: ")) {
                let device = device.trim();
                let is_wifi = Command::new("networksetup")
                    .arg("-getairportnetwork")
                    .arg(device)
                    .output()
                    .map(|out| out.status.success())
                    .unwrap_or(false);

                if is_wifi {
                    wireless.insert(device.to_string());
                }
            }
            wireless
        })
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        wireless_devices().contains(&interface.name)
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn is_wireless(_interface: &NetworkInterface) -> bool {
    false
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
