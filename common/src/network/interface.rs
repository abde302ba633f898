use std::fmt;

use pnet::util::MacAddr;

/// Link-layer address of an interface.
///
/// Usually six bytes, but the length is whatever the OS reported. Interfaces
/// without one (loopback, tunnels) carry an empty address.
#[derive(Debug, Default, PartialEq, Eq, Clone, Hash)]
pub struct HardwareAddr(Vec<u8>);

impl HardwareAddr {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<MacAddr> for HardwareAddr {
    fn from(mac: MacAddr) -> Self {
        Self(vec![mac.0, mac.1, mac.2, mac.3, mac.4, mac.5])
    }
}

impl From<[u8; 6]> for HardwareAddr {
    fn from(bytes: [u8; 6]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for HardwareAddr {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// One enumerated network interface.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InterfaceRecord {
    pub name: String,
    pub hardware_addr: HardwareAddr,
}

impl InterfaceRecord {
    pub fn new(name: impl Into<String>, hardware_addr: impl Into<HardwareAddr>) -> Self {
        Self {
            name: name.into(),
            hardware_addr: hardware_addr.into(),
        }
    }
}

/// Enumerates the network interfaces currently known to the OS.
pub trait InterfaceLister: Send + Sync {
    /// `Ok(None)` is a valid answer and means there are no interfaces.
    fn list(&self) -> anyhow::Result<Option<Vec<InterfaceRecord>>>;
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
