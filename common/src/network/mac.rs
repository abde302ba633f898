use std::sync::OnceLock;

use mac_oui::Oui;
use tracing::warn;

use crate::network::interface::HardwareAddr;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Retrieves or initializes the **Organizationally unique identifier** database.
///
/// A database that fails to load is reported once and treated as empty.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB
        .get_or_init(|| match Oui::default() {
            Ok(db) => Some(db),
            Err(e) => {
                warn!("failed to load OUI database: {e:?}");
                None
            }
        })
        .as_ref()
}

/// Identify the vendor of a hardware address.
///
/// Only 6-byte (EUI-48) addresses are looked up.
pub fn vendor_of(addr: &HardwareAddr) -> Option<String> {
    if addr.len() != 6 {
        return None;
    }
    let db = get_oui_db()?;
    match db.lookup_by_mac(&addr.to_string()) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address_has_no_vendor() {
        assert_eq!(vendor_of(&HardwareAddr::default()), None);
    }

    #[test]
    fn non_eui48_address_has_no_vendor() {
        let addr = HardwareAddr::new(vec![0x00, 0x11, 0x22, 0x33]);
        assert_eq!(vendor_of(&addr), None);
    }
}
