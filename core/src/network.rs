//! Production [`InterfaceLister`](tally_common::network::interface::InterfaceLister)
//! backed by `pnet::datalink`.

mod pnet_lister;

pub use pnet_lister::PnetInterfaceLister;
