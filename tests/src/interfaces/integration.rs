use tally_common::network::interface::InterfaceLister;
use tally_core::interfaces::InterfaceQueryService;
use tally_core::network::PnetInterfaceLister;

/// Names and addresses come from the same listing, so they line up one to one.
#[test]
fn names_and_addresses_have_the_same_length() {
    let lister = PnetInterfaceLister::new();
    let service = InterfaceQueryService::new(&lister);

    let names = service.get_names().unwrap();
    let addrs = service.get_addresses().unwrap();

    assert_eq!(names.len(), addrs.len());
}

#[test]
fn service_mirrors_lister_order() {
    let lister = PnetInterfaceLister::new();
    let service = InterfaceQueryService::new(&lister);

    let listed: Vec<String> = lister
        .list()
        .unwrap()
        .unwrap_or_default()
        .into_iter()
        .map(|record| record.name)
        .collect();

    assert_eq!(service.get_names().unwrap(), listed);
}

#[test]
fn wireless_only_is_a_subset() {
    let all = InterfaceQueryService::new(&PnetInterfaceLister::new()).get_names().unwrap();
    let wireless_lister = PnetInterfaceLister::new().wireless_only(true);
    let wireless = InterfaceQueryService::new(&wireless_lister).get_names().unwrap();

    assert!(wireless.len() <= all.len());
    assert!(wireless.iter().all(|name| all.contains(name)));
}
