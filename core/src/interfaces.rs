//! # Interface Query Service
//!
//! Projects names or hardware addresses out of whatever the [`InterfaceLister`] returns.
//! No filtering, sorting or deduplication happens here.

use tally_common::error::{Operation, ServiceError};
use tally_common::network::interface::{HardwareAddr, InterfaceLister, InterfaceRecord};
use tracing::debug;

pub struct InterfaceQueryService<'a> {
    lister: &'a dyn InterfaceLister,
}

impl<'a> InterfaceQueryService<'a> {
    pub fn new(lister: &'a dyn InterfaceLister) -> Self {
        Self { lister }
    }

    pub fn get_names(&self) -> Result<Vec<String>, ServiceError> {
        self.project(Operation::GetInterfaceNames, |record| record.name)
    }

    /// Hardware addresses in listing order. Empty addresses are passed through.
    pub fn get_addresses(&self) -> Result<Vec<HardwareAddr>, ServiceError> {
        self.project(Operation::GetHardwareAddresses, |record| record.hardware_addr)
    }

    fn project<T>(
        &self,
        operation: Operation,
        field: impl Fn(InterfaceRecord) -> T,
    ) -> Result<Vec<T>, ServiceError> {
        let records: Vec<InterfaceRecord> = self
            .lister
            .list()
            .map_err(|e| ServiceError::list(operation, e))?
            .unwrap_or_default();

        debug!(%operation, interfaces = records.len(), "listed interfaces");
        Ok(records.into_iter().map(field).collect())
    }
}
