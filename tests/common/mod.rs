//! A hand-written mock `Client`, standing in for a real OPC UA session in integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use parking_lot::RwLock;

use opcua_address_space::{
    AttributeId, BrowseDescription, Client, DataValue, InMemoryObjectTypeManager,
    InMemoryVariableTypeManager, NamespaceTable, ObjectTypeManager, ReadValueId,
    ReferenceDescription, ServiceError, StatusCode, TimestampsToReturn, VariableTypeManager,
};

#[derive(Default)]
pub struct MockClient {
    namespace_table: RwLock<NamespaceTable>,
    object_type_manager: InMemoryObjectTypeManager,
    variable_type_manager: InMemoryVariableTypeManager,
    reads: Mutex<HashMap<(opcua_address_space::NodeId, u32), DataValue>>,
    browses: Mutex<HashMap<(opcua_address_space::NodeId, opcua_address_space::NodeId), BrowseOutcome>>,
    pub read_calls: AtomicUsize,
    pub browse_calls: AtomicUsize,
}

enum BrowseOutcome {
    Good(Vec<ReferenceDescription>),
    Bad(StatusCode),
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program the response for reading `attribute` off `node`.
    pub fn set_attribute(
        &mut self,
        node: opcua_address_space::NodeId,
        attribute: AttributeId,
        value: DataValue,
    ) {
        self.reads.get_mut().unwrap().insert((node, attribute.into()), value);
    }

    /// Program a successful browse of `node` along `reference_type`.
    pub fn set_browse(
        &mut self,
        node: opcua_address_space::NodeId,
        reference_type: opcua_address_space::NodeId,
        refs: Vec<ReferenceDescription>,
    ) {
        self.browses
            .get_mut()
            .unwrap()
            .insert((node, reference_type), BrowseOutcome::Good(refs));
    }

    /// Program a failing browse of `node` along `reference_type`.
    pub fn set_browse_error(
        &mut self,
        node: opcua_address_space::NodeId,
        reference_type: opcua_address_space::NodeId,
        status: StatusCode,
    ) {
        self.browses
            .get_mut()
            .unwrap()
            .insert((node, reference_type), BrowseOutcome::Bad(status));
    }

    pub fn object_type_manager_mut(&mut self) -> &mut InMemoryObjectTypeManager {
        &mut self.object_type_manager
    }

    pub fn variable_type_manager_mut(&mut self) -> &mut InMemoryVariableTypeManager {
        &mut self.variable_type_manager
    }
}

#[async_trait]
impl Client for MockClient {
    async fn read(
        &self,
        _max_age: f64,
        _timestamps: TimestampsToReturn,
        ids: Vec<ReadValueId>,
    ) -> Result<Vec<DataValue>, ServiceError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        let reads = self.reads.lock().unwrap();
        Ok(ids
            .into_iter()
            .map(|id| {
                reads
                    .get(&(id.node_id.clone(), id.attribute_id))
                    .cloned()
                    .unwrap_or_else(|| DataValue::bad(StatusCode::BadAttributeIdInvalid))
            })
            .collect())
    }

    async fn browse(
        &self,
        description: BrowseDescription,
    ) -> Result<Vec<ReferenceDescription>, ServiceError> {
        self.browse_calls.fetch_add(1, Ordering::SeqCst);
        let browses = self.browses.lock().unwrap();
        match browses.get(&(description.node_id.clone(), description.reference_type_id.clone())) {
            Some(BrowseOutcome::Good(refs)) => Ok(refs.clone()),
            Some(BrowseOutcome::Bad(status)) => Err(ServiceError::new(*status)),
            None => Ok(Vec::new()),
        }
    }

    fn namespace_table(&self) -> &RwLock<NamespaceTable> {
        &self.namespace_table
    }

    fn object_type_manager(&self) -> &dyn ObjectTypeManager {
        &self.object_type_manager
    }

    fn variable_type_manager(&self) -> &dyn VariableTypeManager {
        &self.variable_type_manager
    }
}
