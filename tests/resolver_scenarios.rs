mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use common::MockClient;
use opcua_address_space::{
    AttributeId, BaseAttributes, CacheOptions, DataValue, ExpandedNodeId, LocalizedText, NodeBase,
    NodeClass, NodeId, NodeResolver, QualifiedName, ReferenceDescription, StatusCode, UaNode,
    VariableNode, Variant,
};

// Stands in for a subtype-specific constructor a real registry would register — the kind a
// caller building a `Sensor` node type on top of `BaseDataVariableType` would supply.
fn make_sensor_variable(
    base: BaseAttributes,
    value: DataValue,
    data_type: NodeId,
    value_rank: i32,
    array_dimensions: Option<Vec<u32>>,
    access_level: u8,
    user_access_level: u8,
    minimum_sampling_interval: Option<f64>,
    historizing: bool,
) -> VariableNode {
    VariableNode::new(
        base,
        value,
        data_type,
        value_rank,
        array_dimensions,
        access_level,
        user_access_level,
        minimum_sampling_interval,
        historizing,
    )
}

fn program_object(client: &mut MockClient, id: NodeId, browse_name: &str, event_notifier: u8) {
    client.set_attribute(
        id.clone(),
        AttributeId::NodeClass,
        DataValue::good(Variant::Int32(NodeClass::Object.bit() as i32)),
    );
    client.set_attribute(
        id.clone(),
        AttributeId::BrowseName,
        DataValue::good(QualifiedName::new(0, browse_name).into()),
    );
    client.set_attribute(
        id.clone(),
        AttributeId::DisplayName,
        DataValue::good(LocalizedText::from(browse_name).into()),
    );
    client.set_attribute(
        id,
        AttributeId::EventNotifier,
        DataValue::good(Variant::Byte(event_notifier)),
    );
}

fn has_type_definition() -> NodeId {
    NodeId::new(0, 40u32)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn cold_resolve_of_a_folder_object() {
    init_logging();
    let mut mock = MockClient::new();
    let objects = NodeId::new(0, 85u32);
    program_object(&mut mock, objects.clone(), "Objects", 0);
    mock.set_browse(
        objects.clone(),
        has_type_definition(),
        vec![ReferenceDescription {
            reference_type_id: has_type_definition(),
            is_forward: true,
            node_id: ExpandedNodeId::local(NodeId::new(0, 61u32)),
            browse_name: QualifiedName::new(0, "FolderType"),
            display_name: LocalizedText::from("FolderType"),
            node_class: NodeClass::ObjectType,
            type_definition: ExpandedNodeId::local(NodeId::null()),
        }],
    );

    let mock = Arc::new(mock);
    let resolver = NodeResolver::new(mock.clone());
    let node = resolver.get(&objects).await.expect("resolve succeeds");
    let UaNode::Object(object) = node.as_ref() else {
        panic!("expected Object variant");
    };
    assert_eq!(object.browse_name().name, "Objects");
    assert_eq!(object.event_notifier, 0);

    let before = mock.read_calls.load(Ordering::SeqCst);
    resolver.get(&objects).await.unwrap();
    assert_eq!(mock.read_calls.load(Ordering::SeqCst), before);
}

#[tokio::test]
async fn type_definition_mismatch_falls_through_to_default() {
    init_logging();
    let mut mock = MockClient::new();
    let objects = NodeId::new(0, 85u32);
    program_object(&mut mock, objects.clone(), "Objects", 0);
    mock.set_browse_error(objects.clone(), has_type_definition(), StatusCode::BadServiceUnsupported);

    let resolver = NodeResolver::new(Arc::new(mock));
    let node = resolver.get(&objects).await.expect("degrades, does not fail");
    assert!(matches!(node.as_ref(), UaNode::Object(_)));
}

#[tokio::test]
async fn variable_with_subtype_specialized_constructor() {
    init_logging();
    let mut mock = MockClient::new();
    let temp = NodeId::new(1, "Temp");
    let base_variable_type = NodeId::new(0, 63u32);

    mock.set_attribute(
        temp.clone(),
        AttributeId::NodeClass,
        DataValue::good(Variant::Int32(NodeClass::Variable.bit() as i32)),
    );
    mock.set_attribute(
        temp.clone(),
        AttributeId::BrowseName,
        DataValue::good(QualifiedName::new(1, "Temp").into()),
    );
    mock.set_attribute(
        temp.clone(),
        AttributeId::DisplayName,
        DataValue::good(LocalizedText::from("Temp").into()),
    );
    mock.set_attribute(
        temp.clone(),
        AttributeId::DataType,
        DataValue::good(NodeId::new(0, 11u32).into()),
    );
    mock.set_attribute(temp.clone(), AttributeId::ValueRank, DataValue::good(Variant::Int32(-1)));
    mock.set_attribute(temp.clone(), AttributeId::AccessLevel, DataValue::good(Variant::Byte(3)));
    mock.set_browse(
        temp.clone(),
        has_type_definition(),
        vec![ReferenceDescription {
            reference_type_id: has_type_definition(),
            is_forward: true,
            node_id: ExpandedNodeId::local(base_variable_type.clone()),
            browse_name: QualifiedName::new(0, "BaseDataVariableType"),
            display_name: LocalizedText::from("BaseDataVariableType"),
            node_class: NodeClass::VariableType,
            type_definition: ExpandedNodeId::local(NodeId::null()),
        }],
    );

    mock.variable_type_manager_mut()
        .register(base_variable_type, Arc::new(make_sensor_variable));

    let resolver = NodeResolver::new(Arc::new(mock));
    let node = resolver.get_variable(&temp).await.expect("resolves");
    let UaNode::Variable(variable) = node.as_ref() else {
        panic!("expected Variable variant");
    };
    assert_eq!(variable.access_level, 3);
    assert_eq!(variable.value_rank, -1);
}

#[tokio::test]
async fn localize_triggers_namespace_refresh() {
    init_logging();
    let mut mock = MockClient::new();
    mock.set_attribute(
        NodeId::new(0, 2255u32),
        AttributeId::Value,
        DataValue::good(Variant::StringArray(vec![
            Some("http://opcfoundation.org/UA/".to_owned()),
            Some("urn:x".to_owned()),
        ])),
    );

    let mock = Arc::new(mock);
    let resolver = NodeResolver::new(mock.clone());
    let expanded = ExpandedNodeId::with_uri(1u32.into(), "urn:x");
    let local = resolver.localize(&expanded).await.expect("localizes");
    assert_eq!(local, NodeId::new(1, 1u32));

    // a namespace-0 id never needs a refresh, so a second localize must not re-read the array
    let calls_before = mock.read_calls.load(Ordering::SeqCst);
    let local_again = resolver
        .localize(&ExpandedNodeId::local(NodeId::new(0, 85u32)))
        .await
        .unwrap();
    assert_eq!(local_again, NodeId::new(0, 85u32));
    assert_eq!(mock.read_calls.load(Ordering::SeqCst), calls_before);
}

#[tokio::test]
async fn browse_fan_out_preserves_order() {
    init_logging();
    let mut mock = MockClient::new();
    let server = NodeId::new(0, 85u32);
    let a = NodeId::new(0, 100u32);
    let b = NodeId::new(0, 101u32);
    let c = NodeId::new(0, 102u32);

    program_object(&mut mock, server.clone(), "Server", 0);
    program_object(&mut mock, a.clone(), "A", 0);
    mock.set_attribute(
        b.clone(),
        AttributeId::NodeClass,
        DataValue::good(Variant::Int32(NodeClass::Method.bit() as i32)),
    );
    mock.set_attribute(
        b.clone(),
        AttributeId::BrowseName,
        DataValue::good(QualifiedName::new(0, "B").into()),
    );
    mock.set_attribute(
        b.clone(),
        AttributeId::DisplayName,
        DataValue::good(LocalizedText::from("B").into()),
    );
    mock.set_attribute(
        c.clone(),
        AttributeId::NodeClass,
        DataValue::good(Variant::Int32(NodeClass::Variable.bit() as i32)),
    );
    mock.set_attribute(
        c.clone(),
        AttributeId::BrowseName,
        DataValue::good(QualifiedName::new(0, "C").into()),
    );
    mock.set_attribute(
        c.clone(),
        AttributeId::DisplayName,
        DataValue::good(LocalizedText::from("C").into()),
    );
    mock.set_attribute(
        c.clone(),
        AttributeId::DataType,
        DataValue::good(NodeId::new(0, 11u32).into()),
    );

    let hierarchical = NodeId::new(0, 33u32);
    mock.set_browse(
        server.clone(),
        hierarchical,
        vec![
            ReferenceDescription {
                reference_type_id: NodeId::new(0, 47u32),
                is_forward: true,
                node_id: ExpandedNodeId::local(a.clone()),
                browse_name: QualifiedName::new(0, "A"),
                display_name: LocalizedText::from("A"),
                node_class: NodeClass::Object,
                type_definition: ExpandedNodeId::local(NodeId::null()),
            },
            ReferenceDescription {
                reference_type_id: NodeId::new(0, 47u32),
                is_forward: true,
                node_id: ExpandedNodeId::local(b.clone()),
                browse_name: QualifiedName::new(0, "B"),
                display_name: LocalizedText::from("B"),
                node_class: NodeClass::Method,
                type_definition: ExpandedNodeId::local(NodeId::null()),
            },
            ReferenceDescription {
                reference_type_id: NodeId::new(0, 47u32),
                is_forward: true,
                node_id: ExpandedNodeId::local(c.clone()),
                browse_name: QualifiedName::new(0, "C"),
                display_name: LocalizedText::from("C"),
                node_class: NodeClass::Variable,
                type_definition: ExpandedNodeId::local(NodeId::null()),
            },
        ],
    );

    let resolver = NodeResolver::new(Arc::new(mock));
    let results = resolver.browse(&server).await.expect("browse succeeds");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].node_id(), &a);
    assert_eq!(results[1].node_id(), &b);
    assert_eq!(results[2].node_id(), &c);
}

#[tokio::test]
async fn cache_eviction_by_time() {
    init_logging();
    let mut mock = MockClient::new();
    let objects = NodeId::new(0, 85u32);
    program_object(&mut mock, objects.clone(), "Objects", 0);

    let mock = Arc::new(mock);
    let resolver = NodeResolver::with_cache_options(
        mock.clone(),
        CacheOptions {
            time_to_live: Duration::from_millis(100),
            maximum_size: 1024,
        },
    );
    resolver.get(&objects).await.unwrap();
    let before = mock.read_calls.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(250)).await;
    resolver.get(&objects).await.unwrap();
    assert!(mock.read_calls.load(Ordering::SeqCst) > before);
}
