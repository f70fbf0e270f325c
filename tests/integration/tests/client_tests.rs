//! Client integration tests
//!
//! Each test starts its own mock Absinthe server on a free port.
//!
//! Run with: cargo test -p integration-tests --test client_tests

use std::time::Duration;

use glimesh_client::{
    AuthInfo, ClientError, EventName, GlimeshConnection, Mutation, ParamName, ParamValue, Params,
    Query, SubscriptionKind,
};
use glimesh_core::ChatMessage;
use integration_tests::{
    connect_joined, test_auth, test_config, wait_for, MockGlimeshServer, TEST_JOIN_REF,
};
use serde_json::json;

async fn setup() -> (MockGlimeshServer, GlimeshConnection) {
    let server = MockGlimeshServer::start().await.expect("Failed to start mock server");
    let connection = GlimeshConnection::new(test_auth(), test_config(&server));
    (server, connection)
}

// ============================================================================
// Connection Tests
// ============================================================================

#[tokio::test]
async fn test_connect_joins_control_channel() {
    let (server, connection) = setup().await;
    let mut events = connection.events();

    connect_joined(&connection, false).await.unwrap();

    assert!(connection.is_connected());
    assert!(!connection.is_using_token());
    wait_for(&mut events, EventName::Connected).await.unwrap();

    let joins = server.received_with_ref("open_resp");
    assert_eq!(
        joins,
        vec![json!([TEST_JOIN_REF, "open_resp", "__absinthe__:control", "phx_join", {}])]
    );

    let params = &server.connections()[0];
    assert_eq!(params.get("vsn").map(String::as_str), Some("2.0.0"));
    assert_eq!(params.get("client_id").map(String::as_str), Some("test-client"));
    assert!(!params.contains_key("token"));
}

#[tokio::test]
async fn test_connect_with_token() {
    let (server, connection) = setup().await;

    connect_joined(&connection, true).await.unwrap();

    assert!(connection.is_using_token());
    let params = &server.connections()[0];
    assert_eq!(params.get("token").map(String::as_str), Some("test-token"));
    assert!(!params.contains_key("client_id"));
}

#[tokio::test]
async fn test_connect_twice_fails() {
    let (_server, connection) = setup().await;
    connect_joined(&connection, false).await.unwrap();

    let result = connection.connect(false).await;
    assert!(matches!(result, Err(ClientError::AlreadyConnected)));
    assert!(connection.is_connected());
}

#[tokio::test]
async fn test_connect_without_credentials() {
    let server = MockGlimeshServer::start().await.unwrap();
    let connection = GlimeshConnection::new(AuthInfo::default(), test_config(&server));

    let result = connection.connect(false).await;
    assert!(matches!(result, Err(ClientError::MissingCredentials(_))));
    assert!(server.connections().is_empty());
}

#[tokio::test]
async fn test_heartbeat_is_sent_and_acknowledged() {
    let server = MockGlimeshServer::start().await.unwrap();
    let config = test_config(&server).with_heartbeat_interval(Duration::from_millis(50));
    let connection = GlimeshConnection::new(test_auth(), config);
    let mut events = connection.events();

    connect_joined(&connection, false).await.unwrap();
    wait_for(&mut events, EventName::Heartbeat).await.unwrap();

    let heartbeat = &server.received_with_ref("heartbeat_resp")[0];
    assert_eq!(
        heartbeat,
        &json!([TEST_JOIN_REF, "heartbeat_resp", "phoenix", "heartbeat", {}])
    );
}

#[tokio::test]
async fn test_client_close() {
    let (_server, connection) = setup().await;
    let mut events = connection.events();
    connect_joined(&connection, false).await.unwrap();

    connection.close().await.unwrap();

    let close = wait_for(&mut events, EventName::Close).await.unwrap();
    assert!(close.data.get("wasClean").is_some());
    assert!(!connection.is_connected());
    assert!(matches!(connection.close().await, Err(ClientError::NotConnected)));
}

#[tokio::test]
async fn test_server_close_then_reconnect() {
    let (server, connection) = setup().await;
    let mut events = connection.events();
    connect_joined(&connection, false).await.unwrap();

    server.close_all(4000);

    let close = wait_for(&mut events, EventName::Close).await.unwrap();
    assert_eq!(close.data, json!({"wasClean": true, "code": 4000}));
    assert!(!connection.is_connected());

    connect_joined(&connection, false).await.unwrap();
    assert!(connection.is_connected());
    assert_eq!(server.connections().len(), 2);
}

// ============================================================================
// Subscription Tests
// ============================================================================

#[tokio::test]
async fn test_chat_subscription_ready_and_data() {
    let (server, connection) = setup().await;
    let mut events = connection.events();
    connect_joined(&connection, false).await.unwrap();

    let params = Params::new().with(ParamName::ChannelId, 10);
    connection
        .subscribe(SubscriptionKind::Chat, &params, None)
        .await
        .unwrap();

    let ready = wait_for(&mut events, EventName::ChatReady).await.unwrap();
    assert_eq!(ready.reference.as_deref(), Some("chat_resp"));

    let active = connection.active_subscriptions();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].kind, SubscriptionKind::Chat);
    assert_eq!(active[0].id, server.subscription_ids()[0]);

    let sent = &server.received_with_ref("chat_resp")[0];
    let query = sent[4]["query"].as_str().unwrap();
    assert!(query.starts_with("subscription {chatMessage(channelId: 10) {id, user"));

    server.push_subscription_data(
        &active[0].id,
        json!({"chatMessage": {"id": "77", "message": "hello world", "user": {"username": "streamer"}}}),
    );

    let data = wait_for(&mut events, EventName::ChatData).await.unwrap();
    let message: ChatMessage = data.field_as("chatMessage").unwrap();
    assert_eq!(message.message.as_deref(), Some("hello world"));
    assert_eq!(message.sender(), Some("streamer"));
}

#[tokio::test]
async fn test_data_routed_to_matching_subscription() {
    let (server, connection) = setup().await;
    let mut events = connection.events();
    connect_joined(&connection, false).await.unwrap();

    connection
        .subscribe(
            SubscriptionKind::Channel,
            &Params::new().with(ParamName::ChannelId, 1),
            None,
        )
        .await
        .unwrap();
    wait_for(&mut events, EventName::ChannelReady).await.unwrap();

    connection
        .subscribe(
            SubscriptionKind::Followers,
            &Params::new().with(ParamName::StreamerId, 2),
            None,
        )
        .await
        .unwrap();
    wait_for(&mut events, EventName::FollowReady).await.unwrap();

    let ids = server.subscription_ids();
    server.push_subscription_data(&ids[1], json!({"followers": {"user": {"username": "fan"}}}));

    let data = wait_for(&mut events, EventName::FollowData).await.unwrap();
    assert_eq!(data.data["followers"]["user"]["username"], "fan");
}

#[tokio::test]
async fn test_unmatched_push_is_unknown() {
    let (server, connection) = setup().await;
    let mut events = connection.events();
    connect_joined(&connection, false).await.unwrap();

    server.push_subscription_data("__absinthe__:doc:-999", json!({"x": 1}));

    let unknown = wait_for(&mut events, EventName::Unknown).await.unwrap();
    assert_eq!(unknown.data["subscriptionId"], "__absinthe__:doc:-999");
}

#[tokio::test]
async fn test_subscribe_missing_param() {
    let (server, connection) = setup().await;
    connect_joined(&connection, false).await.unwrap();

    let result = connection
        .subscribe(SubscriptionKind::Followers, &Params::new(), None)
        .await;

    assert!(matches!(result, Err(ClientError::MissingParam(_))));
    assert!(server.received_with_ref("follow_resp").is_empty());
}

// ============================================================================
// Query Tests
// ============================================================================

#[tokio::test]
async fn test_query_resolves_with_reply_data() {
    let (server, connection) = setup().await;
    let mut events = connection.events();
    connect_joined(&connection, false).await.unwrap();

    let params = Params::new().with(ParamName::Username, "bob");
    let data = connection
        .create_query(Query::User, &params, None)
        .await
        .unwrap();

    assert_eq!(data, json!({"query": "query {user(username: \"bob\") {id, username}}"}));
    assert_eq!(server.received_with_ref("user_resp").len(), 1);

    let event = wait_for(&mut events, EventName::QueryData).await.unwrap();
    assert_eq!(event.reference.as_deref(), Some("user_resp"));
}

#[tokio::test]
async fn test_query_with_canned_data() {
    let (server, connection) = setup().await;
    server.respond_with("channels_resp", json!({"channels": {"edges": []}}));
    connect_joined(&connection, false).await.unwrap();

    let params = Params::new().with(ParamName::Status, ParamValue::enum_value("LIVE"));
    let data = connection
        .create_query(Query::Channels, &params, Some("count"))
        .await
        .unwrap();

    assert_eq!(data, json!({"channels": {"edges": []}}));
    let sent = &server.received_with_ref("channels_resp")[0];
    assert_eq!(sent[4]["query"], "query {channels(status: LIVE) {count}}");
}

#[tokio::test]
async fn test_concurrent_queries_resolve_in_order() {
    let (_server, connection) = setup().await;
    connect_joined(&connection, false).await.unwrap();

    let first = Params::new().with(ParamName::Id, 1);
    let second = Params::new().with(ParamName::Id, 2);
    let (a, b) = tokio::join!(
        connection.create_query(Query::User, &first, None),
        connection.create_query(Query::User, &second, None),
    );

    let mut queries = vec![
        a.unwrap()["query"].as_str().unwrap().to_string(),
        b.unwrap()["query"].as_str().unwrap().to_string(),
    ];
    queries.sort();
    assert_eq!(
        queries,
        vec![
            "query {user(id: 1) {id, username}}".to_string(),
            "query {user(id: 2) {id, username}}".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_myself_requires_token() {
    let (server, connection) = setup().await;
    connect_joined(&connection, false).await.unwrap();

    let result = connection.create_query(Query::Myself, &Params::new(), None).await;

    assert!(matches!(result, Err(ClientError::TokenRequired("Myself"))));
    assert!(server.received_with_ref("myself_resp").is_empty());
}

#[tokio::test]
async fn test_query_timeout() {
    let server = MockGlimeshServer::start().await.unwrap();
    server.ignore_ref("categories_resp");
    let config = test_config(&server).with_request_timeout(Duration::from_millis(100));
    let connection = GlimeshConnection::new(test_auth(), config);
    connect_joined(&connection, false).await.unwrap();

    let result = connection
        .create_query(Query::Categories, &Params::new(), None)
        .await;

    assert!(matches!(result, Err(ClientError::Timeout(d)) if d == Duration::from_millis(100)));
    assert!(connection.is_connected());
}

// ============================================================================
// Mutation Tests
// ============================================================================

#[tokio::test]
async fn test_mutation_requires_token() {
    let (server, connection) = setup().await;
    connect_joined(&connection, false).await.unwrap();

    let params = Params::new()
        .with(ParamName::ChannelId, 1)
        .with(ParamName::UserId, 2);
    let result = connection.create_mutation(Mutation::BanUser, &params, None).await;

    assert!(matches!(result, Err(ClientError::TokenRequired("BanUser"))));
    assert!(server.received_with_ref("ban_resp").is_empty());
}

#[tokio::test]
async fn test_mutation_with_token() {
    let (server, connection) = setup().await;
    let mut events = connection.events();
    connect_joined(&connection, true).await.unwrap();

    let params = Params::new()
        .with(ParamName::ChannelId, 10)
        .with(ParamName::Message, "hi there");
    let data = connection
        .create_mutation(Mutation::CreateChatMessage, &params, None)
        .await
        .unwrap();

    assert_eq!(
        data["query"],
        "mutation {createChatMessage(channelId: 10, message: {message: \"hi there\"}) {message, id}}"
    );
    assert_eq!(server.received_with_ref("create_chat_resp").len(), 1);
    wait_for(&mut events, EventName::CreateChatData).await.unwrap();
}

#[tokio::test]
async fn test_mutation_error_reply() {
    let (server, connection) = setup().await;
    server.fail_ref("ban_resp", json!([{"message": "You do not have permission"}]));
    let mut events = connection.events();
    connect_joined(&connection, true).await.unwrap();

    let params = Params::new()
        .with(ParamName::ChannelId, 1)
        .with(ParamName::UserId, 2);
    let result = connection.create_mutation(Mutation::BanUser, &params, None).await;

    match result {
        Err(ClientError::Api(errors)) => {
            assert_eq!(errors, json!([{"message": "You do not have permission"}]));
        }
        other => panic!("Expected API error, got {other:?}"),
    }

    let error = wait_for(&mut events, EventName::Error).await.unwrap();
    assert_eq!(error.reference.as_deref(), Some("ban_resp"));
}

#[tokio::test]
async fn test_mutation_missing_param() {
    let (server, connection) = setup().await;
    connect_joined(&connection, true).await.unwrap();

    let params = Params::new().with(ParamName::ChannelId, 1);
    let result = connection
        .create_mutation(Mutation::UpdateStreamInfo, &params, None)
        .await;

    assert!(matches!(result, Err(ClientError::MissingParam(_))));
    assert!(server.received_with_ref("update_stream_info_resp").is_empty());
}

#[tokio::test]
async fn test_pending_request_fails_when_server_closes() {
    let (server, connection) = setup().await;
    server.ignore_ref("unfollow_resp");
    connect_joined(&connection, true).await.unwrap();

    let params = Params::new().with(ParamName::StreamerId, 4);
    let request = connection.create_mutation(Mutation::Unfollow, &params, None);
    let close = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        server.close_all(1000);
    };
    let (result, ()) = tokio::join!(request, close);

    assert!(matches!(result, Err(ClientError::ConnectionClosed)));
}
