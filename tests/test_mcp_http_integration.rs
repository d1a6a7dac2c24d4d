use std::sync::Arc;

use axum::{routing::any_service, Router};
use http_body_util::BodyExt; // for .collect
use hyper::{header, Request, StatusCode};
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};
use tower::ServiceExt; // for .oneshot

use sncf_mcp_gateway::clients::sncf::SncfClient;
use sncf_mcp_gateway::infra::runtime::mcp_transport;
use sncf_mcp_gateway::tools::build_registry;
use sncf_mcp_gateway::tools::mcp_router::SncfSvc;

static MCP_PROTOCOL_VERSION: &str = "0.5";

fn sse_result(body: &str) -> Value {
    body.lines()
        .find_map(|line| line.strip_prefix("data: ").map(|d| d.to_string()))
        .and_then(|d| serde_json::from_str::<Value>(&d).ok())
        .expect("did not find an rpc response frame")
}

#[tokio::test]
async fn initialize_list_and_call_over_streamable_http() {
    // Mock the SNCF provider: two resolvable places and two journeys.
    let server = httpmock::MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/places")
            .query_param("q", "Paris");
        then.status(200)
            .json_body(json!({"places": [{"stop_area": {"id": "stop_area:P"}}]}));
    });
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/places")
            .query_param("q", "Lyon");
        then.status(200)
            .json_body(json!({"places": [{"stop_area": {"id": "stop_area:L"}}]}));
    });
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/journeys")
            .query_param("from", "stop_area:P")
            .query_param("to", "stop_area:L")
            .query_param("count", "10");
        then.status(200).json_body(json!({"journeys": [
            {"departure_date_time": "20250520T080000", "arrival_date_time": "20250520T100000",
             "duration": 7200, "nb_transfers": 0,
             "sections": [{"from": {"name": "Paris Gare de Lyon"}, "to": {"name": "Lyon Part-Dieu"},
                           "mode": "rail", "type": "public_transport", "duration": 7200}]},
            {"departure_date_time": "20250520T090000", "arrival_date_time": "20250520T113000",
             "duration": 9000, "nb_transfers": 1,
             "sections": [{"type": "public_transport", "duration": 4000},
                          {"type": "transfer", "duration": 5000}]}
        ]}));
    });

    let factory = {
        let base = server.base_url();
        move || {
            let registry = build_registry(SncfClient::with_base(base.clone(), "test-key"));
            (SncfSvc::new(registry), SncfSvc::router())
        }
    };

    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let app = mcp_transport::make_streamable_http_service(factory, session_mgr);
    let app = Router::new().route_service("/mcp", any_service(app));

    // Initialize
    let init = json!({
        "jsonrpc":"2.0","id":1,"method":"initialize",
        "params":{ "protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test","version":"0.1"} }
    });
    let init_req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Protocol-Version", MCP_PROTOCOL_VERSION)
        .body(axum::body::Body::from(init.to_string()))
        .unwrap();
    let init_res = app.clone().oneshot(init_req).await.unwrap();
    assert!(init_res.status().is_success());
    let session_id = init_res
        .headers()
        .get("MCP-Session-Id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    // notifications/initialized
    let initialized_notif =
        json!({"jsonrpc":"2.0","method":"notifications/initialized","params":{}});
    let initialized_req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Session-Id", session_id.clone())
        .body(axum::body::Body::from(initialized_notif.to_string()))
        .unwrap();
    let initialized_res = app.clone().oneshot(initialized_req).await.unwrap();
    assert_eq!(initialized_res.status(), StatusCode::ACCEPTED);

    // tools/list
    let list = json!({"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}});
    let list_req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Session-Id", session_id.clone())
        .body(axum::body::Body::from(list.to_string()))
        .unwrap();
    let list_res = timeout(Duration::from_secs(20), app.clone().oneshot(list_req))
        .await
        .unwrap()
        .unwrap();
    assert!(list_res.status().is_success());
    let bytes = list_res.into_body().collect().await.unwrap().to_bytes();
    let v = sse_result(&String::from_utf8_lossy(&bytes));
    let tools = v["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert!(names.contains(&"sncf_search_train"), "got: {names:?}");
    assert!(names.contains(&"sncf_train_details"), "got: {names:?}");
    // The MCP listing carries the same descriptions the dispatcher advertises.
    for t in tools {
        let expected = match t["name"].as_str().unwrap() {
            "sncf_search_train" => sncf_mcp_gateway::tools::search::DESCRIPTION,
            "sncf_train_details" => sncf_mcp_gateway::tools::details::DESCRIPTION,
            other => panic!("unexpected tool: {other}"),
        };
        assert_eq!(t["description"], expected);
    }

    // tools/call
    let call = json!({
        "jsonrpc":"2.0","id":3,"method":"tools/call",
        "params": {"name":"sncf_search_train","arguments":{"from":"Paris","to":"Lyon"}}
    });
    let call_req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Session-Id", session_id.clone())
        .body(axum::body::Body::from(call.to_string()))
        .unwrap();
    let call_res = app.clone().oneshot(call_req).await.unwrap();
    assert!(call_res.status().is_success());
    let bytes = call_res.into_body().collect().await.unwrap().to_bytes();
    let v = sse_result(&String::from_utf8_lossy(&bytes));

    assert_eq!(v["result"]["isError"], false);
    let text = v["result"]["content"][0]["text"].as_str().unwrap();
    let journeys: Value = serde_json::from_str(text).unwrap();
    let journeys = journeys.as_array().unwrap();
    assert_eq!(journeys.len(), 2);
    assert_eq!(journeys[0]["sections"].as_array().unwrap().len(), 1);
    assert_eq!(journeys[0]["sections"][0]["mode"], "rail");
    assert_eq!(journeys[0]["sections"][0]["type"], "public_transport");
    assert_eq!(journeys[0]["sections"][0]["duration"], 7200);
}
