//! Request/response tests against a mocked Table API.
//!
//! Uses wiremock to intercept the GET and check what the client sends.

use nowfetch::config::Config;
use nowfetch::error::NowError;
use nowfetch::models::{Priority, Table, TableQuery, TableResponse};
use nowfetch::now_client::NowClient;
use nowfetch::output::render;
use pretty_assertions::assert_eq;
use wiremock::matchers::{basic_auth, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NowClient {
    let config = Config::new("dev331433", "admin", "s3cret")
        .unwrap()
        .with_base_url(server.uri())
        .unwrap();
    NowClient::new(&config).unwrap()
}

fn rendered(response: &TableResponse) -> String {
    let mut buf = Vec::new();
    render(response, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn test_fetch_sends_authenticated_projected_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/now/table/incident"))
        .and(basic_auth("admin", "s3cret"))
        .and(header("accept", "application/json"))
        .and(query_param("sysparm_limit", "5"))
        .and(query_param(
            "sysparm_fields",
            "number,short_description,description,state,priority",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).fetch_incidents().await.unwrap();

    assert_eq!(response, TableResponse::Records(vec![]));
}

#[tokio::test]
async fn test_records_printed_in_order_untransformed() {
    let mock_server = MockServer::start().await;

    let body = r#"{"result":[
        {"number":"INC0010001","short_description":"VPN drops","description":"","state":"1","priority":"2"},
        {"number":"INC0010002","short_description":"Printer jam","description":"Floor 3","state":"2","priority":"4"},
        {"number":"INC0010003","short_description":"Disk full","description":"/var","state":"6","priority":"1"}
    ]}"#;

    Mock::given(method("GET"))
        .and(path("/api/now/table/incident"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).fetch_incidents().await.unwrap();
    let out = rendered(&response);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(
        lines,
        vec![
            r#"{"number":"INC0010001","short_description":"VPN drops","description":"","state":"1","priority":"2"}"#,
            r#"{"number":"INC0010002","short_description":"Printer jam","description":"Floor 3","state":"2","priority":"4"}"#,
            r#"{"number":"INC0010003","short_description":"Disk full","description":"/var","state":"6","priority":"1"}"#,
        ]
    );

    let summaries = response.summaries();
    assert_eq!(summaries[2].summary, "Disk full");
    assert_eq!(summaries[2].priority, Priority::Critical);
}

#[tokio::test]
async fn test_limit_is_passthrough_not_enforced() {
    let mock_server = MockServer::start().await;

    let records: Vec<_> = (1..=8)
        .map(|i| serde_json::json!({"number": format!("INC00100{:02}", i)}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/now/table/incident"))
        .and(query_param("sysparm_limit", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": records })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).fetch_incidents().await.unwrap();

    assert_eq!(response.records().len(), 8);
    assert_eq!(rendered(&response).lines().count(), 8);
}

#[tokio::test]
async fn test_missing_result_prints_single_diagnostic_line() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/now/table/incident"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "not authorized"
        })))
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).fetch_incidents().await.unwrap();

    assert_eq!(
        rendered(&response),
        "Unexpected response: {\"error\":\"not authorized\"}\n"
    );
}

#[tokio::test]
async fn test_unauthorized_status_is_classified_not_failed() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "error": {
            "message": "User Not Authenticated",
            "detail": "Required to provide Auth information"
        },
        "status": "failure"
    });

    Mock::given(method("GET"))
        .and(path("/api/now/table/incident"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).fetch_incidents().await.unwrap();

    assert_eq!(response, TableResponse::Unexpected(body));
    assert_eq!(rendered(&response).lines().count(), 1);
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/now/table/incident"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><body>Instance Hibernating</body></html>", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fetch_incidents().await.unwrap_err();

    assert!(matches!(err, NowError::Parse(_)));
}

#[tokio::test]
async fn test_other_table_uses_its_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/now/table/change_request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": [{"number": "CHG0030001", "priority": "3"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = TableQuery::new().with_table(Table::ChangeRequest);
    let response = client_for(&mock_server).fetch(&query).await.unwrap();

    let summaries = response.summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "CHG0030001");
    assert_eq!(summaries[0].priority, Priority::Moderate);
}

#[tokio::test]
async fn test_every_result_element_printed_whatever_its_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/now/table/incident"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"result":[{"number":"INC1"},null,"x"]}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).fetch_incidents().await.unwrap();
    let out = rendered(&response);

    assert_eq!(out.lines().collect::<Vec<_>>(), vec![r#"{"number":"INC1"}"#, "null", r#""x""#]);
    assert_eq!(response.summaries().len(), 1);
}
