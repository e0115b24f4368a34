//! College Scorecard client tests against a mocked upstream.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use college_search::client::CollegeScorecardClient;
use college_search::config::Config;
use college_search::models::{
    Ownership, Range, SchoolCriteria, SearchCriteria, StudentCriteria,
};
use college_search::{ClientError, MappingError};

fn setup_client(mock_server: &MockServer) -> CollegeScorecardClient {
    let config = Config::for_testing(&mock_server.uri());
    CollegeScorecardClient::new(&config).unwrap()
}

fn sample_school(name: &str, ownership: i64) -> serde_json::Value {
    json!({
        "latest": {
            "school": {
                "name": name,
                "city": "Springfield",
                "state": "IL",
                "zip": "62701",
                "ownership": ownership
            },
            "student": { "size": 12000 },
            "admissions": {
                "sat_scores": { "midpoint": { "math": 580, "critical_reading": 570 } }
            }
        },
        "location": { "lat": 39.8, "lon": -89.65 }
    })
}

fn sample_response(results: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "metadata": { "total": results.len(), "page": 1, "per_page": 20 },
        "results": results
    })
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_debug_hides_api_key() {
    let config = Config::new("super-secret-key");
    let client = CollegeScorecardClient::new(&config).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("has_api_key"));
    assert!(client.has_api_key());
}

#[tokio::test]
async fn test_search_sends_query_and_transforms() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/schools"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "20"))
        .and(query_param("school.ownership", "1"))
        .and(query_param("latest.student.size__range", "5000.."))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response(vec![
            sample_school("State University", 1),
            sample_school("Tech Institute", 1),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let criteria = SearchCriteria {
        school: Some(SchoolCriteria { ownership: Some(Ownership::Public), location: None }),
        student: Some(StudentCriteria { count: Some(Range::at_least(5000.0)) }),
        ..SearchCriteria::paged(1, 20)
    };

    let colleges = client.search(&criteria).await.unwrap();

    assert_eq!(colleges.len(), 2);
    assert_eq!(colleges[0].name, "State University");
    assert_eq!(colleges[0].ownership, Ownership::Public);
    assert_eq!(colleges[0].admissions.sat.total, Some(1150.0));
    assert_eq!(colleges[1].location.longitude, Some(-89.65));
}

#[tokio::test]
async fn test_fetch_returns_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/schools"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sample_response(vec![sample_school("A", 2)])),
        )
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let raw = client.fetch(&SearchCriteria::paged(1, 20)).await.unwrap();

    assert_eq!(raw.metadata.total, 1);
    assert_eq!(raw.metadata.per_page, 20);
    assert_eq!(raw.results.len(), 1);
}

#[tokio::test]
async fn test_empty_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/schools"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response(vec![])))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let colleges = client.search(&SearchCriteria::paged(1, 20)).await.unwrap();
    assert!(colleges.is_empty());
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_upstream_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/schools"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API_KEY_INVALID"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search(&SearchCriteria::paged(1, 20)).await.unwrap_err();

    match err {
        ClientError::UpstreamRequestFailed { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API_KEY_INVALID");
        }
        other => panic!("Expected UpstreamRequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upstream_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/schools"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search(&SearchCriteria::paged(1, 20)).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_upstream_unreachable() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = Config::for_testing(&format!("http://127.0.0.1:{port}"));
    let client = CollegeScorecardClient::new(&config).unwrap();
    let err = client.search(&SearchCriteria::paged(1, 20)).await.unwrap_err();

    assert!(matches!(err, ClientError::UpstreamUnreachable(_)), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/schools"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search(&SearchCriteria::paged(1, 20)).await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn test_unknown_ownership_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/schools"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_response(vec![sample_school("Odd U", 7)])),
        )
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search(&SearchCriteria::paged(1, 20)).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Mapping(MappingError::InvalidOwnership { ref value }) if value == "7"
    ));
}

#[tokio::test]
async fn test_invalid_range_never_reaches_upstream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/schools"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response(vec![])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let criteria = SearchCriteria {
        student: Some(StudentCriteria { count: Some(Range::default()) }),
        ..SearchCriteria::paged(1, 20)
    };

    let err = client.search(&criteria).await.unwrap_err();
    assert!(matches!(err, ClientError::Mapping(MappingError::InvalidRange)));
}
