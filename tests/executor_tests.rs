use std::time::Duration;
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use randapi::operations::{CoinFace, CoinParams, IntegerParams, Operation};
use randapi::{new_request, Error, ErrorKind, PregenRand, RandClient};

const API_KEY: &str = "6b81b415-80e9-4481-a5f1-58e354742c00";

fn success_body() -> Value
{   json!({
      "jsonrpc": "2.0",
      "result": {
        "random": {
          "data": [14, 34, -3],
          "completionTime": "2022-08-25 12:15:44Z"
        },
        "bitsUsed": 150,
        "bitsLeft": 1477,
        "requestsLeft": 233,
        "advisoryDelay": 1
      },
      "id": "00000000-0000-0000-0000-000000000000"
    })
}

/// Replies with `body`, optionally echoing the request id into it
struct Reply
{   status: u16
  , body: Value
  , echo_id: bool
  , delay: Option<Duration>
}

impl Reply
{   fn echo(body: Value) -> Self
    {   Reply { status: 200, body, echo_id: true, delay: None }
    }

    fn fixed(status: u16, body: Value) -> Self
    {   Reply { status, body, echo_id: false, delay: None }
    }
}

impl Respond for Reply
{   fn respond(&self, request: &Request) -> ResponseTemplate
    {   let mut body = self.body.clone();
        if self.echo_id
        {   let sent: Value = serde_json::from_slice(&request.body).unwrap();
            body["id"] = sent["id"].clone();
        }
        let mut template = ResponseTemplate::new(self.status)
          .set_body_json(body);
        if let Some(delay) = self.delay
        {   template = template.set_delay(delay);
        }
        template
    }
}

async fn server_with(reply: Reply) -> MockServer
{   let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(reply)
      .mount(&server)
      .await;
    server
}

fn client_for(server: &MockServer) -> RandClient
{   RandClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

fn integer_request() -> randapi::RandomRequest
{   let params = IntegerParams::new(
      API_KEY, -17, 50, 3, true, PregenRand::default()
    );
    new_request(IntegerParams::METHOD, Some(&params)).unwrap()
}

#[tokio::test]
async fn test_execute_request_success()
{   let server = server_with(Reply::echo(success_body())).await;
    let client = client_for(&server);
    let req = integer_request();

    let result = assert_ok!(client.execute_request(&req).await);
    assert_eq!(result.decode_data::<i64>().unwrap(), vec![14, 34, -3]);
    assert_eq!(result.bits_used, 150);
    assert_eq!(result.bits_left, 1477);
    assert_eq!(result.requests_left, 233);
    assert_eq!(result.advisory_delay, 1);
    assert_eq!(
      result.random.completion_time.to_wire()
    , "2022-08-25 12:15:44Z"
    );
}

#[tokio::test]
async fn test_execute_request_headers_and_body()
{   let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(header("Content-Type", "application/json; charset=utf-8"))
      .and(header("User-Agent", randapi::client::USER_AGENT))
      .respond_with(Reply::echo(success_body()))
      .expect(1)
      .mount(&server)
      .await;

    let client = client_for(&server);
    let req = integer_request();
    assert_ok!(client.execute_request(&req).await);

    let received = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(sent["jsonrpc"], "2.0");
    assert_eq!(sent["method"], "generateIntegers");
    assert_eq!(sent["id"], req.id.to_string());
    assert_eq!(sent["params"]["min"], -17);
    assert_eq!(sent["params"]["max"], 50);
}

#[tokio::test]
async fn test_execute_request_id_mismatch()
{   let server = server_with(Reply::fixed(200, success_body())).await;
    let client = client_for(&server);
    let req = integer_request();

    let err = assert_err!(client.execute_request(&req).await);
    assert_eq!(err.kind(), ErrorKind::CorrelationFailure);
    match err
    {   Error::RequestResponseMismatch { response, request } => {
          assert_eq!(response, "00000000-0000-0000-0000-000000000000");
          assert_eq!(request, req.id);
        }
      , other => panic!("unexpected error: {}", other)
    }
}

#[tokio::test]
async fn test_execute_request_missing_id()
{   let mut body = success_body();
    body.as_object_mut().unwrap().remove("id");
    let server = server_with(Reply::fixed(200, body)).await;

    let err = assert_err!(client_for(&server).execute_request(&integer_request()).await);
    assert_eq!(err.kind(), ErrorKind::CorrelationFailure);
}

#[tokio::test]
async fn test_execute_request_wrong_version()
{   let mut body = success_body();
    body["jsonrpc"] = json!("3.0");
    let server = server_with(Reply::echo(body)).await;

    let err = assert_err!(client_for(&server).execute_request(&integer_request()).await);
    assert_eq!(err.kind(), ErrorKind::ProtocolViolation);
    assert!(matches!(
      err, Error::UnexpectedProtocolVersion(ref v) if v == "3.0"
    ));
}

#[tokio::test]
async fn test_execute_request_error_envelope()
{   let body = json!({
      "jsonrpc": "2.0",
      "error": {"code": 401, "message": "The API key you specified is not running"},
      "id": null
    });
    let server = server_with(Reply::echo(body)).await;

    let err = assert_err!(client_for(&server).execute_request(&integer_request()).await);
    assert_eq!(err.kind(), ErrorKind::RemoteReported);
    match err
    {   Error::ErrorInResponse { code, message } => {
          assert_eq!(code, 401);
          assert_eq!(message, "The API key you specified is not running");
        }
      , other => panic!("unexpected error: {}", other)
    }
}

#[tokio::test]
async fn test_execute_request_error_wins_over_result()
{   let mut body = success_body();
    body["error"] = json!({"code": 200, "message": "parse error"});
    let server = server_with(Reply::echo(body)).await;

    let err = assert_err!(client_for(&server).execute_request(&integer_request()).await);
    assert!(matches!(err, Error::ErrorInResponse { code: 200, .. }));
}

#[tokio::test]
async fn test_execute_request_missing_result()
{   let body = json!({"jsonrpc": "2.0", "id": null});
    let server = server_with(Reply::echo(body)).await;

    let err = assert_err!(client_for(&server).execute_request(&integer_request()).await);
    assert!(matches!(err, Error::MissingResult));
    assert_eq!(err.kind(), ErrorKind::ProtocolViolation);
}

#[tokio::test]
async fn test_execute_request_empty_body()
{   let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&server)
      .await;

    let err = assert_err!(client_for(&server).execute_request(&integer_request()).await);
    assert!(matches!(err, Error::DecodeFailed(_)));
    assert_eq!(err.kind(), ErrorKind::ProtocolViolation);
    assert!(err.to_string().starts_with("invalid response: decode response:"));
}

#[tokio::test]
async fn test_execute_request_status_gate()
{   for status in [201, 400, 500, 503]
    {   // a perfectly valid body must not rescue a non-200 status
        let server = server_with(Reply
        {   status
          , body: success_body()
          , echo_id: true
          , delay: None
        }).await;

        let err = assert_err!(client_for(&server).execute_request(&integer_request()).await);
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(
          matches!(err, Error::UnexpectedStatusCode(s) if s == status),
          "status {}", status
        );
    }
}

#[tokio::test]
async fn test_execute_request_timeout()
{   let server = server_with(Reply
    {   status: 200
      , body: success_body()
      , echo_id: true
      , delay: Some(Duration::from_secs(2))
    }).await;
    let client = RandClient::new(&server.uri(), Duration::from_millis(100))
      .unwrap();

    let err = assert_err!(client.execute_request(&integer_request()).await);
    assert!(matches!(err, Error::Timeout(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_execute_request_unreachable()
{   let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = RandClient::new(&uri, Duration::from_secs(2)).unwrap();
    let err = assert_err!(client.execute_request(&integer_request()).await);
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[test]
fn test_client_rejects_bad_url()
{   let err = RandClient::new("not a url", Duration::from_secs(1))
      .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_generate_coin_flips()
{   let mut body = success_body();
    body["result"]["random"]["data"] = json!([0, 1, 1]);
    let server = server_with(Reply::echo(body)).await;

    let op = CoinParams::new(API_KEY, 3, CoinFace::Eng, PregenRand::default());
    let generated = assert_ok!(client_for(&server).generate(&op).await);
    assert_eq!(generated.values, vec!["heads", "tails", "tails"]);
    assert_eq!(generated.api_info.requests_left, 233);

    let received = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(sent["id"], generated.api_info.id.to_string());
    assert_eq!(sent["params"]["min"], 0);
    assert_eq!(sent["params"]["max"], 1);
    assert_eq!(sent["params"]["replacement"], true);
}

#[tokio::test]
async fn test_generate_rejects_bad_data_shape()
{   let mut body = success_body();
    body["result"]["random"]["data"] = json!(["a", "b"]);
    let server = server_with(Reply::echo(body)).await;

    let op = IntegerParams::new(API_KEY, 1, 10, 2, false, PregenRand::default());
    let err = assert_err!(client_for(&server).generate(&op).await);
    assert!(matches!(err, Error::DataDecodeFailed(_)));
}

#[tokio::test]
async fn test_generate_validates_before_sending()
{   let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(Reply::echo(success_body()))
      .expect(0)
      .mount(&server)
      .await;

    let op = IntegerParams::new(API_KEY, 10, 1, 2, false, PregenRand::default());
    let err = assert_err!(client_for(&server).generate(&op).await);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
