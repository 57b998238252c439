//! Integration tests for `ViacepClient` using wiremock HTTP mocks.

use peneiras_viacep::{ViacepClient, ViacepError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ViacepClient {
    ViacepClient::with_base_url(30, base_url).expect("client construction should not fail")
}

#[tokio::test]
async fn lookup_returns_parsed_address() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "cep": "01310-100",
        "logradouro": "Avenida Paulista",
        "complemento": "de 612 a 1510 - lado par",
        "bairro": "Bela Vista",
        "localidade": "São Paulo",
        "uf": "SP",
        "ibge": "3550308",
        "ddd": "11"
    });

    Mock::given(method("GET"))
        .and(path("/01310100/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let address = client
        .lookup("01310-100")
        .await
        .expect("should parse address");

    assert_eq!(address.cep, "01310-100");
    assert_eq!(address.logradouro, "Avenida Paulista");
    assert_eq!(address.bairro, "Bela Vista");
    assert_eq!(address.localidade, "São Paulo");
    assert_eq!(address.uf, "SP");
}

#[tokio::test]
async fn lookup_surfaces_erro_marker_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "erro": true })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.lookup("99999-999").await.unwrap_err();

    assert!(
        matches!(err, ViacepError::NotFound(ref cep) if cep == "99999999"),
        "expected NotFound, got: {err}"
    );
}

#[tokio::test]
async fn lookup_accepts_string_erro_marker() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/99999999/json/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "erro": "true" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.lookup("99999999").await.unwrap_err();
    assert!(matches!(err, ViacepError::NotFound(_)), "got: {err}");
}

#[tokio::test]
async fn lookup_surfaces_server_error_as_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01310100/json/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.lookup("01310100").await.unwrap_err();
    assert!(matches!(err, ViacepError::Http(_)), "got: {err}");
}

#[tokio::test]
async fn lookup_rejects_unexpected_body_shape() {
    let server = MockServer::start().await;

    // An array body has no `erro` marker and does not match the address
    // schema either.
    Mock::given(method("GET"))
        .and(path("/01310100/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["unexpected"])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.lookup("01310100").await.unwrap_err();
    assert!(matches!(err, ViacepError::Deserialize { .. }), "got: {err}");
}

#[tokio::test]
async fn lookup_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01310100/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.lookup("01310100").await.unwrap_err();
    assert!(matches!(err, ViacepError::Deserialize { .. }), "got: {err}");
}

#[tokio::test]
async fn lookup_rejects_malformed_cep_without_network_traffic() {
    let server = MockServer::start().await;
    // No mock mounted: any request would 404 and fail the Http path instead.

    let client = test_client(&server.uri());
    let err = client.lookup("1310-100").await.unwrap_err();

    assert!(matches!(err, ViacepError::InvalidCep(_)), "got: {err}");
    assert!(server.received_requests().await.unwrap().is_empty());
}
