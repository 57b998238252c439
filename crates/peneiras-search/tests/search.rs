//! End-to-end search tests with a wiremock stand-in for ViaCEP.

use peneiras_search::{SearchError, SearchService, DEFAULT_COORDINATES};
use peneiras_viacep::{ViacepClient, ViacepError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(base_url: &str) -> SearchService {
    let client =
        ViacepClient::with_base_url(30, base_url).expect("client construction should not fail");
    SearchService::new(client)
}

async fn mock_cep(server: &MockServer, cep_path: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(cep_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn cep_search_ranks_sao_paulo_tryouts_first() {
    let server = MockServer::start().await;
    mock_cep(
        &server,
        "/01310100/json/",
        serde_json::json!({
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP"
        }),
    )
    .await;

    let outcome = service(&server.uri())
        .search("01310-100")
        .await
        .expect("search should succeed");

    assert_eq!(outcome.location.uf, "SP");
    assert_eq!(outcome.location.cep.as_deref(), Some("01310-100"));
    assert_eq!(outcome.tryouts.len(), 8);

    // Every São Paulo capital tryout must rank closer than every Rio one.
    let rank_of = |id: u32| {
        outcome
            .tryouts
            .iter()
            .position(|t| t.tryout.id == id)
            .expect("tryout present")
    };
    for sp_id in [2, 3, 4] {
        for rio_id in [5, 6] {
            assert!(
                rank_of(sp_id) < rank_of(rio_id),
                "tryout {sp_id} should outrank tryout {rio_id}"
            );
        }
    }

    for pair in outcome.tryouts.windows(2) {
        assert!(pair[0].distance_km() <= pair[1].distance_km());
    }
}

#[tokio::test]
async fn cep_search_uses_exact_table_coordinates() {
    let server = MockServer::start().await;
    mock_cep(
        &server,
        "/80010000/json/",
        serde_json::json!({
            "cep": "80010-000",
            "logradouro": "Rua das Flores",
            "bairro": "Centro",
            "localidade": "Curitiba",
            "uf": "PR"
        }),
    )
    .await;

    let outcome = service(&server.uri())
        .search("80010-000")
        .await
        .expect("search should succeed");

    assert!((outcome.location.coordinates.lat - (-25.4284)).abs() < 1e-9);
    assert!((outcome.location.coordinates.lng - (-49.2733)).abs() < 1e-9);
}

#[tokio::test]
async fn cep_search_with_unlisted_locality_falls_back_to_default() {
    let server = MockServer::start().await;
    mock_cep(
        &server,
        "/77001002/json/",
        serde_json::json!({
            "cep": "77001-002",
            "logradouro": "Quadra 104 Norte",
            "bairro": "Plano Diretor Norte",
            "localidade": "Palmas",
            "uf": "TO"
        }),
    )
    .await;

    let outcome = service(&server.uri())
        .search("77001-002")
        .await
        .expect("search should succeed");

    assert!((outcome.location.coordinates.lat - DEFAULT_COORDINATES.lat).abs() < 1e-9);
    assert!((outcome.location.coordinates.lng - DEFAULT_COORDINATES.lng).abs() < 1e-9);
}

#[tokio::test]
async fn free_text_search_never_contacts_viacep() {
    let server = MockServer::start().await;

    let outcome = service(&server.uri())
        .search("Porto Alegre")
        .await
        .expect("search should succeed");

    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(outcome.location.localidade, "Porto Alegre");
    assert_eq!(outcome.location.uf, "SP");
    assert_eq!(outcome.tryouts.len(), 8);
    assert_eq!(outcome.tryouts[0].distancia, "0.0 km");
    assert!(["Grêmio", "Internacional"].contains(&outcome.tryouts[0].tryout.clube.as_str()));
}

#[tokio::test]
async fn unknown_cep_propagates_under_search_failed_prefix() {
    let server = MockServer::start().await;
    mock_cep(
        &server,
        "/99999999/json/",
        serde_json::json!({ "erro": true }),
    )
    .await;

    let err = service(&server.uri())
        .search("99999-999")
        .await
        .unwrap_err();

    assert!(
        matches!(err, SearchError::Resolve(ViacepError::NotFound(_))),
        "got: {err}"
    );
    assert!(err.to_string().starts_with("search failed: "), "got: {err}");
}

#[tokio::test]
async fn upstream_failure_propagates_under_search_failed_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/01310100/json/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = service(&server.uri()).search("01310100").await.unwrap_err();
    assert!(
        matches!(err, SearchError::Resolve(ViacepError::Http(_))),
        "got: {err}"
    );
}

#[tokio::test]
async fn empty_query_is_rejected_before_any_classification() {
    let server = MockServer::start().await;
    let svc = service(&server.uri());

    for query in ["", "   ", "\t\n"] {
        let err = svc.search(query).await.unwrap_err();
        assert!(matches!(err, SearchError::EmptyQuery), "query {query:?}");
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}
