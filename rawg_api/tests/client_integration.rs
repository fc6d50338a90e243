use std::sync::Arc;
use std::time::Duration;

use rawg_api::catalog;
use rawg_api::types::{Genre, Paged};
use rawg_api::{
    ApiResponse, Client, GamesQuery, JsonMode, OrderedQuery, PageQuery, Query, SortDirection,
    TransportError,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "test-key";

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn last_query(mock_server: &MockServer) -> Option<String> {
    let requests = mock_server.received_requests().await.unwrap();
    requests.last().unwrap().url.query().map(str::to_string)
}

#[tokio::test]
async fn list_games_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("games.json");

    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "10"))
        .and(query_param("search", "zelda"))
        .and(query_param("key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let query = GamesQuery::default()
        .with_page(2)
        .with_page_size(10)
        .with_search("zelda");
    let result = client.list_games(&query).await.unwrap();

    match result {
        ApiResponse::Success(page) => {
            assert_eq!(page.results.len(), 3);
            assert_eq!(page.count, 1024);
            assert_eq!(page.results[0].id, 22511);
        }
        other => panic!("expected success, got {:?}", other),
    }
    assert_eq!(
        last_query(&mock_server).await.as_deref(),
        Some("page=2&page_size=10&search=zelda&key=test-key")
    );
}

#[tokio::test]
async fn get_game_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/games/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"detail": "Not found."}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let result = client.get_game("999999").await.unwrap();
    assert!(matches!(result, ApiResponse::ApiError { status: Some(404) }));
}

#[tokio::test]
async fn list_genres_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let result = client.list_genres(&OrderedQuery::default()).await.unwrap();
    assert_eq!(result.status(), Some(500));
}

#[tokio::test]
async fn unauthorized_key_is_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "wrong-key").unwrap();
    let result = client.list_tags(&PageQuery::default()).await.unwrap();
    assert_eq!(result.status(), Some(401));
}

#[tokio::test]
async fn unset_params_send_only_the_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"count": 0, "results": []}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let result = client.list_tags(&PageQuery::default()).await.unwrap();
    assert!(result.is_success());
    assert_eq!(last_query(&mock_server).await.as_deref(), Some("key=test-key"));
}

#[tokio::test]
async fn game_scoped_endpoint_fills_path_and_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/games/grand-theft-auto-v/screenshots"))
        .and(query_param("ordering", "-width"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"count": 1, "next": null, "previous": null,
                "results": [{"id": 1, "image": "https://media.rawg.io/s.jpg", "width": 1920, "height": 1080, "is_deleted": false}]}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let query = OrderedQuery::default()
        .with_ordering("width")
        .with_sort_direction(SortDirection::Desc);
    let page = client
        .list_game_screenshots("grand-theft-auto-v", &query)
        .await
        .unwrap()
        .success()
        .unwrap();
    assert_eq!(page.results[0].width, 1920);
    assert_eq!(
        last_query(&mock_server).await.as_deref(),
        Some("ordering=-width&key=test-key")
    );
}

#[tokio::test]
async fn required_pagination_is_always_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/developers"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"count": 0, "results": []}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let result = client.list_developers(1, 40).await.unwrap();
    assert!(result.is_success());
}

#[tokio::test]
async fn achievements_decode_as_bare_list() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("achievements.json");

    Mock::given(method("GET"))
        .and(path("/api/games/3498/achievements"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let achievements = client
        .list_game_achievements("3498")
        .await
        .unwrap()
        .success()
        .unwrap();
    assert_eq!(achievements.len(), 2);
}

#[tokio::test]
async fn numeric_detail_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/genres/4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"id": 4, "name": "Action", "slug": "action", "description": "<p>Action games</p>"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let genre = client.get_genre(4).await.unwrap().success().unwrap();
    assert_eq!(genre.slug, "action");
    assert_eq!(genre.description.as_deref(), Some("<p>Action games</p>"));
}

#[tokio::test]
async fn dot_segment_slug_is_never_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    for slug in ["..", ".", ""] {
        let result = client.get_game(slug).await.unwrap();
        assert!(
            matches!(result, ApiResponse::ApiError { status: None }),
            "{:?}: {:?}",
            slug,
            result
        );
    }
}

#[tokio::test]
async fn encoded_dots_reach_the_game_route() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/games/%252e%252e"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let result = client.get_game("%2e%2e").await.unwrap();
    assert_eq!(result.status(), Some(404));
}

#[tokio::test]
async fn malformed_body_propagates_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let err = client.list_games(&GamesQuery::default()).await.unwrap_err();
    assert_eq!(err.body_snippet(), "{not valid json");
}

#[tokio::test]
async fn json_mode_controls_relaxed_bodies() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("games_relaxed.json");

    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let lenient = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let page = lenient
        .list_games(&GamesQuery::default())
        .await
        .unwrap()
        .success()
        .unwrap();
    assert_eq!(page.results[0].id, 3328);

    let strict = Client::builder()
        .base_url(&mock_server.uri())
        .api_key(KEY)
        .json_mode(JsonMode::Strict)
        .build()
        .unwrap();
    assert!(strict.list_games(&GamesQuery::default()).await.is_err());
}

#[tokio::test]
async fn unresolvable_host_is_a_network_error() {
    let client = Client::with_base_url("http://rawg-api-test.invalid", KEY).unwrap();
    let result = client.list_genres(&OrderedQuery::default()).await.unwrap();
    match result {
        ApiResponse::NetworkError(cause) => assert!(cause.is_connectivity()),
        other => panic!("expected a network error, got {:?}", other),
    }
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::with_base_url(&format!("http://{}", addr), KEY).unwrap();
    let result = client.get_tag(31).await.unwrap();
    let cause = match result {
        ApiResponse::NetworkError(TransportError::Connect(cause)) => cause,
        other => panic!("expected a refused connection, got {:?}", other),
    };
    assert!(cause.is_connect());

    let mut refused = false;
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&cause);
    while let Some(err) = source {
        let io_refused = err
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::ConnectionRefused);
        refused |= io_refused || err.to_string().to_lowercase().contains("refused");
        source = err.source();
    }
    assert!(refused, "source chain does not mention the refusal: {:?}", cause);
}

#[tokio::test]
async fn timeout_is_a_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .base_url(&mock_server.uri())
        .api_key(KEY)
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let result = client.list_stores(&OrderedQuery::default()).await.unwrap();
    match result {
        ApiResponse::NetworkError(TransportError::Timeout(cause)) => assert!(cause.is_timeout()),
        other => panic!("expected a timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn cancel_aborts_in_flight_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let call = Arc::new(client.call::<Paged<Genre>>(&catalog::LIST_GENRES, &[], &[]));
    let runner = Arc::clone(&call);
    let handle = tokio::spawn(async move { runner.execute().await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    call.cancel();
    assert!(call.is_canceled());

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert!(matches!(
        result,
        ApiResponse::NetworkError(TransportError::Canceled)
    ));
}

#[tokio::test]
async fn clone_runs_independently() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("genres.json");

    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let original = client.call::<Paged<Genre>>(&catalog::LIST_GENRES, &[], &[]);
    let copy = original.clone();

    copy.cancel();
    let first = original.execute().await.unwrap();
    assert!(first.is_success());
    assert!(original.is_executed());
    assert!(!original.is_canceled());

    let canceled = copy.execute().await.unwrap();
    assert!(matches!(
        canceled,
        ApiResponse::NetworkError(TransportError::Canceled)
    ));

    let retry = original.clone();
    assert!(!retry.is_executed());
    assert!(retry.execute().await.unwrap().is_success());
}

#[tokio::test]
async fn second_execute_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/publishers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"count": 0, "results": []}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let query = PageQuery::default().query_pairs();
    let call = client.call::<Paged<Genre>>(&catalog::LIST_PUBLISHERS, &[], &query);
    assert!(call.execute().await.unwrap().is_success());

    let again = call.execute().await.unwrap();
    assert!(matches!(again, ApiResponse::ApiError { status: None }));
}

#[tokio::test]
async fn enqueue_delivers_outcome() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel();
    client
        .call::<rawg_api::types::Store>(&catalog::GET_STORE, &["1"], &[])
        .enqueue(move |outcome| {
            let _ = tx.send(outcome.map(|r| r.status()));
        });

    let status = rx.await.unwrap().unwrap();
    assert_eq!(status, Some(503));
}

#[tokio::test]
async fn cancel_after_enqueue_delivers_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), KEY).unwrap();
    let call = client.call::<Paged<Genre>>(&catalog::LIST_GENRES, &[], &[]);
    let delivered = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let seen = Arc::clone(&delivered);
    let (tx, rx) = tokio::sync::oneshot::channel();

    let handle = call.enqueue(move |outcome| {
        seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let _ = tx.send(outcome);
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    call.cancel();

    let outcome = tokio::time::timeout(Duration::from_secs(5), rx)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert!(matches!(
        outcome,
        ApiResponse::NetworkError(TransportError::Canceled)
    ));
    handle.await.unwrap();
    assert_eq!(delivered.load(std::sync::atomic::Ordering::SeqCst), 1);
}
