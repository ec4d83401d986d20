//! Integration tests for the controller's workflows against a mock backend.

mod common;

use std::net::SocketAddr;

use common::{article_json, feed_json, start_mock_api, MockRoute};
use newsgraph_client::controller::{MintingOperation, View};
use newsgraph_client::{AppController, ClientConfig};

/// Point every endpoint of the client at the mock backend.
fn config_for(addr: SocketAddr) -> ClientConfig {
    let base = format!("http://{}", addr);
    let mut config = ClientConfig::default();
    config.api.base_url = base.clone();
    config.api.request_timeout_secs = 5;
    config.ledger.be_url = base.clone();
    config.ledger.l0_url = base.clone();
    config.ledger.l1_url = base.clone();
    config.ledger.request_timeout_secs = 5;
    config.metagraph.global_l0_url = base.clone();
    config.metagraph.metagraph_l0_url = base.clone();
    config.metagraph.currency_l1_url = base.clone();
    config.metagraph.data_l1_url = base;
    config
}

fn feed_routes() -> Vec<MockRoute> {
    vec![
        MockRoute::get(
            "/news/?skip=0&limit=9",
            200,
            feed_json(
                vec![article_json("a1", None), article_json("a2", None)],
                12,
                1,
                2,
            ),
        ),
        MockRoute::get(
            "/news/?skip=9&limit=9",
            200,
            feed_json(vec![article_json("a10", None)], 12, 2, 2),
        ),
    ]
}

#[tokio::test]
async fn start_loads_first_feed_page() {
    let (addr, _log) = start_mock_api(feed_routes()).await;
    let mut controller = AppController::new(&config_for(addr)).unwrap();

    controller.start().await;

    assert!(controller.error().is_none());
    assert_eq!(controller.articles().len(), 2);
    assert_eq!(controller.pagination().total(), 12);
    assert_eq!(controller.pagination().total_pages(), 2);
}

#[tokio::test]
async fn page_change_is_clamped_and_refetches() {
    let (addr, log) = start_mock_api(feed_routes()).await;
    let mut controller = AppController::new(&config_for(addr)).unwrap();
    controller.start().await;

    controller.set_page(99).await;

    assert_eq!(controller.pagination().page(), 2);
    assert_eq!(controller.articles().len(), 1);
    assert_eq!(controller.articles()[0].id, "a10");
    assert!(log
        .lock()
        .unwrap()
        .iter()
        .any(|line| line == "GET /news/?skip=9&limit=9"));
}

#[tokio::test]
async fn failed_feed_load_sets_blocking_error() {
    let (addr, _log) = start_mock_api(vec![MockRoute::get(
        "/news/?",
        500,
        r#"{"detail": "Failed to retrieve news articles"}"#,
    )])
    .await;
    let mut controller = AppController::new(&config_for(addr)).unwrap();

    controller.start().await;

    assert_eq!(controller.error(), Some("Failed to load news articles"));
    assert!(controller.articles().is_empty());
}

#[tokio::test]
async fn mint_workflow_refreshes_feed_and_items() {
    let mut record = article_json("a1", Some("DAG-self"));
    record["nft_token_id"] = serde_json::json!("tok-1");

    let mut routes = feed_routes();
    routes.push(MockRoute::post(
        "/news/a1/mint",
        200,
        r#"{"message": "NFT minted successfully", "nft_token_id": "tok-1"}"#,
    ));
    routes.push(MockRoute::get(
        "/news/constellation/",
        200,
        serde_json::json!([record]).to_string(),
    ));

    let (addr, log) = start_mock_api(routes).await;
    let mut controller = AppController::new(&config_for(addr)).unwrap();
    controller.start().await;
    controller.connect_wallet().await.unwrap();

    controller.mint_article("a1").await;

    assert_eq!(
        controller.minting_state("a1"),
        &MintingOperation::Succeeded("tok-1".to_string())
    );
    assert!(controller.minting_error().is_none());
    assert_eq!(controller.my_items().len(), 1);
    assert_eq!(controller.my_items()[0].nft_token_id.as_deref(), Some("tok-1"));

    let log = log.lock().unwrap();
    assert_eq!(
        log.iter().filter(|l| *l == "POST /news/a1/mint").count(),
        1
    );
    // Initial load plus the post-mint refresh.
    assert!(
        log.iter()
            .filter(|l| *l == "GET /news/?skip=0&limit=9")
            .count()
            >= 2
    );
}

#[tokio::test]
async fn mint_failure_is_a_dismissible_side_channel() {
    let mut routes = feed_routes();
    routes.push(MockRoute::post(
        "/news/a2/mint",
        400,
        r#"{"detail": "Article already minted"}"#,
    ));

    let (addr, _log) = start_mock_api(routes).await;
    let mut controller = AppController::new(&config_for(addr)).unwrap();
    controller.start().await;
    controller.connect_wallet().await.unwrap();

    controller.mint_article("a2").await;

    assert_eq!(
        controller.minting_error(),
        Some("Minting failed: Article already minted")
    );
    // The feed itself is untouched by a minting failure.
    assert!(controller.error().is_none());
    assert_eq!(controller.articles().len(), 2);
    assert!(matches!(
        controller.minting_state("a2"),
        MintingOperation::Failed(_)
    ));

    controller.dismiss_minting_error();
    assert!(controller.minting_error().is_none());
}

#[tokio::test]
async fn already_minted_article_is_never_submitted() {
    let routes = vec![MockRoute::get(
        "/news/?skip=0&limit=9",
        200,
        feed_json(vec![article_json("a1", Some("DAG2owner"))], 1, 1, 1),
    )];

    let (addr, log) = start_mock_api(routes).await;
    let mut controller = AppController::new(&config_for(addr)).unwrap();
    controller.start().await;
    controller.connect_wallet().await.unwrap();

    controller.mint_article("a1").await;

    assert_eq!(
        controller.minting_error(),
        Some("Article has already been minted")
    );
    assert!(log
        .lock()
        .unwrap()
        .iter()
        .all(|line| !line.starts_with("POST /news/a1/mint")));
}

#[tokio::test]
async fn my_items_view_prompts_when_disconnected() {
    let (addr, log) = start_mock_api(vec![]).await;
    let mut controller = AppController::new(&config_for(addr)).unwrap();

    controller.set_view(View::MyItems).await;

    assert!(controller.needs_wallet_prompt());
    assert!(controller.my_items().is_empty());
    // No minted-items fetch was attempted without a connected wallet.
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn info_view_aggregates_all_four_layers() {
    let (addr, log) = start_mock_api(vec![MockRoute::get(
        "/node/info",
        200,
        r#"{"state": "Ready"}"#,
    )])
    .await;
    let mut controller = AppController::new(&config_for(addr)).unwrap();

    controller.set_view(View::Info).await;

    assert!(controller.error().is_none());
    let info = controller.metagraph_info().unwrap();
    assert_eq!(info.global_l0["state"], "Ready");
    assert_eq!(info.data_l1["state"], "Ready");
    assert_eq!(
        log.lock()
            .unwrap()
            .iter()
            .filter(|l| *l == "GET /node/info")
            .count(),
        4
    );
}

#[tokio::test]
async fn info_load_fails_fast_when_one_layer_fails() {
    let (good, _good_log) = start_mock_api(vec![MockRoute::get(
        "/node/info",
        200,
        r#"{"state": "Ready"}"#,
    )])
    .await;
    let (bad, _bad_log) = start_mock_api(vec![MockRoute::get(
        "/node/info",
        500,
        r#"{"detail": "node down"}"#,
    )])
    .await;

    let mut config = config_for(good);
    config.metagraph.data_l1_url = format!("http://{}", bad);
    let mut controller = AppController::new(&config).unwrap();

    controller.set_view(View::Info).await;

    // One failing layer fails the whole aggregate; no partial result.
    assert_eq!(
        controller.error(),
        Some("Failed to load metagraph information")
    );
    assert!(controller.metagraph_info().is_none());
}
