use deckstore_api::ApiConfig;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(config: ApiConfig) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = deckstore_api::app::build_app(&config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn spawn_in_memory() -> Self {
        Self::spawn(ApiConfig::default()).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn ids(products: &serde_json::Value) -> Vec<String> {
    products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

async fn create_cart(client: &reqwest::Client, srv: &TestServer) -> String {
    let res = client.post(srv.url("/carts")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

fn valid_checkout() -> serde_json::Value {
    json!({
        "name": "Test Buyer",
        "phone": "+996 555 000 111",
        "email": "buyer@example.com",
        "address": "Bishkek, Chui 1",
        "delivery": "courier",
        "payment": "cash",
    })
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn_in_memory().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_defaults_to_popularity_over_whole_catalog() {
    let srv = TestServer::spawn_in_memory().await;
    let body: serde_json::Value = reqwest::get(srv.url("/catalog"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["count"], 6);
    assert_eq!(body["no_results"], false);
    assert_eq!(body["query"], "sort=popularity");
    assert_eq!(
        ids(&body["products"]),
        vec!["deck-001", "deck-002", "deck-005", "deck-006", "deck-003", "deck-004"]
    );
}

#[tokio::test]
async fn catalog_filters_sort_and_canonical_query() {
    let srv = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(srv.url("/catalog"))
        .query(&[("type", "solid"), ("sort", "price-asc")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body["products"]), vec!["deck-006", "deck-005", "deck-002"]);
    assert_eq!(body["query"], "type=solid&sort=price-asc");

    let body: serde_json::Value = client
        .get(srv.url("/catalog"))
        .query(&[("purpose", "Терраса"), ("sort", "price-desc")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body["products"]), vec!["deck-006", "deck-003", "deck-001"]);
    let query = body["query"].as_str().unwrap();
    assert!(query.starts_with("purpose=%D0%A2"), "query={query}");
    assert!(query.ends_with("&sort=price-desc"), "query={query}");
}

#[tokio::test]
async fn catalog_unknown_values_fall_back_to_defaults() {
    let srv = TestServer::spawn_in_memory().await;
    let body: serde_json::Value = reqwest::get(srv.url("/catalog?type=plastic&sort=cheapest"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["count"], 6);
    assert_eq!(body["query"], "sort=popularity");
}

#[tokio::test]
async fn catalog_price_range_is_request_only() {
    let srv = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(srv.url("/catalog?min_price=1500&max_price=1700&sort=price-asc"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body["products"]), vec!["deck-003", "deck-006", "deck-005"]);
    assert_eq!(body["query"], "sort=price-asc");

    let body: serde_json::Value = client
        .get(srv.url("/catalog?min_price=5000"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["no_results"], true);
    assert_eq!(body["count"], 0);

    let res = client
        .get(srv.url("/catalog?min_price=2000&max_price=1000"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    let res = client.get(srv.url("/catalog?min_price=cheap")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn catalog_price_bounds_above_editor_default_are_accepted() {
    let srv = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    for path in ["/catalog?min_price=6000&max_price=9000", "/catalog?min_price=6000"] {
        let res = client.get(srv.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["no_results"], true, "{path}");
        assert_eq!(body["count"], 0, "{path}");
    }

    // An upper bound alone keeps everything at or below it.
    let body: serde_json::Value = client
        .get(srv.url("/catalog?max_price=1200&sort=price-asc"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body["products"]), vec!["deck-004", "deck-001"]);
}

#[tokio::test]
async fn facets_and_highlights() {
    let srv = TestServer::spawn_in_memory().await;

    let facets: serde_json::Value = reqwest::get(srv.url("/catalog/facets"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(facets["colors"].as_array().unwrap().len(), 6);
    assert_eq!(facets["purposes"].as_array().unwrap().len(), 15);
    assert_eq!(facets["types"], json!(["hollow", "solid"]));
    assert_eq!(facets["sorts"], json!(["popularity", "price-asc", "price-desc", "newest"]));

    let highlights: serde_json::Value = reqwest::get(srv.url("/catalog/highlights"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        ids(&highlights["popular"]),
        vec!["deck-001", "deck-002", "deck-005", "deck-006"]
    );
    assert_eq!(ids(&highlights["newest"]), vec!["deck-003", "deck-004"]);
}

#[tokio::test]
async fn product_detail_with_related() {
    let srv = TestServer::spawn_in_memory().await;

    let res = reqwest::get(srv.url("/catalog/deck-001")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["product"]["id"], "deck-001");
    assert_eq!(body["product"]["type"], "hollow");
    assert_eq!(body["product"]["price"], 1200);
    assert_eq!(ids(&body["related"]), vec!["deck-003", "deck-004"]);

    let res = reqwest::get(srv.url("/catalog/deck-999")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn calculator_computes_boards_and_price() {
    let srv = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/calculator"))
        .json(&json!({ "width": "300", "length": "500", "product_id": "deck-001" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let result = &body["result"];
    assert_eq!(result["board_count"], 36);
    assert_eq!(result["total_price"], 43200);
    assert_eq!(result["area_display"], "15.00");
    assert_eq!(result["total_price_display"], "43 200");
    assert_eq!(body["cart_request"], json!({ "product_id": "deck-001", "quantity": 36 }));
}

#[tokio::test]
async fn calculator_rejects_invalid_input_without_error() {
    let srv = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    for body in [
        json!({ "width": "0", "length": "500", "product_id": "deck-001" }),
        json!({ "width": "abc", "length": "500", "product_id": "deck-001" }),
        json!({ "width": "300", "length": "500" }),
        json!({ "width": "300", "length": "500", "product_id": "deck-999" }),
    ] {
        let res = client.post(srv.url("/calculator")).json(&body).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert!(body["result"].is_null());
        assert!(body["cart_request"].is_null());
    }
}

#[tokio::test]
async fn cart_lifecycle_add_update_remove() {
    let srv = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();
    let cart_id = create_cart(&client, &srv).await;

    let res = client
        .post(srv.url(&format!("/carts/{cart_id}/items")))
        .json(&json!({ "product_id": "deck-001", "quantity": 36 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let cart: serde_json::Value = res.json().await.unwrap();
    assert_eq!(cart["total_price"], 43200);
    assert_eq!(cart["items"][0]["line_total"], 43200);

    // Adding the same product again accumulates.
    let cart: serde_json::Value = client
        .post(srv.url(&format!("/carts/{cart_id}/items")))
        .json(&json!({ "product_id": "deck-001", "quantity": 4 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
    assert_eq!(cart["total_item_count"], 40);

    let cart: serde_json::Value = client
        .put(srv.url(&format!("/carts/{cart_id}/items/deck-001")))
        .json(&json!({ "quantity": 10 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["total_price"], 12000);

    let res = client
        .put(srv.url(&format!("/carts/{cart_id}/items/deck-001")))
        .json(&json!({ "quantity": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Unknown product ids on update/remove are no-ops.
    let res = client
        .delete(srv.url(&format!("/carts/{cart_id}/items/deck-999")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let cart: serde_json::Value = client
        .delete(srv.url(&format!("/carts/{cart_id}/items/deck-001")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["items"], json!([]));
    assert_eq!(cart["total_price"], 0);

    let res = client
        .post(srv.url(&format!("/carts/{cart_id}/items")))
        .json(&json!({ "product_id": "deck-999", "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_or_malformed_cart_ids() {
    let srv = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/carts/not-a-uuid")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .get(srv.url(&format!("/carts/{}", deckstore_core::CartId::new())))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn checkout_reports_every_invalid_field() {
    let srv = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();
    let cart_id = create_cart(&client, &srv).await;

    let res = client
        .post(srv.url(&format!("/carts/{cart_id}/checkout")))
        .json(&valid_checkout())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "empty_cart");

    client
        .post(srv.url(&format!("/carts/{cart_id}/items")))
        .json(&json!({ "product_id": "deck-002", "quantity": 2 }))
        .send()
        .await
        .unwrap();

    let res = client
        .post(srv.url(&format!("/carts/{cart_id}/checkout")))
        .json(&json!({ "name": " ", "phone": "12", "email": "nope", "delivery": "courier" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    for field in ["name", "phone", "email", "address"] {
        assert!(body["fields"][field].is_string(), "missing error for {field}");
    }
}

#[tokio::test]
async fn checkout_places_order_and_clears_cart() {
    let srv = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();
    let cart_id = create_cart(&client, &srv).await;

    client
        .post(srv.url(&format!("/carts/{cart_id}/items")))
        .json(&json!({ "product_id": "deck-003", "quantity": 4 }))
        .send()
        .await
        .unwrap();

    let res = client
        .post(srv.url(&format!("/carts/{cart_id}/checkout")))
        .json(&valid_checkout())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let order: serde_json::Value = res.json().await.unwrap();
    assert_eq!(order["status"], "pending");
    assert_eq!(order["totalAmount"], 6000);
    assert_eq!(order["paymentMethod"], "cash");

    let cart: serde_json::Value = client
        .get(srv.url(&format!("/carts/{cart_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["items"], json!([]));

    let orders: serde_json::Value = client
        .get(srv.url("/orders"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(orders["count"], 1);
    assert_eq!(orders["items"][0]["id"], order["id"]);
}

#[tokio::test]
async fn file_order_log_persists_orders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.json");
    let config = ApiConfig {
        order_log: Some(path.clone()),
        ..ApiConfig::default()
    };
    let srv = TestServer::spawn(config).await;
    let client = reqwest::Client::new();
    let cart_id = create_cart(&client, &srv).await;

    client
        .post(srv.url(&format!("/carts/{cart_id}/items")))
        .json(&json!({ "product_id": "deck-005", "quantity": 1 }))
        .send()
        .await
        .unwrap();
    let res = client
        .post(srv.url(&format!("/carts/{cart_id}/checkout")))
        .json(&json!({
            "name": "Test Buyer",
            "phone": "+79991234567",
            "email": "buyer@example.com",
            "delivery": "pickup",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 1);
    assert_eq!(raw[0]["deliveryMethod"], "pickup");
    assert_eq!(raw[0]["totalAmount"], 1700);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_checkouts_all_reach_file_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.json");
    let config = ApiConfig {
        order_log: Some(path.clone()),
        ..ApiConfig::default()
    };
    let srv = TestServer::spawn(config).await;
    let client = reqwest::Client::new();

    let mut cart_ids = Vec::new();
    for _ in 0..8 {
        let cart_id = create_cart(&client, &srv).await;
        client
            .post(srv.url(&format!("/carts/{cart_id}/items")))
            .json(&json!({ "product_id": "deck-004", "quantity": 2 }))
            .send()
            .await
            .unwrap();
        cart_ids.push(cart_id);
    }

    let checkouts = cart_ids.iter().map(|cart_id| {
        let client = client.clone();
        let url = srv.url(&format!("/carts/{cart_id}/checkout"));
        tokio::spawn(async move {
            client
                .post(url)
                .json(&valid_checkout())
                .send()
                .await
                .unwrap()
                .status()
        })
    });
    let handles: Vec<_> = checkouts.collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    let orders: serde_json::Value = client
        .get(srv.url("/orders"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(orders["count"], 8);

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 8);
}
