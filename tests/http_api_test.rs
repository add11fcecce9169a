use pet_meal::config::Config;
use pet_meal::http::{self, AppState};
use pet_meal::lifecycle::PetMealSystem;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serves the full router on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let config = Config::default();
    let system = PetMealSystem::new(&config);
    let app = http::router(AppState::from_system(&system), &config);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // Keeps the actors alive for as long as the server runs
        let _system = system;
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}")
}

async fn post(client: &reqwest::Client, url: String, body: Value) -> (StatusCode, Value) {
    let response = client.post(url).json(&body).send().await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

async fn seed_customer(client: &reqwest::Client, base: &str) -> u64 {
    let (status, body) = post(
        client,
        format!("{base}/customers"),
        json!({"name": "Mina", "mobile_no": "0987654321", "email": "mina@example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_u64().unwrap()
}

#[tokio::test]
async fn test_create_returns_201_with_envelope() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = post(
        &client,
        format!("{base}/menus"),
        json!({"name": "Salmon Meal", "ingredients": ["Salmon", "Rice"], "price": 12.5}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Salmon Meal");
    assert_eq!(body["data"]["ingredients"], json!(["Salmon", "Rice"]));
    assert!(body["message"].is_string());

    // A null list is read as empty
    let (status, body) = post(
        &client,
        format!("{base}/menus"),
        json!({"name": "Plain Rice", "ingredients": null}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["ingredients"], json!([]));

    let listed: Value = client.get(format!("{base}/menus")).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed["data"].as_array().unwrap().len(), 2);

    let customer_id = seed_customer(&client, &base).await;
    let (status, body) = post(
        &client,
        format!("{base}/customers/{customer_id}/pets"),
        json!({"name": "Coffee", "allergies": null}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["allergies"], json!([]));
}

#[tokio::test]
async fn test_allergy_conflict_is_409_with_details() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let customer_id = seed_customer(&client, &base).await;
    let (status, pet) = post(
        &client,
        format!("{base}/customers/{customer_id}/pets"),
        json!({"name": "Coffee", "allergies": ["Salmon", "Dairy"]}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{pet}");
    let pet_id = pet["data"]["id"].as_u64().unwrap();

    let (_, menu) = post(
        &client,
        format!("{base}/menus"),
        json!({"name": "Salmon Meal", "ingredients": ["Salmon", "Sweet Potato"]}),
    )
    .await;
    let menu_id = menu["data"]["id"].as_u64().unwrap();

    // Dry run first: nothing is placed
    let (status, check) = post(
        &client,
        format!("{base}/orders/check"),
        json!({"menu_id": menu_id, "pet_id": pet_id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(check["data"]["hasConflict"], true);
    assert_eq!(check["data"]["conflictingTerms"], json!(["Salmon"]));

    let (status, body) = post(
        &client,
        format!("{base}/orders"),
        json!({"customer_id": customer_id, "menu_id": menu_id, "pet_id": pet_id, "plan": "7 Days"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Coffee") && message.contains("Salmon"), "{message}");
    assert_eq!(body["details"]["pet_name"], "Coffee");
    assert_eq!(body["details"]["conflicting_terms"], json!(["Salmon"]));

    let orders: Value = client.get(format!("{base}/orders")).send().await.unwrap().json().await.unwrap();
    assert!(orders["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_field_is_400() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = post(
        &client,
        format!("{base}/customers"),
        json!({
            "name": "Mina",
            "mobile_no": "0987654321",
            "email": "mina@example.com",
            "is_admin": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    // Schema is fine but the value is not
    let (status, body) = post(
        &client,
        format!("{base}/customers"),
        json!({"name": "Mina", "mobile_no": "12", "email": "mina@example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("mobile_no"));
}

#[tokio::test]
async fn test_unknown_id_is_404() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for path in ["/customers/42", "/pets/42", "/menus/42", "/orders/42", "/customers/42/pets"] {
        let response = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false, "{path}");
    }

    let response = client.delete(format!("{base}/orders/42")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_order_lifecycle_over_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let customer_id = seed_customer(&client, &base).await;
    let (_, menu) = post(
        &client,
        format!("{base}/menus"),
        json!({"name": "Chicken Meal", "ingredients": ["Chicken"]}),
    )
    .await;
    let menu_id = menu["data"]["id"].as_u64().unwrap();

    let (status, placed) = post(
        &client,
        format!("{base}/orders"),
        json!({"customer_id": customer_id, "menu_id": menu_id, "plan": "14 Days", "quantity": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{placed}");
    assert_eq!(placed["data"]["price"], 1398);
    assert_eq!(placed["data"]["status"], "pending");
    let order_id = placed["data"]["id"].as_u64().unwrap();

    let response = client
        .put(format!("{base}/orders/{order_id}/status"))
        .json(&json!({"status": "completed"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .put(format!("{base}/orders/{order_id}/status"))
        .json(&json!({"status": "pending"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = client
        .delete(format!("{base}/orders/{order_id}?reason=Moving%20abroad"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["status"], "cancelled");
    assert_eq!(body["data"]["cancellation_reason"], "Moving abroad");

    let summary: Value = client
        .get(format!("{base}/orders/summary"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary["data"]["total"], 1);
    assert_eq!(summary["data"]["cancelled"], 1);

    let filtered: Value = client
        .get(format!("{base}/orders?customer_id={customer_id}&status=cancelled"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(filtered["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_email_or_mobile_is_409() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    seed_customer(&client, &base).await;
    let (status, body) = post(
        &client,
        format!("{base}/customers"),
        json!({"name": "Other", "mobile_no": "0123456789", "email": "MINA@example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);

    let (status, body) = post(
        &client,
        format!("{base}/customers"),
        json!({"name": "Other", "mobile_no": "0987654321", "email": "other@example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("0987654321"), "{body}");
}
