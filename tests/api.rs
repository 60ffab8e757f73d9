use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serial_test::serial;

use devicehub_console::api::client::{ApiClient, API_KEY_HEADER};
use devicehub_console::device::Device;

const TEST_API_KEY: &str = "console-test-key";

async fn device_list(request: HttpRequest) -> HttpResponse {
    if !key_matches(&request) {
        return unauthorized();
    }
    HttpResponse::Ok().json(serde_json::json!([
        {
            "id": "1",
            "number": "+551199999999",
            "push_name": "Ana",
            "business_name": "Ana Corp",
            "contacts": 5,
            "timestamp": "2024-08-01T00:00:00Z"
        },
        {
            "id": "2",
            "number": "+5511988887777",
            "push_name": "Rui",
            "business_name": "",
            "contacts": 0,
            "timestamp": "2024-08-02T00:00:00Z"
        }
    ]))
}

async fn connect(request: HttpRequest) -> HttpResponse {
    if !key_matches(&request) {
        return unauthorized();
    }
    HttpResponse::Ok().json(serde_json::json!({"qrCode": "iVBORw0KGgoAAAANSUhEUg=="}))
}

fn key_matches(request: &HttpRequest) -> bool {
    request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        == Some(TEST_API_KEY)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({"error": "Unauthorized"}))
}

async fn spawn_mock_api() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/device", web::get().to(device_list))
            .route("/connect", web::get().to(connect))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

#[actix_web::test]
#[serial]
async fn test_list_devices() {
    std::env::set_var("API_KEY_TOKEN", TEST_API_KEY);
    let base_url = spawn_mock_api().await;
    let client = ApiClient::with_base_url(base_url).unwrap();

    let devices = client.list_devices().await.unwrap();
    assert_eq!(
        devices,
        vec![
            Device {
                id: "1".to_string(),
                number: "+551199999999".to_string(),
                push_name: "Ana".to_string(),
                business_name: "Ana Corp".to_string(),
                contacts: 5,
            },
            Device {
                id: "2".to_string(),
                number: "+5511988887777".to_string(),
                push_name: "Rui".to_string(),
                business_name: String::new(),
                contacts: 0,
            },
        ]
    );

    std::env::remove_var("API_KEY_TOKEN");
}

#[actix_web::test]
#[serial]
async fn test_connect_returns_qr_code() {
    std::env::set_var("API_KEY_TOKEN", TEST_API_KEY);
    let base_url = spawn_mock_api().await;
    let client = ApiClient::with_base_url(base_url).unwrap();

    let response = client.connect().await.unwrap();
    assert_eq!(response.qr_code, "iVBORw0KGgoAAAANSUhEUg==");

    std::env::remove_var("API_KEY_TOKEN");
}

#[actix_web::test]
#[serial]
async fn test_requests_without_api_key_are_rejected() {
    std::env::remove_var("API_KEY_TOKEN");
    let base_url = spawn_mock_api().await;
    let client = ApiClient::with_base_url(base_url).unwrap();

    assert!(client.list_devices().await.is_err());
    assert!(client.connect().await.is_err());
}
