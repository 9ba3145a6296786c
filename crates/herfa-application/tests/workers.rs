mod common;

use common::Fixture;
use herfa_core::models::{Area, WorkerSearchParams};
use herfa_core::upload::UploadFile;
use herfa_infrastructure::http::Method;
use herfa_infrastructure::testing::{multipart_fields, multipart_files};
use serde_json::json;

fn page_json() -> serde_json::Value {
    json!({
        "data": [
            {"id": 1, "profession_id": 3, "average_rating": 4.8, "is_available": true},
            {"id": 2, "profession_id": 3, "average_rating": 4.1, "is_available": false}
        ],
        "meta": {"page": 2, "limit": 10, "total": 12, "totalPages": 2, "hasNext": false, "hasPrev": true}
    })
}

fn sorted_query(request: &herfa_infrastructure::http::ApiRequest) -> Vec<(String, String)> {
    let mut query = request.query.clone();
    query.sort();
    query
}

#[tokio::test]
async fn test_search_sends_exactly_the_set_params() {
    let fx = Fixture::new();
    fx.transport.respond(Method::Get, "/workers", 200, page_json());

    let params = WorkerSearchParams {
        profession_id: Some(3),
        min_rating: Some(4.0),
        page: Some(2),
        limit: Some(10),
        ..Default::default()
    };
    let page = fx.herfa.workers().search(&params).await.unwrap();

    assert_eq!(fx.transport.call_count(), 1);
    let request = fx.transport.last_request().unwrap();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/workers");
    assert_eq!(
        sorted_query(&request),
        vec![
            ("limit".to_string(), "10".to_string()),
            ("min_rating".to_string(), "4".to_string()),
            ("page".to_string(), "2".to_string()),
            ("profession_id".to_string(), "3".to_string()),
        ]
    );

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].id, 1);
    assert_eq!(page.meta.total, 12);
    assert_eq!(page.meta.total_pages, 2);
    assert!(page.meta.has_prev);
}

#[tokio::test]
async fn test_top_rated_preset_query() {
    let fx = Fixture::new();
    fx.transport.respond(Method::Get, "/workers", 200, page_json());

    fx.herfa.workers().top_rated(5).await.unwrap();

    let request = fx.transport.last_request().unwrap();
    assert_eq!(
        sorted_query(&request),
        vec![
            ("limit".to_string(), "5".to_string()),
            ("min_rating".to_string(), "4".to_string()),
            ("order".to_string(), "DESC".to_string()),
            ("sort".to_string(), "rating".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_by_area_and_available() {
    let fx = Fixture::new();
    fx.transport.respond(Method::Get, "/workers", 200, page_json());

    fx.herfa
        .workers()
        .by_area(Area::LeftBank, WorkerSearchParams::default().available_only())
        .await
        .unwrap();

    let request = fx.transport.last_request().unwrap();
    assert_eq!(request.query_value("area"), Some("الساحل الأيسر"));
    assert_eq!(request.query_value("is_available"), Some("true"));
}

#[tokio::test]
async fn test_upload_profile_image_uses_image_field() {
    let fx = Fixture::new();
    fx.transport.respond(
        Method::Post,
        "/workers/upload-profile-image/9",
        201,
        json!({"id": 9, "profile_image": "/uploads/profiles/9.jpg"}),
    );

    let image = UploadFile::new("me.jpg", "image/jpeg", vec![1, 2, 3]);
    let worker = fx
        .herfa
        .workers()
        .upload_profile_image(9, image.clone())
        .await
        .unwrap();

    let request = fx.transport.last_request().unwrap();
    assert_eq!(multipart_files(&request), vec![("image", &image)]);
    assert!(multipart_fields(&request).is_empty());
    assert_eq!(
        fx.herfa
            .workers()
            .profile_image_url(worker.profile_image.as_deref())
            .as_deref(),
        Some("http://localhost:3000/uploads/profiles/9.jpg")
    );
}

#[tokio::test]
async fn test_delete_accepts_message_body() {
    let fx = Fixture::new();
    fx.transport
        .respond(Method::Delete, "/workers/4", 200, json!({"message": "تم الحذف"}));

    fx.herfa.workers().delete(4).await.unwrap();
    assert_eq!(fx.transport.calls_to(Method::Delete, "/workers/4"), 1);
}

#[tokio::test]
async fn test_search_latest_keeps_sole_result_and_propagates_errors() {
    let fx = Fixture::new();
    fx.transport.respond(Method::Get, "/workers", 200, page_json());
    let guard = herfa_core::latest::LatestRequest::new();

    let page = fx
        .herfa
        .workers()
        .search_latest(&guard, &WorkerSearchParams::default())
        .await
        .unwrap();
    assert_eq!(page.map(|p| p.data.len()), Some(2));

    let fx = Fixture::new();
    fx.transport
        .respond(Method::Get, "/workers", 500, json!({"message": "boom"}));
    let err = fx
        .herfa
        .workers()
        .search_latest(&guard, &WorkerSearchParams::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
}

/// Holds the first request until `release` is notified; later requests
/// answer at once. Each answer carries `n` workers for the n-th request.
#[derive(Default)]
struct GatedTransport {
    calls: std::sync::atomic::AtomicUsize,
    first_sent: tokio::sync::Notify,
    release: tokio::sync::Notify,
}

#[async_trait::async_trait]
impl herfa_infrastructure::HttpTransport for GatedTransport {
    async fn send(
        &self,
        _request: herfa_infrastructure::http::ApiRequest,
    ) -> herfa_core::Result<herfa_infrastructure::http::ApiResponse> {
        let n = self
            .calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            + 1;
        if n == 1 {
            self.first_sent.notify_one();
            self.release.notified().await;
        }
        let data: Vec<_> = (1..=n).map(|id| json!({"id": id})).collect();
        let body = json!({
            "data": data,
            "meta": {"page": 1, "limit": 10, "total": n, "totalPages": 1, "hasNext": false, "hasPrev": false}
        });
        Ok(herfa_infrastructure::http::ApiResponse::new(200, body.to_string()))
    }
}

#[tokio::test]
async fn test_search_latest_drops_older_search_that_finishes_last() {
    use std::sync::Arc;

    use herfa_application::Herfa;
    use herfa_core::latest::LatestRequest;
    use herfa_infrastructure::ClientConfig;

    let transport = Arc::new(GatedTransport::default());
    let herfa = Herfa::builder(ClientConfig::default())
        .transport(transport.clone())
        .build()
        .unwrap();
    let guard = LatestRequest::new();
    let params = WorkerSearchParams::default();

    let older = herfa.workers().search_latest(&guard, &params);
    let newer = async {
        transport.first_sent.notified().await;
        let page = herfa.workers().search_latest(&guard, &params).await;
        transport.release.notify_one();
        page
    };
    let (older, newer) = tokio::join!(older, newer);

    assert_eq!(older.unwrap(), None);
    let newer = newer.unwrap().expect("latest search is kept");
    assert_eq!(newer.data.len(), 2);
    assert_eq!(transport.calls.load(std::sync::atomic::Ordering::SeqCst), 2);
}
