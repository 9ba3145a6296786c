mod common;

use common::Fixture;
use herfa_core::upload::UploadFile;
use herfa_infrastructure::http::Method;
use herfa_infrastructure::testing::multipart_fields;
use serde_json::json;

fn image(name: &str) -> UploadFile {
    UploadFile::new(name, "image/jpeg", vec![0xff, 0xd8])
}

#[tokio::test]
async fn test_upload_sends_description_only_when_given() {
    let fx = Fixture::new();
    fx.transport.respond(
        Method::Post,
        "/worker-portfolio/upload/3",
        201,
        json!({"id": 1, "worker_id": 3, "image_url": "/uploads/portfolio/1.jpg"}),
    );

    fx.herfa
        .portfolio()
        .upload_image(3, image("a.jpg"), Some("تأسيس كهرباء"))
        .await
        .unwrap();
    let with_description = fx.transport.last_request().unwrap();
    assert_eq!(
        multipart_fields(&with_description),
        vec![("description", "تأسيس كهرباء")]
    );

    fx.herfa
        .portfolio()
        .upload_image(3, image("b.jpg"), Some(""))
        .await
        .unwrap();
    assert!(multipart_fields(&fx.transport.last_request().unwrap()).is_empty());
}

#[tokio::test]
async fn test_upload_many_is_all_or_error() {
    let fx = Fixture::new();
    fx.transport.respond(
        Method::Post,
        "/worker-portfolio/upload/3",
        201,
        json!({"id": 1, "worker_id": 3, "image_url": "/uploads/portfolio/1.jpg"}),
    );

    let items = fx
        .herfa
        .portfolio()
        .upload_many(3, vec![image("a.jpg"), image("b.jpg")], &["الأولى".to_string()])
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(fx.transport.calls_to(Method::Post, "/worker-portfolio/upload/3"), 2);

    let fx = Fixture::new();
    fx.transport.respond(
        Method::Post,
        "/worker-portfolio/upload/4",
        400,
        json!({"message": "نوع الملف غير مدعوم"}),
    );
    let err = fx
        .herfa
        .portfolio()
        .upload_many(4, vec![image("a.jpg"), image("b.jpg")], &[])
        .await
        .unwrap_err();
    assert!(err.is_validation_error());
}

#[test]
fn test_image_url() {
    let fx = Fixture::new();
    let portfolio = fx.herfa.portfolio();
    assert_eq!(
        portfolio.image_url(Some("/uploads/portfolio/1.jpg")).as_deref(),
        Some("http://localhost:3000/uploads/portfolio/1.jpg")
    );
    assert_eq!(portfolio.image_url(None), None);
}
