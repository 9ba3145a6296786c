mod common;

use std::time::Duration;

use common::Fixture;
use herfa_core::models::{CreateServiceRequest, RequestStatus};
use herfa_infrastructure::http::Method;
use serde_json::json;
use tokio::sync::mpsc;

fn request_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "client_id": 1,
        "worker_id": 2,
        "problem_description": "انقطاع الكهرباء في المطبخ",
        "status": status
    })
}

#[tokio::test]
async fn test_create_request() {
    let fx = Fixture::new();
    fx.transport
        .respond(Method::Post, "/requests", 201, request_json(7, "pending"));

    let created = fx
        .herfa
        .requests()
        .create(&CreateServiceRequest {
            worker_id: 2,
            problem_description: "انقطاع الكهرباء في المطبخ".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created.status, RequestStatus::Pending);
    assert_eq!(
        fx.transport.last_request().unwrap().json(),
        Some(&json!({"worker_id": 2, "problem_description": "انقطاع الكهرباء في المطبخ"}))
    );
}

#[tokio::test]
async fn test_status_transitions_send_status_body() {
    let fx = Fixture::new();
    fx.transport.respond(
        Method::Patch,
        "/requests/7/status",
        200,
        request_json(7, "accepted"),
    );

    fx.herfa.requests().accept(7).await.unwrap();
    assert_eq!(
        fx.transport.last_request().unwrap().json(),
        Some(&json!({"status": "accepted"}))
    );

    fx.herfa.requests().reject(7, "مشغول هذا الأسبوع").await.unwrap();
    assert_eq!(
        fx.transport.last_request().unwrap().json(),
        Some(&json!({"status": "rejected", "rejected_reason": "مشغول هذا الأسبوع"}))
    );

    fx.herfa.requests().cancel(7).await.unwrap();
    assert_eq!(
        fx.transport.last_request().unwrap().json(),
        Some(&json!({"status": "cancelled"}))
    );
}

#[tokio::test(start_paused = true)]
async fn test_poll_delivers_updates_until_stopped() {
    let fx = Fixture::new();
    fx.transport
        .respond(Method::Get, "/requests/7", 200, request_json(7, "pending"));
    fx.transport
        .respond(Method::Get, "/requests/7", 200, request_json(7, "accepted"));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = fx
        .herfa
        .requests()
        .poll_status_every(7, Duration::from_secs(15), move |request| {
            let _ = tx.send(request.status);
        });

    assert_eq!(rx.recv().await, Some(RequestStatus::Pending));
    assert_eq!(rx.recv().await, Some(RequestStatus::Accepted));

    handle.stop();
    tokio::time::sleep(Duration::from_secs(60)).await;

    assert!(handle.is_stopped());
    assert_eq!(fx.transport.calls_to(Method::Get, "/requests/7"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_poll_survives_errors() {
    let fx = Fixture::new();
    fx.transport
        .respond(Method::Get, "/requests/8", 500, json!({"message": "boom"}));
    fx.transport
        .respond(Method::Get, "/requests/8", 200, request_json(8, "completed"));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = fx
        .herfa
        .requests()
        .poll_status_every(8, Duration::from_secs(15), move |request| {
            let _ = tx.send(request.status);
        });

    assert_eq!(rx.recv().await, Some(RequestStatus::Completed));
    assert_eq!(fx.transport.calls_to(Method::Get, "/requests/8"), 2);
    handle.join().await;
}

#[tokio::test(start_paused = true)]
async fn test_first_poll_waits_one_interval() {
    let fx = Fixture::new();
    fx.transport
        .respond(Method::Get, "/requests/9", 200, request_json(9, "pending"));

    let _handle = fx
        .herfa
        .requests()
        .poll_status_every(9, Duration::from_secs(15), |_| {});

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(fx.transport.call_count(), 0);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(fx.transport.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_zero_interval_still_polls() {
    let fx = Fixture::new();
    fx.transport
        .respond(Method::Get, "/requests/10", 200, request_json(10, "accepted"));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = fx
        .herfa
        .requests()
        .poll_status_every(10, Duration::ZERO, move |request| {
            let _ = tx.send(request.status);
        });

    assert_eq!(rx.recv().await, Some(RequestStatus::Accepted));
    assert_eq!(rx.recv().await, Some(RequestStatus::Accepted));
    handle.join().await;
}
