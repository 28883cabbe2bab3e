//! Integration tests for toast actions and the support ticket dialog.
//!
//! Actions acknowledge the click and change nothing, so every test also
//! checks that the records are still there afterwards.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;

use retail_ops_integration_tests::TestServer;

/// POST an action and return `(status, HX-Trigger, body)`.
async fn action(server: &TestServer, path: &str) -> (StatusCode, Option<String>, String) {
    let resp = server.post(path).await.unwrap();
    let status = resp.status();
    let trigger = resp
        .headers()
        .get("HX-Trigger")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    (status, trigger, resp.text().await.unwrap())
}

#[tokio::test]
async fn test_header_buttons_return_toasts() {
    let server = TestServer::start().await;

    for (path, text) in [
        ("/live-view", "Real-time monitoring is now active."),
        ("/inventory/add", "Add product functionality activated"),
        ("/inventory/upload", "Products are not imported from CSV in this console."),
        ("/carts/refresh", "Cart data updated successfully."),
        ("/insights/export", "Downloading nutritional insights report..."),
        ("/transactions/report", "Transaction report downloaded"),
        ("/analytics/refresh", "Live analytics updated successfully"),
        ("/alerts/refresh", "Stock levels refreshed"),
        ("/users", "Add user functionality activated"),
        ("/support/tools/escalate", "Ticket escalated to technical support"),
    ] {
        let (status, trigger, body) = action(&server, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(trigger.as_deref(), Some("toast"), "{path}");
        assert!(body.contains(text), "{path}");
        assert!(body.contains("toast-default"), "{path}");
    }
}

#[tokio::test]
async fn test_row_actions_name_their_record() {
    let server = TestServer::start().await;

    for (path, text) in [
        ("/inventory/WM002/view", "Viewing details for Whole Milk - 1 Gallon (WM002)"),
        ("/inventory/WM004/edit", "Editing Greek Yogurt - Plain"),
        ("/carts/CART-247/call", "Calling Sarah Johnson..."),
        ("/carts/cart-248/message", "Response sent to customer."),
        ("/transactions/TXN001/view", "Viewing details for TXN001"),
        ("/analytics/products/P002/view", "Viewing detailed analytics for P002"),
        ("/alerts/P004/reorder", "Reorder request sent for item P004"),
        ("/users/1/view", "Viewing details for user 1"),
    ] {
        let (status, _, body) = action(&server, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains(text), "{path}");
    }
}

#[tokio::test]
async fn test_delete_actions_are_destructive_and_change_nothing() {
    let server = TestServer::start().await;

    let (status, _, body) = action(&server, "/users/2/delete").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("toast-destructive"));
    assert!(body.contains("User 2 deleted"));

    let (status, _, body) = action(&server, "/inventory/WM001/delete").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("toast-destructive"));

    let users = server.get("/users").await.unwrap().text().await.unwrap();
    assert!(users.contains("Sarah Staff"));
    let inventory = server.get("/inventory").await.unwrap().text().await.unwrap();
    assert!(inventory.contains("Organic Bananas"));
}

#[tokio::test]
async fn test_unknown_records_and_verbs() {
    let server = TestServer::start().await;

    for path in [
        "/inventory/WM999/view",
        "/carts/CART-001/call",
        "/transactions/TXN999/view",
        "/analytics/products/P999/view",
        "/alerts/P999/resolve",
        "/users/42/edit",
    ] {
        let (status, trigger, _) = action(&server, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(trigger.is_none(), "{path}");
    }

    for path in [
        "/inventory/WM001/restock",
        "/inventory/import",
        "/carts/CART-247/email",
        "/alerts/P001/snooze",
        "/users/1/promote",
        "/analytics/forecast",
        "/support/tools/teleport",
    ] {
        let (status, _, _) = action(&server, path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
    }
}

#[tokio::test]
async fn test_ticket_dialog_and_reply() {
    let server = TestServer::start().await;

    let resp = server.get("/support/SUP-003").await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Ticket SUP-003"));
    assert!(body.contains("Transaction failed but amount deducted"));
    assert!(body.contains(r#"hx-post="/support/SUP-003/reply""#));

    let resp = server
        .client()
        .post(server.url("/support/SUP-003/reply"))
        .form(&[("message", "Refund issued")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.text()
            .await
            .unwrap()
            .contains("Response sent to Emma Davis on SUP-003.")
    );

    let resp = server
        .client()
        .post(server.url("/support/SUP-003/reply"))
        .form(&[("message", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = server.get("/support/SUP-999").await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
