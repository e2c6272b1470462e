mod common;

use common::{broken_app, memory_app};
use feedback_be::{
    client::{
        ClientError, FeedbackApi, FeedbackApp, FeedbackClient,
        state::{LOAD_FAILED_MESSAGE, SUBMIT_FAILED_MESSAGE},
    },
    models::{NewFeedback, Rating},
};
use reqwest::StatusCode;

async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{address}")
}

fn candidate(name: &str, message: &str, rating: i64) -> NewFeedback {
    NewFeedback {
        customer_name: name.to_string(),
        message: message.to_string(),
        rating: Rating::new(rating).unwrap(),
    }
}

#[tokio::test]
async fn test_client_submit_and_list() {
    let client = FeedbackClient::new(serve(memory_app()).await);

    let confirmation = client
        .submit(&candidate("Alice", "Great service", 5))
        .await
        .unwrap();
    assert_eq!(confirmation, "Feedback received");

    let listed = client.list(None).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].customer_name, "Alice");
    assert_eq!(listed[0].rating.value(), 5);
}

#[tokio::test]
async fn test_client_sends_filter() {
    let client = FeedbackClient::new(serve(memory_app()).await);
    for (name, rating) in [("a", 1), ("b", 2), ("c", 2), ("d", 3)] {
        client.submit(&candidate(name, "m", rating)).await.unwrap();
    }

    let listed = client.list(Some(Rating::new(2).unwrap())).await.unwrap();
    let names: Vec<_> = listed.iter().map(|f| f.customer_name.as_str()).collect();
    assert_eq!(names, vec!["c", "b"]);
}

#[tokio::test]
async fn test_client_reports_server_validation_message() {
    let client = FeedbackClient::new(serve(memory_app()).await);

    let err = client
        .submit(&candidate("Bob", "   ", 3))
        .await
        .unwrap_err();
    match &err {
        ClientError::Rejected { status, .. } => {
            assert_eq!(*status, StatusCode::UNPROCESSABLE_ENTITY)
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.server_message(), Some("The message field is required."));
}

#[tokio::test]
async fn test_app_flow_against_server() {
    let base_url = serve(memory_app()).await;
    let mut app = FeedbackApp::new(FeedbackClient::new(base_url));
    app.mount().await;
    assert!(app.state.feedbacks.is_empty());
    assert!(app.state.error.is_none());

    app.state.set_customer_name("Alice");
    app.state.set_message("Great service");
    app.state.set_rating(Rating::new(5).unwrap());
    assert!(app.submit().await);
    assert_eq!(app.state.feedbacks[0].customer_name, "Alice");
    assert_eq!(app.state.form.rating.value(), 5);

    app.state.set_customer_name("Carol");
    app.state.set_message("Slow");
    app.state.set_rating(Rating::new(2).unwrap());
    assert!(app.submit().await);
    assert_eq!(app.state.feedbacks.len(), 2);

    app.change_filter(Some(Rating::new(5).unwrap())).await;
    assert_eq!(app.state.feedbacks.len(), 1);
    assert_eq!(app.state.feedbacks[0].customer_name, "Alice");
}

#[tokio::test]
async fn test_app_surfaces_store_failure() {
    let base_url = serve(broken_app()).await;
    let mut app = FeedbackApp::new(FeedbackClient::new(base_url));

    app.mount().await;
    assert_eq!(app.state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));

    app.state.set_customer_name("Alice");
    app.state.set_message("Great service");
    assert!(!app.submit().await);
    assert_eq!(app.state.error.as_deref(), Some("Failed to save feedback"));
    assert_eq!(app.state.form.customer_name, "Alice");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let mut app = FeedbackApp::new(FeedbackClient::new(format!("http://{address}")));
    app.state.set_customer_name("Alice");
    app.state.set_message("Great service");
    assert!(!app.submit().await);
    assert_eq!(app.state.error.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
}
