#[tokio::main]
async fn main() {
    if let Err(e) = feedback_be::start_server().await {
        tracing::error!("Feedback server stopped: {}", e);
        eprintln!("feedback_be: {e}");
        std::process::exit(1);
    }
}
