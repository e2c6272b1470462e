use std::time::Instant;

use feedback_be::{
    client::{FeedbackApp, FeedbackClient, view},
    models::Rating,
};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "commands:
  name <text>        set your name
  message <text>     set your message
  rate <1-5>         pick a rating
  filter <all|1-5>   filter the list
  submit             send the feedback
  refresh            reload the list
  help               show this help
  quit               exit";

enum Command {
    Name(String),
    Message(String),
    Rate(Rating),
    Filter(Option<Rating>),
    Submit,
    Refresh,
    Help,
    Quit,
}

fn parse_rating(raw: &str) -> Result<Rating, String> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|value| Rating::new(value).ok())
        .ok_or_else(|| format!("'{}' is not a rating between 1 and 5", raw.trim()))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    match word {
        "name" => Ok(Command::Name(rest.to_string())),
        "message" => Ok(Command::Message(rest.to_string())),
        "rate" => parse_rating(rest).map(Command::Rate),
        "filter" if rest.trim() == "all" || rest.trim().is_empty() => Ok(Command::Filter(None)),
        "filter" => parse_rating(rest).map(|r| Command::Filter(Some(r))),
        "submit" => Ok(Command::Submit),
        "refresh" => Ok(Command::Refresh),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}', try 'help'")),
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let base_url = std::env::var("FEEDBACK_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:3001".to_string());

    let mut app = FeedbackApp::new(FeedbackClient::new(base_url));
    app.mount().await;
    println!("{}", view::render(&app.state));
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("failed to read input: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Name(name)) => app.state.set_customer_name(name),
            Ok(Command::Message(message)) => app.state.set_message(message),
            Ok(Command::Rate(rating)) => app.state.set_rating(rating),
            Ok(Command::Filter(filter)) => app.change_filter(filter).await,
            Ok(Command::Submit) => {
                app.submit().await;
            }
            Ok(Command::Refresh) => app.refresh().await,
            Ok(Command::Help) => {
                println!("{HELP}");
                continue;
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        }

        app.tick(Instant::now());
        println!("{}", view::render(&app.state));
    }
}
