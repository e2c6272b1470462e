use std::fmt::Write;

use chrono::{DateTime, Local, Utc};

use crate::{
    client::state::UiState,
    models::{Feedback, Rating},
};

pub const EMPTY_LIST_MESSAGE: &str = "No feedback yet. Be the first to submit!";

pub fn format_date(created_at: DateTime<Utc>) -> String {
    created_at
        .with_timezone(&Local)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}

pub fn filter_label(filter: Option<Rating>) -> String {
    match filter {
        Some(rating) => format!("{} {}", rating, rating.emoji()),
        None => "All Ratings".to_string(),
    }
}

fn render_rating_scale(out: &mut String, selected: Rating) {
    let scale: Vec<String> = Rating::all()
        .map(|rating| {
            if rating == selected {
                format!("[{}]", rating.emoji())
            } else {
                format!(" {} ", rating.emoji())
            }
        })
        .collect();
    let _ = writeln!(out, "  {}", scale.join(""));
}

fn render_item(out: &mut String, feedback: &Feedback) {
    let _ = writeln!(out, "{}  {}", feedback.customer_name, feedback.rating.emoji());
    let _ = writeln!(out, "  {}", feedback.message);
    let _ = writeln!(out, "  {}", format_date(feedback.created_at));
}

pub fn render(state: &UiState) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        let _ = writeln!(out, "! {error}");
    }
    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "* {}", notice.text);
    }

    let _ = writeln!(out, "== Submit Feedback ==");
    let _ = writeln!(out, "Name *: {}", state.form.customer_name);
    let _ = writeln!(out, "Message *: {}", state.form.message);
    let _ = writeln!(
        out,
        "How happy are you? {}",
        state.form.rating.emoji()
    );
    render_rating_scale(&mut out, state.form.rating);
    let _ = writeln!(
        out,
        "{}",
        if state.loading { "[Submitting...]" } else { "[Submit]" }
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "== Recent Feedback ({}) ==", filter_label(state.filter));

    if state.loading && state.feedbacks.is_empty() {
        let _ = writeln!(out, "Loading...");
    } else if state.feedbacks.is_empty() {
        let _ = writeln!(out, "{EMPTY_LIST_MESSAGE}");
    } else {
        for feedback in &state.feedbacks {
            render_item(&mut out, feedback);
        }
    }

    out
}
