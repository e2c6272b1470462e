use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
    NewFeedback, Rating,
    feedback::MAX_CUSTOMER_NAME_CHARS,
};

/// Raw submission body. Fields stay untyped so that a wrong JSON type is
/// reported as a field error instead of a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackInput {
    #[serde(default)]
    pub customer_name: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub rating: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// First message followed by how many more there are,
    /// e.g. `The message field is required. (and 1 more error)`.
    pub fn summary(&self) -> String {
        let Some(first) = self.0.values().flat_map(|msgs| msgs.iter()).next() else {
            return "The given data was invalid.".to_string();
        };

        match self.count() - 1 {
            0 => first.clone(),
            1 => format!("{first} (and 1 more error)"),
            n => format!("{first} (and {n} more errors)"),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

fn label(field: &str) -> String {
    field.replace('_', " ")
}

fn required_string(
    field: &'static str,
    value: Option<&Value>,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => {
            errors.add(field, format!("The {} field is required.", label(field)));
            None
        }
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                errors.add(field, format!("The {} field is required.", label(field)));
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(_) => {
            errors.add(field, format!("The {} field must be a string.", label(field)));
            None
        }
    }
}

fn required_rating(value: Option<&Value>, errors: &mut ValidationErrors) -> Option<Rating> {
    let parsed = match value {
        None | Some(Value::Null) => {
            errors.add("rating", "The rating field is required.");
            return None;
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.add("rating", "The rating field is required.");
            return None;
        }
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    let Some(value) = parsed else {
        errors.add("rating", "The rating field must be an integer.");
        return None;
    };

    match Rating::new(value) {
        Ok(rating) => Some(rating),
        Err(_) => {
            errors.add(
                "rating",
                format!(
                    "The rating field must be between {} and {}.",
                    Rating::MIN,
                    Rating::MAX
                ),
            );
            None
        }
    }
}

impl FeedbackInput {
    /// Applies the full server-side rule set. String fields come back trimmed.
    pub fn validate(&self) -> Result<NewFeedback, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let customer_name = required_string("customer_name", self.customer_name.as_ref(), &mut errors)
            .and_then(|name| {
                if name.chars().count() > MAX_CUSTOMER_NAME_CHARS {
                    errors.add(
                        "customer_name",
                        format!(
                            "The customer name field must not be greater than {MAX_CUSTOMER_NAME_CHARS} characters."
                        ),
                    );
                    None
                } else {
                    Some(name)
                }
            });
        let message = required_string("message", self.message.as_ref(), &mut errors);
        let rating = required_rating(self.rating.as_ref(), &mut errors);

        match (customer_name, message, rating) {
            (Some(customer_name), Some(message), Some(rating)) if errors.is_empty() => {
                Ok(NewFeedback {
                    customer_name,
                    message,
                    rating,
                })
            }
            _ => Err(errors),
        }
    }
}
