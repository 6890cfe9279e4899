//! Habit API Client
//!
//! Thin gloo-net wrappers over the habits resource. One request per
//! user-initiated action, no retry, no deduplication; the bearer token comes
//! from the session guard so expired sessions never get here.

use std::collections::HashMap;

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde_json::Value;

use crate::models::Habit;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Field-keyed messages from a rejected create/update
    Validation(HashMap<String, String>),
    Status(u16),
    Network(String),
}

impl ApiError {
    fn network(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[derive(Serialize)]
struct CreateHabitBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct UpdateHabitBody<'a> {
    #[serde(rename = "editHabitName")]
    edit_habit_name: &'a str,
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a 4xx body onto the field-keyed error map the dialogs display.
/// Anything that is not a flat JSON object falls back to a form-level entry.
pub fn validation_errors(body: Value) -> HashMap<String, String> {
    match body {
        Value::Object(map) => map
            .into_iter()
            .map(|(field, message)| {
                let text = match message {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (field, text)
            })
            .collect(),
        other => HashMap::from([("form".to_string(), other.to_string())]),
    }
}

async fn reject(response: Response) -> ApiError {
    let status = response.status();
    if (400..500).contains(&status) {
        if let Ok(body) = response.json::<Value>().await {
            return ApiError::Validation(validation_errors(body));
        }
    }
    ApiError::Status(status)
}

pub async fn list_habits(token: &str) -> Result<Vec<Habit>, ApiError> {
    let response = Request::get("/habits")
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(ApiError::network)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response.json::<Vec<Habit>>().await.map_err(ApiError::network)
}

pub async fn create_habit(token: &str, name: &str) -> Result<Habit, ApiError> {
    let response = Request::post("/habits")
        .header("Authorization", &bearer(token))
        .json(&CreateHabitBody { name })
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;
    if !response.ok() {
        return Err(reject(response).await);
    }
    response.json::<Habit>().await.map_err(ApiError::network)
}

pub async fn update_habit(token: &str, id: &str, name: &str) -> Result<(), ApiError> {
    let response = Request::patch(&format!("/habits/{id}"))
        .header("Authorization", &bearer(token))
        .json(&UpdateHabitBody {
            edit_habit_name: name,
        })
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;
    if !response.ok() {
        return Err(reject(response).await);
    }
    Ok(())
}

pub async fn delete_habit(token: &str, id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&format!("/habits/{id}"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(ApiError::network)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

/// Marks the habit finished for today; the server increments the streak.
pub async fn finish_habit(token: &str, id: &str) -> Result<(), ApiError> {
    let response = Request::patch(&format!("/habits/finish/{id}"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(ApiError::network)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_bodies_become_field_keyed_maps() {
        let errors = validation_errors(json!({"name": "Name too short"}));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["name"], "Name too short");
    }

    #[test]
    fn non_string_messages_are_stringified() {
        let errors = validation_errors(json!({"name": ["too short", "taken"]}));
        assert_eq!(errors["name"], r#"["too short","taken"]"#);
    }

    #[test]
    fn non_object_bodies_fall_back_to_a_form_error() {
        let errors = validation_errors(json!("habit limit reached"));
        assert_eq!(errors["form"], "habit limit reached");
    }
}
