//! The mutation executor: performs the actual network call and classifies
//! the outcome.
//!
//! Contract (shared with the backend): any 2xx is success; any other
//! response is a failure whose JSON body may carry a `message` field to be
//! shown verbatim. Transport errors are logged and mapped to the generic
//! fallback. There is no timeout, retry or idempotency key here —
//! re-entrancy is prevented by the form's `submitting` guard instead.

use common::requests::ErrorMessage;
use gloo_net::http::{Request, Response};

use super::schema::ResourceSchema;

pub const GENERIC_FAILURE: &str = "Request failed. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Success,
    Failure(String),
}

pub enum Method {
    Post,
    Put,
    Delete,
}

/// Runs one mutation against the API and classifies the response.
pub async fn execute(method: Method, url: &str, body: Option<&serde_json::Value>) -> MutationOutcome {
    let builder = match method {
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };

    let sent = match body {
        Some(json) => match builder.json(json) {
            Ok(request) => request.send().await,
            Err(err) => {
                gloo_console::error!("failed to encode request body:", err.to_string());
                return MutationOutcome::Failure(GENERIC_FAILURE.to_string());
            }
        },
        None => builder.send().await,
    };

    match sent {
        Ok(response) if is_success(&response) => MutationOutcome::Success,
        Ok(response) => MutationOutcome::Failure(server_message(response).await),
        Err(err) => {
            gloo_console::error!("mutation transport failure:", err.to_string());
            MutationOutcome::Failure(GENERIC_FAILURE.to_string())
        }
    }
}

/// Fetches the full collection for a resource and unwraps its envelope,
/// `{ "<plural>": [...] }`.
pub async fn load_collection<S: ResourceSchema>() -> Result<Vec<S::Record>, String> {
    let response = Request::get(S::BASE_PATH)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !is_success(&response) {
        return Err(format!("GET {} -> {}", S::BASE_PATH, response.status()));
    }
    let envelope: serde_json::Value = response.json().await.map_err(|err| err.to_string())?;
    let records = envelope
        .get(S::COLLECTION_KEY)
        .cloned()
        .ok_or_else(|| format!("missing \"{}\" key in response", S::COLLECTION_KEY))?;
    serde_json::from_value(records).map_err(|err| err.to_string())
}

fn is_success(response: &Response) -> bool {
    (200..300).contains(&response.status())
}

async fn server_message(response: Response) -> String {
    match response.json::<ErrorMessage>().await {
        Ok(ErrorMessage { message: Some(msg) }) if !msg.is_empty() => msg,
        _ => GENERIC_FAILURE.to_string(),
    }
}
