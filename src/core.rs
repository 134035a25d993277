use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::utils::get_path;

const INTENT_NAME_PATH: [&str; 3] = ["sessionState", "intent", "name"];
const ORDER_ID_SLOT_PATH: [&str; 6] = [
    "sessionState",
    "intent",
    "slots",
    "orderID",
    "value",
    "interpretedValue",
];
const UNKNOWN_ORDER_ID: &str = "unknown";

#[derive(Debug, Error, PartialEq)]
pub(crate) enum FulfillmentError {
    #[error("required field {0} is missing from the event")]
    MissingRequiredField(&'static str),
    #[error("unexpected shape at {path}: expected {expected}")]
    UnexpectedShape {
        path: String,
        expected: &'static str,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FulfillmentResponse {
    pub session_state: SessionState,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionState {
    pub dialog_action: DialogAction,
    pub intent: Intent,
}

#[derive(Debug, Serialize)]
pub(crate) struct DialogAction {
    #[serde(rename = "type")]
    pub action_type: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Intent {
    pub name: String,
    pub state: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Message {
    pub content_type: String,
    pub content: String,
}

impl FulfillmentResponse {
    /// Close response marking the intent fulfilled, carrying a single
    /// plain-text message.
    fn close_fulfilled(intent_name: &str, content: String) -> Self {
        Self {
            session_state: SessionState {
                dialog_action: DialogAction {
                    action_type: "Close".to_string(),
                },
                intent: Intent {
                    name: intent_name.to_string(),
                    state: "Fulfilled".to_string(),
                },
            },
            messages: vec![Message {
                content_type: "PlainText".to_string(),
                content,
            }],
        }
    }
}

/// Produces the close response for an order-confirmation fulfillment event.
///
/// The order id slot is optional at every level and falls back to
/// `"unknown"`; the intent name is required and its absence is an error.
/// Wrong-typed nodes along either chain are shape errors, never defaults.
pub(crate) fn fulfill(event: &Value) -> Result<FulfillmentResponse, FulfillmentError> {
    let order_id = match get_path(event, &ORDER_ID_SLOT_PATH)? {
        Some(Value::String(id)) => id.clone(),
        // The slot chain does not validate the terminal value; render
        // whatever is there.
        Some(other) => other.to_string(),
        None => UNKNOWN_ORDER_ID.to_string(),
    };

    let intent_name = get_path(event, &INTENT_NAME_PATH)?.ok_or(
        FulfillmentError::MissingRequiredField("sessionState.intent.name"),
    )?;
    let intent_name = intent_name
        .as_str()
        .ok_or_else(|| FulfillmentError::UnexpectedShape {
            path: "sessionState.intent.name".to_string(),
            expected: "a string",
        })?;

    Ok(FulfillmentResponse::close_fulfilled(
        intent_name,
        format!("Order #{} is confirmed and will arrive tomorrow.", order_id),
    ))
}
