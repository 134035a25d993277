use lambda_runtime::{tracing, Error, LambdaEvent};
use serde_json::Value;

use crate::core::{fulfill, FulfillmentResponse};

pub(crate) async fn function_handler(
    event: LambdaEvent<Value>,
) -> Result<FulfillmentResponse, Error> {
    tracing::info!("Received fulfillment event: {:?}", event.payload);

    let response = fulfill(&event.payload)?;

    tracing::info!(
        "Closing intent {} as fulfilled",
        response.session_state.intent.name
    );

    Ok(response)
}
