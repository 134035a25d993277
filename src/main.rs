use event_handler::function_handler;
use lambda_runtime::{run, service_fn, tracing, Error};

mod core;
mod event_handler;
mod utils;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    run(service_fn(function_handler)).await
}
