use fcm_shared::{FCMClient, MessageSender, SendResult};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use push_relay::{handle_event, Config};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn handle_request(
    event: LambdaEvent<Value>,
    sender: &dyn MessageSender,
) -> Result<SendResult, Error> {
    let (payload, _context) = event.into_parts();
    Ok(handle_event(payload, sender).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    // CloudWatch stamps each line already
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json().without_time())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        endpoint = %config.fcm.endpoint(),
        credentials_path = %config.fcm.credentials_path.display(),
        "Starting push relay"
    );

    let client = FCMClient::from_config(config.fcm);
    let client = &client;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(event, client).await
    }))
    .await
}
