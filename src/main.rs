use std::sync::Arc;
use aws_lambda_events::s3::S3Event;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{info, debug};
use tracing_subscriber::EnvFilter;
use upload_processor::{
    application::upload_processor::UploadProcessor,
    config::{self, Config},
    infrastructure::{
        dynamodb::data_repo::DynamoRecordRepository,
        s3_adapter::S3Adapter,
        sns_adapter::SnsNotifier,
    },
    lambda_handler::handler,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing without timestamps
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("upload_processor=debug".parse()?)
            .add_directive("aws_sdk=warn".parse()?))
        .with_target(false)
        .without_time()
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting upload processor");

    let config = Config::from_env()?;

    let aws_config = config::load_aws_config().await;
    debug!("AWS region: {:?}", aws_config.region());

    let processor = Arc::new(UploadProcessor::new(
        Arc::new(S3Adapter::new(config::s3_client(&aws_config))),
        Arc::new(DynamoRecordRepository::new(aws_sdk_dynamodb::Client::new(&aws_config))),
        Arc::new(SnsNotifier::new(aws_sdk_sns::Client::new(&aws_config))),
        config,
    ));
    debug!("AWS clients initialized");

    run(service_fn(move |event: LambdaEvent<S3Event>| {
        let processor = processor.clone();
        async move { handler(&processor, event).await }
    }))
    .await
}
