//! kafka-wire probe: sends one request to a broker and prints the decoded response as JSON.
//!
//! Configured through the environment: KAFKA_WIRE_ADDR (default 127.0.0.1:9092),
//! KAFKA_WIRE_CLIENT_ID, KAFKA_WIRE_REQUEST (api-versions-v0 | api-versions-v3 |
//! fetch-v0) and KAFKA_WIRE_TOPIC for fetch-v0.

use kafka_wire::protocol::messages::{
    ApiVersionsRequestV0, ApiVersionsRequestV3, FetchPartitionV0, FetchRequestV0, FetchTopicV0,
};
use kafka_wire::{Client, ClientConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kafka_wire=info".parse()?))
        .init();

    let config = ClientConfig::from_env();
    let request = std::env::var("KAFKA_WIRE_REQUEST").unwrap_or_else(|_| "api-versions-v0".into());
    let mut client = Client::connect(config.clone()).await?;

    let json = match request.as_str() {
        "api-versions-v0" => {
            let response = client.send(&ApiVersionsRequestV0).await?;
            serde_json::to_string_pretty(&response)?
        }
        "api-versions-v3" => {
            let response = client
                .send(&ApiVersionsRequestV3 {
                    client_software_name: config.client_id.clone(),
                    client_software_version: env!("CARGO_PKG_VERSION").to_string(),
                    tagged_fields: Vec::new(),
                })
                .await?;
            serde_json::to_string_pretty(&response)?
        }
        "fetch-v0" => {
            let topic = std::env::var("KAFKA_WIRE_TOPIC").unwrap_or_else(|_| "test-topic".into());
            let response = client
                .send(&FetchRequestV0 {
                    replica_id: -1,
                    max_wait_ms: 3000,
                    min_bytes: 1,
                    topics: vec![FetchTopicV0 {
                        topic,
                        partitions: vec![FetchPartitionV0 {
                            partition: 0,
                            fetch_offset: 0,
                            partition_max_bytes: 10_000,
                        }],
                    }],
                })
                .await?;
            serde_json::to_string_pretty(&response)?
        }
        other => anyhow::bail!(
            "unknown KAFKA_WIRE_REQUEST {:?}; expected api-versions-v0, api-versions-v3 or fetch-v0",
            other
        ),
    };
    println!("{}", json);
    Ok(())
}
