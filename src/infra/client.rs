use std::sync::Arc;

use arc_swap::ArcSwapOption;
use aws_sdk_sqs::config::Region;
use aws_sdk_sqs::Client as SqsClient;

struct CachedClient {
    region: Option<String>,
    client: SqsClient,
}

/// Hands out SQS clients bound to the requested region.
///
/// The client is built once and reused until a different region is requested, at which point it
/// is rebuilt and replaces the cached one. Two callers racing on a rebuild both build a client for
/// the same region and the last store wins.
pub struct SqsClientProvider {
    cached: ArcSwapOption<CachedClient>,
    endpoint_url: Option<String>,
}

impl SqsClientProvider {
    pub fn new(endpoint_url: Option<String>) -> Self {
        Self { cached: ArcSwapOption::empty(), endpoint_url }
    }

    pub async fn client(&self, region: Option<&str>) -> SqsClient {
        if let Some(cached) = self.cached.load_full() {
            if cached.region.as_deref() == region {
                return cached.client.clone();
            }
            tracing::info!("Region changed from {:?} to {:?}, rebuilding SQS client", cached.region, region);
        }

        let client = build_client(region, self.endpoint_url.as_deref()).await;
        let cached = CachedClient { region: region.map(ToOwned::to_owned), client: client.clone() };
        self.cached.store(Some(Arc::new(cached)));
        client
    }

    /// Region of the currently cached client, `None` when nothing has been built yet.
    #[cfg(test)]
    pub(crate) fn cached_region(&self) -> Option<Option<String>> {
        self.cached.load().as_ref().map(|cached| cached.region.clone())
    }
}

/// Loads the ambient AWS configuration and builds a client from it.
///
/// Missing credentials or region are only logged: the first call against the queue fails with
/// the SDK's own error.
async fn build_client(region: Option<&str>, endpoint_url: Option<&str>) -> SqsClient {
    let mut loader = aws_config::from_env();
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_owned()));
    }
    if let Some(endpoint_url) = endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    let shared_config = loader.load().await;

    if shared_config.credentials_provider().is_none() {
        tracing::warn!("No AWS credentials provider could be loaded");
    }
    if shared_config.region().is_none() {
        tracing::warn!("No AWS region configured");
    }

    SqsClient::new(&shared_config)
}
