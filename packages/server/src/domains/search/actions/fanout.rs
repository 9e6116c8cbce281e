//! Running one provider call under its timeout.

use std::future::Future;
use std::time::Duration;

use crate::domains::search::models::{Provider, SourceReport};
use crate::kernel::ProviderError;

/// What one provider contributed to a request.
pub(super) struct Outcome<T> {
    pub value: T,
    pub report: SourceReport,
    pub warning: Option<String>,
}

/// Await `call` (None when the provider is disabled) for at most `timeout`.
/// Failures become an empty value plus a report; they never propagate.
pub(super) async fn run_provider<T, F>(
    provider: Provider,
    timeout: Duration,
    call: Option<F>,
    count: fn(&T) -> usize,
) -> Outcome<T>
where
    T: Default,
    F: Future<Output = Result<T, ProviderError>>,
{
    let Some(call) = call else {
        return Outcome {
            value: T::default(),
            report: SourceReport::disabled(provider),
            warning: None,
        };
    };

    let result = match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::timed_out(provider, timeout)),
    };

    match result {
        Ok(value) => {
            let n = count(&value);
            Outcome {
                value,
                report: SourceReport::ok(provider, n),
                warning: None,
            }
        }
        Err(e) => {
            tracing::warn!(provider = %provider, error = %e, "Provider returned no results");
            Outcome {
                value: T::default(),
                report: e.report(),
                warning: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::search::models::SourceStatus;

    fn len(v: &Vec<u8>) -> usize {
        v.len()
    }

    #[tokio::test]
    async fn test_disabled_provider_is_not_awaited() {
        let call: Option<std::future::Ready<Result<Vec<u8>, ProviderError>>> = None;
        let outcome = run_provider(Provider::Yelp, Duration::from_secs(1), call, len).await;
        assert_eq!(outcome.report.status, SourceStatus::Disabled);
        assert!(outcome.warning.is_none());
    }

    #[tokio::test]
    async fn test_timeout_becomes_unavailable() {
        let call = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, ProviderError>(vec![1u8])
        };
        let outcome =
            run_provider(Provider::Instagram, Duration::from_millis(20), Some(call), len).await;
        assert!(outcome.value.is_empty());
        assert_eq!(outcome.report.status, SourceStatus::Unavailable);
        assert_eq!(
            outcome.warning.as_deref(),
            Some("Instagram unavailable: timed out after 0.0s")
        );
    }

    #[tokio::test]
    async fn test_success_counts_items() {
        let call = async { Ok::<_, ProviderError>(vec![1u8, 2, 3]) };
        let outcome = run_provider(Provider::Foursquare, Duration::from_secs(1), Some(call), len).await;
        assert_eq!(outcome.report, SourceReport::ok(Provider::Foursquare, 3));
    }
}
