//! Read-through content proxy for the public site.
//!
//! Each public content endpoint performs a single bounded store query and
//! re-packages the result with a cache-control directive. A failed or
//! timed-out query never surfaces as an error status: the caller gets an
//! empty/null payload with a shorter freshness window, and the CDN in
//! front of the site keeps serving stale content in the meantime.
//!
//! Invariants:
//! - reads always answer HTTP 200, fresh or degraded
//! - one store attempt per request, no retries, no shared cache
//! - stale-while-revalidate is twice s-maxage; the degraded s-maxage is
//!   half the baseline

use std::future::Future;
use std::time::Duration;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;

/// Logical resources served by the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Services,
    Treatments,
    Settings,
}

impl Resource {
    /// Resource name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Services => "services",
            Resource::Treatments => "treatments",
            Resource::Settings => "settings",
        }
    }

    /// Freshness window advertised when the store query succeeds.
    pub fn baseline(&self) -> CachePolicy {
        match self {
            Resource::Services | Resource::Treatments => CachePolicy::new(120),
            Resource::Settings => CachePolicy::new(60),
        }
    }

    /// Reduced freshness window advertised on the degraded path.
    pub fn degraded(&self) -> CachePolicy {
        CachePolicy::new(self.baseline().s_maxage / 2)
    }

    /// Payload substituted when the store query fails: an empty list for
    /// list resources, null for the settings singleton.
    pub fn fallback_payload(&self) -> Value {
        match self {
            Resource::Services | Resource::Treatments => Value::Array(Vec::new()),
            Resource::Settings => Value::Null,
        }
    }
}

/// Cache-control directive attached to every proxy response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub s_maxage: u32,
}

impl CachePolicy {
    pub fn new(s_maxage: u32) -> Self {
        Self { s_maxage }
    }

    /// Window during which a stale response may still be served while a
    /// fresh one is fetched in the background.
    pub fn stale_while_revalidate(&self) -> u32 {
        self.s_maxage * 2
    }

    /// Render the `Cache-Control` header value.
    pub fn header_value(&self) -> String {
        format!(
            "public, s-maxage={}, stale-while-revalidate={}",
            self.s_maxage,
            self.stale_while_revalidate()
        )
    }
}

/// Why a bounded fetch produced no data.
#[derive(Debug)]
pub enum FetchFailure {
    /// The store query did not complete within the time budget
    Timeout,
    /// The store query completed with an error
    Store(AppError),
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchFailure::Timeout => write!(f, "store query timed out"),
            FetchFailure::Store(e) => write!(f, "{}", e),
        }
    }
}

/// Run a single store query under the proxy's time budget.
///
/// One attempt, no retries. A query that outlives the budget is treated
/// as failed and its eventual result is discarded.
pub async fn fetch_bounded<T, F>(budget: Duration, query: F) -> Result<T, FetchFailure>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(budget, query).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(FetchFailure::Store(e)),
        Err(_) => Err(FetchFailure::Timeout),
    }
}

/// Successful proxy response: payload as-is, baseline freshness.
pub fn fresh<T: Serialize>(resource: Resource, payload: T) -> Response {
    with_cache_control(resource.baseline(), Json(payload))
}

/// Degraded proxy response: fallback payload, reduced freshness, still 200.
pub fn degraded(resource: Resource, failure: &FetchFailure) -> Response {
    tracing::warn!(
        "Serving degraded {} response: {}",
        resource.name(),
        failure
    );
    with_cache_control(resource.degraded(), Json(resource.fallback_payload()))
}

fn with_cache_control<T: IntoResponse>(policy: CachePolicy, body: T) -> Response {
    ([(header::CACHE_CONTROL, policy.header_value())], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_windows() {
        assert_eq!(
            Resource::Services.baseline().header_value(),
            "public, s-maxage=120, stale-while-revalidate=240"
        );
        assert_eq!(
            Resource::Treatments.baseline().header_value(),
            "public, s-maxage=120, stale-while-revalidate=240"
        );
        assert_eq!(
            Resource::Settings.baseline().header_value(),
            "public, s-maxage=60, stale-while-revalidate=120"
        );
    }

    #[test]
    fn test_degraded_window_is_half_the_baseline() {
        for resource in [Resource::Services, Resource::Treatments, Resource::Settings] {
            let baseline = resource.baseline();
            let degraded = resource.degraded();
            assert_eq!(degraded.s_maxage * 2, baseline.s_maxage);
            assert_eq!(
                degraded.stale_while_revalidate(),
                degraded.s_maxage * 2
            );
        }
    }

    #[test]
    fn test_fallback_payloads() {
        assert_eq!(Resource::Services.fallback_payload(), serde_json::json!([]));
        assert_eq!(
            Resource::Treatments.fallback_payload(),
            serde_json::json!([])
        );
        assert_eq!(Resource::Settings.fallback_payload(), Value::Null);
    }

    #[tokio::test]
    async fn test_fetch_bounded_success() {
        let result = fetch_bounded(Duration::from_secs(1), async { Ok::<_, AppError>(42) }).await;
        assert!(matches!(result, Ok(42)));
    }

    #[tokio::test]
    async fn test_fetch_bounded_store_error() {
        let result = fetch_bounded(Duration::from_secs(1), async {
            Err::<i32, _>(AppError::Database("connection reset".to_string()))
        })
        .await;
        assert!(matches!(result, Err(FetchFailure::Store(_))));
    }

    #[tokio::test]
    async fn test_fetch_bounded_timeout() {
        let result = fetch_bounded(Duration::ZERO, async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, AppError>(42)
        })
        .await;
        assert!(matches!(result, Err(FetchFailure::Timeout)));
    }
}
