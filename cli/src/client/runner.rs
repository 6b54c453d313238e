use crate::client::http::{HttpError, HttpResponse, Transport};
use std::sync::Arc;
use tinytina_lib::FetchOptions;

/// Sends every request on its own task and returns the outcomes in input
/// order, whatever order they complete in.
pub async fn dispatch<T: Transport>(
    transport: Arc<T>,
    requests: Vec<FetchOptions>,
) -> Vec<Result<HttpResponse, HttpError>> {
    tracing::debug!(count = requests.len(), "dispatching requests");

    let handles: Vec<_> = requests
        .into_iter()
        .map(|options| {
            let transport = Arc::clone(&transport);
            tokio::spawn(async move { transport.send(options).await })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(HttpError::new(format!("request task failed: {e}"))),
        };
        results.push(result);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use std::time::Duration;
    use tinytina_lib::{build_fetch_options, Request, VariableMap};

    /// Answers with the URL after a delay taken from the URL itself, so later
    /// requests can finish first.
    struct EchoTransport;

    impl Transport for EchoTransport {
        async fn send(&self, options: FetchOptions) -> Result<HttpResponse, HttpError> {
            let delay: u64 = options
                .url
                .rsplit('/')
                .next()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            if options.url.contains("fail") {
                return Err(HttpError::new("refused"));
            }
            Ok(HttpResponse {
                status: 200,
                headers: IndexMap::new(),
                body: options.url,
            })
        }
    }

    fn options(url: &str) -> FetchOptions {
        let request = Request {
            url: url.to_string(),
            ..Default::default()
        };
        build_fetch_options(&VariableMap::new(), &request)
    }

    #[tokio::test]
    async fn test_results_follow_input_order() {
        let results = dispatch(
            Arc::new(EchoTransport),
            vec![options("http://x/60"), options("http://x/0"), options("http://x/30")],
        )
        .await;

        let bodies: Vec<String> = results.into_iter().map(|r| r.unwrap().body).collect();
        assert_eq!(bodies, vec!["http://x/60", "http://x/0", "http://x/30"]);
    }

    #[tokio::test]
    async fn test_failures_stay_in_place() {
        let results = dispatch(
            Arc::new(EchoTransport),
            vec![options("http://x/fail/0"), options("http://x/0")],
        )
        .await;

        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }
}
