//! # Resolver Discovery Flows
//!
//! The client side end to end: a real gateway on an ephemeral port, a
//! resolver that has to find it among dead candidates, and the typed
//! client submitting and listing through the discovered endpoint.

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;

    use qv_01_quote_ledger::{InMemoryQuoteStore, LedgerConfig, LedgerService, QuoteLedgerApi};
    use qv_02_api_gateway::{ApiGatewayService, GatewayConfig};
    use qv_03_endpoint_resolver::{
        CandidateList, ClientConfig, ClientError, EndpointResolver, HttpProbe, QuoteApiClient,
        ResolveError, ResolverConfig, SessionState,
    };

    /// A candidate that refuses connections immediately: bind a port,
    /// note it, drop the listener.
    async fn dead_candidate() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    async fn spawn_gateway() -> (SocketAddr, Arc<dyn QuoteLedgerApi>) {
        let service = LedgerService::new(InMemoryQuoteStore::new(), LedgerConfig::default());
        service.initialize().unwrap();
        let ledger: Arc<dyn QuoteLedgerApi> = Arc::new(service);

        let gateway = ApiGatewayService::new(GatewayConfig::default(), Arc::clone(&ledger)).unwrap();
        let router = gateway.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (addr, ledger)
    }

    fn resolver(candidates: Vec<String>) -> EndpointResolver<HttpProbe> {
        EndpointResolver::new(
            CandidateList::new(candidates),
            HttpProbe::default(),
            ResolverConfig {
                probe_timeout: Duration::from_millis(800),
            },
        )
    }

    #[tokio::test]
    async fn discovers_the_live_instance_among_dead_candidates() {
        let (addr, _ledger) = spawn_gateway().await;
        let good = format!("http://{addr}");

        let resolver = resolver(vec![
            dead_candidate().await,
            dead_candidate().await,
            good.clone(),
        ]);

        assert_eq!(resolver.resolve().await.unwrap(), good);
        assert_eq!(
            resolver.session_state().await,
            SessionState::Resolved(good)
        );
    }

    #[tokio::test]
    async fn all_dead_candidates_yield_a_full_diagnostic() {
        let a = dead_candidate().await;
        let b = dead_candidate().await;
        let resolver = resolver(vec![a.clone(), b.clone()]);

        let ResolveError::Unreachable { attempts } = resolver.resolve().await.unwrap_err();

        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].address, a);
        assert_eq!(attempts[1].address, b);
        assert!(!attempts[0].reason.is_empty());
    }

    #[tokio::test]
    async fn client_submits_and_lists_through_the_resolved_endpoint() {
        let (addr, _ledger) = spawn_gateway().await;

        let resolver = resolver(vec![dead_candidate().await, format!("http://{addr}")]);
        let client = QuoteApiClient::new(resolver, reqwest::Client::new(), ClientConfig::default());

        // Fresh ledger: the seed is id 1, the first submission id 2.
        let quotes = client.submit_quote("Stay curious.", "Ada").await.unwrap();
        assert_eq!(quotes[0].id, 2);
        assert_eq!(quotes[0].text, "Stay curious.");
        assert_eq!(quotes[1].id, 1);

        let listed = client.list_quotes().await.unwrap();
        assert_eq!(listed, quotes);
    }

    #[tokio::test]
    async fn rejection_is_surfaced_with_the_service_message() {
        let (addr, _ledger) = spawn_gateway().await;

        let resolver = resolver(vec![format!("http://{addr}")]);
        let client = QuoteApiClient::new(resolver, reqwest::Client::new(), ClientConfig::default());

        let long = vec!["word"; 51].join(" ");
        let err = client.submit_quote(&long, "Ada").await.unwrap_err();

        match err {
            ClientError::Rejected { message } => assert!(message.contains("50 words")),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn the_session_keeps_its_winner_across_calls() {
        let (addr, _ledger) = spawn_gateway().await;
        let good = format!("http://{addr}");

        let resolver = resolver(vec![dead_candidate().await, good.clone()]);
        let client = QuoteApiClient::new(resolver, reqwest::Client::new(), ClientConfig::default());

        client.submit_quote("first", "A").await.unwrap();
        client.list_quotes().await.unwrap();
        client.submit_quote("second", "A").await.unwrap();

        // Still resolved to the same winner; no re-probing happened
        // (the dead candidate would have failed every pass).
        assert_eq!(
            client.resolver().session_state().await,
            SessionState::Resolved(good)
        );
    }
}
