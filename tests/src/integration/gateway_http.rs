//! # Gateway HTTP Contract
//!
//! Drives the real router over a real listener with a real HTTP client,
//! verifying the wire contract: status codes, JSON shapes, ordering.

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use qv_01_quote_ledger::{
        InMemoryQuoteStore, LedgerConfig, LedgerError, LedgerService, QuoteLedgerApi, StoreError,
    };
    use qv_02_api_gateway::{ApiGatewayService, GatewayConfig};
    use shared_types::Quote;

    /// Bind an ephemeral port and serve the gateway router on it.
    async fn spawn_gateway(ledger: Arc<dyn QuoteLedgerApi>) -> SocketAddr {
        let gateway = ApiGatewayService::new(GatewayConfig::default(), ledger).unwrap();
        let router = gateway.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn seeded_ledger() -> Arc<dyn QuoteLedgerApi> {
        let service = LedgerService::new(InMemoryQuoteStore::new(), LedgerConfig::default());
        service.initialize().unwrap();
        Arc::new(service)
    }

    /// Ledger whose storage is permanently down.
    struct DownLedger;

    impl QuoteLedgerApi for DownLedger {
        fn initialize(&self) -> Result<(), LedgerError> {
            Err(self.failure())
        }
        fn append(&self, _text: &str, _author: &str) -> Result<Quote, LedgerError> {
            Err(self.failure())
        }
        fn list(&self) -> Result<Vec<Quote>, LedgerError> {
            Err(self.failure())
        }
    }

    impl DownLedger {
        fn failure(&self) -> LedgerError {
            LedgerError::Storage(StoreError::Unavailable {
                reason: "connection refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn get_quotes_serves_the_seed_newest_first() {
        let addr = spawn_gateway(seeded_ledger()).await;

        let response = reqwest::get(format!("http://{addr}/api/quotes"))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let quotes: Vec<serde_json::Value> = response.json().await.unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0]["id"], 1);
        assert_eq!(quotes[0]["author"], "Imran Khan");
        // Wire shape is exactly {id, text, author}.
        assert_eq!(quotes[0].as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn post_returns_201_with_the_updated_list() {
        let addr = spawn_gateway(seeded_ledger()).await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("http://{addr}/api/quotes"))
            .json(&serde_json::json!({"text": "Stay curious.", "author": "Ada"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);

        let quotes: Vec<serde_json::Value> = response.json().await.unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0]["id"], 2);
        assert_eq!(quotes[0]["text"], "Stay curious.");
        assert_eq!(quotes[1]["id"], 1);
    }

    #[tokio::test]
    async fn missing_author_is_a_400_with_an_error_body() {
        let addr = spawn_gateway(seeded_ledger()).await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("http://{addr}/api/quotes"))
            .json(&serde_json::json!({"text": "No author here"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "text and author are required");
    }

    #[tokio::test]
    async fn over_long_text_is_a_400_and_does_not_mutate() {
        let addr = spawn_gateway(seeded_ledger()).await;
        let client = reqwest::Client::new();

        let long = vec!["word"; 51].join(" ");
        let response = client
            .post(format!("http://{addr}/api/quotes"))
            .json(&serde_json::json!({"text": long, "author": "Ada"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("50 words"));

        // The store still holds only the seed.
        let quotes: Vec<serde_json::Value> = reqwest::get(format!("http://{addr}/api/quotes"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(quotes.len(), 1);
    }

    #[tokio::test]
    async fn storage_failure_is_a_500_with_an_error_body() {
        let addr = spawn_gateway(Arc::new(DownLedger)).await;
        let client = reqwest::Client::new();

        let response = reqwest::get(format!("http://{addr}/api/quotes"))
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("connection refused"));

        let response = client
            .post(format!("http://{addr}/api/quotes"))
            .json(&serde_json::json!({"text": "Stay curious.", "author": "Ada"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
    }

    #[tokio::test]
    async fn health_answers_200_even_with_storage_down() {
        let addr = spawn_gateway(Arc::new(DownLedger)).await;

        let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn submissions_past_the_cap_serve_a_capped_list() {
        let service = LedgerService::new(
            InMemoryQuoteStore::new(),
            LedgerConfig {
                cap: 3,
                ..LedgerConfig::default()
            },
        );
        let addr = spawn_gateway(Arc::new(service)).await;
        let client = reqwest::Client::new();

        let mut last: Vec<serde_json::Value> = Vec::new();
        for n in 1..=6 {
            last = client
                .post(format!("http://{addr}/api/quotes"))
                .json(&serde_json::json!({"text": format!("quote {n}"), "author": "A"}))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
        }

        let texts: Vec<_> = last.iter().map(|q| q["text"].as_str().unwrap()).collect();
        assert_eq!(texts, vec!["quote 6", "quote 5", "quote 4"]);
    }
}
