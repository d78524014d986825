//! Implements RiddleSource over HTTP. One GET with `Cache-Control: no-store`.

use crate::domain::{DomainError, RiddleCalendar};
use crate::ports::RiddleSource;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpRiddleSource {
    client: Client,
    url: String,
}

impl HttpRiddleSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self::with_client(url, client)
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl RiddleSource for HttpRiddleSource {
    async fn load_calendar(&self) -> Result<RiddleCalendar, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| DomainError::Fetch(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Fetch(format!("HTTP {}", status.as_u16())));
        }
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::Fetch(e.to_string()))?;
        debug!(url = %self.url, bytes = text.len(), "downloaded riddle data");
        RiddleCalendar::from_json(&text)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn source(url: String) -> HttpRiddleSource {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpRiddleSource::with_client(url, client)
    }

    /// Serve one canned HTTP response on a local port; returns the URL and the captured request.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf[..n]).into_owned()
        });
        (format!("http://{addr}/data/advent.json"), handle)
    }

    #[tokio::test]
    async fn downloads_calendar_without_cache() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"1": {"indovinelloParola": "r", "rispostaParola": "DVD"}}"#,
        )
        .await;
        let cal = source(url).load_calendar().await.unwrap();
        assert_eq!(cal.get(1).unwrap().word_answer, "DVD");
        let request = server.await.unwrap().to_ascii_lowercase();
        assert!(request.starts_with("get /data/advent.json"));
        assert!(request.contains("cache-control: no-store"));
    }

    #[tokio::test]
    async fn non_success_status_is_fetch_error() {
        let (url, server) = serve_once("404 Not Found", "").await;
        let err = source(url).load_calendar().await.unwrap_err();
        match err {
            DomainError::Fetch(msg) => assert_eq!(msg, "HTTP 404"),
            other => panic!("unexpected {other:?}"),
        }
        server.await.unwrap();
    }
}
