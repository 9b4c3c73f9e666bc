//! Transports move JSON between the API layer and a backend.
//!
//! The request path is the only contract: [`HttpTransport`] sends it to a real
//! server, [`MockServer`](crate::mock::MockServer) answers it from the mock store.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, instrument};
use url::Url;

use super::TransportError;

/// The HTTP methods the API uses. Only `Post` and `Put` carry a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        };
        f.write_str(name)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// `GET path`, returning the JSON body.
    async fn get(&self, path: &str) -> Result<Value, TransportError>;

    /// `POST`/`PUT path` with a JSON body, returning the JSON response.
    ///
    /// A `Get` ignores `body` and behaves like [`get`](Self::get).
    async fn send(&self, method: HttpMethod, path: &str, body: Value)
        -> Result<Value, TransportError>;
}

/// A [`Transport`] over HTTP.
///
/// Request paths are resolved below the base URL, so a base of
/// `https://shop.example.com/api` sends `/products` to
/// `https://shop.example.com/api/products`.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: Url) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Uses an already configured client (proxies, timeouts, TLS).
    pub fn with_client(client: reqwest::Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    /// The base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The URL a request path goes to.
    pub fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn handle_response(response: reqwest::Response) -> Result<Value, TransportError> {
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self))]
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    #[instrument(skip(self, body))]
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Value,
    ) -> Result<Value, TransportError> {
        if method == HttpMethod::Get {
            return self.get(path).await;
        }
        let url = self.endpoint(path)?;
        debug!(%url, %method, "Sending body");
        let request = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url).json(&body),
            HttpMethod::Put => self.client.put(url).json(&body),
        };
        let response = request.send().await?;
        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::new(Url::parse(base).unwrap()).unwrap()
    }

    /// Talks to the local test server directly, whatever proxy the environment sets.
    fn local(base: Url) -> HttpTransport {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpTransport::with_client(client, base)
    }

    /// Answers one request with `status` and `body`; resolves to the request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = Url::parse(&format!("http://{}/api", listener.local_addr().unwrap())).unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            let header_end = loop {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "Client closed before sending headers");
                request.extend_from_slice(&buf[..n]);
                if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&request[..header_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            while request.len() < header_end + content_length {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "Client closed before sending the body");
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            head.lines().next().unwrap_or_default().to_string()
        });
        (base, handle)
    }

    #[test]
    fn test_paths_join_onto_base_url() {
        let root = transport("http://localhost:5173");
        assert_eq!(root.endpoint("/products/3").unwrap().as_str(), "http://localhost:5173/products/3");
    }

    #[test]
    fn test_base_path_is_kept() {
        for base in ["https://shop.example.com/api/", "https://shop.example.com/api"] {
            let transport = transport(base);
            assert_eq!(transport.base_url().as_str(), "https://shop.example.com/api/");
            assert_eq!(
                transport.endpoint("/products").unwrap().as_str(),
                "https://shop.example.com/api/products"
            );
            assert_eq!(
                transport.endpoint("products/7").unwrap().as_str(),
                "https://shop.example.com/api/products/7"
            );
        }
    }

    #[tokio::test]
    async fn test_get_decodes_json_below_the_base_path() {
        let (base, server) = serve_once("200 OK", r#"[{"id":1}]"#).await;
        let body = local(base).get("/products").await.unwrap();
        assert_eq!(body, json!([{ "id": 1 }]));
        assert_eq!(server.await.unwrap(), "GET /api/products HTTP/1.1");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;
        let result = local(base).get("/products").await;
        assert!(matches!(result, Err(TransportError::Status { status: 500 })));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_undecodable_body_is_a_decode_error() {
        let (base, server) = serve_once("200 OK", "<html>").await;
        let result = local(base).get("/products").await;
        assert!(matches!(result, Err(TransportError::Decode(_))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_put_sends_the_body() {
        let (base, server) = serve_once("200 OK", r#"{"ok":true}"#).await;
        let body = local(base)
            .send(HttpMethod::Put, "/products/2", json!({ "name": "Milk" }))
            .await
            .unwrap();
        assert_eq!(body, json!({ "ok": true }));
        assert_eq!(server.await.unwrap(), "PUT /api/products/2 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_get_through_send_ignores_the_body() {
        let (base, server) = serve_once("200 OK", "[]").await;
        local(base)
            .send(HttpMethod::Get, "/categories", json!({ "ignored": true }))
            .await
            .unwrap();
        assert_eq!(server.await.unwrap(), "GET /api/categories HTTP/1.1");
    }
}
