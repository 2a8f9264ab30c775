use super::*;
use crate::Error;

/// Management endpoint of the Kusto v1 REST API.
const MGMT: &str = "/v1/rest/mgmt";

/// HTTP client for a Kusto engine (Kustainer by default).
#[derive(Debug, Clone)]
pub struct Kusto {
    url: String,
    http: reqwest::Client,
}

impl Kusto {
    pub fn new(url: &str) -> Self {
        log::info!("using kusto at {}", url);
        Self {
            url: url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.url, MGMT)
    }
}

#[async_trait::async_trait]
impl Store for Kusto {
    async fn execute(&self, database: &str, command: &str) -> crate::Result<Response> {
        log::debug!("mgmt [{}] {}", database, command);
        let body = serde_json::json!({ "db": database, "csl": command });
        let response = self
            .http
            .post(self.endpoint())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Store(format!("{} {}", status, text)));
        }
        Ok(response.json::<Response>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::io::AsyncWriteExt;

    /// One-shot HTTP responder on a random local port.
    async fn serve(status: &'static str, body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 16384];
            let _ = socket.read(&mut buf).await;
            let reply = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}", addr)
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        assert_eq!(
            Kusto::new("http://localhost:8080/").endpoint(),
            "http://localhost:8080/v1/rest/mgmt"
        );
        assert_eq!(
            Kusto::new(URL).endpoint(),
            "http://localhost:8080/v1/rest/mgmt"
        );
    }

    #[tokio::test]
    async fn failed_status_is_a_store_error() {
        let url = serve("400 Bad Request", "Semantic error: table T is invalid").await;
        match Kusto::new(&url).execute(DATABASE, ".create table T (\n)").await {
            Err(Error::Store(e)) => {
                assert!(e.starts_with("400 Bad Request"));
                assert!(e.contains("Semantic error"));
            }
            other => panic!("expected store error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn success_decodes_tables() {
        let url = serve(
            "200 OK",
            r#"{"Tables":[{"TableName":"Table_0","Columns":[],"Rows":[["AdvancedHunting"]]}]}"#,
        )
        .await;
        let response = Kusto::new(&url).execute("", SHOW_DATABASES).await.unwrap();
        assert_eq!(
            response.primary().map(|t| t.first_column().collect::<Vec<&str>>()),
            Some(vec!["AdvancedHunting"])
        );
    }
}
