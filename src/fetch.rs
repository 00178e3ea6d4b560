//! Polling the Pi-hole statistics endpoint.
//!
//! One bounded-timeout GET per cycle. Every failure mode (connection error,
//! timeout, non-200 status, unparseable body) collapses to `None`, which the
//! renderer shows as the offline screen; the next cycle is the retry. A
//! diagnostic is logged for each failure so degraded runs stay observable,
//! but nothing propagates as an error.
//!
//! [`StatsSource`] is the seam the update loop depends on; tests drive the
//! loop with scripted sources instead of a live endpoint.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::warn;

use crate::config::FETCH_TIMEOUT;
use crate::stats::StatsSnapshot;

/// Source of statistics snapshots, one per poll cycle.
pub trait StatsSource {
    /// Fetch the current statistics, or `None` when the appliance is
    /// unreachable or returns garbage.
    fn fetch(&mut self) -> Option<StatsSnapshot>;
}

/// HTTP fetcher against the configured Pi-hole endpoint.
pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    /// Build a fetcher with the fixed request timeout.
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client, url: url.into() })
    }
}

impl StatsSource for HttpFetcher {
    fn fetch(&mut self) -> Option<StatsSnapshot> {
        let response = match self.client.get(&self.url).send() {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "stats fetch failed");
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            warn!(status = %response.status(), "stats endpoint returned non-OK status");
            return None;
        }

        match response.json::<Value>() {
            Ok(payload) => Some(StatsSnapshot::from_value(&payload)),
            Err(err) => {
                warn!(error = %err, "stats response was not valid JSON");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on an ephemeral port; returns the URL.
    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/admin/api.php")
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[test]
    fn test_fetch_parses_ok_response() {
        let body = r#"{"dns_queries_today": 1500, "ads_percentage_today": 24.0}"#;
        let url = serve_once(http_response("200 OK", body));
        let mut fetcher = HttpFetcher::new(url).unwrap();
        let snap = fetcher.fetch().expect("snapshot");
        assert_eq!(snap.queries_today, 1500);
        assert!((snap.percent_blocked - 24.0).abs() < f32::EPSILON);
        // Keys absent from the body default to zero.
        assert_eq!(snap.blocked_today, 0);
    }

    #[test]
    fn test_fetch_non_200_is_absent() {
        let url = serve_once(http_response("503 Service Unavailable", "{}"));
        let mut fetcher = HttpFetcher::new(url).unwrap();
        assert!(fetcher.fetch().is_none());
    }

    #[test]
    fn test_fetch_malformed_json_is_absent() {
        let url = serve_once(http_response("200 OK", "<html>not json</html>"));
        let mut fetcher = HttpFetcher::new(url).unwrap();
        assert!(fetcher.fetch().is_none());
    }

    #[test]
    fn test_fetch_connection_refused_is_absent() {
        // Bind then drop to find a port with nothing listening.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let mut fetcher = HttpFetcher::new(format!("http://127.0.0.1:{port}/admin/api.php")).unwrap();
        assert!(fetcher.fetch().is_none());
    }
}
