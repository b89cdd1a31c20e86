//! Step list retrieval.
//!
//! One `GET` per page mount; the caller logs failures and keeps an empty list,
//! so nothing here retries or caches.

use thiserror::Error;

use crate::config::StepSource;
use crate::core::step::{sample_steps, Step};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("step request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("step request returned status {0}")]
    Status(u16),
}

/// Fetch the JSON array of steps served at `url`.
pub async fn fetch_steps(url: &str) -> Result<Vec<Step>, FetchError> {
    let resp = reqwest::get(url).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(resp.json::<Vec<Step>>().await?)
}

pub async fn load_steps(source: &StepSource) -> Result<Vec<Step>, FetchError> {
    match source {
        StepSource::Remote(url) => fetch_steps(url).await,
        StepSource::Sample => Ok(sample_steps()),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answer exactly one request with `status_line` and `body`, returning the URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/steps")
    }

    #[tokio::test]
    async fn ok_response_decodes_steps() {
        let url = serve_once(
            "200 OK",
            r#"[{"step_id":"1","step_name":"Clean","step_inputs":"csv","step_outputs":"csv","step_code":"x","step_framework":"Dagster","step_downloads":3}]"#,
        );
        let steps = fetch_steps(&url).await.unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].name, "Clean");
        assert!(steps[0].creator.is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let url = serve_once("503 Service Unavailable", "");
        assert!(matches!(
            fetch_steps(&url).await,
            Err(FetchError::Status(503))
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let url = serve_once("200 OK", r#"{"steps": []}"#);
        assert!(matches!(fetch_steps(&url).await, Err(FetchError::Http(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = format!("http://{addr}/steps");
        assert!(matches!(fetch_steps(&url).await, Err(FetchError::Http(_))));
    }

    #[tokio::test]
    async fn sample_source_skips_the_network() {
        let steps = load_steps(&StepSource::Sample).await.unwrap();
        assert_eq!(steps, sample_steps());
    }
}
