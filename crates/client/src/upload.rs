//! Progress-reporting request bodies for binary uploads.

use bytes::Bytes;
use futures_util::stream;

use pat_protocol::UploadProgress;

/// Callback invoked with upload progress.
///
/// Invocations arrive in transfer order with a cumulative,
/// non-decreasing `transferred` count and a constant `total`. The
/// callback runs on the transport's polling path and must not block.
pub type ProgressCallback = Box<dyn Fn(UploadProgress) + Send + Sync>;

/// Bytes handed to the transport per stream chunk.
///
/// Small enough that progress callbacks fire at a useful granularity,
/// large enough to keep per-chunk overhead negligible.
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// Wraps `data` in a streaming body that reports cumulative progress.
///
/// The payload is sliced into [`UPLOAD_CHUNK_SIZE`] chunks; the
/// callback fires as the transport pulls each one. An empty payload
/// produces no chunks and no callback invocations.
pub(crate) fn progress_body(
    data: Vec<u8>,
    on_progress: Option<ProgressCallback>,
) -> reqwest::Body {
    let total = data.len() as u64;
    let payload = Bytes::from(data);

    let mut offset = 0usize;
    let chunks = std::iter::from_fn(move || {
        if offset >= payload.len() {
            return None;
        }
        let end = (offset + UPLOAD_CHUNK_SIZE).min(payload.len());
        let chunk = payload.slice(offset..end);
        offset = end;
        Some(chunk)
    });

    let mut transferred = 0u64;
    let counted = chunks.map(move |chunk| {
        transferred += chunk.len() as u64;
        if let Some(cb) = &on_progress {
            cb(UploadProgress { transferred, total });
        }
        Ok::<Bytes, std::convert::Infallible>(chunk)
    });

    reqwest::Body::wrap_stream(stream::iter(counted))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use reqwest::Method;

    use super::*;
    use crate::client::Client;
    use crate::error::Error;
    use crate::testutil::mock_server;
    use pat_protocol::StoredFile;

    fn collecting_callback() -> (ProgressCallback, Arc<Mutex<Vec<UploadProgress>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let cb: ProgressCallback = Box::new(move |p| sink.lock().unwrap().push(p));
        (cb, seen)
    }

    #[tokio::test]
    async fn upload_streams_body_and_reports_progress() {
        let json = r#"{"shortName":"up1","size":200000}"#;
        let (url, rx, handle) = mock_server(200, json).await;

        let client = Client::with_base_url(url).unwrap();
        let (cb, seen) = collecting_callback();

        let payload = vec![0xA5u8; 200_000];
        let file: StoredFile = client
            .upload(Method::POST, "/v1/upload?name=blob", payload, Some(cb))
            .await
            .unwrap();
        assert_eq!(file.short_name, "up1");

        let events = seen.lock().unwrap();
        assert!(!events.is_empty());
        let mut last = 0u64;
        for event in events.iter() {
            assert!(event.transferred >= last, "progress went backwards");
            assert_eq!(event.total, 200_000);
            last = event.transferred;
        }
        assert_eq!(last, 200_000);

        let req = rx.await.unwrap();
        assert!(req.contains("content-type: application/octet-stream"));

        handle.abort();
    }

    #[tokio::test]
    async fn upload_attaches_bearer_token() {
        let (url, rx, handle) = mock_server(200, r#"{"shortName":"up2"}"#).await;

        let mut client = Client::with_base_url(url).unwrap();
        client.set_token("seekrit");
        let _: StoredFile = client
            .upload(Method::POST, "/v1/upload?name=blob", b"data".to_vec(), None)
            .await
            .unwrap();

        let req = rx.await.unwrap();
        assert!(req.contains("authorization: Bearer seekrit"));

        handle.abort();
    }

    #[tokio::test]
    async fn capability_gate_rejects_before_any_io() {
        // Nothing listens on this port; reaching the network would
        // produce a Transport error instead.
        let client = Client::with_base_url("http://127.0.0.1:1")
            .unwrap()
            .without_streaming_uploads();

        let err = client
            .upload::<StoredFile>(Method::POST, "/v1/upload?name=x", b"data".to_vec(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UploadsUnsupported));
    }

    #[tokio::test]
    async fn non_json_upload_response_is_malformed_even_on_error_status() {
        let (url, _rx, handle) = mock_server(502, "Bad Gateway page").await;

        let client = Client::with_base_url(url).unwrap();
        let err = client
            .upload::<StoredFile>(Method::POST, "/v1/upload?name=x", b"data".to_vec(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));

        handle.abort();
    }

    #[tokio::test]
    async fn json_error_status_on_upload_surfaces_message() {
        let (url, _rx, handle) = mock_server(413, r#"{"message":"quota exceeded"}"#).await;

        let client = Client::with_base_url(url).unwrap();
        let err = client
            .upload::<StoredFile>(Method::POST, "/v1/upload?name=x", b"data".to_vec(), None)
            .await
            .unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 413);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }

        handle.abort();
    }

    #[tokio::test]
    async fn empty_payload_uploads_without_progress_events() {
        let (url, _rx, handle) = mock_server(200, r#"{"shortName":"empty"}"#).await;

        let client = Client::with_base_url(url).unwrap();
        let (cb, seen) = collecting_callback();
        let file: StoredFile = client
            .upload(Method::POST, "/v1/upload?name=empty", Vec::new(), Some(cb))
            .await
            .unwrap();
        assert_eq!(file.short_name, "empty");
        assert!(seen.lock().unwrap().is_empty());

        handle.abort();
    }
}
