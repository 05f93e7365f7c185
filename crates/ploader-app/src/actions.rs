//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every spawned task reports back exactly once through the message channel
//! and never touches [`AppState`](crate::state::AppState) directly.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use ploader_api::{ApiClient, ApiError};
use ploader_core::{CapturedImage, Error};
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::message::Message;
use crate::state::RequestId;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<ApiClient>) {
    match action {
        UpdateAction::LoadImage {
            request_id,
            path,
            mime,
        } => {
            tokio::spawn(async move {
                let msg = load_image(request_id, path, mime).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::Analyze {
            request_id,
            request,
        } => {
            tokio::spawn(async move {
                let msg = match api.analyze(&request).await {
                    Ok(response) => Message::AnalyzeSucceeded {
                        request_id,
                        response,
                    },
                    Err(e) => Message::AnalyzeFailed {
                        request_id,
                        error: analyze_error_message(&e),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::Upload {
            request_id,
            request,
        } => {
            tokio::spawn(async move {
                let msg = match api.upload(&request).await {
                    Ok(response) => Message::UploadCompleted {
                        request_id,
                        response,
                    },
                    Err(e) => Message::UploadFailed {
                        request_id,
                        error: upload_error_message(&e),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchClientStatus { request_id } => {
            tokio::spawn(async move {
                let msg = match api.client_statuses().await {
                    Ok(statuses) => Message::ClientStatusLoaded {
                        request_id,
                        statuses,
                    },
                    Err(e) => Message::ClientStatusFailed {
                        request_id,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::OpenUrl { url } => {
            tokio::spawn(async move {
                if let Err(e) = open_url_in_browser(&url) {
                    error!("Failed to open {url} in browser: {e}");
                }
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed, dropping task result");
    }
}

/// Read an accepted image and build its preview.
async fn load_image(request_id: RequestId, path: PathBuf, mime: &'static str) -> Message {
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let file_name = file_name_of(&path);
            // Base64 encoding of large files is CPU bound
            let encoded =
                tokio::task::spawn_blocking(move || CapturedImage::new(file_name, mime, bytes))
                    .await;
            match encoded {
                Ok(image) => Message::ImageLoaded { request_id, image },
                Err(e) => Message::ImageLoadFailed {
                    request_id,
                    error: Error::image_read(path, e.to_string()).to_string(),
                },
            }
        }
        Err(e) => Message::ImageLoadFailed {
            request_id,
            error: Error::image_read(path, e.to_string()).to_string(),
        },
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// User-facing message for a failed analyze call.
pub fn analyze_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(status) => format!("Errore durante l'analisi: {status}"),
        None => {
            warn!("Analyze request error: {err}");
            err.to_string()
        }
    }
}

/// User-facing message for a failed upload call.
pub fn upload_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(status) => format!("Errore durante il caricamento: {status}"),
        None => {
            warn!("Upload request error: {err}");
            err.to_string()
        }
    }
}

/// Open a URL with the platform default opener.
fn open_url_in_browser(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            format!("no browser opener available for this platform ({url})"),
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_status() {
        let err = ApiError::Status { status: 500 };
        assert_eq!(analyze_error_message(&err), "Errore durante l'analisi: 500");
        assert_eq!(
            upload_error_message(&err),
            "Errore durante il caricamento: 500"
        );
    }

    #[test]
    fn test_error_messages_without_status_use_description() {
        let err = ApiError::InvalidPart {
            field: "image",
            reason: "bad mime".to_string(),
        };
        assert!(analyze_error_message(&err).contains("bad mime"));
    }

    #[test]
    fn test_file_name_of() {
        assert_eq!(file_name_of(Path::new("/tmp/photos/mouse.png")), "mouse.png");
    }

    #[tokio::test]
    async fn test_load_image_reads_and_encodes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        std::fs::write(&path, b"abc").unwrap();

        let msg = load_image(RequestId(7), path, "image/png").await;

        match msg {
            Message::ImageLoaded { request_id, image } => {
                assert_eq!(request_id, RequestId(7));
                assert_eq!(image.file_name, "dot.png");
                assert_eq!(image.preview, "data:image/png;base64,YWJj");
            }
            other => panic!("expected ImageLoaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_image_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        let msg = load_image(RequestId(1), path.clone(), "image/png").await;
        match msg {
            Message::ImageLoadFailed { request_id, error } => {
                assert_eq!(request_id, RequestId(1));
                assert!(error.starts_with("Failed to read image"));
                assert!(error.contains(&path.display().to_string()));
            }
            other => panic!("expected ImageLoadFailed, got {other:?}"),
        }
    }
}
