//! Static asset responder
//!
//! Serves files from a document root, picks the content type from the file
//! extension, and answers misses with the configured not-found page.

use std::io;
use std::path::{Component, Path, PathBuf};

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use auth_shared::config::StaticSettings;

const OCTET_STREAM: &str = "application/octet-stream";

const FALLBACK_NOT_FOUND_PAGE: &str =
    "<!DOCTYPE html><html><head><title>404 Not Found</title></head>\
     <body><h1>404 Not Found</h1></body></html>";

/// Content type for a lower-cased file extension (without the dot).
pub fn content_type_for_extension(extension: &str) -> &'static str {
    match extension {
        "html" => "text/html",
        "js" => "text/javascript",
        "css" => "text/css",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" => "image/jpg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "woff" => "application/font-woff",
        "ttf" => "application/font-ttf",
        "eot" => "application/vnd.ms-fontobject",
        "otf" => "application/font-otf",
        "wasm" => "application/wasm",
        _ => OCTET_STREAM,
    }
}

pub fn content_type_for(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| content_type_for_extension(&ext.to_ascii_lowercase()))
        .unwrap_or(OCTET_STREAM)
}

#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    index: String,
    not_found_page: String,
}

impl StaticFiles {
    pub fn new(
        root: impl Into<PathBuf>,
        index: impl Into<String>,
        not_found_page: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            index: index.into(),
            not_found_page: not_found_page.into(),
        }
    }

    pub fn from_settings(settings: &StaticSettings) -> Self {
        Self::new(
            &settings.root,
            settings.index.clone(),
            settings.not_found_page.clone(),
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a request path onto the document root. `/` maps to the index
    /// file. Paths that try to leave the root resolve to `None`.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = request_path.trim_start_matches('/');
        let relative = if relative.is_empty() {
            self.index.as_str()
        } else {
            relative
        };

        let mut path = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(path)
    }

    pub async fn serve(&self, request_path: &str) -> Response {
        let Some(path) = self.resolve(request_path) else {
            debug!("Rejected static path outside root: {}", request_path);
            return self.not_found().await;
        };

        if let Ok(metadata) = tokio::fs::metadata(&path).await {
            if metadata.is_dir() {
                return self.not_found().await;
            }
        }

        match tokio::fs::read(&path).await {
            Ok(content) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type_for(&path))],
                content,
            )
                .into_response(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Static file not found: {}", path.display());
                self.not_found().await
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Server Error: {}", error_code(&e)),
                )
                    .into_response()
            }
        }
    }

    async fn not_found(&self) -> Response {
        let page = tokio::fs::read(self.root.join(&self.not_found_page))
            .await
            .unwrap_or_else(|_| FALLBACK_NOT_FOUND_PAGE.as_bytes().to_vec());

        (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/html")],
            page,
        )
            .into_response()
    }
}

/// Errno-style name for the read failures a file server actually hits.
fn error_code(err: &io::Error) -> String {
    let name = match err.kind() {
        io::ErrorKind::PermissionDenied => "EACCES",
        io::ErrorKind::NotADirectory => "ENOTDIR",
        io::ErrorKind::IsADirectory => "EISDIR",
        io::ErrorKind::NotFound => "ENOENT",
        io::ErrorKind::InvalidInput => "EINVAL",
        io::ErrorKind::OutOfMemory => "ENOMEM",
        io::ErrorKind::Interrupted => "EINTR",
        io::ErrorKind::WouldBlock => "EAGAIN",
        kind => {
            return match err.raw_os_error() {
                Some(code) => format!("{:?} (os error {})", kind, code),
                None => format!("{:?}", kind),
            }
        }
    };
    name.to_string()
}
