//! Application-wide constants

pub const DEFAULT_APP_NAME: &str = "auth-server";
pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable that overrides `app.port`.
pub const PORT_ENV_VAR: &str = "PORT";

/// Every path starting with this prefix is routed to the API.
pub const API_PREFIX: &str = "/api";

/// Request bodies larger than this are answered as malformed.
pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Environment variables must start with `AUTH__` to reach the config,
/// e.g. `AUTH__STATIC_FILES__ROOT`.
pub const ENV_PREFIX: &str = "AUTH";

pub const DEFAULT_STATIC_ROOT: &str = ".";
pub const DEFAULT_INDEX_FILE: &str = "index.html";
pub const DEFAULT_NOT_FOUND_PAGE: &str = "404.html";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_FILE_PREFIX: &str = "auth-server.log";

/// Two 13-character base-36 segments.
pub const SESSION_ID_LENGTH: usize = 26;
