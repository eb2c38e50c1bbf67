//! JSON response bodies

use serde::Serialize;

use auth_core::SessionUser;

/// User record as sent to clients
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<SessionUser> for UserDto {
    fn from(user: SessionUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub session_id: String,
    pub user: UserDto,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

impl SessionStatusResponse {
    pub fn from_user(user: Option<SessionUser>) -> Self {
        Self {
            authenticated: user.is_some(),
            user: user.map(UserDto::from),
        }
    }
}

/// `{success: false, message}`
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

impl FailureResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: String,
}

impl Default for NotFoundResponse {
    fn default() -> Self {
        Self {
            error: "Not found".to_string(),
        }
    }
}
