use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::errors::ApiError;
use crate::state::PortalState;
use crate::store::{Collection, CollectionPath};

/// Header carrying the signed-in user's id, set by the sign-in layer in front of the API
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Who the request acts for. Every store access goes through one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub app_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            app_id: app_id.into(),
        }
    }

    pub fn collection(&self, collection: Collection) -> CollectionPath {
        CollectionPath::new(&self.app_id, &self.user_id, collection)
    }
}

impl FromRequest for Session {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(session_from_request(req))
    }
}

fn session_from_request(req: &HttpRequest) -> Result<Session, ApiError> {
    let user_id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.contains('/'))
        .ok_or(ApiError::Unauthorized)?;

    let state = req
        .app_data::<web::Data<PortalState>>()
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("PortalState is not registered")))?;

    Ok(Session::new(user_id, state.app_id.clone()))
}
