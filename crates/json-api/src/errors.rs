//! API error and message envelopes.

use salvo::{
    Scribe,
    http::StatusCode,
    oapi::{Components, EndpointOutRegister, Operation, Response as OapiResponse, ToSchema},
    prelude::{Json, Response},
};
use serde::{Deserialize, Serialize};

/// Envelope kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum MessageKind {
    Success,
    Error,
}

/// `{type, msg}` body shared by error responses and plain success messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct Message {
    #[serde(rename = "type")]
    pub kind: MessageKind,

    pub msg: String,
}

impl Message {
    pub(crate) fn success(msg: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            msg: msg.into(),
        }
    }

    pub(crate) fn error(msg: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            msg: msg.into(),
        }
    }
}

/// An error response rendered as a `{type: "error", msg}` envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    msg: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            msg: msg.into(),
        }
    }

    pub(crate) fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub(crate) fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized")
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }

    /// The detail of a 500 is logged where it happens and never sent to the client.
    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }

    pub(crate) fn invalid_id() -> Self {
        Self::bad_request("invalid id given")
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(Message::error(self.msg)));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::UNAUTHORIZED, "Unauthorized"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                OapiResponse::new(description)
                    .add_content("application/json", Message::to_schema(components)),
            );
        }
    }
}
