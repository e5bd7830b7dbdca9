//! Auth middleware.

use std::sync::Arc;

use hotel_app::auth::Caller;
use salvo::prelude::*;

use crate::{auth::into_api_error, errors::ApiError, extensions::*, state::State};

/// Header carrying the access token issued by `POST /auth`.
pub(crate) const API_TOKEN_HEADER: &str = "X-Api-Token";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_api_token(req) else {
        reject(res, ctrl, ApiError::unauthorized());

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            reject(res, ctrl, error);

            return;
        }
    };

    let caller = match state.app.auth.authenticate_token(token).await {
        Ok(user) => Caller::from(&user),
        Err(error) => {
            reject(res, ctrl, into_api_error(error));

            return;
        }
    };

    depot.insert_caller(caller);

    ctrl.call_next(req, depot, res).await;
}

pub(super) fn reject(res: &mut Response, ctrl: &mut FlowCtrl, error: ApiError) {
    res.render(error);
    ctrl.skip_rest();
}

fn extract_api_token(req: &Request) -> Option<&str> {
    let token = req.headers().get(API_TOKEN_HEADER)?.to_str().ok()?.trim();

    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use hotel_app::{
        auth::{AuthServiceError, MockAuthService, TokenError},
        database::RepositoryError,
    };
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_UUID, TestState, make_user};

    use super::*;

    #[salvo::handler]
    async fn echo_caller(depot: &mut Depot, res: &mut Response) {
        let caller = depot.caller_or_401().ok().map_or_else(
            || "missing".to_string(),
            |caller: Caller| format!("{}:{}", caller.uuid, caller.is_admin),
        );

        res.render(caller);
    }

    fn make_service(auth: MockAuthService) -> Service {
        let state = TestState::new().auth(auth).build();

        let router = Router::new()
            .hoop(inject(state))
            .hoop(handler)
            .push(Router::new().get(echo_caller));

        Service::new(router)
    }

    #[tokio::test]
    async fn test_missing_token_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_token().never();

        let mut res = TestClient::get("http://example.com")
            .send(&make_service(auth))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body, json!({ "type": "error", "msg": "unauthorized" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_token_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_token().never();

        let res = TestClient::get("http://example.com")
            .add_header(API_TOKEN_HEADER, "   ", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_each_token_failure_returns_401() -> TestResult {
        let failures: [fn() -> AuthServiceError; 5] = [
            || AuthServiceError::Token(TokenError::Expired),
            || AuthServiceError::Token(TokenError::InvalidSignature),
            || AuthServiceError::Token(TokenError::InvalidAlgorithm),
            || AuthServiceError::Token(TokenError::Malformed),
            || AuthServiceError::UnknownUser,
        ];

        for failure in failures {
            let mut auth = MockAuthService::new();

            auth.expect_authenticate_token()
                .once()
                .withf(|token| token == "abc123")
                .return_once(move |_| Err(failure()));

            let res = TestClient::get("http://example.com")
                .add_header(API_TOKEN_HEADER, "abc123", true)
                .send(&make_service(auth))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_token()
            .once()
            .return_once(|_| Err(AuthServiceError::Storage(RepositoryError::InvalidData)));

        let res = TestClient::get("http://example.com")
            .add_header(API_TOKEN_HEADER, "abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[tokio::test]
    async fn test_valid_token_injects_caller() -> TestResult {
        let user = make_user(TEST_USER_UUID, false);

        let mut auth = MockAuthService::new();

        auth.expect_authenticate_token()
            .once()
            .withf(|token| token == "abc123")
            .return_once(move |_| Ok(user));

        let mut res = TestClient::get("http://example.com")
            .add_header(API_TOKEN_HEADER, "abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, format!("{TEST_USER_UUID}:false"));

        Ok(())
    }
}
