use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use crate::core::state::AppState;
use crate::domain::entities::users::User;
use crate::errors::AppError;

/// 인증된 사용자 추출자
///
/// `Authorization: Bearer <token>` 헤더를 검증하고 토큰의 사용자를 조회합니다.
/// 요청 객체를 변경하지 않고 핸들러 파라미터로만 사용자를 전달합니다.
///
/// | 상황 | 응답 |
/// |------|------|
/// | 토큰 없음 | 401 "Please login to access this resource" |
/// | 서명 불일치/형식 오류 | 401 `AppError::InvalidToken` |
/// | 만료 | 401 `AppError::TokenExpired` |
/// | 사용자 삭제됨 | 401 "User no longer exists" |
///
/// ```rust,ignore
/// #[get("/me")]
/// async fn get_me(current_user: CurrentUser) -> Result<HttpResponse, AppError> {
///     Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(current_user.into_inner()))))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let header = req
            .headers()
            .get(actix_web::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            let state = state
                .ok_or_else(|| AppError::InternalError("AppState is not registered".to_string()))?;

            let token = header
                .as_deref()
                .and_then(crate::services::auth::token_service::extract_bearer_token)
                .ok_or_else(|| {
                    AppError::AuthenticationError("Please login to access this resource".to_string())
                })?;

            let claims = state.tokens.verify_token(token)?;

            match state.users.get_user(&claims.sub).await {
                Ok(user) => Ok(CurrentUser(user)),
                Err(AppError::NotFound(_)) => {
                    Err(AppError::AuthenticationError("User no longer exists".to_string()))
                }
                Err(e) => Err(e),
            }
        })
    }
}
