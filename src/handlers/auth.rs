//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, Google 로그인, 현재 사용자 조회 엔드포인트입니다.
//! 인증 성공 시 HS256 JWT를 발급하며, 클라이언트는 `Authorization: Bearer <token>`으로 사용합니다.
//!
//! # Auth Providers
//!
//! - **로컬 인증**: 이메일/패스워드 방식 (`POST /api/auth/register`, `POST /api/auth/login`)
//! - **Google**: Google ID 토큰 검증 (`POST /api/auth/google`)
//! - **현재 사용자**: Bearer 토큰 필요 (`GET /api/auth/me`)
use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::{
    core::AppState,
    domain::{
        dto::{
            users::{
                request::{GoogleAuthRequest, LoginRequest, RegisterRequest},
                response::{AuthResponse, UserResponse},
            },
            ApiResponse,
        },
        entities::users::User,
        models::auth::CurrentUser,
    },
    errors::AppError,
};

fn auth_response(state: &AppState, user: &User) -> Result<ApiResponse<AuthResponse>, AppError> {
    let token = state.tokens.generate_token(user)?;
    Ok(ApiResponse::success(AuthResponse::new(user, token)))
}

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/auth/register`
///
/// 성공 시 201 Created와 함께 사용자 정보와 토큰을 반환합니다.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.users.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(auth_response(&state, &user)?))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.users.login(payload.into_inner()).await?;

    log::info!("로컬 로그인 성공 - 사용자: {}", user.email);

    Ok(HttpResponse::Ok().json(auth_response(&state, &user)?))
}

/// Google 로그인 핸들러
///
/// # Endpoint
/// `POST /api/auth/google`
///
/// 클라이언트가 받은 Google ID 토큰을 검증하고, 이메일 또는 Google ID로
/// 기존 사용자를 찾거나 새로 생성합니다.
#[post("/google")]
pub async fn google_login(
    state: web::Data<AppState>,
    payload: web::Json<GoogleAuthRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let identity = state.google.verify(&payload.token).await?;
    let user = state.users.find_or_create_google_user(identity).await?;

    log::info!("Google 로그인 성공 - 사용자: {}", user.email);

    Ok(HttpResponse::Ok().json(auth_response(&state, &user)?))
}

/// 현재 사용자 정보 조회 핸들러
///
/// # Endpoint
/// `GET /api/auth/me`
///
/// # Headers
/// `Authorization: Bearer <token>`
#[get("/me")]
pub async fn get_current_user(current_user: CurrentUser) -> Result<HttpResponse, AppError> {
    let user = UserResponse::from(current_user.into_inner());

    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({ "user": user }))))
}
