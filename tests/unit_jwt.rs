mod common;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use common::TEST_SECRET;
use memepad::config::jwt::JwtConfig;
use memepad::modules::auth::model::Claims;
use memepad::modules::users::model::UserRole;
use memepad::utils::errors::AppError;
use memepad::utils::jwt::{create_access_token, verify_token};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();

    let result = create_access_token(Uuid::new_v4(), "0xabc123", &UserRole::User, &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_create_access_token_all_roles() {
    let jwt_config = get_test_jwt_config();

    for role in [UserRole::User, UserRole::Moderator, UserRole::Admin] {
        let result = create_access_token(Uuid::new_v4(), "0xabc123", &role, &jwt_config);
        assert!(result.is_ok());
    }
}

#[test]
fn test_verify_token_roundtrip() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token =
        create_access_token(user_id, "0xabc123", &UserRole::Moderator, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.address, "0xabc123");
    assert_eq!(claims.role, "moderator");
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = get_test_jwt_config();

    let result = verify_token("invalid.token.here", &jwt_config);

    assert!(matches!(result, Err(AppError::InvalidToken)));
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let other_config = JwtConfig {
        secret: "a_completely_different_secret".to_string(),
        access_token_expiry: 3600,
    };

    let token =
        create_access_token(Uuid::new_v4(), "0xabc123", &UserRole::User, &other_config).unwrap();
    let result = verify_token(&token, &jwt_config);

    assert!(matches!(result, Err(AppError::InvalidToken)));
}

#[test]
fn test_verify_token_expired() {
    let jwt_config = get_test_jwt_config();

    // Expired well past the default 60s validation leeway
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        address: "0xabc123".to_string(),
        role: "user".to_string(),
        exp: (now - 7200) as usize,
        iat: (now - 10800) as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = verify_token(&token, &jwt_config);

    assert!(matches!(result, Err(AppError::TokenExpired)));
}

#[test]
fn test_missing_secret_is_misconfiguration() {
    let jwt_config = JwtConfig {
        secret: String::new(),
        access_token_expiry: 3600,
    };

    let create_result =
        create_access_token(Uuid::new_v4(), "0xabc123", &UserRole::User, &jwt_config);
    assert!(matches!(create_result, Err(AppError::Misconfiguration(_))));

    let verify_result = verify_token("whatever", &jwt_config);
    assert!(matches!(verify_result, Err(AppError::Misconfiguration(_))));
}
