use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::admin::model::{AdminStatsResponse, FlagTokenDto, UpdateTokenStatusDto};
use crate::modules::analytics::model::{OverviewResponse, TokenStatsResponse};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{MessageResponse, SessionRequest, SessionResponse};
use crate::modules::health::controller::{BannerResponse, HealthResponse};
use crate::modules::tokens::model::{CreateTokenDto, LaunchToken, TokenStatus};
use crate::modules::users::controller::ProfileResponse;
use crate::modules::users::model::{UpdateProfileDto, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::get_health,
        crate::modules::auth::controller::create_session,
        crate::modules::tokens::controller::list_tokens,
        crate::modules::tokens::controller::create_token,
        crate::modules::tokens::controller::get_token,
        crate::modules::tokens::controller::delete_token,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::get_users,
        crate::modules::analytics::controller::get_overview,
        crate::modules::analytics::controller::get_token_stats,
        crate::modules::admin::controller::get_admin_stats,
        crate::modules::admin::controller::update_token_status,
        crate::modules::admin::controller::flag_token,
    ),
    components(
        schemas(
            User,
            UserRole,
            UpdateProfileDto,
            ProfileResponse,
            SessionRequest,
            SessionResponse,
            MessageResponse,
            LaunchToken,
            TokenStatus,
            CreateTokenDto,
            OverviewResponse,
            TokenStatsResponse,
            AdminStatsResponse,
            UpdateTokenStatusDto,
            FlagTokenDto,
            HealthResponse,
            BannerResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health endpoints"),
        (name = "Authentication", description = "Wallet session endpoints"),
        (name = "Tokens", description = "Launchpad token listings"),
        (name = "Users", description = "User profile endpoints"),
        (name = "Analytics", description = "Launchpad activity metrics"),
        (name = "Admin", description = "Administration and moderation"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
