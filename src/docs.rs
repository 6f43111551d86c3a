use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{ForgotPasswordRequest, MessageResponse};
use crate::modules::health::model::{ActuatorHealthResponse, HealthResponse, RootResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::root,
        crate::modules::health::controller::health,
        crate::modules::health::controller::actuator_health,
        crate::modules::health::controller::hello,
        crate::modules::auth::controller::forgot_password,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            ActuatorHealthResponse,
            ForgotPasswordRequest,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness endpoints"),
        (name = "Authentication", description = "Password recovery endpoints")
    ),
    info(
        title = "Insurai Backend API",
        version = "0.1.0",
        description = "REST backend for the InsurAI corporate insurance platform, featuring per-audience JWT verification and path-based access control.",
        contact(
            name = "API Support",
            email = "support@insurai.com"
        ),
        license(
            name = "MIT"
        )
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
            )
        }
    }
}
