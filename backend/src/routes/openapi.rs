//! OpenAPI document and the Swagger UI served at `/docs`

use super::{auth, events};
use crate::config::AppConfig;
use crate::repositories::{EventDetail, EventRecord};
use events_shared::{EventPayload, LoginRequest, PublicUser, SignupRequest, TokenResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Where the generated document is served
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events API",
        description = "Logged in users create, edit and view their events. Anyone can view all events."
    ),
    paths(
        auth::signup,
        auth::login,
        auth::protected,
        events::list_events,
        events::list_my_events,
        events::get_event,
        events::create_event,
        events::update_event,
    ),
    components(schemas(
        SignupRequest,
        LoginRequest,
        PublicUser,
        TokenResponse,
        EventPayload,
        EventRecord,
        EventDetail
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Signup, login and token check"),
        (name = "events", description = "Event listing and management"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearerAuth` scheme referenced by protected operations
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// The document with the configured listen address as its server
pub fn api_doc(config: &AppConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(format!(
        "http://{}:{}",
        config.server.host, config.server.port
    ))]);
    doc
}

/// Swagger UI at `/docs`, backed by the JSON document
pub fn docs_routes(config: &AppConfig) -> SwaggerUi {
    SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, api_doc(config))
}
