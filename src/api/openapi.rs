//! OpenAPI documentation and schema generation
//!
//! This module defines the OpenAPI specification for the movie-directors
//! REST API using utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the movie-directors REST API
///
/// This struct is used to generate the OpenAPI 3.1 specification that
/// describes all available endpoints, request/response types, and API
/// behavior.
///
/// The spec can be accessed via:
/// - `/api/v1/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "movie-directors REST API",
        version = "0.1.0",
        description = "REST API answering which directors exceed a movie-count threshold in a paginated movie catalog",
        contact(
            name = "movie-directors",
            url = "https://github.com/jvz-devx/movie-directors"
        ),
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8080/api/v1", description = "Local development server")
    ),
    paths(
        // Directors
        crate::api::routes::get_directors,

        // System
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        // Core types from types.rs
        crate::types::MovieRecord,
        crate::types::PageEnvelope,
        crate::types::DirectorsResponse,

        // Config types from config.rs
        crate::config::Config,
        crate::config::CatalogConfig,
        crate::config::CacheConfig,
        crate::config::ApiConfig,
        crate::config::RetryConfig,

        // Error types from error.rs
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "directors", description = "Director lookup - Directors whose movie count exceeds a threshold"),
        (name = "system", description = "System endpoints - Health checks and OpenAPI spec"),
    )
)]
pub struct ApiDoc;
