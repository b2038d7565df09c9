use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use delay_core::{respond, Bounds, DelayConfig, HealthResponse};

pub mod paths {
    pub const INSTANCE1: &str = "/instance1";
    pub const INSTANCE2: &str = "/instance2";
    pub const INSTANCE3: &str = "/instance3";
    pub const HEALTH: &str = "/health";
}

/// A route whose delay range is fixed at compile time.
#[derive(Clone, Copy, Debug)]
pub struct FixedRoute {
    pub path: &'static str,
    pub service_name: &'static str,
    pub bounds: Bounds,
}

pub const FIXED_ROUTES: [FixedRoute; 3] = [
    FixedRoute {
        path: paths::INSTANCE1,
        service_name: "instance1",
        bounds: Bounds::new(500, 1_000),
    },
    FixedRoute {
        path: paths::INSTANCE2,
        service_name: "instance2",
        bounds: Bounds::new(1_000, 2_000),
    },
    FixedRoute {
        path: paths::INSTANCE3,
        service_name: "instance3",
        bounds: Bounds::new(2_000, 4_000),
    },
];

pub fn fixed_router() -> Router {
    FIXED_ROUTES.iter().fold(Router::new(), |router, route| {
        let route = *route;
        router.route(route.path, get(move || fixed_route(route)))
    })
}

async fn fixed_route(route: FixedRoute) -> Json<HealthResponse> {
    Json(respond(route.bounds, route.service_name).await)
}

/// `/health` with defaults from `config`, overridable per request through
/// `min`, `max` and `service`.
pub fn health_router(config: DelayConfig) -> Router {
    Router::new()
        .route(paths::HEALTH, get(health))
        .with_state(config.defaults)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct HealthParams {
    service: Option<String>,
    min: Option<String>,
    max: Option<String>,
}

impl HealthParams {
    /// First occurrence of each key wins; unknown keys are ignored.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "service" => &mut params.service,
                "min" => &mut params.min,
                "max" => &mut params.max,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

async fn health(
    State(defaults): State<Bounds>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<HealthResponse> {
    let params = match query {
        Ok(Query(pairs)) => HealthParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(%rejection, "ignoring undecodable query string");
            HealthParams::default()
        }
    };
    let bounds = defaults.with_overrides(params.min.as_deref(), params.max.as_deref());
    Json(respond(bounds, params.service.unwrap_or_default()).await)
}
