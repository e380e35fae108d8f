use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::departments;
use super::handlers::employees;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::positions;
use super::handlers::salaries;
use super::middleware::require_admin;
use super::middleware::require_admin_or_staff;
use super::middleware::require_authenticated;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::organization::ports::OrganizationServicePort;

#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeServicePort>,
    pub organization_service: Arc<dyn OrganizationServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

pub fn create_router(
    employee_service: Arc<dyn EmployeeServicePort>,
    organization_service: Arc<dyn OrganizationServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
) -> Router {
    let state = AppState {
        employee_service,
        organization_service,
        auth_service,
    };

    let public_routes = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/employees/login", post(login))
        .route("/api/v1/employees", post(employees::create_employee));

    let self_service_routes = Router::new()
        .route(
            "/api/v1/employees/me",
            get(employees::get_current_employee).patch(employees::update_current_employee),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_authenticated,
        ));

    let staff_routes = Router::new()
        .route("/api/v1/employees", get(employees::list_employees))
        .route(
            "/api/v1/employees/:employee_id",
            get(employees::get_employee)
                .patch(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/api/v1/employees/:employee_id/block",
            post(employees::block_employee),
        )
        .route(
            "/api/v1/employees/:employee_id/unblock",
            post(employees::unblock_employee),
        )
        .route(
            "/api/v1/departments",
            get(departments::list_departments).post(departments::create_department),
        )
        .route(
            "/api/v1/departments/:department_id",
            get(departments::get_department)
                .patch(departments::update_department)
                .delete(departments::delete_department),
        )
        .route(
            "/api/v1/positions",
            get(positions::list_positions).post(positions::create_position),
        )
        .route(
            "/api/v1/positions/:position_id",
            get(positions::get_position)
                .patch(positions::update_position)
                .delete(positions::delete_position),
        )
        .route(
            "/api/v1/salaries",
            get(salaries::list_salaries).post(salaries::create_salary),
        )
        .route(
            "/api/v1/salaries/:salary_id",
            get(salaries::get_salary)
                .patch(salaries::update_salary)
                .delete(salaries::delete_salary),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_or_staff,
        ));

    let admin_routes = Router::new()
        .route(
            "/api/v1/employees/:employee_id/role",
            patch(employees::change_role),
        )
        .route(
            "/api/v1/employees/:employee_id/password",
            post(employees::reset_password),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(self_service_routes)
        .merge(staff_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
