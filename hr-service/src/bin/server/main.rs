use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use auth::SigningSecret;
use auth::TokenService;
use hr_service::config::Config;
use hr_service::domain::auth::ports::AuthServicePort;
use hr_service::domain::auth::service::AuthenticationService;
use hr_service::domain::employee::ports::EmployeeServicePort;
use hr_service::domain::employee::service::EmployeeService;
use hr_service::domain::organization::ports::OrganizationServicePort;
use hr_service::domain::organization::service::OrganizationService;
use hr_service::inbound::http::router::create_router;
use hr_service::outbound::repositories::PostgresDepartmentRepository;
use hr_service::outbound::repositories::PostgresEmployeeRepository;
use hr_service::outbound::repositories::PostgresPositionRepository;
use hr_service::outbound::repositories::PostgresSalaryRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hr_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "hr-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        default_ttl_minutes = config.jwt.default_ttl_minutes,
        login_ttl_minutes = config.jwt.login_ttl_minutes,
        bcrypt_cost = config.password.bcrypt_cost,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    let secret = SigningSecret::from_config(config.jwt.secret.as_deref());
    if secret.is_generated() {
        tracing::warn!(
            "No jwt.secret configured; using a generated signing secret. \
             Tokens issued by this process become invalid on restart"
        );
    }

    let password_hasher = PasswordHasher::with_cost(config.password.bcrypt_cost);
    let token_service = TokenService::new(&secret).with_default_ttl(config.default_token_ttl());
    let authenticator = Arc::new(Authenticator::from_parts(password_hasher, token_service));

    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pg_pool.clone()));
    let department_repository = Arc::new(PostgresDepartmentRepository::new(pg_pool.clone()));
    let position_repository = Arc::new(PostgresPositionRepository::new(pg_pool.clone()));
    let salary_repository = Arc::new(PostgresSalaryRepository::new(pg_pool));

    let auth_service: Arc<dyn AuthServicePort> = Arc::new(AuthenticationService::new(
        Arc::clone(&employee_repository),
        authenticator,
        config.login_token_ttl(),
    ));
    let employee_service: Arc<dyn EmployeeServicePort> = Arc::new(EmployeeService::new(
        employee_repository,
        Arc::clone(&department_repository),
        Arc::clone(&position_repository),
        Arc::clone(&salary_repository),
        Arc::clone(&auth_service),
    ));
    let organization_service: Arc<dyn OrganizationServicePort> = Arc::new(
        OrganizationService::new(department_repository, position_repository, salary_repository),
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(employee_service, organization_service, auth_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
