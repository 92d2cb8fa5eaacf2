use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use spendwise_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    recovery::{RecoveryMailerTrait, RecoveryService, RecoveryServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    users::{UserService, UserServiceTrait},
};
use spendwise_storage_sqlite::{
    db::{self, write_actor},
    BudgetRepository, ExpenseRepository, RecoveryCodeRepository, UserRepository,
};

use crate::config::Config;
use crate::mailer::{LogMailer, SmtpMailer};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub recovery_service: Arc<dyn RecoveryServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn build_mailer(config: &Config) -> anyhow::Result<Arc<dyn RecoveryMailerTrait>> {
    match &config.smtp {
        Some(smtp) => {
            tracing::info!("Recovery mail via SMTP relay {}:{}", smtp.host, smtp.port);
            Ok(Arc::new(SmtpMailer::new(smtp)?))
        }
        None => {
            tracing::warn!("SW_SMTP_HOST not set; recovery codes will be written to the log");
            Ok(Arc::new(LogMailer))
        }
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer(pool.as_ref().clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let recovery_repository = Arc::new(RecoveryCodeRepository::new(pool.clone(), writer.clone()));

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let expense_service = Arc::new(ExpenseService::new(
        expense_repository.clone(),
        user_repository.clone(),
    ));
    let budget_service = Arc::new(BudgetService::new(
        budget_repository.clone(),
        user_repository.clone(),
    ));
    let report_service = Arc::new(ReportService::new(
        expense_repository,
        budget_repository,
        user_repository.clone(),
    ));
    let recovery_service = Arc::new(RecoveryService::new(
        recovery_repository,
        user_repository,
        build_mailer(config)?,
    ));

    Ok(Arc::new(AppState {
        user_service,
        expense_service,
        budget_service,
        report_service,
        recovery_service,
    }))
}
