//! Delivery of password recovery codes.

use async_trait::async_trait;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};
use spendwise_core::constants::RECOVERY_CODE_TTL_MINUTES;
use spendwise_core::recovery::RecoveryMailerTrait;
use spendwise_core::{Error, Result};

use crate::config::SmtpConfig;

const SUBJECT: &str = "Password Recovery Code";

fn body_for(code: &str) -> String {
    format!(
        "Your password recovery code is: {code}. This code is valid for {RECOVERY_CODE_TTL_MINUTES} minutes."
    )
}

fn send_failed(reason: impl std::fmt::Display) -> Error {
    Error::Upstream(format!("Error sending recovery email: {reason}"))
}

/// Sends codes through an SMTP relay using STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port);
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }
        Ok(Self {
            transport: builder.build(),
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl RecoveryMailerTrait for SmtpMailer {
    async fn send_recovery_code(&self, email: &str, code: &str) -> Result<()> {
        let message = Message::builder()
            .from(self.from.parse().map_err(send_failed)?)
            .to(email.parse().map_err(send_failed)?)
            .subject(SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(body_for(code))
            .map_err(send_failed)?;

        self.transport.send(message).await.map_err(send_failed)?;
        tracing::debug!("Recovery mail handed to relay for {}", email);
        Ok(())
    }
}

/// Development stand-in used when no relay is configured: writes the code to the log.
pub struct LogMailer;

#[async_trait]
impl RecoveryMailerTrait for LogMailer {
    async fn send_recovery_code(&self, email: &str, code: &str) -> Result<()> {
        tracing::warn!(
            "SMTP not configured; recovery mail for {}: {}",
            email,
            body_for(code)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_mentions_code_and_lifetime() {
        let body = body_for("123456");
        assert!(body.contains("123456"));
        assert!(body.contains("15 minutes"));
    }

    #[tokio::test]
    async fn log_mailer_always_succeeds() {
        LogMailer
            .send_recovery_code("someone@test.com", "654321")
            .await
            .unwrap();
    }
}
