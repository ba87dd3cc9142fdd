use crate::config::MailConfig;
use crate::error::AppError;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

/// Outbound mail for password-reset links.
///
/// When no `mail` section is configured the reset link is logged instead of
/// sent, so the flow stays usable in local development.
#[derive(Clone)]
pub struct Mailer {
    transport: Option<SmtpSender>,
}

#[derive(Clone)]
struct SmtpSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl Mailer {
    pub fn from_config(config: Option<&MailConfig>) -> Result<Self, anyhow::Error> {
        let transport = match config {
            Some(cfg) => {
                let creds = Credentials::new(cfg.username.clone(), cfg.password.clone());
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.smtp_host)?
                    .port(cfg.smtp_port)
                    .credentials(creds)
                    .build();
                Some(SmtpSender {
                    transport,
                    from: cfg.from.clone(),
                })
            }
            None => None,
        };
        Ok(Self { transport })
    }

    /// Mailer that only logs, for tests and local runs.
    pub fn disabled() -> Self {
        Self { transport: None }
    }

    pub async fn send_reset_link(&self, to: &str, link: &str) -> Result<(), AppError> {
        let Some(sender) = &self.transport else {
            info!(email = %to, link = %link, "mail disabled, logging reset link");
            return Ok(());
        };

        let body = format!(
            "<h2>Password reset</h2>\
             <p>You asked to reset your ZenHome password.</p>\
             <p><a href=\"{link}\">Reset my password</a></p>\
             <p>This link expires in one hour. If you did not ask for a \
             reset, ignore this email.</p>"
        );

        let message = Message::builder()
            .from(
                sender
                    .from
                    .parse()
                    .map_err(|e| AppError::Mail(format!("invalid from address: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| AppError::Mail(format!("invalid recipient: {}", e)))?)
            .subject("ZenHome password reset")
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| AppError::Mail(format!("failed to build message: {}", e)))?;

        sender
            .transport
            .send(message)
            .await
            .map_err(|e| AppError::Mail(format!("failed to send: {}", e)))?;

        Ok(())
    }
}
