use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::constants::DEFAULT_MAIL_SUBJECT;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub mail: MailConfig,
    pub checklist: ChecklistConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Outbound SMTP settings
#[derive(Clone)]
pub struct MailConfig {
    /// Account used to authenticate against the SMTP relay
    pub username: String,
    /// Application password for the account
    pub password: String,
    /// Fixed operator address every inspection is sent to
    pub recipient: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub timeout: Duration,
    pub subject: String,
}

// Keeps the application password out of logs.
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("recipient", &self.recipient)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("timeout", &self.timeout)
            .field("subject", &self.subject)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ChecklistConfig {
    /// Optional JSON catalog replacing the built-in scaffolding checklist
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            mail: MailConfig::from_env()?,
            checklist: ChecklistConfig::from_env(),
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    // 5 images of 5MB plus multipart overhead and text fields
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 26 * 1024 * 1024;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MailConfig {
    const DEFAULT_SMTP_HOST: &'static str = "smtp.gmail.com";
    const DEFAULT_SMTP_PORT: u16 = 465;
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let username = env::var("EMAIL_USER")
            .map_err(|_| "EMAIL_USER environment variable is required".to_string())?;

        let password = env::var("EMAIL_PASS")
            .map_err(|_| "EMAIL_PASS environment variable is required".to_string())?;

        let recipient = env::var("MAIL_RECIPIENT")
            .map_err(|_| "MAIL_RECIPIENT environment variable is required".to_string())?;

        let smtp_host =
            env::var("SMTP_HOST").unwrap_or_else(|_| Self::DEFAULT_SMTP_HOST.to_string());

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| Self::DEFAULT_SMTP_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| "SMTP_PORT must be a valid port number".to_string())?;

        let timeout_secs = env::var("SMTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "SMTP_TIMEOUT_SECS must be a valid number".to_string())?;

        let subject =
            env::var("MAIL_SUBJECT").unwrap_or_else(|_| DEFAULT_MAIL_SUBJECT.to_string());

        Ok(Self {
            username,
            password,
            recipient,
            smtp_host,
            smtp_port,
            timeout: Duration::from_secs(timeout_secs),
            subject,
        })
    }
}

impl ChecklistConfig {
    pub fn from_env() -> Self {
        let path = env::var("CHECKLIST_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self { path }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Inspección de Andamios API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Recepción de formularios de inspección de andamios y envío por correo".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
