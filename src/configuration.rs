use std::time::Duration;
use thiserror::Error;

use crate::cors::AllowedOrigins;

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid number, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{0} is not a supported environment. Use either `development` or `production`.")]
    UnknownEnvironment(String),

    #[error("{0} is not a supported SMTP security mode. Use `tls`, `starttls` or `none`.")]
    UnknownSecurityMode(String),
}

/// # Service Settings
///
/// Everything the service reads from its environment at startup. Values come
/// from process environment variables, optionally seeded from a `.env` file.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | `APP_HOST` | `127.0.0.1` | Bind address |
/// | `APP_PORT` | `8080` | Bind port |
/// | `APP_ENVIRONMENT` | `production` | `development` echoes internal error detail |
/// | `SMTP_HOST` | `smtp.gmail.com` | SMTP relay |
/// | `SMTP_PORT` | `465` | SMTP port |
/// | `SMTP_SECURE` | `tls` on 465, else `starttls` | `tls`, `starttls` or `none` |
/// | `SMTP_USER` / `SMTP_PASS` | unset | Credentials; both required to send mail |
/// | `SMTP_FROM` | `SMTP_USER` | Sender address |
/// | `SMTP_TIMEOUT_SECS` | `30` | Upper bound for a single send |
/// | `ADMIN_EMAIL` | unset | Operator notification target |
/// | `HOSPITAL_NAME` / `HOSPITAL_ADDRESS` / `HOSPITAL_PHONE` | Apex Hospital | Template branding |
/// | `CORS_ALLOWED_ORIGINS` | `*` | `*`, `echo` or a comma separated allow-list |
#[derive(Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
    pub hospital: HospitalSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
}

/// The runtime environment the service is deployed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// Internal fault detail is only echoed to callers in development.
    pub fn exposes_error_details(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::UnknownEnvironment(value)),
        }
    }
}

/// Transport security used when talking to the SMTP relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Implicit TLS from the first byte (usually port 465).
    Tls,
    /// Plain connection upgraded with STARTTLS (usually port 587).
    StartTls,
    /// No encryption. Only useful against local relays.
    None,
}

impl TryFrom<String> for SmtpSecurity {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "tls" | "ssl" | "true" => Ok(Self::Tls),
            "starttls" | "false" => Ok(Self::StartTls),
            "none" | "plain" => Ok(Self::None),
            _ => Err(ConfigError::UnknownSecurityMode(value)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub host: String,
    pub port: u16,
    pub security: SmtpSecurity,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: Option<String>,
    pub admin_email: Option<String>,
    pub timeout: Duration,
}

impl EmailSettings {
    /// Username and password, only when both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }

    /// Address used in the `From` header of every outgoing message.
    pub fn sender(&self) -> Option<&str> {
        self.from.as_deref().or(self.username.as_deref())
    }
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            security: SmtpSecurity::Tls,
            username: None,
            password: None,
            from: None,
            admin_email: None,
            timeout: Duration::from_secs(DEFAULT_SMTP_TIMEOUT_SECS),
        }
    }
}

/// Branding shown in confirmation emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalSettings {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Default for HospitalSettings {
    fn default() -> Self {
        Self {
            name: "Apex Hospital".to_string(),
            address: "Plot No 1 and 6, Vijapur Rd, opp. to Galaxy Panache, Yamini Nagar, \
                      Swami Vivekanand Nagar 2, Solapur, Maharashtra 413007"
                .to_string(),
            phone: "0217 260 0603".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origins: AllowedOrigins,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let environment = match get("APP_ENVIRONMENT") {
            Some(value) => Environment::try_from(value)?,
            None => Environment::Production,
        };
        let application = ApplicationSettings {
            host: get("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_number("APP_PORT", get("APP_PORT"), 8080)?,
            environment,
        };

        let port = parse_number("SMTP_PORT", get("SMTP_PORT"), DEFAULT_SMTP_PORT)?;
        let security = match get("SMTP_SECURE") {
            Some(value) => SmtpSecurity::try_from(value)?,
            None if port == 465 => SmtpSecurity::Tls,
            None => SmtpSecurity::StartTls,
        };
        let timeout_secs = parse_number(
            "SMTP_TIMEOUT_SECS",
            get("SMTP_TIMEOUT_SECS"),
            DEFAULT_SMTP_TIMEOUT_SECS,
        )?;
        let email = EmailSettings {
            host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            port,
            security,
            username: get("SMTP_USER"),
            password: get("SMTP_PASS"),
            from: get("SMTP_FROM"),
            admin_email: get("ADMIN_EMAIL"),
            timeout: Duration::from_secs(timeout_secs),
        };

        let defaults = HospitalSettings::default();
        let hospital = HospitalSettings {
            name: get("HOSPITAL_NAME").unwrap_or(defaults.name),
            address: get("HOSPITAL_ADDRESS").unwrap_or(defaults.address),
            phone: get("HOSPITAL_PHONE").unwrap_or(defaults.phone),
        };

        let cors = CorsSettings {
            allowed_origins: AllowedOrigins::parse(get("CORS_ALLOWED_ORIGINS").as_deref()),
        };

        Ok(Self {
            application,
            email,
            hospital,
            cors,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.application.host, "127.0.0.1");
        assert_eq!(settings.application.port, 8080);
        assert_eq!(settings.application.environment, Environment::Production);
        assert_eq!(settings.email.host, "smtp.gmail.com");
        assert_eq!(settings.email.port, 465);
        assert_eq!(settings.email.security, SmtpSecurity::Tls);
        assert!(settings.email.credentials().is_none());
        assert!(settings.email.admin_email.is_none());
        assert_eq!(settings.hospital, HospitalSettings::default());
        assert_eq!(settings.cors.allowed_origins, AllowedOrigins::Any);
    }

    #[test]
    fn test_credentials_require_user_and_password() {
        let settings = settings_from(&[("SMTP_USER", "mailer@apex.test")]).unwrap();
        assert!(settings.email.credentials().is_none());
        assert_eq!(settings.email.sender(), Some("mailer@apex.test"));

        let settings = settings_from(&[
            ("SMTP_USER", "mailer@apex.test"),
            ("SMTP_PASS", "secret"),
            ("SMTP_FROM", "noreply@apex.test"),
        ])
        .unwrap();
        assert_eq!(
            settings.email.credentials(),
            Some(("mailer@apex.test", "secret"))
        );
        assert_eq!(settings.email.sender(), Some("noreply@apex.test"));
    }

    #[test]
    fn test_blank_values_are_treated_as_unset() {
        let settings = settings_from(&[("ADMIN_EMAIL", "   "), ("SMTP_PASS", "")]).unwrap();
        assert!(settings.email.admin_email.is_none());
        assert!(settings.email.password.is_none());
    }

    #[test]
    fn test_security_defaults_to_starttls_off_port_465() {
        let settings = settings_from(&[("SMTP_PORT", "587")]).unwrap();
        assert_eq!(settings.email.security, SmtpSecurity::StartTls);

        let settings = settings_from(&[("SMTP_PORT", "587"), ("SMTP_SECURE", "tls")]).unwrap();
        assert_eq!(settings.email.security, SmtpSecurity::Tls);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_eq!(
            settings_from(&[("SMTP_PORT", "smtp")]).unwrap_err(),
            ConfigError::InvalidNumber {
                key: "SMTP_PORT",
                value: "smtp".to_string()
            }
        );
        assert!(matches!(
            settings_from(&[("APP_ENVIRONMENT", "banana")]),
            Err(ConfigError::UnknownEnvironment(_))
        ));
        assert!(matches!(
            settings_from(&[("SMTP_SECURE", "maybe")]),
            Err(ConfigError::UnknownSecurityMode(_))
        ));
    }

    #[test]
    fn test_environment_controls_error_details() {
        let settings = settings_from(&[("APP_ENVIRONMENT", "Development")]).unwrap();
        assert!(settings.application.environment.exposes_error_details());
        assert!(!Environment::Production.exposes_error_details());
    }

    #[test]
    fn test_timeout_and_branding_overrides() {
        let settings = settings_from(&[
            ("SMTP_TIMEOUT_SECS", "5"),
            ("HOSPITAL_NAME", "Riverside Clinic"),
        ])
        .unwrap();
        assert_eq!(settings.email.timeout, Duration::from_secs(5));
        assert_eq!(settings.hospital.name, "Riverside Clinic");
        assert_eq!(settings.hospital.phone, HospitalSettings::default().phone);
    }
}
