use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub bootstrap_admin: Option<BootstrapAdminConfig>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Signing and encryption settings for the session cookie
#[derive(Clone)]
pub struct SessionConfig {
    /// Raw key material, at least [`SessionConfig::MIN_SECRET_LEN`] bytes
    pub secret: Vec<u8>,
    pub cookie_name: String,
    pub secure: bool,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("cookie_name", &self.cookie_name)
            .field("secure", &self.secure)
            .finish()
    }
}

/// Administrator account created at startup when no employee exists yet
#[derive(Clone)]
pub struct BootstrapAdminConfig {
    pub code: String,
    pub name: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdminConfig")
            .field("code", &self.code)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
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
            database: DatabaseConfig::from_env()?,
            session: SessionConfig::from_env()?,
            bootstrap_admin: BootstrapAdminConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        Ok(Self { host, port })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_var("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_var(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_var("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_var("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
        })
    }
}

impl SessionConfig {
    pub const MIN_SECRET_LEN: usize = 64;
    const DEFAULT_COOKIE_NAME: &'static str = "daily_report_session";

    pub fn from_env() -> Result<Self, String> {
        let secret = env::var("SESSION_SECRET")
            .map_err(|_| "SESSION_SECRET environment variable is required".to_string())?;
        let secret = Self::decode_secret(&secret)?;

        let cookie_name = env::var("SESSION_COOKIE_NAME")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_COOKIE_NAME.to_string());

        let secure = parse_var("SESSION_COOKIE_SECURE", false)?;

        Ok(Self {
            secret,
            cookie_name,
            secure,
        })
    }

    /// Decode a hex encoded secret and check it is long enough for a cookie key
    pub fn decode_secret(encoded: &str) -> Result<Vec<u8>, String> {
        let secret = hex::decode(encoded.trim())
            .map_err(|e| format!("SESSION_SECRET must be hex encoded: {}", e))?;

        if secret.len() < Self::MIN_SECRET_LEN {
            return Err(format!(
                "SESSION_SECRET must decode to at least {} bytes, got {}",
                Self::MIN_SECRET_LEN,
                secret.len()
            ));
        }

        Ok(secret)
    }
}

impl BootstrapAdminConfig {
    pub fn from_env() -> Result<Option<Self>, String> {
        let code = env::var("BOOTSTRAP_ADMIN_CODE").ok().filter(|s| !s.is_empty());
        let Some(code) = code else {
            return Ok(None);
        };

        let password = env::var("BOOTSTRAP_ADMIN_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                "BOOTSTRAP_ADMIN_PASSWORD is required when BOOTSTRAP_ADMIN_CODE is set".to_string()
            })?;

        let name =
            env::var("BOOTSTRAP_ADMIN_NAME").unwrap_or_else(|_| "Administrator".to_string());

        Ok(Some(Self {
            code,
            name,
            password,
        }))
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} has an invalid value", key)),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_secret_accepts_long_hex() {
        let encoded = "ab".repeat(64);
        let secret = SessionConfig::decode_secret(&encoded).unwrap();
        assert_eq!(secret.len(), 64);
        assert!(secret.iter().all(|b| *b == 0xab));
    }

    #[test]
    fn test_decode_secret_rejects_short_key() {
        let encoded = "ab".repeat(32);
        let err = SessionConfig::decode_secret(&encoded).unwrap_err();
        assert!(err.contains("at least 64 bytes"));
    }

    #[test]
    fn test_decode_secret_rejects_non_hex() {
        assert!(SessionConfig::decode_secret("not-a-hex-secret").is_err());
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(app.server_address(), "0.0.0.0:8080");
    }
}
