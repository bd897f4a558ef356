use std::any::Any;

use log::info;
use portal_states::State;
use serde::Deserialize;
use ustr::Ustr;

/// Environment variables are read with this prefix stripped, e.g.
/// `PORTAL_API_BASE_URL` becomes `api_base_url`.
const ENV_PREFIX: &str = "PORTAL";

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Session cookie forwarded to the backend as a `Cookie` header.
    ///
    /// The HTTP client also keeps its own cookie store, so this is only needed
    /// when the session was established outside the app.
    pub session_cookie: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    session_cookie: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            session_cookie: None,
        }
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Read `PORTAL_API_BASE_URL` and `PORTAL_SESSION_COOKIE`, falling back
    /// to the compiled-in defaults for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter_with_prefix(vars, ENV_PREFIX)?;
        let mut config = Self::default();
        if let Some(base) = raw.api_base_url.filter(|base| !base.trim().is_empty()) {
            config.api_base_url = base;
        }
        config.session_cookie = raw.session_cookie.filter(|cookie| !cookie.is_empty());

        info!("Using API base url {}", config.api_base_url);
        Ok(config)
    }

    pub fn api_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        if base.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{base}/api"))
        }
    }

    pub fn session_cookie(&self) -> Option<&str> {
        self.session_cookie.as_deref()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(feature = "env_test") {
                "https://portal-test.medbenefits.in".to_owned()
            } else if cfg!(feature = "env_internal") {
                "https://portal-internal.medbenefits.in".to_owned()
            } else {
                "http://localhost:5000".to_owned()
            },
            session_cookie: None,
        }
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
