use serde::{Deserialize, Serialize};

/// Region used when `IMJS_BUDDI_RESOLVE_URL_USING_REGION` is missing or unparsable.
pub const DEFAULT_REGION: i32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub buddi_region: i32,
    pub oidc: OidcConfig,
    pub viewer: ViewerConfig,
}

/// Settings handed to the browser authorization library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcConfig {
    pub client_id: String,
    pub redirect_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_signout_redirect_uri: Option<String>,
    pub scope: String,
    pub response_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
}

impl Default for OidcConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            redirect_uri: String::new(),
            post_signout_redirect_uri: None,
            scope: String::new(),
            response_type: "code".to_string(),
            authority: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub context_id: String,
    pub imodel_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            buddi_region: DEFAULT_REGION,
            oidc: OidcConfig::default(),
            viewer: ViewerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from variables captured at compile time
    pub fn from_env() -> Self {
        Self::from_lookup(compiled_var)
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let buddi_region = match lookup("IMJS_BUDDI_RESOLVE_URL_USING_REGION") {
            None => DEFAULT_REGION,
            Some(raw) => match parse_region(&raw) {
                Some(region) => {
                    log::info!("🌍 Buddi region set to {}", region);
                    region
                }
                None => {
                    log::warn!(
                        "⚠️ Invalid region '{}', falling back to {}",
                        raw,
                        DEFAULT_REGION
                    );
                    DEFAULT_REGION
                }
            },
        };

        Self {
            buddi_region,
            oidc: OidcConfig {
                client_id: lookup("AUTH_CLIENT_CLIENT_ID").unwrap_or_default(),
                redirect_uri: lookup("AUTH_CLIENT_REDIRECT_URI").unwrap_or_default(),
                post_signout_redirect_uri: lookup("AUTH_CLIENT_LOGOUT_URI")
                    .filter(|uri| !uri.is_empty()),
                scope: lookup("AUTH_CLIENT_SCOPES").unwrap_or_default(),
                authority: lookup("AUTH_CLIENT_AUTHORITY").filter(|uri| !uri.is_empty()),
                ..OidcConfig::default()
            },
            viewer: ViewerConfig {
                context_id: lookup("TEST_CONTEXT_ID").unwrap_or_default(),
                imodel_id: lookup("TEST_IMODEL_ID").unwrap_or_default(),
            },
        }
    }
}

/// Reads the integer prefix of `raw`, the way `parseInt(raw, 10)` does.
pub fn parse_region(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok().map(|n| sign * n)
}

// option_env! needs literal names
fn compiled_var(key: &str) -> Option<String> {
    let value = match key {
        "IMJS_BUDDI_RESOLVE_URL_USING_REGION" => option_env!("IMJS_BUDDI_RESOLVE_URL_USING_REGION"),
        "AUTH_CLIENT_SCOPES" => option_env!("AUTH_CLIENT_SCOPES"),
        "AUTH_CLIENT_CLIENT_ID" => option_env!("AUTH_CLIENT_CLIENT_ID"),
        "AUTH_CLIENT_REDIRECT_URI" => option_env!("AUTH_CLIENT_REDIRECT_URI"),
        "AUTH_CLIENT_LOGOUT_URI" => option_env!("AUTH_CLIENT_LOGOUT_URI"),
        "AUTH_CLIENT_AUTHORITY" => option_env!("AUTH_CLIENT_AUTHORITY"),
        "TEST_CONTEXT_ID" => option_env!("TEST_CONTEXT_ID"),
        "TEST_IMODEL_ID" => option_env!("TEST_IMODEL_ID"),
        _ => None,
    };
    value.map(str::to_string)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_variables_use_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.buddi_region, 0);
        assert_eq!(config.oidc.response_type, "code");
        assert!(config.oidc.post_signout_redirect_uri.is_none());
    }

    #[test]
    fn reads_oidc_and_viewer_settings() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("IMJS_BUDDI_RESOLVE_URL_USING_REGION", "102"),
            ("AUTH_CLIENT_CLIENT_ID", "spa-client"),
            ("AUTH_CLIENT_REDIRECT_URI", "http://localhost:8080/signin-callback"),
            ("AUTH_CLIENT_LOGOUT_URI", "http://localhost:8080/logout"),
            ("AUTH_CLIENT_SCOPES", "openid profile"),
            ("TEST_CONTEXT_ID", "ctx-1"),
            ("TEST_IMODEL_ID", "imodel-1"),
        ]));

        assert_eq!(config.buddi_region, 102);
        assert_eq!(config.oidc.client_id, "spa-client");
        assert_eq!(config.oidc.scope, "openid profile");
        assert_eq!(
            config.oidc.post_signout_redirect_uri.as_deref(),
            Some("http://localhost:8080/logout")
        );
        assert_eq!(config.viewer.context_id, "ctx-1");
        assert_eq!(config.viewer.imodel_id, "imodel-1");
    }

    #[test]
    fn empty_logout_uri_is_treated_as_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[("AUTH_CLIENT_LOGOUT_URI", "")]));
        assert!(config.oidc.post_signout_redirect_uri.is_none());
    }

    #[test]
    fn region_uses_integer_prefix() {
        assert_eq!(parse_region("0"), Some(0));
        assert_eq!(parse_region("  102abc"), Some(102));
        assert_eq!(parse_region("-1"), Some(-1));
        assert_eq!(parse_region("+3"), Some(3));
        assert_eq!(parse_region("abc"), None);
        assert_eq!(parse_region(""), None);
    }

    #[test]
    fn unparsable_region_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "IMJS_BUDDI_RESOLVE_URL_USING_REGION",
            "prod",
        )]));
        assert_eq!(config.buddi_region, DEFAULT_REGION);
    }

    #[test]
    fn oidc_config_serializes_in_camel_case() {
        let json = serde_json::to_value(OidcConfig {
            client_id: "id".into(),
            redirect_uri: "uri".into(),
            ..OidcConfig::default()
        })
        .unwrap();

        assert_eq!(json["clientId"], "id");
        assert_eq!(json["redirectUri"], "uri");
        assert_eq!(json["responseType"], "code");
        assert!(json.get("postSignoutRedirectUri").is_none());
        assert!(json.get("authority").is_none());
    }
}
