//! Core types shared by the utility modules

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Mobile operating system the host application runs on.
///
/// Serialized as a plain string and parsed case-insensitively, the same way
/// as [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Ios,
    Android,
    /// Any other platform name, kept verbatim (e.g. "web", "windows")
    Other(String),
}

impl Platform {
    pub fn is_ios(&self) -> bool {
        matches!(self, Platform::Ios)
    }

    pub fn is_android(&self) -> bool {
        matches!(self, Platform::Android)
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Platform::from(s.to_string()))
    }
}

impl From<String> for Platform {
    fn from(name: String) -> Self {
        match name.to_lowercase().as_str() {
            "ios" => Platform::Ios,
            "android" => Platform::Android,
            _ => Platform::Other(name),
        }
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.to_string()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
            Platform::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Lifecycle of an outgoing request as tracked by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestState {
    Idle,
    Pending,
    Completed,
    Failed,
}

impl RequestState {
    pub fn is_completed(&self) -> bool {
        *self == RequestState::Completed
    }
}

impl FromStr for RequestState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(RequestState::Idle),
            "pending" => Ok(RequestState::Pending),
            "completed" => Ok(RequestState::Completed),
            "failed" => Ok(RequestState::Failed),
            _ => Err(format!("Unknown request state: '{}'", s)),
        }
    }
}

/// Arguments for the native share sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str_case_insensitive() {
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("ANDROID".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!(
            "web".parse::<Platform>().unwrap(),
            Platform::Other("web".to_string())
        );
    }

    #[test]
    fn test_platform_serde() {
        assert_eq!(serde_json::to_string(&Platform::Ios).unwrap(), "\"ios\"");
        let parsed: Platform = serde_json::from_str("\"android\"").unwrap();
        assert_eq!(parsed, Platform::Android);
        let other: Platform = serde_json::from_str("\"macos\"").unwrap();
        assert_eq!(other, Platform::Other("macos".to_string()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"macos\"");
    }

    #[test]
    fn test_platform_deserialize_case_insensitive() {
        let ios: Platform = serde_json::from_str("\"iOS\"").unwrap();
        assert_eq!(ios, Platform::Ios);
        let android: Platform = serde_json::from_str("\"ANDROID\"").unwrap();
        assert_eq!(android, Platform::Android);
        assert_eq!(ios, "iOS".parse::<Platform>().unwrap());
    }

    #[test]
    fn test_request_state_is_completed() {
        assert!("completed".parse::<RequestState>().unwrap().is_completed());
        assert!(!RequestState::Pending.is_completed());
        assert!("done".parse::<RequestState>().is_err());
    }

    #[test]
    fn test_share_payload_skips_empty_fields() {
        let payload = SharePayload {
            url: Some("https://example.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"url":"https://example.com"}"#);
    }
}
