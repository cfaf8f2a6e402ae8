//! URL and deep-link construction
//!
//! These helpers only build strings and payloads. Opening a URL or showing
//! the share sheet is left to the host application.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::LazyLock;

use crate::paths::file_extension;
use crate::types::{Platform, SharePayload};

/// Characters escaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static VIDEO_ID_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vi/|v=|/v/|youtu\.be/|/embed/").unwrap());

/// Build a `tel:` URL, or `telprompt:` when a confirmation prompt is
/// requested on iOS.
pub fn phone_call_url(phone_number: &str, prompt: bool, platform: &Platform) -> String {
    if prompt && platform.is_ios() {
        format!("telprompt:{}", phone_number)
    } else {
        format!("tel:{}", phone_number)
    }
}

pub fn mailto_url(email: &str) -> String {
    format!("mailto:{}", email)
}

/// Encode parameters as `key=value` pairs joined by `&`, in input order.
///
/// ```
/// use libappkit::links::query_string;
///
/// let query = query_string([("id", "1"), ("username", "john doe")]);
/// assert_eq!(query, "id=1&username=john%20doe");
/// ```
pub fn query_string<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key.as_ref(), URI_COMPONENT),
                utf8_percent_encode(value.as_ref(), URI_COMPONENT)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Extract the video id from a YouTube watch, share or embed URL.
///
/// The id is the run of `[0-9A-Za-z_-]` following the first recognised
/// marker, cut short at any later marker.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let first = VIDEO_ID_MARKER.find(url)?;
    let rest = &url[first.end()..];
    let segment = match VIDEO_ID_MARKER.find(rest) {
        Some(next) => &rest[..next.start()],
        None => rest,
    };

    let id: String = segment
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Build a `data:image/...;base64,...` URI for uploading picked images.
///
/// The image subtype is the extension of the file named by `uri`; `None`
/// when that file name has no extension.
pub fn image_data_uri(uri: &str, data: &[u8]) -> Option<String> {
    let extension = file_extension(uri)?;
    Some(format!(
        "data:image/{};base64,{}",
        extension,
        STANDARD.encode(data)
    ))
}

/// Android shares text through `message`, other platforms through `url`.
pub fn share_payload(data_url: &str, platform: &Platform) -> SharePayload {
    if platform.is_android() {
        SharePayload {
            message: Some(data_url.to_string()),
            title: Some("Share".to_string()),
            url: None,
        }
    } else {
        SharePayload {
            url: Some(data_url.to_string()),
            ..Default::default()
        }
    }
}

/// Screens of the iOS Settings app reachable by URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IosSetting {
    /// This application's own page in Settings
    AppSettings,
    General,
    About,
    WiFi,
    AirplaneMode,
    Accessibility,
}

impl IosSetting {
    pub fn url(&self) -> String {
        match self {
            IosSetting::AppSettings => "app-settings:".to_string(),
            IosSetting::General => prefs_url("General", None),
            IosSetting::About => prefs_url("General", Some("About")),
            IosSetting::WiFi => prefs_url("WIFI", None),
            IosSetting::AirplaneMode => prefs_url("AIRPLANE_MODE", None),
            IosSetting::Accessibility => prefs_url("General", Some("ACCESSIBILITY")),
        }
    }
}

fn prefs_url(root: &str, path: Option<&str>) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(path) => format!("App-Prefs:root={}&path={}", root, path),
        None => format!("App-Prefs:root={}", root),
    }
}
