//! Wire contract of the keyword search endpoint.

use std::collections::BTreeMap;

use coursecast_core::ThumbnailVariant;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Message the backend's required-input validator reports for a blank keyword.
pub const KEYWORD_REQUIRED_MESSAGE: &str = "This field is required.";

/// Body of `POST /api/get-videos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search term, sent as typed
    pub keyword: String,
}

impl SearchRequest {
    /// Request for `keyword`, untrimmed.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// Backend-side validation of the keyword.
    ///
    /// Returns the error payload the endpoint answers with when the keyword
    /// is blank after trimming, `None` when the request is acceptable.
    pub fn validation_errors(&self) -> Option<SearchResponse> {
        if self.keyword.trim().is_empty() {
            Some(SearchResponse::field_error("keyword", KEYWORD_REQUIRED_MESSAGE))
        } else {
            None
        }
    }
}

/// Decoded body of a search response.
///
/// The endpoint answers either with a JSON array of videos or with an
/// object `{"errors": {field: [message, ...]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    /// Matching videos in backend order
    Videos(Vec<VideoResult>),
    /// Validation messages keyed by form field
    Errors {
        /// Messages per field, first one is shown
        errors: BTreeMap<String, Vec<String>>,
    },
}

#[derive(Deserialize)]
struct ErrorsBody {
    errors: BTreeMap<String, Vec<String>>,
}

impl<'de> Deserialize<'de> for SearchResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    VideoResult::deserialize(item)
                        .map_err(|e| D::Error::custom(format!("video #{index}: {e}")))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(SearchResponse::Videos),
            object @ Value::Object(_) => ErrorsBody::deserialize(object)
                .map(|body| SearchResponse::Errors {
                    errors: body.errors,
                })
                .map_err(|e| D::Error::custom(format!("error payload: {e}"))),
            other => Err(D::Error::custom(format!(
                "expected a video list or an errors object, got {other}"
            ))),
        }
    }
}

impl SearchResponse {
    /// Builds an error payload with a single message for one field.
    pub fn field_error(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        SearchResponse::Errors { errors }
    }

    /// First validation message reported for the keyword field, if any.
    pub fn keyword_error(&self) -> Option<&str> {
        match self {
            SearchResponse::Errors { errors } => errors
                .get("keyword")
                .and_then(|messages| messages.first())
                .map(String::as_str),
            SearchResponse::Videos(_) => None,
        }
    }

    /// Number of videos carried, zero for error payloads.
    pub fn video_count(&self) -> usize {
        match self {
            SearchResponse::Videos(videos) => videos.len(),
            SearchResponse::Errors { .. } => 0,
        }
    }
}

/// One search hit.
///
/// Decoding accepts every field spelling the backend has used, including
/// records that carry several of them; encoding always writes the
/// canonical camelCase names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVideoResult")]
pub struct VideoResult {
    /// External (provider) video identifier
    #[serde(rename = "ytVideoId")]
    pub video_id: String,
    /// Video title
    pub title: String,
    /// Video description, empty when not sent
    pub description: String,
    /// Channel identifier, empty when not sent
    #[serde(rename = "ytChannelId")]
    pub channel_id: String,
    /// Channel display name
    #[serde(rename = "ytChannelTitle")]
    pub channel_title: String,
    /// High resolution thumbnail URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url_high: Option<String>,
    /// Medium resolution thumbnail URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url_medium: Option<String>,
}

/// Every spelling a search hit has been sent with.
#[derive(Deserialize)]
struct RawVideoResult {
    #[serde(rename = "ytVideoId")]
    yt_video_id_camel: Option<String>,
    yt_video_id: Option<String>,
    id: Option<Value>,
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "ytChannelId")]
    yt_channel_id_camel: Option<String>,
    yt_channel_id: Option<String>,
    channel_id: Option<String>,
    #[serde(rename = "ytChannelTitle")]
    yt_channel_title_camel: Option<String>,
    yt_channel_title: Option<String>,
    channel_title: Option<String>,
    thumb_url_high: Option<String>,
    thumb_url: Option<String>,
    thumb_url_medium: Option<String>,
}

impl TryFrom<RawVideoResult> for VideoResult {
    type Error = String;

    fn try_from(raw: RawVideoResult) -> Result<Self, Self::Error> {
        // A numeric `id` is a row key, only used when no provider id was sent
        let legacy_id = match raw.id {
            Some(Value::String(id)) => Some(id),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        };

        let video_id = raw
            .yt_video_id_camel
            .or(raw.yt_video_id)
            .or(legacy_id)
            .ok_or("missing video id (ytVideoId, yt_video_id or id)")?;
        let title = raw.title.ok_or("missing title")?;

        Ok(Self {
            video_id,
            title,
            description: raw.description.unwrap_or_default(),
            channel_id: raw
                .yt_channel_id_camel
                .or(raw.yt_channel_id)
                .or(raw.channel_id)
                .unwrap_or_default(),
            channel_title: raw
                .yt_channel_title_camel
                .or(raw.yt_channel_title)
                .or(raw.channel_title)
                .unwrap_or_default(),
            thumb_url_high: raw.thumb_url_high.or(raw.thumb_url),
            thumb_url_medium: raw.thumb_url_medium,
        })
    }
}

impl VideoResult {
    /// Thumbnail URL for the requested resolution.
    ///
    /// Falls back to the other resolution when the requested one is absent,
    /// and to an empty string when the backend sent neither.
    pub fn thumbnail(&self, variant: ThumbnailVariant) -> &str {
        let (preferred, fallback) = match variant {
            ThumbnailVariant::High => (&self.thumb_url_high, &self.thumb_url_medium),
            ThumbnailVariant::Medium => (&self.thumb_url_medium, &self.thumb_url_high),
        };

        preferred
            .as_deref()
            .or(fallback.as_deref())
            .unwrap_or_default()
    }
}
