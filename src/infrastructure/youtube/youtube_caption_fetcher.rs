use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use serde::Deserialize;

use crate::application::ports::{CaptionFetchError, CaptionFetcher, CaptionLine};
use crate::domain::VideoId;

use super::timedtext::parse_timedtext;

const CAPTION_TRACKS_KEY: &str = "\"captionTracks\":";
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Reads caption tracks from the public watch page and downloads one of them.
pub struct YouTubeCaptionFetcher {
    client: Client,
    base_url: String,
    language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "languageCode", default)]
    pub language_code: String,
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

impl YouTubeCaptionFetcher {
    pub fn new(base_url: &str, language: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, CaptionFetchError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT_LANGUAGE, format!("{},en;q=0.8", self.language))
            .send()
            .await
            .map_err(|e| CaptionFetchError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CaptionFetchError::RequestFailed(format!(
                "{url} returned {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| CaptionFetchError::RequestFailed(e.to_string()))
    }

    fn absolute_url(&self, url: &str) -> String {
        if url.starts_with('/') {
            format!("{}{url}", self.base_url)
        } else {
            url.to_string()
        }
    }
}

/// Pulls the `captionTracks` array out of the player response embedded in a watch page.
pub fn parse_caption_tracks(html: &str) -> Result<Vec<CaptionTrack>, CaptionFetchError> {
    let Some(idx) = html.find(CAPTION_TRACKS_KEY) else {
        return Ok(Vec::new());
    };

    let json = &html[idx + CAPTION_TRACKS_KEY.len()..];
    serde_json::Deserializer::from_str(json)
        .into_iter::<Vec<CaptionTrack>>()
        .next()
        .unwrap_or(Ok(Vec::new()))
        .map_err(|e| CaptionFetchError::InvalidResponse(format!("captionTracks: {e}")))
}

/// Prefers a manual track in `language`, then any track in `language`, then the first track.
pub fn select_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
    let matches_language = |t: &&CaptionTrack| {
        t.language_code == language || t.language_code.starts_with(&format!("{language}-"))
    };

    tracks
        .iter()
        .filter(matches_language)
        .find(|t| !t.is_generated())
        .or_else(|| tracks.iter().find(matches_language))
        .or_else(|| tracks.first())
}

#[async_trait]
impl CaptionFetcher for YouTubeCaptionFetcher {
    #[tracing::instrument(skip(self), fields(video_id = %video_id))]
    async fn fetch_captions(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<CaptionLine>, CaptionFetchError> {
        let watch_url = format!("{}/watch?v={}", self.base_url, video_id);
        let html = self.get_text(&watch_url).await?;

        let tracks = parse_caption_tracks(&html)?;
        let track = select_track(&tracks, &self.language)
            .ok_or_else(|| CaptionFetchError::NoCaptions(video_id.to_string()))?;

        tracing::debug!(
            language = %track.language_code,
            generated = track.is_generated(),
            available = tracks.len(),
            "Caption track selected"
        );

        let xml = self.get_text(&self.absolute_url(&track.base_url)).await?;
        parse_timedtext(&xml)
    }
}
