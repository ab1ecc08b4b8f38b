mod timedtext;
mod youtube_caption_fetcher;

pub use timedtext::parse_timedtext;
pub use youtube_caption_fetcher::{
    CaptionTrack, YouTubeCaptionFetcher, parse_caption_tracks, select_track,
};
