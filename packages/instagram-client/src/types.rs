use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Envelope of `/api/v1/tags/web_info/`.
#[derive(Debug, Clone, Deserialize)]
pub struct WebInfoResponse {
    pub data: HashtagInfo,
}

/// Hashtag page: a "top" grid and a "recent" grid, both split into sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HashtagInfo {
    pub name: Option<String>,
    pub media_count: Option<u64>,
    pub top: Option<SectionList>,
    pub recent: Option<SectionList>,
}

impl HashtagInfo {
    /// Every media record on the page, top grid first, in page order.
    pub fn media(&self) -> Vec<&Media> {
        [self.top.as_ref(), self.recent.as_ref()]
            .into_iter()
            .flatten()
            .flat_map(|list| list.sections.iter())
            .filter_map(|section| section.layout_content.as_ref())
            .flat_map(|lc| lc.media())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionList {
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub layout_content: Option<LayoutContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutContent {
    #[serde(default)]
    pub fill_items: Vec<MediaItem>,
    #[serde(default)]
    pub medias: Vec<MediaItem>,
    pub one_by_two_item: Option<MediaItem>,
}

impl LayoutContent {
    fn media(&self) -> impl Iterator<Item = &Media> {
        self.fill_items
            .iter()
            .chain(self.medias.iter())
            .chain(self.one_by_two_item.iter())
            .filter_map(|item| item.media.as_ref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    pub media: Option<Media>,
}

/// A post as Instagram's web API shapes it. Nearly everything is optional:
/// reels, carousels and sponsored items all leave different holes.
#[derive(Debug, Clone, Deserialize)]
pub struct Media {
    /// Shortcode used in `/p/{code}/` permalinks
    pub code: Option<String>,
    pub caption: Option<Caption>,
    pub image_versions2: Option<ImageVersions>,
    /// Slides of a carousel post, which has no top-level `image_versions2`
    #[serde(default)]
    pub carousel_media: Vec<CarouselItem>,
    pub user: Option<User>,
    pub location: Option<MediaLocation>,
    pub like_count: Option<i64>,
    /// Unix seconds
    pub taken_at: Option<i64>,
}

impl Media {
    pub fn caption_text(&self) -> &str {
        self.caption.as_ref().map(|c| c.text.as_str()).unwrap_or("")
    }

    /// Largest candidate is listed first. Carousels use their first slide.
    pub fn image_url(&self) -> Option<&str> {
        self.image_versions2
            .as_ref()
            .and_then(ImageVersions::first_url)
            .or_else(|| {
                self.carousel_media
                    .iter()
                    .find_map(|slide| slide.image_versions2.as_ref()?.first_url())
            })
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        self.taken_at.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Caption {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageVersions {
    #[serde(default)]
    pub candidates: Vec<ImageCandidate>,
}

impl ImageVersions {
    fn first_url(&self) -> Option<&str> {
        self.candidates.first().map(|c| c.url.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarouselItem {
    pub image_versions2: Option<ImageVersions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageCandidate {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaLocation {
    pub name: Option<String>,
    pub lat: Option<f64>,
    /// Instagram spells longitude `lng`
    pub lng: Option<f64>,
}
