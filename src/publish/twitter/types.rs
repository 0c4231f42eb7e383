use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct CreateTweetRequest<'a> {
    pub(super) text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) media: Option<TweetMedia<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct TweetMedia<'a> {
    pub(super) media_ids: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateTweetResponse {
    pub(super) data: Option<CreatedTweet>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreatedTweet {
    pub(super) id: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct MediaUploadResponse {
    pub(super) data: Option<UploadedMedia>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UploadedMedia {
    pub(super) id: String,
    #[serde(default)]
    pub(super) media_key: Option<String>,
}
