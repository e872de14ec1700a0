//! Notification message layout.

use crate::config::NotifyConfig;
use crate::source::PaperRecord;
use crate::translate::TranslatedAbstract;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of a Slack incoming-webhook call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub channel: String,
    pub text: String,
    pub username: String,
    pub icon_emoji: String,
}

impl SlackMessage {
    pub fn new(
        channel: impl Into<String>,
        username: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            username: username.into(),
            icon_emoji: NotifyConfig::ICON_EMOJI.to_string(),
        }
    }
}

/// Sender name shown for a run on `fetch_date`.
pub fn display_name(fetch_date: NaiveDate) -> String {
    format!("{}({})", NotifyConfig::TITLE_PREFIX, fetch_date)
}

/// Render the announcement for one paper.
pub fn paper_message(
    paper: &PaperRecord,
    translated: &TranslatedAbstract,
    fetch_date: NaiveDate,
) -> SlackMessage {
    let name = display_name(fetch_date);
    let text = format!(
        "*{name}*\n\
         【タイトル】: {title}\n\
         【URL】: {url}\n\
         【Date】{published}\n\
         【Fetch Date】{fetch_date}\n\
         【Abst】: {translated}\n\
         【Abst_en】: {abstract_en}\n",
        name = name,
        title = paper.title,
        url = paper.url,
        published = paper.published,
        fetch_date = fetch_date,
        translated = translated.display_text(),
        abstract_en = paper.abstract_text,
    );

    SlackMessage::new(NotifyConfig::CHANNEL, name, text)
}
