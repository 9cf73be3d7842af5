//! Static narrative shown around the chart.

use serde::{Deserialize, Serialize};

/// Methodology text shown in the left column.
pub const DEFAULT_DESCRIPTION: &str = r#"
Elon is known for his work ethics and being transparent about how to manage bandwidth cross many challenging projects.

We're interested in knowing how much time he spent on communicating ideas on Twitter. So we pulled his data of the past 5 years and made an estimate.

Data used for this analysis:
- Tweets and replies queried from Twitter.
- We **do not** have his app usage data.

The algorithm is simple: `Total time spending` = `Typing` + `Drafting` + `Reading`
- `Typing`: tweet_letter_count / average_typing_speed (300 letters per minute)
- `Drafting`: +5 seconds to each tweet
- `Reading`: +5 seconds to each reply

__
<sub>Source code and data set: https://github.com/pywebio/twitter-time-spending</sub>
"#;

/// Text and media placed around the generated parts of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Browser window title.
    pub session_title: String,
    /// Top-level heading.
    pub title: String,
    /// Markdown shown in the left column.
    pub description: String,
    /// Inline style for the left column.
    pub description_style: Option<String>,
    /// Image shown in the right column.
    pub image_url: String,
    /// Heading above the tab strip.
    pub section_heading: String,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            session_title: "Elon Musk's Time Spent on Tweeting".to_string(),
            title: "How Much Time Elon Musk Spent on Tweeting Things".to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            description_style: Some("font-size: 14px; background: #f6f6f6;".to_string()),
            image_url: "https://i.ibb.co/zmbmdw5/62733.jpg".to_string(),
            section_heading: "His busiest 5 days on Twitter".to_string(),
        }
    }
}
