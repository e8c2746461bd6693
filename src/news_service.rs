use crate::models_api::news::NewsItem;
use crate::teams::{self, LEAGUE_LOGO};

pub struct NewsService;
impl NewsService {
    /// There is no news feed upstream, the list is always the fixed one.
    pub fn read() -> Vec<NewsItem> {
        [
            (1, "Premier League Announces 2024/25 Fixtures", "premierleague.com", "1 day ago", Some("/file.svg")),
            (2, "Transfer Speculation Mounts as Summer Window Opens", "Sky Sports", "2 days ago", Some("/globe.svg")),
            (3, "Arsenal's new signing scores on debut in 3-1 win over Brighton", "BBC Sport", "3 hours ago", None),
            (4, "Manchester City in talks to sign midfielder from Real Madrid", "The Guardian", "5 hours ago", None),
            (5, "Liverpool's title hopes dented after shock defeat to Nottingham Forest", "ESPN", "1 day ago", None),
        ]
        .into_iter()
        .map(|(id, title, source, timestamp, image)| NewsItem {
            id,
            title: title.to_string(),
            source: source.to_string(),
            timestamp: timestamp.to_string(),
            image: image.map(|e: &str| e.to_string()),
        })
        .collect()
    }

    /// A headline about exactly one club gets that club's crest, anything else the league logo.
    pub fn get_logo(title: &str) -> String {
        match teams::mentioned_in(title).as_slice() {
            [team] => team.logo(),
            _ => LEAGUE_LOGO.to_string(),
        }
    }
}
