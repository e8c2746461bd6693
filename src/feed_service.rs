use crate::filters::partition_first;
use crate::models_api::social::{PostCategory, SocialPost, SocialUser, Tweet};
use crate::teams::LEAGUE_NAME;

const AVATAR: &str = "/next.svg";

fn user(name: &str, username: &str, verified: bool) -> SocialUser {
    SocialUser {
        name: name.to_string(),
        username: username.to_string(),
        avatar: AVATAR.to_string(),
        verified,
    }
}

/// "15m", "2 hours ago", "1 day ago" -> minutes. Unknown units count as 0.
pub fn age_in_minutes(timestamp: &str) -> u32 {
    let digits: String = timestamp.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    let Ok(amount) = digits.parse::<u32>() else {
        return 0;
    };
    let unit = timestamp.trim()[digits.len()..].trim_start().chars().next();
    match unit {
        Some('m') => amount,
        Some('h') => amount * 60,
        Some('d') => amount * 60 * 24,
        _ => 0,
    }
}

pub struct FeedService;
impl FeedService {
    pub fn read_posts() -> Vec<SocialPost> {
        vec![
            SocialPost {
                id: 1,
                user: user("Sarah Mitchell", "@sarahm_arsenal", false),
                content: "What a performance from the boys today! That second goal was absolutely sublime 🔥⚽".to_string(),
                timestamp: "2 hours ago".to_string(),
                likes: 127, comments: 23, shares: 8,
                category: PostCategory::Text,
                team: "Arsenal".to_string(),
                image: None,
            },
            SocialPost {
                id: 2,
                user: user("Arsenal FC", "@Arsenal", true),
                content: "FULL TIME: Arsenal 3-1 Brighton\n\nA fantastic team performance! Goals from Saka, Martinelli and Ødegaard secure all three points at the Emirates. 🔴⚪".to_string(),
                timestamp: "3 hours ago".to_string(),
                likes: 2847, comments: 456, shares: 892,
                category: PostCategory::MatchResult,
                team: "Arsenal".to_string(),
                image: Some(AVATAR.to_string()),
            },
            SocialPost {
                id: 3,
                user: user("Mike Thompson", "@mikethompson", false),
                content: "Haaland is just different level! That hat-trick was pure class 👑".to_string(),
                timestamp: "4 hours ago".to_string(),
                likes: 89, comments: 12, shares: 3,
                category: PostCategory::Text,
                team: "Manchester City".to_string(),
                image: None,
            },
            SocialPost {
                id: 4,
                user: user("Liverpool FC", "@LFC", true),
                content: "🚨 TRANSFER UPDATE: We're delighted to announce the signing of midfielder João Silva from Benfica for £85M. Welcome to Liverpool! 🔴\n\n#YNWA #LFC".to_string(),
                timestamp: "6 hours ago".to_string(),
                likes: 5234, comments: 1247, shares: 2156,
                category: PostCategory::Transfer,
                team: "Liverpool".to_string(),
                image: Some(AVATAR.to_string()),
            },
            SocialPost {
                id: 5,
                user: user("Emma Wilson", "@emmawilson_lfc", false),
                content: "Been supporting Liverpool for 20 years and this signing has me so excited! Silva is exactly what we needed in midfield 🙌".to_string(),
                timestamp: "5 hours ago".to_string(),
                likes: 156, comments: 34, shares: 7,
                category: PostCategory::Text,
                team: "Liverpool".to_string(),
                image: None,
            },
            SocialPost {
                id: 6,
                user: user("The Athletic", "@TheAthletic", true),
                content: "Inside the tactics that saw Tottenham Hotspur dominate Chelsea in a 4-1 thrashing. [read more]".to_string(),
                timestamp: "8 hours ago".to_string(),
                likes: 892, comments: 134, shares: 213,
                category: PostCategory::Analysis,
                team: "Tottenham".to_string(),
                image: None,
            },
            SocialPost {
                id: 7,
                user: user("Man Utd Fan TV", "@mufc_fan_tv", false),
                content: "🎥 WATCH: Our instant reaction to the disappointing 2-2 draw with Everton. Is it time for a change in management? 🤔".to_string(),
                timestamp: "10 hours ago".to_string(),
                likes: 432, comments: 211, shares: 56,
                category: PostCategory::Video,
                team: "Manchester United".to_string(),
                image: Some(AVATAR.to_string()),
            },
            SocialPost {
                id: 8,
                user: user("Premier League", "@premierleague", true),
                content: "A look back at some of the best goals from Matchweek 5! Which one was your favorite? 🚀".to_string(),
                timestamp: "12 hours ago".to_string(),
                likes: 7892, comments: 1245, shares: 3456,
                category: PostCategory::Highlights,
                team: LEAGUE_NAME.to_string(),
                image: Some(AVATAR.to_string()),
            },
        ]
    }

    pub fn read_tweets() -> Vec<Tweet> {
        [
            (1, "Fabrizio Romano", "@FabrizioRomano", "Understand Chelsea are now advancing on deal to sign Michael Olise. Positive talks, player is keen on the move. 🔵 #CFC", "15m"),
            (2, "David Ornstein", "@David_Ornstein", "EXCLUSIVE: Manchester United have submitted a formal bid for Jarrad Branthwaite. Everton expected to reject the opening offer. More on @TheAthleticFC", "45m"),
            (3, "Sky Sports Premier League", "@SkySportsPL", "🚨 BREAKING: Arsenal have agreed personal terms with striker Viktor Gyökeres. Club-to-club negotiations with Sporting CP to follow.", "1h"),
            (4, "Goal", "@goal", "Is this the season Liverpool get back to the top? 🤔", "3h"),
            (5, "Official FPL", "@OfficialFPL", "Son Heung-min's price has been revealed for the 2024/25 season! Are you including him in your squad? #FPL", "5h"),
            (6, "TheSecretScout", "@TheSecretScout", "Keep an eye on Crystal Palace this season. Dougie Freedman is cooking something special there.", "8h"),
            (7, "James Pearce", "@JamesPearceLFC", "No significant movement on a new deal for Trent Alexander-Arnold yet, but all parties remain relaxed. #LFC", "12h"),
        ]
        .into_iter()
        .map(|(id, name, username, content, timestamp)| Tweet {
            id,
            user: user(name, username, true),
            content: content.to_string(),
            timestamp: timestamp.to_string(),
        })
        .collect()
    }

    /// Newest first, then posts tagged with `team` (the league when none is selected) moved to the front.
    pub fn social_feed(team: Option<&str>) -> Vec<SocialPost> {
        let team = team.unwrap_or(LEAGUE_NAME);
        let mut posts = FeedService::read_posts();
        posts.sort_by_key(|e| age_in_minutes(&e.timestamp));
        partition_first(&posts, |e| e.team == team)
    }

    /// Tweets mentioning the first word of the team name move to the front.
    pub fn twitter_feed(team: Option<&str>) -> Vec<Tweet> {
        let tweets = FeedService::read_tweets();
        let Some(keyword) = team.and_then(|e| e.split_whitespace().next()).map(|e| e.to_lowercase()) else {
            return tweets;
        };
        partition_first(&tweets, |e| e.content.to_lowercase().contains(&keyword))
    }
}
