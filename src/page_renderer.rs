//! Server-side HTML for the dashboard. Every interactive control is a plain
//! link (or GET form) to the `DashboardState` it leads to.

use crate::feed_service::FeedService;
use crate::filters;
use crate::layout::{Direction, SectionId};
use crate::models_api::dashboard::DashboardData;
use crate::models_api::fixture::Fixture;
use crate::models_api::standings::FormResult;
use crate::news_service::NewsService;
use crate::stats_service::StatsService;
use crate::teams::{self, LEAGUE_LOGO, LEAGUE_NAME, TEAMS};
use crate::view_state::{DashboardState, MatchTab};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
a { color: inherit; text-decoration: none; }
header { background: #fff; border-bottom: 1px solid #e5e7eb; position: sticky; top: 0; z-index: 10; }
.container { max-width: 1200px; margin: 0 auto; padding: 12px 16px; }
.bar { display: flex; justify-content: space-between; align-items: center; gap: 16px; }
.grid { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 24px; grid-auto-flow: row dense; }
.col-span-1 { grid-column: span 1; } .col-span-2 { grid-column: span 2; } .col-span-3 { grid-column: span 3; }
.row-span-2 { grid-row: span 2; }
@media (max-width: 900px) { .grid { grid-template-columns: 1fr; } .col-span-2, .col-span-3 { grid-column: span 1; } }
.card { background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,.08); padding: 16px; height: 100%; box-sizing: border-box; }
.card-head { display: flex; justify-content: space-between; align-items: flex-start; }
.card-title { font-size: 1.1rem; font-weight: 700; margin: 0; }
.card-desc { font-size: .8rem; color: #6b7280; margin: 2px 0 12px; }
.btn { border: 1px solid #d1d5db; border-radius: 6px; padding: 6px 12px; background: #fff; cursor: pointer; }
.btn.active { background: #111827; color: #fff; }
.avatar { width: 32px; height: 32px; border-radius: 50%; object-fit: cover; vertical-align: middle; }
.avatar.sm { width: 20px; height: 20px; } .avatar.lg { width: 64px; height: 64px; }
.fallback { display: inline-flex; align-items: center; justify-content: center; color: #fff; font-weight: 700; }
.row { display: flex; align-items: center; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #f3f4f6; }
.muted { color: #6b7280; font-size: .8rem; }
.form { display: inline-flex; width: 18px; height: 18px; border-radius: 50%; color: #fff; font-size: .7rem; font-weight: 700; align-items: center; justify-content: center; margin-right: 2px; }
.form-w { background: #22c55e; } .form-d { background: #9ca3af; } .form-l { background: #ef4444; } .form-x { background: #d1d5db; }
.tabs { display: flex; gap: 4px; background: #f3f4f6; border-radius: 8px; padding: 4px; margin-bottom: 12px; }
.tabs a { flex: 1; text-align: center; padding: 6px; border-radius: 6px; }
.tabs a.active { background: #fff; font-weight: 600; }
.picker { position: relative; }
.picker ul { position: absolute; right: 0; background: #fff; list-style: none; padding: 8px; margin: 4px 0; border: 1px solid #e5e7eb; border-radius: 8px; display: grid; grid-template-columns: 1fr 1fr; gap: 6px; width: 420px; }
.picker li a { display: flex; align-items: center; gap: 8px; padding: 6px; border: 1px solid #e5e7eb; border-radius: 6px; }
.picker li a.active { background: #111827; color: #fff; }
.move { font-size: .75rem; margin-bottom: 4px; display: flex; gap: 8px; color: #6b7280; }
.pre { white-space: pre-wrap; }
textarea { flex-grow: 1; min-height: 60px; }
.bg-red-500 { background: #ef4444; } .bg-red-600 { background: #dc2626; } .bg-red-700 { background: #b91c1c; }
.bg-blue-500 { background: #3b82f6; } .bg-blue-600 { background: #2563eb; } .bg-blue-700 { background: #1d4ed8; }
.bg-purple-600 { background: #9333ea; } .bg-purple-800 { background: #6b21a8; } .bg-sky-500 { background: #0ea5e9; }
.bg-orange-600 { background: #ea580c; } .bg-gray-500 { background: #6b7280; } .bg-gray-800 { background: #1f2937; }
.bg-white { background: #fff; color: #111827; border: 2px solid #1f2937; }
"#;

/// Escapes text for use in element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn first_letter(s: &str) -> String {
    s.chars().next().map(|e| e.to_string()).unwrap_or_default()
}

fn avatar(src: &str, alt: &str, fallback: &str, class: &str) -> String {
    if src.is_empty() {
        format!(r#"<span class="avatar fallback bg-gray-500 {class}">{}</span>"#, escape(fallback))
    } else {
        format!(r#"<img class="avatar {class}" src="{}" alt="{}">"#, escape(src), escape(alt))
    }
}

fn form_badge(result: &FormResult) -> String {
    let class = match result {
        FormResult::Win => "form-w",
        FormResult::Draw => "form-d",
        FormResult::Loss => "form-l",
        FormResult::Other(_) => "form-x",
    };
    format!(r#"<span class="form {class}">{}</span>"#, escape(&result.as_char().to_string()))
}

fn toggle_link(expanded: bool, next: &DashboardState) -> String {
    let chevron = if expanded { "▾" } else { "▸" };
    format!(r#"<a class="btn" href="{}" title="Toggle">{chevron}</a>"#, escape(&next.href()))
}

fn card_head(title: &str, description: &str, control: Option<String>) -> String {
    format!(
        r#"<div class="card-head"><div><h2 class="card-title">{}</h2><p class="card-desc">{}</p></div>{}</div>"#,
        escape(title),
        escape(description),
        control.unwrap_or_default(),
    )
}

pub struct PageRenderer<'a> {
    data: &'a DashboardData,
    state: &'a DashboardState,
}

impl<'a> PageRenderer<'a> {
    pub fn render(data: &'a DashboardData, state: &'a DashboardState) -> String {
        let renderer = PageRenderer { data, state };
        let sections: String = state.layout.sections()
            .iter()
            .map(|id| renderer.section(*id))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Premier League Hub</title>
<style>{STYLE}</style>
</head>
<body>
{}
<main class="container"><div class="grid">{sections}</div></main>
</body>
</html>
"#,
            renderer.header(),
        )
    }

    fn header(&self) -> String {
        let selected = match self.state.selected_team() {
            Some(team) => format!(
                "{} <span>{}</span>",
                avatar(&teams::get_logo(team), &format!("{team} logo"), &teams::get_short_name(team), "sm"),
                escape(team),
            ),
            None => "Select Your Team".to_string(),
        };
        let options: String = TEAMS.iter().map(|team| {
            let active = if self.state.selected_team() == Some(team.name) { " active" } else { "" };
            format!(
                r#"<li><a class="{active}" href="{}">{} <span>{}</span></a></li>"#,
                escape(&self.state.with_team_toggled(team.name).href()),
                avatar(&team.logo(), &format!("{} logo", team.name), team.short_name, "sm"),
                escape(team.name),
            )
        }).collect();
        let customize = self.state.with_customize_toggled();

        format!(
            r#"<header><div class="container bar">
<div class="bar"><img src="{LEAGUE_LOGO}" alt="Premier League Logo" width="40" height="40"><h1>Premier League Hub</h1></div>
<div class="bar">
<details class="picker"><summary class="btn">{selected}</summary>
<p class="muted">Choose Your Favorite Team. Personalize your dashboard by selecting your favorite Premier League team.</p>
<ul>{options}</ul></details>
<a class="btn{}" href="{}">{}</a>
</div>
</div></header>"#,
            if self.state.customize { " active" } else { "" },
            escape(&customize.href()),
            if self.state.customize { "Done" } else { "Customize" },
        )
    }

    fn section(&self, id: SectionId) -> String {
        let body = match id {
            SectionId::TeamOverview => self.team_overview(),
            SectionId::News => self.news(),
            SectionId::Fixtures => self.fixtures(),
            SectionId::Twitter => self.twitter(),
            SectionId::LeagueTable => self.league_table(),
            SectionId::TopScorers => self.top_scorers(),
            SectionId::QuickStats => self.quick_stats(),
            SectionId::SocialFeed => self.social_feed(),
        };
        let controls = if self.state.customize {
            format!(
                r#"<div class="move"><a href="{}">↑ Move up</a><a href="{}">↓ Move down</a></div>"#,
                escape(&self.state.with_section_moved(id, Direction::Up).href()),
                escape(&self.state.with_section_moved(id, Direction::Down).href()),
            )
        } else {
            String::new()
        };
        format!(r#"<div id="{}" class="{}">{controls}<div class="card">{body}</div></div>"#, id.slug(), id.size())
    }

    fn team_overview(&self) -> String {
        let head = card_head(SectionId::TeamOverview.title(), "Key information about your selected team", None);
        let Some(team) = self.state.selected_team() else {
            return format!(r#"{head}<p style="text-align:center">Select a team to see their overview.</p>"#);
        };
        let standing = filters::team_position(&self.data.standings, Some(team));
        let position = standing.map(|e| e.position.to_string()).unwrap_or_else(|| "N/A".to_string());
        let points = standing
            .filter(|e| e.points > 0)
            .map(|e| e.points.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let form: String = standing.map(|e| e.form.iter().map(form_badge).collect()).unwrap_or_default();
        let logo = teams::get_logo(team);
        let badge = if logo.is_empty() {
            format!(
                r#"<span class="avatar lg fallback {}">{}</span>"#,
                teams::get_color(team),
                escape(&teams::get_short_name(team)),
            )
        } else {
            avatar(&logo, &format!("{team} logo"), &teams::get_short_name(team), "lg")
        };

        format!(
            r#"{head}<div class="bar" style="justify-content:flex-start">{badge}<div><h2>{}</h2><p class="muted">{LEAGUE_NAME}</p></div></div>
<div class="grid" style="gap:12px">
<div><b>League Position</b><p>{position}</p></div>
<div><b>Points</b><p>{points}</p></div>
<div><b>Form</b><p>{form}</p></div>
</div>"#,
            escape(team),
        )
    }

    fn news(&self) -> String {
        let expanded = self.state.news_expanded;
        let head = card_head(
            SectionId::News.title(),
            "Top stories from around the league",
            Some(toggle_link(expanded, &self.state.with_section_toggled(SectionId::News))),
        );
        if !expanded {
            return head;
        }
        let items: String = filters::team_news(&self.data.news, self.state.selected_team())
            .iter()
            .map(|item| format!(
                r#"<div class="row"><div class="bar" style="justify-content:flex-start">{}<div><p><b>{}</b></p><p class="muted">{} · {}</p></div></div><span>→</span></div>"#,
                avatar(&NewsService::get_logo(&item.title), "", "", ""),
                escape(&item.title),
                escape(&item.source),
                escape(&item.timestamp),
            ))
            .collect();
        format!("{head}<div>{items}</div>")
    }

    fn fixtures(&self) -> String {
        let expanded = self.state.fixtures_expanded;
        let head = card_head(
            SectionId::Fixtures.title(),
            "",
            Some(toggle_link(expanded, &self.state.with_section_toggled(SectionId::Fixtures))),
        );
        if !expanded {
            return head;
        }
        let tab = |tab: MatchTab, label: &str| format!(
            r#"<a class="{}" href="{}">{label}</a>"#,
            if self.state.tab == tab { "active" } else { "" },
            escape(&self.state.with_tab(tab).href()),
        );
        let team = self.state.selected_team();
        let rows: String = match self.state.tab {
            MatchTab::Fixtures => filters::team_fixtures(&self.data.fixtures, team)
                .iter()
                .map(|f| match_row(f, &escape(&f.date), &escape(f.time.as_deref().unwrap_or_default())))
                .collect(),
            MatchTab::Results => filters::team_fixtures(&self.data.results, team)
                .iter()
                .map(|f| match_row(f, &escape(&f.date), &escape(&f.score_display())))
                .collect(),
        };
        format!(
            r#"{head}<div class="tabs">{}{}</div><div>{rows}</div>"#,
            tab(MatchTab::Fixtures, "Upcoming Fixtures"),
            tab(MatchTab::Results, "Recent Results"),
        )
    }

    fn league_table(&self) -> String {
        let head = card_head(SectionId::LeagueTable.title(), "Current PL Standings", None);
        let rows: String = self.data.standings
            .iter()
            .take(self.state.table_rows())
            .map(|team| format!(
                r#"<tr><td>{}</td><td>{} {}</td><td>{}</td><td><b>{}</b></td><td>{}</td></tr>"#,
                team.position,
                avatar(&team.logo, &team.team, &first_letter(&team.team), "sm"),
                escape(&team.team),
                team.played,
                team.points,
                team.form.iter().map(form_badge).collect::<String>(),
            ))
            .collect();
        format!(
            r#"{head}<table style="width:100%;font-size:.85rem"><thead class="muted"><tr><th>#</th><th style="text-align:left">Team</th><th>P</th><th>Pts</th><th>Form</th></tr></thead><tbody>{rows}</tbody></table>
<a class="btn" style="display:block;text-align:center;margin-top:8px" href="{}">{}</a>"#,
            escape(&self.state.with_table_toggled().href()),
            if self.state.table_expanded { "Show Less" } else { "Show More" },
        )
    }

    fn twitter(&self) -> String {
        let expanded = self.state.twitter_expanded;
        let head = card_head(
            SectionId::Twitter.title(),
            "Live updates from top sources",
            Some(toggle_link(expanded, &self.state.with_section_toggled(SectionId::Twitter))),
        );
        if !expanded {
            return head;
        }
        let tweets: String = FeedService::twitter_feed(self.state.selected_team())
            .iter()
            .map(|tweet| format!(
                r#"<div class="row" style="justify-content:flex-start;gap:8px;align-items:flex-start">{}<div><p><b>{}</b>{} <span class="muted">{} · {}</span></p><p>{}</p></div></div>"#,
                avatar(&tweet.user.avatar, &tweet.user.name, &first_letter(&tweet.user.name), ""),
                escape(&tweet.user.name),
                if tweet.user.verified { " ✓" } else { "" },
                escape(&tweet.user.username),
                escape(&tweet.timestamp),
                escape(&tweet.content),
            ))
            .collect();
        format!("{head}<div>{tweets}</div>")
    }

    fn top_scorers(&self) -> String {
        let head = card_head(SectionId::TopScorers.title(), "Golden Boot Race", None);
        let rows: String = self.data.top_scorers
            .iter()
            .take(5)
            .enumerate()
            .map(|(i, scorer)| format!(
                r#"<div class="row"><div class="bar" style="justify-content:flex-start;gap:8px"><b>{}</b>{}<div><p><b>{}</b></p><p class="muted">{} {}</p></div></div><b>{}</b></div>"#,
                i + 1,
                avatar(scorer.photo.as_deref().unwrap_or("/next.svg"), &scorer.name, &scorer.initials(), ""),
                escape(&scorer.name),
                avatar(&scorer.logo, &scorer.team, &first_letter(&scorer.team), "sm"),
                escape(&scorer.team),
                scorer.goals,
            ))
            .collect();
        format!("{head}<div>{rows}</div>")
    }

    fn quick_stats(&self) -> String {
        let head = card_head(SectionId::QuickStats.title(), "Season at a glance", None);
        let stats = StatsService::quick_stats(&self.data.standings, self.data.sources.standings);
        format!(
            r#"{head}<div class="row"><span class="muted">Matches Played</span><b>{}</b></div>
<div class="row"><span class="muted">Goals Scored</span><b>{}</b></div>
<div class="row"><span class="muted">Avg. Goals/Match</span><b>{:.2}</b></div>"#,
            stats.matches_played,
            stats.goals_scored,
            stats.avg_goals_per_match,
        )
    }

    fn social_feed(&self) -> String {
        let head = card_head(SectionId::SocialFeed.title(), "Share your thoughts with other fans", None);
        let hidden: String = self.state.query_pairs()
            .into_iter()
            .filter(|(k, _)| *k != "comment")
            .map(|(k, v)| format!(r#"<input type="hidden" name="{k}" value="{}">"#, escape(&v)))
            .collect();
        let posts: String = FeedService::social_feed(self.state.selected_team())
            .iter()
            .map(|post| format!(
                r#"<div class="row" style="display:block"><div class="bar"><b>{}{}</b><span class="muted">{}</span></div><p class="pre">{}</p>{}<p class="muted"><a href="{}">{} {}</a> · 💬 {} · ↻ {}</p></div>"#,
                post.category.icon().map(|e| format!("{e} ")).unwrap_or_default(),
                escape(&post.user.name),
                escape(&post.timestamp),
                escape(&post.content),
                post.image.as_deref()
                    .map(|e| format!(r#"<img src="{}" alt="" style="max-height:160px">"#, escape(e)))
                    .unwrap_or_default(),
                escape(&self.state.with_like_toggled(post.id).href()),
                if self.state.is_liked(post.id) { "♥" } else { "♡" },
                self.state.like_count(post),
                post.comments,
                post.shares,
            ))
            .collect();

        format!(
            r#"{head}<form method="get" action="/" class="bar" style="border-bottom:1px solid #e5e7eb;padding-bottom:12px">{hidden}<textarea name="comment" placeholder="Write a comment..." oninput="this.form.post.disabled=!this.value.trim()">{}</textarea><button class="btn" name="post" type="submit"{}>Post</button></form>
<div>{posts}</div>"#,
            escape(&self.state.comment),
            if self.state.can_post() { "" } else { " disabled" },
        )
    }
}

fn match_row(f: &Fixture, top: &str, bottom: &str) -> String {
    format!(
        r#"<div class="row"><div class="bar" style="justify-content:flex-start;min-width:160px">{} <span>{}</span></div><div style="text-align:center"><p class="muted">{top}</p><p><b>{bottom}</b></p></div><div class="bar" style="justify-content:flex-end;min-width:160px"><span>{}</span> {}</div></div>"#,
        avatar(&f.home_logo, &f.home, &first_letter(&f.home), ""),
        escape(&f.home),
        escape(&f.away),
        avatar(&f.away_logo, &f.away, &first_letter(&f.away), ""),
    )
}
