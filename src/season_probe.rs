use std::future::Future;

use tracing::log;

use crate::error::FetchError;
use crate::models::Season;

/// Tries `fetch` for each season in order and keeps the first success.
/// Calls run one after another, without delay between them.
pub async fn probe_seasons<T, F, Fut>(label: &str, seasons: &[Season], mut fetch: F) -> Option<(Season, Vec<T>)>
where
    F: FnMut(Season) -> Fut,
    Fut: Future<Output = Result<Vec<T>, FetchError>>,
{
    for season in seasons {
        match fetch(*season).await {
            Ok(items) if !items.is_empty() => {
                log::info!("[PROBE] {label} found {} entries for season {season}", items.len());
                return Some((*season, items));
            },
            Ok(_) => log::error!("[PROBE] {label} empty for season {season}"),
            Err(e) => log::error!("[PROBE] {label} failed for season {season}: {e}"),
        }
    }
    log::error!("[PROBE] {label} failed for all seasons {:?}", seasons);
    None
}
