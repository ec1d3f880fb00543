use chrono::{NaiveDateTime, TimeDelta};

use crate::models::{
    notification::coerce_score,
    snapshot::{AppSummary, DisplayRow, MediaSnapshot, StatsSnapshot},
};

/// Build the display row for one media entry.
///
/// When processing renamed the object, the row shows both identifiers and
/// the link points at the new one; otherwise both use the original id.
pub fn present(media: &MediaSnapshot, base_url: &str) -> DisplayRow {
    let renamed = media
        .new_media_id
        .as_deref()
        .filter(|new_id| !new_id.is_empty() && *new_id != media.media_id);

    let (media_id, link_id) = match renamed {
        Some(new_id) => (format!("{} -> {}", media.media_id, new_id), new_id),
        None => (media.media_id.clone(), media.media_id.as_str()),
    };

    let media_id_link = format!(r#"<a href="{base_url}/{link_id}">{link_id}</a>"#);

    let mut scores: Vec<(&str, f64)> = media
        .metadata
        .iter()
        .map(|(label, value)| (label.as_str(), round2(coerce_score(value))))
        .collect();
    // Stable sort; equal scores keep the map's alphabetical order.
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));

    let categories = scores
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");

    DisplayRow {
        post_id: media.post_id,
        media_id,
        status: media.status.clone(),
        categories,
        media_id_link,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive the dashboard header strings from a snapshot.
pub fn summarize(snapshot: &StatsSnapshot, now: NaiveDateTime) -> AppSummary {
    AppSummary {
        title: format!("{} v{}", snapshot.title, snapshot.version),
        subtitle: format!(
            "release {} | running for {}",
            snapshot.release.format("%Y-%m-%d"),
            format_distance(now - snapshot.started_time),
        ),
    }
}

/// Human phrase for an elapsed duration, coarsening with magnitude.
pub fn format_distance(elapsed: TimeDelta) -> String {
    let minutes = elapsed.num_minutes().max(0);
    if minutes < 1 {
        return "less than a minute".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("about {}", plural(hours, "hour"));
    }

    let days = elapsed.num_days();
    if days < 30 {
        return plural(days, "day");
    }
    if days < 365 {
        return format!("about {}", plural(days / 30, "month"));
    }

    format!("about {}", plural(days / 365, "year"))
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Tail of a path-like string: everything after the last `/` or `\`, or
/// the whole string when neither occurs.
pub fn filename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
