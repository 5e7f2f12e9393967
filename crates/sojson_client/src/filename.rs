use chrono::{DateTime, Utc};

const PREFIX: &str = "sojson_result_";

/// `sojson_result_YYYY-MM-DDTHH-MM-SS.json`: ISO-8601 in UTC, truncated to
/// seconds, with colons swapped for hyphens so the name is valid everywhere.
pub fn download_filename(now: DateTime<Utc>) -> String {
    let stamp = now.format("%Y-%m-%dT%H:%M:%S").to_string().replace(':', "-");
    format!("{PREFIX}{stamp}.json")
}

/// True when `name` has the shape produced by [`download_filename`].
pub fn is_download_filename(name: &str) -> bool {
    let Some(stamp) = name
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_suffix(".json"))
    else {
        return false;
    };
    let bytes = stamp.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 | 13 | 16 => *b == b'-',
            10 => *b == b'T',
            _ => b.is_ascii_digit(),
        })
}
