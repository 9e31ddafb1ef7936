use regex::Regex;
use url::Url;

/// Extracts a video ID from a watch, short-link, shorts or embed URL, or
/// accepts a bare ID as-is.
pub fn parse_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    let id_pattern = Regex::new(r"^[A-Za-z0-9_-]{11}$").ok()?;
    if id_pattern.is_match(input) {
        return Some(input.to_string());
    }

    let url = Url::parse(input).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");
    let candidate = match host {
        "youtu.be" => url.path_segments()?.next().map(str::to_string),
        "youtube.com" | "music.youtube.com" => {
            if url.path() == "/watch" {
                url.query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned())
            } else {
                let mut segments = url.path_segments()?;
                match segments.next() {
                    Some("shorts" | "embed" | "live" | "v") => segments.next().map(str::to_string),
                    _ => None,
                }
            }
        }
        _ => None,
    }?;

    id_pattern.is_match(&candidate).then_some(candidate)
}
