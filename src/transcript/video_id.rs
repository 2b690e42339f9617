use url::Url;

fn is_youtube_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == "youtube.com"
        || host == "youtu.be"
        || host.ends_with(".youtube.com")
        || host == "youtube-nocookie.com"
        || host.ends_with(".youtube-nocookie.com")
}

/// Extracts a video id from whatever the client sent as `url`.
///
/// Explicit `v=` query parameters and the known YouTube path shapes are
/// tried first. Anything else falls back to the text after the last `=`
/// (or the whole input when there is none), which also covers bare ids.
/// The result may be empty or malformed; the transcript source rejects it.
pub fn extract_video_id(input: &str) -> String {
    let input = input.trim();

    if let Ok(url) = Url::parse(input)
        && let Some(id) = video_id_from_url(&url)
    {
        return id;
    }

    input
        .rsplit_once('=')
        .map_or(input, |(_, id)| id)
        .to_string()
}

fn video_id_from_url(url: &Url) -> Option<String> {
    // ?v=<id> on any host
    if let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "v") {
        let id = id.trim();
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }

    let host = url.host_str()?;
    if !is_youtube_host(host) {
        return None;
    }

    let mut segments = url.path_segments()?.filter(|segment| !segment.is_empty());
    let first = segments.next()?;

    // youtu.be/<id>
    if host.eq_ignore_ascii_case("youtu.be") {
        return Some(first.to_string());
    }

    // youtube.com/shorts/<id>, /embed/<id>, /live/<id>, /v/<id>
    if matches!(first, "shorts" | "embed" | "live" | "v") {
        return segments.next().map(str::to_string);
    }

    None
}

/// YouTube ids are made of URL-safe base64 characters.
pub fn is_valid_video_id(video_id: &str) -> bool {
    !video_id.is_empty()
        && video_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
