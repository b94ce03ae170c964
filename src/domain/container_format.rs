/// File extension of a self-describing audio container, if the mime type names one.
///
/// Raw PCM descriptors (`audio/L16`, `audio/pcm`) have no container and return `None`.
pub fn container_extension(mime_type: &str) -> Option<&'static str> {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "audio/mpeg" | "audio/mp3" => Some("mp3"),
        "audio/wav" | "audio/x-wav" | "audio/wave" | "audio/vnd.wave" => Some("wav"),
        "audio/ogg" => Some("ogg"),
        "audio/opus" => Some("opus"),
        "audio/flac" | "audio/x-flac" => Some("flac"),
        "audio/aac" => Some("aac"),
        "audio/webm" => Some("webm"),
        "audio/mp4" => Some("m4a"),
        "audio/basic" => Some("au"),
        "audio/aiff" | "audio/x-aiff" => Some("aiff"),
        _ => None,
    }
}
