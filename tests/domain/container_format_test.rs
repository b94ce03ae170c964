use handa::domain::container_extension;

#[test]
fn given_encoded_container_mime_when_resolving_then_returns_extension() {
    assert_eq!(container_extension("audio/mpeg"), Some("mp3"));
    assert_eq!(container_extension("audio/wav"), Some("wav"));
    assert_eq!(container_extension("audio/ogg"), Some("ogg"));
    assert_eq!(container_extension("audio/flac"), Some("flac"));
}

#[test]
fn given_mime_with_parameters_and_case_when_resolving_then_essence_is_used() {
    assert_eq!(container_extension("Audio/MPEG; charset=binary"), Some("mp3"));
}

#[test]
fn given_raw_pcm_mime_when_resolving_then_returns_none() {
    assert_eq!(container_extension("audio/L16;rate=24000"), None);
    assert_eq!(container_extension("audio/L16;codec=pcm;rate=24000"), None);
    assert_eq!(container_extension("audio/pcm"), None);
}

#[test]
fn given_unknown_or_empty_mime_when_resolving_then_returns_none() {
    assert_eq!(container_extension(""), None);
    assert_eq!(container_extension("application/octet-stream"), None);
}
