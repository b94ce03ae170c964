use handa::domain::RecognizerPath;

#[test]
fn given_identifiers_when_creating_path_then_format_is_resource_name() {
    let path = RecognizerPath::new("my-project", "global", "sinhala-recognizer");

    assert_eq!(
        path.as_str(),
        "projects/my-project/locations/global/recognizers/sinhala-recognizer"
    );
}

#[test]
fn given_same_identifiers_when_creating_paths_twice_then_paths_are_equal() {
    let first = RecognizerPath::new("p", "global", "sinhala-recognizer");
    let second = RecognizerPath::new("p", "global", "sinhala-recognizer");

    assert_eq!(first, second);
}

#[test]
fn given_path_when_splitting_then_parent_and_id_are_returned() {
    let path = RecognizerPath::new("p", "global", "sinhala-recognizer");

    assert_eq!(path.parent(), "projects/p/locations/global");
    assert_eq!(path.recognizer_id(), "sinhala-recognizer");
}

#[test]
fn given_path_when_displayed_then_matches_as_str() {
    let path = RecognizerPath::new("p", "us", "r");

    assert_eq!(format!("{}", path), path.as_str());
}
