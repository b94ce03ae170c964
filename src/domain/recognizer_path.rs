use std::fmt;

/// Fully qualified name of a recognizer resource:
/// `projects/{project}/locations/{location}/recognizers/{recognizer}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecognizerPath {
    path: String,
    parent_len: usize,
}

impl RecognizerPath {
    pub fn new(project_id: &str, location: &str, recognizer_id: &str) -> Self {
        let parent = format!("projects/{}/locations/{}", project_id, location);
        let parent_len = parent.len();
        Self {
            path: format!("{}/recognizers/{}", parent, recognizer_id),
            parent_len,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// `projects/{project}/locations/{location}`
    pub fn parent(&self) -> &str {
        &self.path[..self.parent_len]
    }

    pub fn recognizer_id(&self) -> &str {
        &self.path[self.parent_len + "/recognizers/".len()..]
    }
}

impl fmt::Display for RecognizerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
