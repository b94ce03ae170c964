/// Reassembles server-sent events from arbitrarily split network reads.
///
/// Returns the `data` payload of each complete event. Multiple `data:` lines in
/// one event are joined with `\n`.
#[derive(Debug, Default)]
pub struct SseBuffer {
    pending: Vec<u8>,
    data_lines: Vec<String>,
}

impl SseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(bytes);

        let mut events = Vec::new();
        while let Some(newline) = self.pending.iter().position(|b| *b == b'\n') {
            let raw: Vec<u8> = self.pending.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(['\n', '\r']);
            if let Some(event) = self.accept_line(line) {
                events.push(event);
            }
        }
        events
    }

    /// Flushes an event left open by a stream that ended without a blank line.
    pub fn finish(mut self) -> Option<String> {
        if !self.pending.is_empty() {
            let raw = std::mem::take(&mut self.pending);
            let line = String::from_utf8_lossy(&raw).trim_end_matches('\r').to_string();
            self.accept_line(&line);
        }
        self.dispatch()
    }

    fn accept_line(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            return self.dispatch();
        }
        if let Some(data) = line.strip_prefix("data:") {
            self.data_lines
                .push(data.strip_prefix(' ').unwrap_or(data).to_string());
        }
        None
    }

    fn dispatch(&mut self) -> Option<String> {
        if self.data_lines.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.data_lines).join("\n"))
    }
}
