pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

const RATE_PREFIX: &str = "rate=";
const LINEAR_PCM_PREFIX: &str = "audio/L";

/// Sample rate and bit depth carried by a raw audio mime type such as
/// `audio/L16;rate=24000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioMimeDescriptor {
    pub rate: u32,
    pub bits_per_sample: u16,
}

impl AudioMimeDescriptor {
    /// Never fails. Missing or malformed parameters keep their defaults.
    pub fn parse(mime_type: &str) -> Self {
        let mut descriptor = Self::default();

        for segment in mime_type.split(';').map(str::trim) {
            if let Some(value) = strip_prefix_ignore_case(segment, RATE_PREFIX) {
                if let Ok(rate) = value.trim().parse() {
                    descriptor.rate = rate;
                }
            } else if let Some(value) = strip_prefix_ignore_case(segment, LINEAR_PCM_PREFIX) {
                if let Ok(bits) = value.parse() {
                    descriptor.bits_per_sample = bits;
                }
            }
        }

        descriptor
    }
}

impl Default for AudioMimeDescriptor {
    fn default() -> Self {
        Self {
            rate: DEFAULT_SAMPLE_RATE,
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
        }
    }
}

fn strip_prefix_ignore_case<'a>(segment: &'a str, prefix: &str) -> Option<&'a str> {
    let head = segment.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        segment.get(prefix.len()..)
    } else {
        None
    }
}
