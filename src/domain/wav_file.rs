use super::audio_mime_descriptor::AudioMimeDescriptor;

pub const WAV_HEADER_LEN: usize = 44;

const CHANNELS: u16 = 1;
const PCM_FORMAT_TAG: u16 = 1;
const FMT_CHUNK_SIZE: u32 = 16;

/// Headerless little-endian PCM wrapped in a canonical 44-byte RIFF/WAVE header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
    descriptor: AudioMimeDescriptor,
    data: Vec<u8>,
}

impl WavFile {
    pub fn encapsulate(data: Vec<u8>, descriptor: AudioMimeDescriptor) -> Self {
        Self { descriptor, data }
    }

    pub fn sample_rate(&self) -> u32 {
        self.descriptor.rate
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.descriptor.bits_per_sample
    }

    pub fn channels(&self) -> u16 {
        CHANNELS
    }

    /// Bytes per sample frame. Bit depths that are not a multiple of 8 occupy
    /// the next whole byte.
    pub fn block_align(&self) -> u16 {
        CHANNELS * self.descriptor.bits_per_sample.div_ceil(8)
    }

    pub fn byte_rate(&self) -> u32 {
        self.descriptor.rate.wrapping_mul(u32::from(self.block_align()))
    }

    /// Payload length, capped at `u32::MAX` for payloads the RIFF size fields cannot hold.
    pub fn data_size(&self) -> u32 {
        riff_size(self.data.len())
    }

    pub fn chunk_size(&self) -> u32 {
        36u32.saturating_add(self.data_size())
    }

    pub fn header(&self) -> [u8; WAV_HEADER_LEN] {
        let mut header = [0u8; WAV_HEADER_LEN];
        header[0..4].copy_from_slice(b"RIFF");
        header[4..8].copy_from_slice(&self.chunk_size().to_le_bytes());
        header[8..12].copy_from_slice(b"WAVE");
        header[12..16].copy_from_slice(b"fmt ");
        header[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        header[20..22].copy_from_slice(&PCM_FORMAT_TAG.to_le_bytes());
        header[22..24].copy_from_slice(&CHANNELS.to_le_bytes());
        header[24..28].copy_from_slice(&self.descriptor.rate.to_le_bytes());
        header[28..32].copy_from_slice(&self.byte_rate().to_le_bytes());
        header[32..34].copy_from_slice(&self.block_align().to_le_bytes());
        header[34..36].copy_from_slice(&self.descriptor.bits_per_sample.to_le_bytes());
        header[36..40].copy_from_slice(b"data");
        header[40..44].copy_from_slice(&self.data_size().to_le_bytes());
        header
    }

    pub fn into_bytes(self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(WAV_HEADER_LEN + self.data.len());
        bytes.extend_from_slice(&self.header());
        bytes.extend_from_slice(&self.data);
        bytes
    }
}

fn riff_size(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
