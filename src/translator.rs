//! A reusable translator bundling encoder and decoder settings.

use crate::decoder::{decode_with_config, DecoderConfig};
use crate::encoder::{encode_with_config, EncoderConfig};

/// Translates between Human and Pejelagarto text with fixed settings.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    encoder: EncoderConfig,
    decoder: DecoderConfig,
}

impl Translator {
    /// Creates a translator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a translator with explicit settings.
    pub fn with_configs(encoder: EncoderConfig, decoder: DecoderConfig) -> Self {
        Self { encoder, decoder }
    }

    pub fn encoder_config(&self) -> &EncoderConfig {
        &self.encoder
    }

    pub fn decoder_config(&self) -> &DecoderConfig {
        &self.decoder
    }

    /// Human text to Pejelagarto.
    pub fn to_pejelagarto(&self, input: &str) -> String {
        encode_with_config(input.as_bytes(), &self.encoder)
    }

    /// Raw bytes to Pejelagarto.
    pub fn bytes_to_pejelagarto(&self, input: &[u8]) -> String {
        encode_with_config(input, &self.encoder)
    }

    /// Pejelagarto to Human text. Bytes that are not valid UTF-8 are replaced.
    pub fn from_pejelagarto(&self, input: &str) -> String {
        String::from_utf8_lossy(&self.from_pejelagarto_bytes(input)).into_owned()
    }

    /// Pejelagarto to the original bytes.
    pub fn from_pejelagarto_bytes(&self, input: &str) -> Vec<u8> {
        decode_with_config(input, &self.decoder)
    }
}
