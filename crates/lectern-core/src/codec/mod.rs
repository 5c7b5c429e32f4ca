//! Audio payload codecs: transport text to bytes, bytes to playable samples.

pub mod pcm;
pub mod transport;

pub use transport::DecodeError;
