//! Port definitions: the traits adapters implement.
//!
//! | Port | Adapter |
//! |---|---|
//! | [`SpeechSynthesizer`] | `lectern-gemini` (Gemini `generateContent`) |
//! | [`AudioOutputDevice`] | `lectern-audio` (rodio on a dedicated thread) |

pub mod output;
pub mod speech;

pub use output::{
    AudioOutputDevice, DeviceStatus, OutputError, PlaybackDoneCallback, PlaybackHandle,
};
pub use speech::{SpeechSynthesizer, SynthesisError};
