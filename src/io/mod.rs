//! Output devices and the hosts that open them.

pub mod capture;
#[cfg(feature = "device")]
pub mod device;
pub mod output;

pub use capture::{CaptureDevice, CapturedVoice};
#[cfg(feature = "device")]
pub use device::{CpalDevice, CpalHost};
pub use output::{AudioHost, MixerHandle, OpenedOutput, OutputDevice};
