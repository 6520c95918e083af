// Sprite censor: blacks out sprite bounding boxes in an RGBA frame.
// The one operation is `censor::apply`; `types` holds the plain data it reads.
// `draw` and `error` only serve the demo viewer binary.

pub mod censor;
pub mod draw;
pub mod error;
pub mod types;
