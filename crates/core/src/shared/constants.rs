/// Distance below which two 128-d face descriptors are taken to be the same
/// person. Tuned for the dlib ResNet face recognition model.
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 0.6;

/// Round budget for Chinese Whispers label propagation.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

pub const DEFAULT_SEED: u64 = 0;

pub const JSON_EXTENSIONS: &[&str] = &["json"];
