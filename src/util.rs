use std::collections::hash_map::DefaultHasher;
use std::f32::consts::TAU;
use std::hash::{Hash, Hasher};

/// Deterministic unit pair in [-1, 1] keyed by an entry id.
///
/// The same id always maps to the same pair, so jittered layouts are
/// reproducible for a given dataset.
pub fn stable_pair(id: &str) -> (f32, f32) {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();

    let x = ((hash & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    let y = (((hash >> 32) & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    ((x * 2.0) - 1.0, (y * 2.0) - 1.0)
}

/// Deterministic animation phase in [0, TAU) keyed by an entry id.
pub fn stable_phase(id: &str) -> f32 {
    let (x, _) = stable_pair(id);
    (x * 0.5 + 0.5) * TAU
}

/// Truncates to `max_chars` characters, appending an ellipsis when cut.
pub fn truncate_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let mut truncated = text
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    truncated.push('…');
    truncated
}
