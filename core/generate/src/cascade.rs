//! The model cascade: an ordered list of candidate models tried in sequence
//! until one produces text.

use tracing::warn;

/// Candidate models in attempt order, cheapest and fastest first. Process-wide
/// static configuration, immutable after startup.
pub const MODEL_CASCADE: [&str; 3] = [
    "gemini-2.5-flash-lite",
    "gemini-2.5-flash",
    "gemini-2.5-pro",
];

/// True when `model` is a member of the cascade.
pub fn is_cascade_model(model: &str) -> bool {
    MODEL_CASCADE.contains(&model)
}

/// Order the cascade for one request.
///
/// A valid preferred model is moved to the front and removed from its
/// original position; an invalid preferred model is ignored with a warning.
/// The result is always a permutation of [`MODEL_CASCADE`] containing every
/// entry exactly once.
pub fn effective_cascade(preferred: Option<&str>) -> Vec<&'static str> {
    match preferred {
        Some(preferred) if is_cascade_model(preferred) => {
            let mut models = Vec::with_capacity(MODEL_CASCADE.len());
            for model in MODEL_CASCADE {
                if model == preferred {
                    models.insert(0, model);
                } else {
                    models.push(model);
                }
            }
            models
        }
        Some(preferred) => {
            warn!(model = preferred, "preferred model not in cascade, using default order");
            MODEL_CASCADE.to_vec()
        }
        None => MODEL_CASCADE.to_vec(),
    }
}

#[cfg(test)]
#[path = "cascade.test.rs"]
mod tests;
