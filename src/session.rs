use crate::{config::GenerationConfig, models::GeneratedImage};

/// Explicit per-session state: the uploaded photo, the live configuration,
/// the accumulated results, and the in-progress flag.
///
/// This is the owned-store replacement for ambient UI globals. Everything
/// lives in process memory for the lifetime of the session; a reset drops
/// it all.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    source_image: Option<String>,
    results: Vec<GeneratedImage>,
    generating: bool,
    pub config: GenerationConfig,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_source_image(&mut self, data_uri: impl Into<String>) {
        self.source_image = Some(data_uri.into());
    }

    pub fn source_image(&self) -> Option<&str> {
        self.source_image.as_deref()
    }

    pub fn results(&self) -> &[GeneratedImage] {
        &self.results
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Gate for starting a batch: requires a source image and no batch in
    /// flight. Returns false (and changes nothing) otherwise.
    pub fn begin_generation(&mut self) -> bool {
        if self.source_image.is_none() || self.generating {
            return false;
        }
        self.generating = true;
        true
    }

    pub fn finish_generation(&mut self) {
        self.generating = false;
    }

    /// Prepends a completed batch, newest assets first.
    pub fn push_batch(&mut self, batch: Vec<GeneratedImage>) {
        let mut merged = batch;
        merged.append(&mut self.results);
        self.results = merged;
    }

    /// Drops the source image and all results. The configuration is kept.
    pub fn reset(&mut self) {
        self.source_image = None;
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> GeneratedImage {
        GeneratedImage::completed("AAAA", &GenerationConfig::default())
    }

    #[test]
    fn test_generation_gate() {
        let mut state = SessionState::new();
        assert!(!state.begin_generation());

        state.set_source_image("data:image/png;base64,AAAA");
        assert!(state.begin_generation());
        assert!(state.is_generating());

        // A second batch while one is in flight is refused.
        assert!(!state.begin_generation());

        state.finish_generation();
        assert!(state.begin_generation());
    }

    #[test]
    fn test_new_batches_are_prepended() {
        let mut state = SessionState::new();
        let first = sample_result();
        let second = sample_result();
        let first_id = first.id.clone();
        let second_id = second.id.clone();

        state.push_batch(vec![first]);
        state.push_batch(vec![second]);

        assert_eq!(state.results()[0].id, second_id);
        assert_eq!(state.results()[1].id, first_id);
    }

    #[test]
    fn test_reset_clears_source_and_results() {
        let mut state = SessionState::new();
        state.set_source_image("data:image/png;base64,AAAA");
        state.push_batch(vec![sample_result()]);
        state.config = state.config.with_quantity(5);

        state.reset();
        assert!(state.source_image().is_none());
        assert!(state.results().is_empty());
        assert_eq!(state.config.quantity, 5);
    }
}
