//! Typewriter builder - validates everything once, at startup.

use log::{error, info};
use rand::rngs::StdRng;

use super::config::TypewriterConfig;
use super::output::TextTarget;
use super::scheduler::Typewriter;
use super::shuffle::{RandomSource, RngSource};
use super::words::WordList;
use crate::error::{Error, Result};

/// Collects words, random source, output target and timing.
///
/// ```ignore
/// let target = SignalTarget::new();
/// let mut typewriter = TypewriterBuilder::new()
///     .word_list(WordList::languages())
///     .target(target.clone())
///     .build()?;
///
/// let tick = typewriter.tick();
/// ```
pub struct TypewriterBuilder<R = RngSource<StdRng>> {
    words: Vec<String>,
    rng: R,
    target: Option<Box<dyn TextTarget>>,
    config: TypewriterConfig,
}

impl TypewriterBuilder {
    /// Builder with an OS-seeded random source and default timing.
    pub fn new() -> Self {
        Self::with_random_source(RngSource::from_entropy())
    }
}

impl Default for TypewriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> TypewriterBuilder<R> {
    /// Builder drawing every shuffle from `rng`. No OS entropy is touched.
    pub fn with_random_source(rng: R) -> Self {
        Self {
            words: Vec::new(),
            rng,
            target: None,
            config: TypewriterConfig::default(),
        }
    }

    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn word_list(mut self, words: WordList) -> Self {
        self.words = words.as_slice().to_vec();
        self
    }

    /// Replace the random source used for every shuffle.
    pub fn random_source<R2: RandomSource>(self, rng: R2) -> TypewriterBuilder<R2> {
        TypewriterBuilder {
            words: self.words,
            rng,
            target: self.target,
            config: self.config,
        }
    }

    pub fn target(mut self, target: impl TextTarget + 'static) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    pub fn config(mut self, config: TypewriterConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate and draw the initial traversal order.
    pub fn build(self) -> Result<Typewriter<R>> {
        let words = WordList::new(self.words).inspect_err(|e| error!("typewriter: {e}"))?;
        self.config
            .validate()
            .inspect_err(|e| error!("typewriter: {e}"))?;
        let Some(target) = self.target else {
            error!("typewriter: {}", Error::MissingTarget);
            return Err(Error::MissingTarget);
        };

        info!("typewriter: starting with {} words", words.len());
        Ok(Typewriter::from_parts(words, self.rng, target, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::output::RecordingTarget;
    use crate::typewriter::shuffle::ScriptedSource;

    #[test]
    fn test_missing_target() {
        let result = TypewriterBuilder::new().words(["a"]).build();
        assert!(matches!(result, Err(Error::MissingTarget)));
    }

    #[test]
    fn test_empty_words() {
        let result = TypewriterBuilder::new()
            .target(RecordingTarget::new())
            .build();
        assert!(matches!(result, Err(Error::EmptyWordList)));
    }

    #[test]
    fn test_invalid_config() {
        let result = TypewriterBuilder::new()
            .words(["a"])
            .target(RecordingTarget::new())
            .config(TypewriterConfig::default().with_typing_delay_ms(0))
            .build();
        assert!(matches!(
            result,
            Err(Error::InvalidDelay {
                field: "typing_delay_ms"
            })
        ));
    }

    #[test]
    fn test_build_does_not_write() {
        let recorder = RecordingTarget::new();
        let typewriter = TypewriterBuilder::new()
            .words(["a", "b", "c"])
            .random_source(ScriptedSource::new([0, 0]))
            .target(recorder.clone())
            .build()
            .unwrap();
        // [a b c] -> i=2 j=0 -> [c b a] -> i=1 j=0 -> [b c a]
        assert_eq!(typewriter.current_word(), "b");
        assert_eq!(recorder.writes(), 0);
    }

    #[test]
    fn test_with_random_source() {
        let typewriter = TypewriterBuilder::with_random_source(ScriptedSource::new([0, 0]))
            .words(["a", "b", "c"])
            .target(RecordingTarget::new())
            .build()
            .unwrap();
        assert_eq!(typewriter.current_word(), "b");
        assert_eq!(typewriter.config(), &TypewriterConfig::default());
    }
}
