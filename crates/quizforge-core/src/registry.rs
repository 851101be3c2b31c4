//! Topic identifier → question generator lookup.

use std::collections::HashMap;
use std::sync::Arc;

use rand::RngCore;

use crate::generator::{DifficultyDistribution, QuestionGenerator};
use crate::model::QuizQuestion;

/// Lookup table from topic identifier to a registered question generator.
///
/// Built once at startup from a fixed table of generators (see
/// `quizforge_generators::builtin_registry`), so registration order is
/// deterministic and nothing depends on load ordering.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn QuestionGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a sequence of generators.
    pub fn with_generators(
        generators: impl IntoIterator<Item = Arc<dyn QuestionGenerator>>,
    ) -> Self {
        let mut registry = Self::new();
        for generator in generators {
            registry.register(generator);
        }
        registry
    }

    /// Store a generator under its own identifier. Re-registering the same
    /// identifier replaces the previous entry (last registration wins).
    pub fn register(&mut self, generator: Arc<dyn QuestionGenerator>) {
        let id = generator.id().to_string();
        if self.generators.insert(id.clone(), generator).is_some() {
            tracing::debug!("generator '{id}' re-registered, previous entry replaced");
        }
    }

    /// Resolve a topic identifier.
    pub fn lookup(&self, id: &str) -> Option<&Arc<dyn QuestionGenerator>> {
        self.generators.get(id)
    }

    /// Sorted topic identifiers of all registered generators.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Generate `count` questions for a topic.
    ///
    /// An unknown identifier is the sole failure path: it is logged and an
    /// empty batch is returned, never an error.
    pub fn generate_questions(
        &self,
        id: &str,
        count: usize,
        distribution: &DifficultyDistribution,
        rng: &mut dyn RngCore,
    ) -> Vec<QuizQuestion> {
        match self.generators.get(id) {
            Some(generator) => generator.generate(count, distribution, rng),
            None => {
                tracing::warn!("no question generator registered for '{id}'");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    struct StubGenerator {
        id: &'static str,
        marker: &'static str,
    }

    impl QuestionGenerator for StubGenerator {
        fn id(&self) -> &str {
            self.id
        }

        fn name(&self) -> &str {
            self.marker
        }

        fn generate(
            &self,
            count: usize,
            _distribution: &DifficultyDistribution,
            _rng: &mut dyn RngCore,
        ) -> Vec<QuizQuestion> {
            (0..count)
                .map(|_| QuizQuestion {
                    id: Uuid::new_v4(),
                    text: self.marker.into(),
                    options: vec![],
                    correct_option_id: 'A',
                    difficulty: Difficulty::Medium,
                    explanation: None,
                })
                .collect()
        }
    }

    #[test]
    fn lookup_and_generate() {
        let registry = GeneratorRegistry::with_generators([Arc::new(StubGenerator {
            id: "addition",
            marker: "first",
        }) as Arc<dyn QuestionGenerator>]);

        assert!(registry.lookup("addition").is_some());
        assert!(registry.lookup("subtraction").is_none());

        let mut rng = SmallRng::seed_from_u64(0);
        let questions = registry.generate_questions(
            "addition",
            3,
            &DifficultyDistribution::for_count(3),
            &mut rng,
        );
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn unknown_topic_returns_empty() {
        let registry = GeneratorRegistry::new();
        let mut rng = SmallRng::seed_from_u64(0);
        let questions = registry.generate_questions(
            "nope",
            5,
            &DifficultyDistribution::default(),
            &mut rng,
        );
        assert!(questions.is_empty());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Arc::new(StubGenerator {
            id: "addition",
            marker: "first",
        }));
        registry.register(Arc::new(StubGenerator {
            id: "addition",
            marker: "second",
        }));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("addition").unwrap().name(), "second");
    }

    #[test]
    fn ids_sorted() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Arc::new(StubGenerator { id: "b", marker: "" }));
        registry.register(Arc::new(StubGenerator { id: "a", marker: "" }));
        assert_eq!(registry.ids(), vec!["a", "b"]);
    }
}
