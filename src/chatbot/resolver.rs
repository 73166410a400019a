//! Two-tier intent resolution: probabilistic primary, deterministic
//! fallback. Every message resolves to exactly one intent.

use super::normalize::normalize_message;
use super::predictor::IntentPredictor;
use super::rules::RuleSet;
use super::types::{ClassificationResult, ClassifierSource, Intent};

pub struct IntentResolver<P: IntentPredictor> {
    predictor: P,
    rules: RuleSet,
}

impl<P: IntentPredictor> IntentResolver<P> {
    pub fn new(predictor: P) -> Self {
        Self::with_rules(predictor, RuleSet::default())
    }

    pub fn with_rules(predictor: P, rules: RuleSet) -> Self {
        Self { predictor, rules }
    }

    /// Resolve one message to one intent. The primary classifier is
    /// consulted first; if it yields nothing usable (or `UNKNOWN`), the
    /// keyword rules run on the normalized text. No code path leaves the
    /// turn unresolved.
    pub fn resolve(&self, message: &str) -> ClassificationResult {
        if let Some(intent) = self.predictor.predict_intent(message) {
            if intent != Intent::Unknown {
                return ClassificationResult {
                    intent,
                    source: ClassifierSource::Primary,
                };
            }
        }

        let normalized = normalize_message(message);
        ClassificationResult {
            intent: self.rules.classify(&normalized),
            source: ClassifierSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::predictor::MockPredictor;

    #[test]
    fn primary_result_is_used_when_usable() {
        let resolver = IntentResolver::new(MockPredictor::returning(Intent::GetMedications));
        // The primary's answer wins even when the keywords disagree.
        let result = resolver.resolve("what is my blood type");
        assert_eq!(result.intent, Intent::GetMedications);
        assert_eq!(result.source, ClassifierSource::Primary);
    }

    #[test]
    fn unavailable_primary_falls_back_to_rules() {
        let resolver = IntentResolver::new(MockPredictor::unavailable());
        let result = resolver.resolve("What's my blood type?");
        assert_eq!(result.intent, Intent::GetBloodGroup);
        assert_eq!(result.source, ClassifierSource::Fallback);
    }

    #[test]
    fn primary_unknown_falls_back_to_rules() {
        let resolver = IntentResolver::new(MockPredictor::returning(Intent::Unknown));
        let result = resolver.resolve("show my reports");
        assert_eq!(result.intent, Intent::GetReportList);
        assert_eq!(result.source, ClassifierSource::Fallback);
    }

    #[test]
    fn fallback_matches_rules_alone_on_primary_failure() {
        // Simulated timeout: the final intent equals what the rule set
        // alone produces for the same message.
        let rules = RuleSet::default();
        let resolver = IntentResolver::new(MockPredictor::unavailable());

        for message in [
            "diagnose my diabetes",
            "list my allergies",
            "how many records are on file",
            "hello there",
        ] {
            let expected = rules.classify(&normalize_message(message));
            assert_eq!(resolver.resolve(message).intent, expected);
        }
    }

    #[test]
    fn both_classifiers_empty_is_unknown() {
        let resolver = IntentResolver::new(MockPredictor::unavailable());
        let result = resolver.resolve("hello");
        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.source, ClassifierSource::Fallback);
    }
}
