//! Static question bank: quiz modules, attention and speed tests, brain games
//! and the canned texts the bot sends.

pub mod brain_games;
pub mod messages;
pub mod quiz;
pub mod assessments;

use rand::seq::SliceRandom;
use rand::Rng;

/// A multiple-choice question as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the right answer.
    pub correct: usize,
    pub explanation: Option<String>,
}

impl Question {
    pub fn correct_option(&self) -> &str {
        self.options.get(self.correct).map(String::as_str).unwrap_or_default()
    }
}

/// Compile-time question used by the catalogs.
#[derive(Debug, Clone, Copy)]
pub struct StaticQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

impl StaticQuestion {
    pub fn to_question(&self) -> Question {
        Question {
            prompt: self.prompt.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct: self.correct,
            explanation: if self.explanation.is_empty() {
                None
            } else {
                Some(self.explanation.to_string())
            },
        }
    }
}

/// Copies a catalog into a freshly shuffled question list.
pub fn shuffled<R: Rng + ?Sized>(bank: &[StaticQuestion], rng: &mut R) -> Vec<Question> {
    let mut questions: Vec<Question> = bank.iter().map(StaticQuestion::to_question).collect();
    questions.shuffle(rng);
    questions
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_well_formed(bank: &[StaticQuestion]) {
        assert!(!bank.is_empty());
        for q in bank {
            assert!(q.options.len() >= 2, "too few options: {}", q.prompt);
            assert!(q.correct < q.options.len(), "bad answer index: {}", q.prompt);
        }
    }

    #[test]
    fn test_every_catalog_is_well_formed() {
        for module in quiz::QUIZ_MODULES {
            assert_well_formed(module.questions);
        }
        assert_well_formed(assessments::ATTENTION_QUESTIONS);
        assert_well_formed(assessments::SPEED_QUESTIONS);
        assert_well_formed(brain_games::LOGIC_TASKS);
        assert_well_formed(brain_games::PATTERN_TASKS);
    }

    #[test]
    fn test_shuffled_keeps_every_question() {
        let mut rng = StdRng::seed_from_u64(7);
        let bank = assessments::SPEED_QUESTIONS;
        let questions = shuffled(bank, &mut rng);

        assert_eq!(questions.len(), bank.len());
        for original in bank {
            let copy = questions
                .iter()
                .find(|q| q.prompt == original.prompt)
                .expect("question lost while shuffling");
            assert_eq!(copy.correct_option(), original.options[original.correct]);
        }
    }
}
