//! Multiple-choice quiz about planets, asteroids and comets.
//!
//! `QuizSession` holds the whole flow (category selection, one question at
//! a time, results) independent of how it is drawn.

mod data;

use std::f32::consts::TAU;

/// Radius of the score ring drawn on the results screen, in points.
pub const RING_RADIUS: f32 = 50.0;

/// A single multiple-choice question.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
    pub reason: &'static str,
}

impl QuizQuestion {
    /// Whether the option at `index` is the correct answer.
    pub fn is_correct(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|option| *option == self.answer)
    }
}

/// Question categories offered on the selection screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuizCategory {
    Planets,
    Asteroids,
    Comets,
    HazardousAsteroids,
    General,
}

impl QuizCategory {
    pub const ALL: [QuizCategory; 5] = [
        QuizCategory::Planets,
        QuizCategory::Asteroids,
        QuizCategory::Comets,
        QuizCategory::HazardousAsteroids,
        QuizCategory::General,
    ];

    /// Button label on the selection screen.
    pub fn label(&self) -> &'static str {
        match self {
            QuizCategory::Planets => "Planets",
            QuizCategory::Asteroids => "Near-Earth Asteroids",
            QuizCategory::Comets => "Near-Earth Comets",
            QuizCategory::HazardousAsteroids => "Potentially Hazardous Asteroids",
            QuizCategory::General => "General",
        }
    }

    pub fn questions(&self) -> &'static [QuizQuestion] {
        match self {
            QuizCategory::Planets => data::PLANETS,
            QuizCategory::Asteroids => data::ASTEROIDS,
            QuizCategory::Comets => data::COMETS,
            QuizCategory::HazardousAsteroids => data::HAZARDOUS_ASTEROIDS,
            QuizCategory::General => data::GENERAL,
        }
    }
}

/// Which screen the quiz is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    CategorySelection,
    Question,
    Results,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz is on the {actual:?} screen, expected {expected:?}")]
    WrongPhase { expected: QuizPhase, actual: QuizPhase },

    #[error("option {index} out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("no answer selected for the current question")]
    NoAnswerSelected,
}

/// Review line for one answered question.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionReview {
    /// 1-based question number.
    pub number: usize,
    pub your_answer: Option<&'static str>,
    pub correct_answer: &'static str,
    pub reason: &'static str,
    pub correct: bool,
}

/// Outcome of a completed quiz.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub reviews: Vec<QuestionReview>,
}

impl QuizResults {
    /// Share of correct answers, 0–100.
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f32 / self.total as f32 * 100.0
    }

    /// Percentage rounded for display, e.g. `"80%"`.
    pub fn percentage_label(&self) -> String {
        format!("{:.0}%", self.percentage())
    }

    pub fn summary(&self) -> String {
        format!(
            "You answered {} out of {} questions correctly!",
            self.score, self.total
        )
    }

    /// Circumference of the score ring.
    pub fn ring_circumference() -> f32 {
        TAU * RING_RADIUS
    }

    /// Length of the ring left unfilled.
    pub fn ring_dash_offset(&self) -> f32 {
        (100.0 - self.percentage()) / 100.0 * Self::ring_circumference()
    }
}

/// State of one pass through the quiz.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    phase: QuizPhase,
    category: Option<QuizCategory>,
    current: usize,
    answers: Vec<Option<usize>>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            phase: QuizPhase::CategorySelection,
            category: None,
            current: 0,
            answers: Vec::new(),
        }
    }
}

impl QuizSession {
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn category(&self) -> Option<QuizCategory> {
        self.category
    }

    /// Zero-based index of the question on screen.
    pub fn current_index(&self) -> usize {
        self.current
    }

    fn questions(&self) -> &'static [QuizQuestion] {
        self.category.map(|c| c.questions()).unwrap_or(&[])
    }

    fn expect_phase(&self, expected: QuizPhase) -> Result<(), QuizError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(QuizError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Begin a category from the first question with no answers.
    pub fn start(&mut self, category: QuizCategory) {
        self.category = Some(category);
        self.current = 0;
        self.answers = vec![None; category.questions().len()];
        self.phase = QuizPhase::Question;
    }

    /// Question currently on screen.
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        if self.phase != QuizPhase::Question {
            return None;
        }
        self.questions().get(self.current)
    }

    /// Record (or change) the answer to the current question.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        self.expect_phase(QuizPhase::Question)?;
        let len = self
            .current_question()
            .map(|q| q.options.len())
            .unwrap_or(0);
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }
        self.answers[self.current] = Some(index);
        Ok(())
    }

    /// Answer chosen for the current question.
    pub fn selected_option(&self) -> Option<usize> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Whether the Next button is enabled.
    pub fn can_advance(&self) -> bool {
        self.phase == QuizPhase::Question && self.selected_option().is_some()
    }

    /// Move to the next question, or to the results after the last one.
    pub fn next(&mut self) -> Result<QuizPhase, QuizError> {
        self.expect_phase(QuizPhase::Question)?;
        if self.selected_option().is_none() {
            return Err(QuizError::NoAnswerSelected);
        }
        self.current += 1;
        if self.current >= self.questions().len() {
            self.phase = QuizPhase::Results;
        }
        Ok(self.phase)
    }

    /// Progress through the category, in `(0, 1]` while answering.
    pub fn progress(&self) -> f32 {
        let total = self.questions().len();
        if total == 0 {
            return 0.0;
        }
        ((self.current + 1).min(total)) as f32 / total as f32
    }

    /// Score and per-question review. Only available on the results screen.
    pub fn results(&self) -> Result<QuizResults, QuizError> {
        self.expect_phase(QuizPhase::Results)?;
        let reviews: Vec<QuestionReview> = self
            .questions()
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(i, (question, answer))| {
                let correct = answer.is_some_and(|a| question.is_correct(a));
                QuestionReview {
                    number: i + 1,
                    your_answer: answer.and_then(|a| question.options.get(a).copied()),
                    correct_answer: question.answer,
                    reason: question.reason,
                    correct,
                }
            })
            .collect();
        Ok(QuizResults {
            score: reviews.iter().filter(|r| r.correct).count(),
            total: reviews.len(),
            reviews,
        })
    }

    /// Return to the category selection screen.
    pub fn restart(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn correct_index(question: &QuizQuestion) -> usize {
        question
            .options
            .iter()
            .position(|o| *o == question.answer)
            .unwrap()
    }

    #[test]
    fn test_every_answer_is_an_option() {
        for category in QuizCategory::ALL {
            assert_eq!(category.questions().len(), 5);
            for question in category.questions() {
                assert!(
                    question.options.contains(&question.answer),
                    "{}",
                    question.question
                );
            }
        }
    }

    #[test]
    fn test_next_requires_answer() {
        let mut session = QuizSession::default();
        session.start(QuizCategory::Planets);
        assert!(!session.can_advance());
        assert_eq!(session.next(), Err(QuizError::NoAnswerSelected));

        session.select_option(0).unwrap();
        assert!(session.can_advance());
        assert_eq!(session.next(), Ok(QuizPhase::Question));
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_option_out_of_range() {
        let mut session = QuizSession::default();
        session.start(QuizCategory::Comets);
        assert_eq!(
            session.select_option(4),
            Err(QuizError::OptionOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_wrong_phase() {
        let mut session = QuizSession::default();
        assert!(matches!(
            session.select_option(0),
            Err(QuizError::WrongPhase { .. })
        ));
        assert!(matches!(session.results(), Err(QuizError::WrongPhase { .. })));
    }

    #[test]
    fn test_answer_can_be_changed() {
        let mut session = QuizSession::default();
        session.start(QuizCategory::General);
        session.select_option(1).unwrap();
        session.select_option(2).unwrap();
        assert_eq!(session.selected_option(), Some(2));
    }

    #[test]
    fn test_full_run_scores_and_reviews() {
        let mut session = QuizSession::default();
        session.start(QuizCategory::Asteroids);

        let questions = QuizCategory::Asteroids.questions();
        for (i, question) in questions.iter().enumerate() {
            assert_relative_eq!(session.progress(), (i + 1) as f32 / 5.0);
            // Answer the first three correctly, the rest wrong.
            let right = correct_index(question);
            let choice = if i < 3 { right } else { (right + 1) % 4 };
            session.select_option(choice).unwrap();
            session.next().unwrap();
        }

        assert_eq!(session.phase(), QuizPhase::Results);
        let results = session.results().unwrap();
        assert_eq!(results.score, 3);
        assert_eq!(results.total, 5);
        assert_eq!(results.percentage_label(), "60%");
        assert!(results.reviews[0].correct);
        assert!(!results.reviews[4].correct);
        assert_eq!(results.reviews[4].correct_answer, questions[4].answer);
        assert_relative_eq!(
            results.ring_dash_offset(),
            0.4 * TAU * RING_RADIUS,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_perfect_score_fills_ring() {
        let mut session = QuizSession::default();
        session.start(QuizCategory::HazardousAsteroids);
        for question in QuizCategory::HazardousAsteroids.questions() {
            session.select_option(correct_index(question)).unwrap();
            session.next().unwrap();
        }
        let results = session.results().unwrap();
        assert_eq!(results.percentage_label(), "100%");
        assert_relative_eq!(results.ring_dash_offset(), 0.0);
    }

    #[test]
    fn test_restart_returns_to_selection() {
        let mut session = QuizSession::default();
        session.start(QuizCategory::Planets);
        session.select_option(0).unwrap();
        session.restart();
        assert_eq!(session.phase(), QuizPhase::CategorySelection);
        assert!(session.category().is_none());
        assert!(session.current_question().is_none());
    }
}
