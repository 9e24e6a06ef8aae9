//! Quick quiz: five fixed questions. Finishing them wins, whatever the score.
use super::{Feedback, GameEvent, GameInput, GameKind, InputOutcome, MiniGame};
use crate::constants::QUIZ_FEEDBACK_MS;
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
}

pub const QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        question: "What's something that always makes you smile without fail?",
        options: [
            "A good joke",
            "Being around friends",
            "Music",
            "All of the above",
        ],
        correct: 3,
    },
    QuizQuestion {
        question: "What matters more in life?",
        options: [
            "Looking successful",
            "Being happy",
            "Having lots of stuff",
            "Being famous",
        ],
        correct: 1,
    },
    QuizQuestion {
        question: "A good friend is someone who...",
        options: [
            "Has money",
            "Shows up when it matters",
            "Is popular",
            "Agrees with everything",
        ],
        correct: 1,
    },
    QuizQuestion {
        question: "The best memories come from...",
        options: [
            "Taking photos",
            "Being present",
            "Planning everything",
            "Posting online",
        ],
        correct: 1,
    },
    QuizQuestion {
        question: "What makes life worth living?",
        options: ["Achievement", "Connection", "Adventure", "All of it"],
        correct: 3,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizTask {
    Continue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizGame {
    questions: &'static [QuizQuestion],
    index: usize,
    score: u32,
    feedback: Option<Feedback>,
    won: bool,
    scheduler: Scheduler<QuizTask>,
}

impl Default for QuizGame {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizGame {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            questions: &QUIZ_QUESTIONS,
            index: 0,
            score: 0,
            feedback: None,
            won: false,
            scheduler: Scheduler::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    /// Zero-based index of the question on screen.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    fn answer(&mut self, option: usize) -> InputOutcome {
        if self.won || self.feedback.is_some() {
            return InputOutcome::Ignored;
        }
        let Some(question) = self.current() else {
            return InputOutcome::Ignored;
        };
        if option >= question.options.len() {
            return InputOutcome::Ignored;
        }
        let verdict = if option == question.correct {
            self.score += 1;
            Feedback::Correct
        } else {
            Feedback::Wrong
        };
        self.feedback = Some(verdict);
        self.scheduler.schedule(QUIZ_FEEDBACK_MS, QuizTask::Continue);
        InputOutcome::Answered(verdict)
    }

    fn run(&mut self, task: QuizTask, events: &mut Vec<GameEvent>) {
        match task {
            QuizTask::Continue => {
                self.feedback = None;
                if self.index + 1 < self.questions.len() {
                    self.index += 1;
                    events.push(GameEvent::NextItem);
                } else {
                    self.won = true;
                    events.push(GameEvent::Won);
                }
            }
        }
    }
}

impl MiniGame for QuizGame {
    fn kind(&self) -> GameKind {
        GameKind::Quiz
    }

    fn handle_input(&mut self, input: GameInput) -> InputOutcome {
        match input {
            GameInput::Choice(option) => self.answer(option),
            _ => InputOutcome::Ignored,
        }
    }

    fn advance(&mut self, elapsed_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let deadline = self.scheduler.deadline(elapsed_ms);
        while !self.won {
            let Some(task) = self.scheduler.poll_until(deadline) else {
                break;
            };
            self.run(task, &mut events);
        }
        events
    }

    fn clock_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    fn is_won(&self) -> bool {
        self.won
    }

    fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    fn teardown(&mut self) {
        self.scheduler.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut QuizGame, picks: &[usize]) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for pick in picks {
            game.handle_input(GameInput::Choice(*pick));
            events.extend(game.advance(QUIZ_FEEDBACK_MS));
        }
        events
    }

    #[test]
    fn all_correct_scores_five_and_wins() {
        let mut game = QuizGame::new();
        let picks: Vec<usize> = QUIZ_QUESTIONS.iter().map(|q| q.correct).collect();
        let events = play(&mut game, &picks);
        assert_eq!(game.score(), 5);
        assert!(game.is_won());
        assert_eq!(events.last(), Some(&GameEvent::Won));
    }

    #[test]
    fn clock_stops_where_the_game_was_won() {
        let mut game = QuizGame::new();
        let (last, rest) = QUIZ_QUESTIONS.split_last().unwrap();
        let picks: Vec<usize> = rest.iter().map(|q| q.correct).collect();
        play(&mut game, &picks);
        game.handle_input(GameInput::Choice(last.correct));
        assert_eq!(game.advance(10_000), vec![GameEvent::Won]);
        assert_eq!(game.clock_ms(), QUIZ_FEEDBACK_MS * 5);
    }

    #[test]
    fn all_wrong_still_wins_with_zero_score() {
        let mut game = QuizGame::new();
        let picks: Vec<usize> = QUIZ_QUESTIONS.iter().map(|q| (q.correct + 1) % 4).collect();
        play(&mut game, &picks);
        assert_eq!(game.score(), 0);
        assert!(game.is_won());
    }

    #[test]
    fn feedback_shows_until_delay_elapses() {
        let mut game = QuizGame::new();
        let outcome = game.handle_input(GameInput::Choice(0));
        assert_eq!(outcome, InputOutcome::Answered(Feedback::Wrong));
        assert_eq!(game.feedback(), Some(Feedback::Wrong));
        assert!(game.advance(QUIZ_FEEDBACK_MS - 1).is_empty());
        assert_eq!(game.index(), 0);
        assert_eq!(game.advance(1), vec![GameEvent::NextItem]);
        assert_eq!(game.feedback(), None);
        assert_eq!(game.index(), 1);
    }

    #[test]
    fn answers_during_feedback_are_ignored() {
        let mut game = QuizGame::new();
        game.handle_input(GameInput::Choice(3));
        assert_eq!(
            game.handle_input(GameInput::Choice(3)),
            InputOutcome::Ignored
        );
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut game = QuizGame::new();
        assert_eq!(game.handle_input(GameInput::Choice(4)), InputOutcome::Ignored);
        assert_eq!(game.pending_tasks(), 0);
    }
}
