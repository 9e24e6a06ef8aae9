//! Brain teasers: five generated arithmetic problems. Finishing them wins.
use super::{Feedback, GameEvent, GameInput, GameKind, InputOutcome, MiniGame};
use crate::constants::{
    MATH_FEEDBACK_MS, MATH_LEFT_MAX, MATH_LEFT_MIN, MATH_PROBLEM_COUNT, MATH_RIGHT_MAX,
    MATH_RIGHT_MIN,
};
use crate::scheduler::Scheduler;
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Self; 3] = [Self::Add, Self::Subtract, Self::Multiply];

    #[must_use]
    pub const fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathProblem {
    pub left: i64,
    pub right: i64,
    pub operator: Operator,
    pub answer: i64,
}

impl MathProblem {
    #[must_use]
    pub const fn new(left: i64, operator: Operator, right: i64) -> Self {
        Self {
            left,
            right,
            operator,
            answer: operator.apply(left, right),
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let operator = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];
        let left = rng.gen_range(MATH_LEFT_MIN..=MATH_LEFT_MAX);
        let right = rng.gen_range(MATH_RIGHT_MIN..=MATH_RIGHT_MAX);
        Self::new(left, operator, right)
    }
}

impl fmt::Display for MathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator.symbol(), self.right)
    }
}

/// Parse a typed answer. Anything that is not a whole number is `None`.
#[must_use]
pub fn parse_answer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MathTask {
    Continue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MathGame {
    problems: Vec<MathProblem>,
    index: usize,
    score: u32,
    draft: String,
    feedback: Option<Feedback>,
    won: bool,
    scheduler: Scheduler<MathTask>,
}

impl MathGame {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let problems = (0..MATH_PROBLEM_COUNT)
            .map(|_| MathProblem::random(rng))
            .collect();
        Self::with_problems(problems)
    }

    #[must_use]
    pub fn with_problems(problems: Vec<MathProblem>) -> Self {
        Self {
            problems,
            index: 0,
            score: 0,
            draft: String::new(),
            feedback: None,
            won: false,
            scheduler: Scheduler::new(),
        }
    }

    #[must_use]
    pub fn problems(&self) -> &[MathProblem] {
        &self.problems
    }

    #[must_use]
    pub fn current(&self) -> Option<&MathProblem> {
        self.problems.get(self.index)
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.problems.len()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    fn submit(&mut self) -> InputOutcome {
        if self.won || self.feedback.is_some() {
            return InputOutcome::Ignored;
        }
        let Some(problem) = self.current() else {
            return InputOutcome::Ignored;
        };
        let verdict = if parse_answer(&self.draft) == Some(problem.answer) {
            self.score += 1;
            Feedback::Correct
        } else {
            Feedback::Wrong
        };
        self.feedback = Some(verdict);
        self.scheduler.schedule(MATH_FEEDBACK_MS, MathTask::Continue);
        InputOutcome::Answered(verdict)
    }

    fn run(&mut self, task: MathTask, events: &mut Vec<GameEvent>) {
        match task {
            MathTask::Continue => {
                self.feedback = None;
                if self.index + 1 < self.problems.len() {
                    self.index += 1;
                    self.draft.clear();
                    events.push(GameEvent::NextItem);
                } else {
                    self.won = true;
                    events.push(GameEvent::Won);
                }
            }
        }
    }
}

impl MiniGame for MathGame {
    fn kind(&self) -> GameKind {
        GameKind::Math
    }

    fn handle_input(&mut self, input: GameInput) -> InputOutcome {
        match input {
            GameInput::Edit(text) if !self.won && self.feedback.is_none() => {
                self.draft = text;
                InputOutcome::Accepted
            }
            GameInput::Submit => self.submit(),
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
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn answer(game: &mut MathGame, text: &str) -> InputOutcome {
        game.handle_input(GameInput::Edit(text.to_string()));
        let outcome = game.handle_input(GameInput::Submit);
        game.advance(MATH_FEEDBACK_MS);
        outcome
    }

    #[test]
    fn generated_problems_stay_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..50 {
            let game = MathGame::new(&mut rng);
            assert_eq!(game.total(), MATH_PROBLEM_COUNT);
            for problem in game.problems() {
                assert!((MATH_LEFT_MIN..=MATH_LEFT_MAX).contains(&problem.left));
                assert!((MATH_RIGHT_MIN..=MATH_RIGHT_MAX).contains(&problem.right));
                assert_eq!(problem.answer, problem.operator.apply(problem.left, problem.right));
            }
        }
    }

    #[test]
    fn subtraction_may_go_negative() {
        let problem = MathProblem::new(5, Operator::Subtract, 20);
        assert_eq!(problem.answer, -15);
        assert_eq!(problem.to_string(), "5 - 20");
    }

    #[test]
    fn mixed_answers_win_and_score_correct_ones() {
        let problems = vec![
            MathProblem::new(5, Operator::Add, 1),
            MathProblem::new(6, Operator::Subtract, 10),
            MathProblem::new(7, Operator::Multiply, 3),
            MathProblem::new(8, Operator::Add, 8),
            MathProblem::new(9, Operator::Multiply, 2),
        ];
        let mut game = MathGame::with_problems(problems);
        assert_eq!(answer(&mut game, "6"), InputOutcome::Answered(Feedback::Correct));
        assert_eq!(answer(&mut game, " -4 "), InputOutcome::Answered(Feedback::Correct));
        assert_eq!(answer(&mut game, "twenty"), InputOutcome::Answered(Feedback::Wrong));
        assert_eq!(answer(&mut game, ""), InputOutcome::Answered(Feedback::Wrong));
        assert!(!game.is_won());
        assert_eq!(answer(&mut game, "18"), InputOutcome::Answered(Feedback::Correct));
        assert!(game.is_won());
        assert_eq!(game.score(), 3);
    }

    #[test]
    fn draft_clears_when_moving_on() {
        let mut game = MathGame::with_problems(vec![
            MathProblem::new(5, Operator::Add, 5),
            MathProblem::new(5, Operator::Add, 6),
        ]);
        game.handle_input(GameInput::Edit("10".into()));
        game.handle_input(GameInput::Submit);
        assert_eq!(game.draft(), "10", "draft stays visible with feedback");
        assert_eq!(game.advance(MATH_FEEDBACK_MS), vec![GameEvent::NextItem]);
        assert_eq!(game.draft(), "");
    }

    #[test]
    fn input_is_locked_while_feedback_shows() {
        let mut game = MathGame::with_problems(vec![MathProblem::new(5, Operator::Add, 5)]);
        game.handle_input(GameInput::Edit("10".into()));
        game.handle_input(GameInput::Submit);
        assert_eq!(game.handle_input(GameInput::Submit), InputOutcome::Ignored);
        assert_eq!(
            game.handle_input(GameInput::Edit("3".into())),
            InputOutcome::Ignored
        );
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn parse_answer_rejects_non_numbers() {
        assert_eq!(parse_answer("42"), Some(42));
        assert_eq!(parse_answer("  -7\n"), Some(-7));
        assert_eq!(parse_answer("4.5"), None);
        assert_eq!(parse_answer("abc"), None);
    }
}
