use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::bins::{Bin, BinState};
use crate::generator::{Exercise, ExerciseGenerator};
use crate::groups::{decompose, TokenGroup};
use crate::operation::Operation;
use crate::validate::validate;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot advance: current exercise not solved")]
    NotSolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    AwaitingInput,
    Solved,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::AwaitingInput
    }
}

/// What a bin change did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinOutcome {
    /// Not correct yet; keep trying.
    Pending,
    /// First correct answer for this exercise. The host announces
    /// success on this outcome and on no other.
    Solved,
    /// The answer was correct and then broken again, usually by
    /// pulling tokens back out of a bin.
    Reopened,
}

/// Serializable view of the session for hosts and tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub exercise: Exercise,
    pub bins: BinState,
    pub reset_token: u64,
    pub correct: bool,
}

/// One player's exercise loop. Owns the current exercise and bin
/// state exclusively; every transition happens synchronously inside
/// a host event handler.
#[derive(Debug)]
pub struct SessionEngine {
    generator: ExerciseGenerator,
    digit_count: u32,
    operation: Operation,
    exercise: Exercise,
    bins: BinState,
    state: SessionState,
    reset_token: u64,
    announced: bool,
}

impl SessionEngine {
    pub fn new(seed: u64, digit_count: u32, operation: Operation) -> Self {
        Self::with_generator(ExerciseGenerator::new(seed), digit_count, operation)
    }

    pub fn from_entropy(digit_count: u32, operation: Operation) -> Self {
        Self::with_generator(ExerciseGenerator::from_entropy(), digit_count, operation)
    }

    fn with_generator(
        mut generator: ExerciseGenerator,
        digit_count: u32,
        operation: Operation,
    ) -> Self {
        let exercise = generator.generate(digit_count, operation);
        Self {
            generator,
            digit_count,
            operation,
            exercise,
            bins: BinState::new(),
            state: SessionState::AwaitingInput,
            reset_token: 0,
            announced: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    pub fn bins(&self) -> &BinState {
        &self.bins
    }

    /// Monotonic counter bumped on every fresh exercise so display
    /// components can observe bin resets.
    pub fn reset_token(&self) -> u64 {
        self.reset_token
    }

    /// Place-value groups for rendering the current token pool.
    pub fn groups(&self) -> Vec<TokenGroup> {
        decompose(self.exercise.total_tokens, self.exercise.digit_count)
    }

    pub fn is_correct(&self) -> bool {
        validate(
            self.bins.bin_a,
            self.bins.bin_b,
            self.exercise.target_number,
            self.exercise.operation,
            self.exercise.token_budget(),
        )
    }

    /// Record a drop-target occupancy change and revalidate.
    pub fn on_bin_change(&mut self, bin: Bin, count: u32) -> BinOutcome {
        self.bins.set(bin, count);
        let correct = self.is_correct();

        match (self.state, correct) {
            (SessionState::AwaitingInput, true) => {
                self.state = SessionState::Solved;
                debug!(
                    target_number = self.exercise.target_number,
                    bin_a = self.bins.bin_a,
                    bin_b = self.bins.bin_b,
                    "exercise solved"
                );
                if self.announced {
                    // Re-solved after reopening; success was already
                    // announced for this exercise.
                    BinOutcome::Pending
                } else {
                    self.announced = true;
                    BinOutcome::Solved
                }
            }
            (SessionState::Solved, false) => {
                self.state = SessionState::AwaitingInput;
                debug!("solved exercise reopened");
                BinOutcome::Reopened
            }
            _ => BinOutcome::Pending,
        }
    }

    /// Advance to a fresh exercise. Only legal once solved.
    pub fn on_next(&mut self) -> Result<&Exercise, SessionError> {
        if self.state != SessionState::Solved {
            return Err(SessionError::NotSolved);
        }
        self.new_exercise();
        Ok(&self.exercise)
    }

    /// Changing the digit count restarts the session with a fresh
    /// exercise, solved or not.
    pub fn set_digit_count(&mut self, digit_count: u32) -> &Exercise {
        self.digit_count = digit_count;
        self.new_exercise();
        &self.exercise
    }

    /// Changing the operation mode likewise restarts unconditionally.
    pub fn set_operation(&mut self, operation: Operation) -> &Exercise {
        self.operation = operation;
        self.new_exercise();
        &self.exercise
    }

    fn new_exercise(&mut self) {
        self.exercise = self.generator.generate(self.digit_count, self.operation);
        self.bins.clear();
        self.state = SessionState::AwaitingInput;
        self.announced = false;
        self.reset_token += 1;
        debug!(
            target_number = self.exercise.target_number,
            total_tokens = self.exercise.total_tokens,
            operation = self.exercise.operation.as_str(),
            reset_token = self.reset_token,
            "new exercise"
        );
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            exercise: self.exercise.clone(),
            bins: self.bins,
            reset_token: self.reset_token,
            correct: self.is_correct(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a session to Solved regardless of what was generated.
    /// Putting the whole target in bin A works for both operations.
    fn solve(engine: &mut SessionEngine) {
        let target = engine.exercise().target_number;
        engine.on_bin_change(Bin::A, target);
    }

    #[test]
    fn test_initial_state() {
        let engine = SessionEngine::new(1, 1, Operation::Sum);
        assert_eq!(engine.state(), SessionState::AwaitingInput);
        assert!(engine.bins().is_empty());
        assert_eq!(engine.reset_token(), 0);
        assert!((1..=9).contains(&engine.exercise().target_number));
    }

    #[test]
    fn test_solve_emits_once() {
        let mut engine = SessionEngine::new(2, 1, Operation::Sum);
        let target = engine.exercise().target_number;

        assert_eq!(engine.on_bin_change(Bin::A, target), BinOutcome::Solved);
        assert_eq!(engine.state(), SessionState::Solved);

        // Break the answer, then restore it: no second announcement.
        assert_eq!(engine.on_bin_change(Bin::A, target + 1), BinOutcome::Reopened);
        assert_eq!(engine.state(), SessionState::AwaitingInput);
        assert_eq!(engine.on_bin_change(Bin::A, target), BinOutcome::Pending);
        assert_eq!(engine.state(), SessionState::Solved);
    }

    #[test]
    fn test_oversized_bin_count_stays_pending() {
        // Hosts report arbitrary occupancy counts; a desynchronized
        // display must read as "not yet correct", never panic.
        let mut engine = SessionEngine::new(10, 1, Operation::Sum);
        assert_eq!(engine.on_bin_change(Bin::A, u32::MAX), BinOutcome::Pending);
        assert_eq!(engine.on_bin_change(Bin::B, u32::MAX), BinOutcome::Pending);
        assert_eq!(engine.state(), SessionState::AwaitingInput);
    }

    #[test]
    fn test_pending_while_wrong() {
        let mut engine = SessionEngine::new(3, 1, Operation::Sum);
        let target = engine.exercise().target_number;
        assert_eq!(engine.on_bin_change(Bin::A, target + 1), BinOutcome::Pending);
        assert_eq!(engine.state(), SessionState::AwaitingInput);
    }

    #[test]
    fn test_next_requires_solved() {
        let mut engine = SessionEngine::new(4, 1, Operation::Sum);
        assert!(matches!(engine.on_next(), Err(SessionError::NotSolved)));

        solve(&mut engine);
        assert_eq!(engine.state(), SessionState::Solved);

        let reset_before = engine.reset_token();
        engine.on_next().unwrap();
        assert_eq!(engine.state(), SessionState::AwaitingInput);
        assert!(engine.bins().is_empty());
        assert_eq!(engine.reset_token(), reset_before + 1);
        assert!((1..=9).contains(&engine.exercise().target_number));
    }

    #[test]
    fn test_difference_solving() {
        let mut engine = SessionEngine::new(5, 1, Operation::Difference);
        let target = engine.exercise().target_number;

        // |A - B| with B = 2 stays inside the pool: target + 5
        // minimum leaves room for the extra tokens.
        assert_eq!(engine.on_bin_change(Bin::A, target + 2), BinOutcome::Pending);
        assert_eq!(engine.on_bin_change(Bin::B, 2), BinOutcome::Solved);
    }

    #[test]
    fn test_parameter_change_resets_even_when_solved() {
        let mut engine = SessionEngine::new(6, 1, Operation::Sum);
        solve(&mut engine);
        assert_eq!(engine.state(), SessionState::Solved);

        let reset_before = engine.reset_token();
        engine.set_digit_count(2);
        assert_eq!(engine.state(), SessionState::AwaitingInput);
        assert!(engine.bins().is_empty());
        assert_eq!(engine.reset_token(), reset_before + 1);
        assert!((10..=99).contains(&engine.exercise().target_number));

        engine.set_operation(Operation::Difference);
        assert_eq!(engine.exercise().operation, Operation::Difference);
        assert_eq!(engine.state(), SessionState::AwaitingInput);
    }

    #[test]
    fn test_groups_cover_pool() {
        let engine = SessionEngine::new(7, 3, Operation::Sum);
        let total: u32 = engine.groups().iter().map(|g| g.value()).sum();
        assert_eq!(total, engine.exercise().total_tokens);
    }

    #[test]
    fn test_session_runs_indefinitely() {
        let mut engine = SessionEngine::new(8, 2, Operation::Sum);
        for round in 0..20 {
            assert_eq!(engine.reset_token(), round);
            solve(&mut engine);
            assert_eq!(engine.state(), SessionState::Solved);
            engine.on_next().unwrap();
        }
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut engine = SessionEngine::new(9, 2, Operation::Sum);
        engine.on_bin_change(Bin::A, 3);

        let json = engine.to_json();
        let snap: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap.state, SessionState::AwaitingInput);
        assert_eq!(snap.bins.bin_a, 3);
        assert_eq!(&snap.exercise, engine.exercise());
    }
}
