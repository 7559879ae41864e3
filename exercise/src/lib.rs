mod operation;
mod generator;
mod groups;
mod bins;
mod validate;
mod session;

pub use operation::Operation;
pub use generator::{Exercise, ExerciseGenerator, MAX_DIGITS};
pub use groups::{decompose, reconstruct, GroupKind, TokenGroup};
pub use bins::{Bin, BinState};
pub use validate::validate;
pub use session::{BinOutcome, SessionEngine, SessionError, SessionSnapshot, SessionState};
