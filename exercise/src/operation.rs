use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Sum,
    Difference,
}

impl Operation {
    pub fn all() -> &'static [Operation] {
        &[Operation::Sum, Operation::Difference]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Sum => "sum",
            Operation::Difference => "difference",
        }
    }

    /// Display symbol shown between the two bins in the equation.
    pub fn symbol(&self) -> char {
        match self {
            Operation::Sum => '+',
            Operation::Difference => '-',
        }
    }

    /// Combine the two bin counts under this operation. Sums saturate
    /// rather than overflow; real pools never get near the limit.
    pub fn apply(&self, bin_a: u32, bin_b: u32) -> u32 {
        match self {
            Operation::Sum => bin_a.saturating_add(bin_b),
            Operation::Difference => bin_a.abs_diff(bin_b),
        }
    }
}

impl Default for Operation {
    fn default() -> Self {
        Operation::Sum
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(Operation::Sum),
            "difference" => Ok(Operation::Difference),
            other => Err(format!("unknown operation: {}", other)),
        }
    }
}
