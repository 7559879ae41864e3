use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bin {
    A,
    B,
}

impl Bin {
    pub fn all() -> &'static [Bin] {
        &[Bin::A, Bin::B]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Bin::A => "a",
            Bin::B => "b",
        }
    }
}

/// How many tokens the player has dropped into each bin. Pure state
/// holder; correctness is judged elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinState {
    pub bin_a: u32,
    pub bin_b: u32,
}

impl BinState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, bin: Bin, count: u32) {
        match bin {
            Bin::A => self.bin_a = count,
            Bin::B => self.bin_b = count,
        }
    }

    pub fn get(&self, bin: Bin) -> u32 {
        match bin {
            Bin::A => self.bin_a,
            Bin::B => self.bin_b,
        }
    }

    pub fn total(&self) -> u32 {
        self.bin_a.saturating_add(self.bin_b)
    }

    pub fn is_empty(&self) -> bool {
        self.bin_a == 0 && self.bin_b == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
