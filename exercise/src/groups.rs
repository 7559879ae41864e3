use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Individual,
    Units,
    Tens,
    Hundreds,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Individual => "individual",
            GroupKind::Units => "units",
            GroupKind::Tens => "tens",
            GroupKind::Hundreds => "hundreds",
        }
    }
}

/// One draggable cluster of tokens on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenGroup {
    pub kind: GroupKind,
    pub magnitude: u32,
    pub display_count: u32,
}

impl TokenGroup {
    fn individual() -> Self {
        Self {
            kind: GroupKind::Individual,
            magnitude: 1,
            display_count: 1,
        }
    }

    fn tens() -> Self {
        Self {
            kind: GroupKind::Tens,
            magnitude: 10,
            display_count: 1,
        }
    }

    fn hundreds() -> Self {
        Self {
            kind: GroupKind::Hundreds,
            magnitude: 100,
            display_count: 1,
        }
    }

    fn units(remainder: u32) -> Self {
        Self {
            kind: GroupKind::Units,
            magnitude: 1,
            display_count: remainder,
        }
    }

    /// Token value this group contributes to the pool.
    pub fn value(&self) -> u32 {
        self.magnitude * self.display_count
    }
}

/// Split a token pool into place-value display groups, largest
/// magnitude first, peeling only down to the magnitude the digit
/// count calls for. Single-digit boards get one group per token so
/// each one drags separately.
pub fn decompose(total_tokens: u32, digit_count: u32) -> Vec<TokenGroup> {
    let digit_count = digit_count.max(1);

    if digit_count == 1 {
        return (0..total_tokens).map(|_| TokenGroup::individual()).collect();
    }

    let mut groups = Vec::new();
    let mut remaining = total_tokens;

    if digit_count >= 3 {
        let hundreds = remaining / 100;
        for _ in 0..hundreds {
            groups.push(TokenGroup::hundreds());
        }
        remaining -= hundreds * 100;
    }

    let tens = remaining / 10;
    for _ in 0..tens {
        groups.push(TokenGroup::tens());
    }
    remaining -= tens * 10;

    if remaining > 0 {
        groups.push(TokenGroup::units(remaining));
    }

    groups
}

/// Rebuild the pool size from a decomposition.
pub fn reconstruct(groups: &[TokenGroup]) -> u32 {
    groups.iter().map(TokenGroup::value).sum()
}
