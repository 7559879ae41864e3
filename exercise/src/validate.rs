use crate::operation::Operation;

/// Judge the current bin split against the target.
///
/// The token budget clause absorbs a display desynchronization where
/// the bins claim more tokens than were ever issued; that case reads
/// as "not yet correct" rather than an error. Two empty bins never
/// count as an answer.
pub fn validate(
    bin_a: u32,
    bin_b: u32,
    target: u32,
    operation: Operation,
    token_budget: u32,
) -> bool {
    if bin_a == 0 && bin_b == 0 {
        return false;
    }
    // Widened so oversized counts from a desynchronized host reject
    // instead of overflowing.
    if u64::from(bin_a) + u64::from(bin_b) > u64::from(token_budget) {
        return false;
    }
    operation.apply(bin_a, bin_b) == target
}
