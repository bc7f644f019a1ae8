/// Compute effective limit with precedence: command arg -> configured
/// default. Never below one.
#[must_use]
pub fn effective_limit(local: Option<usize>, configured: usize) -> usize {
    local.unwrap_or(configured).max(1)
}
