/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> u32 {
    global.unwrap_or(fallback)
}

/// Keep at most `limit` items.
pub fn apply_limit<T>(mut items: Vec<T>, limit: u32) -> anyhow::Result<Vec<T>> {
    items.truncate(usize::try_from(limit)?);
    Ok(items)
}
