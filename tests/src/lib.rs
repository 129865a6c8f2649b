//! Cross-crate tests: operator input in, sweep result out.

#[cfg(test)]
mod sweep;
