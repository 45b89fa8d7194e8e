use anyhow::{bail, Result};
use std::fmt;

/// A validated, trimmed guest name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuestName(String);

impl GuestName {
    pub fn parse(input: &str) -> Result<Self> {
        let name = input.trim();
        if name.is_empty() {
            bail!("name must not be blank");
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims() {
        assert_eq!(GuestName::parse("  Mai \n").unwrap().as_str(), "Mai");
    }

    #[test]
    fn test_rejects_blank() {
        assert!(GuestName::parse("").is_err());
        assert!(GuestName::parse(" \t ").is_err());
    }
}
