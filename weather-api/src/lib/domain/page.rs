use serde::Deserialize;

/// Offset pagination shared by list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "Page::default_limit")]
    pub limit: i64,
}

impl Page {
    pub const MAX_LIMIT: i64 = 100;

    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    fn default_limit() -> i64 {
        Self::MAX_LIMIT
    }

    /// Clamp to `0 <= skip` and `0 <= limit <= MAX_LIMIT`.
    pub fn normalized(self) -> Self {
        Self {
            skip: self.skip.max(0),
            limit: self.limit.clamp(0, Self::MAX_LIMIT),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized() {
        assert_eq!(Page::new(-5, 10).normalized(), Page::new(0, 10));
        assert_eq!(Page::new(3, 1000).normalized(), Page::new(3, 100));
        assert_eq!(Page::new(0, -1).normalized(), Page::new(0, 0));
        assert_eq!(Page::default(), Page::new(0, 100));
    }
}
