use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeCategory {
    Mobile,
    Tablet,
    Desktop,
}

impl SizeCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
        }
    }
}

impl ViewportSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn category(&self) -> SizeCategory {
        if self.width < 768 {
            SizeCategory::Mobile
        } else if self.width < 1024 {
            SizeCategory::Tablet
        } else {
            SizeCategory::Desktop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_switch_at_breakpoints() {
        assert_eq!(ViewportSize::new(767, 500).category(), SizeCategory::Mobile);
        assert_eq!(ViewportSize::new(768, 500).category(), SizeCategory::Tablet);
        assert_eq!(ViewportSize::new(1023, 500).category(), SizeCategory::Tablet);
        assert_eq!(ViewportSize::new(1024, 500).category(), SizeCategory::Desktop);
    }
}
