//! Визуальное состояние навбара при прокрутке.
//!
//! Флаг "прокручено" не хранится отдельно: он всегда выводится из
//! текущего смещения прокрутки, поэтому не может разойтись с ним.

/// Порог по умолчанию, px
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    threshold: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollState {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_scrolled(&self, offset: f64) -> bool {
        offset >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let state = ScrollState::default();
        assert!(!state.is_scrolled(0.0));
        assert!(!state.is_scrolled(199.9));
        assert!(state.is_scrolled(200.0));
        assert!(state.is_scrolled(1500.0));
    }

    #[test]
    fn test_custom_threshold() {
        let state = ScrollState::new(50.0);
        assert_eq!(state.threshold(), 50.0);
        assert!(state.is_scrolled(50.0));
        assert!(!state.is_scrolled(49.0));
    }
}
