use serde::{Deserialize, Serialize};

/// Приоритет служебного оповещения на дашборде
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
}

impl AlertPriority {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertPriority::High => "alert-item alert-item--high",
            AlertPriority::Medium => "alert-item alert-item--medium",
            AlertPriority::Low => "alert-item alert-item--low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert!(AlertPriority::High > AlertPriority::Medium);
        assert!(AlertPriority::Medium > AlertPriority::Low);
    }
}
