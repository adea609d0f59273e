use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Запрос поиска туров из блока на главной.
///
/// Сетевого вызова нет: запрос только пишется в лог как JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSearchRequest {
    /// Код направления (`DestinationOption::value`), пусто если не выбрано
    pub destination: String,

    pub duration_from: u32,
    pub duration_to: u32,

    #[serde(default)]
    pub checkin: Option<NaiveDate>,

    pub persons: u32,
}

impl TripSearchRequest {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
