/// Форматирование дат для таблиц и карточек
use chrono::NaiveDate;

/// Дата бронирования в таблице: "12/15/2024"
pub fn format_booking_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Разбор ISO-даты из мок-данных; некорректная строка логируется
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("invalid date {:?}: {}", value, e);
            None
        }
    }
}

/// Сегодняшняя дата по локальным часам браузера
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_booking_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_booking_date(date), "01/05/2024");
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2024-12-15"),
            NaiveDate::from_ymd_opt(2024, 12, 15)
        );
        assert_eq!(parse_iso_date("15.12.2024"), None);
    }
}
