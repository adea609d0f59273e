//! Состояние формы поиска туров: направление, длительность, дата заезда, гости.

use anyhow::{bail, Context};
use chrono::NaiveDate;

use super::request::TripSearchRequest;
use crate::domain::a001_destination::DestinationOption;
use crate::shared::site_config::{DurationLimits, PersonsLimits};

/// Формат ввода даты (`<input type="date">`)
pub const CHECKIN_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct TripSearchForm {
    destination: String,
    duration_from: u32,
    duration_to: u32,
    checkin: Option<NaiveDate>,
    persons: u32,
    persons_limits: PersonsLimits,
    duration_limits: DurationLimits,
}

impl Default for TripSearchForm {
    fn default() -> Self {
        Self::new(PersonsLimits::default(), DurationLimits::default())
    }
}

impl TripSearchForm {
    pub fn new(persons_limits: PersonsLimits, duration_limits: DurationLimits) -> Self {
        Self {
            destination: String::new(),
            duration_from: duration_limits.default_from,
            duration_to: duration_limits.default_to,
            checkin: None,
            persons: persons_limits.default,
            persons_limits,
            duration_limits,
        }
    }

    // ------------------------------------------------------------------
    // Направление
    // ------------------------------------------------------------------

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn set_destination(&mut self, value: impl Into<String>) {
        self.destination = value.into();
    }

    /// Подпись выбранного направления; `None`, если ничего не выбрано
    pub fn destination_label<'a>(&self, options: &'a [DestinationOption]) -> Option<&'a str> {
        DestinationOption::label_for(options, &self.destination)
    }

    // ------------------------------------------------------------------
    // Длительность
    // ------------------------------------------------------------------

    pub fn duration(&self) -> (u32, u32) {
        (self.duration_from, self.duration_to)
    }

    pub fn duration_limits(&self) -> DurationLimits {
        self.duration_limits
    }

    /// Нижняя граница не может превысить верхнюю
    pub fn set_duration_from(&mut self, days: u32) {
        self.duration_from = days.clamp(self.duration_limits.min, self.duration_to);
    }

    /// Верхняя граница не может опуститься ниже нижней
    pub fn set_duration_to(&mut self, days: u32) {
        self.duration_to = days.clamp(self.duration_from, self.duration_limits.max);
    }

    pub fn duration_label(&self) -> String {
        format!("{}-{} days", self.duration_from, self.duration_to)
    }

    // ------------------------------------------------------------------
    // Дата заезда
    // ------------------------------------------------------------------

    pub fn checkin(&self) -> Option<NaiveDate> {
        self.checkin
    }

    /// Устанавливает дату заезда; прошедшие даты отклоняются
    pub fn set_checkin(&mut self, date: NaiveDate, today: NaiveDate) -> anyhow::Result<()> {
        if date < today {
            bail!("check-in date {} is in the past (today is {})", date, today);
        }
        self.checkin = Some(date);
        Ok(())
    }

    /// Значение поля ввода: пустая строка сбрасывает дату
    pub fn set_checkin_input(&mut self, input: &str, today: NaiveDate) -> anyhow::Result<()> {
        if input.is_empty() {
            self.checkin = None;
            return Ok(());
        }
        let date = parse_checkin(input, today)?;
        self.checkin = Some(date);
        Ok(())
    }

    /// Кнопка выбора даты: "December 15, 2024" или "Pick a date"
    pub fn checkin_button_label(&self) -> String {
        match self.checkin {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => "Pick a date".to_string(),
        }
    }

    /// Чип сводки: "Dec 15, 2024"
    pub fn checkin_summary_label(&self) -> Option<String> {
        self.checkin
            .map(|date| date.format("%b %d, %Y").to_string())
    }

    // ------------------------------------------------------------------
    // Гости
    // ------------------------------------------------------------------

    pub fn persons(&self) -> u32 {
        self.persons
    }

    pub fn can_decrement_persons(&self) -> bool {
        self.persons > self.persons_limits.min
    }

    pub fn can_increment_persons(&self) -> bool {
        self.persons < self.persons_limits.max
    }

    pub fn decrement_persons(&mut self) {
        if self.can_decrement_persons() {
            self.persons -= 1;
        }
    }

    pub fn increment_persons(&mut self) {
        if self.can_increment_persons() {
            self.persons += 1;
        }
    }

    pub fn set_persons(&mut self, persons: u32) {
        self.persons = persons.clamp(self.persons_limits.min, self.persons_limits.max);
    }

    /// Подпись счётчика: "1 Person", "2 Persons"
    pub fn persons_label(&self) -> String {
        if self.persons == 1 {
            "1 Person".to_string()
        } else {
            format!("{} Persons", self.persons)
        }
    }

    /// Чип сводки: "1 person", "2 people"
    pub fn persons_summary_label(&self) -> String {
        if self.persons == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.persons)
        }
    }

    pub fn to_request(&self) -> TripSearchRequest {
        TripSearchRequest {
            destination: self.destination.clone(),
            duration_from: self.duration_from,
            duration_to: self.duration_to,
            checkin: self.checkin,
            persons: self.persons,
        }
    }
}

/// Разбор даты заезда из поля ввода относительно "сегодня"
pub fn parse_checkin(input: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input, CHECKIN_INPUT_FORMAT)
        .with_context(|| format!("invalid check-in date: {:?}", input))?;
    if date < today {
        bail!("check-in date {} is in the past (today is {})", date, today);
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults() {
        let form = TripSearchForm::default();
        assert_eq!(form.persons(), 2);
        assert_eq!(form.duration(), (3, 7));
        assert_eq!(form.duration_label(), "3-7 days");
        assert_eq!(form.checkin(), None);
        assert_eq!(form.checkin_button_label(), "Pick a date");
        assert_eq!(form.destination(), "");
    }

    #[test]
    fn test_persons_are_clamped() {
        let mut form = TripSearchForm::default();
        form.decrement_persons();
        assert_eq!(form.persons(), 1);
        assert!(!form.can_decrement_persons());
        form.decrement_persons();
        assert_eq!(form.persons(), 1);
        assert_eq!(form.persons_label(), "1 Person");
        assert_eq!(form.persons_summary_label(), "1 person");

        form.set_persons(50);
        assert_eq!(form.persons(), 20);
        assert!(!form.can_increment_persons());
        form.increment_persons();
        assert_eq!(form.persons(), 20);
        assert_eq!(form.persons_label(), "20 Persons");
        assert_eq!(form.persons_summary_label(), "20 people");

        form.set_persons(0);
        assert_eq!(form.persons(), 1);
    }

    #[test]
    fn test_duration_bounds_stay_ordered() {
        let mut form = TripSearchForm::default();
        form.set_duration_from(8);
        assert_eq!(form.duration(), (7, 7));
        form.set_duration_to(2);
        assert_eq!(form.duration(), (7, 7));
        form.set_duration_from(0);
        assert_eq!(form.duration(), (1, 7));
        form.set_duration_to(12);
        assert_eq!(form.duration(), (1, 8));
        assert_eq!(form.duration_label(), "1-8 days");
    }

    #[test]
    fn test_checkin_rejects_past_dates() {
        let today = date(2024, 12, 1);
        let mut form = TripSearchForm::default();

        assert!(form.set_checkin(date(2024, 11, 30), today).is_err());
        assert_eq!(form.checkin(), None);

        form.set_checkin(today, today).unwrap();
        assert_eq!(form.checkin(), Some(today));

        form.set_checkin_input("2024-12-15", today).unwrap();
        assert_eq!(form.checkin_button_label(), "December 15, 2024");
        assert_eq!(
            form.checkin_summary_label().as_deref(),
            Some("Dec 15, 2024")
        );

        // ошибка не сбрасывает ранее выбранную дату
        assert!(form.set_checkin_input("2024-01-01", today).is_err());
        assert_eq!(form.checkin(), Some(date(2024, 12, 15)));

        form.set_checkin_input("", today).unwrap();
        assert_eq!(form.checkin(), None);
    }

    #[test]
    fn test_parse_checkin_errors() {
        let today = date(2024, 12, 1);
        let err = parse_checkin("15/12/2024", today).unwrap_err();
        assert!(err.to_string().contains("invalid check-in date"));
        let err = parse_checkin("2024-11-01", today).unwrap_err();
        assert!(err.to_string().contains("in the past"));
        assert_eq!(parse_checkin("2025-01-03", today).unwrap(), date(2025, 1, 3));
    }

    #[test]
    fn test_destination_label_and_request() {
        let options = vec![
            DestinationOption::new("mogadishu", "Mogadishu"),
            DestinationOption::new("puntland", "Puntland"),
        ];
        let mut form = TripSearchForm::default();
        assert_eq!(form.destination_label(&options), None);
        form.set_destination("puntland");
        assert_eq!(form.destination_label(&options), Some("Puntland"));

        let request = form.to_request();
        assert_eq!(request.destination, "puntland");
        assert_eq!(request.persons, 2);
        let json = request.to_json().unwrap();
        assert!(json.contains("\"destination\":\"puntland\""));
        assert!(json.contains("\"checkin\":null"));
    }
}
