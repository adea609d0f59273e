//! Общие типы и чистая логика сайта: записи, фильтр поиска, правила
//! навигации, конфигурация. Без зависимостей от браузера.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
