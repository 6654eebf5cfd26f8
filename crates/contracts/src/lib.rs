//! Контракты данных, общие для всех потребителей каталога произведений.

pub mod domain;
