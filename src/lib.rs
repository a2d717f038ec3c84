//! Движок карточной игры «Дурак» (подкидной, на двоих).
//!
//! Чистая библиотека без сетевого протокола: presentation-слой
//! (UI с drag-and-drop, либо бот) вызывает операции движка и
//! отрисовывает результат. Слои:
//!
//! - `domain` — карты, колода, руки, стол (только данные);
//! - `engine` — правила: легальность атак/защит, розыгрыш стола,
//!   добор, конец партии; все ошибки — отказ принять нелегальный ход;
//! - `api` — команды/запросы/DTO для фронта;
//! - `infra` — RNG-реализации и генерация ID.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
