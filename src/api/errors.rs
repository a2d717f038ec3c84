use serde::{Deserialize, Serialize};

use crate::domain::GameId;
use crate::engine::{EngineError, ManagerError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ApiError {
    /// Партия не найдена.
    GameNotFound(GameId),

    /// Нелегальный ход: движок отверг операцию.
    /// Фронт показывает это как «invalid move» и даёт повторить.
    EngineError(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::GameNotFound(id) => ApiError::GameNotFound(id),
            ManagerError::Engine(e) => e.into(),
        }
    }
}
