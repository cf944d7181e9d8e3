use serde::Serialize;

/// Severity of a user-facing message; the client colours it green/orange/red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn color(&self) -> &'static str {
        match self {
            Level::Success => "green",
            Level::Warning => "orange",
            Level::Error => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub text: String,
    pub level: Level,
    pub color: &'static str,
}

impl Feedback {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level,
            color: level.color(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Level::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Level::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Level::Error, text)
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}
