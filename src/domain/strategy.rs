/// How the database password is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbPasswordStrategy {
    /// Generate a random password.
    Generate,
    /// Operator types the password twice.
    Manual,
    /// Reuse the password from the environment, generating one if unset.
    ReuseEnvironment,
}

/// Result of interpreting the operator's menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyChoice {
    pub strategy: DbPasswordStrategy,
    /// Answer was not a recognised option and fell back to generation.
    pub fallback: bool,
}

impl DbPasswordStrategy {
    pub const ALL: [DbPasswordStrategy; 3] = [
        DbPasswordStrategy::Generate,
        DbPasswordStrategy::Manual,
        DbPasswordStrategy::ReuseEnvironment,
    ];

    /// Menu code shown to the operator.
    pub fn code(&self) -> &'static str {
        match self {
            DbPasswordStrategy::Generate => "1",
            DbPasswordStrategy::Manual => "2",
            DbPasswordStrategy::ReuseEnvironment => "3",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|strategy| strategy.code() == code)
    }

    /// Interpret a menu answer, falling back to [`DbPasswordStrategy::Generate`].
    pub fn choose(answer: &str) -> StrategyChoice {
        match Self::from_code(answer) {
            Some(strategy) => StrategyChoice { strategy, fallback: false },
            None => StrategyChoice { strategy: DbPasswordStrategy::Generate, fallback: true },
        }
    }
}
