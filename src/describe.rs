use strum_macros::{Display, EnumIter, EnumString};

pub const STRONG_THRESHOLD: f64 = 0.7;
pub const MODERATE_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    #[strum(serialize = "English", to_string = "en")]
    English,
    #[strum(serialize = "Russian", to_string = "ru")]
    Russian,
}

/// Strength bucket of a correlation coefficient, strongest positive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
#[strum(ascii_case_insensitive)]
pub enum CorrelationStrength {
    #[strum(serialize = "strong-positive", to_string = "StrongPositive")]
    StrongPositive,
    #[strum(serialize = "moderate-positive", to_string = "ModeratePositive")]
    ModeratePositive,
    #[strum(serialize = "weak-positive", to_string = "WeakPositive")]
    WeakPositive,
    #[strum(serialize = "weak-negative", to_string = "WeakNegative")]
    WeakNegative,
    #[strum(serialize = "moderate-negative", to_string = "ModerateNegative")]
    ModerateNegative,
    #[strum(serialize = "strong-negative", to_string = "StrongNegative")]
    StrongNegative,
}

impl CorrelationStrength {
    pub fn label(self, language: Language) -> &'static str {
        use CorrelationStrength::*;
        match language {
            Language::English => match self {
                StrongPositive => "Strong positive correlation",
                ModeratePositive => "Moderate positive correlation",
                WeakPositive => "Weak positive correlation",
                WeakNegative => "Weak negative correlation",
                ModerateNegative => "Moderate negative correlation",
                StrongNegative => "Strong negative correlation",
            },
            Language::Russian => match self {
                StrongPositive => "Сильная положительная корреляция",
                ModeratePositive => "Умеренная положительная корреляция",
                WeakPositive => "Слабая положительная корреляция",
                WeakNegative => "Слабая отрицательная корреляция",
                ModerateNegative => "Умеренная отрицательная корреляция",
                StrongNegative => "Сильная отрицательная корреляция",
            },
        }
    }
}

/// Buckets a coefficient with strict `>` comparisons, so a value sitting
/// exactly on a threshold lands in the weaker bucket. NaN falls through to
/// `StrongNegative`.
pub fn describe(value: f64) -> CorrelationStrength {
    if value > STRONG_THRESHOLD {
        CorrelationStrength::StrongPositive
    } else if value > MODERATE_THRESHOLD {
        CorrelationStrength::ModeratePositive
    } else if value > 0.0 {
        CorrelationStrength::WeakPositive
    } else if value > -MODERATE_THRESHOLD {
        CorrelationStrength::WeakNegative
    } else if value > -STRONG_THRESHOLD {
        CorrelationStrength::ModerateNegative
    } else {
        CorrelationStrength::StrongNegative
    }
}

pub fn describe_label(value: f64, language: Language) -> &'static str {
    describe(value).label(language)
}
