use crate::models::{alcohol_label, DayRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Exercise,
    Drugs,
    Notes,
    Alcohol(&'static str),
}

impl Indicator {
    pub fn token(&self) -> &'static str {
        match self {
            Indicator::Exercise => "💪",
            Indicator::Drugs => "💊",
            Indicator::Notes => "📝",
            Indicator::Alcohol(label) => *label,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Indicator::Alcohol(_) => "indicator alcohol-text",
            _ => "indicator",
        }
    }
}

/// Exercise, drugs and notes icons in that order, then the alcohol label.
/// A day without a record has no indicators.
pub fn map_indicators(record: Option<&DayRecord>) -> Vec<Indicator> {
    let Some(record) = record else {
        return Vec::new();
    };

    let mut indicators = Vec::with_capacity(4);
    if record.exercise {
        indicators.push(Indicator::Exercise);
    }
    if record.drugs {
        indicators.push(Indicator::Drugs);
    }
    if !record.notes.trim().is_empty() {
        indicators.push(Indicator::Notes);
    }
    indicators.push(Indicator::Alcohol(alcohol_label(record.alcohol)));
    indicators
}

pub fn is_zero_alcohol_day(record: Option<&DayRecord>) -> bool {
    record.is_some_and(|record| record.alcohol == 0)
}
