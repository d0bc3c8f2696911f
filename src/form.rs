//! Form state and its reducer.
//!
//! Every submit recomputes from the current input; nothing is cached between
//! submissions.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::age::Age;
use crate::generation::{self, GenerationInfo};
use crate::validate::{self, DateInput, ValidationErrors};

/// Result of one successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub birth_date: NaiveDate,
    pub age: Age,
    pub generation: Option<GenerationInfo>,
}

impl Outcome {
    pub fn compute(birth_date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            birth_date,
            age: Age::between(birth_date, today),
            generation: generation::lookup(birth_date.year(), today.year()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub input: DateInput,
    pub errors: ValidationErrors,
    pub outcome: Option<Outcome>,
    pub popup_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SetDay(String),
    SetMonth(String),
    SetYear(String),
    Submit { today: NaiveDate },
    DismissPopup,
}

impl FormState {
    /// The generation to show in the popup, if it is open.
    pub fn popup(&self) -> Option<&GenerationInfo> {
        if !self.popup_open {
            return None;
        }
        self.outcome.as_ref().and_then(|o| o.generation.as_ref())
    }
}

pub fn reduce(state: &FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::SetDay(day) => FormState {
            input: DateInput {
                day,
                ..state.input.clone()
            },
            ..state.clone()
        },
        FormEvent::SetMonth(month) => FormState {
            input: DateInput {
                month,
                ..state.input.clone()
            },
            ..state.clone()
        },
        FormEvent::SetYear(year) => FormState {
            input: DateInput {
                year,
                ..state.input.clone()
            },
            ..state.clone()
        },
        FormEvent::Submit { today } => submit(&state.input, today),
        FormEvent::DismissPopup => FormState {
            popup_open: false,
            ..state.clone()
        },
    }
}

fn submit(input: &DateInput, today: NaiveDate) -> FormState {
    match validate::parse_birth_date(input, today) {
        Ok(birth_date) => {
            let outcome = Outcome::compute(birth_date, today);
            debug!(%birth_date, age = %outcome.age, "submission accepted");
            FormState {
                input: input.clone(),
                errors: ValidationErrors::default(),
                popup_open: outcome.generation.is_some(),
                outcome: Some(outcome),
            }
        }
        Err(errors) => {
            debug!(errors = errors.len(), "submission rejected");
            FormState {
                input: input.clone(),
                errors,
                outcome: None,
                popup_open: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{GROOVY, MILLENNIAL};
    use crate::validate::Field;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    fn filled(day: &str, month: &str, year: &str) -> FormState {
        [
            FormEvent::SetDay(day.into()),
            FormEvent::SetMonth(month.into()),
            FormEvent::SetYear(year.into()),
        ]
        .into_iter()
        .fold(FormState::default(), |state, event| reduce(&state, event))
    }

    #[test]
    fn setters_only_touch_their_field() {
        let state = filled("15", "5", "2000");
        assert_eq!(state.input, DateInput::new("15", "5", "2000"));
        assert!(state.outcome.is_none());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn submit_computes_age_and_generation_together() {
        let state = reduce(&filled("15", "5", "2000"), FormEvent::Submit { today: today() });
        let outcome = state.outcome.as_ref().unwrap();
        assert_eq!(
            outcome.age,
            Age {
                years: 23,
                months: 11,
                days: 29
            }
        );
        assert_eq!(outcome.generation, Some(GROOVY));
        assert!(state.popup_open);
        assert_eq!(state.popup(), Some(&GROOVY));
    }

    #[test]
    fn failed_resubmission_clears_previous_outcome() {
        let ok = reduce(&filled("15", "5", "1985"), FormEvent::Submit { today: today() });
        assert_eq!(ok.outcome.as_ref().unwrap().generation, Some(MILLENNIAL));

        let edited = reduce(&ok, FormEvent::SetDay("31".into()));
        let edited = reduce(&edited, FormEvent::SetMonth("4".into()));
        let failed = reduce(&edited, FormEvent::Submit { today: today() });

        assert!(failed.outcome.is_none());
        assert!(!failed.popup_open);
        assert!(failed.popup().is_none());
        assert!(failed.errors.has(Field::Day));
    }

    #[test]
    fn successful_resubmission_clears_errors() {
        let failed = reduce(&filled("", "5", "2000"), FormEvent::Submit { today: today() });
        assert!(!failed.errors.is_empty());

        let fixed = reduce(&failed, FormEvent::SetDay("1".into()));
        let ok = reduce(&fixed, FormEvent::Submit { today: today() });
        assert!(ok.errors.is_empty());
        assert!(ok.outcome.is_some());
    }

    #[test]
    fn dismissing_popup_keeps_age() {
        let state = reduce(&filled("15", "5", "2000"), FormEvent::Submit { today: today() });
        let dismissed = reduce(&state, FormEvent::DismissPopup);
        assert!(!dismissed.popup_open);
        assert!(dismissed.popup().is_none());
        assert_eq!(dismissed.outcome, state.outcome);
    }

    #[test]
    fn no_popup_without_generation() {
        let state = reduce(&filled("1", "1", "1910"), FormEvent::Submit { today: today() });
        let outcome = state.outcome.as_ref().unwrap();
        assert!(outcome.generation.is_none());
        assert!(!state.popup_open);
    }

    #[test]
    fn submit_is_idempotent() {
        let state = filled("29", "2", "1996");
        let once = reduce(&state, FormEvent::Submit { today: today() });
        let twice = reduce(&once, FormEvent::Submit { today: today() });
        assert_eq!(once, twice);
    }
}
