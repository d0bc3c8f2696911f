use crate::form::FormState;
use crate::validate::Field;

pub const UNSET: &str = "--";

/// The three age display values, `--` when nothing has been computed.
pub fn age_values(state: &FormState) -> [(String, &'static str); 3] {
    match &state.outcome {
        Some(outcome) => {
            let age = outcome.age;
            [
                (age.years.to_string(), unit(age.years, "year", "years")),
                (age.months.to_string(), unit(age.months, "month", "months")),
                (age.days.to_string(), unit(age.days, "day", "days")),
            ]
        }
        None => [
            (UNSET.to_string(), "years"),
            (UNSET.to_string(), "months"),
            (UNSET.to_string(), "days"),
        ],
    }
}

fn unit(n: i32, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

/// Visible error messages, general first, placeholders skipped.
pub fn error_lines(state: &FormState) -> Vec<String> {
    [Field::General, Field::Day, Field::Month, Field::Year]
        .into_iter()
        .filter_map(|field| {
            let msg = state.errors.message(field)?;
            Some(match field {
                Field::General => msg.to_string(),
                other => format!("{}: {msg}", other.as_str().to_uppercase()),
            })
        })
        .collect()
}

/// Plain-text rendering of the form result for a terminal.
pub fn render_text(state: &FormState) -> String {
    let mut out = String::new();

    let errors = error_lines(state);
    for line in &errors {
        out.push_str(line);
        out.push('\n');
    }
    if !errors.is_empty() {
        out.push('\n');
    }

    for (value, label) in age_values(state) {
        out.push_str(&format!("{value} {label}\n"));
    }

    if let Some(info) = state.popup() {
        out.push_str(&format!(
            "\n{emoji}  You are {name}!\n   {description}\n",
            emoji = info.emoji,
            name = info.name,
            description = info.description
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormEvent, reduce};
    use crate::validate::{DateInput, ValidationErrors};
    use chrono::NaiveDate;

    fn submit(day: &str, month: &str, year: &str) -> FormState {
        let state = FormState {
            input: DateInput::new(day, month, year),
            ..FormState::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        reduce(&state, FormEvent::Submit { today })
    }

    #[test]
    fn empty_form_shows_placeholders() {
        assert_eq!(render_text(&FormState::default()), "-- years\n-- months\n-- days\n");
    }

    #[test]
    fn shows_age_and_popup() {
        let text = render_text(&submit("13", "4", "1985"));
        assert!(text.starts_with("39 years\n1 month\n1 day\n"), "{text}");
        assert!(text.contains("You are a Millennial!"));
    }

    #[test]
    fn dismissed_popup_is_not_rendered() {
        let state = reduce(&submit("13", "4", "1985"), FormEvent::DismissPopup);
        assert!(!render_text(&state).contains("You are"));
    }

    #[test]
    fn shows_errors_without_placeholders() {
        let text = render_text(&submit("31", "4", "2000"));
        assert!(text.starts_with("DAY: Must be a valid date\n\n"), "{text}");
        assert!(!text.contains("MONTH"));
        assert!(text.contains("-- years"));
    }

    #[test]
    fn general_error_is_shown() {
        let text = render_text(&submit("15", "5", "2024"));
        assert!(text.contains("Date must be in the past"));
    }

    #[test]
    fn general_error_comes_before_field_errors() {
        let mut errors = ValidationErrors::default();
        errors.set(Field::Year, "Must be after 1900");
        errors.set(Field::General, "Date must be in the past");
        let state = FormState {
            errors,
            ..FormState::default()
        };

        assert_eq!(
            error_lines(&state),
            vec!["Date must be in the past", "YEAR: Must be after 1900"]
        );
        assert!(render_text(&state).starts_with("Date must be in the past\nYEAR:"));
    }
}
