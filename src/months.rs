/// Month dropdown entries, value 1..=12 in order.
pub const MONTHS: [(u32, &str); 12] = [
    (1, "January"),
    (2, "February"),
    (3, "March"),
    (4, "April"),
    (5, "May"),
    (6, "June"),
    (7, "July"),
    (8, "August"),
    (9, "September"),
    (10, "October"),
    (11, "November"),
    (12, "December"),
];

/// Resolve a month name (full or three-letter, any case) to its value.
pub fn month_value(name: &str) -> Option<u32> {
    let name = name.trim().to_ascii_lowercase();
    if name.len() < 3 {
        return None;
    }

    MONTHS
        .iter()
        .find(|(_, full)| {
            let full = full.to_ascii_lowercase();
            full == name || (name.len() == 3 && full.starts_with(&name))
        })
        .map(|(value, _)| *value)
}

/// Turn whatever was typed for the month into the text the validator sees.
///
/// Names become their numeric value; anything else passes through untouched
/// so the validator can report it.
pub fn normalize_month(raw: &str) -> String {
    match month_value(raw) {
        Some(value) => value.to_string(),
        None => raw.trim().to_string(),
    }
}
