//! Birth year to generation label.
//!
//! Rules are evaluated top to bottom and the first match wins. The groovy
//! window floats with the current year and sits above the fixed bands, so a
//! birth year inside it never reaches its named generation.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationInfo {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

/// Years before the current year that bound the groovy window, inclusive.
pub const GROOVY_MAX_AGE: i32 = 27;
pub const GROOVY_MIN_AGE: i32 = 15;

pub const GROOVY: GenerationInfo = GenerationInfo {
    name: "a groovy member",
    emoji: "🕺",
    description: "You're part of the groovy crowd, always on top of the latest trends with a style all your own!",
};

pub const ALPHA: GenerationInfo = GenerationInfo {
    name: "Generation Alpha",
    emoji: "📱",
    description: "The first generation born entirely in the 21st century, growing up with tablets and AI.",
};

pub const GEN_Z: GenerationInfo = GenerationInfo {
    name: "Generation Z",
    emoji: "🎉",
    description: "Digital natives, trendsetters and masters of the internet.",
};

pub const MILLENNIAL: GenerationInfo = GenerationInfo {
    name: "a Millennial",
    emoji: "🥑",
    description: "You watched the internet arrive and social media take over.",
};

pub const GEN_X: GenerationInfo = GenerationInfo {
    name: "Generation X",
    emoji: "🎸",
    description: "The bridge between the analog and digital worlds, known for your independence.",
};

pub const BOOMER: GenerationInfo = GenerationInfo {
    name: "a Baby Boomer",
    emoji: "✌️",
    description: "Part of the generation that shaped the modern world with rock and roll.",
};

pub const SILENT: GenerationInfo = GenerationInfo {
    name: "of the Silent Generation",
    emoji: "📻",
    description: "Known for resilience, hard work and traditional values.",
};

/// Fixed bands as (first birth year, generation), newest first.
const BANDS: [(i32, GenerationInfo); 6] = [
    (2013, ALPHA),
    (1997, GEN_Z),
    (1981, MILLENNIAL),
    (1965, GEN_X),
    (1946, BOOMER),
    (1928, SILENT),
];

/// Inclusive birth-year range of the groovy window for `current_year`.
pub fn groovy_window(current_year: i32) -> (i32, i32) {
    (current_year - GROOVY_MAX_AGE, current_year - GROOVY_MIN_AGE)
}

pub fn lookup(birth_year: i32, current_year: i32) -> Option<GenerationInfo> {
    let (start, end) = groovy_window(current_year);
    if (start..=end).contains(&birth_year) {
        return Some(GROOVY);
    }

    BANDS
        .iter()
        .find(|(first_year, _)| birth_year >= *first_year)
        .map(|(_, info)| *info)
}
