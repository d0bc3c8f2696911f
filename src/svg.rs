use std::str::FromStr;

use serde::Deserialize;

use crate::form::FormState;
use crate::generation::GenerationInfo;
use crate::view::{age_values, error_lines};

const WIDTH: i32 = 520;
const PADDING: i32 = 40;
const START_Y: i32 = 60;
const ERROR_LINE_HEIGHT: i32 = 22;
const AGE_LINE_HEIGHT: i32 = 72;
const POPUP_HEIGHT: i32 = 180;
const POPUP_GAP: i32 = 30;
const CHAR_WIDTH: f32 = 8.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub error: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#0d1117",
                card: "#161b22",
                text: "#c9d1d9",
                accent: "#a5d6ff",
                muted: "#616e7f",
                error: "#f85149",
            },
            Theme::Light => ThemeColors {
                bg: "#f0f0f0",
                card: "#ffffff",
                text: "#24292f",
                accent: "#2563eb",
                muted: "#6a737d",
                error: "#ef4444",
            },
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Greedy word wrap by an estimated character budget.
fn wrap(text: &str, max_px: f32) -> Vec<String> {
    let max_chars = (max_px / CHAR_WIDTH).max(1.0) as usize;
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

fn build_error_lines(state: &FormState, y: &mut i32) -> String {
    let mut out = String::new();

    let lines = error_lines(state);
    for line in &lines {
        out.push_str(&format!(
            "<text x=\"{PADDING}\" y=\"{y}\" class=\"error\">{}</text>\n",
            escape_xml(line)
        ));
        *y += ERROR_LINE_HEIGHT;
    }

    if !lines.is_empty() {
        *y += ERROR_LINE_HEIGHT;
    }
    out
}

fn build_age_lines(state: &FormState, y: &mut i32) -> String {
    let mut out = String::new();

    for (value, label) in age_values(state) {
        *y += AGE_LINE_HEIGHT - 20;
        out.push_str(&format!(
            r#"<text x="{PADDING}" y="{y}" class="age"><tspan class="value">{}</tspan> {}</text>
"#,
            escape_xml(&value),
            label
        ));
        *y += 20;
    }

    out
}

fn build_popup(info: &GenerationInfo, top: i32) -> String {
    let x = PADDING;
    let w = WIDTH - 2 * PADDING;
    let center = WIDTH / 2;

    let mut desc = String::new();
    for (i, line) in wrap(info.description, (w - 40) as f32).iter().enumerate() {
        let y = top + 110 + (i as i32) * 18;
        desc.push_str(&format!(
            "<text x=\"{center}\" y=\"{y}\" class=\"desc\">{}</text>\n",
            escape_xml(line)
        ));
    }

    format!(
        r#"<rect x="{x}" y="{top}" width="{w}" height="{POPUP_HEIGHT}" rx="16" class="popup"/>
<text x="{center}" y="{emoji_y}" class="emoji">{emoji}</text>
<text x="{center}" y="{title_y}" class="title">You are {name}!</text>
{desc}"#,
        emoji_y = top + 48,
        title_y = top + 84,
        emoji = escape_xml(info.emoji),
        name = escape_xml(info.name),
    )
}

/// Render the form result as a standalone SVG card.
pub fn generate_svg(state: &FormState, theme: Theme) -> String {
    let colors = theme.colors();

    let mut y = START_Y;
    let errors = build_error_lines(state, &mut y);
    let ages = build_age_lines(state, &mut y);

    let popup = match state.popup() {
        Some(info) => {
            let top = y + POPUP_GAP;
            y = top + POPUP_HEIGHT;
            build_popup(info, top)
        }
        None => String::new(),
    };

    let h = y + PADDING;
    let w = WIDTH;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="Poppins,Helvetica,Arial,sans-serif">

<style>
.age   {{ fill: {text}; font-size: 56px; font-weight: 800; font-style: italic; }}
.value {{ fill: {accent}; }}
.error {{ fill: {error}; font-size: 14px; font-style: italic; }}
.popup {{ fill: {card}; stroke: {muted}; }}
.emoji {{ font-size: 40px; text-anchor: middle; }}
.title {{ fill: {accent}; font-size: 24px; font-weight: 800; text-anchor: middle; }}
.desc  {{ fill: {muted}; font-size: 14px; text-anchor: middle; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}"/>
<rect x="10" y="10" width="{inner_w}px" height="{inner_h}px" fill="{card}" rx="24"/>

{errors}{ages}{popup}
</svg>
"#,
        inner_w = w - 20,
        inner_h = h - 20,
        bg = colors.bg,
        card = colors.card,
        text = colors.text,
        accent = colors.accent,
        muted = colors.muted,
        error = colors.error,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormEvent, reduce};
    use crate::validate::DateInput;
    use chrono::NaiveDate;

    fn submitted(day: &str, month: &str, year: &str) -> FormState {
        let state = FormState {
            input: DateInput::new(day, month, year),
            ..FormState::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        reduce(&state, FormEvent::Submit { today })
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn theme_parses() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn wraps_by_width() {
        let lines = wrap("one two three four", CHAR_WIDTH * 9.5);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn empty_form_renders_placeholders() {
        let svg = generate_svg(&FormState::default(), Theme::Light);
        assert_eq!(svg.matches(r#"<tspan class="value">--</tspan>"#).count(), 3);
        assert!(!svg.contains("class=\"popup\""));
        assert!(svg.contains("#ffffff"));
    }

    #[test]
    fn result_renders_age_and_popup() {
        let svg = generate_svg(&submitted("15", "5", "1985"), Theme::Dark);
        assert!(svg.contains(r#"<tspan class="value">38</tspan> years"#));
        assert!(svg.contains("You are a Millennial!"));
        assert!(svg.contains("#161b22"));
    }

    #[test]
    fn errors_render_without_popup() {
        let svg = generate_svg(&submitted("31", "4", "2000"), Theme::Light);
        assert!(svg.contains("DAY: Must be a valid date"));
        assert!(!svg.contains("MONTH:"));
        assert!(!svg.contains("class=\"popup\""));
    }
}
