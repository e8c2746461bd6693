use serde::{Deserialize, Serialize};

/// One letter of a team's recent form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(into = "char", from = "char")]
pub enum FormResult {
    Win,
    Draw,
    Loss,
    Other(char),
}

impl From<char> for FormResult {
    fn from(c: char) -> Self {
        match c {
            'W' => FormResult::Win,
            'D' => FormResult::Draw,
            'L' => FormResult::Loss,
            other => FormResult::Other(other),
        }
    }
}

impl From<FormResult> for char {
    fn from(v: FormResult) -> Self {
        v.as_char()
    }
}

impl FormResult {
    pub fn parse_all(form: &str) -> Vec<FormResult> {
        form.chars().map(FormResult::from).collect()
    }

    pub fn as_char(&self) -> char {
        match self {
            FormResult::Win => 'W',
            FormResult::Draw => 'D',
            FormResult::Loss => 'L',
            FormResult::Other(c) => *c,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Standing {
    pub position: u8,
    pub team: String,
    pub logo: String,
    pub played: u16,
    pub points: u16,
    pub form: Vec<FormResult>,
    #[serde(default)]
    pub goals_for: u16,
    #[serde(default)]
    pub goals_against: u16,
}
