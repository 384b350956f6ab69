//! League (competition category)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub league_major: String,
    pub league_minor: String,
    pub league_sub: Option<String>,
    /// Canonical name, e.g. `soccer_smallsize`
    pub name: String,
    /// Display name, e.g. `Soccer SmallSize`
    pub name_pretty: String,
}

impl League {
    /// Build a league from its category parts, deriving both names
    pub fn new(league_major: &str, league_minor: &str, league_sub: Option<&str>) -> Self {
        let name = match league_sub {
            Some(sub) => format!(
                "{}_{}_{}",
                league_major.to_lowercase(),
                league_minor.to_lowercase(),
                sub.to_lowercase()
            ),
            None => format!(
                "{}_{}",
                league_major.to_lowercase(),
                league_minor.to_lowercase()
            ),
        };
        let name_pretty = pretty_name(&name);

        Self {
            league_major: league_major.to_string(),
            league_minor: league_minor.to_string(),
            league_sub: league_sub.map(str::to_string),
            name,
            name_pretty,
        }
    }
}

fn pretty_name(name: &str) -> String {
    let mut pretty = name
        .split('_')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    for (from, to) in [
        ("Smallsize", "SmallSize"),
        ("Midsize", "MidSize"),
        ("Standardplatform", "StandardPlatform"),
        ("Atwork", "@Work"),
        ("Athome", "@Home"),
        ("2d", "2D"),
        ("3d", "3D"),
    ] {
        pretty = pretty.replace(from, to);
    }

    pretty
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
