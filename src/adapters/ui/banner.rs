//! Title art for the top of the screen. Rendered once by the terminal view and
//! reprinted on every redraw.

use crossterm::style::{Color, Stylize};
use figlet_rs::FIGfont;

const TITLE: &str = "AVVENTO";
const TAGLINE: &str = "Un indovinello al giorno";

/// Holly red, pine green, gold. Art rows cycle through them.
const GARLAND: [Color; 3] = [
    Color::Rgb {
        r: 0xc0,
        g: 0x39,
        b: 0x2b,
    },
    Color::Rgb {
        r: 0x1e,
        g: 0x84,
        b: 0x49,
    },
    Color::Rgb {
        r: 0xf1,
        g: 0xc4,
        b: 0x0f,
    },
];

fn garland(row: usize) -> Color {
    GARLAND[row % GARLAND.len()]
}

pub struct Banner {
    art: Vec<String>,
    tagline: String,
}

impl Banner {
    /// Figlet art of the title; a plain title line if the built-in font fails to load.
    pub fn new() -> Self {
        let art = FIGfont::standard()
            .ok()
            .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
            .unwrap_or_else(|| TITLE.to_string());
        Self {
            art: art
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
            tagline: format!("✶ {TAGLINE} ✶  v{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Art rows in garland colours, then the tagline in gold.
    pub fn styled_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .art
            .iter()
            .enumerate()
            .map(|(row, line)| line.as_str().with(garland(row)).to_string())
            .collect();
        lines.push(self.tagline.as_str().with(GARLAND[2]).italic().to_string());
        lines
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}
