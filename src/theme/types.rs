use ratatui::style::Color;

/// Application color palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Catalog origin: an `http(s)://` base URL or a local directory.
    pub catalog_base: String,
    /// File name of the majors catalog under `catalog_base`.
    pub majors_catalog: String,
    /// File name of the liberal-arts catalog under `catalog_base`.
    pub liberal_arts_catalog: String,
    /// HTTP timeout per catalog request, in seconds.
    pub request_timeout_secs: u64,
    /// Tables that always exist on startup.
    pub tables: Vec<String>,
    /// Day labels offered by the day filter.
    pub day_labels: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_base: "http://localhost:5173".to_string(),
            majors_catalog: "schedules-majors.json".to_string(),
            liberal_arts_catalog: "schedules-liberal-arts.json".to_string(),
            request_timeout_secs: 30,
            tables: vec!["schedule-1".to_string()],
            day_labels: crate::schedule::DAY_LABELS
                .iter()
                .map(|d| (*d).to_string())
                .collect(),
        }
    }
}
