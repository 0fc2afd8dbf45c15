use clap::ValueEnum;

pub const DEFAULT_COLUMN_WIDTH: usize = 60;
const MIN_COLUMN_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Layout {
    /// Old and new documents in two side-by-side columns
    #[default]
    Split,
    /// One column with +/- markers
    Unified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Applies the choice to `colored`; `Auto` leaves its terminal and
    /// `NO_COLOR`/`CLICOLOR` detection in charge.
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => colored::control::unset_override(),
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

/// How a diff is laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub layout: Layout,
    /// Collapse unchanged runs into hunks with this many context lines
    pub context: Option<usize>,
    /// Width of each column in the split layout
    pub width: usize,
}

impl Settings {
    pub fn new(layout: Layout, context: Option<usize>, width: usize) -> Self {
        Self {
            layout,
            context,
            width: width.max(MIN_COLUMN_WIDTH),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Layout::default(), None, DEFAULT_COLUMN_WIDTH)
    }
}
