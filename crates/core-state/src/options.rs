//! Options store (`:set ...`).
//!
//! Boolean options form a closed enum; `tabstop` carries an integer and is
//! routed separately because it also forces a re-render of every row.

use core_text::DEFAULT_TAB_STOP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOption {
    Number,
    RelativeNumber,
}

impl BoolOption {
    pub const ALL: [BoolOption; 2] = [BoolOption::Number, BoolOption::RelativeNumber];

    pub fn name(self) -> &'static str {
        match self {
            BoolOption::Number => "number",
            BoolOption::RelativeNumber => "relativenumber",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            BoolOption::Number => "nu",
            BoolOption::RelativeNumber => "rnu",
        }
    }

    /// Parse a toggle word: `number`/`nu` enable, `nonumber`/`nonu` disable
    /// (and likewise for `relativenumber`/`rnu`).
    pub fn parse_toggle(word: &str) -> Option<(BoolOption, bool)> {
        let (body, value) = match word.strip_prefix("no") {
            Some(rest) => (rest, false),
            None => (word, true),
        };
        Self::ALL
            .into_iter()
            .find(|opt| body == opt.name() || body == opt.short_name())
            .map(|opt| (opt, value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    number: bool,
    relative_number: bool,
    tab_stop: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            number: false,
            relative_number: false,
            tab_stop: DEFAULT_TAB_STOP,
        }
    }
}

impl Options {
    pub fn get(&self, opt: BoolOption) -> bool {
        match opt {
            BoolOption::Number => self.number,
            BoolOption::RelativeNumber => self.relative_number,
        }
    }

    pub fn set(&mut self, opt: BoolOption, value: bool) {
        match opt {
            BoolOption::Number => self.number = value,
            BoolOption::RelativeNumber => self.relative_number = value,
        }
    }

    /// Whether any line-number gutter is shown.
    pub fn line_numbers(&self) -> bool {
        self.number || self.relative_number
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub(crate) fn set_tab_stop(&mut self, tab_stop: usize) {
        self.tab_stop = tab_stop;
    }
}
