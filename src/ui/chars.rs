pub const CHECK: &str = "✔";
pub const BOX_ON: &str = "[x]";
pub const BOX_OFF: &str = "[ ]";
pub const ARROW_RIGHT: &str = "▸";
pub const REROLL: &str = "↻";
pub const DOT: &str = "●";
