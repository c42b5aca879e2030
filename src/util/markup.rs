//! Line-break markup used between the dispatcher and the renderer.

pub const LINE_BREAK: &str = "<br>";

/// `"a\nb"` -> `"a<br>b"`
pub fn newlines_to_breaks(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}

/// `"a<br>b"` -> `"a\nb"`
pub fn breaks_to_newlines(markup: &str) -> String {
    markup.replace(LINE_BREAK, "\n")
}

/// Visual lines of a markup string. Carriage returns are dropped.
pub fn split_breaks(markup: &str) -> Vec<String> {
    markup.split(LINE_BREAK).map(|line| line.replace('\r', "")).collect()
}
