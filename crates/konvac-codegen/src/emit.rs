/// Append-only buffer of program statements, one per line.
///
/// Lines are kept in the order they were pushed; nothing is reordered or
/// deduplicated.
#[derive(Debug, Default)]
pub struct Emitter {
    lines: Vec<String>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statement(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Push a `//` comment. Line terminators in `text` become spaces so the
    /// comment cannot spill into code on the next line, and `</` is written
    /// `<\/` so it cannot close an enclosing `<script>` element.
    pub fn comment(&mut self, text: &str) {
        let text: String = text
            .chars()
            .map(|c| match c {
                '\n' | '\r' | '\u{2028}' | '\u{2029}' => ' ',
                c => c,
            })
            .collect();
        self.lines.push(format!("// {}", text.replace("</", "<\\/")));
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
