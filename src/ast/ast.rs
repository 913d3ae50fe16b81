use super::statements::Program;

/// Re-serialization back to source text.
///
/// Parsing the produced text yields a tree equal to the one it was rendered from.
/// Binary operands that are themselves binary are always parenthesized, so no
/// precedence information is needed to read it back.
pub trait ToSource {
    fn to_source(&self) -> String;
}

impl Program {
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl ToSource for Program {
    fn to_source(&self) -> String {
        self.body
            .iter()
            .map(|stmt| stmt.to_source())
            .collect::<Vec<String>>()
            .join("\n")
    }
}
