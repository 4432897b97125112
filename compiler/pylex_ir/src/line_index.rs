//! Byte offset to line/column mapping for reports.

/// Pre-computed line start table.
///
/// Lines are split on `\n` only; a `\r` before it stays on the line it ends.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// Byte offset of each line start. `starts[0] == 0`.
    starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineIndex { starts }
    }

    /// Number of lines (a trailing `\n` opens an empty last line).
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// 1-based line containing `offset`.
    pub fn line(&self, offset: u32) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(idx + 1).unwrap_or(u32::MAX)
    }

    /// 1-based `(line, column)` for `offset`. Columns count characters.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let start = self.starts[(line - 1) as usize] as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(start..end)
            .map_or(end - start, |text| text.chars().count());
        (line, u32::try_from(col + 1).unwrap_or(u32::MAX))
    }
}
