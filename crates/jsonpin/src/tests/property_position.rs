use quickcheck::QuickCheck;

use crate::{DEFAULT_TAB_SIZE, Source};

/// Reference implementation: scan from the very beginning of the text,
/// counting newlines and tab stops, never touching the line index.
fn naive_line_and_column(text: &str, char_index: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for (index, ch) in text.char_indices() {
        if index >= char_index {
            break;
        }
        match ch {
            '\n' => {
                line += 1;
                column = 1;
            }
            '\t' => column += DEFAULT_TAB_SIZE - (column - 1) % DEFAULT_TAB_SIZE,
            _ => column += 1,
        }
    }
    (line, column)
}

/// Property: the indexed lookup agrees with the naive scan for arbitrary
/// inputs and offsets (including offsets past the end), and is idempotent.
#[test]
fn line_and_column_agree_with_naive_scan() {
    fn prop(text: String, offset_seed: usize, past_end: u8) -> bool {
        let source = Source::new("prop.json", text.clone());
        let offset = if past_end % 4 == 0 {
            text.len() + usize::from(past_end)
        } else {
            let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
            boundaries.push(text.len());
            boundaries[offset_seed % boundaries.len()]
        };

        let resolved = source.get_line_and_column(offset, DEFAULT_TAB_SIZE);
        let (line, column) = naive_line_and_column(&text, offset);
        resolved.line == line
            && resolved.column == column
            && source.get_line_and_column(offset, DEFAULT_TAB_SIZE) == resolved
    }

    QuickCheck::new()
        .tests(2_000)
        .quickcheck(prop as fn(String, usize, u8) -> bool);
}
