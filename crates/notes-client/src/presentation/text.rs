//! Line wrapping and clamping for card previews.
//!
//! Widths count extended grapheme clusters, so combining marks and emoji
//! sequences are never split.

use unicode_segmentation::UnicodeSegmentation;

const ELLIPSIS: char = '…';

/// Greedy word wrap. Newlines are kept as paragraph breaks, runs of other
/// whitespace collapse to one space, and words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let graphemes: Vec<&str> = word.graphemes(true).collect();

            if line_len > 0 && line_len + 1 + graphemes.len() > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }

            if graphemes.len() > width {
                for chunk in graphemes.chunks(width) {
                    if line_len > 0 {
                        lines.push(std::mem::take(&mut line));
                    }
                    line = chunk.concat();
                    line_len = chunk.len();
                }
                continue;
            }

            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(word);
            line_len += graphemes.len();
        }

        lines.push(line);
    }

    lines
}

/// Wrap and keep at most `max_lines`; the last kept line ends in `…` when
/// anything was cut.
pub fn clamp(text: &str, max_lines: usize, width: usize) -> Vec<String> {
    let mut lines = wrap(text, width);

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, width.max(1));
        }
    }

    lines
}

fn with_ellipsis(line: &str, width: usize) -> String {
    let mut out: String = line.graphemes(true).take(width - 1).collect();
    out.push(ELLIPSIS);
    out
}
