//! Block-character bar graph for the terminal.

pub const FULL: char = '▉';
pub const EMPTY: char = '░';

/// Render `data` as `rows` lines, one column per value.
///
/// Row 0 is the top. A cell is filled when the value reaches that row
/// counted from the bottom, so a value of `rows` or more fills the whole
/// column and a value of 0 or less leaves it empty. With `redraw`, the
/// frame starts with the escape sequence that moves back over the previous
/// frame so it is overwritten in place.
pub fn render_graph(data: &[f64], rows: usize, redraw: bool) -> String {
    let mut out = String::with_capacity((data.len() * FULL.len_utf8() + 1) * rows + 16);

    if redraw && rows > 0 {
        out.push_str(&format!("\x1b[{rows}A\x1b[2K"));
    }

    let max = rows as f64;
    for y in 0..rows {
        for &value in data {
            out.push(if max - value <= y as f64 { FULL } else { EMPTY });
        }
        out.push('\n');
    }
    out
}
