// grid_dsl_cli/src/rollout/render.rs
#![forbid(unsafe_code)]

use ndarray::ArrayView2;

use grid_dsl_engine::{Color, PAD_COLOR};

#[inline]
fn cell_char(v: Color) -> char {
    match v {
        0 => '.',
        PAD_COLOR => '#',
        1..=9 => char::from(b'0' + v as u8),
        _ => '+',
    }
}

/// One text line per row; `.` is background, `#` is crop padding, `+` is any colour above 9.
pub fn render_ascii(grid: ArrayView2<'_, Color>) -> Vec<String> {
    grid.rows()
        .into_iter()
        .map(|row| row.iter().map(|&v| cell_char(v)).collect())
        .collect()
}

/// Input and output side by side. Heights may differ (canvas extension).
pub fn render_pair(input: ArrayView2<'_, Color>, output: ArrayView2<'_, Color>) -> String {
    let left = render_ascii(input);
    let right = render_ascii(output);
    let width = input.ncols();
    let mut s = String::new();
    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        s.push_str(&format!("{l:<width$}  |  {r}\n"));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn glyphs() {
        let g = array![[0, 3, -1], [12, 9, 0]];
        assert_eq!(render_ascii(g.view()), vec![".3#", "+9."]);
    }

    #[test]
    fn pair_pads_the_shorter_side() {
        let a = array![[1, 0]];
        let b = array![[1, 0], [0, 1]];
        assert_eq!(render_pair(a.view(), b.view()), "1.  |  1.\n    |  .1\n");
    }
}
