//! Low-level drawing helpers shared by the section widgets: background
//! fills, clipped offsets for animated elements, gradient text, and buffer
//! blitting for the page compositor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
};

use super::theme::Theme;
use crate::content::Rgb;
use crate::core::motion::{FadeSlide, Pose, Transition};

/// Section headings fade in while rising three rows.
pub const HEADING: FadeSlide = FadeSlide::new(0.0, 3.0, Transition::new(800));

pub fn fill(buf: &mut Buffer, area: Rect, bg: Rgb) {
    buf.set_style(area.intersection(buf.area), Style::default().bg(Theme::rgb(bg)));
}

/// `area` moved by `(dx, dy)` cells and clipped to `bounds`.  `None` when
/// nothing of it remains visible.
pub fn shifted(area: Rect, dx: i32, dy: i32, bounds: Rect) -> Option<Rect> {
    let x0 = i32::from(area.x) + dx;
    let y0 = i32::from(area.y) + dy;
    let x1 = x0 + i32::from(area.width);
    let y1 = y0 + i32::from(area.height);

    let bx0 = i32::from(bounds.x);
    let by0 = i32::from(bounds.y);
    let bx1 = bx0 + i32::from(bounds.width);
    let by1 = by0 + i32::from(bounds.height);

    let (cx0, cy0) = (x0.max(bx0), y0.max(by0));
    let (cx1, cy1) = (x1.min(bx1), y1.min(by1));
    if cx0 >= cx1 || cy0 >= cy1 {
        return None;
    }
    Some(Rect::new(
        cx0 as u16,
        cy0 as u16,
        (cx1 - cx0) as u16,
        (cy1 - cy0) as u16,
    ))
}

/// Round a fractional cell offset.
pub fn cells(v: f64) -> i32 {
    if v.is_finite() {
        v.round() as i32
    } else {
        0
    }
}

/// Draw `text` centred in `area`'s first row, coloured along a gradient.
pub fn gradient_text(
    buf: &mut Buffer,
    area: Rect,
    text: &str,
    (from, to): (Rgb, Rgb),
    bg: Rgb,
    opacity: f64,
) {
    if area.is_empty() {
        return;
    }
    let width = Line::raw(text).width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let count = text.chars().count().max(2) - 1;
    let mut col = x;
    for (i, ch) in text.chars().enumerate() {
        if col >= area.right() {
            break;
        }
        let shade = Theme::mix(from, to, i as f64 / count as f64);
        let style = Style::default()
            .fg(Theme::fade(shade, bg, opacity))
            .add_modifier(Modifier::BOLD);
        let max = usize::from(area.right() - col);
        col = buf.set_stringn(col, area.y, ch.to_string(), max, style).0;
    }
}

/// Section heading with a short gradient rule underneath.
pub fn heading(buf: &mut Buffer, area: Rect, title: &str, bg: Rgb, pose: Pose) {
    let Some(at) = shifted(area, cells(pose.dx), cells(pose.dy), buf.area) else {
        return;
    };
    let gradient = (Theme::HEADING_FROM, Theme::HEADING_TO);
    gradient_text(buf, at, title, gradient, bg, pose.opacity);
    if at.height > 2 {
        let rule = Rect::new(at.x, at.y + 2, at.width, 1);
        gradient_text(buf, rule, "━━━━━━━━━━━━", gradient, bg, pose.opacity);
    }
}

/// Copy cells from `src` into `dst_area` of `dst`.  Destination cell
/// `(x, y)` takes source cell `(x - dst_area.x + src_x, y - dst_area.y + src_y)`;
/// cells outside `src` are left untouched.
pub fn blit(src: &Buffer, src_x: i32, src_y: i32, dst: &mut Buffer, dst_area: Rect) {
    let area = dst_area.intersection(dst.area);
    for y in area.top()..area.bottom() {
        let sy = i32::from(y - dst_area.y) + src_y;
        if sy < 0 || sy > i32::from(u16::MAX) {
            continue;
        }
        for x in area.left()..area.right() {
            let sx = i32::from(x - dst_area.x) + src_x;
            if sx < 0 || sx > i32::from(u16::MAX) {
                continue;
            }
            if let Some(cell) = src.cell((sx as u16, sy as u16)) {
                if let Some(out) = dst.cell_mut((x, y)) {
                    *out = cell.clone();
                }
            }
        }
    }
}

/// Buffer contents as plain text, one line per row.
#[cfg(test)]
pub fn buffer_text(buf: &Buffer) -> String {
    let a = buf.area;
    (a.top()..a.bottom())
        .map(|y| {
            (a.left()..a.right())
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 20, 10);
        let a = Rect::new(5, 5, 10, 4);
        assert_eq!(shifted(a, 0, 0, bounds), Some(a));
        assert_eq!(shifted(a, -8, 0, bounds), Some(Rect::new(0, 5, 7, 4)));
        assert_eq!(shifted(a, 0, 3, bounds), Some(Rect::new(5, 8, 10, 2)));
        assert_eq!(shifted(a, 30, 0, bounds), None);
    }

    #[test]
    fn blit_offsets_and_skips_missing_cells() {
        let mut src = Buffer::empty(Rect::new(0, 0, 6, 1));
        src.set_string(0, 0, "abcdef", Style::default());
        let mut dst = Buffer::empty(Rect::new(0, 0, 4, 2));

        blit(&src, 2, 0, &mut dst, Rect::new(0, 0, 4, 2));
        assert_eq!(dst[(0u16, 0u16)].symbol(), "c");
        assert_eq!(dst[(3u16, 0u16)].symbol(), "f");
        // Row 1 has no source row.
        assert_eq!(dst[(0u16, 1u16)].symbol(), " ");

        let mut dst = Buffer::empty(Rect::new(0, 0, 4, 1));
        blit(&src, -2, 0, &mut dst, Rect::new(0, 0, 4, 1));
        assert_eq!(dst[(1u16, 0u16)].symbol(), " ");
        assert_eq!(dst[(2u16, 0u16)].symbol(), "a");
    }

    #[test]
    fn gradient_text_is_centred() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        gradient_text(
            &mut buf,
            Rect::new(0, 0, 10, 1),
            "abcd",
            ((0, 0, 0), (255, 255, 255)),
            (0, 0, 0),
            1.0,
        );
        assert_eq!(buf[(3u16, 0u16)].symbol(), "a");
        assert_eq!(buf[(6u16, 0u16)].symbol(), "d");
    }
}
