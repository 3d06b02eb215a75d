//! Off-screen drawing target for one frame.
//!
//! Entities draw onto a `Surface` in world cells. `Canvas` is the in-memory
//! implementation; it renders into a ratatui buffer as a widget.

use crate::assets::Sprite;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

/// Anything entities can draw on.
pub trait Surface {
    /// Width and height in cells.
    fn size(&self) -> (u16, u16);

    /// Draw `sprite` with its top-left corner at the rounded world position,
    /// skipping rows at or below `bottom`. Transparent glyphs and off-surface
    /// cells are skipped too.
    fn blit_above(&mut self, sprite: &Sprite, x: f64, y: f64, bottom: i32);

    fn blit(&mut self, sprite: &Sprite, x: f64, y: f64) {
        self.blit_above(sprite, x, y, i32::MAX);
    }

    /// Write `text` starting at `(x, y)`, clipped to the surface.
    fn print(&mut self, text: &str, x: i32, y: i32, style: Style);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasCell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Default for CanvasCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<CanvasCell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![CanvasCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(CanvasCell::default());
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&CanvasCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut CanvasCell> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.cells
            .get_mut(y as usize * self.width as usize + x as usize)
    }

    /// Characters of row `y`, handy for assertions.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.cell(x, y).map(|c| c.ch))
            .collect()
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn blit_above(&mut self, sprite: &Sprite, x: f64, y: f64, bottom: i32) {
        let left = x.round() as i32;
        let top = y.round() as i32;
        for sy in 0..sprite.height() {
            if top + sy as i32 >= bottom {
                break;
            }
            for sx in 0..sprite.width() {
                let Some(glyph) = sprite.glyph(sx, sy) else {
                    continue;
                };
                if let Some(cell) = self.cell_mut(left + sx as i32, top + sy as i32) {
                    cell.ch = glyph.ch;
                    cell.modifier = Modifier::empty();
                    if let Some(fg) = glyph.fg {
                        cell.fg = fg;
                    }
                    if let Some(bg) = glyph.bg {
                        cell.bg = bg;
                    }
                }
            }
        }
    }

    fn print(&mut self, text: &str, x: i32, y: i32, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(x + i as i32, y) {
                cell.ch = ch;
                cell.modifier = style.add_modifier;
                if let Some(fg) = style.fg {
                    cell.fg = fg;
                }
                if let Some(bg) = style.bg {
                    cell.bg = bg;
                }
            }
        }
    }
}

impl Widget for &Canvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.width.min(area.width);
        let height = self.height.min(area.height);
        for y in 0..height {
            for x in 0..width {
                if let Some(cell) = self.cell(x, y) {
                    buf.get_mut(area.x + x, area.y + y)
                        .set_char(cell.ch)
                        .set_style(
                            Style::default()
                                .fg(cell.fg)
                                .bg(cell.bg)
                                .add_modifier(cell.modifier),
                        );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Glyph;

    #[test]
    fn test_blit_rounds_and_clips() {
        let mut canvas = Canvas::new(5, 2);
        let sprite = Sprite::from_art(&["abc"], None, None);
        canvas.blit(&sprite, 2.6, 0.4);
        assert_eq!(canvas.row_text(0), "   ab");
        canvas.blit(&sprite, -2.0, 1.0);
        assert_eq!(canvas.row_text(1), "c    ");
    }

    #[test]
    fn test_blit_above_stops_at_bottom() {
        let mut canvas = Canvas::new(2, 3);
        canvas.blit_above(&Sprite::from_art(&["a", "b", "c"], None, None), 0.0, 0.0, 2);
        assert_eq!(canvas.row_text(1), "b ");
        assert_eq!(canvas.row_text(2), "  ");
    }

    #[test]
    fn test_transparent_cells_keep_background() {
        let mut canvas = Canvas::new(3, 1);
        canvas.blit(&Sprite::filled(3, 1, Glyph::fill(Color::Blue)), 0.0, 0.0);
        canvas.blit(&Sprite::from_art(&["x x"], Some(Color::Red), None), 0.0, 0.0);
        let middle = canvas.cell(1, 0).unwrap();
        assert_eq!(middle.ch, ' ');
        assert_eq!(middle.bg, Color::Blue);
        let left = canvas.cell(0, 0).unwrap();
        assert_eq!((left.ch, left.fg, left.bg), ('x', Color::Red, Color::Blue));
    }

    #[test]
    fn test_print_clips_and_styles() {
        let mut canvas = Canvas::new(4, 1);
        canvas.print("hello", -1, 0, Style::default().add_modifier(Modifier::BOLD));
        assert_eq!(canvas.row_text(0), "ello");
        assert!(canvas.cell(0, 0).unwrap().modifier.contains(Modifier::BOLD));
        canvas.print("zz", 0, 5, Style::default());
        assert_eq!(canvas.row_text(0), "ello");
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(2, 2);
        canvas.print("ab", 0, 1, Style::default());
        canvas.clear();
        assert_eq!(canvas, Canvas::new(2, 2));
    }

    #[test]
    fn test_renders_into_buffer() {
        let mut canvas = Canvas::new(3, 1);
        canvas.print("hey", 0, 0, Style::default().fg(Color::Green));
        let area = Rect::new(1, 1, 3, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 3));
        (&canvas).render(area, &mut buf);
        assert_eq!(buf.get(2, 1).symbol(), "e");
        assert_eq!(buf.get(3, 1).fg, Color::Green);
    }
}
