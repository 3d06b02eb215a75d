//! Cell-based sprites: small grids of styled characters with transparency.

use ratatui::style::Color;

/// One opaque sprite cell. `None` colours let whatever is underneath show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Glyph {
    pub fn new(ch: char, fg: Option<Color>, bg: Option<Color>) -> Self {
        Self { ch, fg, bg }
    }

    /// A blank cell painted with a background colour.
    pub fn fill(bg: Color) -> Self {
        Self::new(' ', None, Some(bg))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u16,
    height: u16,
    glyphs: Vec<Option<Glyph>>,
}

impl Sprite {
    /// Fully transparent sprite.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![None; width as usize * height as usize],
        }
    }

    pub fn filled(width: u16, height: u16, glyph: Glyph) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Some(glyph); width as usize * height as usize],
        }
    }

    /// Build from text art. Spaces are transparent; every other character
    /// becomes a glyph with the given colours. Short lines are padded.
    pub fn from_art<S: AsRef<str>>(lines: &[S], fg: Option<Color>, bg: Option<Color>) -> Self {
        let width = lines
            .iter()
            .map(|l| l.as_ref().chars().count())
            .max()
            .unwrap_or(0) as u16;
        let mut sprite = Self::new(width, lines.len() as u16);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.as_ref().chars().enumerate() {
                if ch != ' ' {
                    sprite.set(x as u16, y as u16, Some(Glyph::new(ch, fg, bg)));
                }
            }
        }
        sprite
    }

    /// Magenta `?` block used when an image cannot be loaded at all.
    pub fn placeholder(width: u16, height: u16) -> Self {
        Self::filled(
            width.max(1),
            height.max(1),
            Glyph::new('?', Some(Color::Black), Some(Color::Magenta)),
        )
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn glyph(&self, x: u16, y: u16) -> Option<&Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.glyphs[self.index(x, y)].as_ref()
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Option<Glyph>) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.glyphs[i] = glyph;
        }
    }

    /// Same sprite recoloured: every opaque glyph takes `fg`.
    pub fn tinted(&self, fg: Color) -> Self {
        let glyphs = self
            .glyphs
            .iter()
            .map(|g| g.map(|g| Glyph { fg: Some(fg), ..g }))
            .collect();
        Self { glyphs, ..*self }
    }

    /// Upside-down copy. Characters with a vertical sense are mirrored too.
    pub fn flipped_vertical(&self) -> Self {
        let mut flipped = Self::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let glyph = self.glyph(x, y).map(|g| Glyph {
                    ch: mirror_vertical(g.ch),
                    ..*g
                });
                flipped.set(x, self.height - 1 - y, glyph);
            }
        }
        flipped
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn mirror_vertical(ch: char) -> char {
    match ch {
        '▀' => '▄',
        '▄' => '▀',
        '┌' => '└',
        '└' => '┌',
        '┐' => '┘',
        '┘' => '┐',
        '╔' => '╚',
        '╚' => '╔',
        '╗' => '╝',
        '╝' => '╗',
        '^' => 'v',
        'v' => '^',
        '/' => '\\',
        '\\' => '/',
        other => other,
    }
}
