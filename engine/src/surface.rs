use std::io;

/// a fixed-position character grid the game draws onto.
pub trait Surface {
    fn clear(&mut self) -> io::Result<()>;

    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()>;

    /// writes at the cursor and leaves the cursor after the last character.
    fn write(&mut self, text: &str) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// pushes anything buffered out to the device.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn write_at(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        self.set_cursor(x, y)?;
        self.write(text)
    }
}

/// an in-memory surface. writes past the right or bottom edge are dropped.
#[derive(Clone, Debug)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    cells: Vec<char>,
    cursor: (u16, u16),
    cursor_visible: bool,
    clears: usize,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![' '; cols as usize * rows as usize],
            cursor: (0, 0),
            cursor_visible: true,
            clears: 0,
        }
    }

    pub fn char_at(&self, x: u16, y: u16) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// the full row, trailing blanks included.
    pub fn row(&self, y: u16) -> String {
        if y >= self.rows {
            return String::new();
        }
        let start = y as usize * self.cols as usize;
        self.cells[start..start + self.cols as usize].iter().collect()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// how many times the surface has been cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// every cell holding `glyph`, in row-major order.
    pub fn find(&self, glyph: char) -> Vec<(u16, u16)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == glyph)
            .map(|(idx, _)| {
                (
                    (idx % self.cols as usize) as u16,
                    (idx / self.cols as usize) as u16,
                )
            })
            .collect()
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.cols && y < self.rows {
            Some(y as usize * self.cols as usize + x as usize)
        } else {
            None
        }
    }
}

impl Surface for Canvas {
    fn clear(&mut self) -> io::Result<()> {
        self.cells.fill(' ');
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let (mut x, y) = self.cursor;
        for c in text.chars() {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = c;
            }
            x = x.saturating_add(1);
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_row,
        surface::{Canvas, Surface},
    };

    #[test]
    fn write_moves_cursor() {
        let mut canvas = Canvas::new(10, 3);
        canvas.write_at(2, 1, "ab").unwrap();
        canvas.write("c").unwrap();
        assert_row!(canvas, 1, "  abc");
        assert_eq!(canvas.char_at(4, 1), Some('c'));
        assert_eq!(canvas.find('b'), vec![(3, 1)]);
    }

    #[test]
    fn write_clips_at_edges() {
        let mut canvas = Canvas::new(4, 2);
        canvas.write_at(2, 0, "xyz").unwrap();
        assert_eq!(canvas.row(0), "  xy");
        // off the bottom.
        canvas.write_at(0, 5, "q").unwrap();
        assert!(canvas.find('q').is_empty());
        assert_eq!(canvas.char_at(4, 0), None);
        assert_eq!(canvas.row(9), "");
    }

    #[test]
    fn clear_blanks_everything() {
        let mut canvas = Canvas::new(3, 2);
        canvas.write_at(0, 0, "###").unwrap();
        canvas.write_at(1, 1, "O").unwrap();
        canvas.clear().unwrap();
        assert_eq!(canvas.row(0), "   ");
        assert_eq!(canvas.row(1), "   ");
        assert_eq!(canvas.clears(), 1);
    }

    #[test]
    fn cursor_visibility() {
        let mut canvas = Canvas::new(1, 1);
        assert!(canvas.cursor_visible());
        canvas.set_cursor_visible(false).unwrap();
        assert!(!canvas.cursor_visible());
    }
}
