use image::buffer::{Pixels, PixelsMut, Rows, RowsMut};
use image::Pixel;

/// Allows transposed mutable access to pixel, like column based.
///
/// Yields `(x, y, pixel)` with `x` in the outer and `y` in the inner loop.
pub(crate) struct TransposeMut<'a, P: Pixel + 'a> {
    i: usize,
    i_max: usize,
    height: u32,
    rows_mut: RowsMut<'a, P>,
    rows_buffer: Vec<PixelsMut<'a, P>>,
}

impl<'a, P: Pixel + 'a> TransposeMut<'a, P> {
    /// utilises RowsMut to give Column based mut access to pixel
    pub fn from_rows_mut(rows_mut: RowsMut<'a, P>, width: u32, height: u32) -> Self {
        Self {
            i: 0,
            i_max: width as usize * height as usize,
            height,
            rows_mut,
            rows_buffer: Vec::with_capacity(height as usize),
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for TransposeMut<'a, P> {
    type Item = (u32, u32, &'a mut P);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.i_max {
            return None;
        }
        let x = (self.i / self.height as usize) as u32;
        let y = (self.i % self.height as usize) as u32;
        self.i += 1;
        let pixel = match self.rows_buffer.get_mut(y as usize) {
            None => match self.rows_mut.next() {
                Some(mut row) => {
                    let p = row.next();
                    self.rows_buffer.push(row);
                    p
                }
                _ => None,
            },
            Some(row) => row.next(),
        };

        pixel.map(|p| (x, y, p))
    }
}

pub(crate) struct Transpose<'a, P: Pixel + 'a> {
    i: usize,
    i_max: usize,
    height: u32,
    rows: Rows<'a, P>,
    rows_buffer: Vec<Pixels<'a, P>>,
}

impl<'a, P: Pixel + 'a> Transpose<'a, P> {
    /// utilizes Rows to give column based readonly access to pixel
    pub fn from_rows(rows: Rows<'a, P>, width: u32, height: u32) -> Self {
        Self {
            i: 0,
            i_max: width as usize * height as usize,
            height,
            rows,
            rows_buffer: Vec::with_capacity(height as usize),
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for Transpose<'a, P> {
    type Item = (u32, u32, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.i_max {
            return None;
        }
        let x = (self.i / self.height as usize) as u32;
        let y = (self.i % self.height as usize) as u32;
        self.i += 1;
        let pixel = match self.rows_buffer.get_mut(y as usize) {
            None => match self.rows.next() {
                Some(mut row) => {
                    let p = row.next();
                    self.rows_buffer.push(row);
                    p
                }
                _ => None,
            },
            Some(row) => row.next(),
        };

        pixel.map(|p| (x, y, p))
    }
}
