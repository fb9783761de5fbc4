use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is indexed as [y][x]; every cell is 0 (off) or 1 (on).
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

const CELLS: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// # Display Buffer
/// The 64x32 monochrome screen, one byte per pixel.
///
/// Sprites are 8 pixels wide and XORed onto the screen. Pixels that fall off the screen wrap
/// on the buffer's linear index `y * 64 + x` modulo 2048, so a sprite running off the right
/// edge continues at the left of the next row and one running off the bottom continues at
/// the top.
#[derive(Copy, Clone)]
pub struct DisplayBuffer {
    cells: FrameBuffer,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        DisplayBuffer {
            cells: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.cells = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// XORs `rows` (one byte per row, most significant bit leftmost) onto the screen with
    /// its top-left corner at (x, y).
    ///
    /// Returns true if any pixel that was on has been turned off.
    pub fn blit(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        let mut collision = false;

        for (row, byte) in rows.iter().enumerate() {
            for bit in 0..8 {
                let pixel = (byte >> (7 - bit)) & 1;
                if pixel == 0 {
                    continue;
                }
                let index = ((y + row) * DISPLAY_WIDTH + x + bit) % CELLS;
                let cell = &mut self.cells[index / DISPLAY_WIDTH][index % DISPLAY_WIDTH];
                collision |= *cell == 1;
                *cell ^= 1;
            }
        }

        collision
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.cells[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    /// A copy of the current screen contents
    pub fn snapshot(&self) -> FrameBuffer {
        self.cells
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.cells
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}
