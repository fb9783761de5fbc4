use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use dip_core::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// An RGB color
pub type Rgb = [u8; 3];

pub const PHOSPHOR_GREEN: Rgb = [0x00, 0xFF, 0x00];
pub const AMBER: Rgb = [0xFF, 0xB0, 0x00];
pub const WHITE: Rgb = [0xFF, 0xFF, 0xFF];
pub const BLACK: Rgb = [0x00, 0x00, 0x00];

/// # Display
/// The Chip-8 display is composed of 64x32 pixels black/white pixels.
/// The on/off state of these pixels is encoded as 1/0 respectively in a 2d array of 64x32 bytes.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: WindowCanvas,
    on: Rgb,
    off: Rgb,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        let mut display = Display {
            canvas,
            on: PHOSPHOR_GREEN,
            off: BLACK,
        };
        display.render(&[[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT])?;
        Ok(display)
    }

    /// Changes the colors used for lit and unlit pixels.
    pub fn set_palette(&mut self, on: Rgb, off: Rgb) {
        self.on = on;
        self.off = off;
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB
    /// pixels, so the frame buffer's rows are flattened and each cell becomes three bytes.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    /// * `on` the color of lit pixels
    /// * `off` the color of unlit pixels
    fn frame_to_sdl_texture(frame: &FrameBuffer, on: Rgb, off: Rgb) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|&cell| {
                let color = if cell == 1 { on } else { off };
                color.to_vec()
            })
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = Display::frame_to_sdl_texture(frame, self.on, self.off);
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (y, row) in pixels.chunks(DISPLAY_WIDTH * 3).enumerate() {
                buffer[y * pitch..y * pitch + row.len()].copy_from_slice(row);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
