use sdl2::pixels::{Color, PixelFormatEnum};
use thiserror::Error;

use chip8_core::Graphics;

/// Intensity of a lit pixel on each of the R, G and B channels
const LIT: u8 = 200;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl error: {0}")]
    Sdl(String),

    #[error("cannot render a {frame:?} frame on a {display:?} display")]
    FrameSize {
        frame: (usize, usize),
        display: (usize, usize),
    },

    #[error(transparent)]
    Window(#[from] sdl2::video::WindowBuildError),

    #[error(transparent)]
    Canvas(#[from] sdl2::IntegerOrSdlError),

    #[error(transparent)]
    Texture(#[from] sdl2::render::TextureValueError),
}

pub type Result<T> = std::result::Result<T, DisplayError>;

/// # Display
/// The Chip-8 display is a grid of black/white pixels, 64x32 on a standard machine.
/// The on/off state of these pixels is encoded as 1/0 respectively in the machine's `Graphics`.
/// The display only gets a call to `render` when the Chip-8 framebuffer is updated.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `width` the horizontal size of the display measured in pixels
    /// * `height` the vertical size of the display measured in pixels
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, width: usize, height: usize, scale: usize) -> Result<Self> {
        let video_subsystem = sdl.video().map_err(DisplayError::Sdl)?;
        let window = video_subsystem
            .window("Chip-8", (width * scale) as u32, (height * scale) as u32)
            .position_centered()
            .opengl()
            .build()?;
        let canvas = window.into_canvas().build()?;

        let mut display = Display {
            canvas,
            width,
            height,
        };
        display.clear();
        Ok(display)
    }

    /// Blanks the window
    pub fn clear(&mut self) {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
        self.canvas.present();
    }

    /// Formats the Chip-8 framebuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` the machine's framebuffer, the same size as this display
    pub fn render(&mut self, frame: &Graphics) -> Result<()> {
        if (frame.width(), frame.height()) != (self.width, self.height) {
            return Err(DisplayError::FrameSize {
                frame: (frame.width(), frame.height()),
                display: (self.width, self.height),
            });
        }
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator.create_texture_streaming(
            PixelFormatEnum::RGB24,
            self.width as u32,
            self.height as u32,
        )?;

        let pixels = frame_to_rgb24(frame);
        let width = self.width;
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                // rows in the texture may be padded out to `pitch` bytes
                for (y, row) in pixels.chunks(width * 3).enumerate() {
                    buffer[y * pitch..y * pitch + row.len()].copy_from_slice(row);
                }
            })
            .map_err(DisplayError::Sdl)?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(DisplayError::Sdl)?;
        self.canvas.present();
        Ok(())
    }
}

/// Formats a Chip-8 framebuffer for rendering as an SDL2 texture.
///
/// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
///
/// This creates a grey on black rendering by:
/// - Walking the framebuffer's rows in order
/// - Triplicating each pixel to represent its RGB values
/// - Multiplying each value by `LIT` to convert from a binary state to an intensity
///
/// # Arguments
/// * `frame` a Chip-8 framebuffer
pub fn frame_to_rgb24(frame: &Graphics) -> Vec<u8> {
    frame
        .pixels()
        .iter()
        .flat_map(|&pixel| std::iter::repeat(pixel * LIT).take(3))
        .collect()
}

#[cfg(test)]
mod test_display {
    use super::*;
    use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

    #[test]
    fn test_frame_to_rgb24() {
        let mut frame = Graphics::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
        frame.flip(1, 0);
        frame.flip(0, 1);
        let frame = frame_to_rgb24(&frame);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 200, 200, 200]);
        expected[192..198].copy_from_slice(&[200, 200, 200, 0, 0, 0]);

        assert_eq!(frame, expected);
    }

    #[test]
    fn test_frame_to_rgb24_small_frame() {
        let mut frame = Graphics::new(2, 1);
        frame.flip(0, 0);
        assert_eq!(frame_to_rgb24(&frame), vec![200, 200, 200, 0, 0, 0]);
    }
}
