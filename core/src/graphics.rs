/// # Graphics
/// The monochrome framebuffer, one byte (0 or 1) per pixel, row major.
///
/// Coordinates wrap around the edges, so `get`/`flip` accept any `x`/`y`.
/// `dirty` records whether anything was cleared or flipped since the last
/// `set_clean`; the machine calls `set_clean` at the start of every cycle.
pub struct Graphics {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    dirty: bool,
}

impl Graphics {
    pub fn new(width: usize, height: usize) -> Self {
        Graphics {
            width,
            height,
            pixels: vec![0; width * height],
            dirty: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The whole framebuffer, indexed `y * width + x`
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = 0);
        self.dirty = true;
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[self.index(x, y)]
    }

    pub fn flip(&mut self, x: usize, y: usize) {
        let index = self.index(x, y);
        self.pixels[index] ^= 1;
        self.dirty = true;
    }

    pub fn set_clean(&mut self) {
        self.dirty = false;
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (y % self.height) * self.width + (x % self.width)
    }
}
