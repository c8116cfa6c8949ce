use image::imageops::FilterType;
use image::DynamicImage;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use super::{AssetError, ImageSource};

/// Pixels with less alpha than this are left to the card background.
const ALPHA_CUTOFF: u8 = 128;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "▀";

/// An image sampled down to a grid of terminal cells, two pixels per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    cols: u16,
    rows: u16,
    /// `cols * rows * 2` pixels, row-major; `None` is transparent.
    pixels: Vec<Option<Color>>,
}

impl Thumbnail {
    /// Decodes a local image and fits it into `cols` x `rows` cells.
    pub fn load(source: &ImageSource, cols: u16, rows: u16) -> Result<Self, AssetError> {
        match source {
            ImageSource::Remote(url) => Err(AssetError::Remote { url: url.clone() }),
            ImageSource::Local(path) => {
                let image = image::open(path).map_err(|e| AssetError::Decode {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(Self::from_image(&image, cols, rows))
            }
        }
    }

    /// Fits `image` into the cell grid, keeping its aspect ratio and centring it.
    pub fn from_image(image: &DynamicImage, cols: u16, rows: u16) -> Self {
        let width = u32::from(cols);
        let height = u32::from(rows) * 2;
        let mut pixels = vec![None; (width * height) as usize];
        if width == 0 || height == 0 {
            return Self { cols, rows, pixels };
        }

        let scaled = image.resize(width, height, FilterType::Triangle).to_rgba8();
        let offset_x = (width - scaled.width().min(width)) / 2;
        let offset_y = (height - scaled.height().min(height)) / 2;

        for (x, y, pixel) in scaled.enumerate_pixels() {
            let (px, py) = (x + offset_x, y + offset_y);
            if px >= width || py >= height {
                continue;
            }
            let [r, g, b, a] = pixel.0;
            if a >= ALPHA_CUTOFF {
                pixels[(py * width + px) as usize] = Some(Color::Rgb(r, g, b));
            }
        }

        Self { cols, rows, pixels }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Colours of the (top, bottom) pixels behind cell `(col, row)`.
    pub fn cell(&self, col: u16, row: u16) -> Option<(Option<Color>, Option<Color>)> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let width = usize::from(self.cols);
        let top = usize::from(row) * 2 * width + usize::from(col);
        let bottom = top + width;
        Some((self.pixels[top], self.pixels[bottom]))
    }

    /// Paints the thumbnail centred in `area`; transparent pixels take `backdrop`.
    pub fn render(&self, area: Rect, buf: &mut Buffer, backdrop: Color) {
        let cols = self.cols.min(area.width);
        let rows = self.rows.min(area.height);
        let left = area.x + (area.width - cols) / 2;
        let top = area.y + (area.height - rows) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let Some((upper, lower)) = self.cell(col, row) else {
                    continue;
                };
                if upper.is_none() && lower.is_none() {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((left + col, top + row)) {
                    cell.set_symbol(HALF_BLOCK)
                        .set_fg(upper.unwrap_or(backdrop))
                        .set_bg(lower.unwrap_or(backdrop));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    #[test]
    fn square_image_fills_square_grid() {
        let thumb = Thumbnail::from_image(&solid(8, 8, [255, 0, 0, 255]), 4, 2);
        for row in 0..2 {
            for col in 0..4 {
                assert_eq!(
                    thumb.cell(col, row),
                    Some((Some(Color::Rgb(255, 0, 0)), Some(Color::Rgb(255, 0, 0))))
                );
            }
        }
    }

    #[test]
    fn wide_grid_centres_narrow_image() {
        let thumb = Thumbnail::from_image(&solid(4, 4, [0, 0, 255, 255]), 8, 2);
        assert_eq!(thumb.cell(0, 0), Some((None, None)));
        assert_eq!(
            thumb.cell(4, 1),
            Some((Some(Color::Rgb(0, 0, 255)), Some(Color::Rgb(0, 0, 255))))
        );
        assert_eq!(thumb.cell(7, 1), Some((None, None)));
    }

    #[test]
    fn transparent_pixels_are_skipped() {
        let thumb = Thumbnail::from_image(&solid(4, 4, [10, 20, 30, 0]), 2, 1);
        assert_eq!(thumb.cell(0, 0), Some((None, None)));
    }

    #[test]
    fn out_of_range_cell_is_none() {
        let thumb = Thumbnail::from_image(&solid(2, 2, [1, 2, 3, 255]), 2, 1);
        assert_eq!(thumb.cell(2, 0), None);
        assert_eq!(thumb.cell(0, 1), None);
    }

    #[test]
    fn remote_source_is_rejected() {
        let err = Thumbnail::load(&ImageSource::Remote("https://x/y.png".into()), 4, 2)
            .unwrap_err();
        assert!(matches!(err, AssetError::Remote { .. }));
    }

    #[test]
    fn render_paints_half_blocks() {
        let thumb = Thumbnail::from_image(&solid(2, 2, [9, 9, 9, 255]), 2, 1);
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        thumb.render(area, &mut buf, Color::White);
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(1, 0)].symbol(), HALF_BLOCK);
        assert_eq!(buf[(1, 0)].fg, Color::Rgb(9, 9, 9));
        assert_eq!(buf[(3, 0)].symbol(), " ");
    }
}
