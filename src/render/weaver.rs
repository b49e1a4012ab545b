//! Tartan weaver - turns a sett into a square raster.
//!
//! The warp is a square of vertical colour bands, one band per thread
//! with width `max(1, round(count * scale))`. The weft is the same square
//! with its axes swapped. Each pixel of the cloth is the saturating sum
//! of warp and weft, which approximates the colour seen where two
//! threads cross. The cloth is then resampled to the requested size.
//!
//! Thread widths and their sum are checked, so an absurd count or scale
//! is a dimension error rather than a failed allocation.

use crate::catalog::ColourCatalog;
use crate::error::{Result, TartanError};
use crate::types::{Colour, Pattern, Sett};

use super::grid::{nearest, Grid};

/// Largest side, in pixels, of any woven image.
pub const MAX_SIDE: u32 = 16_384;

/// A finished square image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    grid: Grid<Colour>,
}

impl RasterImage {
    /// Wrap a square grid. Returns `None` if the grid is not square.
    pub fn from_grid(grid: Grid<Colour>) -> Option<Self> {
        (grid.width() == grid.height()).then_some(Self { grid })
    }

    /// Side length in pixels.
    pub fn side(&self) -> usize {
        self.grid.width()
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.grid.get(x, y).copied()
    }

    pub fn grid(&self) -> &Grid<Colour> {
        &self.grid
    }

    /// Flat RGB buffer, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.grid
            .cells()
            .iter()
            .flat_map(|colour| colour.to_array())
            .collect()
    }
}

/// Weaves setts using colours from a catalog.
#[derive(Debug, Clone, Copy)]
pub struct TartanWeaver<'a> {
    colours: &'a ColourCatalog,
}

impl<'a> TartanWeaver<'a> {
    pub fn new(colours: &'a ColourCatalog) -> Self {
        Self { colours }
    }

    /// Mirror `pattern` into a sett and weave it.
    pub fn render(&self, pattern: &Pattern, size: u32, scale: f64) -> Result<RasterImage> {
        self.weave(&Sett::from_pattern(pattern), size, scale)
    }

    /// Weave a sett into a `size x size` image.
    ///
    /// The natural-size cloth is never built. Each output column is mapped
    /// to the natural pixel under its centre and that pixel's thread is
    /// found by binary search over the thread edges, so memory stays at
    /// `size * size` however wide the sett is.
    pub fn weave(&self, sett: &Sett, size: u32, scale: f64) -> Result<RasterImage> {
        check_size(size)?;
        check_scale(scale)?;

        let edges = self.thread_edges(sett, scale)?;
        let colours = self.thread_colours(sett)?;
        let natural = natural_width(&edges)?;

        let size = size as usize;
        let row: Vec<Colour> = (0..size)
            .map(|x| {
                let src = nearest(x as u64, size as u64, natural);
                colours[edges.partition_point(|&edge| edge <= src)]
            })
            .collect();

        // Both axes share one index map, so the resampled warp row
        // interlaced with itself equals the resampled full-size cloth.
        let warp = Grid::from_fn(size, 1, |x, _| row[x])
            .resize_nearest(size, size)
            .ok_or_else(|| TartanError::dimension("Cannot resample an empty sett"))?;
        interlace(warp)
    }

    /// Weave a sett at its natural size, without resampling.
    ///
    /// The side is the sum of the thread widths at `scale`, at most
    /// [`MAX_SIDE`].
    pub fn weave_full(&self, sett: &Sett, scale: f64) -> Result<RasterImage> {
        check_scale(scale)?;

        let edges = self.thread_edges(sett, scale)?;
        let colours = self.thread_colours(sett)?;
        let natural = natural_width(&edges)?;
        if natural > u64::from(MAX_SIDE) {
            return Err(TartanError::Dimension {
                message: format!(
                    "Natural cloth is {} pixels wide, the limit is {}",
                    natural, MAX_SIDE
                ),
                help: Some("Use a smaller --scale, or weave to a fixed --size".to_string()),
            });
        }

        let side = natural as usize;
        let warp = Grid::from_fn(side, side, |x, _| {
            colours[edges.partition_point(|&edge| edge <= x as u64)]
        });
        interlace(warp)
    }

    /// Side length of the unresampled cloth.
    pub fn natural_side(&self, sett: &Sett, scale: f64) -> Result<u64> {
        check_scale(scale)?;
        Ok(self.thread_edges(sett, scale)?.last().copied().unwrap_or(0))
    }

    /// Right edge of each thread in natural pixels, exclusive.
    fn thread_edges(&self, sett: &Sett, scale: f64) -> Result<Vec<u64>> {
        let mut edge = 0u64;
        sett.widths(scale)?
            .into_iter()
            .map(|width| {
                edge = edge.checked_add(width).ok_or_else(|| TartanError::Dimension {
                    message: format!("The sett is too wide to weave at scale {}", scale),
                    help: Some("Use smaller thread counts or a smaller --scale".to_string()),
                })?;
                Ok(edge)
            })
            .collect()
    }

    /// The catalog colour of every thread in the sett.
    fn thread_colours(&self, sett: &Sett) -> Result<Vec<Colour>> {
        sett.codes()
            .iter()
            .map(|code| {
                self.colours
                    .get(code)
                    .ok_or_else(|| TartanError::MissingColour { code: code.clone() })
            })
            .collect()
    }
}

/// Cross a warp with its own transpose.
fn interlace(warp: Grid<Colour>) -> Result<RasterImage> {
    let weft = warp.transpose();
    let cloth = warp
        .zip_with(&weft, |a, b| *a + *b)
        .ok_or_else(|| TartanError::dimension("Warp and weft differ in size"))?;

    RasterImage::from_grid(cloth).ok_or_else(|| TartanError::dimension("Woven cloth is not square"))
}

fn natural_width(edges: &[u64]) -> Result<u64> {
    match edges.last() {
        Some(&width) if width > 0 => Ok(width),
        _ => Err(TartanError::Dimension {
            message: "Nothing to weave: the sett has no threads".to_string(),
            help: Some("Check that the thread count names known colours".to_string()),
        }),
    }
}

fn check_size(size: u32) -> Result<()> {
    if size == 0 || size > MAX_SIDE {
        return Err(TartanError::Dimension {
            message: format!("Output size must be between 1 and {} pixels, got {}", MAX_SIDE, size),
            help: Some("Pass a --size such as 300 or 900".to_string()),
        });
    }
    Ok(())
}

fn check_scale(scale: f64) -> Result<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(TartanError::Dimension {
            message: format!("Scale must be a positive number, got {}", scale),
            help: Some("Pass a positive --scale, e.g. 1 or 2.5".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_threadcount;
    use pretty_assertions::assert_eq;

    const GREEN: Colour = Colour::rgb(0, 128, 0);
    const BLACK: Colour = Colour::rgb(0, 0, 0);
    const BLUE: Colour = Colour::rgb(0, 0, 255);
    const RED: Colour = Colour::rgb(255, 0, 0);

    fn basic() -> ColourCatalog {
        ColourCatalog::from_json(
            "test",
            r#"{"G": [0, 128, 0], "K": [0, 0, 0], "B": [0, 0, 255], "R": [255, 0, 0]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_weave_full_interlaces_warp_and_weft() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let sett = Sett::from_pattern(&parse_threadcount("R1 B2", &colours).unwrap());

        // R1 B2 R1 -> bands R B B R
        let cloth = weaver.weave_full(&sett, 1.0).unwrap();
        assert_eq!(cloth.side(), 4);

        assert_eq!(cloth.get(0, 0), Some(RED));
        assert_eq!(cloth.get(1, 1), Some(BLUE + BLUE));
        assert_eq!(cloth.get(1, 0), Some(Colour::rgb(255, 0, 255)));
        assert_eq!(cloth.get(0, 2), Some(Colour::rgb(255, 0, 255)));
        assert_eq!(cloth.get(3, 3), Some(RED));
    }

    #[test]
    fn test_cloth_is_symmetric() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let pattern = parse_threadcount("G1 K6 B3 R1", &colours).unwrap();
        let image = weaver.render(&pattern, 50, 1.0).unwrap();

        for y in 0..50 {
            for x in 0..50 {
                assert_eq!(image.get(x, y), image.get(y, x));
            }
        }
    }

    #[test]
    fn test_render_matches_full_size_resample() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let sett = Sett::from_pattern(&parse_threadcount("G1 K6 B3 R1", &colours).unwrap());

        for (size, scale) in [(7, 1.0), (30, 1.0), (64, 2.0), (5, 0.5), (100, 3.5)] {
            let direct = weaver.weave(&sett, size, scale).unwrap();
            let full = weaver.weave_full(&sett, scale).unwrap();
            let resampled = full
                .grid()
                .resize_nearest(size as usize, size as usize)
                .unwrap();
            assert_eq!(direct.grid(), &resampled, "size {} scale {}", size, scale);
        }
    }

    #[test]
    fn test_output_side_equals_requested_size() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let pattern = parse_threadcount("G1 K6 B3 R1", &colours).unwrap();

        for size in [1, 3, 23, 24, 900] {
            let image = weaver.render(&pattern, size, 1.0).unwrap();
            assert_eq!(image.side(), size as usize);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let pattern = parse_threadcount("G1 K6 B3 R1", &colours).unwrap();

        let a = weaver.render(&pattern, 120, 2.0).unwrap();
        let b = weaver.render(&pattern, 120, 2.0).unwrap();
        assert_eq!(a.to_rgb_bytes(), b.to_rgb_bytes());
    }

    #[test]
    fn test_saturating_channels() {
        let colours =
            ColourCatalog::from_json("test", r#"{"W": [250, 250, 250], "Y": [200, 200, 0]}"#)
                .unwrap();
        let weaver = TartanWeaver::new(&colours);
        let pattern = parse_threadcount("W2 Y3", &colours).unwrap();
        let image = weaver.weave_full(&Sett::from_pattern(&pattern), 1.0).unwrap();

        // Any white crossing saturates fully; yellow on yellow saturates R and G.
        assert_eq!(image.get(0, 0), Some(Colour::rgb(255, 255, 255)));
        assert_eq!(image.get(3, 3), Some(Colour::rgb(255, 255, 0)));
        assert_eq!(image.get(0, 3), Some(Colour::rgb(255, 255, 250)));
    }

    #[test]
    fn test_tiny_scale_keeps_every_thread() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let sett = Sett::from_pattern(&parse_threadcount("G1 K6 B3 R1", &colours).unwrap());
        assert_eq!(weaver.natural_side(&sett, 0.01).unwrap(), 7);
        assert_eq!(weaver.natural_side(&sett, 1.0).unwrap(), 21);
    }

    #[test]
    fn test_black_is_transparent_to_blending() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let pattern = parse_threadcount("K1 G1", &colours).unwrap();
        let cloth = weaver.weave_full(&Sett::from_pattern(&pattern), 1.0).unwrap();

        assert_eq!(cloth.get(0, 0), Some(BLACK));
        assert_eq!(cloth.get(1, 0), Some(GREEN));
    }

    #[test]
    fn test_zero_size_rejected() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let pattern = parse_threadcount("G1", &colours).unwrap();
        let err = weaver.render(&pattern, 0, 1.0).unwrap_err();
        assert!(matches!(err, TartanError::Dimension { .. }));
    }

    #[test]
    fn test_bad_scale_rejected() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let pattern = parse_threadcount("G1", &colours).unwrap();

        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(weaver.render(&pattern, 10, scale).is_err());
        }
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let err = weaver.render(&Pattern::default(), 10, 1.0).unwrap_err();
        assert!(matches!(err, TartanError::Dimension { .. }));
        assert!(err.is_render_error());
    }

    #[test]
    fn test_sett_with_foreign_colour() {
        let colours = basic();
        let other = ColourCatalog::from_json("other", r#"{"Z": [1, 2, 3]}"#).unwrap();
        let pattern = parse_threadcount("Z2", &other).unwrap();

        let err = TartanWeaver::new(&colours).render(&pattern, 10, 1.0).unwrap_err();
        assert!(matches!(err, TartanError::MissingColour { ref code } if code == "Z"));
    }

    #[test]
    fn test_huge_thread_count_is_dimension_error() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);

        for text in ["G1e300 K1", "G1e300"] {
            let pattern = parse_threadcount(text, &colours).unwrap();
            let err = weaver.render(&pattern, 10, 1.0).unwrap_err();
            assert!(matches!(err, TartanError::Dimension { .. }), "{}", text);
            assert!(err.is_render_error());
        }
    }

    #[test]
    fn test_huge_scale_is_dimension_error() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let pattern = parse_threadcount("G1 K6", &colours).unwrap();

        // Every width fits in a u64 but their sum does not.
        let err = weaver.render(&pattern, 10, 3e18).unwrap_err();
        assert!(matches!(err, TartanError::Dimension { .. }));

        let err = weaver.render(&pattern, 10, 1e20).unwrap_err();
        assert!(matches!(err, TartanError::Dimension { .. }));

        let sett = Sett::from_pattern(&pattern);
        assert!(weaver.natural_side(&sett, 3e18).is_err());
    }

    #[test]
    fn test_large_scale_weaves_at_requested_size() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let pattern = parse_threadcount("G1 K6", &colours).unwrap();

        // G K G at 1e18 pixels per thread: 1e18, 6e18, 1e18 wide
        let image = weaver.render(&pattern, 8, 1e18).unwrap();
        assert_eq!(image.side(), 8);
        assert_eq!(image.get(0, 0), Some(GREEN + GREEN));
        assert_eq!(image.get(4, 4), Some(BLACK));
        assert_eq!(image.get(7, 4), Some(GREEN));

        let image = weaver.render(&pattern, 10, 1e9).unwrap();
        assert_eq!(image.side(), 10);
    }

    #[test]
    fn test_natural_size_limit() {
        let colours = basic();
        let weaver = TartanWeaver::new(&colours);
        let sett = Sett::from_pattern(&parse_threadcount("G1 K6", &colours).unwrap());

        let err = weaver.weave_full(&sett, 1e9).unwrap_err();
        assert!(matches!(err, TartanError::Dimension { .. }));
        assert!(weaver.weave(&sett, MAX_SIDE + 1, 1.0).is_err());
        assert!(weaver.weave_full(&sett, 2.0).is_ok());
    }
}
