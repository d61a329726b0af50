//! Integration tests for the tile window coordinator.

mod common;

use common::MockDataset;
use raster_common::{
    CancelFlag, ColorEntry, ColorMap, GeoTransform, RasterError, Rect, Size, TileAddress,
};
use raster_processor::{GridResampler, ImageResampler, ProcessorConfig};
use tile_renderer::{PixelRenderer, RenderError, ResampleStrategy, TileRenderer};

const FILL: u32 = 0xFFFFFFFF;

fn tiles() -> TileRenderer {
    TileRenderer::new(PixelRenderer::default(), ProcessorConfig::default())
}

#[test]
fn uncovered_tile_is_fill_colored_and_reads_nothing() {
    let dataset = MockDataset::uniform(Size::square(1000), 7);
    // internal zoom 1 == requested zoom, so the window is 600x600 at
    // (-600, 0): entirely left of the dataset.
    let tile = TileAddress::new(-1, 0, 1, 600);

    let pixels = tiles().render_tile(&dataset, &tile, false).unwrap();

    assert_eq!(pixels.len(), 600 * 600);
    assert!(pixels.iter().all(|&p| p == FILL));
    assert_eq!(dataset.read_count(), 0);
}

#[test]
fn uncovered_tile_with_alpha_is_transparent() {
    let dataset = MockDataset::uniform(Size::square(1000), 7);
    let tile = TileAddress::new(5, 5, 1, 600);

    let pixels = tiles().render_tile(&dataset, &tile, true).unwrap();
    assert!(pixels.iter().all(|&p| p == 0x00000000));
    assert_eq!(dataset.read_count(), 0);
}

#[test]
fn straddling_the_right_edge_clips_reads_and_composites() {
    // 1000x1000 dataset, read amount 600 at tileX=1: the candidate window
    // x range [600, 1200) clips to [600, 1000).
    let dataset = MockDataset::uniform(Size::square(1000), 42);
    let tile = TileAddress::new(1, 0, 1, 600);

    let pixels = tiles().render_tile(&dataset, &tile, false).unwrap();

    assert_eq!(dataset.read_count(), 1);
    let query = &dataset.queries()[0];
    assert_eq!(query.window, Rect::new(600, 0, 400, 600));
    assert_eq!(query.target_size, Size::new(400, 600));

    // Uniform data renders as the degenerate gray; the left 400/600 of
    // the tile carries it, the remainder is fill.
    for y in 0..600 {
        for x in 0..600 {
            let pixel = pixels[y * 600 + x];
            if x < 400 {
                assert_eq!(pixel, 0xFF808080, "covered at ({x},{y})");
            } else {
                assert_eq!(pixel, FILL, "fill at ({x},{y})");
            }
        }
    }
}

#[test]
fn fully_covered_tile_renders_every_pixel() {
    let dataset = MockDataset::uniform(Size::square(1000), 9);
    let tile = TileAddress::new(0, 0, 1, 600);

    let pixels = tiles().render_tile(&dataset, &tile, false).unwrap();

    assert_eq!(dataset.read_count(), 1);
    assert_eq!(dataset.queries()[0].window, Rect::new(0, 0, 600, 600));
    assert_eq!(pixels.len(), 600 * 600);
    assert!(pixels.iter().all(|&p| p == 0xFF808080));
}

#[test]
fn every_strategy_downscales_a_zoomed_out_tile() {
    // Internal zoom 2, requested zoom 1: scale factor 2, so a 256 tile
    // reads a 512x512 window.
    let strategies = [
        ResampleStrategy::ReaderSide,
        ResampleStrategy::PixelDomain,
        ResampleStrategy::SampleDomain(Box::new(GridResampler)),
        ResampleStrategy::SampleDomain(Box::new(ImageResampler)),
    ];

    for strategy in strategies {
        let dataset = MockDataset::uniform(Size::square(1024), 77);
        let tile = TileAddress::new(0, 0, 1, 256);
        let renderer = tiles().with_internal_zoom(2).with_strategy(strategy);

        let pixels = renderer.render_tile(&dataset, &tile, false).unwrap();

        assert_eq!(dataset.read_count(), 1);
        assert_eq!(dataset.queries()[0].window, Rect::new(0, 0, 512, 512));
        assert_eq!(pixels.len(), 256 * 256);
        assert!(pixels.iter().all(|&p| p == 0xFF808080));
    }
}

#[test]
fn rgb_dataset_composes_three_bands() {
    let dataset = MockDataset::rgb(Size::square(1000), 10, 20, 30);
    let tile = TileAddress::new(0, 0, 1, 600);

    let pixels = tiles().render_tile(&dataset, &tile, false).unwrap();
    assert!(pixels.iter().all(|&p| p == 0xFF0A141E));
}

#[test]
fn colormap_tiles_are_continuous_across_a_partial_seam() {
    // Gradient along x, colormapped (no per-tile normalization). The
    // first covered column of the partial tile must continue exactly
    // where the full tile's data ends.
    let map = ColorMap::new(vec![
        ColorEntry::new(0.0, 0xFF000011),
        ColorEntry::new(50.0, 0xFF000022),
        ColorEntry::new(100.0, 0xFF000033),
        ColorEntry::new(150.0, 0xFF000044),
        ColorEntry::new(200.0, 0xFF000055),
    ])
    .unwrap();

    let dataset = MockDataset::with_values(Size::square(1000), |x, _| (x / 4) as u8);
    let renderer = TileRenderer::new(
        PixelRenderer::new(Some(map.clone())),
        ProcessorConfig::default(),
    );

    let left = renderer
        .render_tile(&dataset, &TileAddress::new(0, 0, 1, 600), false)
        .unwrap();
    let right = renderer
        .render_tile(&dataset, &TileAddress::new(1, 0, 1, 600), false)
        .unwrap();

    // Left tile's last column shows source x=599, right tile's first
    // column shows source x=600.
    assert_eq!(left[599], map.color_for_value((599 / 4) as f64));
    assert_eq!(right[0], map.color_for_value((600 / 4) as f64));
    // And the right tile's covered width is 400 columns of data.
    assert_eq!(right[399], map.color_for_value((999 / 4) as f64));
    assert_eq!(right[400], FILL);
}

#[test]
fn cancelled_render_produces_no_tile() {
    let dataset = MockDataset::uniform(Size::square(1000), 7);
    let tile = TileAddress::new(0, 0, 1, 600);

    let cancel = CancelFlag::new();
    cancel.cancel();

    let err = tiles()
        .render_tile_cancellable(&dataset, &tile, false, &cancel)
        .unwrap_err();
    assert!(matches!(err, RenderError::Raster(RasterError::Cancelled)));
}

#[test]
fn rotated_geotransform_fails_the_render() {
    let dataset = MockDataset::uniform(Size::square(100), 7)
        .with_geo_transform(GeoTransform::new([0.0, 1.0, 0.3, 0.0, 0.2, -1.0]));
    let tile = TileAddress::new(0, 0, 1, 64);

    let err = tiles().render_tile(&dataset, &tile, false).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Raster(RasterError::InvalidGeoTransform(_))
    ));
    assert_eq!(dataset.read_count(), 0);
}

#[test]
fn no_read_ever_leaves_the_dataset_bounds() {
    // The mock dataset rejects out-of-bounds windows, so sweeping tiles
    // around and past the edges exercises the clipping invariant.
    let dataset = MockDataset::uniform(Size::new(700, 500), 13);
    let renderer = tiles();

    for tx in -2..4 {
        for ty in -2..4 {
            let tile = TileAddress::new(tx, ty, 1, 256);
            let pixels = renderer.render_tile(&dataset, &tile, false).unwrap();
            assert_eq!(pixels.len(), 256 * 256, "tile {tx},{ty}");
        }
    }
}
