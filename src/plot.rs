//! Grouped boxplot of log domain counts per degree group.

use crate::config::AnalysisConfig;
use crate::dataset::{BoxStats, Dataset};
use crate::error::{ErrorCode, PpiError, Result};
use crate::network::DegreeGroup;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Category order along the x axis; matches the sorted order of the labels.
const GROUP_ORDER: [DegreeGroup; 2] = [DegreeGroup::LowDegree, DegreeGroup::HighDegree];

const BOX_WIDTH: f64 = 0.8;
const X_DESC: &str = "Node degree";
const Y_DESC: &str = "log(Number of protein domains)";

/// Fill colours for the two boxes.
const PALETTE: [RGBColor; 2] = [RGBColor(76, 114, 176), RGBColor(221, 132, 82)];
const GRID: RGBColor = RGBColor(204, 204, 204);
const EDGE: RGBColor = RGBColor(61, 61, 61);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            other => Err(PpiError::output_with_code(
                ErrorCode::OUTPUT_UNSUPPORTED_FORMAT,
                format!(
                    "unsupported image extension {:?}, expected .png or .svg",
                    other.unwrap_or("")
                ),
            )
            .with_path(path)),
        }
    }
}

/// Image geometry for a figure of `width_in` x `height_in` inches at `dpi`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
    pub threshold: usize,
}

impl PlotSettings {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let (width, height) = config.pixel_size();
        Self {
            width,
            height,
            dpi: config.dpi,
            threshold: config.degree_threshold,
        }
    }

    /// Points to pixels at the configured resolution.
    fn px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    fn px_u32(&self, points: f64) -> u32 {
        self.px(points).round().max(1.0) as u32
    }
}

struct GroupBox {
    label: String,
    stats: Option<BoxStats>,
}

/// Renders one box per degree group and writes the image to `path`.
pub fn render_boxplot(dataset: &Dataset, path: &Path, settings: &PlotSettings) -> Result<()> {
    let format = ImageFormat::from_path(path)?;
    check_writable(path)?;

    if dataset.is_empty() {
        return Err(PpiError::output_with_code(
            ErrorCode::OUTPUT_EMPTY_DATASET,
            "no protein with a known domain is left to plot",
        )
        .with_path(path));
    }

    let boxes: Vec<GroupBox> = GROUP_ORDER
        .iter()
        .map(|group| GroupBox {
            label: group.label(settings.threshold),
            stats: BoxStats::from_values(&dataset.log_values(*group)),
        })
        .collect();
    for b in &boxes {
        match &b.stats {
            Some(stats) => debug!(
                "Group {}: n={} median={:.3} IQR=[{:.3}, {:.3}]",
                b.label, stats.count, stats.median, stats.q1, stats.q3
            ),
            None => debug!("Group {} has no proteins with known domains", b.label),
        }
    }

    let size = (settings.width, settings.height);
    let drawn = match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw(root, &boxes, settings)
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw(root, &boxes, settings)
        }
    };
    drawn.map_err(|message| {
        PpiError::output_with_code(ErrorCode::OUTPUT_RENDER_FAILED, message).with_path(path)
    })?;

    info!("Wrote {}x{} boxplot to {}", settings.width, settings.height, path.display());
    Ok(())
}

fn check_writable(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(PpiError::output_with_code(
            ErrorCode::OUTPUT_PATH_UNWRITABLE,
            "output path is a directory",
        )
        .with_path(path));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(PpiError::output_with_code(
                ErrorCode::OUTPUT_PATH_UNWRITABLE,
                format!("directory {} does not exist", parent.display()),
            )
            .with_path(path))
        }
        _ => Ok(()),
    }
}

fn y_range(boxes: &[GroupBox]) -> (f64, f64) {
    let (lo, hi) = boxes
        .iter()
        .filter_map(|b| b.stats.as_ref())
        .map(BoxStats::extent)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
            (lo.min(a), hi.max(b))
        });
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 0.5 };
    (lo - pad, hi + pad)
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    boxes: &[GroupBox],
    settings: &PlotSettings,
) -> std::result::Result<(), String> {
    let fail = |e: DrawingAreaErrorKind<DB::ErrorType>| format!("failed to draw boxplot: {}", e);

    let font = settings.px(15.0);
    let line = settings.px_u32(1.25);
    let (y_lo, y_hi) = y_range(boxes);
    let labels: Vec<String> = boxes.iter().map(|b| b.label.clone()).collect();

    root.fill(&WHITE).map_err(fail)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(settings.px_u32(12.0))
        .x_label_area_size(settings.px_u32(48.0))
        .y_label_area_size(settings.px_u32(64.0))
        .build_cartesian_2d(
            -0.5f64..boxes.len() as f64 - 0.5,
            y_lo..y_hi,
        )
        .map_err(fail)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        // Half-unit ticks; only the box centres get a label.
        .x_labels(boxes.len() * 4)
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 {
                labels.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|y| format!("{:.1}", y))
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .label_style(("sans-serif", font))
        .axis_desc_style(("sans-serif", font))
        .bold_line_style(GRID.stroke_width(line))
        .light_line_style(WHITE.stroke_width(1))
        .axis_style(EDGE.stroke_width(line))
        .draw()
        .map_err(fail)?;

    let half = BOX_WIDTH / 2.0;
    for (idx, group) in boxes.iter().enumerate() {
        let Some(stats) = &group.stats else {
            continue;
        };
        let x = idx as f64;
        let edge = EDGE.stroke_width(line);

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - half, stats.q1), (x + half, stats.q3)],
                PALETTE[idx % PALETTE.len()].mix(0.85).filled(),
            )))
            .map_err(fail)?;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - half, stats.q1), (x + half, stats.q3)],
                edge,
            )))
            .map_err(fail)?;

        let cap = half / 2.0;
        let segments = vec![
            vec![(x - half, stats.median), (x + half, stats.median)],
            vec![(x, stats.q1), (x, stats.lower_whisker)],
            vec![(x, stats.q3), (x, stats.upper_whisker)],
            vec![(x - cap, stats.lower_whisker), (x + cap, stats.lower_whisker)],
            vec![(x - cap, stats.upper_whisker), (x + cap, stats.upper_whisker)],
        ];
        chart
            .draw_series(segments.into_iter().map(|points| PathElement::new(points, edge)))
            .map_err(fail)?;

        let marker = settings.px(2.5).round() as i32;
        chart
            .draw_series(
                stats
                    .outliers
                    .iter()
                    .map(|&y| Circle::new((x, y), marker, EDGE.filled())),
            )
            .map_err(fail)?;
    }

    root.present().map_err(fail)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings() -> PlotSettings {
        PlotSettings {
            width: 200,
            height: 200,
            dpi: 40,
            threshold: 100,
        }
    }

    fn rows(high: &[usize], low: &[usize]) -> Dataset {
        let high_ids: Vec<String> = (0..high.len()).map(|i| format!("H{}", i)).collect();
        let low_ids: Vec<String> = (0..low.len()).map(|i| format!("L{}", i)).collect();
        crate::dataset::assemble(&high_ids, high, &low_ids, low)
            .unwrap()
            .without_zero_counts()
    }

    fn assert_written(path: &Path) {
        let meta = std::fs::metadata(path).unwrap();
        assert!(meta.len() > 0, "{} is empty", path.display());
    }

    #[test]
    fn test_renders_png_and_svg() {
        let dir = TempDir::new().unwrap();
        let dataset = rows(&[3, 5], &[1, 2, 2, 9]);

        for name in ["plot.png", "plot.svg"] {
            let path = dir.path().join(name);
            render_boxplot(&dataset, &path, &settings()).unwrap();
            assert_written(&path);
        }
    }

    #[test]
    fn test_renders_single_group() {
        let dir = TempDir::new().unwrap();
        let dataset = rows(&[], &[1, 1, 4]);
        assert!(dataset.log_values(DegreeGroup::HighDegree).is_empty());

        let path = dir.path().join("low_only.png");
        render_boxplot(&dataset, &path, &settings()).unwrap();
        assert_written(&path);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("a.png")).unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("a.SVG")).unwrap(), ImageFormat::Svg);
        let err = ImageFormat::from_path(Path::new("a.pdf")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::OUTPUT_UNSUPPORTED_FORMAT);
        assert!(ImageFormat::from_path(Path::new("plot")).is_err());
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = render_boxplot(&Dataset::default(), &dir.path().join("p.png"), &settings())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::OUTPUT_EMPTY_DATASET);
        assert!(!dir.path().join("p.png").exists());
    }

    #[test]
    fn test_missing_directory_is_unwritable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("p.png");
        let err = render_boxplot(&Dataset::default(), &path, &settings()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::OUTPUT_PATH_UNWRITABLE);
    }

    #[test]
    fn test_directory_target_is_unwritable() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("plot.png");
        std::fs::create_dir(&target).unwrap();
        let err = render_boxplot(&Dataset::default(), &target, &settings()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::OUTPUT_PATH_UNWRITABLE);
    }

    #[test]
    fn test_settings_scale_with_dpi() {
        let config = AnalysisConfig {
            dpi: 144,
            width_in: 5.0,
            height_in: 4.0,
            ..AnalysisConfig::default()
        };
        let settings = PlotSettings::from_config(&config);
        assert_eq!((settings.width, settings.height), (720, 576));
        assert_eq!(settings.px(36.0), 72.0);
        assert_eq!(settings.px_u32(0.1), 1);
    }

    #[test]
    fn test_y_range_pads_flat_data() {
        let boxes = vec![GroupBox {
            label: "=< 100".to_string(),
            stats: BoxStats::from_values(&[0.0, 0.0]),
        }];
        assert_eq!(y_range(&boxes), (-0.5, 0.5));
    }
}
