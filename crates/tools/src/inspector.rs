use glam::Vec3;
use raycam_common::{Color, ColorGrid, RayGrid};

/// Read-only inspection of ray and color grids for debugging and CLI output.
pub struct GridInspector;

impl GridInspector {
    /// Shape, shared origin, and corner/center directions of a ray grid.
    pub fn rays(rays: &RayGrid) -> RayGridSummary {
        let dir = |i: usize, j: usize| rays.get(i, j).map(|r| r.direction);
        let last_row = rays.rows().saturating_sub(1);
        let last_col = rays.cols().saturating_sub(1);
        RayGridSummary {
            rows: rays.rows(),
            cols: rays.cols(),
            origin: rays.get(0, 0).map(|r| r.origin),
            top_left: dir(0, 0),
            top_right: dir(0, last_col),
            bottom_left: dir(last_row, 0),
            bottom_right: dir(last_row, last_col),
            center: dir(rays.rows() / 2, rays.cols() / 2),
        }
    }

    /// Shape, background count, and mean luminance of a color grid.
    pub fn colors(colors: &ColorGrid, miss_color: Color) -> ColorGridSummary {
        let cells = colors.as_slice();
        let background = cells.iter().filter(|c| **c == miss_color).count();
        let mean_luminance = if cells.is_empty() {
            0.0
        } else {
            cells.iter().map(Color::luminance).sum::<f32>() / cells.len() as f32
        };
        ColorGridSummary {
            rows: colors.rows(),
            cols: colors.cols(),
            background,
            mean_luminance,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RayGridSummary {
    pub rows: usize,
    pub cols: usize,
    pub origin: Option<Vec3>,
    pub top_left: Option<Vec3>,
    pub top_right: Option<Vec3>,
    pub bottom_left: Option<Vec3>,
    pub bottom_right: Option<Vec3>,
    pub center: Option<Vec3>,
}

fn fmt_vec(v: Option<Vec3>) -> String {
    match v {
        Some(v) => format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z),
        None => "-".to_string(),
    }
}

impl std::fmt::Display for RayGridSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rays: {}x{} origin={}", self.rows, self.cols, fmt_vec(self.origin))?;
        writeln!(f, "  top-left     {}", fmt_vec(self.top_left))?;
        writeln!(f, "  top-right    {}", fmt_vec(self.top_right))?;
        writeln!(f, "  center       {}", fmt_vec(self.center))?;
        writeln!(f, "  bottom-left  {}", fmt_vec(self.bottom_left))?;
        write!(f, "  bottom-right {}", fmt_vec(self.bottom_right))
    }
}

#[derive(Debug, Clone)]
pub struct ColorGridSummary {
    pub rows: usize,
    pub cols: usize,
    pub background: usize,
    pub mean_luminance: f32,
}

impl std::fmt::Display for ColorGridSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Colors: {}x{} background={} mean_luminance={:.3}",
            self.rows, self.cols, self.background, self.mean_luminance
        )
    }
}
