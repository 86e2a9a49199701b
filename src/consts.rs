//! Shared numeric and style constants for the overlay crate.

// ── Counters ────────────────────────────────────────────────────

/// Largest integer a JavaScript number represents exactly (2^53 − 1).
/// Timekeeper counters wrap to zero after reaching it.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Generations that make up one palette cycle.
pub const GENERATIONS_PER_CYCLE: u64 = 4;

// ── Frame rate ──────────────────────────────────────────────────

/// Width of the sliding frame-rate window in milliseconds.
pub const FPS_WINDOW_MS: f64 = 1000.0;

/// The displayed FPS value is refreshed once the throttle counter exceeds this.
pub const FPS_THROTTLE_FRAMES: u32 = 10;

// ── Grid ────────────────────────────────────────────────────────

/// Distance between grid lines in canvas pixels.
pub const GRID_SPACING: f64 = 30.0;

/// Stroke width of grid lines.
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// Grid line color.
pub const GRID_COLOR: &str = "#c8c8c8";

/// Grid label color.
pub const GRID_LABEL_COLOR: &str = "#808080";

/// Grid label font.
pub const GRID_LABEL_FONT: &str = "10px sans-serif";

/// Offset of a grid label from its line, in pixels.
pub const GRID_LABEL_OFFSET: f64 = 2.0;

/// Baseline of vertical-line labels, measured down from the top edge.
pub const GRID_LABEL_TOP: f64 = 10.0;

// ── Center reticle ──────────────────────────────────────────────

/// Stroke width of the center reticle; heavier than the grid.
pub const RETICLE_LINE_WIDTH: f64 = 3.0;

/// Center reticle color.
pub const RETICLE_COLOR: &str = "#ff0000";

// ── Text bounds ─────────────────────────────────────────────────

/// Stroke width of the text bounding-box guides.
pub const TEXT_GUIDE_WIDTH: f64 = 1.0;

pub const TEXT_GUIDE_TOP_COLOR: &str = "#ff0000";
pub const TEXT_GUIDE_BOTTOM_COLOR: &str = "#0000ff";
pub const TEXT_GUIDE_MID_COLOR: &str = "#008000";
pub const TEXT_GUIDE_LEFT_COLOR: &str = "#ffa500";
pub const TEXT_GUIDE_RIGHT_COLOR: &str = "#800080";

// ── Readouts ────────────────────────────────────────────────────

/// Font shared by the mouse and FPS readouts.
pub const READOUT_FONT: &str = "16px monospace";

/// Readout text color.
pub const READOUT_COLOR: &str = "#000000";

/// Inset of readouts from the canvas edges, in pixels.
pub const READOUT_MARGIN: f64 = 10.0;

/// Horizontal room reserved for the FPS readout at the top-right corner.
pub const FPS_READOUT_WIDTH: f64 = 90.0;
