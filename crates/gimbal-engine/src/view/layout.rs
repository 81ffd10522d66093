use super::kind::ViewKind;

/// Pane rectangle in physical pixels, top-left origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PaneRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PaneRect {
    /// Width over height, for the pane's projection.
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// Splits the drawable area into the four panes.
///
/// The left quarter is a column of three stacked panes (top, front, side);
/// the rest is the combined view. Every returned rect is at least 1x1 and
/// stays inside `width` x `height`; from 4x3 px up the rects are also
/// disjoint (below that they may overlap rather than escape the surface).
pub fn split_panes(width: u32, height: u32) -> [(ViewKind, PaneRect); 4] {
    let width = width.max(1);
    let height = height.max(1);

    let col_w = (width / 4).max(1).min(width);
    let main_x = col_w.min(width - 1);
    let main_w = width - main_x;

    let row_h = (height / 3).max(1);
    let row_y = |i: u32| (i * row_h).min(height - 1);
    let pane = |i: u32| PaneRect {
        x: 0,
        y: row_y(i),
        width: col_w,
        height: if i == 2 {
            height - row_y(2)
        } else {
            row_h.min(height - row_y(i))
        },
    };

    [
        (ViewKind::TopYaw, pane(0)),
        (ViewKind::FrontPitch, pane(1)),
        (ViewKind::SideRoll, pane(2)),
        (
            ViewKind::Combined,
            PaneRect {
                x: main_x,
                y: 0,
                width: main_w,
                height,
            },
        ),
    ]
}
