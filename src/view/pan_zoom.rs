use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
    window::PrimaryWindow,
};

use crate::spawn::GalleryCanvas;

/// Pixels per scroll line, for mice that report line units.
const PIXELS_PER_LINE: f32 = 100.0;

/// Zoom limits and the initial view.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ViewLimits {
    /// Smallest allowed scale.
    pub min_zoom: f32,
    /// Largest allowed scale.
    pub max_zoom: f32,
    /// Scale change per pixel of scroll.
    pub zoom_sensitivity: f32,
    /// Scale when the gallery opens.
    pub initial_scale: f32,
    /// Canvas offset from the window center when the gallery opens (y-down).
    pub initial_offset: Vec2,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            min_zoom: 0.18,
            max_zoom: 1.8,
            zoom_sensitivity: 0.0016,
            initial_scale: 0.7,
            initial_offset: Vec2::new(0.0, 80.0),
        }
    }
}

/// Pan and zoom state of the gallery canvas.
///
/// Screen positions are y-down and relative to the window center. A canvas
/// point `p` is drawn at `offset + scale * p`.
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct GalleryView {
    pub offset: Vec2,
    pub scale: f32,
    pub limits: ViewLimits,
    /// Last cursor position while dragging.
    drag_anchor: Option<Vec2>,
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new(ViewLimits::default())
    }
}

impl GalleryView {
    pub fn new(limits: ViewLimits) -> Self {
        Self {
            offset: limits.initial_offset,
            scale: limits.initial_scale.clamp(limits.min_zoom, limits.max_zoom),
            limits,
            drag_anchor: None,
        }
    }

    /// Zoom by `scroll` pixels (positive zooms in), keeping the canvas point
    /// under `cursor` fixed on screen.
    pub fn zoom_at(&mut self, cursor: Vec2, scroll: f32) {
        let previous = self.scale;
        let scale = (previous + scroll * self.limits.zoom_sensitivity)
            .clamp(self.limits.min_zoom, self.limits.max_zoom);

        self.offset = cursor - (cursor - self.offset) * (scale / previous);
        self.scale = scale;
    }

    /// Start a drag at `cursor`.
    pub fn begin_drag(&mut self, cursor: Vec2) {
        self.drag_anchor = Some(cursor);
    }

    /// Move the canvas with the cursor. No-op unless dragging.
    pub fn drag_to(&mut self, cursor: Vec2) {
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        self.offset += cursor - anchor;
        self.drag_anchor = Some(cursor);
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Screen position of a canvas point.
    pub fn canvas_to_screen(&self, point: Vec2) -> Vec2 {
        self.offset + point * self.scale
    }

    /// Canvas point under a screen position.
    pub fn screen_to_canvas(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }

    /// World transform of the canvas root. World space is y-up.
    pub fn canvas_transform(&self) -> Transform {
        Transform::from_xyz(self.offset.x, -self.offset.y, 0.0)
            .with_scale(Vec3::new(self.scale, self.scale, 1.0))
    }
}

/// Cursor position relative to the window center, y-down.
fn cursor_from_center(window: &Window) -> Option<Vec2> {
    window
        .cursor_position()
        .map(|cursor| cursor - window.size() / 2.0)
}

/// System to handle dragging and wheel zoom.
pub fn gallery_view_input(
    mut view: ResMut<GalleryView>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut scroll: MessageReader<MouseWheel>,
) {
    let Ok(window) = windows.single() else {
        scroll.clear();
        return;
    };
    let cursor = cursor_from_center(window);

    if let Some(cursor) = cursor {
        if mouse.just_pressed(MouseButton::Left) {
            view.begin_drag(cursor);
        } else if mouse.pressed(MouseButton::Left) && view.is_dragging() {
            view.drag_to(cursor);
        }
    }
    if mouse.just_released(MouseButton::Left) && view.is_dragging() {
        view.end_drag();
    }

    for ev in scroll.read() {
        let pixels = match ev.unit {
            MouseScrollUnit::Line => ev.y * PIXELS_PER_LINE,
            MouseScrollUnit::Pixel => ev.y,
        };
        view.zoom_at(cursor.unwrap_or(Vec2::ZERO), pixels);
    }
}

/// System to apply the view to the canvas root.
pub fn apply_gallery_view(
    view: Res<GalleryView>,
    mut canvases: Query<&mut Transform, With<GalleryCanvas>>,
    added: Query<(), Added<GalleryCanvas>>,
) {
    if !view.is_changed() && added.is_empty() {
        return;
    }

    for mut transform in &mut canvases {
        *transform = view.canvas_transform();
    }
}
