use serde::{Deserialize, Serialize};

/// Pointer interaction preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Distance in pixels a pointer must travel before a drag locks to a
    /// direction.
    pub drag_threshold: f32,
    /// Method used to turn a drag into a twist.
    pub drag_resolver: DragResolverKind,
    /// Whether to highlight the face under the pointer.
    pub show_hover_highlight: bool,
    /// Distance the hover highlight floats above the face.
    pub highlight_offset: f32,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            drag_threshold: 6.0,
            drag_resolver: DragResolverKind::default(),
            show_hover_highlight: true,
            highlight_offset: 0.01,
        }
    }
}
impl InteractionPreferences {
    /// Returns an error if any value is unusable.
    pub fn validate(&self) -> eyre::Result<()> {
        eyre::ensure!(
            self.drag_threshold.is_finite() && self.drag_threshold >= 0.0,
            "drag threshold must be non-negative, got {}",
            self.drag_threshold,
        );
        eyre::ensure!(
            self.highlight_offset.is_finite(),
            "highlight offset must be finite",
        );
        Ok(())
    }
}

/// Method used to turn a drag on a face into a twist.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DragResolverKind {
    /// Derive the axis from the face normal and the drag direction in world
    /// space, using the camera basis.
    #[default]
    CameraRelative,
    /// Look up a fixed axis and sign for each face.
    FaceTable,
}
