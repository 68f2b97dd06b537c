//! Fluent builder for [`CameraRequest`].

use super::CameraRequest;

/// Accumulates request fields and produces one [`CameraRequest`].
///
/// Setters accept every value as-is; there is nothing to validate and
/// nothing can fail.
///
/// ```
/// use camera_request::CameraRequestBuilder;
///
/// let request = CameraRequestBuilder::new()
///     .preview_width(1280)
///     .preview_height(720)
///     .camera_id("0")
///     .front_camera(true)
///     .build();
///
/// assert_eq!(request.preview_width(), 1280);
/// assert!(request.is_continuous_af_model());
/// ```
#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct CameraRequestBuilder {
    request: CameraRequest,
}

impl CameraRequestBuilder {
    /// Creates a builder holding the default request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preview width in pixels.
    pub fn preview_width(mut self, width: u32) -> Self {
        self.request.preview_width = width;
        self
    }

    /// Sets the preview height in pixels.
    pub fn preview_height(mut self, height: u32) -> Self {
        self.request.preview_height = height;
        self
    }

    /// Sets the camera identifier.
    pub fn camera_id(mut self, camera_id: impl Into<String>) -> Self {
        self.request.camera_id = camera_id.into();
        self
    }

    /// Marks the camera as front-facing.
    pub fn front_camera(mut self, front_camera: bool) -> Self {
        self.request.front_camera = front_camera;
        self
    }

    /// Enables or disables continuous autofocus.
    pub fn continuous_af_model(mut self, continuous_af: bool) -> Self {
        self.request.continuous_af = continuous_af;
        self
    }

    /// Enables or disables continuous auto-exposure.
    pub fn continuous_auto_model(mut self, continuous_ae: bool) -> Self {
        self.request.continuous_ae = continuous_ae;
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> CameraRequest {
        tracing::debug!(request = %self.request, "Built camera request");
        self.request
    }
}
