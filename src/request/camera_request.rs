//! The camera request value object.

use super::CameraRequestBuilder;
use std::fmt;

/// Default preview width in pixels.
pub const DEFAULT_PREVIEW_WIDTH: u32 = 640;
/// Default preview height in pixels.
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 480;

/// Parameters for opening a camera preview.
///
/// Fields are private and only [`CameraRequestBuilder`] can set them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraRequest {
    pub(super) preview_width: u32,
    pub(super) preview_height: u32,
    pub(super) camera_id: String,
    pub(super) front_camera: bool,
    pub(super) continuous_af: bool,
    pub(super) continuous_ae: bool,
}

impl Default for CameraRequest {
    fn default() -> Self {
        Self {
            preview_width: DEFAULT_PREVIEW_WIDTH,
            preview_height: DEFAULT_PREVIEW_HEIGHT,
            camera_id: String::new(),
            front_camera: false,
            continuous_af: true,
            continuous_ae: true,
        }
    }
}

impl CameraRequest {
    /// Starts a builder seeded with the default request.
    pub fn builder() -> CameraRequestBuilder {
        CameraRequestBuilder::new()
    }

    /// Returns the preview width in pixels.
    #[inline]
    pub fn preview_width(&self) -> u32 {
        self.preview_width
    }

    /// Returns the preview height in pixels.
    #[inline]
    pub fn preview_height(&self) -> u32 {
        self.preview_height
    }

    /// Returns the camera identifier. Empty means "let the backend pick".
    #[inline]
    pub fn camera_id(&self) -> &str {
        &self.camera_id
    }

    /// Returns true for a front-facing camera.
    #[inline]
    pub fn is_front_camera(&self) -> bool {
        self.front_camera
    }

    /// Whether autofocus adjusts continuously instead of locking once.
    #[inline]
    pub fn is_continuous_af_model(&self) -> bool {
        self.continuous_af
    }

    /// Whether auto-exposure adjusts continuously instead of locking once.
    #[inline]
    pub fn is_continuous_ae_model(&self) -> bool {
        self.continuous_ae
    }
}

impl fmt::Display for CameraRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CameraRequest(preview_width={}, preview_height={}, camera_id='{}', \
             is_front_camera={}, is_continuous_af_model={}, is_continuous_ae_model={})",
            self.preview_width,
            self.preview_height,
            self.camera_id,
            self.front_camera,
            self.continuous_af,
            self.continuous_ae,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = CameraRequest::default();

        assert_eq!(request.preview_width(), 640);
        assert_eq!(request.preview_height(), 480);
        assert_eq!(request.camera_id(), "");
        assert!(!request.is_front_camera());
        assert!(request.is_continuous_af_model());
        assert!(request.is_continuous_ae_model());
    }

    #[test]
    fn test_default_matches_untouched_builder() {
        assert_eq!(CameraRequest::default(), CameraRequest::builder().build());
    }

    #[test]
    fn test_display_lists_every_field() {
        let request = CameraRequest::builder()
            .preview_width(1280)
            .preview_height(720)
            .camera_id("usb-0")
            .front_camera(true)
            .continuous_af_model(false)
            .build();

        assert_eq!(
            request.to_string(),
            "CameraRequest(preview_width=1280, preview_height=720, camera_id='usb-0', \
             is_front_camera=true, is_continuous_af_model=false, is_continuous_ae_model=true)"
        );
    }

    #[test]
    fn test_display_default() {
        assert_eq!(
            CameraRequest::default().to_string(),
            "CameraRequest(preview_width=640, preview_height=480, camera_id='', \
             is_front_camera=false, is_continuous_af_model=true, is_continuous_ae_model=true)"
        );
    }
}
