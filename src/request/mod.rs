//! Camera request parameters and their builder.
//!
//! A [`CameraRequest`] describes what a capture session should open:
//! preview resolution, which camera, and whether focus and exposure run
//! continuously. Requests are only ever assembled through
//! [`CameraRequestBuilder`] and are immutable once built.

mod builder;
mod camera_request;
mod config;

pub use builder::CameraRequestBuilder;
pub use camera_request::{CameraRequest, DEFAULT_PREVIEW_HEIGHT, DEFAULT_PREVIEW_WIDTH};
pub use config::{ConfigError, FileConfig, RequestConfig};
