//! Camera Request Library
//!
//! Immutable request parameters handed to a camera capture session:
//! preview resolution, camera identity, facing, and whether autofocus and
//! auto-exposure run continuously.
//!
//! Requests are assembled with [`CameraRequestBuilder`] and cannot be
//! modified afterwards. Overrides can also be loaded from a TOML file with
//! [`FileConfig`], which feeds the same builder.
//!
//! # Example
//!
//! ```
//! use camera_request::{CameraRequest, FileConfig};
//!
//! let config = FileConfig::from_toml_str("[request]\npreview_width = 1280\n").unwrap();
//! let request = config
//!     .request
//!     .apply(CameraRequest::builder().preview_height(720))
//!     .continuous_auto_model(false)
//!     .build();
//!
//! assert_eq!((request.preview_width(), request.preview_height()), (1280, 720));
//! assert!(!request.is_continuous_ae_model());
//! println!("{request}");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod request;

pub use request::{
    CameraRequest, CameraRequestBuilder, ConfigError, FileConfig, RequestConfig,
    DEFAULT_PREVIEW_HEIGHT, DEFAULT_PREVIEW_WIDTH,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
