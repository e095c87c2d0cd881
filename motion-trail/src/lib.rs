//! Motion Trail - sampled, tapering trails for moving 2D objects
//!
//! A [`Trail`] follows an object by sampling its position at a bounded rate
//! into a fixed-capacity history, then redraws the history every frame as
//! straight segments whose width and opacity taper linearly from the newest
//! sample (head) to the oldest (tail).
//!
//! Drawing goes through the [`DrawSurface`] trait, so the same trail logic
//! runs against a `tiny-skia` raster ([`PixmapSurface`]), an in-memory
//! command log ([`RecordingSurface`]), or any host renderer.
//!
//! # Architecture
//!
//! ```text
//! update(x, y, t) ──► Sampler ──► HistoryBuffer (ring, oldest first)
//!                                      │
//!                                      ▼
//!                     render::render ──► DrawSurface
//!                     (clear, then one styled segment per adjacent pair)
//! ```
//!
//! # Example
//!
//! ```
//! use motion_trail::{Color, RecordingSurface, Trail, TrailConfig};
//!
//! let config = TrailConfig::default().with_color(Color::from_packed(0xFF8800));
//! let mut trail = Trail::new(RecordingSurface::new(), config);
//!
//! // Called once per frame by the host.
//! for frame in 0..10 {
//!     let t = frame as f64 * 16.0;
//!     trail.update(t, t * 0.5, t).unwrap();
//! }
//!
//! assert!(trail.segments_drawn() > 0);
//! trail.destroy();
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod point;
pub mod render;
pub mod sampler;
pub mod surface;
pub mod trail;

pub use config::{Color, TrailConfig, TrailOverrides};
pub use error::{TrailError, TrailResult};
pub use point::TrailPoint;
pub use surface::{DrawCommand, DrawSurface, PixmapSurface, RecordingSurface};
pub use trail::{Trail, TrailState};
