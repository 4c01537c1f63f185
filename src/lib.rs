#![doc = r#"
TRISECT — split a banded raster image into three fixed-size sections.

This crate takes one image (a PNG with an alpha channel), removes its
transparent borders, locates two horizontal dividing bands from row-color
discontinuities, and exports the top, middle, and bottom sections resized
to fixed dimensions and forced fully opaque. It powers the TRISECT CLI and
can be embedded in your own Rust applications.

Quick start: process an image to files
--------------------------------------
```rust,no_run
use std::path::Path;
use trisect::{ProcessingParams, process_image_to_path};

fn main() -> trisect::Result<()> {
    let params = ProcessingParams::default();
    let report = process_image_to_path(Path::new("/data/card.png"), None, &params)?;
    println!("fallback={} outputs={}", report.used_fallback, report.written.len());
    Ok(())
}
```

Process in-memory to section buffers
------------------------------------
```rust,no_run
use std::path::Path;
use trisect::{ProcessingParams, process_image_to_buffer};

fn main() -> trisect::Result<()> {
    let sections = process_image_to_buffer(Path::new("/data/card.png"), &ProcessingParams::default())?;
    assert_eq!(sections.top.dimensions(), (168, 40));
    Ok(())
}
```

Tuning detection
----------------
The dividing-line detector compares consecutive rows of the row-color
profile; a row triggers when the sum of absolute per-channel differences
exceeds `DetectorParams::threshold`. When fewer than two lines are found
the image is split into equal thirds instead.

```rust
use trisect::DetectorParams;

let params = DetectorParams { threshold: 35.0, max_line_thickness: 6 };
assert!(params.threshold < DetectorParams::default().threshold);
```

Error handling
--------------
All public functions return `trisect::Result<T>`; match on `trisect::Error`
to handle specific stages, e.g. `NoContentFound` for a fully transparent
input or `InvalidPartition` when the detected bands leave no room for a
section.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`Rect`, `DividingLine`, `Section`, ...).
- [`core`] — low-level processing primitives.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::{DetectorParams, ProcessingParams};
pub use error::{Error, Result};
pub use types::{DividingLine, LineDetection, Partition, Rect, RowColor, Section};

// High-level API re-exports
pub use api::{
    ProcessReport, SectionBuffers, WORKING_IMAGE_NAME, process_buffer, process_image_to_buffer,
    process_image_to_path,
};
