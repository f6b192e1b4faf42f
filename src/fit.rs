//! Aspect-preserving fit of a content image into a fixed container.
//!
//! Pure geometry: no pixel operations, no allocations, `no_std` compatible.
//! Works with any [`Float`] (`f32` or `f64`).
//!
//! # Example
//!
//! ```
//! use memelayout::fit;
//!
//! // 100×200 portrait image on a 400×400 canvas
//! let r = fit(400.0, 400.0, 100.0, 200.0);
//! assert_eq!((r.width, r.height), (200.0, 400.0));
//! assert_eq!((r.start_x, r.start_y), (100.0, 0.0));
//! ```
//!
//! # Branch selection
//!
//! [`fit`] chooses which axis to fill from the content's own aspect ratio
//! alone: portrait content (ratio < 1) fills the container height, everything
//! else fills the container width. The container's aspect ratio is never
//! consulted, so on a non-square container the result can overflow one axis.
//! [`FitPolicy::Contain`] is the ratio-vs-ratio alternative and must be asked
//! for explicitly through [`fit_with`].

use core::fmt;

use num_traits::Float;

/// Orientation of a rectangle, judged by its aspect ratio against 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aspect {
    /// Taller than wide (ratio < 1).
    Portrait,
    /// Wider than tall, or square (ratio ≥ 1).
    Landscape,
}

impl Aspect {
    /// Classify a `width × height` rectangle.
    ///
    /// A NaN ratio (`0 / 0`) classifies as [`Landscape`](Self::Landscape),
    /// since `NaN < 1` is false.
    pub fn of<T: Float>(width: T, height: T) -> Self {
        Self::from_ratio(width / height)
    }

    /// Classify an aspect ratio (width / height).
    pub fn from_ratio<T: Float>(ratio: T) -> Self {
        if ratio < T::one() {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// Which test decides the axis the content is stretched to fill.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitPolicy {
    /// Portrait content fills the container height, landscape and square
    /// content fills the container width. Same as [`fit`].
    #[default]
    ContentOrientation,
    /// Compare the content ratio against the container ratio. The result is
    /// always inside the container.
    Contain,
}

/// Rendered size and top-left origin of the content within the container.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitResult<T = f64> {
    /// Rendered width in container coordinates.
    pub width: T,
    /// Rendered height in container coordinates.
    pub height: T,
    /// Horizontal offset of the content's top-left corner.
    pub start_x: T,
    /// Vertical offset of the content's top-left corner.
    pub start_y: T,
}

impl<T: Float> FitResult<T> {
    /// Width / height of the rendered rectangle.
    pub fn aspect_ratio(&self) -> T {
        self.width / self.height
    }

    /// Right edge (`start_x + width`).
    pub fn right(&self) -> T {
        self.start_x + self.width
    }

    /// Bottom edge (`start_y + height`).
    pub fn bottom(&self) -> T {
        self.start_y + self.height
    }

    /// Whether the rectangle lies inside `(0, 0, container_width, container_height)`,
    /// allowing for floating-point rounding.
    pub fn is_within(&self, container_width: T, container_height: T) -> bool {
        let tol = container_width.max(container_height) * T::epsilon() * four();
        self.start_x >= -tol
            && self.start_y >= -tol
            && self.right() <= container_width + tol
            && self.bottom() <= container_height + tol
    }

    /// Whether every field is finite.
    pub fn is_finite(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.start_x.is_finite()
            && self.start_y.is_finite()
    }
}

/// Invalid input rejected by [`checked_fit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// A dimension is NaN or infinite.
    NonFinite,
    /// Container width or height is zero or negative.
    NonPositiveContainer,
    /// Content width or height is zero or negative.
    NonPositiveContent,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("dimension is not a finite number"),
            Self::NonPositiveContainer => f.write_str("container width and height must be > 0"),
            Self::NonPositiveContent => f.write_str("content width and height must be > 0"),
        }
    }
}

impl core::error::Error for FitError {}

/// Fit content into a container, preserving aspect ratio and centering the
/// leftover space on the axis that is not filled.
///
/// Inputs are not validated. A zero `content_height` or `container_height`
/// produces zero-size, infinite or NaN fields following IEEE division; the
/// function never panics. Use [`checked_fit`] to reject such input first.
pub fn fit<T: Float>(
    container_width: T,
    container_height: T,
    content_width: T,
    content_height: T,
) -> FitResult<T> {
    let aspect_ratio = content_width / content_height;
    let aspect = Aspect::from_ratio(aspect_ratio);
    tracing::trace!(portrait = aspect == Aspect::Portrait, "fit branch");
    match aspect {
        Aspect::Portrait => fill_height(container_width, container_height, aspect_ratio),
        Aspect::Landscape => fill_width(container_width, container_height, aspect_ratio),
    }
}

/// [`fit`] with an explicit branch policy.
pub fn fit_with<T: Float>(
    policy: FitPolicy,
    container_width: T,
    container_height: T,
    content_width: T,
    content_height: T,
) -> FitResult<T> {
    match policy {
        FitPolicy::ContentOrientation => {
            fit(container_width, container_height, content_width, content_height)
        }
        FitPolicy::Contain => {
            let aspect_ratio = content_width / content_height;
            let container_ratio = container_width / container_height;
            tracing::trace!(
                height_bound = aspect_ratio < container_ratio,
                "contain fit branch"
            );
            if aspect_ratio < container_ratio {
                fill_height(container_width, container_height, aspect_ratio)
            } else {
                fill_width(container_width, container_height, aspect_ratio)
            }
        }
    }
}

/// Validate all four dimensions, then [`fit_with`].
pub fn checked_fit<T: Float>(
    policy: FitPolicy,
    container_width: T,
    container_height: T,
    content_width: T,
    content_height: T,
) -> Result<FitResult<T>, FitError> {
    validate(container_width, container_height, content_width, content_height)?;
    Ok(fit_with(
        policy,
        container_width,
        container_height,
        content_width,
        content_height,
    ))
}

/// Check that all four dimensions are finite and strictly positive.
pub fn validate<T: Float>(
    container_width: T,
    container_height: T,
    content_width: T,
    content_height: T,
) -> Result<(), FitError> {
    let all = [container_width, container_height, content_width, content_height];
    if all.iter().any(|v| !v.is_finite()) {
        return Err(FitError::NonFinite);
    }
    if container_width <= T::zero() || container_height <= T::zero() {
        return Err(FitError::NonPositiveContainer);
    }
    if content_width <= T::zero() || content_height <= T::zero() {
        return Err(FitError::NonPositiveContent);
    }
    Ok(())
}

// ============================================================================
// Internal geometry
// ============================================================================

/// Height matches the container; width follows the ratio, centered horizontally.
fn fill_height<T: Float>(container_width: T, container_height: T, ratio: T) -> FitResult<T> {
    let height = container_height;
    let width = container_height * ratio;
    FitResult {
        width,
        height,
        start_x: (container_width - width) / two(),
        start_y: T::zero(),
    }
}

/// Width matches the container; height follows the ratio, centered vertically.
fn fill_width<T: Float>(container_width: T, container_height: T, ratio: T) -> FitResult<T> {
    let width = container_width;
    let height = container_width / ratio;
    FitResult {
        width,
        height,
        start_x: T::zero(),
        start_y: (container_height - height) / two(),
    }
}

fn two<T: Float>() -> T {
    T::one() + T::one()
}

fn four<T: Float>() -> T {
    two::<T>() * two()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    // ── branch cases ────────────────────────────────────────────────────

    #[test]
    fn portrait_fills_height() {
        let r = fit(400.0, 400.0, 100.0, 200.0);
        assert_eq!(
            r,
            FitResult {
                width: 200.0,
                height: 400.0,
                start_x: 100.0,
                start_y: 0.0
            }
        );
    }

    #[test]
    fn landscape_fills_width() {
        let r = fit(400.0, 400.0, 200.0, 100.0);
        assert_eq!(
            r,
            FitResult {
                width: 400.0,
                height: 200.0,
                start_x: 0.0,
                start_y: 100.0
            }
        );
    }

    #[test]
    fn square_content_takes_landscape_branch() {
        let r = fit(400.0, 400.0, 100.0, 100.0);
        assert_eq!(
            r,
            FitResult {
                width: 400.0,
                height: 400.0,
                start_x: 0.0,
                start_y: 0.0
            }
        );
    }

    #[test]
    fn wide_container_ignores_container_ratio() {
        // 0.5 < 1 → portrait branch regardless of the 2:1 container
        let r = fit(800.0, 400.0, 100.0, 200.0);
        assert_eq!((r.width, r.height), (200.0, 400.0));
        assert_eq!((r.start_x, r.start_y), (300.0, 0.0));
    }

    #[test]
    fn tall_container_landscape_content_overflows_height() {
        // 2:1 content into a 400×100 strip: width fills, height 200 > 100
        let r = fit(400.0, 100.0, 200.0, 100.0);
        assert_eq!((r.width, r.height), (400.0, 200.0));
        assert_eq!(r.start_y, -50.0);
        assert!(!r.is_within(400.0, 100.0));
    }

    #[test]
    fn works_with_f32() {
        let r = fit(400.0f32, 400.0, 300.0, 600.0);
        assert_eq!((r.width, r.height, r.start_x, r.start_y), (200.0, 400.0, 100.0, 0.0));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = fit(640.0, 480.0, 1234.0, 567.0);
        let b = fit(640.0, 480.0, 1234.0, 567.0);
        assert_eq!(a, b);
    }

    // ── degenerate input ────────────────────────────────────────────────

    #[test]
    fn zero_content_height_gives_zero_height() {
        // ratio = +inf → landscape; height = 400 / inf = 0
        let r = fit(400.0, 400.0, 100.0, 0.0);
        assert_eq!((r.width, r.height), (400.0, 0.0));
        assert_eq!(r.start_y, 200.0);
    }

    #[test]
    fn zero_by_zero_content_is_nan() {
        let r = fit(400.0, 400.0, 0.0, 0.0);
        assert_eq!(r.width, 400.0);
        assert!(r.height.is_nan());
        assert!(r.start_y.is_nan());
        assert!(!r.is_finite());
    }

    #[test]
    fn zero_container_height_collapses_portrait() {
        let r = fit(400.0, 0.0, 100.0, 200.0);
        assert_eq!((r.width, r.height), (0.0, 0.0));
        assert_eq!(r.start_x, 200.0);
    }

    #[test]
    fn zero_container_height_landscape_sits_above_origin() {
        // width still fills; the 200-high image is centered on a 0-high box
        let r = fit(400.0, 0.0, 200.0, 100.0);
        assert_eq!(
            r,
            FitResult {
                width: 400.0,
                height: 200.0,
                start_x: 0.0,
                start_y: -100.0
            }
        );
        assert!(r.is_finite());
        assert!(!r.is_within(400.0, 0.0));
    }

    #[test]
    fn infinite_container_propagates() {
        let r = fit(f64::INFINITY, 400.0, 200.0, 100.0);
        assert!(r.width.is_infinite());
        assert!(r.height.is_infinite());
        assert!(r.start_y.is_infinite());
    }

    // ── aspect ──────────────────────────────────────────────────────────

    #[test]
    fn aspect_classification() {
        assert_eq!(Aspect::of(100.0, 200.0), Aspect::Portrait);
        assert_eq!(Aspect::of(200.0, 100.0), Aspect::Landscape);
        assert_eq!(Aspect::of(100.0, 100.0), Aspect::Landscape);
        assert_eq!(Aspect::of(0.0f64, 0.0), Aspect::Landscape);
        assert_eq!(Aspect::from_ratio(0.999f32), Aspect::Portrait);
    }

    // ── contain policy ──────────────────────────────────────────────────

    #[test]
    fn contain_policy_matches_default_on_square_container() {
        for (w, h) in [(100.0, 200.0), (200.0, 100.0), (77.0, 77.0), (1.0, 3000.0)] {
            assert_eq!(
                fit_with(FitPolicy::Contain, 400.0, 400.0, w, h),
                fit(400.0, 400.0, w, h)
            );
        }
    }

    #[test]
    fn contain_policy_stays_inside_wide_container() {
        // 3:2 landscape into 800×200: height constrains
        let r = fit_with(FitPolicy::Contain, 800.0, 200.0, 300.0, 200.0);
        assert_eq!((r.width, r.height), (300.0, 200.0));
        assert_eq!((r.start_x, r.start_y), (250.0, 0.0));
        assert!(r.is_within(800.0, 200.0));
    }

    #[test]
    fn contain_policy_stays_inside_tall_container() {
        let r = fit_with(FitPolicy::Contain, 400.0, 100.0, 200.0, 100.0);
        assert_eq!((r.width, r.height), (200.0, 100.0));
        assert_eq!((r.start_x, r.start_y), (100.0, 0.0));
    }

    #[test]
    fn default_policy_is_content_orientation() {
        assert_eq!(FitPolicy::default(), FitPolicy::ContentOrientation);
        assert_eq!(
            fit_with(FitPolicy::default(), 800.0, 400.0, 100.0, 200.0),
            fit(800.0, 400.0, 100.0, 200.0)
        );
    }

    // ── validation ──────────────────────────────────────────────────────

    #[test]
    fn checked_fit_rejects_bad_input() {
        let p = FitPolicy::ContentOrientation;
        assert_eq!(
            checked_fit(p, 400.0, 0.0, 100.0, 100.0),
            Err(FitError::NonPositiveContainer)
        );
        assert_eq!(
            checked_fit(p, 400.0, 400.0, -1.0, 100.0),
            Err(FitError::NonPositiveContent)
        );
        assert_eq!(
            checked_fit(p, 400.0, 400.0, 100.0, f64::NAN),
            Err(FitError::NonFinite)
        );
        assert_eq!(
            checked_fit(p, f64::INFINITY, 400.0, 100.0, 100.0),
            Err(FitError::NonFinite)
        );
    }

    #[test]
    fn checked_fit_passes_valid_input_through() {
        assert_eq!(
            checked_fit(FitPolicy::ContentOrientation, 400.0, 400.0, 100.0, 200.0),
            Ok(fit(400.0, 400.0, 100.0, 200.0))
        );
    }

    #[test]
    fn result_edges() {
        let r = fit(400.0, 400.0, 100.0, 200.0);
        assert!(close(r.right(), 300.0));
        assert!(close(r.bottom(), 400.0));
        assert!(close(r.aspect_ratio(), 0.5));
        assert!(r.is_within(400.0, 400.0));
    }

    // ── logging ─────────────────────────────────────────────────────────

    #[cfg(feature = "std")]
    mod trace_capture {
        use std::format;
        use std::string::String;
        use std::sync::{Arc, Mutex};
        use std::vec::Vec;

        use tracing::field::{Field, Visit};
        use tracing::{Event, Metadata, Subscriber, span};

        /// Records every event as `name=value` pairs.
        #[derive(Clone, Default)]
        pub(super) struct Capture(pub(super) Arc<Mutex<Vec<String>>>);

        struct Line(String);

        impl Visit for Line {
            fn record_debug(&mut self, field: &Field, value: &dyn core::fmt::Debug) {
                self.0.push_str(&format!("{}={:?} ", field.name(), value));
            }
        }

        impl Subscriber for Capture {
            fn enabled(&self, _: &Metadata<'_>) -> bool {
                true
            }
            fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
                span::Id::from_u64(1)
            }
            fn record(&self, _: &span::Id, _: &span::Record<'_>) {}
            fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}
            fn event(&self, event: &Event<'_>) {
                let mut line = Line(String::new());
                event.record(&mut line);
                self.0.lock().unwrap().push(line.0);
            }
            fn enter(&self, _: &span::Id) {}
            fn exit(&self, _: &span::Id) {}
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn default_fit_traces_branch() {
        let capture = trace_capture::Capture::default();
        tracing::subscriber::with_default(capture.clone(), || {
            fit(400.0, 400.0, 100.0, 200.0);
            fit(400.0, 400.0, 200.0, 100.0);
        });
        let lines = capture.0.lock().unwrap();
        assert_eq!(lines.len(), 2, "{lines:?}");
        assert!(lines[0].contains("portrait=true"), "{lines:?}");
        assert!(lines[1].contains("portrait=false"), "{lines:?}");
        assert!(lines.iter().all(|l| l.contains("fit branch")), "{lines:?}");
    }
}
