//! Mock map state: zoom factor and viewport center.

use serde::Serialize;

use super::Coordinates;

/// View-only zoom factor, bounded to [0.5, 2.0] and stepped by 0.2.
///
/// Stored in tenths so that repeated steps land on exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    const MIN_TENTHS: u8 = 5;
    const MAX_TENTHS: u8 = 20;
    const STEP_TENTHS: u8 = 2;
    const DEFAULT_TENTHS: u8 = 10;

    pub const MIN: ZoomLevel = ZoomLevel(Self::MIN_TENTHS);
    pub const MAX: ZoomLevel = ZoomLevel(Self::MAX_TENTHS);

    /// One step closer, clamped at the maximum.
    pub fn zoomed_in(self) -> Self {
        Self((self.0 + Self::STEP_TENTHS).min(Self::MAX_TENTHS))
    }

    /// One step further out, clamped at the minimum.
    pub fn zoomed_out(self) -> Self {
        Self(self.0.saturating_sub(Self::STEP_TENTHS).max(Self::MIN_TENTHS))
    }

    pub fn factor(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(Self::DEFAULT_TENTHS)
    }
}

/// Where the mock map is centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapViewport {
    pub center: Coordinates,
    pub zoom: ZoomLevel,
}

impl MapViewport {
    pub fn new(center: Coordinates) -> Self {
        Self {
            center,
            zoom: ZoomLevel::default(),
        }
    }

    pub fn recenter(&mut self, center: Coordinates) {
        tracing::debug!("Map centered to: {}", center);
        self.center = center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zoom_is_one() {
        // テスト項目: 初期ズームは 1.0
        // given (前提条件) / when (操作):
        let zoom = ZoomLevel::default();

        // then (期待する結果):
        assert_eq!(zoom.factor(), 1.0);
    }

    #[test]
    fn test_zoom_in_clamps_at_max() {
        // テスト項目: 1.0 から6回ズームインすると 2.0 で止まる
        // given (前提条件):
        let mut zoom = ZoomLevel::default();

        // when (操作):
        for _ in 0..6 {
            zoom = zoom.zoomed_in();
        }

        // then (期待する結果):
        assert_eq!(zoom, ZoomLevel::MAX);
        assert_eq!(zoom.factor(), 2.0);
    }

    #[test]
    fn test_zoom_out_clamps_at_min() {
        // テスト項目: 1.0 から6回ズームアウトすると 0.5 で止まる
        // given (前提条件):
        let mut zoom = ZoomLevel::default();

        // when (操作):
        for _ in 0..6 {
            zoom = zoom.zoomed_out();
        }

        // then (期待する結果):
        assert_eq!(zoom, ZoomLevel::MIN);
        assert_eq!(zoom.factor(), 0.5);
    }

    #[test]
    fn test_zoom_in_from_min_keeps_odd_tenths() {
        // テスト項目: 0.5 からのズームインは 0.7, 0.9 ... と進み 2.0 で止まる
        // given (前提条件):
        let mut zoom = ZoomLevel::MIN;

        // when (操作):
        zoom = zoom.zoomed_in();
        let first = zoom.factor();
        for _ in 0..10 {
            zoom = zoom.zoomed_in();
        }

        // then (期待する結果):
        assert_eq!(first, 0.7);
        assert_eq!(zoom.factor(), 2.0);
    }

    #[test]
    fn test_viewport_recenter_keeps_zoom() {
        // テスト項目: 再センタリングしてもズームは変わらない
        // given (前提条件):
        let mut viewport = MapViewport::new(Coordinates::new(0.0, 0.0));
        viewport.zoom = viewport.zoom.zoomed_in();

        // when (操作):
        viewport.recenter(Coordinates::new(51.5074, -0.1278));

        // then (期待する結果):
        assert_eq!(viewport.center, Coordinates::new(51.5074, -0.1278));
        assert_eq!(viewport.zoom.factor(), 1.2);
    }
}
