//! Component registry.
//!
//! [`Overlay`] owns the components sharing the display and hands them to the
//! driver in registration order. It does no layout and no scheduling: frames
//! come from the integrator, and the driver decides when to update and paint.
//! Storage is a fixed-capacity `heapless::Vec`; dropping the overlay drops
//! every component exactly once.

use heapless::Vec;

use crate::error::Error;

/// Owner of up to `N` components of type `C`.
pub struct Overlay<C, const N: usize> {
    components: Vec<C, N>,
}

impl<C, const N: usize> Overlay<C, N> {
    pub const fn new() -> Self { Self { components: Vec::new() } }

    /// Take ownership of `component`, appending it after those already registered.
    ///
    /// Fails with [`Error::RegistryFull`] once `N` components are held; the
    /// rejected component is dropped.
    pub fn register(
        &mut self,
        component: C,
    ) -> Result<(), Error> {
        self.components.push(component).map_err(|_| Error::RegistryFull)
    }

    /// Registered components, in registration order.
    #[inline]
    pub fn components(&self) -> &[C] { &self.components }

    /// Mutable access for the driver's update pass.
    #[inline]
    pub fn components_mut(&mut self) -> &mut [C] { &mut self.components }

    #[inline]
    pub fn len(&self) -> usize { self.components.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.components.is_empty() }
}

impl<C, const N: usize> Default for Overlay<C, N> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use profont::PROFONT_12_POINT;

    use super::*;
    use crate::component::Component;
    use crate::geometry::Frame;
    use crate::surface::{PagedSurface, RenderSurface, paint_region};
    use crate::telemetry::Telemetry;
    use crate::test_canvas::Canvas;

    /// Counts calls and drops.
    struct Probe {
        id: u8,
        updates: u32,
        paints: Rc<Cell<u32>>,
        drops: Rc<Cell<u32>>,
    }

    impl Probe {
        fn new(
            id: u8,
            drops: &Rc<Cell<u32>>,
        ) -> Self {
            Self {
                id,
                updates: 0,
                paints: Rc::new(Cell::new(0)),
                drops: Rc::clone(drops),
            }
        }
    }

    impl Drop for Probe {
        fn drop(&mut self) { self.drops.set(self.drops.get() + 1); }
    }

    impl Component for Probe {
        fn update(
            &mut self,
            _telemetry: &Telemetry,
        ) {
            self.updates += 1;
        }

        fn paint<S: RenderSurface>(
            &self,
            surface: &mut S,
        ) {
            paint_region(surface, &Frame::new(0, 0, 4, 4), |_| {});
            self.paints.set(self.paints.get() + 1);
        }
    }

    #[test]
    fn test_new_overlay_is_empty() {
        let overlay: Overlay<Probe, 4> = Overlay::new();
        assert!(overlay.is_empty());
        assert_eq!(overlay.len(), 0);
    }

    #[test]
    fn test_register_preserves_order() {
        let drops = Rc::new(Cell::new(0));
        let mut overlay: Overlay<Probe, 4> = Overlay::new();
        for id in [3, 1, 2] {
            overlay.register(Probe::new(id, &drops)).unwrap();
        }
        let ids: std::vec::Vec<u8> = overlay.components().iter().map(|p| p.id).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn test_register_when_full() {
        let drops = Rc::new(Cell::new(0));
        let mut overlay: Overlay<Probe, 2> = Overlay::new();
        overlay.register(Probe::new(0, &drops)).unwrap();
        overlay.register(Probe::new(1, &drops)).unwrap();
        assert_eq!(overlay.register(Probe::new(2, &drops)), Err(Error::RegistryFull));
        assert_eq!(overlay.len(), 2);
        // rejected component was dropped, registered ones kept
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_drop_releases_each_component_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut overlay: Overlay<Probe, 4> = Overlay::new();
            for id in 0..3 {
                overlay.register(Probe::new(id, &drops)).unwrap();
            }
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_driver_pass_reaches_every_component() {
        let drops = Rc::new(Cell::new(0));
        let mut overlay: Overlay<Probe, 4> = Overlay::new();
        overlay.register(Probe::new(0, &drops)).unwrap();
        overlay.register(Probe::new(1, &drops)).unwrap();

        let mut surface = PagedSurface::new(Canvas::<8, 8>::new(), 8, &PROFONT_12_POINT);
        let telemetry = Telemetry::default();
        for component in overlay.components_mut() {
            component.update(&telemetry);
            component.paint(&mut surface);
        }

        for probe in overlay.components() {
            assert_eq!(probe.updates, 1);
            assert_eq!(probe.paints.get(), 1);
        }
        assert_eq!(surface.passes(), 2);
    }
}
