use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::core::transform::FrameMatrices;
use crate::renderer::SceneRenderer;

/// Wrapper around winit Window with an imperative draw API
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Draw a frame using the provided renderer and matrices
    pub fn draw(
        &self,
        renderer: &mut SceneRenderer,
        frame: &FrameMatrices,
    ) -> Result<(), wgpu::SurfaceError> {
        renderer.render(frame)
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn inner_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.inner.inner_size()
    }

    pub fn is_minimized(&self) -> bool {
        self.inner.is_minimized().unwrap_or(false)
    }
}
