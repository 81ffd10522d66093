/// Borrowed GPU handles a renderer needs to build and feed its resources.
///
/// Assembled fresh for every frame; renderers keep no references into it
/// between frames.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Drawable size in physical pixels. Pane layout derives from it.
    pub size: (u32, u32),
}

/// Where a frame's draw commands go: the frame's encoder plus the color view
/// of the acquired surface texture.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
