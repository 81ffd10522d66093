use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::geometry::{SceneMeshes, Vertex};
use crate::sim::AttitudeState;
use crate::view::{self, ViewKind};

use super::{RenderCtx, RenderTarget};

/// Panes are composited over white, like a printed diagram.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Per-segment triad colors: x red, y green, z blue.
const AXIS_COLORS: [[f32; 4]; 3] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
];

const PLANE_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
const PROPELLER_COLOR: [f32; 4] = [0.3, 0.3, 0.3, 1.0];

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Draws issued per pane: three triad segments, the hull, the propeller.
const SLOTS_PER_VIEW: usize = 5;

/// Uniforms bound to a single draw.
///
/// Field order and size (144 bytes) are shared with `shaders/solid.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct DrawUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

struct DrawSlot {
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct DepthBuffer {
    view: wgpu::TextureView,
    size: (u32, u32),
}

/// Renderer for the four attitude panes.
///
/// All vertex data is uploaded once at construction. Each frame writes one
/// uniform buffer per draw and records a single render pass that walks the
/// panes with viewport + scissor set per pane.
pub struct SceneRenderer {
    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,

    axis_vbo: wgpu::Buffer,
    plane_vbo: wgpu::Buffer,
    propeller_vbo: wgpu::Buffer,
    plane_vertices: u32,
    propeller_vertices: u32,

    /// One slot per draw. Queue writes land at submission time, before the
    /// pass runs; rewriting a single buffer between draws would make every
    /// draw read the final write, so each draw owns its own buffer.
    slots: Vec<DrawSlot>,

    depth: Option<DepthBuffer>,
}

impl SceneRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        meshes: &SceneMeshes,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gimbal scene shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/solid.wgsl").into()),
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("gimbal scene bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(
                            std::num::NonZeroU64::new(
                                std::mem::size_of::<DrawUniforms>() as u64
                            )
                            .unwrap(),
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("gimbal scene pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            // Newer wgpu uses immediate constants; keep disabled for now.
            immediate_size: 0,
        });

        let line_pipeline = build_pipeline(
            device,
            surface_format,
            &shader,
            &pipeline_layout,
            wgpu::PrimitiveTopology::LineList,
            "gimbal scene line pipeline",
        );
        let triangle_pipeline = build_pipeline(
            device,
            surface_format,
            &shader,
            &pipeline_layout,
            wgpu::PrimitiveTopology::TriangleList,
            "gimbal scene triangle pipeline",
        );

        let axis_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("gimbal axis vbo"),
            contents: meshes.axis.as_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let plane_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("gimbal plane vbo"),
            contents: meshes.plane.as_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let propeller_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("gimbal propeller vbo"),
            contents: meshes.propeller.as_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let slots = (0..ViewKind::ALL.len() * SLOTS_PER_VIEW)
            .map(|_| {
                let ubo = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("gimbal draw slot ubo"),
                    size: std::mem::size_of::<DrawUniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("gimbal draw slot bind group"),
                    layout: &bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: ubo.as_entire_binding(),
                    }],
                });
                DrawSlot { ubo, bind_group }
            })
            .collect();

        Self {
            line_pipeline,
            triangle_pipeline,
            axis_vbo,
            plane_vbo,
            propeller_vbo,
            plane_vertices: meshes.plane.vertex_count(),
            propeller_vertices: meshes.propeller.vertex_count(),
            slots,
            depth: None,
        }
    }

    /// Renders all four panes for `state` into `target`.
    pub fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        state: &AttitudeState,
    ) {
        self.ensure_depth(ctx);

        let (width, height) = ctx.size;
        let panes = view::split_panes(width, height);

        for (t, (kind, pane)) in panes.iter().enumerate() {
            let view_proj = kind
                .camera()
                .view_projection(pane.aspect())
                .to_cols_array_2d();
            let base = t * SLOTS_PER_VIEW;

            let axis_model = view::axis_model(*kind, state).to_cols_array_2d();
            for (seg, color) in AXIS_COLORS.iter().enumerate() {
                self.write_slot(ctx, base + seg, view_proj, axis_model, *color);
            }
            self.write_slot(
                ctx,
                base + 3,
                view_proj,
                view::plane_model(*kind, state).to_cols_array_2d(),
                PLANE_COLOR,
            );
            self.write_slot(
                ctx,
                base + 4,
                view_proj,
                view::propeller_model(*kind, state).to_cols_array_2d(),
                PROPELLER_COLOR,
            );
        }

        let Some(depth) = self.depth.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("gimbal scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for (t, (_, pane)) in panes.iter().enumerate() {
            let base = t * SLOTS_PER_VIEW;

            rpass.set_viewport(
                pane.x as f32,
                pane.y as f32,
                pane.width as f32,
                pane.height as f32,
                0.0,
                1.0,
            );
            rpass.set_scissor_rect(pane.x, pane.y, pane.width, pane.height);

            // Triad first, then hull, then blades; the depth buffer sorts out
            // the rest.
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.axis_vbo.slice(..));
            for seg in 0..AXIS_COLORS.len() as u32 {
                rpass.set_bind_group(0, &self.slots[base + seg as usize].bind_group, &[]);
                rpass.draw(seg * 2..seg * 2 + 2, 0..1);
            }

            rpass.set_pipeline(&self.triangle_pipeline);
            rpass.set_vertex_buffer(0, self.plane_vbo.slice(..));
            rpass.set_bind_group(0, &self.slots[base + 3].bind_group, &[]);
            rpass.draw(0..self.plane_vertices, 0..1);

            rpass.set_vertex_buffer(0, self.propeller_vbo.slice(..));
            rpass.set_bind_group(0, &self.slots[base + 4].bind_group, &[]);
            rpass.draw(0..self.propeller_vertices, 0..1);
        }
    }

    fn write_slot(
        &self,
        ctx: &RenderCtx<'_>,
        index: usize,
        view_proj: [[f32; 4]; 4],
        model: [[f32; 4]; 4],
        color: [f32; 4],
    ) {
        let u = DrawUniforms {
            view_proj,
            model,
            color,
        };
        ctx.queue
            .write_buffer(&self.slots[index].ubo, 0, bytemuck::bytes_of(&u));
    }

    /// Recreates the depth buffer when the surface size changes.
    fn ensure_depth(&mut self, ctx: &RenderCtx<'_>) {
        if self.depth.as_ref().is_some_and(|d| d.size == ctx.size) {
            return;
        }

        let (width, height) = ctx.size;
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("gimbal depth texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        self.depth = Some(DepthBuffer {
            view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
            size: ctx.size,
        });
    }
}

fn build_pipeline(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),

        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[vertex_layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),

        // Newer wgpu field names:
        multiview_mask: None,
        cache: None,
    })
}
