mod helpers;

use anyhow::anyhow;
use dodeca_core::{
    aspect_ratio, Dodecahedron, ShaderSources, ViewState, CLEAR_COLOR, EDGE_COLOR, FILL_COLOR,
};
use glam::Mat4;
use wgpu::util::DeviceExt;
use winit::window::Window;

use helpers::{create_depth_texture, make_mesh_pipeline, PipelineDesc, OPENGL_TO_WGPU};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    trans: [[f32; 4]; 4],
    color: [f32; 4],
}

impl Uniforms {
    fn new(trans: Mat4, rgb: [f32; 3]) -> Self {
        Self {
            trans: trans.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], 1.0],
        }
    }
}

/// One uniform buffer per draw so each draw keeps its own colour.
struct DrawUniforms {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl DrawUniforms {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }
}

struct IndexBuffer {
    buffer: wgpu::Buffer,
    count: u32,
}

impl IndexBuffer {
    fn new(device: &wgpu::Device, label: &str, indices: &[u32]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            buffer,
            count: indices.len() as u32,
        }
    }
}

pub struct GpuState<'w> {
    pub window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    fill_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    // false when the shaders or pipelines failed validation; draws are skipped
    pipelines_valid: bool,
    fill_uniforms: DrawUniforms,
    edge_uniforms: DrawUniforms,
    vertex_buffer: wgpu::Buffer,
    faces: IndexBuffer,
    edges: IndexBuffer,
    triangle_wire: IndexBuffer,
}

impl<'w> GpuState<'w> {
    pub async fn new(
        window: &'w Window,
        mesh: &Dodecahedron,
        shaders: &ShaderSources,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("No GPU adapter"))?;
        log::info!("[gpu] adapter: {}", adapter.get_info().name);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;
        // Validation errors outside an error scope are reported, not fatal.
        device.on_uncaptured_error(Box::new(|err: wgpu::Error| log::error!("[gpu] {err}")));

        let surface_caps = surface.get_capabilities(&adapter);
        // Plain (non-sRGB) target so the colour constants land unmodified.
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow!("Surface reports no texture formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let (_, depth_view) = create_depth_texture(&device, config.width, config.height);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Shader compile and pipeline errors are logged; the app keeps running.
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let vs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vertex"),
            source: wgpu::ShaderSource::Wgsl(shaders.vertex.as_str().into()),
        });
        let fs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("fragment"),
            source: wgpu::ShaderSource::Wgsl(shaders.fragment.as_str().into()),
        });
        let fill_pipeline = make_mesh_pipeline(
            &device,
            &pipeline_layout,
            &vs,
            &fs,
            format,
            &PipelineDesc {
                label: "fill_pipeline",
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_compare: wgpu::CompareFunction::Less,
                // push faces back so the outline drawn on top stays visible
                depth_bias: wgpu::DepthBiasState {
                    constant: 2,
                    slope_scale: 1.0,
                    clamp: 0.0,
                },
            },
        );
        let line_pipeline = make_mesh_pipeline(
            &device,
            &pipeline_layout,
            &vs,
            &fs,
            format,
            &PipelineDesc {
                label: "line_pipeline",
                topology: wgpu::PrimitiveTopology::LineList,
                depth_compare: wgpu::CompareFunction::LessEqual,
                depth_bias: wgpu::DepthBiasState::default(),
            },
        );
        let pipelines_valid = match device.pop_error_scope().await {
            Some(err) => {
                log::error!("[gpu] shader program unusable, drawing nothing: {err}");
                false
            }
            None => true,
        };

        let fill_uniforms = DrawUniforms::new(&device, &bind_group_layout, "fill_uniforms");
        let edge_uniforms = DrawUniforms::new(&device, &bind_group_layout, "edge_uniforms");

        // Geometry never changes; upload once.
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vertices"),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let faces = IndexBuffer::new(&device, "face_indices", mesh.face_indices());
        let edges = IndexBuffer::new(&device, "edge_indices", mesh.edge_indices());
        let triangle_wire =
            IndexBuffer::new(&device, "triangle_wire_indices", &mesh.triangle_wire_indices());

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            depth_view,
            fill_pipeline,
            line_pipeline,
            pipelines_valid,
            fill_uniforms,
            edge_uniforms,
            vertex_buffer,
            faces,
            edges,
            triangle_wire,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        let (_, depth_view) = create_depth_texture(&self.device, new_size.width, new_size.height);
        self.depth_view = depth_view;
    }

    pub fn render(&mut self, state: &ViewState) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let aspect = aspect_ratio(self.config.width, self.config.height);
        let trans = OPENGL_TO_WGPU * state.frame_matrix(aspect);
        self.queue.write_buffer(
            &self.fill_uniforms.buffer,
            0,
            bytemuck::bytes_of(&Uniforms::new(trans, FILL_COLOR)),
        );
        self.queue.write_buffer(
            &self.edge_uniforms.buffer,
            0,
            bytemuck::bytes_of(&Uniforms::new(trans, EDGE_COLOR)),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: CLEAR_COLOR[0],
                            g: CLEAR_COLOR[1],
                            b: CLEAR_COLOR[2],
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if self.pipelines_valid {
                rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

                rpass.set_pipeline(&self.fill_pipeline);
                rpass.set_bind_group(0, &self.fill_uniforms.bind_group, &[]);
                rpass.set_index_buffer(self.faces.buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.faces.count, 0, 0..1);

                let outline = if state.show_triangles {
                    &self.triangle_wire
                } else {
                    &self.edges
                };
                rpass.set_pipeline(&self.line_pipeline);
                rpass.set_bind_group(0, &self.edge_uniforms.bind_group, &[]);
                rpass.set_index_buffer(outline.buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..outline.count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
