use glam::Mat4;
use nexus_core::constants::MAX_LIGHTS;
use nexus_core::model::{Material, MeshPart, PhoneModel};
use nexus_core::{hex_to_linear, RigState, Transform};
use std::rc::Rc;
use web_sys as web;
use wgpu::util::DeviceExt;

pub mod helpers;
pub mod texture;

use helpers::{create_depth_texture, make_phone_pipeline, uniform_layout_entry, upload_rgba_texture};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LightPacked {
    color: [f32; 4],
    position: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    settings: [f32; 4],
    lights: [LightPacked; MAX_LIGHTS],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PartUniforms {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    base_color: [f32; 4],
    emissive: [f32; 4],
    pbr: [f32; 4],
}

fn scene_uniforms(state: &RigState) -> SceneUniforms {
    let mut lights = [LightPacked {
        color: [0.0; 4],
        position: [0.0; 4],
        params: [0.0; 4],
    }; MAX_LIGHTS];
    for (slot, light) in lights.iter_mut().zip(&state.config.lights) {
        let color = hex_to_linear(light.color);
        let position = light.position();
        *slot = LightPacked {
            color: [color.x, color.y, color.z, light.intensity],
            position: [position.x, position.y, position.z, light.kind_tag()],
            params: [light.range(), 0.0, 0.0, 0.0],
        };
    }
    let eye = state.camera.eye;
    SceneUniforms {
        view_proj: state.camera.view_projection().to_cols_array_2d(),
        camera_pos: [eye.x, eye.y, eye.z, 1.0],
        settings: [
            state.config.exposure,
            state.config.lights.len().min(MAX_LIGHTS) as f32,
            0.0,
            0.0,
        ],
        lights,
    }
}

fn part_uniforms(model: Mat4, material: &Material) -> PartUniforms {
    let normal_matrix = model.inverse().transpose();
    let c = material.base_color;
    let e = material.emissive;
    PartUniforms {
        model: model.to_cols_array_2d(),
        normal_matrix: normal_matrix.to_cols_array_2d(),
        base_color: [c.x, c.y, c.z, 1.0],
        emissive: [e.x, e.y, e.z, material.emissive_intensity],
        pbr: [
            material.metalness,
            material.roughness,
            material.reflectivity,
            if material.texture.is_some() { 1.0 } else { 0.0 },
        ],
    }
}

/// Device, queue and the pipeline inputs every rig shares.
pub struct GpuContext {
    _instance: wgpu::Instance,
    adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    shader: wgpu::ShaderModule,
    scene_bgl: wgpu::BindGroupLayout,
    part_bgl: wgpu::BindGroupLayout,
    pipeline_layout: wgpu::PipelineLayout,
    sampler: wgpu::Sampler,
    white_view: wgpu::TextureView,
}

impl GpuContext {
    /// Create one surface per canvas and a single device that draws them all.
    pub async fn new(
        canvases: &[web::HtmlCanvasElement],
    ) -> anyhow::Result<(Rc<Self>, Vec<wgpu::Surface<'static>>)> {
        let instance = wgpu::Instance::default();
        let mut surfaces = Vec::with_capacity(canvases.len());
        for canvas in canvases {
            surfaces.push(instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?);
        }
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: surfaces.first(),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("phone_shader"),
            source: wgpu::ShaderSource::Wgsl(nexus_core::PHONE_WGSL.into()),
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[uniform_layout_entry(0)],
        });
        let part_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("part_bgl"),
            entries: &[
                uniform_layout_entry(0),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("phone_pl"),
            bind_group_layouts: &[&scene_bgl, &part_bgl],
            push_constant_ranges: &[],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        // bound for untextured parts
        let (_, white_view) = upload_rgba_texture(&device, &queue, "white", 1, 1, &[255; 4]);

        log::info!("WebGPU ready: {:?}", adapter.get_info().backend);
        let gpu = Self {
            _instance: instance,
            adapter,
            device,
            queue,
            shader,
            scene_bgl,
            part_bgl,
            pipeline_layout,
            sampler,
            white_view,
        };
        Ok((Rc::new(gpu), surfaces))
    }

    fn surface_config(&self, surface: &wgpu::Surface<'_>, width: u32, height: u32) -> wgpu::SurfaceConfiguration {
        let caps = surface.get_capabilities(&self.adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb);
        // transparent canvas so the page background shows through
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }
}

/// One drawable part of this rig's phone clone.
struct GpuPart {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    local: Mat4,
    material: Material,
    _texture: Option<wgpu::Texture>,
}

pub struct RigRenderer {
    gpu: Rc<GpuContext>,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    depth_view: wgpu::TextureView,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    parts: Vec<GpuPart>,
}

impl RigRenderer {
    pub fn new(gpu: Rc<GpuContext>, surface: wgpu::Surface<'static>, width: u32, height: u32) -> Self {
        let config = gpu.surface_config(&surface, width, height);
        surface.configure(&gpu.device, &config);
        let pipeline = make_phone_pipeline(&gpu.device, &gpu.pipeline_layout, &gpu.shader, config.format);
        let (_, depth_view) = create_depth_texture(&gpu.device, config.width, config.height);
        let scene_buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &gpu.scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });
        Self {
            gpu,
            surface,
            config,
            pipeline,
            depth_view,
            scene_buffer,
            scene_bind_group,
            parts: Vec::new(),
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.gpu.device, &self.config);
        let (_, depth_view) = create_depth_texture(&self.gpu.device, self.config.width, self.config.height);
        self.depth_view = depth_view;
    }

    /// Upload this rig's copy of the phone. `painted` holds the drawn texture
    /// for each part that has one, index-aligned with `model.parts`.
    pub fn upload_phone(&mut self, model: &PhoneModel, painted: &[Option<texture::Pixels>]) {
        self.parts = model
            .parts
            .iter()
            .enumerate()
            .filter(|(_, part)| !part.mesh.is_empty())
            .map(|(i, part)| self.upload_part(part, painted.get(i).and_then(Option::as_ref)))
            .collect();
    }

    fn upload_part(&self, part: &MeshPart, pixels: Option<&texture::Pixels>) -> GpuPart {
        let device = &self.gpu.device;
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(part.name.as_str()),
            contents: bytemuck::cast_slice(&part.mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(part.name.as_str()),
            contents: bytemuck::cast_slice(&part.mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("part_uniforms"),
            size: std::mem::size_of::<PartUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut material = part.material.clone();
        let texture = match pixels {
            Some(p) => Some(upload_rgba_texture(
                device,
                &self.gpu.queue,
                &part.name,
                p.width,
                p.height,
                &p.rgba,
            )),
            None => {
                // nothing was drawn, shade with material factors alone
                material.texture = None;
                None
            }
        };
        let view = texture.as_ref().map(|(_, v)| v).unwrap_or(&self.gpu.white_view);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("part_bg"),
            layout: &self.gpu.part_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.gpu.sampler),
                },
            ],
        });
        GpuPart {
            vertex_buffer,
            index_buffer,
            index_count: part.mesh.indices.len() as u32,
            uniform_buffer,
            bind_group,
            local: part.local,
            material,
            _texture: texture.map(|(t, _)| t),
        }
    }

    pub fn render(&mut self, state: &RigState) -> Result<(), wgpu::SurfaceError> {
        let queue = &self.gpu.queue;
        queue.write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&scene_uniforms(state)));
        let pose = state.phone.map(|p| p.current).unwrap_or(Transform::IDENTITY);
        for part in &self.parts {
            let uniforms = part_uniforms(pose.matrix() * part.local, &part.material);
            queue.write_buffer(&part.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some(state.kind().name()),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("phone_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if state.phone.is_some() {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.scene_bind_group, &[]);
                for part in &self.parts {
                    pass.set_bind_group(1, &part.bind_group, &[]);
                    pass.set_vertex_buffer(0, part.vertex_buffer.slice(..));
                    pass.set_index_buffer(part.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    pass.draw_indexed(0..part.index_count, 0, 0..1);
                }
            }
        }
        queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
