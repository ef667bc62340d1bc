use log::{error, info, warn};
use wgpu::{
    Adapter, BindGroup, BindGroupDescriptor, BindGroupEntry, BindGroupLayout,
    BindGroupLayoutDescriptor, BindGroupLayoutEntry, BindingResource, BindingType, Color,
    CommandEncoderDescriptor, Device, DeviceDescriptor, Extent3d, Features, FilterMode,
    FragmentState, Limits, LoadOp, MultisampleState, Operations, PipelineLayoutDescriptor,
    PowerPreference, PrimitiveState, PrimitiveTopology, Queue, RenderPassColorAttachment,
    RenderPassDescriptor, RenderPipeline, RenderPipelineDescriptor, RequestAdapterOptions,
    SamplerBindingType, SamplerDescriptor, ShaderStages, Surface, SurfaceConfiguration,
    SurfaceError, Texture, TextureDescriptor, TextureDimension, TextureFormat,
    TextureSampleType, TextureUsages, TextureViewDescriptor, TextureViewDimension, VertexState,
};
use winit::window::Window;

use crate::{
    canvas::Canvas,
    error::{PadError, Result},
};

/// What the caller should do after a frame was attempted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PresentOutcome {
    Presented,
    Skipped,
    Fatal,
}

/// GPU side of the pad: uploads the canvas into a texture each frame and
/// draws it over a white-cleared surface.
pub struct Renderer {
    _instance: wgpu::Instance,
    surface: Surface,
    _adapter: Adapter,
    device: Device,
    queue: Queue,
    surface_config: SurfaceConfiguration,
    pipeline: RenderPipeline,
    canvas_texture: Texture,
    bind_group: BindGroup,
    canvas_size: Extent3d,
}

impl Renderer {
    /// Acquires surface, adapter, device and canvas texture for `window`.
    ///
    /// # Safety
    ///
    /// The surface keeps a raw handle to `window`, so the window must
    /// outlive the returned renderer.
    ///
    /// # Errors
    ///
    /// Any resource the graphics backend refuses to create.
    pub unsafe fn new(window: &Window, canvas: &Canvas) -> Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            dx12_shader_compiler: wgpu::Dx12Compiler::default(),
        });
        let surface = instance.create_surface(window)?;
        let adapter = futures::executor::block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(PadError::NoAdapter)?;
        info!("using adapter {:?}", adapter.get_info());

        let (device, queue) = futures::executor::block_on(adapter.request_device(
            &DeviceDescriptor {
                label: Some("pad device"),
                features: Features::empty(),
                limits: Limits::default(),
            },
            None,
        ))?;

        // The window is not resizable and may still report 0x0 here.
        let canvas_size = canvas_extent(canvas);
        let capabilities = surface.get_capabilities(&adapter);
        let format = capabilities
            .formats
            .iter()
            .copied()
            .find(|format| format.describe().srgb)
            .or_else(|| capabilities.formats.first().copied())
            .ok_or(PadError::NoSurfaceFormat)?;
        let surface_config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width: canvas_size.width,
            height: canvas_size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
        };
        surface.configure(&device, &surface_config);

        let canvas_texture = device.create_texture(&TextureDescriptor {
            label: Some("canvas texture"),
            size: canvas_size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8UnormSrgb,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let bind_group_layout = Self::create_bind_group_layout(&device);
        let bind_group = Self::create_bind_group(&device, &bind_group_layout, &canvas_texture);
        let pipeline = Self::create_composite_pipeline(&device, &bind_group_layout, format);

        Ok(Self {
            _instance: instance,
            surface,
            _adapter: adapter,
            device,
            queue,
            surface_config,
            pipeline,
            canvas_texture,
            bind_group,
            canvas_size,
        })
    }

    fn create_bind_group_layout(device: &Device) -> BindGroupLayout {
        device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("canvas layout"),
            entries: &[
                BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Texture {
                        multisampled: false,
                        view_dimension: TextureViewDimension::D2,
                        sample_type: TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: 1,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Sampler(SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        })
    }

    fn create_bind_group(device: &Device, layout: &BindGroupLayout, texture: &Texture) -> BindGroup {
        let view = texture.create_view(&TextureViewDescriptor::default());
        let sampler = device.create_sampler(&SamplerDescriptor {
            label: Some("canvas sampler"),
            mag_filter: FilterMode::Nearest,
            min_filter: FilterMode::Nearest,
            ..SamplerDescriptor::default()
        });
        device.create_bind_group(&BindGroupDescriptor {
            label: Some("canvas bind group"),
            layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&sampler),
                },
            ],
        })
    }

    fn create_composite_pipeline(
        device: &Device,
        bind_group_layout: &BindGroupLayout,
        format: TextureFormat,
    ) -> RenderPipeline {
        let shader = device.create_shader_module(wgpu::include_wgsl!("composite.wgsl"));
        let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("composite layout"),
            bind_group_layouts: &[bind_group_layout],
            push_constant_ranges: &[],
        });
        device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("composite pipeline"),
            layout: Some(&layout),
            vertex: VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[],
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleStrip,
                ..PrimitiveState::default()
            },
            depth_stencil: None,
            multisample: MultisampleState::default(),
            multiview: None,
        })
    }

    /// Clears the frame to white, copies the whole canvas onto it and presents.
    pub fn present(&mut self, canvas: &Canvas) -> PresentOutcome {
        let output_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                warn!("surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                return PresentOutcome::Skipped;
            }
            Err(SurfaceError::Timeout) => {
                warn!("timed out waiting for surface texture");
                return PresentOutcome::Skipped;
            }
            Err(err) => {
                error!("cannot acquire surface texture: {err}");
                return PresentOutcome::Fatal;
            }
        };

        self.queue.write_texture(
            wgpu::ImageCopyTexture {
                aspect: wgpu::TextureAspect::All,
                texture: &self.canvas_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            canvas.as_bytes(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: std::num::NonZeroU32::new(4 * self.canvas_size.width),
                rows_per_image: std::num::NonZeroU32::new(self.canvas_size.height),
            },
            self.canvas_size,
        );

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("composite encoder"),
            });
        {
            let view = output_texture
                .texture
                .create_view(&TextureViewDescriptor::default());
            let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("composite pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(Color::WHITE),
                        store: true,
                    },
                })],
                depth_stencil_attachment: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.draw(0..4, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        output_texture.present();
        PresentOutcome::Presented
    }
}

/// Size shared by the canvas texture and the window surface.
const fn canvas_extent(canvas: &Canvas) -> Extent3d {
    Extent3d {
        width: canvas.width(),
        height: canvas.height(),
        depth_or_array_layers: 1,
    }
}
