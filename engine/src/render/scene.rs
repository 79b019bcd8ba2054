//! Scene Render Pass
//!
//! Owns the GPU-resident block mesh, the per-cell uniform buffer, and the
//! perspective projection, and turns (camera, stage) into one draw
//! submission per solid cell each frame.
//!
//! Traversal is row-major (y outer, x inner), matching the stage's flat
//! index formula. Empty cells are skipped entirely: no uniform write, no
//! draw call. Draw order is deterministic but visually irrelevant since
//! occlusion is handled by the depth test alone.

use glam::{Mat4, Vec3};

use crate::camera::FirstPersonCamera;
use crate::world::CellLookup;

use super::binding_validator::validate_scene_bindings;
use super::gpu_context::GpuContext;
use super::mesh::{Mesh, MeshKind, SceneVertex};
use super::uniforms::{SceneUniforms, UNIFORM_STRIDE, slot_offset};

/// Vertical field of view in degrees.
const FOV_Y_DEG: f32 = 45.0;
/// Near clip plane.
const Z_NEAR: f32 = 0.1;
/// Far clip plane. The demo stage fits comfortably inside 10 units.
const Z_FAR: f32 = 10.0;

/// Scene configuration: which block shape to draw.
///
/// This is where the prototype variants collapse into one renderer.
#[derive(Clone, Copy, Debug)]
pub struct SceneOptions {
    pub mesh: MeshKind,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            mesh: MeshKind::Cube,
        }
    }
}

/// Model matrices for every solid cell, in row-major traversal order.
///
/// Each solid cell `(x, y)` becomes a block at world `(x, 0, y)`. One entry
/// per draw submission; empty cells produce nothing.
pub fn cell_models(stage: &impl CellLookup) -> Vec<((usize, usize), Mat4)> {
    let mut models = Vec::new();
    for y in 0..stage.height() {
        for x in 0..stage.width() {
            if stage.is_solid(x, y) {
                let model = Mat4::from_translation(Vec3::new(x as f32, 0.0, y as f32));
                models.push(((x, y), model));
            }
        }
    }
    models
}

/// Renders the stage as one block mesh per solid cell.
///
/// The mesh and uniform buffers are created once and owned exclusively for
/// the process lifetime.
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    /// Number of uniform slots the buffer was sized for.
    slot_capacity: usize,
    projection: Mat4,
}

impl SceneRenderer {
    /// Build the pipeline and upload the block mesh.
    ///
    /// Fatal on shader binding mismatch: the demo cannot run without its
    /// `mvp` uniform, so this is treated as a startup precondition rather
    /// than a recoverable error.
    pub fn new(gpu: &GpuContext, stage: &impl CellLookup, options: SceneOptions) -> Self {
        let mesh = Mesh::build(options.mesh);
        let vertex_buffer = gpu.create_vertex_buffer("Scene Vertex Buffer", &mesh.vertices);
        let index_buffer = gpu.create_index_buffer("Scene Index Buffer", &mesh.indices);

        // One 256-byte slot per grid cell; only solid cells are ever written.
        let slot_capacity = stage.width() * stage.height();
        let uniform_buffer = gpu.create_empty_uniform_buffer(
            "Scene Uniform Buffer",
            slot_capacity as u64 * UNIFORM_STRIDE,
        );

        let layout_entries = [wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<SceneUniforms>() as u64),
            },
            count: None,
        }];

        let mismatches = validate_scene_bindings(&layout_entries);
        if mismatches > 0 {
            panic!("error: could not bind uniform \"mvp\" ({mismatches} binding mismatches)");
        }

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Scene Bind Group Layout"),
                    entries: &layout_entries,
                });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &uniform_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<SceneUniforms>() as u64),
                }),
            }],
        });

        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Scene Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../../shaders/scene.wgsl").into(),
                ),
            });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Scene Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<SceneVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x3,
                                offset: 0,
                                shader_location: 0,
                            },
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x3,
                                offset: 12,
                                shader_location: 1,
                            },
                        ],
                    }],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    // The original pipeline had no culling stage; the wall
                    // panel mesh needs interior faces visible anyway.
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        let projection = Self::perspective(gpu.aspect_ratio());

        Self {
            pipeline,
            bind_group,
            uniform_buffer,
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            slot_capacity,
            projection,
        }
    }

    fn perspective(aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEG.to_radians(), aspect, Z_NEAR, Z_FAR)
    }

    /// Rebuild the projection after a window resize.
    pub fn resize(&mut self, aspect: f32) {
        self.projection = Self::perspective(aspect);
    }

    /// Record one frame: clear, then one indexed draw per solid cell.
    ///
    /// Returns the number of draw submissions issued.
    pub fn render(
        &self,
        gpu: &GpuContext,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        camera: &FirstPersonCamera,
        stage: &impl CellLookup,
    ) -> u32 {
        let transform = self.projection * camera.view_matrix();

        let models = cell_models(stage);
        debug_assert!(models.len() <= self.slot_capacity);

        for (slot, (_, model)) in models.iter().enumerate() {
            let uniforms = SceneUniforms::new(transform * *model);
            gpu.queue.write_buffer(
                &self.uniform_buffer,
                slot_offset(slot),
                bytemuck::bytes_of(&uniforms),
            );
        }

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &gpu.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        for slot in 0..models.len() {
            pass.set_bind_group(0, &self.bind_group, &[slot_offset(slot) as u32]);
            pass.draw_indexed(0..self.index_count, 0, 0..1);
        }

        models.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Stage;
    use glam::Vec4;

    #[test]
    fn test_cell_models_count_matches_solid_cells() {
        let stage = Stage::demo();
        let models = cell_models(&stage);
        assert_eq!(models.len(), stage.solid_count());
        assert_eq!(models.len(), 86);
    }

    #[test]
    fn test_cell_models_skip_empty_cells() {
        let stage = Stage::demo();
        let models = cell_models(&stage);
        assert!(models.iter().all(|((x, y), _)| stage.is_solid(*x, *y)));
    }

    #[test]
    fn test_cell_model_translation() {
        let stage = Stage::demo();
        // Cell (2, 2) is open in the demo stage; use a fully solid stage to
        // pin the translation formula.
        assert!(!stage.is_solid(2, 2));

        let solid = Stage::new(3, 3, vec![1; 9]).unwrap();
        let models = cell_models(&solid);
        let (_, model) = models
            .iter()
            .find(|((x, y), _)| *x == 2 && *y == 2)
            .unwrap();
        let origin = *model * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(origin, Vec4::new(2.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn test_cell_models_row_major_order() {
        let stage = Stage::new(2, 2, vec![1, 1, 1, 1]).unwrap();
        let coords: Vec<_> = cell_models(&stage).iter().map(|(c, _)| *c).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_empty_stage_no_draws() {
        let stage = Stage::new(4, 4, vec![0; 16]).unwrap();
        assert!(cell_models(&stage).is_empty());
    }
}
