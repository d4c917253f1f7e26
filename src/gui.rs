//! Diagnostics overlay drawn over the arena

use egui::{ClippedPrimitive, Context, TexturesDelta};
use egui_wgpu::{Renderer, ScreenDescriptor};
use egui_winit::State;
use wgpu::{Device, TextureFormat};
use winit::{event::WindowEvent, window::Window};

#[derive(Default)]
pub struct UiState {
    pub fps: f32,
    pub frame_time: f32,
    pub body_count: usize,
    pub tick: u64,
    pub paused: bool,
}

/// One frame of tessellated overlay output, ready for upload
struct OverlayFrame {
    primitives: Vec<ClippedPrimitive>,
    textures: TexturesDelta,
    screen: ScreenDescriptor,
}

pub struct Gui {
    state: State,
    renderer: Renderer,
}

impl Gui {
    pub fn new(device: &Device, output_color_format: TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        let viewport = context.viewport_id();
        let max_texture_side = device.limits().max_texture_dimension_2d as usize;

        Self {
            state: State::new(
                context,
                viewport,
                window,
                Some(window.scale_factor() as f32),
                None,
                Some(max_texture_side),
            ),
            renderer: Renderer::new(
                device,
                output_color_format,
                egui_wgpu::RendererOptions {
                    msaa_samples: 1,
                    depth_stencil_format: None,
                    dithering: false,
                    predictable_texture_filtering: false,
                },
            ),
        }
    }

    /// Returns true when the overlay consumed the event
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Lay out the overlay for `ui_state` and paint it on top of `view`
    pub fn draw(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        ui_state: &UiState,
    ) {
        let frame = self.layout(window, ui_state);

        for (id, delta) in &frame.textures.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &frame.primitives, &frame.screen);

        // Load, not clear: the circles are already in the target
        let mut pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();
        self.renderer
            .render(&mut pass, &frame.primitives, &frame.screen);
        drop(pass);

        for id in &frame.textures.free {
            self.renderer.free_texture(id);
        }
    }

    fn layout(&mut self, window: &Window, ui_state: &UiState) -> OverlayFrame {
        let raw_input = self.state.take_egui_input(window);
        let ctx = self.state.egui_ctx().clone();

        let output = ctx.run(raw_input, |ctx| overlay(ctx, ui_state));
        self.state
            .handle_platform_output(window, output.platform_output);

        let size = window.inner_size();
        OverlayFrame {
            primitives: ctx.tessellate(output.shapes, output.pixels_per_point),
            textures: output.textures_delta,
            screen: ScreenDescriptor {
                size_in_pixels: [size.width, size.height],
                pixels_per_point: output.pixels_per_point,
            },
        }
    }
}

fn overlay(ctx: &Context, state: &UiState) {
    // Body count (Top Left)
    egui::Area::new(egui::Id::new("body_count"))
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("Number of Circles: {}", state.body_count))
                    .color(egui::Color32::WHITE)
                    .size(18.0),
            );
        });

    // Diagnostics Panel (Top Right)
    egui::Window::new("Diagnostics")
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            ui.label(format!("FPS: {:.1}", state.fps));
            ui.label(format!("Frame Time: {:.2} ms", state.frame_time));
            ui.separator();
            ui.label(format!("Tick: {}", state.tick));
            if state.paused {
                ui.label("Paused (Space resumes, . steps)");
            }
        });
}
