mod bindings;
mod render;

use dodeca_core::{
    Action, Dodecahedron, InputTracker, ShaderSources, ViewState, SCROLL_PIXELS_PER_LINE,
    WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

use render::GpuState;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(-1);
    }
}

fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;

    let mesh = Dodecahedron::new();
    let shaders = ShaderSources::load_default();
    let mut gpu = pollster::block_on(GpuState::new(&window, &mesh, &shaders))?;
    log::info!("[keys] {}", bindings::HELP);

    let mut view = ViewState::default();
    let mut input = InputTracker::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Focused(false) => input.release_all(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ..
                    },
                is_synthetic,
                ..
            } => {
                if let Some(action) = bindings::action_for_key(code) {
                    // synthetic presses replay keys still down when focus returns
                    input.key(action, state == ElementState::Pressed, repeat || is_synthetic);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / SCROLL_PIXELS_PER_LINE,
                };
                input.scroll(lines);
            }
            _ => {}
        },
        Event::AboutToWait => {
            let snapshot = input.snapshot();
            if snapshot.was_pressed(Action::Quit) {
                elwt.exit();
                return;
            }
            view = view.updated(&snapshot);
            match gpu.render(&view) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu.resize(gpu.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit()
                }
                Err(err) => log::warn!("[gpu] dropped frame: {err}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
