#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::{process::ExitCode, time::Instant};

use grid_pad::{
    canvas::Canvas,
    config::PadConfig,
    error::Result,
    input::InputHandler,
    pad::Pad,
    renderer::{PresentOutcome, Renderer},
};
use log::{error, info};
use winit::{
    dpi::PhysicalSize,
    event::Event,
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
    window::{Window, WindowBuilder},
};
use winit_input_helper::WinitInputHelper;

const BANNER: &str = "\
Welcome to the Grid-Based Drawing Pad!
Controls:
  W/A/S/D: Move cursor up/left/down/right (snap to grid)
  Q/E/Z/C: Move cursor diagonally up-left/up-right/down-left/down-right
  SPACE: Hold to draw
  R/F: Increase/Decrease brush size (1 to 10 grid cells)
  1-8: Change brush color (black, blue, green, cyan, red, magenta, yellow, white)
  X: Clear the canvas
  ESC: Quit
";

fn main() -> ExitCode {
    env_logger::init();
    println!("{BANNER}");

    let config = PadConfig::default();
    let mut event_loop = EventLoop::new();
    let window = match create_window(&config, &event_loop) {
        Ok(window) => window,
        Err(err) => return fail(&err),
    };
    let mut canvas = Canvas::new(config.width, config.height, config.cell_size());
    // SAFETY: `renderer` is declared after `window` and so dropped before it.
    let mut renderer = match unsafe { Renderer::new(&window, &canvas) } {
        Ok(renderer) => renderer,
        Err(err) => return fail(&err),
    };

    let mut input = WinitInputHelper::new();
    let mut handler = InputHandler::new();
    let mut pad = Pad::new(&config);
    let mut exit_code = ExitCode::SUCCESS;
    info!("drawing pad started");

    event_loop.run_return(|event, _, control_flow| {
        if let Event::WindowEvent { event, .. } = &event {
            handler.record(event);
        }
        match event {
            Event::RedrawRequested(_) => match renderer.present(&canvas) {
                PresentOutcome::Presented | PresentOutcome::Skipped => {}
                PresentOutcome::Fatal => {
                    exit_code = ExitCode::FAILURE;
                    *control_flow = ControlFlow::Exit;
                }
            },
            Event::LoopDestroyed => info!("drawing pad shutting down"),
            _ => {
                if input.update(&event) {
                    pad.step(handler.drain(), &mut canvas);
                    window.request_redraw();
                    *control_flow = if pad.is_running() {
                        ControlFlow::WaitUntil(Instant::now() + config.frame_delay)
                    } else {
                        ControlFlow::Exit
                    };
                }
            }
        }
    });
    exit_code
}

fn create_window(config: &PadConfig, event_loop: &EventLoop<()>) -> Result<Window> {
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false)
        .build(event_loop)?;
    Ok(window)
}

fn fail(err: &grid_pad::error::PadError) -> ExitCode {
    error!("{err}");
    eprintln!("Error: {err}");
    ExitCode::FAILURE
}
