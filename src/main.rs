use std::process::ExitCode;

use glyphcube::config::{Command, Config, USAGE};
use glyphcube::engine::Engine;
use glyphcube::render::Renderer;
use glyphcube::window::{FrameLimiter, Window, WindowEvent};

const TITLE: &str = "glyphcube";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let result = match config.frames {
        Some(frames) => run_headless(&config, frames),
        None => run_window(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders `frames` frames and prints the last one to stdout.
fn run_headless(config: &Config, frames: u64) -> Result<(), String> {
    let mut engine = Engine::new(config).map_err(|e| e.to_string())?;
    for _ in 0..frames {
        engine.step();
    }
    print!("{}", engine.frame());
    save_screenshot(config, &engine)?;
    log::info!("rendered {frames} frames");
    Ok(())
}

fn run_window(config: &Config) -> Result<(), String> {
    let mut engine = Engine::new(config).map_err(|e| e.to_string())?;
    let mut renderer = Renderer::new(config.screen_width, config.screen_height);
    let mut window = Window::new(TITLE, config.screen_width, config.screen_height)?;
    let mut frame_limiter = FrameLimiter::new(&window, config.fps);

    loop {
        frame_limiter.wait_and_get_delta(&window);

        if window.poll_events() == WindowEvent::Quit {
            break;
        }

        engine.step();
        renderer.draw_frame(engine.frame(), config.cell_size);
        window.present(renderer.as_bytes())?;
    }

    save_screenshot(config, &engine)?;
    log::info!("stopped after {} frames", engine.frame_count());
    Ok(())
}

fn save_screenshot(config: &Config, engine: &Engine) -> Result<(), String> {
    let Some(path) = &config.screenshot else {
        return Ok(());
    };
    let mut renderer = Renderer::new(config.screen_width, config.screen_height);
    renderer.draw_frame(engine.frame(), config.cell_size);
    renderer.save(path).map_err(|e| e.to_string())?;
    log::info!("saved frame {} to {}", engine.frame_count(), path.display());
    Ok(())
}
