//! Terminal trader quiz runner (default binary).
//!
//! Reads configuration, sets up file logging, then runs a fixed-timestep
//! loop: render, poll input until the next tick, tick the controller.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use trader_quiz::engine::Quiz;
use trader_quiz::input::{handle_key_event, should_quit, GuessLine, InputEvent};
use trader_quiz::term::{FrameBuffer, FrameClock, GameView, Screen, TerminalRenderer, Viewport};
use trader_quiz::types::TICK_MS;
use trader_quiz::{logging, Config};

fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!(error = %e, "quiz exited with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut quiz = Quiz::new(config.quiz_config(), Screen::new());
    let view = GameView::default();
    let mut line = GuessLine::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut clock = FrameClock::new(TICK_MS, Instant::now());

    loop {
        if quiz.presenter_mut().take_guess_clear() {
            line.clear();
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(quiz.presenter(), line.as_str(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = clock.timeout(Instant::now());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let prompt_open = quiz.help_prompt_open();
                    if should_quit(key, prompt_open) {
                        let dropped = quiz.shutdown();
                        tracing::info!(dropped, "quit");
                        return Ok(());
                    }

                    match handle_key_event(key, prompt_open) {
                        Some(InputEvent::Command(command)) => {
                            quiz.apply_command(command, line.as_str());
                        }
                        Some(InputEvent::Char(ch)) => {
                            line.insert(ch);
                        }
                        Some(InputEvent::Backspace) => {
                            line.backspace();
                        }
                        Some(InputEvent::ClearLine) => line.clear(),
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time so delays stay wall-clock accurate.
        if let Some(ms) = clock.take_due(Instant::now()) {
            quiz.tick(ms);
        }
    }
}
