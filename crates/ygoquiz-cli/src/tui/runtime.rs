use std::{io, time::Duration};

use super::{App, event::TuiEvent, event_loop::EventLoop};

#[derive(Debug)]
pub(crate) struct Runtime {
    events: EventLoop,
}

impl Runtime {
    pub(crate) fn new(tick_interval: Duration) -> Self {
        Self {
            events: EventLoop::new(tick_interval),
        }
    }

    /// Runs `app` in the alternate screen until [`App::should_exit`] returns `true`.
    pub(crate) fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        if app.update() {
                            self.events.mark_dirty();
                        }
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Key(key) => app.handle_key(key),
                }
            }
            Ok(())
        })
    }
}
