use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    clock::{Clock, TickScheduler},
    config::GameConfig,
    game_state::{GameState, Side},
    input::{InputSource, Key},
    physics, render,
    surface::Surface,
    GameError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Init,
    Playing,
    Finished(Side),
    Interrupted,
}

/// what a single tick ended with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Finished(Side),
    Interrupted,
}

/// how a whole session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won { winner: Side, elapsed: Duration },
    Interrupted { elapsed: Duration },
}

/// the game loop. owns the session state and both collaborators for the session's lifetime.
pub struct Game<S, I, C> {
    state: GameState,
    surface: S,
    input: I,
    clock: C,
    scheduler: TickScheduler,
    phase: Phase,
    started_at: Duration,
    ticks: u64,
}

impl<S: Surface, I: InputSource, C: Clock> Game<S, I, C> {
    pub fn new(config: GameConfig, surface: S, input: I, clock: C) -> Self {
        Self::with_state(config, GameState::new(), surface, input, clock)
    }

    /// starts a session from an arbitrary state instead of the kick-off position.
    pub fn with_state(
        config: GameConfig,
        state: GameState,
        surface: S,
        input: I,
        clock: C,
    ) -> Self {
        Self {
            state,
            surface,
            input,
            clock,
            scheduler: TickScheduler::new(config.tick_period),
            phase: Phase::Init,
            started_at: Duration::ZERO,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// ticks processed since the session started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started_at)
    }

    pub fn initialize(&mut self) -> Result<(), GameError> {
        self.surface.set_cursor_visible(false)?;
        render::redraw_field(&mut self.surface)?;
        self.surface.flush()?;
        self.started_at = self.clock.now();
        self.scheduler.reset(self.started_at);
        self.phase = Phase::Playing;
        info!(
            tick_ms = self.scheduler.period().as_millis() as u64,
            "game started"
        );
        Ok(())
    }

    /// render, move the ball, resolve collisions and scoring, then read at most one key.
    /// once the session has ended this does nothing and reports the same outcome again.
    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        match self.phase {
            Phase::Init => self.initialize()?,
            Phase::Playing => {}
            Phase::Finished(winner) => return Ok(TickOutcome::Finished(winner)),
            Phase::Interrupted => return Ok(TickOutcome::Interrupted),
        }
        // a session may start from a finished score.
        if let Some(winner) = self.state.score.winner() {
            self.finish(winner)?;
            return Ok(TickOutcome::Finished(winner));
        }
        self.ticks += 1;

        render::draw_frame(&mut self.surface, &self.state)?;
        self.surface.flush()?;

        self.scheduler.wait_for_tick(&mut self.clock);
        render::erase_ball(&mut self.surface, &self.state.ball)?;
        physics::advance_ball(&mut self.state.ball);

        if let Some(scorer) = physics::resolve_collisions(&mut self.state) {
            info!(%scorer, score = %self.state.score, "point scored");
            render::redraw_field(&mut self.surface)?;
            if let Some(winner) = self.state.score.winner() {
                self.finish(winner)?;
                return Ok(TickOutcome::Finished(winner));
            }
        }

        match self.input.poll_key()? {
            Some(Key::Interrupt) => {
                warn!(score = %self.state.score, "game interrupted");
                self.phase = Phase::Interrupted;
                return Ok(TickOutcome::Interrupted);
            }
            Some(key) => self.state.apply_key(key),
            None => {}
        }
        Ok(TickOutcome::Continue)
    }

    /// ticks until a player reaches the winning score or the game is interrupted.
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        if self.phase == Phase::Init {
            self.initialize()?;
        }
        loop {
            match self.tick()? {
                TickOutcome::Continue => {}
                TickOutcome::Finished(winner) => {
                    return Ok(Outcome::Won {
                        winner,
                        elapsed: self.elapsed(),
                    })
                }
                TickOutcome::Interrupted => {
                    return Ok(Outcome::Interrupted {
                        elapsed: self.elapsed(),
                    })
                }
            }
        }
    }

    fn finish(&mut self, winner: Side) -> Result<(), GameError> {
        self.phase = Phase::Finished(winner);
        let elapsed = self.elapsed();
        render::draw_winner(&mut self.surface, winner, elapsed)?;
        self.surface.flush()?;
        info!(%winner, score = %self.state.score, ticks = self.ticks, ?elapsed, "game over");
        debug!("no further ticks will be processed");
        Ok(())
    }
}
