pub mod error;
pub mod life;
pub mod render;
pub mod settings;

use std::io;

use log::{debug, info};

pub use crate::error::{LifeError, LifeResult};
pub use crate::life::{create_next_generation, derive_seed, Cell, CellState, RandomSource, Universe};
pub use crate::render::{Renderer, TerminalRenderer};
pub use crate::settings::Settings;

/// Reads the grid size from stdin and plays the configured number of
/// generations to stdout.
pub fn run() -> LifeResult<()> {
    let settings = Settings::from_reader(io::stdin().lock())?;
    run_with(settings)
}

/// Plays `settings` to stdout.
pub fn run_with(settings: Settings) -> LifeResult<()> {
    let mut renderer = TerminalRenderer::stdout(settings.frame_delay);
    play(settings, &mut renderer)?;
    Ok(())
}

/// Derives the universe seed, seeds the first generation and simulates it
/// into `renderer`.
pub fn play<R: Renderer>(settings: Settings, renderer: &mut R) -> LifeResult<Universe> {
    let seed = derive_seed(settings.master_seed);
    info!(
        "Starting {}x{} universe with seed {} for {} generations",
        settings.size, settings.size, seed, settings.generations
    );

    let universe = Universe::create(settings.size, seed)?;
    let last = simulate(universe, settings.generations, renderer)?;

    info!("Finished at generation {} with {} alive", last.generations_passed(), last.alive_cells());
    Ok(last)
}

/// Draws `universe`, then advances and draws it `generations` times.
/// Returns the final generation.
pub fn simulate<R: Renderer>(universe: Universe, generations: u64, renderer: &mut R) -> LifeResult<Universe> {
    let mut universe = universe;
    renderer.draw(&universe)?;

    for _ in 0..generations {
        // Drop the previous grid as soon as its successor exists
        universe = universe.next_generation();
        debug!("Generation #{}: {} alive", universe.generations_passed(), universe.alive_cells());

        renderer.between_frames()?;
        renderer.draw(&universe)?;
    }

    Ok(universe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, usize)>,
        pauses: usize,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, universe: &Universe) -> LifeResult<()> {
            self.frames.push((universe.generations_passed(), universe.alive_cells()));
            Ok(())
        }

        fn between_frames(&mut self) -> LifeResult<()> {
            self.pauses += 1;
            Ok(())
        }
    }

    struct Broken;

    impl Renderer for Broken {
        fn draw(&mut self, _: &Universe) -> LifeResult<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed").into())
        }
    }

    #[test]
    fn simulate_draws_every_generation() {
        let universe = Universe::create(8, 3).unwrap();
        let mut recorder = Recorder::default();
        let last = simulate(universe, 5, &mut recorder).unwrap();

        let generations: Vec<u64> = recorder.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(recorder.pauses, 5);
        assert_eq!(last.generations_passed(), 6);
        assert_eq!(recorder.frames.last(), Some(&(6, last.alive_cells())));
    }

    #[test]
    fn simulate_matches_manual_steps() {
        let universe = Universe::create(10, 77).unwrap();
        let mut manual = universe.clone();
        for _ in 0..12 {
            manual = create_next_generation(&manual);
        }
        let last = simulate(universe, 12, &mut Recorder::default()).unwrap();
        assert_eq!(last, manual);
    }

    #[test]
    fn zero_generations_draws_once() {
        let universe = Universe::create(4, 1).unwrap();
        let mut recorder = Recorder::default();
        simulate(universe, 0, &mut recorder).unwrap();
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(recorder.pauses, 0);
    }

    #[test]
    fn play_seeds_from_master_seed() {
        let settings = Settings { generations: 3, frame_delay: Duration::ZERO, ..Settings::new(7) };
        let mut recorder = Recorder::default();
        let last = play(settings, &mut recorder).unwrap();

        let mut expected = Universe::create(7, derive_seed(99)).unwrap();
        assert_eq!(recorder.frames.first(), Some(&(1, expected.alive_cells())));
        for _ in 0..3 {
            expected = expected.next_generation();
        }
        assert_eq!(last, expected);
        assert_eq!(recorder.frames.len(), 4);
        assert_eq!(recorder.pauses, 3);
    }

    #[test]
    fn run_with_rejects_empty_universe_before_drawing() {
        let settings = Settings { frame_delay: Duration::ZERO, ..Settings::new(0) };
        assert!(matches!(run_with(settings), Err(LifeError::EmptyGrid)));
    }

    #[test]
    fn renderer_errors_stop_the_loop() {
        let universe = Universe::create(4, 1).unwrap();
        assert!(matches!(simulate(universe, 10, &mut Broken), Err(LifeError::Io(_))));
    }
}
