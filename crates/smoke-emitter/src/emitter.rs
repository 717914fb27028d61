//! The smoke emitter: a ring of sprites recycled one slot per tick.

use std::fmt;
use std::time::{Duration, Instant};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use smoke_core::{Result, SmokeConfig, SmokeError};
use tracing::{debug, trace};

use crate::{DefaultDrift, Drift, ElementStyle, Schedule, Settings, Sprite, StopHandle, Surface, Z_BASE};

/// Everything needed to build an [`Emitter`].
pub struct SmokeOptions<S> {
    /// Surface to draw on; [`Surface::document_root`] when unset.
    pub parent: Option<S>,
    /// Values to resolve into [`Settings`].
    pub config: SmokeConfig,
    /// Per-tick increments; [`DefaultDrift`] when unset.
    pub drift: Option<Box<dyn Drift>>,
}

impl<S> Default for SmokeOptions<S> {
    fn default() -> Self {
        Self {
            parent: None,
            config: SmokeConfig::default(),
            drift: None,
        }
    }
}

impl<S> SmokeOptions<S> {
    /// Construct options with no parent, default config and default drift.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw on `parent` instead of the document root.
    pub fn parent(mut self, parent: S) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Use `config` for sizes, colours and timing.
    pub fn config(mut self, config: SmokeConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the stock per-tick increments.
    pub fn drift(mut self, drift: impl Drift + 'static) -> Self {
        let drift: Box<dyn Drift> = Box::new(drift);
        self.drift = Some(drift);
        self
    }
}

/// Stacking order of ring slot `index` while `cursor` is the newest slot.
///
/// Slots at or before the cursor were reset more recently than those after
/// it, so they are lifted by a full ring. The result orders every live sprite
/// by recency of reset with the cursor slot on top.
pub fn stacking_order(index: usize, cursor: usize, capacity: usize) -> i64 {
    let lift = if index <= cursor { capacity } else { 0 };
    Z_BASE + (index + lift) as i64
}

/// Owns the sprite ring, the surface it draws on and the tick schedule.
pub struct Emitter<S: Surface> {
    surface: S,
    settings: Settings,
    drift: Box<dyn Drift>,
    rng: StdRng,
    sprites: Vec<Option<Sprite<S::Handle>>>,
    cursor: usize,
    ticks: u64,
    schedule: Schedule,
}

impl<S: Surface> fmt::Debug for Emitter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("settings", &self.settings)
            .field("cursor", &self.cursor)
            .field("ticks", &self.ticks)
            .field("live", &self.live())
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Emitter<S> {
    /// Build an emitter and run its first tick.
    ///
    /// Fails if no surface is available or the ring would be empty.
    pub fn new(options: SmokeOptions<S>) -> Result<Self> {
        let SmokeOptions {
            parent,
            config,
            drift,
        } = options;

        let surface = parent
            .or_else(S::document_root)
            .ok_or(SmokeError::MissingParent)?;
        let settings = Settings::resolve(&config, surface.content_size())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        debug!(
            sprite_count = settings.sprite_count,
            x = settings.x,
            y = settings.y,
            interval_ms = settings.interval.as_millis() as u64,
            "starting smoke emitter"
        );

        let mut emitter = Self {
            sprites: (0..settings.sprite_count).map(|_| None).collect(),
            schedule: Schedule::new(settings.interval),
            drift: drift.unwrap_or_else(|| Box::new(DefaultDrift)),
            surface,
            settings,
            rng,
            cursor: 0,
            ticks: 0,
        };
        emitter.tick();
        emitter.schedule.rearm(Instant::now());
        Ok(emitter)
    }

    /// Run one tick now, regardless of the schedule.
    ///
    /// Resets the sprite under the cursor, ages every other live sprite,
    /// redraws them all and advances the cursor.
    pub fn tick(&mut self) {
        let cursor = self.cursor;
        let capacity = self.settings.sprite_count;
        let Self {
            surface,
            settings,
            drift,
            rng,
            sprites,
            ..
        } = self;
        let rng: &mut dyn RngCore = rng;

        sprites[cursor]
            .get_or_insert_with(|| Sprite::new(surface.create_element()))
            .reset(settings);

        for (index, slot) in sprites.iter_mut().enumerate() {
            let Some(sprite) = slot else { continue };

            if index != cursor {
                let delta = drift.step(settings, sprite.state(), rng);
                sprite.advance(&delta);
            }

            let z_index = stacking_order(index, cursor, capacity);
            sprite.set_z_index(z_index);
            let style = ElementStyle::for_sprite(sprite.state(), z_index, &settings.palette);
            surface.apply(sprite.element(), &style);
        }

        self.cursor += 1;
        if self.cursor >= capacity {
            self.cursor = 0;
        }
        self.ticks += 1;
        trace!(tick = self.ticks, cursor = self.cursor, "smoke tick");
    }

    /// Run a tick if one is due at `now`. Returns whether a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.schedule.is_due(now) {
            return false;
        }
        self.tick();
        self.schedule.rearm(Instant::now().max(now));
        true
    }

    /// How long a host loop may wait before calling [`Emitter::poll`] again.
    /// `None` once the emitter has been stopped.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.schedule.remaining(now)
    }

    /// Handle that stops the update loop, usable from anywhere.
    pub fn stop_handle(&self) -> StopHandle {
        self.schedule.stop_handle()
    }

    /// Whether the stop handle has fired.
    pub fn is_stopped(&self) -> bool {
        self.schedule.is_stopped()
    }

    /// Stop ticking, remove every display primitive and hand back the
    /// surface.
    pub fn dispose(self) -> S {
        self.schedule.stop_handle().stop();
        let mut surface = self.surface;
        let mut removed = 0;
        for sprite in self.sprites.into_iter().flatten() {
            surface.remove_element(sprite.into_element());
            removed += 1;
        }
        debug!(removed, ticks = self.ticks, "disposed smoke emitter");
        surface
    }

    /// Surface the sprites are drawn on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to resize it.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Configuration with every default filled in.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Ring slot that the next tick resets.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Ticks run so far, including the one at construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of ring slots.
    pub fn capacity(&self) -> usize {
        self.sprites.len()
    }

    /// Number of slots that hold a sprite.
    pub fn live(&self) -> usize {
        self.sprites.iter().filter(|slot| slot.is_some()).count()
    }

    /// Sprite in ring slot `index`, if it has been created.
    pub fn sprite(&self, index: usize) -> Option<&Sprite<S::Handle>> {
        self.sprites.get(index).and_then(Option::as_ref)
    }

    /// Live sprites with their ring index.
    pub fn sprites(&self) -> impl Iterator<Item = (usize, &Sprite<S::Handle>)> {
        self.sprites
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|sprite| (index, sprite)))
    }
}
