//! Engine wiring
//!
//! One object owning every component, one dispatch entry for input, one
//! tick advancing the whole page. Single-threaded and cooperative: the
//! only suspension points are the timers and tweens inside the
//! components, all advanced from here.

use vitrine_core::{ControlId, InputEvent};
use vitrine_nav::{NavMachine, Tab};
use vitrine_stage::{landing_stage, Stage, StageError};
use vitrine_theme::{Side, ThemeMachine};
use vitrine_widgets::{HoldDirection, RingSlider, TrailerCarousel};

pub struct Engine {
    stage: Stage,
    theme: ThemeMachine,
    nav: NavMachine,
    ring: RingSlider,
    trailer: TrailerCarousel,
}

impl Engine {
    /// Build the landing stage and run the on-load baseline.
    pub fn new() -> Result<Self, StageError> {
        let mut stage = landing_stage()?;

        let mut theme = ThemeMachine::new();
        theme.on_load(&mut stage);

        let mut trailer = TrailerCarousel::new();
        trailer.initialize(&mut stage);

        Ok(Self {
            stage,
            theme,
            nav: NavMachine::new(),
            ring: RingSlider::new(),
            trailer,
        })
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn theme(&self) -> &ThemeMachine {
        &self.theme
    }

    pub fn nav(&self) -> &NavMachine {
        &self.nav
    }

    pub fn ring(&self) -> &RingSlider {
        &self.ring
    }

    pub fn trailer(&self) -> &TrailerCarousel {
        &self.trailer
    }

    /// Route one input event. Guard validation lives in the components;
    /// rejected input is silently dropped here.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click { target } => self.click(target),
            InputEvent::PointerDown { target, x } => match target {
                ControlId::Slider => self.ring.pointer_down(x),
                ControlId::RingPrev => self.ring.press_hold(&mut self.stage, HoldDirection::Prev),
                ControlId::RingNext => self.ring.press_hold(&mut self.stage, HoldDirection::Next),
                _ => {}
            },
            InputEvent::PointerMove { x } => self.ring.pointer_move(&mut self.stage, x),
            InputEvent::PointerUp => {
                self.ring.pointer_up();
                self.ring.release_hold();
            }
            InputEvent::PointerEnter { target } => {
                if target == ControlId::Slider {
                    self.ring.set_hovered(&mut self.stage, true);
                }
            }
            InputEvent::PointerLeave { target } => match target {
                ControlId::Slider => self.ring.set_hovered(&mut self.stage, false),
                ControlId::RingPrev | ControlId::RingNext => self.ring.release_hold(),
                _ => {}
            },
            InputEvent::TouchStart { target, x } => {
                if target == ControlId::Slider {
                    self.ring.pointer_down(x);
                }
            }
            InputEvent::TouchMove { x } => self.ring.pointer_move(&mut self.stage, x),
            InputEvent::TouchEnd => self.ring.pointer_up(),
        }
    }

    fn click(&mut self, target: ControlId) {
        match target {
            ControlId::ThemeLeft => {
                self.theme.select(&mut self.stage, Side::Esquerdo);
            }
            ControlId::ThemeRight => {
                self.theme.select(&mut self.stage, Side::Direito);
            }
            ControlId::ResetChoice => {
                self.theme.reset(&mut self.stage);
            }
            ControlId::NavInicio => {
                self.nav.navigate(&mut self.stage, Tab::Inicio, &self.theme);
            }
            ControlId::NavSobre => {
                self.nav.navigate(&mut self.stage, Tab::Sobre, &self.theme);
            }
            ControlId::NavTrailer => {
                self.nav.navigate(&mut self.stage, Tab::Trailer, &self.theme);
            }
            ControlId::TrailerPrev => self.trailer.prev(&mut self.stage),
            ControlId::TrailerNext => self.trailer.next(&mut self.stage),
            ControlId::TrailerItem(index) => self.trailer.jump(&mut self.stage, index),
            // The ring buttons act on press/release, not click.
            ControlId::Slider | ControlId::RingPrev | ControlId::RingNext => {}
        }
    }

    /// Advance the whole page by one frame.
    pub fn tick(&mut self, dt_ms: f64) {
        self.theme.tick(&mut self.stage, dt_ms);
        self.nav
            .tick(&mut self.stage, &mut self.theme, &mut self.ring, dt_ms);
        self.ring.tick(&mut self.stage, dt_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_stage::contract::{class, id};

    fn advance(engine: &mut Engine, ms: u64) {
        for _ in 0..ms / 10 {
            engine.tick(10.0);
        }
    }

    #[test]
    fn new_engine_has_the_trailer_rendered() {
        let engine = Engine::new().unwrap();
        let item = engine.stage().lookup(&id::trailer_item(0)).unwrap();
        assert!(engine.stage().has_class(item, class::IS_CENTER));
    }

    #[test]
    fn click_routes_to_the_theme_machine() {
        let mut engine = Engine::new().unwrap();
        advance(&mut engine, 300);

        engine.dispatch(InputEvent::Click {
            target: ControlId::ThemeLeft,
        });
        assert!(engine.theme().is_animating());

        advance(&mut engine, 400);
        assert!(engine.theme().is_locked());
    }

    #[test]
    fn ring_ignores_input_until_initialized() {
        let mut engine = Engine::new().unwrap();
        advance(&mut engine, 300);

        engine.dispatch(InputEvent::PointerDown {
            target: ControlId::Slider,
            x: 0.0,
        });
        engine.dispatch(InputEvent::PointerMove { x: 100.0 });
        assert_eq!(engine.ring().rotation(), 185.0);

        // Navigating to about initializes the slider lazily.
        engine.dispatch(InputEvent::Click {
            target: ControlId::NavSobre,
        });
        advance(&mut engine, 600);
        assert!(engine.ring().is_initialized());
    }
}
