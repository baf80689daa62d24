//! Landing page node set

use crate::contract::{class, id};
use crate::stage::{Stage, StageError};

/// Number of trailer carousel items on the landing page.
pub const TRAILER_ITEM_COUNT: usize = 5;

/// Number of cards on the ring slider.
pub const PROJETOS_ITEM_COUNT: usize = 6;

/// Build the landing page's stage: the choice section with its two
/// figures, divider and heading, both theme sections, the about and
/// trailer sections, the reset control, and the carousel elements.
///
/// Initial class state mirrors the page markup: everything but the
/// choice section starts hidden, theme sections additionally start
/// settled (`exit-complete`).
pub fn landing_stage() -> Result<Stage, StageError> {
    let mut stage = Stage::new();

    stage.insert(id::ESCOLHA_TEMA)?;
    stage.insert(id::FIGURE_LEFT)?;
    stage.insert(id::FIGURE_RIGHT)?;
    stage.insert(id::VS)?;
    stage.insert(id::ESCOLHA_H2)?;

    for name in [id::WOLVERINE_TEMA, id::DEADPOOL_TEMA] {
        let section = stage.insert(name)?;
        stage.add_class(section, class::HIDDEN);
        stage.add_class(section, class::EXIT_COMPLETE);
    }

    for name in [id::SOBRE_TEMA, id::TRAILER_TEMA, id::RESET_ESCOLHA] {
        let el = stage.insert(name)?;
        stage.add_class(el, class::HIDDEN);
    }

    stage.insert(id::SLIDER)?;
    stage.insert(id::RING_NEXT)?;
    stage.insert(id::RING_PREV)?;
    for index in 0..PROJETOS_ITEM_COUNT {
        stage.insert(&id::projetos_item(index))?;
    }

    stage.insert(id::TRAILER_PREV)?;
    stage.insert(id::TRAILER_NEXT)?;
    for index in 0..TRAILER_ITEM_COUNT {
        stage.insert(&id::trailer_item(index))?;
    }

    Ok(stage)
}
