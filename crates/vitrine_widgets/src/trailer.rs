//! Trailer carousel
//!
//! A discrete index over the trailer items. Exactly one item holds
//! `is-center`; its circular neighbors hold `is-left` / `is-right`; every
//! other item holds none of the three.

use vitrine_stage::contract::{class, id};
use vitrine_stage::{ElementId, Stage};

pub struct TrailerCarousel {
    items: Vec<ElementId>,
    current: usize,
    initialized: bool,
}

impl TrailerCarousel {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current: 0,
            initialized: false,
        }
    }

    /// Collect the trailer items and render the initial marks. Aborts
    /// silently (returning false) when the items or step controls are
    /// missing, and is a no-op when already initialized.
    pub fn initialize(&mut self, stage: &mut Stage) -> bool {
        if self.initialized {
            return true;
        }

        let mut items = Vec::new();
        let mut index = 0;
        while let Some(item) = stage.lookup(&id::trailer_item(index)) {
            items.push(item);
            index += 1;
        }

        if items.is_empty()
            || stage.lookup(id::TRAILER_PREV).is_none()
            || stage.lookup(id::TRAILER_NEXT).is_none()
        {
            tracing::debug!("trailer carousel collaborators missing, skipping init");
            return false;
        }

        self.items = items;
        self.current = 0;
        self.initialized = true;
        self.render(stage);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    fn normalize(&self, index: isize) -> usize {
        let total = self.items.len() as isize;
        (((index % total) + total) % total) as usize
    }

    pub fn prev(&mut self, stage: &mut Stage) {
        if !self.initialized {
            return;
        }
        self.current = self.normalize(self.current as isize - 1);
        self.render(stage);
    }

    pub fn next(&mut self, stage: &mut Stage) {
        if !self.initialized {
            return;
        }
        self.current = self.normalize(self.current as isize + 1);
        self.render(stage);
    }

    /// Jump straight to an item. Clicking the centered item is a no-op.
    pub fn jump(&mut self, stage: &mut Stage, index: usize) {
        if !self.initialized || index >= self.items.len() || index == self.current {
            return;
        }
        self.current = index;
        self.render(stage);
    }

    /// Reassign the center/left/right marks for the current index.
    fn render(&mut self, stage: &mut Stage) {
        for &item in &self.items {
            stage.remove_class(item, class::IS_LEFT);
            stage.remove_class(item, class::IS_CENTER);
            stage.remove_class(item, class::IS_RIGHT);
        }

        let left = self.normalize(self.current as isize - 1);
        let right = self.normalize(self.current as isize + 1);

        stage.add_class(self.items[self.current], class::IS_CENTER);
        stage.add_class(self.items[left], class::IS_LEFT);
        stage.add_class(self.items[right], class::IS_RIGHT);
    }
}

impl Default for TrailerCarousel {
    fn default() -> Self {
        Self::new()
    }
}
