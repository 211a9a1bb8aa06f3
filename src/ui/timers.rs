// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tracked timer scheduling
//!
//! Every delayed or repeating callback in the UI (toast auto-dismiss,
//! cookie banner reveal, counter ticks, smooth scroll, submit delay,
//! preloader fade) runs through a `TimerRegistry`. The registry keeps the
//! glib source id of every outstanding timer and cancels all of them on
//! component teardown, so no callback can fire against widgets that are
//! being torn down.
//!
//! Callbacks unregister themselves on completion; `cancel_all` only ever
//! removes sources that are still live.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Tracks the outstanding glib timers of one component instance
pub struct TimerRegistry {
    /// Live sources by registry slot
    active: Rc<RefCell<HashMap<u64, glib::SourceId>>>,
    /// Next slot number
    next_slot: Cell<u64>,
}

impl Default for TimerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self {
            active: Rc::new(RefCell::new(HashMap::new())),
            next_slot: Cell::new(0),
        }
    }

    fn claim_slot(&self) -> u64 {
        let slot = self.next_slot.get();
        self.next_slot.set(slot + 1);
        slot
    }

    /// Schedules a one-shot callback after `delay`
    ///
    /// The callback removes its own registration before running, so a
    /// later `cancel_all` never touches an already-fired source.
    pub fn once<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let slot = self.claim_slot();
        let active = Rc::clone(&self.active);

        let source = glib::timeout_add_local_once(delay, move || {
            active.borrow_mut().remove(&slot);
            callback();
        });

        self.active.borrow_mut().insert(slot, source);
    }

    /// Schedules a repeating callback every `interval`
    ///
    /// The callback keeps firing until it returns `ControlFlow::Break`,
    /// at which point it unregisters itself.
    pub fn repeating<F>(&self, interval: Duration, mut callback: F)
    where
        F: FnMut() -> glib::ControlFlow + 'static,
    {
        let slot = self.claim_slot();
        let active = Rc::clone(&self.active);

        let source = glib::timeout_add_local(interval, move || {
            let flow = callback();
            if flow == glib::ControlFlow::Break {
                active.borrow_mut().remove(&slot);
            }
            flow
        });

        self.active.borrow_mut().insert(slot, source);
    }

    /// Cancels every outstanding timer
    ///
    /// Safe to call repeatedly; completed timers have already removed
    /// themselves.
    pub fn cancel_all(&self) {
        let sources: Vec<glib::SourceId> = {
            let mut active = self.active.borrow_mut();
            active.drain().map(|(_, source)| source).collect()
        };

        for source in sources {
            source.remove();
        }
    }

    /// Number of timers still outstanding
    pub fn pending(&self) -> usize {
        self.active.borrow().len()
    }
}
