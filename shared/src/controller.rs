//! Panel registry and the one-open-at-a-time policy.
//!
//! The controller never renders anything. It holds opaque handles supplied
//! by the view layer and, when a panel reports a toggle, asks the other
//! handles to close.

use crate::config::AccordionConfig;
use crate::error::HandleError;
use crate::types::{PanelId, PanelState};

/// Live reference to a rendered collapsible element.
pub trait CollapsibleHandle {
    /// Current open state, or `None` if the element cannot be resolved.
    fn is_open(&self) -> Option<bool>;

    fn force_close(&self) -> Result<(), HandleError>;
}

/// Partial panel data passed to [`AccordionController::register`].
#[derive(Debug, Clone)]
pub struct PanelFragment<E, S> {
    pub element: Option<E>,
    pub summary: Option<S>,
}

impl<E, S> Default for PanelFragment<E, S> {
    fn default() -> Self {
        Self {
            element: None,
            summary: None,
        }
    }
}

impl<E, S> PanelFragment<E, S> {
    pub fn element(element: E) -> Self {
        Self {
            element: Some(element),
            summary: None,
        }
    }

    pub fn summary(summary: S) -> Self {
        Self {
            element: None,
            summary: Some(summary),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelEntry<E, S> {
    element: Option<E>,
    summary: Option<S>,
}

impl<E, S> PanelEntry<E, S> {
    fn empty() -> Self {
        Self {
            element: None,
            summary: None,
        }
    }

    /// Fields present in the fragment replace ours, absent ones are kept.
    fn merge(&mut self, fragment: PanelFragment<E, S>) {
        if let Some(element) = fragment.element {
            self.element = Some(element);
        }
        if let Some(summary) = fragment.summary {
            self.summary = Some(summary);
        }
    }

    pub fn element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    pub fn summary(&self) -> Option<&S> {
        self.summary.as_ref()
    }

    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }
}

impl<E: CollapsibleHandle, S> PanelEntry<E, S> {
    pub fn is_open(&self) -> Option<bool> {
        self.element.as_ref().and_then(CollapsibleHandle::is_open)
    }
}

/// Panels keyed by id, kept in first-registration order.
#[derive(Debug, Clone)]
pub struct PanelRegistry<E, S> {
    entries: Vec<(PanelId, PanelEntry<E, S>)>,
}

impl<E, S> Default for PanelRegistry<E, S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E, S> PanelRegistry<E, S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &PanelId) -> Option<&PanelEntry<E, S>> {
        self.position(id).map(|index| &self.entries[index].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PanelId, &PanelEntry<E, S>)> {
        self.entries.iter().map(|(id, entry)| (id, entry))
    }

    /// Returns `true` when a new entry was created.
    pub fn merge(&mut self, id: PanelId, fragment: PanelFragment<E, S>) -> bool {
        match self.position(&id) {
            Some(index) => {
                self.entries[index].1.merge(fragment);
                false
            }
            None => {
                let mut entry = PanelEntry::empty();
                entry.merge(fragment);
                self.entries.push((id, entry));
                true
            }
        }
    }

    pub fn remove(&mut self, id: &PanelId) -> Option<PanelEntry<E, S>> {
        self.position(id)
            .map(|index| self.entries.remove(index).1)
    }

    fn position(&self, id: &PanelId) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| entry_id == id)
    }
}

/// Result of one exclusivity pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Panels that were open and have been forced closed.
    pub closed: Vec<PanelId>,
    /// Panels whose element could not be resolved.
    pub skipped: Vec<PanelId>,
}

impl ToggleOutcome {
    pub fn is_noop(&self) -> bool {
        self.closed.is_empty() && self.skipped.is_empty()
    }
}

/// Coordinates the panels of a single accordion.
#[derive(Debug, Clone)]
pub struct AccordionController<E, S = ()> {
    config: AccordionConfig,
    registry: PanelRegistry<E, S>,
    /// Panels closed by the last passes whose own toggle report is still due.
    pending_close: Vec<PanelId>,
}

impl<E: CollapsibleHandle, S> AccordionController<E, S> {
    pub fn new(config: AccordionConfig) -> Self {
        Self {
            config,
            registry: PanelRegistry::new(),
            pending_close: Vec::new(),
        }
    }

    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    pub fn set_exclusive_open(&mut self, exclusive_open: bool) {
        self.config.exclusive_open = exclusive_open;
    }

    pub fn registry(&self) -> &PanelRegistry<E, S> {
        &self.registry
    }

    /// Merges `fragment` into the entry for `id`, creating it if needed.
    pub fn register(&mut self, id: PanelId, fragment: PanelFragment<E, S>) {
        let has_element = fragment.element.is_some();
        let has_summary = fragment.summary.is_some();
        let created = self.registry.merge(id.clone(), fragment);
        log::trace!(
            "register panel {} (new: {}, element: {}, summary: {})",
            id,
            created,
            has_element,
            has_summary
        );
    }

    pub fn unregister(&mut self, id: &PanelId) -> bool {
        let removed = self.registry.remove(id).is_some();
        self.pending_close.retain(|pending| pending != id);
        if removed {
            log::trace!("unregister panel {}", id);
        }
        removed
    }

    /// Called after the panel `source` changed state natively.
    ///
    /// With the exclusive policy enabled, every other open panel is forced
    /// closed, whether the source opened or closed. The report a panel makes
    /// after being forced closed by an earlier pass is consumed without
    /// running a new pass.
    pub fn notify_toggled(&mut self, source: &PanelId) -> ToggleOutcome {
        let mut outcome = ToggleOutcome::default();

        let was_forced = match self.pending_close.iter().position(|id| id == source) {
            Some(index) => {
                self.pending_close.remove(index);
                true
            }
            None => false,
        };

        if !self.config.exclusive_open {
            return outcome;
        }

        let source_open = self.registry.get(source).and_then(PanelEntry::is_open);
        if was_forced && source_open != Some(true) {
            log::trace!("panel {} reported its forced close", source);
            return outcome;
        }

        for (id, entry) in self.registry.iter() {
            if id == source {
                continue;
            }

            let Some(element) = entry.element() else {
                log::debug!("panel {} has no element handle, skipping", id);
                outcome.skipped.push(id.clone());
                continue;
            };

            match element.is_open() {
                Some(true) => match element.force_close() {
                    Ok(()) => {
                        if !self.pending_close.contains(id) {
                            self.pending_close.push(id.clone());
                        }
                        outcome.closed.push(id.clone());
                    }
                    Err(e) => {
                        log::debug!("could not close panel {}: {}", id, e);
                        outcome.skipped.push(id.clone());
                    }
                },
                Some(false) => {}
                None => {
                    log::debug!("panel {} is not mounted, skipping", id);
                    outcome.skipped.push(id.clone());
                }
            }
        }

        if !outcome.closed.is_empty() {
            log::debug!(
                "panel {} toggled, closed {} sibling(s)",
                source,
                outcome.closed.len()
            );
        }

        outcome
    }

    pub fn panel_state(&self, id: &PanelId) -> Option<PanelState> {
        self.registry
            .get(id)
            .and_then(PanelEntry::is_open)
            .map(PanelState::from_open)
    }

    pub fn open_panels(&self) -> Vec<PanelId> {
        self.registry
            .iter()
            .filter(|(_, entry)| entry.is_open() == Some(true))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Ids of panels that registered a summary region, in registration order.
    pub fn presentation_order(&self) -> Vec<PanelId> {
        self.registry
            .iter()
            .filter(|(_, entry)| entry.has_summary())
            .map(|(id, _)| id.clone())
            .collect()
    }
}
