//! Interactive-element predicate, independent of any DOM binding.

use crate::constants::INTERACTIVE_SELECTORS;

/// Minimal view of an element in a containment tree.
pub trait TargetElement: Sized {
    /// Whether this element alone matches a CSS selector.
    fn matches_selector(&self, selector: &str) -> bool;
    fn parent(&self) -> Option<Self>;
}

/// True when `el` or any of its ancestors matches one of the interactive
/// selectors (links, buttons, cards, nav links, form fields).
pub fn is_interactive<E: TargetElement>(el: &E) -> bool {
    if matches_any(el) {
        return true;
    }
    let mut current = el.parent();
    while let Some(node) = current {
        if matches_any(&node) {
            return true;
        }
        current = node.parent();
    }
    false
}

fn matches_any<E: TargetElement>(el: &E) -> bool {
    INTERACTIVE_SELECTORS
        .iter()
        .any(|sel| el.matches_selector(sel))
}
